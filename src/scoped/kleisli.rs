//! Kleisli arrows for the scoped flavor.

use std::fmt;

use futures::future::BoxFuture;

use super::ScopedArrow;

/// A Kleisli arrow: `S -> ScopedArrow<C, B, T>`, built under a context.
///
/// The context used to build the next arrow and the context used to run it
/// are both supplied by the caller; neither is stored.
pub struct ScopedKleisli<C, B, S, T> {
    arrow: ScopedArrow<C, S, ScopedArrow<C, B, T>>,
}

impl<C, B, S, T> Clone for ScopedKleisli<C, B, S, T> {
    fn clone(&self) -> Self {
        ScopedKleisli {
            arrow: self.arrow.clone(),
        }
    }
}

impl<C, B, S, T> fmt::Debug for ScopedKleisli<C, B, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedKleisli")
            .field("arrow", &self.arrow)
            .finish()
    }
}

impl<C, B, S, T> ScopedKleisli<C, B, S, T>
where
    C: Sync + 'static,
    B: Send + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    /// Wrap a context-borrowing async function that builds the next arrow.
    pub fn new<F>(f: F) -> Self
    where
        F: for<'c> Fn(&'c C, S) -> BoxFuture<'c, ScopedArrow<C, B, T>> + Send + Sync + 'static,
    {
        ScopedKleisli::from_arrow(ScopedArrow::new(f))
    }

    /// Wrap a plain function that builds the next arrow.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(S) -> ScopedArrow<C, B, T> + Send + Sync + 'static,
    {
        ScopedKleisli::from_arrow(ScopedArrow::from_fn(move |_: &C, s| f(s)))
    }

    /// Wrap an arrow whose target is itself an arrow.
    pub fn from_arrow(arrow: ScopedArrow<C, S, ScopedArrow<C, B, T>>) -> Self {
        ScopedKleisli { arrow }
    }

    /// The Kleisli arrow that ignores its input and returns the constant arrow `t`.
    pub fn constant(t: T) -> Self
    where
        T: Clone + Sync,
    {
        ScopedKleisli::from_fn(move |_| ScopedArrow::pure(t.clone()))
    }

    /// Build the arrow for input `s` under `ctx`.
    pub fn run<'c>(&self, ctx: &'c C, s: S) -> BoxFuture<'c, ScopedArrow<C, B, T>> {
        self.arrow.run(ctx, s)
    }

    /// Unwrap the underlying arrow.
    pub fn into_arrow(self) -> ScopedArrow<C, S, ScopedArrow<C, B, T>> {
        self.arrow
    }

    /// Kleisli composition: `self` first, then `next`.
    pub fn then<U: Send + 'static>(
        self,
        next: ScopedKleisli<C, B, T, U>,
    ) -> ScopedKleisli<C, B, S, U>
    where
        B: Clone,
    {
        let next = next.into_arrow();
        ScopedKleisli::<C, B, S, U>::new(move |ctx: &C, s| {
            let (first, next) = (self.clone(), next.clone());
            Box::pin(async move { first.run(ctx, s).await.then(next).multiply() })
        })
    }
}

impl<C, B, T> ScopedKleisli<C, B, T, T>
where
    C: Sync + 'static,
    B: Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    /// Identity element of Kleisli composition: `t -> pure(t)`.
    pub fn unit() -> Self {
        ScopedKleisli::from_fn(ScopedArrow::<C, B, T>::pure)
    }
}

/// Kleisli multiplication: `first` then `second`.
pub fn kleisli_multiply<C, B, S, T, U>(
    first: ScopedKleisli<C, B, S, T>,
    second: ScopedKleisli<C, B, T, U>,
) -> ScopedKleisli<C, B, S, U>
where
    C: Sync + 'static,
    B: Clone + Send + 'static,
    S: Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
{
    first.then(second)
}
