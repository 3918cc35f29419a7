//! Kleisli arrows for the async flavor.

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;

use super::AsyncArrow;

/// A Kleisli arrow: `S -> AsyncArrow<B, T>`, itself produced asynchronously.
pub struct AsyncKleisli<B, S, T> {
    arrow: AsyncArrow<S, AsyncArrow<B, T>>,
}

impl<B, S, T> Clone for AsyncKleisli<B, S, T> {
    fn clone(&self) -> Self {
        AsyncKleisli {
            arrow: self.arrow.clone(),
        }
    }
}

impl<B, S, T> fmt::Debug for AsyncKleisli<B, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncKleisli")
            .field("arrow", &self.arrow)
            .finish()
    }
}

impl<B, S, T> AsyncKleisli<B, S, T>
where
    B: Send + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    /// Wrap an async function that builds the next arrow.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(S) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = AsyncArrow<B, T>> + Send + 'static,
    {
        AsyncKleisli::from_arrow(AsyncArrow::new(f))
    }

    /// Wrap a plain function that builds the next arrow.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(S) -> AsyncArrow<B, T> + Send + Sync + 'static,
    {
        AsyncKleisli::from_arrow(AsyncArrow::from_fn(f))
    }

    /// Wrap an arrow whose target is itself an arrow.
    pub fn from_arrow(arrow: AsyncArrow<S, AsyncArrow<B, T>>) -> Self {
        AsyncKleisli { arrow }
    }

    /// The Kleisli arrow that ignores its input and returns the constant arrow `t`.
    pub fn constant(t: T) -> Self
    where
        T: Clone + Sync,
    {
        AsyncKleisli::from_fn(move |_| AsyncArrow::pure(t.clone()))
    }

    /// Build the arrow for input `s`.
    pub fn run(&self, s: S) -> BoxFuture<'static, AsyncArrow<B, T>> {
        self.arrow.run(s)
    }

    /// Unwrap the underlying arrow.
    pub fn into_arrow(self) -> AsyncArrow<S, AsyncArrow<B, T>> {
        self.arrow
    }

    /// Kleisli composition: `self` first, then `next`.
    ///
    /// For input `s` the first arrow is built and awaited before `next` is
    /// consulted; the resulting arrow is flattened over `B`.
    pub fn then<U: Send + 'static>(self, next: AsyncKleisli<B, T, U>) -> AsyncKleisli<B, S, U>
    where
        B: Clone,
    {
        let next = next.into_arrow();
        AsyncKleisli::new(move |s| {
            let (first, next) = (self.clone(), next.clone());
            async move { first.run(s).await.then(next).multiply() }
        })
    }
}

impl<B, T> AsyncKleisli<B, T, T>
where
    B: Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    /// Identity element of Kleisli composition: `t -> pure(t)`.
    pub fn unit() -> Self {
        AsyncKleisli::from_fn(AsyncArrow::<B, T>::pure)
    }
}

/// Kleisli multiplication: `first` then `second`.
pub fn kleisli_multiply<B, S, T, U>(
    first: AsyncKleisli<B, S, T>,
    second: AsyncKleisli<B, T, U>,
) -> AsyncKleisli<B, S, U>
where
    B: Clone + Send + 'static,
    S: Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
{
    first.then(second)
}
