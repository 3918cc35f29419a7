//! Kleisli arrows for the synchronous flavor.

use std::fmt;

use super::Arrow;

/// A Kleisli arrow: `S -> Arrow<B, T>`.
///
/// Kleisli arrows compose by flattening. The next step's *construction*
/// depends on the previous result, not only its execution.
///
/// ```rust
/// use arrowcat::{Arrow, Kleisli};
///
/// // Scale by the input, then offset by the shared source.
/// let scale = Kleisli::from_fn(|k: i32| Arrow::new(move |b: i32| k * b));
/// let offset = Kleisli::from_fn(|v: i32| Arrow::new(move |b: i32| v + b));
///
/// let both = scale.then(offset);
/// // scale(3)(10) = 30, offset(30)(10) = 40
/// assert_eq!(both.run(3).run(10), 40);
/// ```
pub struct Kleisli<B, S, T> {
    arrow: Arrow<S, Arrow<B, T>>,
}

impl<B, S, T> Clone for Kleisli<B, S, T> {
    fn clone(&self) -> Self {
        Kleisli {
            arrow: self.arrow.clone(),
        }
    }
}

impl<B, S, T> fmt::Debug for Kleisli<B, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Kleisli")
            .field("arrow", &self.arrow)
            .finish()
    }
}

impl<B: 'static, S: 'static, T: 'static> Kleisli<B, S, T> {
    /// Wrap an arrow whose target is itself an arrow.
    pub fn new(arrow: Arrow<S, Arrow<B, T>>) -> Self {
        Kleisli { arrow }
    }

    /// Wrap an arrow-producing function.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(S) -> Arrow<B, T> + Send + Sync + 'static,
    {
        Kleisli::new(Arrow::new(f))
    }

    /// The Kleisli arrow that ignores its input and returns the constant arrow `t`.
    pub fn constant(t: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Kleisli::from_fn(move |_| Arrow::pure(t.clone()))
    }

    /// Build the arrow for input `s`.
    pub fn run(&self, s: S) -> Arrow<B, T> {
        self.arrow.run(s)
    }

    /// Unwrap the underlying arrow.
    pub fn into_arrow(self) -> Arrow<S, Arrow<B, T>> {
        self.arrow
    }

    /// Kleisli composition: `self` first, then `next`.
    pub fn then<U: 'static>(self, next: Kleisli<B, T, U>) -> Kleisli<B, S, U>
    where
        B: Clone,
    {
        let next = next.into_arrow();
        Kleisli::from_fn(move |s| self.run(s).then(next.clone()).multiply())
    }
}

impl<B: 'static, T: Clone + Send + Sync + 'static> Kleisli<B, T, T> {
    /// Identity element of Kleisli composition: `t -> pure(t)`.
    pub fn unit() -> Self {
        Kleisli::from_fn(Arrow::<B, T>::pure)
    }
}

/// Kleisli multiplication: `first` then `second`.
pub fn kleisli_multiply<B, S, T, U>(
    first: Kleisli<B, S, T>,
    second: Kleisli<B, T, U>,
) -> Kleisli<B, S, U>
where
    B: Clone + 'static,
    S: 'static,
    T: 'static,
    U: 'static,
{
    first.then(second)
}
