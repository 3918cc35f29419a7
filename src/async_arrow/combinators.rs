//! Structural combinators for async arrows.

use std::sync::Arc;

use futures::future::BoxFuture;

use super::AsyncArrow;
use crate::pair::{diagonal, pair};

/// The identity arrow.
pub fn identity<T: Send + 'static>() -> AsyncArrow<T, T> {
    AsyncArrow::identity()
}

/// Run a precomposed `(arrow, input)` pair.
pub fn evaluate<S, T>((arrow, input): (AsyncArrow<S, T>, S)) -> BoxFuture<'static, T>
where
    S: Send + 'static,
    T: Send + 'static,
{
    arrow.run(input)
}

/// Run `first` to completion, then `second`, on the same input.
///
/// ```rust
/// use arrowcat::async_arrow::{fork, AsyncArrow};
///
/// # tokio_test::block_on(async {
/// let both = fork(
///     AsyncArrow::from_fn(|x: i32| x + 1),
///     AsyncArrow::from_fn(|x: i32| x * 2),
/// );
/// assert_eq!(both.run(5).await, (6, 10));
/// # });
/// ```
pub fn fork<R, S, T>(first: AsyncArrow<R, S>, second: AsyncArrow<R, T>) -> AsyncArrow<R, (S, T)>
where
    R: Clone + Send + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    AsyncArrow::new(move |r: R| {
        let (first, second) = (first.clone(), second.clone());
        async move {
            let (left, right) = diagonal(r);
            let s = first.run(left).await;
            pair(s, second.run(right).await)
        }
    })
}

/// Select between two arrows by a predicate on the input.
pub fn cases<S, T, P>(
    predicate: P,
    then: AsyncArrow<S, T>,
    otherwise: AsyncArrow<S, T>,
) -> AsyncArrow<S, T>
where
    S: Send + 'static,
    T: Send + 'static,
    P: Fn(&S) -> bool + Send + Sync + 'static,
{
    let predicate = Arc::new(predicate);
    AsyncArrow::new(move |s: S| {
        let (predicate, then, otherwise) = (Arc::clone(&predicate), then.clone(), otherwise.clone());
        async move {
            let branch = if predicate(&s) { then } else { otherwise };
            branch.run(s).await
        }
    })
}

impl<R, S, T> AsyncArrow<R, (S, T)>
where
    R: Send + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    /// Split a forked arrow over a pair of inputs, running it on both halves
    /// in order and keeping one component of each result.
    pub fn unfork(self) -> AsyncArrow<(R, R), (S, T)> {
        AsyncArrow::new(move |(r1, r2): (R, R)| {
            let arrow = self.clone();
            async move {
                let (s, _) = arrow.run(r1).await;
                let (_, t) = arrow.run(r2).await;
                (s, t)
            }
        })
    }
}

impl<R, S, T> AsyncArrow<(R, S), T>
where
    R: Send + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    /// Accept the pair in swapped order.
    pub fn swap(self) -> AsyncArrow<(S, R), T> {
        self.co_map(|(s, r): (S, R)| (r, s))
    }
}

impl<R, S, T> AsyncArrow<R, AsyncArrow<S, T>>
where
    R: Send + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    /// Turn a curried arrow into one over pairs.
    pub fn uncurry(self) -> AsyncArrow<(R, S), T> {
        AsyncArrow::new(move |(r, s): (R, S)| {
            let curried = self.clone();
            async move { curried.run(r).await.run(s).await }
        })
    }
}

impl<S, T> AsyncArrow<S, T>
where
    S: Send + 'static,
    T: Send + 'static,
{
    /// Lift into the scoped flavor, ignoring the context.
    pub fn into_scoped<C: Sync + 'static>(self) -> crate::ScopedArrow<C, S, T> {
        crate::ScopedArrow::new(move |_: &C, s| self.run(s))
    }
}
