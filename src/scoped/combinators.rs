//! Structural combinators for scoped arrows.

use std::sync::Arc;

use futures::future::BoxFuture;

use super::ScopedArrow;
use crate::pair::{diagonal, pair};

/// The identity arrow.
pub fn identity<C: Sync + 'static, T: Send + 'static>() -> ScopedArrow<C, T, T> {
    ScopedArrow::identity()
}

/// Run a precomposed `(arrow, input)` pair under `ctx`.
///
/// ```rust
/// use arrowcat::scoped::{evaluate, ScopedArrow};
///
/// let scale = ScopedArrow::from_fn(|factor: &i32, x: i32| x * factor);
///
/// # tokio_test::block_on(async {
/// assert_eq!(evaluate(&3, (scale, 5)).await, 15);
/// # });
/// ```
pub fn evaluate<'c, C, S, T>(ctx: &'c C, (arrow, input): (ScopedArrow<C, S, T>, S)) -> BoxFuture<'c, T>
where
    C: Sync + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    arrow.run(ctx, input)
}

/// Run `first` then `second` on the same context and input.
pub fn fork<C, R, S, T>(
    first: ScopedArrow<C, R, S>,
    second: ScopedArrow<C, R, T>,
) -> ScopedArrow<C, R, (S, T)>
where
    C: Sync + 'static,
    R: Clone + Send + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    ScopedArrow::<C, R, (S, T)>::new(move |ctx, r: R| {
        let (first, second) = (first.clone(), second.clone());
        Box::pin(async move {
            let (left, right) = diagonal(r);
            let s = first.run(ctx, left).await;
            pair(s, second.run(ctx, right).await)
        })
    })
}

/// Select between two arrows by a predicate on the input.
///
/// The predicate sees only the input; both branches receive the caller's
/// context.
pub fn cases<C, S, T, P>(
    predicate: P,
    then: ScopedArrow<C, S, T>,
    otherwise: ScopedArrow<C, S, T>,
) -> ScopedArrow<C, S, T>
where
    C: Sync + 'static,
    S: Send + 'static,
    T: Send + 'static,
    P: Fn(&S) -> bool + Send + Sync + 'static,
{
    let predicate = Arc::new(predicate);
    ScopedArrow::<C, S, T>::new(move |ctx, s: S| {
        let (predicate, then, otherwise) = (Arc::clone(&predicate), then.clone(), otherwise.clone());
        Box::pin(async move {
            let branch = if predicate(&s) { then } else { otherwise };
            branch.run(ctx, s).await
        })
    })
}

impl<C, R, S, T> ScopedArrow<C, R, (S, T)>
where
    C: Sync + 'static,
    R: Send + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    /// Split a forked arrow over a pair of inputs. Runs on both halves in
    /// order and keeps one component of each result.
    pub fn unfork(self) -> ScopedArrow<C, (R, R), (S, T)> {
        ScopedArrow::<C, (R, R), (S, T)>::new(move |ctx, (r1, r2): (R, R)| {
            let arrow = self.clone();
            Box::pin(async move {
                let (s, _) = arrow.run(ctx, r1).await;
                let (_, t) = arrow.run(ctx, r2).await;
                (s, t)
            })
        })
    }
}

impl<C, R, S, T> ScopedArrow<C, (R, S), T>
where
    C: Sync + 'static,
    R: Send + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    /// Accept the pair in swapped order.
    pub fn swap(self) -> ScopedArrow<C, (S, R), T> {
        self.co_map(|(s, r): (S, R)| (r, s))
    }
}

impl<C, R, S, T> ScopedArrow<C, R, ScopedArrow<C, S, T>>
where
    C: Sync + 'static,
    R: Send + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    /// Turn a curried arrow into one over pairs; both stages share the context.
    pub fn uncurry(self) -> ScopedArrow<C, (R, S), T> {
        ScopedArrow::<C, (R, S), T>::new(move |ctx, (r, s): (R, S)| {
            let curried = self.clone();
            Box::pin(async move { curried.run(ctx, r).await.run(ctx, s).await })
        })
    }
}
