//! Structural combinators for synchronous arrows.

use super::Arrow;
use crate::pair::{diagonal, pair};

/// The identity arrow.
pub fn identity<T: 'static>() -> Arrow<T, T> {
    Arrow::identity()
}

/// Run a precomposed `(arrow, input)` pair.
///
/// ```rust
/// use arrowcat::arrow::{evaluate, Arrow};
///
/// let inc = Arrow::new(|x: i32| x + 1);
/// assert_eq!(evaluate((inc.clone(), 41)), inc.pipe(41));
/// ```
pub fn evaluate<S: 'static, T: 'static>((arrow, input): (Arrow<S, T>, S)) -> T {
    arrow.run(input)
}

/// Run `first` then `second` on the same input and pair the results.
///
/// ```rust
/// use arrowcat::arrow::{fork, Arrow};
///
/// let both = fork(Arrow::new(|x: i32| x + 1), Arrow::new(|x: i32| x * 2));
/// assert_eq!(both.run(5), (6, 10));
/// ```
pub fn fork<R, S, T>(first: Arrow<R, S>, second: Arrow<R, T>) -> Arrow<R, (S, T)>
where
    R: Clone + 'static,
    S: 'static,
    T: 'static,
{
    Arrow::new(move |r: R| {
        let (left, right) = diagonal(r);
        let s = first.run(left);
        pair(s, second.run(right))
    })
}

/// Select between two arrows by a predicate on the input.
///
/// The predicate is evaluated on every invocation; nothing is remembered
/// between calls.
///
/// ```rust
/// use arrowcat::arrow::{cases, Arrow};
///
/// let sign = cases(
///     |x: &i32| *x > 0,
///     Arrow::pure("pos"),
///     Arrow::pure("neg"),
/// );
/// assert_eq!(sign.run(5), "pos");
/// assert_eq!(sign.run(-1), "neg");
/// ```
pub fn cases<S, T, P>(predicate: P, then: Arrow<S, T>, otherwise: Arrow<S, T>) -> Arrow<S, T>
where
    S: 'static,
    T: 'static,
    P: Fn(&S) -> bool + Send + Sync + 'static,
{
    Arrow::new(move |s: S| {
        if predicate(&s) {
            then.run(s)
        } else {
            otherwise.run(s)
        }
    })
}

impl<R: 'static, S: 'static, T: 'static> Arrow<R, (S, T)> {
    /// Split a forked arrow over a pair of inputs.
    ///
    /// Runs `self` on both halves and keeps the first component of the first
    /// result and the second component of the second. Both invocations
    /// always happen.
    pub fn unfork(self) -> Arrow<(R, R), (S, T)> {
        Arrow::new(move |(r1, r2): (R, R)| {
            let (s, _) = self.run(r1);
            let (_, t) = self.run(r2);
            (s, t)
        })
    }
}

impl<R: 'static, S: 'static, T: 'static> Arrow<(R, S), T> {
    /// Accept the pair in swapped order.
    pub fn swap(self) -> Arrow<(S, R), T> {
        Arrow::new(move |(s, r): (S, R)| self.run((r, s)))
    }
}

impl<R: 'static, S: 'static, T: 'static> Arrow<R, Arrow<S, T>> {
    /// Turn a curried arrow into one over pairs.
    pub fn uncurry(self) -> Arrow<(R, S), T> {
        Arrow::new(move |(r, s): (R, S)| self.run(r).run(s))
    }
}

impl<S: Send + 'static, T: Send + 'static> Arrow<S, T> {
    /// Lift into the async flavor. The returned arrow never suspends.
    pub fn into_async(self) -> crate::AsyncArrow<S, T> {
        crate::AsyncArrow::from_fn(move |s| self.run(s))
    }

    /// Lift into the scoped flavor, ignoring the context.
    pub fn into_scoped<C: Sync + 'static>(self) -> crate::ScopedArrow<C, S, T> {
        crate::ScopedArrow::from_fn(move |_: &C, s| self.run(s))
    }
}
