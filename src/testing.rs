//! Testing utilities for arrows.
//!
//! This module provides a recording context for scoped arrows, assertion
//! macros that compare arrows on sampled inputs, and law checkers for the
//! category and monad laws.
//!
//! # Examples
//!
//! ## RecordingContext
//!
//! ```rust
//! use arrowcat::testing::RecordingContext;
//! use arrowcat::ScopedArrow;
//!
//! let step = ScopedArrow::from_fn(|ctx: &RecordingContext, x: i32| {
//!     ctx.record(format!("step {x}"));
//!     x + 1
//! });
//!
//! let ctx = RecordingContext::new("request-1");
//! # tokio_test::block_on(async {
//! assert_eq!(step.clone().then(step).run(&ctx, 1).await, 3);
//! # });
//! assert_eq!(ctx.events(), vec!["step 1", "step 2"]);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use arrowcat::{assert_arrows_agree, Arrow};
//!
//! let f = Arrow::new(|x: i32| x + 1);
//! assert_arrows_agree!(f.clone().then(Arrow::identity()), f, [0, 1, 2]);
//! ```

use std::fmt::Debug;
use std::sync::{Arc, Mutex, PoisonError};

use futures::executor::block_on;

use crate::{Arrow, AsyncArrow, ScopedArrow};

/// A context that records the events arrows report to it.
///
/// Clones share the same event log, so a test can keep one handle and pass
/// another to the arrow under test.
#[derive(Debug, Clone)]
pub struct RecordingContext {
    name: String,
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingContext {
    /// Create an empty context with a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The context's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an event to the shared log.
    pub fn record(&self, event: impl Into<String>) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.into());
    }

    /// Snapshot of the recorded events, oldest first.
    pub fn events(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Assert that two synchronous arrows agree on every sample.
///
/// # Example
///
/// ```rust
/// use arrowcat::{assert_arrows_agree, Arrow};
///
/// let f = Arrow::new(|x: i32| x * 2);
/// let g = Arrow::new(|x: i32| x + x);
/// assert_arrows_agree!(f, g, [-1, 0, 1]);
/// ```
#[macro_export]
macro_rules! assert_arrows_agree {
    ($left:expr, $right:expr, $samples:expr) => {{
        let left = $left;
        let right = $right;
        for sample in $samples {
            let l = left.run(::std::clone::Clone::clone(&sample));
            let r = right.run(::std::clone::Clone::clone(&sample));
            if l != r {
                panic!(
                    "Arrows disagree on {:?}: left = {:?}, right = {:?}",
                    sample, l, r
                );
            }
        }
    }};
}

/// Check `identity.then(f) == f == f.then(identity)` on every sample.
pub fn assert_identity_laws<S, T>(f: &Arrow<S, T>, samples: impl IntoIterator<Item = S>)
where
    S: Clone + Debug + 'static,
    T: PartialEq + Debug + 'static,
{
    let left = Arrow::identity().then(f.clone());
    let right = f.clone().then(Arrow::identity());
    for s in samples {
        let expected = f.run(s.clone());
        assert_eq!(left.run(s.clone()), expected, "left identity failed on {s:?}");
        assert_eq!(right.run(s.clone()), expected, "right identity failed on {s:?}");
    }
}

/// Check `(f.then(g)).then(h) == f.then(g.then(h))` on every sample.
pub fn assert_associative<A, B, C, D>(
    f: &Arrow<A, B>,
    g: &Arrow<B, C>,
    h: &Arrow<C, D>,
    samples: impl IntoIterator<Item = A>,
) where
    A: Clone + Debug + 'static,
    B: 'static,
    C: 'static,
    D: PartialEq + Debug + 'static,
{
    let left = f.clone().then(g.clone()).then(h.clone());
    let right = f.clone().then(g.clone().then(h.clone()));
    for a in samples {
        assert_eq!(
            left.run(a.clone()),
            right.run(a.clone()),
            "associativity failed on {a:?}"
        );
    }
}

/// Check both monad unit laws for `m` and `k` on every sample.
///
/// Left unit: `pure(t).bind(k) == k(t)`. Right unit: `m.bind(pure) == m`.
pub fn assert_monad_unit_laws<S, T, U, K>(
    m: &Arrow<S, T>,
    t: T,
    k: K,
    samples: impl IntoIterator<Item = S>,
) where
    S: Clone + Debug + 'static,
    T: Clone + PartialEq + Debug + Send + Sync + 'static,
    U: PartialEq + Debug + 'static,
    K: Fn(T) -> Arrow<S, U> + Clone + Send + Sync + 'static,
{
    let left = Arrow::pure(t.clone()).bind(k.clone());
    let expected_left = k(t);
    let right = m.clone().bind(Arrow::pure);
    for s in samples {
        assert_eq!(left.run(s.clone()), expected_left.run(s.clone()), "left unit failed on {s:?}");
        assert_eq!(right.run(s.clone()), m.run(s.clone()), "right unit failed on {s:?}");
    }
}

/// Async counterpart of [`assert_identity_laws`]. Blocks on each sample.
pub fn assert_async_identity_laws<S, T>(f: &AsyncArrow<S, T>, samples: impl IntoIterator<Item = S>)
where
    S: Clone + Debug + Send + 'static,
    T: PartialEq + Debug + Send + 'static,
{
    let left = AsyncArrow::identity().then(f.clone());
    let right = f.clone().then(AsyncArrow::identity());
    for s in samples {
        let expected = block_on(f.run(s.clone()));
        assert_eq!(block_on(left.run(s.clone())), expected, "left identity failed on {s:?}");
        assert_eq!(block_on(right.run(s.clone())), expected, "right identity failed on {s:?}");
    }
}

/// Async counterpart of [`assert_associative`].
pub fn assert_async_associative<A, B, C, D>(
    f: &AsyncArrow<A, B>,
    g: &AsyncArrow<B, C>,
    h: &AsyncArrow<C, D>,
    samples: impl IntoIterator<Item = A>,
) where
    A: Clone + Debug + Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    D: PartialEq + Debug + Send + 'static,
{
    let left = f.clone().then(g.clone()).then(h.clone());
    let right = f.clone().then(g.clone().then(h.clone()));
    for a in samples {
        assert_eq!(
            block_on(left.run(a.clone())),
            block_on(right.run(a.clone())),
            "associativity failed on {a:?}"
        );
    }
}

/// Scoped counterpart of [`assert_identity_laws`], run under `ctx`.
pub fn assert_scoped_identity_laws<C, S, T>(
    ctx: &C,
    f: &ScopedArrow<C, S, T>,
    samples: impl IntoIterator<Item = S>,
) where
    C: Sync + 'static,
    S: Clone + Debug + Send + 'static,
    T: PartialEq + Debug + Send + 'static,
{
    let left = ScopedArrow::identity().then(f.clone());
    let right = f.clone().then(ScopedArrow::identity());
    for s in samples {
        let expected = block_on(f.run(ctx, s.clone()));
        assert_eq!(block_on(left.run(ctx, s.clone())), expected, "left identity failed on {s:?}");
        assert_eq!(block_on(right.run(ctx, s.clone())), expected, "right identity failed on {s:?}");
    }
}

/// Scoped counterpart of [`assert_associative`], run under `ctx`.
pub fn assert_scoped_associative<Ctx, A, B, C, D>(
    ctx: &Ctx,
    f: &ScopedArrow<Ctx, A, B>,
    g: &ScopedArrow<Ctx, B, C>,
    h: &ScopedArrow<Ctx, C, D>,
    samples: impl IntoIterator<Item = A>,
) where
    Ctx: Sync + 'static,
    A: Clone + Debug + Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
    D: PartialEq + Debug + Send + 'static,
{
    let left = f.clone().then(g.clone()).then(h.clone());
    let right = f.clone().then(g.clone().then(h.clone()));
    for a in samples {
        assert_eq!(
            block_on(left.run(ctx, a.clone())),
            block_on(right.run(ctx, a.clone())),
            "associativity failed on {a:?}"
        );
    }
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// Strategy producing affine arrows `x -> a * x + b` with wrapping arithmetic.
///
/// Handy for property tests of the composition laws.
#[cfg(feature = "proptest")]
pub fn affine_arrow() -> impl Strategy<Value = Arrow<i64, i64>> {
    (any::<i64>(), any::<i64>())
        .prop_map(|(a, b)| Arrow::new(move |x: i64| a.wrapping_mul(x).wrapping_add(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_context_shares_log_between_clones() {
        let ctx = RecordingContext::new("shared");
        let other = ctx.clone();
        other.record("from clone");
        ctx.record("from original");
        assert_eq!(ctx.events(), vec!["from clone", "from original"]);
        assert_eq!(other.name(), "shared");
    }

    #[test]
    fn assert_arrows_agree_macro() {
        let f = Arrow::new(|x: i32| x * 3);
        let g = Arrow::new(|x: i32| x + x + x);
        assert_arrows_agree!(f, g, [0, 5, -5]);
    }

    #[test]
    #[should_panic(expected = "Arrows disagree on 1")]
    fn assert_arrows_agree_panics_on_mismatch() {
        let f = Arrow::new(|x: i32| x);
        let g = Arrow::new(|x: i32| x * 2);
        assert_arrows_agree!(f, g, [0, 1]);
    }

    #[test]
    fn identity_and_associativity_hold_for_sync_arrows() {
        let f = Arrow::new(|x: i32| x - 3);
        let g = Arrow::new(|x: i32| x * 7);
        let h = Arrow::new(|x: i32| x.to_string());
        assert_identity_laws(&f, [-1, 0, 9]);
        assert_associative(&f, &g, &h, [-1, 0, 9]);
    }

    #[test]
    fn monad_unit_laws_hold() {
        let m = Arrow::new(|x: i32| x * x);
        let k = |t: i32| Arrow::new(move |s: i32| t + s);
        assert_monad_unit_laws(&m, 4, k, [0, 2, -3]);
    }

    #[test]
    fn laws_hold_for_async_and_scoped_arrows() {
        let f = AsyncArrow::from_fn(|x: u8| u16::from(x) + 1);
        let g = AsyncArrow::from_fn(|x: u16| x * 2);
        let h = AsyncArrow::from_fn(|x: u16| x % 7);
        assert_async_identity_laws(&f, [0, 1, 255]);
        assert_async_associative(&f, &g, &h, [0, 1, 255]);

        let ctx = RecordingContext::new("laws");
        let sf = ScopedArrow::from_fn(|ctx: &RecordingContext, x: i32| {
            ctx.record("f");
            x + 1
        });
        let sg = ScopedArrow::from_fn(|_: &RecordingContext, x: i32| x * 5);
        let sh = ScopedArrow::from_fn(|_: &RecordingContext, x: i32| x - 2);
        assert_scoped_identity_laws(&ctx, &sf, [1, 2]);
        assert_scoped_associative(&ctx, &sf, &sg, &sh, [1, 2]);
        assert!(ctx.events().iter().all(|e| e == "f"));
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::*;

        proptest! {
            #[test]
            fn affine_arrows_obey_identity(f in affine_arrow(), x in any::<i64>()) {
                prop_assert_eq!(Arrow::identity().then(f.clone()).run(x), f.run(x));
            }
        }
    }
}
