//! Property-based tests for the category, functor, applicative and monad laws
//!
//! Run with: cargo test --features proptest

#![cfg(feature = "proptest")]

use arrowcat::arrow::{self, compose};
use arrowcat::testing::affine_arrow;
use arrowcat::{async_arrow, scoped};
use arrowcat::{Arrow, AsyncArrow, Kleisli, ScopedArrow};
use proptest::prelude::*;
use tokio_test::block_on;

/// Coefficients for the async and scoped affine arrows.
fn affine() -> impl Strategy<Value = (i64, i64)> {
    (-1000i64..1000, -1000i64..1000)
}

fn sync_affine((a, b): (i64, i64)) -> Arrow<i64, i64> {
    Arrow::new(move |x: i64| a.wrapping_mul(x).wrapping_add(b))
}

fn async_affine((a, b): (i64, i64)) -> AsyncArrow<i64, i64> {
    AsyncArrow::new(move |x: i64| async move { a.wrapping_mul(x).wrapping_add(b) })
}

/// Arrow-valued arrow: `r -> (x -> g(x) + f(r))`.
fn curried(f: Arrow<i64, i64>, g: Arrow<i64, i64>) -> Arrow<i64, Arrow<i64, i64>> {
    f.map(move |offset| g.clone().map(move |y| y.wrapping_add(offset)))
}

fn async_curried(
    f: AsyncArrow<i64, i64>,
    g: AsyncArrow<i64, i64>,
) -> AsyncArrow<i64, AsyncArrow<i64, i64>> {
    f.map(move |offset| g.clone().map(move |y| y.wrapping_add(offset)))
}

fn scoped_curried(
    f: ScopedArrow<i64, i64, i64>,
    g: ScopedArrow<i64, i64, i64>,
) -> ScopedArrow<i64, i64, ScopedArrow<i64, i64, i64>> {
    f.map(move |offset| g.clone().map(move |y| y.wrapping_add(offset)))
}

/// Affine arrow whose offset also adds the context.
fn scoped_affine((a, b): (i64, i64)) -> ScopedArrow<i64, i64, i64> {
    ScopedArrow::from_fn(move |ctx: &i64, x: i64| {
        a.wrapping_mul(x).wrapping_add(b).wrapping_add(*ctx)
    })
}

proptest! {
    #[test]
    fn prop_sync_identity(f in affine_arrow(), x in any::<i64>()) {
        prop_assert_eq!(arrow::identity().then(f.clone()).run(x), f.run(x));
        prop_assert_eq!(f.clone().then(arrow::identity()).run(x), f.run(x));
    }

    #[test]
    fn prop_sync_associativity(
        f in affine_arrow(), g in affine_arrow(), h in affine_arrow(), x in any::<i64>()
    ) {
        let left = compose(compose(f.clone(), g.clone()), h.clone());
        let right = compose(f, compose(g, h));
        prop_assert_eq!(left.run(x), right.run(x));
    }

    #[test]
    fn prop_after_is_flipped_then(f in affine_arrow(), g in affine_arrow(), x in any::<i64>()) {
        prop_assert_eq!(g.clone().after(f.clone()).run(x), f.then(g).run(x));
    }

    #[test]
    fn prop_map_composition(f in affine_arrow(), x in any::<i64>(), k in 1i64..50) {
        let stepwise = f.clone().map(move |y| y.wrapping_add(k)).map(|y| y.to_string());
        let fused = f.map(move |y| y.wrapping_add(k).to_string());
        prop_assert_eq!(stepwise.run(x), fused.run(x));
    }

    #[test]
    fn prop_co_map_precomposes(f in affine_arrow(), x in any::<i32>()) {
        let widened = f.clone().co_map(|v: i32| i64::from(v));
        prop_assert_eq!(widened.run(x), f.run(i64::from(x)));
    }

    #[test]
    fn prop_bind_resupplies_input(f in affine_arrow(), x in any::<i64>()) {
        let bound = f.clone().bind(|t: i64| Arrow::new(move |s: i64| (t, s)));
        prop_assert_eq!(bound.run(x), (f.run(x), x));
    }

    #[test]
    fn prop_monad_associativity(m in affine_arrow(), x in any::<i64>()) {
        let k = |t: i64| Arrow::new(move |s: i64| t.wrapping_sub(s));
        let h = |u: i64| Arrow::new(move |s: i64| u.wrapping_mul(3).wrapping_add(s));
        let left = m.clone().bind(k).bind(h);
        let right = m.bind(move |t| k(t).bind(h));
        prop_assert_eq!(left.run(x), right.run(x));
    }

    #[test]
    fn prop_apply_matches_manual_reader(f in affine_arrow(), x in any::<i64>()) {
        let adder = Arrow::new(|r: i64| Arrow::new(move |s: i64| r.wrapping_add(s)));
        prop_assert_eq!(adder.apply(f.clone()).run(x), x.wrapping_add(f.run(x)));
    }

    #[test]
    fn prop_applicative_identity(v in affine_arrow(), x in any::<i64>()) {
        let id = Arrow::<i64, Arrow<i64, i64>>::pure(arrow::identity());
        prop_assert_eq!(id.apply(v.clone()).run(x), v.run(x));
    }

    #[test]
    fn prop_applicative_homomorphism(f in affine_arrow(), y in any::<i64>(), x in any::<i64>()) {
        let left = Arrow::<i64, Arrow<i64, i64>>::pure(f.clone()).apply(Arrow::pure(y));
        let right = Arrow::<i64, i64>::pure(f.run(y));
        prop_assert_eq!(left.run(x), right.run(x));
    }

    #[test]
    fn prop_applicative_interchange(
        f in affine_arrow(), g in affine_arrow(), y in any::<i64>(), x in any::<i64>()
    ) {
        let u = curried(f, g);
        let at_y = Arrow::new(move |h: Arrow<i64, i64>| h.run(y));
        let left = u.clone().apply(Arrow::pure(y));
        let right = Arrow::<i64, _>::pure(at_y).apply(u);
        prop_assert_eq!(left.run(x), right.run(x));
    }

    #[test]
    fn prop_applicative_composition(
        f in affine_arrow(), g in affine_arrow(), h in affine_arrow(), x in any::<i64>()
    ) {
        let u = curried(f.clone(), g.clone());
        let v = curried(g, h.clone());
        let w = h.then(f);
        let compose_fn = Arrow::new(|outer: Arrow<i64, i64>| {
            Arrow::new(move |inner: Arrow<i64, i64>| inner.then(outer.clone()))
        });
        let left = Arrow::<i64, _>::pure(compose_fn)
            .apply(u.clone())
            .apply(v.clone())
            .apply(w.clone());
        let right = u.apply(v.apply(w));
        prop_assert_eq!(left.run(x), right.run(x));
    }

    #[test]
    fn prop_fork_runs_both_on_same_input(
        f in affine_arrow(), g in affine_arrow(), x in any::<i64>()
    ) {
        let forked = arrow::fork(f.clone(), g.clone());
        prop_assert_eq!(forked.run(x), (f.run(x), g.run(x)));
    }

    #[test]
    fn prop_swap_is_an_involution(a in any::<i64>(), b in any::<i64>()) {
        let sub = Arrow::new(|(a, b): (i64, i64)| a.wrapping_sub(b));
        prop_assert_eq!(sub.clone().swap().swap().run((a, b)), sub.run((a, b)));
    }

    #[test]
    fn prop_uncurry_agrees_with_curried(a in any::<i64>(), b in any::<i64>()) {
        let times = Arrow::new(|a: i64| Arrow::new(move |b: i64| a.wrapping_mul(b)));
        prop_assert_eq!(times.clone().uncurry().run((a, b)), times.run(a).run(b));
    }

    #[test]
    fn prop_cases_picks_one_branch(x in any::<i64>()) {
        let sign = arrow::cases(
            |x: &i64| *x >= 0,
            Arrow::pure("non-negative"),
            Arrow::pure("negative"),
        );
        prop_assert_eq!(sign.run(x), if x >= 0 { "non-negative" } else { "negative" });
    }

    #[test]
    fn prop_kleisli_unit_laws(f in affine_arrow(), x in any::<i64>(), b in any::<i64>()) {
        let k = Kleisli::from_fn(move |t: i64| f.clone().map(move |y| y.wrapping_add(t)));
        let left = Kleisli::unit().then(k.clone());
        let right = k.clone().then(Kleisli::unit());
        prop_assert_eq!(left.run(x).run(b), k.run(x).run(b));
        prop_assert_eq!(right.run(x).run(b), k.run(x).run(b));
    }

    #[test]
    fn prop_async_identity_and_associativity(
        f in affine(), g in affine(), h in affine(), x in any::<i64>()
    ) {
        let (f, g, h) = (async_affine(f), async_affine(g), async_affine(h));
        block_on(async {
            let expected = f.run(x).await;
            assert_eq!(async_arrow::identity().then(f.clone()).run(x).await, expected);
            assert_eq!(f.clone().then(async_arrow::identity()).run(x).await, expected);

            let left = f.clone().then(g.clone()).then(h.clone());
            let right = f.then(g.then(h));
            assert_eq!(left.run(x).await, right.run(x).await);
        });
    }

    #[test]
    fn prop_async_applicative_laws(
        f in affine(), g in affine(), y in any::<i64>(), x in any::<i64>()
    ) {
        let (f, g) = (async_affine(f), async_affine(g));
        block_on(async {
            let id = AsyncArrow::<i64, AsyncArrow<i64, i64>>::pure(async_arrow::identity());
            assert_eq!(id.apply(f.clone()).run(x).await, f.run(x).await);

            let lifted = AsyncArrow::<i64, AsyncArrow<i64, i64>>::pure(f.clone());
            let expected = f.run(y).await;
            assert_eq!(lifted.apply(AsyncArrow::pure(y)).run(x).await, expected);

            let u = async_curried(f, g);
            let at_y = AsyncArrow::new(move |h: AsyncArrow<i64, i64>| async move { h.run(y).await });
            let left = u.clone().apply(AsyncArrow::pure(y));
            let right = AsyncArrow::<i64, _>::pure(at_y).apply(u);
            assert_eq!(left.run(x).await, right.run(x).await);
        });
    }

    #[test]
    fn prop_async_matches_sync(f in affine(), g in affine(), x in any::<i64>()) {
        let sync = sync_affine(f).then(sync_affine(g));
        let lifted = sync.clone().into_async();
        let native = async_affine(f).then(async_affine(g));
        prop_assert_eq!(block_on(lifted.run(x)), sync.run(x));
        prop_assert_eq!(block_on(native.run(x)), sync.run(x));
    }

    #[test]
    fn prop_async_fork(f in affine(), g in affine(), x in any::<i64>()) {
        let (f, g) = (async_affine(f), async_affine(g));
        let forked = async_arrow::fork(f.clone(), g.clone());
        prop_assert_eq!(block_on(forked.run(x)), (block_on(f.run(x)), block_on(g.run(x))));
    }

    #[test]
    fn prop_scoped_laws_hold_per_context(
        f in affine(), g in affine(), h in affine(), x in any::<i64>(), ctx in any::<i64>()
    ) {
        let (f, g, h) = (scoped_affine(f), scoped_affine(g), scoped_affine(h));
        block_on(async {
            let expected = f.run(&ctx, x).await;
            assert_eq!(scoped::identity().then(f.clone()).run(&ctx, x).await, expected);
            assert_eq!(f.clone().then(scoped::identity()).run(&ctx, x).await, expected);

            let left = f.clone().then(g.clone()).then(h.clone());
            let right = f.then(g.then(h));
            assert_eq!(left.run(&ctx, x).await, right.run(&ctx, x).await);
        });
    }

    #[test]
    fn prop_on_context_fixes_the_context(f in affine(), x in any::<i64>(), ctx in any::<i64>()) {
        let f = scoped_affine(f);
        let fixed = f.clone().on_context(ctx);
        prop_assert_eq!(block_on(fixed.run(x)), block_on(f.run(&ctx, x)));
    }

    #[test]
    fn prop_local_derives_the_context(f in affine(), x in any::<i64>(), ctx in -1000i64..1000) {
        let f = scoped_affine(f);
        let shifted = f.clone().local(|outer: &i64| outer + 1);
        prop_assert_eq!(block_on(shifted.run(&ctx, x)), block_on(f.run(&(ctx + 1), x)));
    }

    #[test]
    fn prop_scoped_bind_resupplies_context_and_input(
        f in affine(), x in any::<i64>(), ctx in any::<i64>()
    ) {
        let f = scoped_affine(f);
        let bound = f.clone().bind(|t: i64| ScopedArrow::from_fn(move |c: &i64, s: i64| (t, *c, s)));
        prop_assert_eq!(block_on(bound.run(&ctx, x)), (block_on(f.run(&ctx, x)), ctx, x));
    }

    #[test]
    fn prop_scoped_applicative_laws(
        f in affine(), g in affine(), y in any::<i64>(), x in any::<i64>(), ctx in any::<i64>()
    ) {
        let (f, g) = (scoped_affine(f), scoped_affine(g));
        block_on(async {
            let id = ScopedArrow::<i64, i64, ScopedArrow<i64, i64, i64>>::pure(scoped::identity());
            assert_eq!(id.apply(f.clone()).run(&ctx, x).await, f.run(&ctx, x).await);

            let lifted = ScopedArrow::<i64, i64, ScopedArrow<i64, i64, i64>>::pure(f.clone());
            let expected = f.run(&ctx, y).await;
            assert_eq!(lifted.apply(ScopedArrow::pure(y)).run(&ctx, x).await, expected);

            let u = scoped_curried(f, g);
            let at_y = ScopedArrow::<i64, ScopedArrow<i64, i64, i64>, i64>::new(move |ctx: &i64, h| {
                Box::pin(async move { h.run(ctx, y).await })
            });
            let left = u.clone().apply(ScopedArrow::pure(y));
            let right = ScopedArrow::<i64, i64, _>::pure(at_y).apply(u);
            assert_eq!(left.run(&ctx, x).await, right.run(&ctx, x).await);
        });
    }
}
