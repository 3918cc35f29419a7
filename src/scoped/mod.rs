//! Scoped arrows - async arrows that receive a borrowed context on every call.
//!
//! A [`ScopedArrow<C, S, T>`] wraps `Fn(&C, S) -> BoxFuture<T>`. The context
//! is supplied by the caller at invocation time, borrowed for the duration of
//! that one call and threaded unchanged through every composed step. Arrows
//! never store a context, so the same arrow can serve any number of callers
//! with different contexts at once.
//!
//! Cancellation and timeouts belong to whatever the context represents; the
//! combinators neither create nor forward cancellation signals.
//!
//! # Example
//!
//! ```rust
//! use arrowcat::ScopedArrow;
//!
//! struct Tenant {
//!     prefix: &'static str,
//! }
//!
//! let label = ScopedArrow::from_fn(|tenant: &Tenant, id: u32| format!("{}-{id}", tenant.prefix));
//! let loud = label.map(|s| s.to_uppercase());
//!
//! # tokio_test::block_on(async {
//! assert_eq!(loud.run(&Tenant { prefix: "acme" }, 7).await, "ACME-7");
//! assert_eq!(loud.run(&Tenant { prefix: "init" }, 1).await, "INIT-1");
//! # });
//! ```
//!
//! # Fixing a context
//!
//! [`ScopedArrow::on_context`] turns a scoped arrow into an
//! [`AsyncArrow`](crate::AsyncArrow) by handing it an owned context handle.
//! Use an `Arc` (or any cheap clone) when the same context backs many arrows.

mod combinators;
mod kleisli;

pub use combinators::{cases, evaluate, fork, identity};
pub use kleisli::{kleisli_multiply, ScopedKleisli};

use std::fmt;
use std::sync::Arc;

use futures::future::BoxFuture;

use crate::async_arrow::{AsyncArrow, AsyncKleisli};

type ScopedFn<C, S, T> = dyn for<'c> Fn(&'c C, S) -> BoxFuture<'c, T> + Send + Sync;

/// An async arrow from `S` to `T` that borrows a `C` on every invocation.
pub struct ScopedArrow<C, S, T> {
    f: Arc<ScopedFn<C, S, T>>,
}

impl<C, S, T> Clone for ScopedArrow<C, S, T> {
    fn clone(&self) -> Self {
        ScopedArrow {
            f: Arc::clone(&self.f),
        }
    }
}

impl<C, S, T> fmt::Debug for ScopedArrow<C, S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedArrow")
            .field("f", &"<scoped function>")
            .finish()
    }
}

impl<C, S, T> ScopedArrow<C, S, T>
where
    C: Sync + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    /// Wrap a context-borrowing async function.
    ///
    /// The returned future may borrow the context, so it is boxed with the
    /// context's lifetime:
    ///
    /// ```rust
    /// use arrowcat::ScopedArrow;
    ///
    /// let add = ScopedArrow::new(|offset: &i32, x: i32| Box::pin(async move { x + *offset }));
    ///
    /// # tokio_test::block_on(async {
    /// assert_eq!(add.run(&10, 1).await, 11);
    /// # });
    /// ```
    pub fn new<F>(f: F) -> Self
    where
        F: for<'c> Fn(&'c C, S) -> BoxFuture<'c, T> + Send + Sync + 'static,
    {
        ScopedArrow { f: Arc::new(f) }
    }

    /// Wrap a plain function of the context and the input.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&C, S) -> T + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        ScopedArrow::new(move |ctx: &C, s| {
            let f = Arc::clone(&f);
            Box::pin(async move { f(ctx, s) })
        })
    }

    /// Invoke with a borrowed context.
    pub fn run<'c>(&self, ctx: &'c C, s: S) -> BoxFuture<'c, T> {
        (self.f)(ctx, s)
    }

    /// Pipe a value through this arrow. Same as [`ScopedArrow::run`].
    pub fn pipe<'c>(&self, ctx: &'c C, s: S) -> BoxFuture<'c, T> {
        self.run(ctx, s)
    }

    /// The arrow that ignores context and input and returns `value`.
    pub fn pure(value: T) -> Self
    where
        T: Clone + Sync,
    {
        ScopedArrow::from_fn(move |_: &C, _| value.clone())
    }

    /// Left-to-right composition. Both steps see the same context.
    pub fn then<U: Send + 'static>(self, next: ScopedArrow<C, T, U>) -> ScopedArrow<C, S, U> {
        ScopedArrow::<C, S, U>::new(move |ctx, s| {
            let (first, second) = (self.clone(), next.clone());
            Box::pin(async move {
                let t = first.run(ctx, s).await;
                second.run(ctx, t).await
            })
        })
    }

    /// Mathematical composition: `previous` runs first.
    pub fn after<R: Send + 'static>(self, previous: ScopedArrow<C, R, S>) -> ScopedArrow<C, R, T> {
        previous.then(self)
    }

    /// Post-compose with a plain function.
    pub fn map<U, F>(self, f: F) -> ScopedArrow<C, S, U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        ScopedArrow::<C, S, U>::new(move |ctx, s| {
            let (arrow, f) = (self.clone(), Arc::clone(&f));
            Box::pin(async move { f(arrow.run(ctx, s).await) })
        })
    }

    /// Pre-compose with a plain function.
    pub fn co_map<R, F>(self, f: F) -> ScopedArrow<C, R, T>
    where
        R: Send + 'static,
        F: Fn(R) -> S + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        ScopedArrow::<C, R, T>::new(move |ctx, r| {
            let (arrow, f) = (self.clone(), Arc::clone(&f));
            Box::pin(async move { arrow.run(ctx, f(r)).await })
        })
    }

    /// Widen the target through `Into`.
    pub fn map_into<U>(self) -> ScopedArrow<C, S, U>
    where
        T: Into<U>,
        U: Send + 'static,
    {
        self.map(Into::into)
    }

    /// Accept any source that converts into `S`.
    pub fn co_map_from<R>(self) -> ScopedArrow<C, R, T>
    where
        R: Into<S> + Send + 'static,
    {
        self.co_map(Into::into)
    }

    /// Monadic bind: `(ctx, s) -> f(self(ctx, s))(ctx, s)`.
    pub fn bind<U, F>(self, f: F) -> ScopedArrow<C, S, U>
    where
        S: Clone,
        U: Send + 'static,
        F: Fn(T) -> ScopedArrow<C, S, U> + Send + Sync + 'static,
    {
        self.map(f).multiply()
    }

    /// Run under a context derived from the caller's.
    ///
    /// The derived context is owned by the invocation and dropped when it
    /// completes.
    pub fn local<C2, F>(self, f: F) -> ScopedArrow<C2, S, T>
    where
        C2: Sync + 'static,
        C: Send,
        F: Fn(&C2) -> C + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        ScopedArrow::<C2, S, T>::new(move |outer, s| {
            let (arrow, f) = (self.clone(), Arc::clone(&f));
            Box::pin(async move {
                let inner = f(outer);
                arrow.run(&inner, s).await
            })
        })
    }

    /// Fix one context, yielding an [`AsyncArrow`].
    ///
    /// The async arrow keeps the handle and lends it to every invocation.
    pub fn on_context(self, ctx: C) -> AsyncArrow<S, T>
    where
        C: Send,
    {
        let ctx = Arc::new(ctx);
        AsyncArrow::new(move |s| {
            let (arrow, ctx) = (self.clone(), Arc::clone(&ctx));
            async move { arrow.run(&ctx, s).await }
        })
    }

    /// Reinterpret as a Kleisli arrow whose inner source is the context.
    ///
    /// For input `s` this yields an async arrow `C -> T` that takes the
    /// context as ordinary data.
    pub fn as_kleisli_over_context(self) -> AsyncKleisli<C, S, T>
    where
        C: Send,
        S: Clone + Sync,
    {
        AsyncKleisli::from_fn(move |s: S| {
            let arrow = self.clone();
            AsyncArrow::new(move |ctx: C| {
                let (arrow, s) = (arrow.clone(), s.clone());
                async move { arrow.run(&ctx, s).await }
            })
        })
    }
}

impl<C, S, T> ScopedArrow<C, S, ScopedArrow<C, S, T>>
where
    C: Sync + 'static,
    S: Clone + Send + 'static,
    T: Send + 'static,
{
    /// Flatten a nested arrow; context and input are both re-supplied.
    pub fn multiply(self) -> ScopedArrow<C, S, T> {
        ScopedArrow::<C, S, T>::new(move |ctx, s: S| {
            let nested = self.clone();
            Box::pin(async move { nested.run(ctx, s.clone()).await.run(ctx, s).await })
        })
    }
}

impl<C, R, S, T> ScopedArrow<C, R, ScopedArrow<C, S, T>>
where
    C: Sync + 'static,
    R: Clone + Send + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    /// Reader-style application; context and input are duplicated across
    /// both operands, which run one after the other.
    pub fn apply(self, other: ScopedArrow<C, R, S>) -> ScopedArrow<C, R, T> {
        ScopedArrow::<C, R, T>::new(move |ctx, r: R| {
            let (produce_fn, produce_value) = (self.clone(), other.clone());
            Box::pin(async move {
                let (left, right) = crate::pair::diagonal(r);
                let g = produce_fn.run(ctx, left).await;
                let s = produce_value.run(ctx, right).await;
                g.run(ctx, s).await
            })
        })
    }

    /// Curried form of [`ScopedArrow::apply`].
    pub fn apply_curried(
        self,
    ) -> impl Fn(ScopedArrow<C, R, S>) -> ScopedArrow<C, R, T> + Send + Sync {
        move |other| self.clone().apply(other)
    }
}

impl<C: Sync + 'static, T: Send + 'static> ScopedArrow<C, T, T> {
    /// The identity arrow.
    pub fn identity() -> Self {
        ScopedArrow::from_fn(|_: &C, t| t)
    }
}

/// Compose two scoped arrows left to right.
pub fn compose<C, S, T, U>(
    first: ScopedArrow<C, S, T>,
    second: ScopedArrow<C, T, U>,
) -> ScopedArrow<C, S, U>
where
    C: Sync + 'static,
    S: Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
{
    first.then(second)
}
