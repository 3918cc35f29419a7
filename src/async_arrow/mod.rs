//! Async arrows - wrapped `Fn(S) -> impl Future<Output = T>`.
//!
//! The async flavor carries the same algebra as [`Arrow`](crate::Arrow).
//! Invoking an arrow is one logical suspension point; the combinators add no
//! suspension of their own and never run operands concurrently. `apply` and
//! `fork` await their first operand to completion before starting the second.
//!
//! # Example
//!
//! ```rust
//! use arrowcat::AsyncArrow;
//!
//! # tokio_test::block_on(async {
//! let fetch = AsyncArrow::new(|id: u32| async move { format!("user-{id}") });
//! let shout = fetch.map(|name| name.to_uppercase());
//!
//! assert_eq!(shout.run(7).await, "USER-7");
//! # });
//! ```

mod combinators;
mod kleisli;

pub use combinators::{cases, evaluate, fork, identity};
pub use kleisli::{kleisli_multiply, AsyncKleisli};

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

/// An async arrow from `S` to `T`.
///
/// Futures returned by [`AsyncArrow::run`] are `'static` and `Send`, so they
/// can be handed to any executor. The algebra itself never spawns.
pub struct AsyncArrow<S, T> {
    f: Arc<dyn Fn(S) -> BoxFuture<'static, T> + Send + Sync>,
}

impl<S, T> Clone for AsyncArrow<S, T> {
    fn clone(&self) -> Self {
        AsyncArrow {
            f: Arc::clone(&self.f),
        }
    }
}

impl<S, T> fmt::Debug for AsyncArrow<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncArrow")
            .field("f", &"<async function>")
            .finish()
    }
}

impl<S, T> AsyncArrow<S, T>
where
    S: Send + 'static,
    T: Send + 'static,
{
    /// Wrap an async function.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(S) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        AsyncArrow {
            f: Arc::new(move |s: S| f(s).boxed()),
        }
    }

    /// Wrap a plain function. The arrow completes without suspending.
    ///
    /// The function runs when the returned future is first polled, not
    /// when [`AsyncArrow::run`] is called.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(S) -> T + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        AsyncArrow::new(move |s| {
            let f = Arc::clone(&f);
            async move { f(s) }
        })
    }

    /// Invoke the wrapped function.
    pub fn run(&self, s: S) -> BoxFuture<'static, T> {
        (self.f)(s)
    }

    /// Pipe a value through this arrow. Same as [`AsyncArrow::run`].
    pub fn pipe(&self, s: S) -> BoxFuture<'static, T> {
        self.run(s)
    }

    /// The arrow that ignores its input and returns `value`.
    pub fn pure(value: T) -> Self
    where
        T: Clone + Sync,
    {
        AsyncArrow::from_fn(move |_| value.clone())
    }

    /// Left-to-right composition.
    pub fn then<U: Send + 'static>(self, next: AsyncArrow<T, U>) -> AsyncArrow<S, U> {
        AsyncArrow::new(move |s| {
            let (first, second) = (self.clone(), next.clone());
            async move { second.run(first.run(s).await).await }
        })
    }

    /// Mathematical composition: `previous` runs first.
    pub fn after<R: Send + 'static>(self, previous: AsyncArrow<R, S>) -> AsyncArrow<R, T> {
        previous.then(self)
    }

    /// Post-compose with a plain function.
    pub fn map<U, F>(self, f: F) -> AsyncArrow<S, U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        AsyncArrow::new(move |s| {
            let (arrow, f) = (self.clone(), Arc::clone(&f));
            async move { f(arrow.run(s).await) }
        })
    }

    /// Pre-compose with a plain function.
    pub fn co_map<R, F>(self, f: F) -> AsyncArrow<R, T>
    where
        R: Send + 'static,
        F: Fn(R) -> S + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        AsyncArrow::new(move |r: R| {
            let (arrow, f) = (self.clone(), Arc::clone(&f));
            async move { arrow.run(f(r)).await }
        })
    }

    /// Widen the target through `Into`.
    pub fn map_into<U>(self) -> AsyncArrow<S, U>
    where
        T: Into<U>,
        U: Send + 'static,
    {
        self.map(Into::into)
    }

    /// Accept any source that converts into `S`.
    pub fn co_map_from<R>(self) -> AsyncArrow<R, T>
    where
        R: Into<S> + Send + 'static,
    {
        self.co_map(Into::into)
    }

    /// Monadic bind over the common source: `s -> f(self(s))(s)`.
    pub fn bind<U, F>(self, f: F) -> AsyncArrow<S, U>
    where
        S: Clone,
        U: Send + 'static,
        F: Fn(T) -> AsyncArrow<S, U> + Send + Sync + 'static,
    {
        self.map(f).multiply()
    }
}

impl<S, T> AsyncArrow<S, AsyncArrow<S, T>>
where
    S: Clone + Send + 'static,
    T: Send + 'static,
{
    /// Flatten a nested arrow along the diagonal.
    pub fn multiply(self) -> AsyncArrow<S, T> {
        AsyncArrow::new(move |s: S| {
            let nested = self.clone();
            async move { nested.run(s.clone()).await.run(s).await }
        })
    }
}

impl<R, S, T> AsyncArrow<R, AsyncArrow<S, T>>
where
    R: Clone + Send + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    /// Reader-style application. The function side completes before the
    /// value side starts.
    pub fn apply(self, other: AsyncArrow<R, S>) -> AsyncArrow<R, T> {
        AsyncArrow::new(move |r: R| {
            let (produce_fn, produce_value) = (self.clone(), other.clone());
            async move {
                let (left, right) = crate::pair::diagonal(r);
                let g = produce_fn.run(left).await;
                let s = produce_value.run(right).await;
                g.run(s).await
            }
        })
    }

    /// Curried form of [`AsyncArrow::apply`].
    pub fn apply_curried(self) -> impl Fn(AsyncArrow<R, S>) -> AsyncArrow<R, T> + Send + Sync {
        move |other| self.clone().apply(other)
    }
}

impl<T: Send + 'static> AsyncArrow<T, T> {
    /// The identity arrow.
    pub fn identity() -> Self {
        AsyncArrow::from_fn(|t| t)
    }
}

/// Compose two async arrows left to right.
pub fn compose<S, T, U>(first: AsyncArrow<S, T>, second: AsyncArrow<T, U>) -> AsyncArrow<S, U>
where
    S: Send + 'static,
    T: Send + 'static,
    U: Send + 'static,
{
    first.then(second)
}
