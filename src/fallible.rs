//! Combinators for arrows whose target is a `Result`.
//!
//! The algebra treats `Result` as ordinary data: `map` sees the whole
//! `Result`, and an `Err` flows through `then` like any other value. The
//! methods here add the usual short-circuiting shape on top, for every
//! flavor:
//!
//! - `map_ok` - transform the success value
//! - `map_err` - transform the error value
//! - `and_then_ok` - run the next fallible arrow only on success
//!
//! Nothing here catches, wraps or retries. The first `Err` is returned as is.
//!
//! # Example
//!
//! ```rust
//! use arrowcat::Arrow;
//!
//! let parse = Arrow::new(|s: &'static str| s.parse::<i32>().map_err(|e| e.to_string()));
//! let positive = Arrow::new(|n: i32| {
//!     if n > 0 { Ok(n) } else { Err(format!("{n} is not positive")) }
//! });
//!
//! let checked = parse.and_then_ok(positive).map_ok(|n| n * 2);
//!
//! assert_eq!(checked.run("21"), Ok(42));
//! assert_eq!(checked.run("-1"), Err("-1 is not positive".to_string()));
//! assert!(checked.run("x").is_err());
//! ```

use crate::{Arrow, AsyncArrow, ScopedArrow};

impl<S, T, E> Arrow<S, Result<T, E>>
where
    S: 'static,
    T: 'static,
    E: 'static,
{
    /// Transform the success value.
    pub fn map_ok<U, F>(self, f: F) -> Arrow<S, Result<U, E>>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        self.map(move |result| result.map(&f))
    }

    /// Transform the error value.
    pub fn map_err<E2, F>(self, f: F) -> Arrow<S, Result<T, E2>>
    where
        E2: 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        self.map(move |result| result.map_err(&f))
    }

    /// Run `next` on success; an error skips it.
    pub fn and_then_ok<U: 'static>(self, next: Arrow<T, Result<U, E>>) -> Arrow<S, Result<U, E>> {
        Arrow::new(move |s| self.run(s).and_then(|t| next.run(t)))
    }
}

impl<S, T, E> AsyncArrow<S, Result<T, E>>
where
    S: Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    /// Transform the success value.
    pub fn map_ok<U, F>(self, f: F) -> AsyncArrow<S, Result<U, E>>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        self.map(move |result| result.map(&f))
    }

    /// Transform the error value.
    pub fn map_err<E2, F>(self, f: F) -> AsyncArrow<S, Result<T, E2>>
    where
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        self.map(move |result| result.map_err(&f))
    }

    /// Run `next` on success; an error skips it.
    pub fn and_then_ok<U: Send + 'static>(
        self,
        next: AsyncArrow<T, Result<U, E>>,
    ) -> AsyncArrow<S, Result<U, E>> {
        AsyncArrow::new(move |s| {
            let (first, next) = (self.clone(), next.clone());
            async move {
                let t = first.run(s).await?;
                next.run(t).await
            }
        })
    }
}

impl<C, S, T, E> ScopedArrow<C, S, Result<T, E>>
where
    C: Sync + 'static,
    S: Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    /// Transform the success value.
    pub fn map_ok<U, F>(self, f: F) -> ScopedArrow<C, S, Result<U, E>>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        self.map(move |result| result.map(&f))
    }

    /// Transform the error value.
    pub fn map_err<E2, F>(self, f: F) -> ScopedArrow<C, S, Result<T, E2>>
    where
        E2: Send + 'static,
        F: Fn(E) -> E2 + Send + Sync + 'static,
    {
        self.map(move |result| result.map_err(&f))
    }

    /// Run `next` on success under the same context; an error skips it.
    pub fn and_then_ok<U: Send + 'static>(
        self,
        next: ScopedArrow<C, T, Result<U, E>>,
    ) -> ScopedArrow<C, S, Result<U, E>> {
        ScopedArrow::<C, S, Result<U, E>>::new(move |ctx, s| {
            let (first, next) = (self.clone(), next.clone());
            Box::pin(async move {
                let t = first.run(ctx, s).await?;
                next.run(ctx, t).await
            })
        })
    }
}
