//! Synchronous arrows - wrapped `Fn(S) -> T`.
//!
//! An [`Arrow<S, T>`] owns exactly one callable. Every combinator returns a
//! new arrow and leaves its operands untouched; cloning an arrow is an `Arc`
//! bump, so arrows can be shared freely across threads.
//!
//! # Composition order
//!
//! [`Arrow::then`] composes left to right (`f.then(g)` runs `f` first),
//! [`Arrow::after`] is the mathematical `g ∘ f` (`g.after(f)` runs `f`
//! first). Both describe the same arrow:
//!
//! ```rust
//! use arrowcat::Arrow;
//!
//! let f = Arrow::new(|x: i32| x + 1);
//! let g = Arrow::new(|x: i32| x * 2);
//!
//! assert_eq!(f.clone().then(g.clone()).run(3), 8);
//! assert_eq!(g.after(f).run(3), 8);
//! ```
//!
//! # Reader semantics
//!
//! `bind`, `multiply` and `apply` re-supply the *original* input to the
//! arrows they produce, so they require `S: Clone`:
//!
//! ```rust
//! use arrowcat::Arrow;
//!
//! let len = Arrow::new(|s: String| s.len());
//! let tagged = len.bind(|n| Arrow::new(move |s: String| format!("{s}:{n}")));
//!
//! assert_eq!(tagged.run("abc".to_string()), "abc:3");
//! ```

mod combinators;
mod kleisli;

pub use combinators::{cases, evaluate, fork, identity};
pub use kleisli::{kleisli_multiply, Kleisli};

use std::fmt;
use std::sync::Arc;

/// A synchronous arrow from `S` to `T`.
///
/// Holds a single shared callable. Failures raised by the callable (panics)
/// propagate unchanged through every composed arrow.
pub struct Arrow<S, T> {
    f: Arc<dyn Fn(S) -> T + Send + Sync>,
}

impl<S, T> Clone for Arrow<S, T> {
    fn clone(&self) -> Self {
        Arrow {
            f: Arc::clone(&self.f),
        }
    }
}

impl<S, T> fmt::Debug for Arrow<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arrow")
            .field("f", &"<function>")
            .finish()
    }
}

impl<S: 'static, T: 'static> Arrow<S, T> {
    /// Wrap a function. Construction never fails and has no side effects.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(S) -> T + Send + Sync + 'static,
    {
        Arrow { f: Arc::new(f) }
    }

    /// Invoke the wrapped function.
    pub fn run(&self, s: S) -> T {
        (self.f)(s)
    }

    /// Pipe a value through this arrow. Same as [`Arrow::run`].
    pub fn pipe(&self, s: S) -> T {
        self.run(s)
    }

    /// The arrow that ignores its input and always returns `value`.
    ///
    /// This is the monadic `return`.
    ///
    /// ```rust
    /// use arrowcat::Arrow;
    ///
    /// let always = Arrow::<i32, &str>::pure("constant");
    /// assert_eq!(always.run(0), "constant");
    /// assert_eq!(always.run(100), "constant");
    /// ```
    pub fn pure(value: T) -> Self
    where
        T: Clone + Send + Sync,
    {
        Arrow::new(move |_| value.clone())
    }

    /// Left-to-right composition: run `self`, then feed the result to `next`.
    pub fn then<U: 'static>(self, next: Arrow<T, U>) -> Arrow<S, U> {
        Arrow::new(move |s| next.run(self.run(s)))
    }

    /// Mathematical composition: `self ∘ previous`, i.e. `previous` runs first.
    pub fn after<R: 'static>(self, previous: Arrow<R, S>) -> Arrow<R, T> {
        previous.then(self)
    }

    /// Post-compose with a plain function. Source stays, target changes.
    pub fn map<U, F>(self, f: F) -> Arrow<S, U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Arrow::new(move |s| f(self.run(s)))
    }

    /// Pre-compose with a plain function. Target stays, source changes.
    pub fn co_map<R, F>(self, f: F) -> Arrow<R, T>
    where
        R: 'static,
        F: Fn(R) -> S + Send + Sync + 'static,
    {
        Arrow::new(move |r| self.run(f(r)))
    }

    /// Widen the target through `Into`.
    pub fn map_into<U>(self) -> Arrow<S, U>
    where
        T: Into<U>,
        U: 'static,
    {
        self.map(Into::into)
    }

    /// Accept any source that converts into `S`.
    pub fn co_map_from<R>(self) -> Arrow<R, T>
    where
        R: Into<S> + 'static,
    {
        self.co_map(Into::into)
    }

    /// Monadic bind over the common source.
    ///
    /// The produced arrow computes `f(self(s))(s)`: the original input is
    /// handed both to `self` and to the arrow returned by `f`.
    pub fn bind<U, F>(self, f: F) -> Arrow<S, U>
    where
        S: Clone,
        U: 'static,
        F: Fn(T) -> Arrow<S, U> + Send + Sync + 'static,
    {
        self.map(f).multiply()
    }
}

impl<S: Clone + 'static, T: 'static> Arrow<S, Arrow<S, T>> {
    /// Flatten a nested arrow along the diagonal: `s -> self(s)(s)`.
    pub fn multiply(self) -> Arrow<S, T> {
        Arrow::new(move |s: S| self.run(s.clone()).run(s))
    }
}

impl<R: Clone + 'static, S: 'static, T: 'static> Arrow<R, Arrow<S, T>> {
    /// Reader-style application.
    ///
    /// Runs `self` and then `other` on the same input and applies the
    /// produced arrow to the produced value.
    ///
    /// ```rust
    /// use arrowcat::Arrow;
    ///
    /// let adder = Arrow::new(|r: i32| Arrow::new(move |s: i32| r + s));
    /// let square = Arrow::new(|r: i32| r * r);
    ///
    /// assert_eq!(adder.apply(square).run(3), 12);
    /// ```
    pub fn apply(self, other: Arrow<R, S>) -> Arrow<R, T> {
        Arrow::new(move |r: R| {
            let (left, right) = crate::pair::diagonal(r);
            let g = self.run(left);
            g.run(other.run(right))
        })
    }

    /// Curried form of [`Arrow::apply`].
    pub fn apply_curried(self) -> impl Fn(Arrow<R, S>) -> Arrow<R, T> + Send + Sync {
        move |other| self.clone().apply(other)
    }
}

impl<T: 'static> Arrow<T, T> {
    /// The identity arrow.
    pub fn identity() -> Self {
        Arrow::new(|t| t)
    }
}

/// Compose two arrows left to right: `first` runs, then `second`.
pub fn compose<S, T, U>(first: Arrow<S, T>, second: Arrow<T, U>) -> Arrow<S, U>
where
    S: 'static,
    T: 'static,
    U: 'static,
{
    first.then(second)
}
