//! # Arrowcat
//!
//! > *"Compose first, run later"*
//!
//! A small algebra of composable arrows: wrapped functions that support
//! identity, composition, mapping, applicative application, monadic binding
//! and Kleisli composition.
//!
//! ## Three flavors, one algebra
//!
//! | Flavor | Wraps | Invocation |
//! |--------|-------|------------|
//! | [`Arrow<S, T>`](arrow::Arrow) | `Fn(S) -> T` | `arrow.run(s)` |
//! | [`AsyncArrow<S, T>`](async_arrow::AsyncArrow) | `Fn(S) -> impl Future<Output = T>` | `arrow.run(s).await` |
//! | [`ScopedArrow<C, S, T>`](scoped::ScopedArrow) | `Fn(&C, S) -> BoxFuture<T>` | `arrow.run(&ctx, s).await` |
//!
//! Every flavor carries the same operations (`then`, `after`, `map`,
//! `co_map`, `apply`, `bind`, `multiply`, `fork`, `unfork`, `swap`,
//! `uncurry`, `cases`) and obeys the same laws. The scoped flavor threads a
//! caller-supplied context through every step without ever storing it.
//!
//! ## Quick Example
//!
//! ```rust
//! use arrowcat::arrow::{compose, Arrow};
//!
//! let inc = Arrow::new(|x: i32| x + 1);
//! let double = Arrow::new(|x: i32| x * 2);
//!
//! // f then g
//! assert_eq!(compose(inc.clone(), double.clone()).run(3), 8);
//! // g after f
//! assert_eq!(double.after(inc).run(3), 8);
//! ```
//!
//! ## Failures
//!
//! The algebra never intercepts failures. A panic in a wrapped function
//! unwinds through every composed arrow, and `Result` targets are plain data
//! that the [`fallible`] combinators short-circuit on.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod arrow;
pub mod async_arrow;
pub mod fallible;
#[cfg(feature = "tracing")]
pub mod instrument;
pub mod pair;
pub mod scoped;
pub mod testing;

// Re-exports
pub use arrow::{Arrow, Kleisli};
pub use async_arrow::{AsyncArrow, AsyncKleisli};
pub use scoped::{ScopedArrow, ScopedKleisli};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::arrow::{Arrow, Kleisli};
    pub use crate::async_arrow::{AsyncArrow, AsyncKleisli};
    #[cfg(feature = "tracing")]
    pub use crate::instrument::ArrowTracingExt;
    pub use crate::pair::{diagonal, pair};
    pub use crate::scoped::{ScopedArrow, ScopedKleisli};
}
