//! Tracing support for arrows.
//!
//! [`ArrowTracingExt::instrument`] wraps an arrow so that every invocation
//! runs inside the given span. Synchronous arrows enter the span for the
//! duration of the call. Async and scoped arrows enter it while the future
//! is built and attach it to the future with `tracing::Instrument`, so work
//! done in either phase sees the span.
//! Feature-gated behind `#[cfg(feature = "tracing")]`.
//!
//! `tracing::Instrument` is implemented for every type, arrows included, so
//! importing both traits in one scope makes `.instrument(..)` ambiguous on an
//! arrow. Call this one as `ArrowTracingExt::instrument(arrow, span)` there.

use futures::FutureExt;

use crate::{Arrow, AsyncArrow, ScopedArrow};

/// Extension trait for adding tracing instrumentation to arrows.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait ArrowTracingExt: Sized {
    /// Run every invocation of this arrow inside `span`.
    ///
    /// The span is cloned per invocation, so the returned arrow can run any
    /// number of times and from several tasks at once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arrowcat::prelude::*;
    /// use tracing::info_span;
    ///
    /// let parse = Arrow::new(|s: &'static str| s.len())
    ///     .instrument(info_span!("measure", unit = "bytes"));
    ///
    /// assert_eq!(parse.run("four"), 4);
    /// ```
    fn instrument(self, span: tracing::Span) -> Self;
}

impl<S: 'static, T: 'static> ArrowTracingExt for Arrow<S, T> {
    fn instrument(self, span: tracing::Span) -> Self {
        Arrow::new(move |s| span.in_scope(|| self.run(s)))
    }
}

impl<S: Send + 'static, T: Send + 'static> ArrowTracingExt for AsyncArrow<S, T> {
    fn instrument(self, span: tracing::Span) -> Self {
        use tracing::Instrument as _;
        AsyncArrow::new(move |s| span.in_scope(|| self.run(s)).instrument(span.clone()))
    }
}

impl<C, S, T> ArrowTracingExt for ScopedArrow<C, S, T>
where
    C: Sync + 'static,
    S: Send + 'static,
    T: Send + 'static,
{
    fn instrument(self, span: tracing::Span) -> Self {
        use tracing::Instrument as _;
        ScopedArrow::<C, S, T>::new(move |ctx, s| {
            span.in_scope(|| self.run(ctx, s))
                .instrument(span.clone())
                .boxed()
        })
    }
}
