//! Tracing integration for outcome-rail.
//!
//! Containers never log on their own. This module lets a caller report an
//! [`Outcome`] through the `tracing` ecosystem at a point of its choosing,
//! tagging the event with the span it was emitted in.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Debug;

use tracing::Span;

use crate::outcome::Outcome;

/// Extension trait that reports an [`Outcome`] as `tracing` events.
///
/// Every method returns the receiver unchanged, so it can sit anywhere in a
/// combinator chain.
///
/// # Example
///
/// ```
/// use outcome_rail::tracing_ext::OutcomeTraceExt;
/// use outcome_rail::Outcome;
///
/// fn read_tokens(id: u32) -> Outcome<Vec<String>, String> {
///     Outcome::err(format!("tokens {id} not found"))
/// }
///
/// let tokens = read_tokens(21)
///     .trace_err("reading tokens from DB")
///     .on_err(|_| Outcome::<_, String>::ok(Vec::new()));
/// assert!(tokens.is_success());
/// ```
pub trait OutcomeTraceExt: Sized {
    /// Emits a `WARN` event carrying the error when the container is `Err`.
    ///
    /// Nothing is emitted for `Ok`.
    fn trace_err(self, message: &str) -> Self;

    /// Emits a `DEBUG` event naming the active variant and its payload.
    fn trace_outcome(self, message: &str) -> Self;
}

impl<V: Debug, E: Debug> OutcomeTraceExt for Outcome<V, E> {
    fn trace_err(self, message: &str) -> Self {
        if let Outcome::Err(error) = &self {
            tracing::warn!(
                error = ?error,
                span = span_name(&Span::current()),
                "{}",
                message
            );
        }
        self
    }

    fn trace_outcome(self, message: &str) -> Self {
        let span = Span::current();
        match &self {
            Outcome::Ok(value) => tracing::debug!(
                variant = "ok",
                value = ?value,
                span = span_name(&span),
                "{}",
                message
            ),
            Outcome::Err(error) => tracing::debug!(
                variant = "err",
                error = ?error,
                span = span_name(&span),
                "{}",
                message
            ),
        }
        self
    }
}

/// Name of `span`, or `"none"` when the span is disabled or absent.
fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|meta| meta.name()).unwrap_or("none")
}
