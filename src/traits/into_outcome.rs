//! Trait for converting fallible return types into an [`Outcome`].
//!
//! APIs that accept "whatever a fallible step returned" can take
//! `impl IntoOutcome<V, E>` and work with plain `Result`s and `Outcome`s alike.
//!
//! # Implementations
//!
//! - `Result<V, E>` - `Ok` and `Err` map onto the matching variant
//! - `Outcome<V, E>` - Identity conversion (no-op)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{traits::IntoOutcome, Outcome};
//!
//! fn first_success<A, B>(primary: A, fallback: B) -> Outcome<u32, &'static str>
//! where
//!     A: IntoOutcome<u32, &'static str>,
//!     B: IntoOutcome<u32, &'static str>,
//! {
//!     primary.into_outcome().on_err(|_| fallback.into_outcome())
//! }
//!
//! let from_std: Result<u32, &str> = Err("db down");
//! assert_eq!(first_success(from_std, Outcome::ok(7)), Outcome::ok(7));
//! ```
use crate::outcome::Outcome;

/// Converts a type into an [`Outcome`] without changing its variant or payload.
///
/// # Implementing for Custom Types
///
/// ```
/// use outcome_rail::{traits::IntoOutcome, Outcome};
///
/// enum Lookup {
///     Found(u64),
///     Missing(&'static str),
/// }
///
/// impl IntoOutcome<u64, &'static str> for Lookup {
///     fn into_outcome(self) -> Outcome<u64, &'static str> {
///         match self {
///             Lookup::Found(id) => Outcome::ok(id),
///             Lookup::Missing(key) => Outcome::err(key),
///         }
///     }
/// }
///
/// assert!(Lookup::Missing("user").into_outcome().is_error());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be converted into `Outcome<{V}, {E}>`",
    label = "this type does not implement `IntoOutcome<{V}, {E}>`",
    note = "return an `Outcome` or a `Result` from the step, or implement `IntoOutcome` manually"
)]
pub trait IntoOutcome<V, E> {
    /// Converts `self` into an [`Outcome`].
    fn into_outcome(self) -> Outcome<V, E>;
}

impl<V, E> IntoOutcome<V, E> for Result<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        Outcome::from_result(self)
    }
}

impl<V, E> IntoOutcome<V, E> for Outcome<V, E> {
    /// Identity conversion for `Outcome` (no-op).
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        self
    }
}
