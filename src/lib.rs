//! An `Ok`/`Err` container for the outcome of a fallible operation, plus the
//! combinators that chain such operations without nesting.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining Fallible Steps
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! fn fetch(url: &str) -> Outcome<Vec<&'static str>, String> {
//!     if url.is_empty() {
//!         Outcome::err("empty url".to_string())
//!     } else {
//!         Outcome::ok(vec!["one", "two", "three"])
//!     }
//! }
//!
//! fn store(tokens: Vec<&str>) -> Outcome<u32, String> {
//!     Outcome::ok(tokens.len() as u32)
//! }
//!
//! let stored = fetch("a.com").on_ok(store).on_ok_map(|id| id * 10);
//! assert_eq!(stored, Outcome::ok(30));
//!
//! let failed = fetch("").on_ok(store).on_ok_map(|id| id * 10);
//! assert_eq!(failed.error_or(String::new()), "empty url");
//! ```
//!
//! ## Fallback Chains
//!
//! ```
//! use outcome_rail::Outcome;
//!
//! let value = Outcome::<u32, &str>::err("not in DB")
//!     .on_err(|_| Outcome::err("not in API"))
//!     .on_err(|_| Outcome::<u32, &str>::ok(20));
//! assert_eq!(value.value_or(0), 20);
//! ```
//!
//! ## Handling Both Slots
//!
//! ```
//! use outcome_rail::{slot::is_absent, Outcome};
//!
//! let content = Outcome::<&str, &str>::err("read error").handle(|value, error| {
//!     assert!(is_absent(&value));
//!     assert_eq!(error, Some("read error"));
//!     value.unwrap_or("from local DB")
//! });
//! assert_eq!(content, "from local DB");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Conversions between `Result`, `Option` and `Outcome`
pub mod convert;
/// The `Outcome` container and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Absent-slot classification
pub mod slot;
/// Conversion traits for fallible return types
pub mod traits;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::{option_to_outcome, outcome_to_result, result_to_outcome};
pub use outcome::Outcome;
pub use slot::{Presence, Slot};
pub use traits::IntoOutcome;
