//! The `Ok`/`Err` container and its combinators.
//!
//! This module provides the [`Outcome`] type, which represents the result of a
//! fallible operation as data instead of a panic or early return. Chains of
//! fallible steps compose through its flattening combinators and collapse back
//! to a single level at every step.
//!
//! # Key Components
//!
//! - [`Outcome`] - Core type holding either a value or an error
//! - Iterator adapters over the success value and short-circuit collection
//!
//! # Examples
//!
//! ```
//! use outcome_rail::outcome::Outcome;
//!
//! fn store(tokens: &[&str]) -> Outcome<u32, String> {
//!     if tokens.is_empty() {
//!         Outcome::err("nothing to store".to_string())
//!     } else {
//!         Outcome::ok(12)
//!     }
//! }
//!
//! let id = Outcome::<_, String>::ok(vec!["one", "two"])
//!     .on_ok(|tokens| store(&tokens))
//!     .on_ok_map(|id| id + 1);
//! assert_eq!(id, Outcome::ok(13));
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
