//! Conversion traits for fallible return types.
//!
//! - [`IntoOutcome`]: Accepts a `Result` or an `Outcome` wherever a step's
//!   output is consumed
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//! use outcome_rail::Outcome;
//!
//! let parsed = "42".parse::<i32>().into_outcome();
//! assert_eq!(parsed.on_err_map(|e| e.to_string()), Outcome::ok(42));
//! ```

pub mod into_outcome;

pub use into_outcome::IntoOutcome;
