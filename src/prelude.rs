//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! let value: Slot<i32> = Outcome::<i32, &str>::ok(3).into_value();
//! assert!(value.is_present());
//! ```

pub use crate::outcome::Outcome;
pub use crate::slot::{Presence, Slot};
pub use crate::traits::IntoOutcome;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::OutcomeTraceExt;
