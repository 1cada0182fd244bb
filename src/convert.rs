//! Conversion helpers between `Result`, `Option` and `Outcome`.
//!
//! These adapters make it straightforward to adopt `outcome-rail` at the edges
//! of existing code: wrap a standard `Result` on the way in, hand one back on
//! the way out, and use `?` through [`Outcome::into_result`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_success());
//!
//! fn total(values: Outcome<Vec<i32>, &'static str>) -> Result<i32, &'static str> {
//!     let values = values.into_result()?;
//!     Ok(values.iter().sum())
//! }
//! assert_eq!(total(Outcome::ok(vec![1, 2, 3])), Ok(6));
//! ```

use crate::outcome::Outcome;

/// Converts a `Result` into an `Outcome`, keeping the variant.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(result_to_outcome(Err::<i32, _>("failed")), Outcome::err("failed"));
/// ```
#[inline]
pub fn result_to_outcome<V, E>(result: Result<V, E>) -> Outcome<V, E> {
    Outcome::from_result(result)
}

/// Converts an `Outcome` into a `Result`, keeping the variant.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// assert_eq!(outcome_to_result(Outcome::<_, &str>::ok(7)), Ok(7));
/// ```
#[inline]
pub fn outcome_to_result<V, E>(outcome: Outcome<V, E>) -> Result<V, E> {
    outcome.into_result()
}

/// Converts an `Option` into an `Outcome`, using `error` when it is `None`.
///
/// # Arguments
///
/// * `option` - The optional value
/// * `error` - Error used for the `None` case
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
/// use outcome_rail::Outcome;
///
/// assert_eq!(option_to_outcome(Some(3), "missing"), Outcome::ok(3));
/// assert_eq!(option_to_outcome(None::<i32>, "missing"), Outcome::err("missing"));
/// ```
#[inline]
pub fn option_to_outcome<V, E>(option: Option<V>, error: E) -> Outcome<V, E> {
    match option {
        Some(value) => Outcome::Ok(value),
        None => Outcome::Err(error),
    }
}

impl<V, E> Outcome<V, E> {
    /// Wraps a standard `Result`.
    #[inline]
    pub fn from_result(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }

    /// Converts into a standard `Result`, which makes `?` available.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::err("e").into_result(), Err("e"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        Self::from_result(result)
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}
