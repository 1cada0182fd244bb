//! Absent-slot classification.
//!
//! An [`Outcome`](crate::Outcome) only ever populates one of its two sides. When
//! both sides are projected at once (for example by
//! [`Outcome::handle`](crate::Outcome::handle)), the inactive side is reported
//! as an absent [`Slot`].
//!
//! A slot is a plain [`Option`]: `None` is the absent marker and `Some(_)` is
//! present for *every* payload, including absence-like payloads such as
//! `None`, `0`, `""` or `()`. Classification looks at the slot's variant and
//! never compares payload values.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::slot::{self, Presence};
//!
//! let empty: slot::Slot<Option<i32>> = slot::absent();
//! assert!(slot::is_absent(&empty));
//!
//! // An absent-looking payload is still a present slot.
//! let filled: slot::Slot<Option<i32>> = Some(None);
//! assert!(filled.is_present());
//! ```

/// One side of an [`Outcome`](crate::Outcome), `None` when that side is inactive.
pub type Slot<T> = Option<T>;

/// Classification of a slot as absent or present.
pub trait Presence {
    /// Returns `true` if the slot holds the absent marker.
    fn is_absent(&self) -> bool;

    /// Returns `true` if the slot holds a payload, whatever that payload is.
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_absent()
    }
}

impl<T> Presence for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

/// Returns the absent marker for a slot of type `T`.
///
/// # Examples
///
/// ```
/// use outcome_rail::slot;
///
/// assert_eq!(slot::absent::<&str>(), None);
/// ```
#[must_use]
#[inline]
pub const fn absent<T>() -> Slot<T> {
    None
}

/// Returns `true` iff `slot` is the absent marker.
///
/// # Examples
///
/// ```
/// use outcome_rail::slot::is_absent;
///
/// assert!(is_absent(&None::<u8>));
/// assert!(!is_absent(&Some(0u8)));
/// assert!(!is_absent(&Some("")));
/// ```
#[must_use]
#[inline]
pub fn is_absent<P: Presence + ?Sized>(slot: &P) -> bool {
    slot.is_absent()
}

/// Logical negation of [`is_absent`].
#[must_use]
#[inline]
pub fn is_present<P: Presence + ?Sized>(slot: &P) -> bool {
    slot.is_present()
}
