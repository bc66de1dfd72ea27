//! # Value State — The Three-State Contract
//!
//! Defines [`ValueState`], the tagged representation of a value object's
//! payload, and [`ValueObject`], the parsing/formatting trait every value
//! type in the workspace implements.
//!
//! ## Contract
//!
//! - `parse("")` is `Ok(Empty)`.
//! - `parse("?")` is `Ok(Unknown)`.
//! - Any other input is fully validated; failure is a [`FormatError`].
//! - `parse_lossy` never fails: invalid input becomes `Unknown`. This is
//!   the path deserialization adapters use.
//! - `Display` is the canonical form: `Empty` renders as `""`, `Unknown`
//!   as `"?"`, and every valid value renders to text its own `parse`
//!   accepts and reconstructs equal (the round-trip law).

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// The reserved marker string that parses to `Unknown` for every value type.
pub const UNKNOWN_MARKER: &str = "?";

/// The payload of a value object: absent, unclassifiable, or a valid value.
///
/// Making the three states an explicit sum type keeps them exhaustively
/// checkable in `match`: a value type cannot forget to handle `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueState<T> {
    /// No input. The type's zero/absence value.
    #[default]
    Empty,
    /// Input was present but could not be classified or validated.
    Unknown,
    /// A successfully validated value.
    Valid(T),
}

impl<T> ValueState<T> {
    /// Returns `true` for the `Empty` state.
    pub const fn is_empty(&self) -> bool {
        matches!(self, ValueState::Empty)
    }

    /// Returns `true` for the `Unknown` state.
    pub const fn is_unknown(&self) -> bool {
        matches!(self, ValueState::Unknown)
    }

    /// Returns `true` when a validated value is present.
    pub const fn is_valid(&self) -> bool {
        matches!(self, ValueState::Valid(_))
    }

    /// Borrows the validated value, if any.
    pub const fn as_valid(&self) -> Option<&T> {
        match self {
            ValueState::Valid(v) => Some(v),
            _ => None,
        }
    }

    /// Maps the valid payload, preserving `Empty`/`Unknown`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValueState<U> {
        match self {
            ValueState::Empty => ValueState::Empty,
            ValueState::Unknown => ValueState::Unknown,
            ValueState::Valid(v) => ValueState::Valid(f(v)),
        }
    }

    /// Returns the valid payload, or `default` for `Empty`/`Unknown`.
    pub fn value_or(self, default: T) -> T {
        match self {
            ValueState::Valid(v) => v,
            _ => default,
        }
    }
}

/// The uniform parsing/formatting protocol of the waarde library.
///
/// Generic infrastructure (serde adapters, collection helpers) treats any
/// conforming type through exactly this surface.
pub trait ValueObject: Sized + fmt::Display + FromStr<Err = FormatError> {
    /// The type's absence value. Produced by parsing the empty string.
    fn empty() -> Self;

    /// The type's "present but unrecognized" sentinel. Produced by parsing
    /// [`UNKNOWN_MARKER`]. Distinct from [`ValueObject::empty`] for every type.
    fn unknown() -> Self;

    /// Returns `true` when this instance is the `Empty` value.
    fn is_empty(&self) -> bool;

    /// Returns `true` when this instance is the `Unknown` sentinel.
    fn is_unknown(&self) -> bool;

    /// Parses the canonical string form.
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] when the input is non-empty, not the
    /// reserved marker, and fails validation.
    fn parse(s: &str) -> Result<Self, FormatError>;

    /// Non-failing parse: invalid input becomes `Unknown`.
    ///
    /// Serialization adapters read through this so that unrecognized
    /// persisted data degrades to `Unknown` instead of failing the whole
    /// document.
    fn parse_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|_| Self::unknown())
    }
}

/// Handles the two reserved inputs shared by every `parse` implementation.
///
/// Returns `Some(empty)` for `""`, `Some(unknown)` for the marker, and
/// `None` when the input needs type-specific validation.
pub fn parse_sentinels<T: ValueObject>(s: &str) -> Option<T> {
    if s.is_empty() {
        Some(T::empty())
    } else if s == UNKNOWN_MARKER {
        Some(T::unknown())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let state: ValueState<i32> = ValueState::default();
        assert!(state.is_empty());
    }

    #[test]
    fn test_empty_and_unknown_are_distinct() {
        assert_ne!(ValueState::<i32>::Empty, ValueState::<i32>::Unknown);
    }

    #[test]
    fn test_as_valid() {
        assert_eq!(ValueState::Valid(7).as_valid(), Some(&7));
        assert_eq!(ValueState::<i32>::Unknown.as_valid(), None);
        assert_eq!(ValueState::<i32>::Empty.as_valid(), None);
    }

    #[test]
    fn test_map_preserves_sentinels() {
        assert_eq!(ValueState::<i32>::Empty.map(|v| v + 1), ValueState::Empty);
        assert_eq!(
            ValueState::<i32>::Unknown.map(|v| v + 1),
            ValueState::Unknown
        );
        assert_eq!(ValueState::Valid(1).map(|v| v + 1), ValueState::Valid(2));
    }

    #[test]
    fn test_value_or() {
        assert_eq!(ValueState::Valid(3).value_or(0), 3);
        assert_eq!(ValueState::<i32>::Empty.value_or(0), 0);
        assert_eq!(ValueState::<i32>::Unknown.value_or(0), 0);
    }
}
