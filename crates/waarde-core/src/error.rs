//! # Error Types — Structured Error Taxonomy
//!
//! Defines the error types used throughout the waarde workspace. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Parse failures carry the kind of value attempted and the offending
//!   input.
//! - Unit arithmetic failures name both units involved.
//! - State machine failures name the rejected edge.
//! - All errors are `Clone + PartialEq` so tests can match on them exactly.

use thiserror::Error;

/// Raised by `parse` when input is non-empty, not the reserved marker, and
/// fails validation. Never raised by `parse_lossy`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {input:?}")]
pub struct FormatError {
    /// What kind of value was being parsed, e.g. `"email address"`.
    pub kind: &'static str,
    /// The input that failed validation.
    pub input: String,
}

impl FormatError {
    /// Creates a format error for the given value kind and input.
    pub fn new(kind: &'static str, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}

/// Raised by identifier behaviors for operations outside their contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedError {
    /// A raw value was offered to a behavior that does not recognize it.
    #[error("{behavior} does not support the supplied raw value")]
    UnsupportedValue {
        /// The behavior that rejected the value.
        behavior: &'static str,
    },

    /// The behavior has no generator; identifiers must be supplied
    /// externally (e.g. by a database sequence).
    #[error("{behavior} cannot generate identifiers; supply them externally")]
    NextUndefined {
        /// The behavior without a generator.
        behavior: &'static str,
    },
}

/// Raised by unit arithmetic across non-commensurable dimensions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("incompatible units: cannot combine {left} with {right}")]
pub struct IncompatibleUnitsError {
    /// Base unit name of the left operand.
    pub left: String,
    /// Base unit name of the right operand.
    pub right: String,
}

/// Raised by [`State::transition_to`](crate::State::transition_to) for a
/// disallowed edge.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid transition from {from} to {to}")]
pub struct InvalidTransitionError {
    /// Name (or ordinal) of the current state.
    pub from: String,
    /// Name (or ordinal) of the rejected target state.
    pub to: String,
}
