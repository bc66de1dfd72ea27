//! # Id Behaviors — Generation/Validation Strategies
//!
//! An [`IdBehavior`] encapsulates the rules for one identifier shape. All
//! functions are associated (no `self`): a behavior is a type, not a value,
//! and `Id<B>` resolves it at compile time.
//!
//! ## Contract
//!
//! For every behavior, `format` must produce text that `try_parse` accepts
//! and reconstructs to an equal raw value. `next` may be undefined
//! ([`UnsupportedError::NextUndefined`]) for shapes whose sequence lives
//! outside the process, like [`Int32Behavior`].

use std::fmt;

use uuid::Uuid;
use waarde_core::UnsupportedError;

/// Generation/parsing strategy for one identifier shape.
pub trait IdBehavior {
    /// The raw value this behavior wraps: a UUID, an integer, a formatted
    /// string.
    type Raw: Clone + PartialEq + fmt::Debug;

    /// Behavior name used in diagnostics and errors.
    const NAME: &'static str;

    /// Generates the next identifier.
    ///
    /// # Errors
    ///
    /// [`UnsupportedError::NextUndefined`] when the behavior has no
    /// generator.
    fn next() -> Result<Self::Raw, UnsupportedError>;

    /// Whether the behavior recognizes `raw` as a well-formed identifier.
    fn supports(raw: &Self::Raw) -> bool;

    /// Canonical textual form of `raw`.
    fn format(raw: &Self::Raw) -> String;

    /// Parses the textual form back to a raw value, `None` on mismatch.
    fn try_parse(s: &str) -> Option<Self::Raw>;
}

/// Random 128-bit identifiers in canonical hyphenated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UuidBehavior;

impl IdBehavior for UuidBehavior {
    type Raw = Uuid;

    const NAME: &'static str = "UuidBehavior";

    fn next() -> Result<Uuid, UnsupportedError> {
        Ok(Uuid::new_v4())
    }

    fn supports(_raw: &Uuid) -> bool {
        true
    }

    fn format(raw: &Uuid) -> String {
        raw.hyphenated().to_string()
    }

    fn try_parse(s: &str) -> Option<Uuid> {
        Uuid::parse_str(s).ok()
    }
}

/// 32-bit integer identifiers.
///
/// `next` is deliberately undefined: a monotonic integer sequence belongs
/// to an external source (a database sequence, a counter service), not to
/// this library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Int32Behavior;

impl IdBehavior for Int32Behavior {
    type Raw = i32;

    const NAME: &'static str = "Int32Behavior";

    fn next() -> Result<i32, UnsupportedError> {
        Err(UnsupportedError::NextUndefined {
            behavior: Self::NAME,
        })
    }

    fn supports(_raw: &i32) -> bool {
        true
    }

    fn format(raw: &i32) -> String {
        raw.to_string()
    }

    fn try_parse(s: &str) -> Option<i32> {
        s.parse().ok()
    }
}
