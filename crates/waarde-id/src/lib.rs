//! # waarde-id — Typed Identifiers with Pluggable Behaviors
//!
//! An identifier's "shape" (how it is generated, validated, and rendered)
//! is a strategy selected at the type level. Each shape is an
//! [`IdBehavior`] implementation; [`Id<B>`] binds a raw identifier value to
//! exactly one behavior, so `Id<UuidBehavior>` and `Id<Int32Behavior>` are
//! distinct, non-interchangeable types.
//!
//! ## Behaviors
//!
//! - [`UuidBehavior`]: random 128-bit identifiers, canonical hyphenated
//!   text.
//! - [`Int32Behavior`]: 32-bit integers parsed from decimal text. Has no
//!   generator, the "next" value must come from an external sequence.
//! - [`hid_behavior!`]: human-readable identifiers of the form
//!   `YEAR-NAME-NUMBER`, one generated behavior type per `NAME`.
//!
//! Behaviors are stateless and resolved entirely at compile time. There is
//! no registry and no runtime dispatch.

pub mod behavior;
pub mod hid;
pub mod id;

pub use behavior::{IdBehavior, Int32Behavior, UuidBehavior};
pub use id::Id;

// Re-exported for the `hid_behavior!` macro expansion.
pub use waarde_core::UnsupportedError;
