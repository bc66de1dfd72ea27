//! # waarde-core — Foundational Contract for the waarde Library
//!
//! This crate is the bedrock of the waarde workspace. It defines the shared
//! parsing/formatting contract every value type in the library implements.
//! Every other `waarde-*` crate depends on `waarde-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Three canonical instance classes.** Every value type has exactly
//!    three kinds of instance: `Empty` (absence of input), `Unknown` (input
//!    was present but could not be classified), and a valid value. The
//!    [`ValueState`] sum type makes the distinction exhaustive, with no
//!    sentinel backing fields and no equality tricks.
//!
//! 2. **One reserved marker.** The string `"?"` ([`UNKNOWN_MARKER`]) always
//!    parses to `Unknown`, and `Unknown` always formats back to it. The
//!    empty string always parses to `Empty` and formats back to `""`.
//!
//! 3. **Round-trip law.** For every valid value `x`,
//!    `parse(&x.to_string()) == Ok(x)`. Serialization adapters rely on
//!    exactly this: the canonical `Display` output is the wire format.
//!
//! 4. **Errors are values.** Validation failures surface synchronously as
//!    structured `thiserror` types. Nothing panics, and nothing falls back
//!    silently except the documented `Unknown` fallback of
//!    [`ValueObject::parse_lossy`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `waarde-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod serde_support;
pub mod state;
pub mod value_state;

pub use error::{FormatError, IncompatibleUnitsError, InvalidTransitionError, UnsupportedError};
pub use state::State;
pub use value_state::{parse_sentinels, ValueObject, ValueState, UNKNOWN_MARKER};
