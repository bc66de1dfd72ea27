//! # waarde-measure — Units of Measure
//!
//! A [`Unit`] is a scaled physical unit: a value times a catalog symbol.
//! Catalog symbols form chains through their `base` pointer, terminating at
//! a root unit with factor 1 (Gram, Metre, Litre, …). Two units are
//! *commensurable* (addable, convertible) exactly when their chains reduce
//! to the same root.
//!
//! ```
//! use waarde_measure::metric::length::{KILOMETRE, METRE};
//!
//! let walked = METRE.scale(2500.0);
//! let km = walked.convert_to(&KILOMETRE).unwrap();
//! assert_eq!(km, KILOMETRE.scale(2.5));
//! ```
//!
//! Arithmetic across dimensions fails with an
//! [`IncompatibleUnitsError`](waarde_core::IncompatibleUnitsError):
//! metres and grams never add.

pub mod imperial;
pub mod metric;
pub mod unit;

pub use unit::{Unit, UnitDef};
