//! # waarde-objects — Everyday Value Objects
//!
//! Peripheral value types on the `waarde-core` contract: email addresses,
//! countries, IBANs, postcodes, initials, roman numerals, energy labels,
//! and type-tagged ciphertext. Each parses from its canonical text, keeps
//! the `Empty`/`Unknown` sentinels, and serializes as a plain string.
//!
//! ```
//! use waarde_core::ValueObject;
//! use waarde_objects::{EmailAddress, Iban};
//!
//! let email = EmailAddress::parse("\"Ada Lovelace\" <ada@example.org>")?;
//! assert_eq!(email.domain(), Some("example.org"));
//!
//! let iban = Iban::parse("nl20 ingb 0001 2345 67")?;
//! assert_eq!(iban.to_string(), "NL20INGB0001234567");
//! # Ok::<(), waarde_core::FormatError>(())
//! ```

pub mod country;
pub mod email;
pub mod encrypted;
pub mod energy_label;
pub mod iban;
pub mod initials;
pub mod postcode;
pub mod roman;

pub use country::{Country, CountryDef};
pub use email::EmailAddress;
pub use encrypted::{Cipher, DecryptError, Encrypted};
pub use energy_label::{EnergyLabel, Grade};
pub use iban::Iban;
pub use initials::Initials;
pub use postcode::{Postcode, PostcodeFormat};
pub use roman::RomanNumeral;
