//! # Iban
//!
//! International Bank Account Numbers. Parsing normalizes (inner whitespace
//! stripped, uppercased), checks the structural shape, and verifies the
//! ISO 7064 mod-97 checksum. Canonical text is the compact machine form;
//! [`Iban::formatted`] gives the human form in groups of four.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use waarde_core::{parse_sentinels, FormatError, ValueObject, ValueState, UNKNOWN_MARKER};

use crate::country::{self, Country};

fn structure() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new("^[A-Z]{2}[0-9]{2}[A-Z0-9]{11,30}$").expect("valid regex")
    })
}

/// An IBAN value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Iban(ValueState<String>);

impl Iban {
    /// The country from the leading alpha-2 code. `Unknown` when the code
    /// is not in the built-in table.
    pub fn country(&self) -> Country {
        match &self.0 {
            ValueState::Empty => Country::empty(),
            ValueState::Unknown => Country::unknown(),
            ValueState::Valid(s) => Country::parse_lossy(&s[..2]),
        }
    }

    /// The human-readable form, grouped in blocks of four.
    pub fn formatted(&self) -> String {
        match &self.0 {
            ValueState::Empty => String::new(),
            ValueState::Unknown => UNKNOWN_MARKER.to_string(),
            ValueState::Valid(s) => {
                let mut out = String::with_capacity(s.len() + s.len() / 4);
                for (i, ch) in s.chars().enumerate() {
                    if i > 0 && i % 4 == 0 {
                        out.push(' ');
                    }
                    out.push(ch);
                }
                out
            }
        }
    }
}

/// ISO 7064 mod-97-10 over the rearranged IBAN: valid numbers reduce to 1.
fn mod97(iban: &str) -> u32 {
    let rearranged = iban[4..].chars().chain(iban[..4].chars());
    let mut acc: u32 = 0;
    for ch in rearranged {
        if let Some(d) = ch.to_digit(10) {
            acc = (acc * 10 + d) % 97;
        } else {
            let letter = ch as u32 - 'A' as u32 + 10;
            acc = (acc * 100 + letter) % 97;
        }
    }
    acc
}

impl ValueObject for Iban {
    fn empty() -> Self {
        Self(ValueState::Empty)
    }

    fn unknown() -> Self {
        Self(ValueState::Unknown)
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn is_unknown(&self) -> bool {
        self.0.is_unknown()
    }

    fn parse(s: &str) -> Result<Self, FormatError> {
        if let Some(v) = parse_sentinels::<Self>(s) {
            return Ok(v);
        }
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if !structure().is_match(&normalized)
            || country::find_alpha2(&normalized[..2]).is_none()
            || mod97(&normalized) != 1
        {
            return Err(FormatError::new("IBAN", s));
        }
        Ok(Self(ValueState::Valid(normalized)))
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ValueState::Empty => Ok(()),
            ValueState::Unknown => f.write_str(UNKNOWN_MARKER),
            ValueState::Valid(s) => f.write_str(s),
        }
    }
}

waarde_core::impl_value_object_text!(Iban);
