//! # Postcode
//!
//! Postal codes with per-format validation. The Dutch format (`1234 AB`,
//! no leading zero, letter pairs `SA`/`SD`/`SS` excluded) is canonicalized
//! with a single space; anything else falls through to a permissive generic
//! format. The value remembers which format matched.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use waarde_core::{parse_sentinels, FormatError, ValueObject, ValueState, UNKNOWN_MARKER};

/// Which validation format a postcode matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostcodeFormat {
    /// `1234 AB`.
    Dutch,
    /// Any short run of letters, digits, spaces and hyphens.
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PostcodeValue {
    text: String,
    format: PostcodeFormat,
}

/// A postcode value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Postcode(ValueState<PostcodeValue>);

fn dutch() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new("^([1-9][0-9]{3}) ?([A-Z]{2})$").expect("valid regex")
    })
}

fn generic() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new("^[A-Z0-9][A-Z0-9 -]{1,9}$").expect("valid regex")
    })
}

const EXCLUDED_DUTCH_LETTERS: [&str; 3] = ["SA", "SD", "SS"];

impl Postcode {
    /// The format this postcode was validated against, if valid.
    pub fn format(&self) -> Option<PostcodeFormat> {
        self.0.as_valid().map(|v| v.format)
    }

    fn match_dutch(s: &str) -> Option<String> {
        let caps = dutch().captures(s)?;
        let (digits, letters) = (&caps[1], &caps[2]);
        if EXCLUDED_DUTCH_LETTERS.contains(&letters) {
            return None;
        }
        Some(format!("{digits} {letters}"))
    }
}

impl ValueObject for Postcode {
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
        let normalized = s.trim().to_ascii_uppercase();
        let value = if let Some(text) = Self::match_dutch(&normalized) {
            PostcodeValue {
                text,
                format: PostcodeFormat::Dutch,
            }
        } else if generic().is_match(&normalized) {
            PostcodeValue {
                text: normalized,
                format: PostcodeFormat::Generic,
            }
        } else {
            return Err(FormatError::new("postcode", s));
        };
        Ok(Self(ValueState::Valid(value)))
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ValueState::Empty => Ok(()),
            ValueState::Unknown => f.write_str(UNKNOWN_MARKER),
            ValueState::Valid(v) => f.write_str(&v.text),
        }
    }
}

waarde_core::impl_value_object_text!(Postcode);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert!(Postcode::parse("").unwrap().is_empty());
        assert!(Postcode::parse("?").unwrap().is_unknown());
        assert_ne!(Postcode::empty(), Postcode::unknown());
    }

    #[test]
    fn test_dutch_canonicalized_with_one_space() {
        let pc = Postcode::parse("2624DP").unwrap();
        assert_eq!(pc.to_string(), "2624 DP");
        assert_eq!(pc.format(), Some(PostcodeFormat::Dutch));
        assert_eq!(Postcode::parse("2624 dp").unwrap(), pc);
    }

    #[test]
    fn test_dutch_rejects_leading_zero() {
        // Not Dutch, but still a fine generic postcode.
        let pc = Postcode::parse("0624 DP").unwrap();
        assert_eq!(pc.format(), Some(PostcodeFormat::Generic));
    }

    #[test]
    fn test_dutch_excluded_letter_pairs() {
        for rejected in ["1234 SA", "1234 SD", "1234 SS"] {
            let pc = Postcode::parse(rejected).unwrap();
            assert_eq!(pc.format(), Some(PostcodeFormat::Generic));
        }
        assert_eq!(
            Postcode::parse("1234 SB").unwrap().format(),
            Some(PostcodeFormat::Dutch)
        );
    }

    #[test]
    fn test_generic() {
        let pc = Postcode::parse("SW1A 1AA").unwrap();
        assert_eq!(pc.format(), Some(PostcodeFormat::Generic));
        assert_eq!(pc.to_string(), "SW1A 1AA");
        assert_eq!(
            Postcode::parse("12345-6789").unwrap().format(),
            Some(PostcodeFormat::Generic)
        );
    }

    #[test]
    fn test_invalid() {
        assert!(Postcode::parse("!").is_err());
        assert!(Postcode::parse("X").is_err());
        assert!(Postcode::parse("THIS IS FAR TOO LONG FOR A POSTCODE").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let pc = Postcode::parse("2624 DP").unwrap();
        assert_eq!(Postcode::parse(&pc.to_string()).unwrap(), pc);
    }

    #[test]
    fn test_serde() {
        let pc = Postcode::parse("2624DP").unwrap();
        assert_eq!(serde_json::to_string(&pc).unwrap(), "\"2624 DP\"");
        let garbage: Postcode = serde_json::from_str("\"!!\"").unwrap();
        assert!(garbage.is_unknown());
    }
}
