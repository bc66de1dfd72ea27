//! # Initials
//!
//! Name initials, canonicalized to dotted uppercase: `"ab"`, `"A.B."` and
//! `"a. b."` all become `"A.B."`. [`Initials::from_names`] derives them
//! from full names.

use std::fmt;

use waarde_core::{parse_sentinels, FormatError, ValueObject, ValueState, UNKNOWN_MARKER};

/// An initials value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Initials(ValueState<String>);

impl Initials {
    /// Derives initials from whitespace-separated names:
    /// `from_names("Pieter Jan")` is `"P.J."`.
    #[must_use]
    pub fn from_names(names: &str) -> Self {
        let letters: String = names
            .split_whitespace()
            .filter_map(|name| name.chars().next())
            .collect();
        Self::parse_lossy(&letters)
    }

    /// The number of initials.
    pub fn len(&self) -> usize {
        match self.0.as_valid() {
            Some(s) => s.matches('.').count(),
            None => 0,
        }
    }

    /// Whether there are no initials (sentinels included).
    pub fn is_blank(&self) -> bool {
        self.len() == 0
    }
}

impl ValueObject for Initials {
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
        let mut canonical = String::new();
        for ch in s.chars() {
            if ch == '.' || ch.is_whitespace() {
                continue;
            }
            if !ch.is_alphabetic() {
                return Err(FormatError::new("initials", s));
            }
            canonical.extend(ch.to_uppercase());
            canonical.push('.');
        }
        if canonical.is_empty() {
            return Err(FormatError::new("initials", s));
        }
        Ok(Self(ValueState::Valid(canonical)))
    }
}

impl fmt::Display for Initials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ValueState::Empty => Ok(()),
            ValueState::Unknown => f.write_str(UNKNOWN_MARKER),
            ValueState::Valid(s) => f.write_str(s),
        }
    }
}

waarde_core::impl_value_object_text!(Initials);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert!(Initials::parse("").unwrap().is_empty());
        assert!(Initials::parse("?").unwrap().is_unknown());
        assert_ne!(Initials::empty(), Initials::unknown());
    }

    #[test]
    fn test_parse_bare_letters() {
        assert_eq!(Initials::parse("ab").unwrap().to_string(), "A.B.");
    }

    #[test]
    fn test_parse_already_dotted() {
        assert_eq!(Initials::parse("A.B.").unwrap().to_string(), "A.B.");
        assert_eq!(Initials::parse("a. b.").unwrap().to_string(), "A.B.");
    }

    #[test]
    fn test_from_names() {
        let initials = Initials::from_names("Pieter Jan");
        assert_eq!(initials.to_string(), "P.J.");
        assert_eq!(initials.len(), 2);
        assert!(Initials::from_names("").is_empty());
    }

    #[test]
    fn test_len() {
        assert_eq!(Initials::parse("abc").unwrap().len(), 3);
        assert_eq!(Initials::empty().len(), 0);
        assert!(Initials::empty().is_blank());
    }

    #[test]
    fn test_invalid() {
        assert!(Initials::parse("A1").is_err());
        assert!(Initials::parse("...").is_err());
    }

    #[test]
    fn test_roundtrip() {
        let i = Initials::parse("p.j.").unwrap();
        assert_eq!(Initials::parse(&i.to_string()).unwrap(), i);
    }

    #[test]
    fn test_serde() {
        let i = Initials::parse("pj").unwrap();
        assert_eq!(serde_json::to_string(&i).unwrap(), "\"P.J.\"");
        let garbage: Initials = serde_json::from_str("\"4!\"").unwrap();
        assert!(garbage.is_unknown());
    }
}
