//! # Serde Support — Canonical-String Adapters
//!
//! Every value type serializes to its canonical `Display` form and
//! deserializes through `parse_lossy`, so unrecognized persisted data
//! degrades to `Unknown` instead of failing the surrounding document.
//! [`impl_value_object_text!`] generates the `FromStr`, `Serialize`, and
//! `Deserialize` implementations for a concrete value type; generic types
//! (`Id<B>`, `Encrypted<T>`) write the same impls by hand.

/// Implements `FromStr`, `serde::Serialize`, and `serde::Deserialize` for a
/// concrete [`ValueObject`](crate::ValueObject) type.
///
/// - `FromStr` delegates to [`ValueObject::parse`](crate::ValueObject::parse),
///   so the strict, error-returning path backs `str::parse`.
/// - `Serialize` writes the canonical `Display` string.
/// - `Deserialize` reads a string through
///   [`ValueObject::parse_lossy`](crate::ValueObject::parse_lossy).
#[macro_export]
macro_rules! impl_value_object_text {
    ($ty:ty) => {
        impl std::str::FromStr for $ty {
            type Err = $crate::FormatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as $crate::ValueObject>::parse(s)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(<$ty as $crate::ValueObject>::parse_lossy(&s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{parse_sentinels, FormatError, ValueObject};
    use std::fmt;

    // A minimal conforming type to exercise the macro end to end.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Digits(crate::ValueState<String>);

    impl fmt::Display for Digits {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match &self.0 {
                crate::ValueState::Empty => Ok(()),
                crate::ValueState::Unknown => f.write_str(crate::UNKNOWN_MARKER),
                crate::ValueState::Valid(v) => f.write_str(v),
            }
        }
    }

    impl ValueObject for Digits {
        fn empty() -> Self {
            Self(crate::ValueState::Empty)
        }

        fn unknown() -> Self {
            Self(crate::ValueState::Unknown)
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
            if s.bytes().all(|b| b.is_ascii_digit()) {
                Ok(Self(crate::ValueState::Valid(s.to_string())))
            } else {
                Err(FormatError::new("digits", s))
            }
        }
    }

    impl_value_object_text!(Digits);

    #[test]
    fn test_serialize_canonical_string() {
        let d = Digits::parse("042").unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "\"042\"");
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let d: Digits = serde_json::from_str("\"12345\"").unwrap();
        assert_eq!(d, Digits::parse("12345").unwrap());
    }

    #[test]
    fn test_deserialize_garbage_falls_back_to_unknown() {
        let d: Digits = serde_json::from_str("\"not-digits\"").unwrap();
        assert!(d.is_unknown());
    }

    #[test]
    fn test_deserialize_empty_string_is_empty() {
        let d: Digits = serde_json::from_str("\"\"").unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn test_fromstr_is_strict() {
        assert!("abc".parse::<Digits>().is_err());
        assert_eq!("7".parse::<Digits>().unwrap().to_string(), "7");
    }

    #[test]
    fn test_sentinels_via_fromstr() {
        assert!("".parse::<Digits>().unwrap().is_empty());
        assert!("?".parse::<Digits>().unwrap().is_unknown());
    }

    proptest::proptest! {
        #[test]
        fn test_serde_roundtrip_preserves_canonical_form(s in "[0-9]{1,18}") {
            let d = Digits::parse(&s).unwrap();
            let json = serde_json::to_string(&d).unwrap();
            let back: Digits = serde_json::from_str(&json).unwrap();
            proptest::prop_assert_eq!(back, d);
        }
    }
}
