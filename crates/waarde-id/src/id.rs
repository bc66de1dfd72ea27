//! # Id — Generic Identifier Value Type
//!
//! [`Id<B>`] wraps a raw identifier value together with a type-level
//! binding to exactly one [`IdBehavior`]. The wrapped raw value, when
//! present, always satisfies `B::supports`. Equality is raw-value equality
//! within the same behavior binding; ids of different behaviors are
//! different types and never compare.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use waarde_core::{
    parse_sentinels, FormatError, UnsupportedError, ValueObject, ValueState, UNKNOWN_MARKER,
};

use crate::behavior::IdBehavior;

/// An identifier with behavior `B`: `Empty`, `Unknown`, or a validated raw
/// value.
pub struct Id<B: IdBehavior> {
    state: ValueState<B::Raw>,
    _behavior: PhantomData<B>,
}

impl<B: IdBehavior> Id<B> {
    const fn from_state(state: ValueState<B::Raw>) -> Self {
        Self {
            state,
            _behavior: PhantomData,
        }
    }

    /// Generates a new identifier with behavior `B`.
    ///
    /// # Errors
    ///
    /// Propagates [`UnsupportedError::NextUndefined`] from behaviors
    /// without a generator.
    pub fn next() -> Result<Self, UnsupportedError> {
        Ok(Self::from_state(ValueState::Valid(B::next()?)))
    }

    /// Wraps an existing raw value after validating it against `B`.
    ///
    /// # Errors
    ///
    /// [`UnsupportedError::UnsupportedValue`] when `B` does not recognize
    /// the value.
    pub fn create(raw: B::Raw) -> Result<Self, UnsupportedError> {
        if B::supports(&raw) {
            Ok(Self::from_state(ValueState::Valid(raw)))
        } else {
            Err(UnsupportedError::UnsupportedValue { behavior: B::NAME })
        }
    }

    /// Borrows the wrapped raw value, if this id is valid.
    pub const fn raw(&self) -> Option<&B::Raw> {
        self.state.as_valid()
    }
}

impl<B: IdBehavior> ValueObject for Id<B> {
    fn empty() -> Self {
        Self::from_state(ValueState::Empty)
    }

    fn unknown() -> Self {
        Self::from_state(ValueState::Unknown)
    }

    fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    fn is_unknown(&self) -> bool {
        self.state.is_unknown()
    }

    fn parse(s: &str) -> Result<Self, FormatError> {
        if let Some(v) = parse_sentinels::<Self>(s) {
            return Ok(v);
        }
        match B::try_parse(s) {
            Some(raw) => Ok(Self::from_state(ValueState::Valid(raw))),
            None => Err(FormatError::new("identifier", s)),
        }
    }
}

impl<B: IdBehavior> fmt::Display for Id<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            ValueState::Empty => Ok(()),
            ValueState::Unknown => f.write_str(UNKNOWN_MARKER),
            ValueState::Valid(raw) => f.write_str(&B::format(raw)),
        }
    }
}

impl<B: IdBehavior> fmt::Debug for Id<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Id").field(&self.state).finish()
    }
}

impl<B: IdBehavior> Clone for Id<B> {
    fn clone(&self) -> Self {
        Self::from_state(self.state.clone())
    }
}

impl<B: IdBehavior> PartialEq for Id<B> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<B: IdBehavior> Eq for Id<B> where B::Raw: Eq {}

impl<B: IdBehavior> Hash for Id<B>
where
    B::Raw: Hash,
{
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.state.hash(hasher);
    }
}

impl<B: IdBehavior> Default for Id<B> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<B: IdBehavior> FromStr for Id<B> {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<B: IdBehavior> serde::Serialize for Id<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de, B: IdBehavior> serde::Deserialize<'de> for Id<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lossy(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::{Int32Behavior, UuidBehavior};
    use crate::hid_behavior;
    use uuid::Uuid;

    hid_behavior!(HydoBehavior, "HYDO");

    #[test]
    fn test_empty_and_unknown_are_distinct() {
        assert_ne!(Id::<UuidBehavior>::empty(), Id::<UuidBehavior>::unknown());
    }

    #[test]
    fn test_empty_string_parses_to_empty() {
        let id = Id::<UuidBehavior>::parse("").unwrap();
        assert!(id.is_empty());
        assert_eq!(id.to_string(), "");
    }

    #[test]
    fn test_marker_parses_to_unknown() {
        let id = Id::<UuidBehavior>::parse("?").unwrap();
        assert!(id.is_unknown());
        assert_eq!(id.to_string(), "?");
    }

    #[test]
    fn test_uuid_create_formats_canonically() {
        let raw = Uuid::new_v4();
        let id = Id::<UuidBehavior>::create(raw).unwrap();
        assert_eq!(id.to_string(), raw.hyphenated().to_string());
    }

    #[test]
    fn test_uuid_create_equals_parse_of_text() {
        let raw = Uuid::new_v4();
        let created = Id::<UuidBehavior>::create(raw).unwrap();
        let parsed = Id::<UuidBehavior>::parse(&raw.to_string()).unwrap();
        assert_eq!(created, parsed);
    }

    #[test]
    fn test_uuid_parse_rejects_garbage() {
        let err = Id::<UuidBehavior>::parse("jlaskjdla").unwrap_err();
        assert_eq!(err.kind, "identifier");
    }

    #[test]
    fn test_int32_parse_equals_create() {
        let parsed = Id::<Int32Behavior>::parse("1").unwrap();
        let created = Id::<Int32Behavior>::create(1).unwrap();
        assert_eq!(parsed, created);
    }

    #[test]
    fn test_int32_parse_rejects_garbage() {
        assert!(Id::<Int32Behavior>::parse("not-a-number").is_err());
    }

    #[test]
    fn test_int32_next_is_unsupported() {
        assert_eq!(
            Id::<Int32Behavior>::next(),
            Err(UnsupportedError::NextUndefined {
                behavior: "Int32Behavior"
            })
        );
    }

    #[test]
    fn test_hid_next_contains_family_name() {
        let id = Id::<HydoBehavior>::next().unwrap();
        assert!(id.to_string().contains("HYDO"));
    }

    #[test]
    fn test_hid_create_rejects_foreign_text() {
        let err = Id::<HydoBehavior>::create("2024-OTHER-001".to_string()).unwrap_err();
        assert_eq!(
            err,
            UnsupportedError::UnsupportedValue { behavior: "HYDO" }
        );
    }

    #[test]
    fn test_hid_round_trips_through_parse() {
        let id = Id::<HydoBehavior>::next().unwrap();
        let reparsed = Id::<HydoBehavior>::parse(&id.to_string()).unwrap();
        assert_eq!(id, reparsed);
    }

    #[test]
    fn test_parse_lossy_falls_back_to_unknown() {
        let id = Id::<UuidBehavior>::parse_lossy("garbage");
        assert!(id.is_unknown());
    }

    #[test]
    fn test_serde_round_trip() {
        let id = Id::<UuidBehavior>::next().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        let back: Id<UuidBehavior> = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_serde_garbage_degrades_to_unknown() {
        let id: Id<Int32Behavior> = serde_json::from_str("\"abc\"").unwrap();
        assert!(id.is_unknown());
    }

    proptest::proptest! {
        #[test]
        fn test_int32_display_parse_roundtrip(n in proptest::num::i32::ANY) {
            let id = Id::<Int32Behavior>::create(n).unwrap();
            proptest::prop_assert_eq!(Id::<Int32Behavior>::parse(&id.to_string()).unwrap(), id);
        }
    }
}
