//! # EnergyLabel
//!
//! EU energy-efficiency labels, `F` up to `A++++`. Higher is more
//! efficient, and the ordering follows: `F < E < … < A < A+ < … < A++++`.

use std::fmt;

use waarde_core::{parse_sentinels, FormatError, ValueObject, ValueState, UNKNOWN_MARKER};

/// The grades, from least to most efficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    F,
    E,
    D,
    C,
    B,
    A,
    APlus,
    APlusPlus,
    APlus3,
    APlus4,
}

impl Grade {
    const ALL: [Grade; 10] = [
        Grade::F,
        Grade::E,
        Grade::D,
        Grade::C,
        Grade::B,
        Grade::A,
        Grade::APlus,
        Grade::APlusPlus,
        Grade::APlus3,
        Grade::APlus4,
    ];

    const fn text(self) -> &'static str {
        match self {
            Grade::F => "F",
            Grade::E => "E",
            Grade::D => "D",
            Grade::C => "C",
            Grade::B => "B",
            Grade::A => "A",
            Grade::APlus => "A+",
            Grade::APlusPlus => "A++",
            Grade::APlus3 => "A+++",
            Grade::APlus4 => "A++++",
        }
    }
}

/// An energy label value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EnergyLabel(ValueState<Grade>);

impl EnergyLabel {
    /// A label from its grade.
    pub const fn new(grade: Grade) -> Self {
        Self(ValueState::Valid(grade))
    }

    /// The grade, if valid.
    pub const fn grade(&self) -> Option<Grade> {
        match self.0.as_valid() {
            Some(g) => Some(*g),
            None => None,
        }
    }
}

impl ValueObject for EnergyLabel {
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
        Grade::ALL
            .into_iter()
            .find(|g| g.text() == normalized)
            .map(EnergyLabel::new)
            .ok_or_else(|| FormatError::new("energy label", s))
    }
}

impl fmt::Display for EnergyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ValueState::Empty => Ok(()),
            ValueState::Unknown => f.write_str(UNKNOWN_MARKER),
            ValueState::Valid(g) => f.write_str(g.text()),
        }
    }
}

waarde_core::impl_value_object_text!(EnergyLabel);

impl PartialOrd for EnergyLabel {
    /// Valid labels order by efficiency; sentinels are incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self.grade(), other.grade()) {
            (Some(l), Some(r)) => Some(l.cmp(&r)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert!(EnergyLabel::parse("").unwrap().is_empty());
        assert!(EnergyLabel::parse("?").unwrap().is_unknown());
        assert_ne!(EnergyLabel::empty(), EnergyLabel::unknown());
    }

    #[test]
    fn test_parse_all_grades() {
        for grade in Grade::ALL {
            let label = EnergyLabel::parse(grade.text()).unwrap();
            assert_eq!(label.grade(), Some(grade));
            assert_eq!(label.to_string(), grade.text());
        }
    }

    #[test]
    fn test_parse_lowercase() {
        assert_eq!(
            EnergyLabel::parse("a++").unwrap(),
            EnergyLabel::new(Grade::APlusPlus)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(EnergyLabel::parse("G").is_err());
        assert!(EnergyLabel::parse("A+++++").is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(EnergyLabel::parse("F").unwrap() < EnergyLabel::parse("A").unwrap());
        assert!(EnergyLabel::parse("A").unwrap() < EnergyLabel::parse("A++++").unwrap());
        assert_eq!(
            EnergyLabel::unknown().partial_cmp(&EnergyLabel::new(Grade::A)),
            None
        );
    }

    #[test]
    fn test_serde() {
        let label = EnergyLabel::new(Grade::APlus4);
        assert_eq!(serde_json::to_string(&label).unwrap(), "\"A++++\"");
        let back: EnergyLabel = serde_json::from_str("\"a++++\"").unwrap();
        assert_eq!(back, label);
        let garbage: EnergyLabel = serde_json::from_str("\"Z\"").unwrap();
        assert!(garbage.is_unknown());
    }
}
