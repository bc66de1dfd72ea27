//! # RomanNumeral
//!
//! Roman numerals in the classic range 1..=3999. Parsing accepts both
//! subtractive (`"XIV"`) and additive (`"XIIII"`) spellings, in any case;
//! the canonical form is uppercase subtractive. Arithmetic that leaves the
//! representable range comes back `Unknown`.

use std::fmt;
use std::ops::{Add, Sub};

use waarde_core::{parse_sentinels, FormatError, ValueObject, ValueState, UNKNOWN_MARKER};

const MIN: i32 = 1;
const MAX: i32 = 3999;

/// A roman numeral value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RomanNumeral(ValueState<i32>);

const DIGITS: [(i32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

impl RomanNumeral {
    /// A numeral from an integer, `None` outside 1..=3999.
    pub fn from_value(value: i32) -> Option<Self> {
        (MIN..=MAX).contains(&value).then(|| Self(ValueState::Valid(value)))
    }

    /// The integer value, if valid.
    pub const fn value(&self) -> Option<i32> {
        match self.0.as_valid() {
            Some(v) => Some(*v),
            None => None,
        }
    }

    /// Adds two numerals; `Unknown` on sentinels or out of range.
    #[must_use]
    pub fn add(self, other: RomanNumeral) -> RomanNumeral {
        self.combine(other, |l, r| l + r)
    }

    /// Subtracts a numeral; `Unknown` on sentinels or out of range
    /// (there is no roman zero).
    #[must_use]
    pub fn sub(self, other: RomanNumeral) -> RomanNumeral {
        self.combine(other, |l, r| l - r)
    }

    fn combine(self, other: RomanNumeral, op: impl FnOnce(i32, i32) -> i32) -> RomanNumeral {
        match (self.0.as_valid(), other.0.as_valid()) {
            (Some(l), Some(r)) => {
                Self::from_value(op(*l, *r)).unwrap_or_else(RomanNumeral::unknown)
            }
            _ => RomanNumeral::unknown(),
        }
    }
}

fn digit_value(ch: char) -> Option<i32> {
    match ch {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Subtractive evaluation: a digit smaller than its successor subtracts.
fn evaluate(s: &str) -> Option<i32> {
    let values: Vec<i32> = s.chars().map(digit_value).collect::<Option<_>>()?;
    let total = values
        .iter()
        .enumerate()
        .map(|(i, &v)| if values[i + 1..].iter().any(|&next| next > v) { -v } else { v })
        .sum();
    (MIN..=MAX).contains(&total).then_some(total)
}

impl ValueObject for RomanNumeral {
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
        evaluate(&s.trim().to_ascii_uppercase())
            .map(|v| Self(ValueState::Valid(v)))
            .ok_or_else(|| FormatError::new("roman numeral", s))
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ValueState::Empty => Ok(()),
            ValueState::Unknown => f.write_str(UNKNOWN_MARKER),
            ValueState::Valid(v) => {
                let mut rest = *v;
                for (value, digits) in DIGITS {
                    while rest >= value {
                        f.write_str(digits)?;
                        rest -= value;
                    }
                }
                Ok(())
            }
        }
    }
}

waarde_core::impl_value_object_text!(RomanNumeral);

impl PartialOrd for RomanNumeral {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self.value(), other.value()) {
            (Some(l), Some(r)) => l.partial_cmp(&r),
            _ => None,
        }
    }
}

impl Add for RomanNumeral {
    type Output = RomanNumeral;

    fn add(self, rhs: RomanNumeral) -> RomanNumeral {
        self.combine(rhs, |l, r| l + r)
    }
}

impl Sub for RomanNumeral {
    type Output = RomanNumeral;

    fn sub(self, rhs: RomanNumeral) -> RomanNumeral {
        self.combine(rhs, |l, r| l - r)
    }
}
