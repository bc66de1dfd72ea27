//! # Percentage — Fractions with Percent Formatting
//!
//! Stored as the underlying fraction (`15%` is `0.15`), displayed in
//! percent notation. Parsing accepts `%` and the per-mille sign `‰`; a bare
//! number is read as a percent value, matching the display form.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use rust_decimal::Decimal;

use waarde_core::{parse_sentinels, FormatError, ValueObject, ValueState, UNKNOWN_MARKER};

use crate::amount::normalize_decimal;

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;
const ONE_THOUSAND: Decimal = Decimal::ONE_THOUSAND;

/// A percentage value object, stored as a fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Percentage(ValueState<Decimal>);

impl Percentage {
    pub const ZERO: Percentage = Percentage(ValueState::Valid(Decimal::ZERO));
    /// One hundred percent.
    pub const HUNDRED: Percentage = Percentage(ValueState::Valid(Decimal::ONE));

    /// A percentage from its fraction: `from_fraction(0.15)` is `15%`.
    pub const fn from_fraction(fraction: Decimal) -> Self {
        Self(ValueState::Valid(fraction))
    }

    /// A percentage from its percent value: `from_percent(15)` is `15%`.
    #[must_use]
    pub fn from_percent(percent: Decimal) -> Self {
        Self(ValueState::Valid(percent / ONE_HUNDRED))
    }

    /// The underlying fraction, if valid: `15%` yields `0.15`.
    pub const fn fraction(&self) -> Option<Decimal> {
        match self.0.as_valid() {
            Some(d) => Some(*d),
            None => None,
        }
    }

    /// The percent value, if valid: `15%` yields `15`.
    pub fn percent(&self) -> Option<Decimal> {
        self.fraction().map(|f| (f * ONE_HUNDRED).normalize())
    }

    /// Adds two percentages; `Unknown` on sentinels.
    #[must_use]
    pub fn add(self, other: Percentage) -> Percentage {
        self.combine(other, Decimal::saturating_add)
    }

    /// Subtracts a percentage; `Unknown` on sentinels.
    #[must_use]
    pub fn sub(self, other: Percentage) -> Percentage {
        self.combine(other, Decimal::saturating_sub)
    }

    /// Negates the percentage. Sentinels are unchanged.
    #[must_use]
    pub fn neg(self) -> Percentage {
        Self(self.0.map(|d| -d))
    }

    /// Composes two percentages: `50% × 50%` is `25%`.
    #[must_use]
    pub fn mul(self, other: Percentage) -> Percentage {
        self.combine(other, Decimal::saturating_mul)
    }

    fn combine(
        self,
        other: Percentage,
        op: impl FnOnce(Decimal, Decimal) -> Decimal,
    ) -> Percentage {
        match (self.0.as_valid(), other.0.as_valid()) {
            (Some(l), Some(r)) => Percentage::from_fraction(op(*l, *r)),
            _ => Percentage::unknown(),
        }
    }
}

impl ValueObject for Percentage {
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
        let trimmed = s.trim();
        let (number, divisor) = if let Some(rest) = trimmed.strip_suffix('%') {
            (rest, ONE_HUNDRED)
        } else if let Some(rest) = trimmed.strip_suffix('\u{2030}') {
            (rest, ONE_THOUSAND)
        } else {
            (trimmed, ONE_HUNDRED)
        };
        normalize_decimal(number.trim())
            .parse::<Decimal>()
            .map(|d| Self::from_fraction(d / divisor))
            .map_err(|_| FormatError::new("percentage", s))
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ValueState::Empty => Ok(()),
            ValueState::Unknown => f.write_str(UNKNOWN_MARKER),
            ValueState::Valid(d) => write!(f, "{}%", (*d * ONE_HUNDRED).normalize()),
        }
    }
}

waarde_core::impl_value_object_text!(Percentage);

impl PartialOrd for Percentage {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self.0.as_valid(), other.0.as_valid()) {
            (Some(l), Some(r)) => l.partial_cmp(r),
            _ => None,
        }
    }
}

impl Add for Percentage {
    type Output = Percentage;

    fn add(self, rhs: Percentage) -> Percentage {
        self.combine(rhs, Decimal::saturating_add)
    }
}

impl Sub for Percentage {
    type Output = Percentage;

    fn sub(self, rhs: Percentage) -> Percentage {
        self.combine(rhs, Decimal::saturating_sub)
    }
}

impl Neg for Percentage {
    type Output = Percentage;

    fn neg(self) -> Percentage {
        Self(self.0.map(|d| -d))
    }
}

impl Mul for Percentage {
    type Output = Percentage;

    fn mul(self, rhs: Percentage) -> Percentage {
        self.combine(rhs, Decimal::saturating_mul)
    }
}
