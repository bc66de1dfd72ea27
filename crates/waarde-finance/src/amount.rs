//! # Amount — Decimal Monetary Quantities
//!
//! A currency-less decimal amount. Arithmetic is closed over the type:
//! sentinel operands propagate to `Unknown` instead of erroring, and
//! overflow saturates, so the named methods and the operator sugar never
//! fail.
//!
//! Parsing is separator-tolerant: a lone `,` is read as the decimal
//! separator (`"20,00"`), and when both `.` and `,` appear the last one wins
//! and the other is treated as digit grouping (`"1.234,56"`, `"1,234.56"`).

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use rust_decimal::Decimal;

use waarde_core::{parse_sentinels, FormatError, ValueObject, ValueState, UNKNOWN_MARKER};

use crate::percentage::Percentage;

/// A decimal amount value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Amount(ValueState<Decimal>);

impl Amount {
    pub const ZERO: Amount = Amount(ValueState::Valid(Decimal::ZERO));
    pub const ONE: Amount = Amount(ValueState::Valid(Decimal::ONE));
    pub const MAX: Amount = Amount(ValueState::Valid(Decimal::MAX));
    pub const MIN: Amount = Amount(ValueState::Valid(Decimal::MIN));

    /// Wraps a decimal as a valid amount.
    pub const fn new(value: Decimal) -> Self {
        Self(ValueState::Valid(value))
    }

    /// The decimal value, if this amount is valid.
    pub const fn value(&self) -> Option<Decimal> {
        match self.0.as_valid() {
            Some(d) => Some(*d),
            None => None,
        }
    }

    /// Adds two amounts; saturates on overflow, `Unknown` on sentinels.
    #[must_use]
    pub fn add(self, other: Amount) -> Amount {
        self.combine(other, Decimal::saturating_add)
    }

    /// Subtracts an amount; saturates on overflow, `Unknown` on sentinels.
    #[must_use]
    pub fn sub(self, other: Amount) -> Amount {
        self.combine(other, Decimal::saturating_sub)
    }

    /// Negates the amount. Sentinels are unchanged.
    #[must_use]
    pub fn neg(self) -> Amount {
        Self(self.0.map(|d| -d))
    }

    /// The amount plus one.
    #[must_use]
    pub fn increment(self) -> Amount {
        self.add(Amount::ONE)
    }

    /// The amount minus one.
    #[must_use]
    pub fn decrement(self) -> Amount {
        self.sub(Amount::ONE)
    }

    /// Multiplies by a factor; saturates on overflow.
    #[must_use]
    pub fn mul(self, by: Decimal) -> Amount {
        Self(self.0.map(|d| d.saturating_mul(by)))
    }

    /// Divides by a divisor. Division by zero yields `Unknown`.
    #[must_use]
    pub fn div(self, by: Decimal) -> Amount {
        match self.0 {
            ValueState::Valid(d) => match d.checked_div(by) {
                Some(q) => Amount::new(q),
                None => Amount::unknown(),
            },
            state => Self(state),
        }
    }

    /// Takes a percentage of the amount (`100 × 15%` is `15`).
    #[must_use]
    pub fn mul_percentage(self, p: Percentage) -> Amount {
        match p.fraction() {
            Some(fraction) => self.mul(fraction),
            None => Amount::unknown(),
        }
    }

    /// Divides by a percentage (`15 ÷ 15%` is `100`).
    #[must_use]
    pub fn div_percentage(self, p: Percentage) -> Amount {
        match p.fraction() {
            Some(fraction) => self.div(fraction),
            None => Amount::unknown(),
        }
    }

    fn combine(self, other: Amount, op: impl FnOnce(Decimal, Decimal) -> Decimal) -> Amount {
        match (self.0.as_valid(), other.0.as_valid()) {
            (Some(l), Some(r)) => Amount::new(op(*l, *r)),
            _ => Amount::unknown(),
        }
    }
}

/// Reduces a human-entered decimal string to the form `Decimal` parses:
/// the last of `.`/`,` becomes the decimal point, any other occurrences are
/// dropped as digit grouping. A lone `,` is a decimal separator, not
/// grouping.
pub(crate) fn normalize_decimal(s: &str) -> String {
    let last_dot = s.rfind('.');
    let last_comma = s.rfind(',');
    let decimal_at = match (last_dot, last_comma) {
        (Some(d), Some(c)) => Some(d.max(c)),
        (Some(d), None) => (s.matches('.').count() == 1).then_some(d),
        (None, Some(c)) => (s.matches(',').count() == 1).then_some(c),
        (None, None) => None,
    };
    s.char_indices()
        .filter_map(|(i, ch)| match ch {
            '.' | ',' => (Some(i) == decimal_at).then_some('.'),
            _ => Some(ch),
        })
        .collect()
}

impl ValueObject for Amount {
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
        normalize_decimal(s.trim())
            .parse::<Decimal>()
            .map(Amount::new)
            .map_err(|_| FormatError::new("amount", s))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ValueState::Empty => Ok(()),
            ValueState::Unknown => f.write_str(UNKNOWN_MARKER),
            ValueState::Valid(d) => d.fmt(f),
        }
    }
}

waarde_core::impl_value_object_text!(Amount);

impl PartialOrd for Amount {
    /// Valid amounts order by value; sentinels compare as incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self.0.as_valid(), other.0.as_valid()) {
            (Some(l), Some(r)) => l.partial_cmp(r),
            _ => None,
        }
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        self.combine(rhs, Decimal::saturating_add)
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        self.combine(rhs, Decimal::saturating_sub)
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Self(self.0.map(|d| -d))
    }
}

impl Mul<Decimal> for Amount {
    type Output = Amount;

    fn mul(self, rhs: Decimal) -> Amount {
        Self(self.0.map(|d| d.saturating_mul(rhs)))
    }
}

impl Div<Decimal> for Amount {
    type Output = Amount;

    fn div(self, rhs: Decimal) -> Amount {
        Amount::div(self, rhs)
    }
}

impl Mul<Percentage> for Amount {
    type Output = Amount;

    fn mul(self, rhs: Percentage) -> Amount {
        self.mul_percentage(rhs)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, |acc, a| acc.add(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_sentinels() {
        assert!(Amount::parse("").unwrap().is_empty());
        assert!(Amount::parse("?").unwrap().is_unknown());
        assert_ne!(Amount::empty(), Amount::unknown());
        assert!(Amount::default().is_empty());
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(Amount::parse("20.00").unwrap(), Amount::new(dec("20.00")));
        assert_eq!(Amount::parse("-3.5").unwrap(), Amount::new(dec("-3.5")));
    }

    #[test]
    fn test_parse_comma_decimal_separator() {
        assert_eq!(Amount::parse("20,00").unwrap(), Amount::new(dec("20.00")));
    }

    #[test]
    fn test_parse_grouped() {
        assert_eq!(
            Amount::parse("1.234,56").unwrap(),
            Amount::new(dec("1234.56"))
        );
        assert_eq!(
            Amount::parse("1,234.56").unwrap(),
            Amount::new(dec("1234.56"))
        );
        assert_eq!(
            Amount::parse("1,234,567").unwrap(),
            Amount::new(dec("1234567"))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Amount::parse("twelve").is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(dec("10"));
        let b = Amount::new(dec("2.5"));
        assert_eq!(a.add(b), Amount::new(dec("12.5")));
        assert_eq!(a.sub(b), Amount::new(dec("7.5")));
        assert_eq!(a + b, Amount::new(dec("12.5")));
        assert_eq!(-a, Amount::new(dec("-10")));
        assert_eq!(a.increment(), Amount::new(dec("11")));
        assert_eq!(a.decrement(), Amount::new(dec("9")));
        assert_eq!(a.mul(dec("3")), Amount::new(dec("30")));
        assert_eq!(a.div(dec("4")), Amount::new(dec("2.5")));
    }

    #[test]
    fn test_sentinel_arithmetic_is_unknown() {
        assert!(Amount::empty().add(Amount::ONE).is_unknown());
        assert!(Amount::ONE.sub(Amount::unknown()).is_unknown());
        assert!(Amount::unknown().neg().is_unknown());
    }

    #[test]
    fn test_division_by_zero_is_unknown() {
        assert!(Amount::ONE.div(Decimal::ZERO).is_unknown());
    }

    #[test]
    fn test_percentage_of_amount() {
        let hundred = Amount::new(dec("100"));
        let fifteen_pct = Percentage::parse("15%").unwrap();
        assert_eq!(hundred.mul_percentage(fifteen_pct), Amount::new(dec("15.00")));
        assert_eq!(hundred * fifteen_pct, Amount::new(dec("15.00")));
        assert_eq!(
            Amount::new(dec("15")).div_percentage(fifteen_pct),
            Amount::new(dec("100"))
        );
    }

    #[test]
    fn test_ordering() {
        assert!(Amount::new(dec("1")) < Amount::new(dec("2")));
        assert_eq!(Amount::unknown().partial_cmp(&Amount::ONE), None);
    }

    #[test]
    fn test_sum() {
        let total: Amount = [dec("10"), dec("15"), dec("0.5")]
            .into_iter()
            .map(Amount::new)
            .sum();
        assert_eq!(total, Amount::new(dec("25.5")));
    }

    #[test]
    fn test_display_roundtrip() {
        let a = Amount::new(dec("12.34"));
        assert_eq!(a.to_string(), "12.34");
        assert_eq!(Amount::parse(&a.to_string()).unwrap(), a);
    }

    proptest::proptest! {
        #[test]
        fn test_parse_roundtrip_decimals(n in -1_000_000_000_000i64..1_000_000_000_000, scale in 0u32..6) {
            let a = Amount::new(Decimal::new(n, scale));
            proptest::prop_assert_eq!(Amount::parse(&a.to_string()).unwrap(), a);
        }
    }

    #[test]
    fn test_serde() {
        let a = Amount::new(dec("9.99"));
        assert_eq!(serde_json::to_string(&a).unwrap(), "\"9.99\"");
        let back: Amount = serde_json::from_str("\"9.99\"").unwrap();
        assert_eq!(back, a);
        let garbage: Amount = serde_json::from_str("\"many\"").unwrap();
        assert!(garbage.is_unknown());
    }
}
