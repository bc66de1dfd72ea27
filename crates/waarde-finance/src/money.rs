//! # Money — Currency-Tagged Amounts
//!
//! Pairs a catalog [`Currency`] with a decimal amount. Canonical text is
//! `"<symbol> <amount to two decimals>"` (`"$ 25.00"`); parsing also
//! accepts the attached form (`"$10.00"`) and comma decimals
//! (`"$ 20,00"`).
//!
//! Cross-currency arithmetic is an error, reported with the same error type
//! unit arithmetic uses, naming both currencies.

use std::fmt;

use rust_decimal::Decimal;

use waarde_core::{
    parse_sentinels, FormatError, IncompatibleUnitsError, ValueObject, ValueState, UNKNOWN_MARKER,
};

use crate::amount::{normalize_decimal, Amount};
use crate::currency::{self, Currency, CurrencyDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MoneyValue {
    currency: &'static CurrencyDef,
    amount: Decimal,
}

/// A money value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Money(ValueState<MoneyValue>);

impl Money {
    /// Pairs a currency with an amount. The pair is valid only when both
    /// parts are; an `Unknown` part makes the money `Unknown`, and two
    /// `Empty` parts make it `Empty`.
    #[must_use]
    pub fn new(currency: Currency, amount: Amount) -> Self {
        match (currency.def(), amount.value()) {
            (Some(def), Some(value)) => Self::of(def, value),
            _ if currency.is_empty() && amount.is_empty() => Self(ValueState::Empty),
            _ => Self(ValueState::Unknown),
        }
    }

    fn of(currency: &'static CurrencyDef, amount: Decimal) -> Self {
        Self(ValueState::Valid(MoneyValue { currency, amount }))
    }

    /// The currency, `Currency::empty()`/`unknown()` for sentinels.
    pub fn currency(&self) -> Currency {
        match &self.0 {
            ValueState::Empty => Currency::empty(),
            ValueState::Unknown => Currency::unknown(),
            ValueState::Valid(v) => Currency::from_def(v.currency),
        }
    }

    /// The amount, `Amount::empty()`/`unknown()` for sentinels.
    pub fn amount(&self) -> Amount {
        match &self.0 {
            ValueState::Empty => Amount::empty(),
            ValueState::Unknown => Amount::unknown(),
            ValueState::Valid(v) => Amount::new(v.amount),
        }
    }

    /// Adds money in the same currency.
    ///
    /// # Errors
    ///
    /// [`IncompatibleUnitsError`] across currencies or on sentinel operands.
    pub fn add(&self, other: &Money) -> Result<Money, IncompatibleUnitsError> {
        self.combine(other, Decimal::saturating_add)
    }

    /// Subtracts money in the same currency.
    ///
    /// # Errors
    ///
    /// [`IncompatibleUnitsError`] across currencies or on sentinel operands.
    pub fn sub(&self, other: &Money) -> Result<Money, IncompatibleUnitsError> {
        self.combine(other, Decimal::saturating_sub)
    }

    fn combine(
        &self,
        other: &Money,
        op: impl FnOnce(Decimal, Decimal) -> Decimal,
    ) -> Result<Money, IncompatibleUnitsError> {
        let describe = |m: &Money| match &m.0 {
            ValueState::Empty => "Empty".to_string(),
            ValueState::Unknown => "Unknown".to_string(),
            ValueState::Valid(v) => v.currency.name.to_string(),
        };
        let mismatch = || IncompatibleUnitsError {
            left: describe(self),
            right: describe(other),
        };
        let (ValueState::Valid(l), ValueState::Valid(r)) = (&self.0, &other.0) else {
            return Err(mismatch());
        };
        if l.currency != r.currency {
            return Err(mismatch());
        }
        Ok(Money::of(l.currency, op(l.amount, r.amount)))
    }
}

/// Splits a money string into its currency spelling and number part.
/// Handles both the spaced form (`"$ 20,00"`) and the attached form
/// (`"$10.00"`, `"€20.00"`).
fn split_currency(s: &str) -> Option<(&'static CurrencyDef, &str)> {
    if let Some((head, tail)) = s.split_once(char::is_whitespace) {
        if let Some(def) = currency::find(head) {
            return Some((def, tail));
        }
    }
    let digits_at = s.find(|c: char| c.is_ascii_digit() || c == '-' || c == '+')?;
    let def = currency::find(s[..digits_at].trim())?;
    Some((def, &s[digits_at..]))
}

impl ValueObject for Money {
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
        let err = || FormatError::new("money", s);
        let (def, number) = split_currency(s.trim()).ok_or_else(err)?;
        let amount: Decimal = normalize_decimal(number.trim()).parse().map_err(|_| err())?;
        Ok(Money::of(def, amount))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ValueState::Empty => Ok(()),
            ValueState::Unknown => f.write_str(UNKNOWN_MARKER),
            ValueState::Valid(v) => write!(f, "{} {:.2}", v.currency.symbol, v.amount),
        }
    }
}

waarde_core::impl_value_object_text!(Money);

impl PartialOrd for Money {
    /// Orders within one currency; everything else is incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self.0.as_valid(), other.0.as_valid()) {
            (Some(l), Some(r)) if l.currency == r.currency => l.amount.partial_cmp(&r.amount),
            _ => None,
        }
    }
}
