//! # Unit — Scaled Units with Base Reduction
//!
//! The conversion engine. [`UnitDef`] is a static catalog node; [`Unit`]
//! carries a value in one of those nodes (or the contract's `Empty`/
//! `Unknown` sentinels). All arithmetic first reduces operands to their
//! base root by walking the `base` chain and multiplying factors, then
//! checks that both roots are the same unit.

use std::fmt;
use std::ops::{Div, Mul, Neg};

use waarde_core::{
    parse_sentinels, FormatError, IncompatibleUnitsError, ValueObject, ValueState, UNKNOWN_MARKER,
};

use crate::metric;

/// A catalog unit: name, symbol, and scale factor relative to its base.
///
/// Roots have `base: None` and `factor: 1.0`. Chains may be multi-hop
/// (Megaton → MetricTon → Gram) but always terminate at a root.
#[derive(Debug, PartialEq)]
pub struct UnitDef {
    /// Full unit name, e.g. `"Kilometre"`. Root names define dimension
    /// identity: two units are commensurable iff their root names match.
    pub name: &'static str,
    /// Canonical symbol, e.g. `"km"`. Symbols are what `parse` matches.
    pub symbol: &'static str,
    /// Scale factor relative to `base` (1.0 for roots).
    pub factor: f64,
    /// The defining unit, `None` for roots.
    pub base: Option<&'static UnitDef>,
}

impl UnitDef {
    /// Walks the base chain to the root definition.
    pub fn root(&'static self) -> &'static UnitDef {
        let mut def = self;
        while let Some(base) = def.base {
            def = base;
        }
        def
    }
}

/// A value expressed in a catalog unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    value: f64,
    def: &'static UnitDef,
}

impl Measure {
    /// Reduces to the root unit, multiplying factors down the chain.
    fn to_base(self) -> Measure {
        let mut value = self.value;
        let mut def = self.def;
        while let Some(base) = def.base {
            value *= def.factor;
            def = base;
        }
        Measure { value, def }
    }
}

/// A unit-of-measure value object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit(ValueState<Measure>);

impl Unit {
    /// One of the given catalog unit. Catalog constants are built with this.
    pub const fn one(def: &'static UnitDef) -> Self {
        Self::of(1.0, def)
    }

    /// `value` of the given catalog unit.
    pub const fn of(value: f64, def: &'static UnitDef) -> Self {
        Self(ValueState::Valid(Measure { value, def }))
    }

    /// The numeric value, if this unit is valid.
    pub const fn value(&self) -> Option<f64> {
        match self.0.as_valid() {
            Some(m) => Some(m.value),
            None => None,
        }
    }

    /// The catalog definition, if this unit is valid.
    pub const fn def(&self) -> Option<&'static UnitDef> {
        match self.0.as_valid() {
            Some(m) => Some(m.def),
            None => None,
        }
    }

    /// The unit's symbol, `""` for `Empty`, `"?"` for `Unknown`.
    pub fn symbol(&self) -> &'static str {
        match &self.0 {
            ValueState::Empty => "",
            ValueState::Unknown => UNKNOWN_MARKER,
            ValueState::Valid(m) => m.def.symbol,
        }
    }

    /// Reduces this unit to its base root, scaling the value by the
    /// accumulated factors. Sentinels are returned unchanged.
    #[must_use]
    pub fn to_base(&self) -> Unit {
        Self(self.0.map(Measure::to_base))
    }

    /// Converts this value into `target`'s unit.
    ///
    /// # Errors
    ///
    /// [`IncompatibleUnitsError`] when the two units do not share a base
    /// root, or when either operand is `Empty`/`Unknown`.
    pub fn convert_to(&self, target: &Unit) -> Result<Unit, IncompatibleUnitsError> {
        let (base, target_def) = self.commensurable(target)?;
        Ok(Unit::of(base.value / total_factor(target_def), target_def))
    }

    /// Adds a commensurable unit. The result is expressed in the reduced
    /// base unit, not in `self`'s original symbol.
    ///
    /// # Errors
    ///
    /// [`IncompatibleUnitsError`] across dimensions.
    pub fn add(&self, other: &Unit) -> Result<Unit, IncompatibleUnitsError> {
        self.combine(other, |l, r| l + r)
    }

    /// Subtracts a commensurable unit; result in the reduced base unit.
    ///
    /// # Errors
    ///
    /// [`IncompatibleUnitsError`] across dimensions.
    pub fn sub(&self, other: &Unit) -> Result<Unit, IncompatibleUnitsError> {
        self.combine(other, |l, r| l - r)
    }

    /// Multiplies two commensurable units on their base-reduced values.
    ///
    /// The dimension is *not* composed: metre × metre stays in metres, it
    /// does not become square metres. Cross-dimension operands still fail.
    ///
    /// # Errors
    ///
    /// [`IncompatibleUnitsError`] across dimensions.
    pub fn mul_unit(&self, other: &Unit) -> Result<Unit, IncompatibleUnitsError> {
        self.combine(other, |l, r| l * r)
    }

    /// Divides two commensurable units on their base-reduced values.
    /// Like [`Unit::mul_unit`], the dimension is not composed.
    ///
    /// # Errors
    ///
    /// [`IncompatibleUnitsError`] across dimensions.
    pub fn div_unit(&self, other: &Unit) -> Result<Unit, IncompatibleUnitsError> {
        self.combine(other, |l, r| l / r)
    }

    /// Scales the value, keeping the unit symbol. Sentinels unchanged.
    #[must_use]
    pub fn scale(&self, by: f64) -> Unit {
        Self(self.0.map(|m| Measure {
            value: m.value * by,
            ..m
        }))
    }

    /// The value plus one, in the same unit.
    #[must_use]
    pub fn increment(&self) -> Unit {
        Self(self.0.map(|m| Measure {
            value: m.value + 1.0,
            ..m
        }))
    }

    /// The value minus one, in the same unit.
    #[must_use]
    pub fn decrement(&self) -> Unit {
        Self(self.0.map(|m| Measure {
            value: m.value - 1.0,
            ..m
        }))
    }

    fn combine(
        &self,
        other: &Unit,
        op: impl FnOnce(f64, f64) -> f64,
    ) -> Result<Unit, IncompatibleUnitsError> {
        let l = self.measure_for(other)?;
        let r = other.measure_for(self)?;
        let (lb, rb) = (l.to_base(), r.to_base());
        if lb.def.name != rb.def.name {
            return Err(IncompatibleUnitsError {
                left: lb.def.name.to_string(),
                right: rb.def.name.to_string(),
            });
        }
        Ok(Unit::of(op(lb.value, rb.value), lb.def))
    }

    /// Base-reduces `self` and pairs it with `target`'s definition after
    /// the commensurability check.
    fn commensurable(
        &self,
        target: &Unit,
    ) -> Result<(Measure, &'static UnitDef), IncompatibleUnitsError> {
        let m = self.measure_for(target)?;
        let target_def = target.measure_for(self)?.def;
        let base = m.to_base();
        if base.def.name != target_def.root().name {
            return Err(IncompatibleUnitsError {
                left: base.def.name.to_string(),
                right: target_def.root().name.to_string(),
            });
        }
        Ok((base, target_def))
    }

    fn measure_for(&self, other: &Unit) -> Result<Measure, IncompatibleUnitsError> {
        self.0.as_valid().copied().ok_or_else(|| {
            let describe = |u: &Unit| match &u.0 {
                ValueState::Empty => "Empty".to_string(),
                ValueState::Unknown => "Unknown".to_string(),
                ValueState::Valid(m) => m.def.name.to_string(),
            };
            IncompatibleUnitsError {
                left: describe(self),
                right: describe(other),
            }
        })
    }
}

/// The accumulated factor from a definition down to its root.
fn total_factor(def: &'static UnitDef) -> f64 {
    let mut factor = 1.0;
    let mut def = def;
    while let Some(base) = def.base {
        factor *= def.factor;
        def = base;
    }
    factor
}

impl ValueObject for Unit {
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
        let mut parts = s.split_whitespace();
        let (Some(number), Some(symbol), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(FormatError::new("unit", s));
        };
        let value: f64 = number
            .parse()
            .map_err(|_| FormatError::new("unit", s))?;
        let def = metric::find_symbol(symbol).ok_or_else(|| FormatError::new("unit", s))?;
        Ok(Unit::of(value, def))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ValueState::Empty => Ok(()),
            ValueState::Unknown => f.write_str(UNKNOWN_MARKER),
            ValueState::Valid(m) => write!(f, "{} {}", m.value, m.def.symbol),
        }
    }
}

waarde_core::impl_value_object_text!(Unit);

impl Mul<f64> for Unit {
    type Output = Unit;

    fn mul(self, rhs: f64) -> Unit {
        self.scale(rhs)
    }
}

impl Div<f64> for Unit {
    type Output = Unit;

    fn div(self, rhs: f64) -> Unit {
        self.scale(1.0 / rhs)
    }
}

impl Neg for Unit {
    type Output = Unit;

    fn neg(self) -> Unit {
        self.scale(-1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imperial;
    use crate::metric::length::{KILOMETRE, METRE};
    use crate::metric::mass::{GRAM, KILOGRAM, MEGATON, METRIC_TON};

    #[test]
    fn test_empty_and_unknown_are_distinct() {
        assert_ne!(Unit::empty(), Unit::unknown());
    }

    #[test]
    fn test_parse_sentinels() {
        assert!(Unit::parse("").unwrap().is_empty());
        assert!(Unit::parse("?").unwrap().is_unknown());
    }

    #[test]
    fn test_parse_number_and_symbol() {
        let parsed = Unit::parse("10 km").unwrap();
        assert_eq!(parsed, KILOMETRE.scale(10.0));
    }

    #[test]
    fn test_parse_unknown_symbol_fails() {
        assert!(Unit::parse("10 xyz").is_err());
        assert!(Unit::parse("ten km").is_err());
        assert!(Unit::parse("10 km extra").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        let u = METRE.scale(2.5);
        assert_eq!(u.to_string(), "2.5 m");
        assert_eq!(Unit::parse(&u.to_string()).unwrap(), u);
    }

    #[test]
    fn test_metre_to_kilometre() {
        let ten_metres = METRE.scale(10.0);
        let converted = ten_metres.convert_to(&KILOMETRE).unwrap();
        assert_eq!(converted, KILOMETRE.scale(0.01));
    }

    #[test]
    fn test_conversion_roundtrip() {
        let ten_metres = METRE.scale(10.0);
        let back = ten_metres
            .convert_to(&KILOMETRE)
            .unwrap()
            .convert_to(&METRE)
            .unwrap();
        assert_eq!(back, ten_metres);
    }

    #[test]
    fn test_multi_hop_chain_reduces_to_root() {
        // Megaton -> MetricTon -> Gram
        let base = MEGATON.to_base();
        assert_eq!(base, GRAM.scale(1e12));
        assert_eq!(METRIC_TON.to_base(), GRAM.scale(1e6));
    }

    #[test]
    fn test_yard_to_foot() {
        let converted = imperial::YARD.convert_to(&imperial::FOOT).unwrap();
        assert_eq!(converted, imperial::FOOT.scale(3.0));
    }

    #[test]
    fn test_add_expresses_result_in_base_unit() {
        let sum = KILOGRAM.scale(2.0).add(&GRAM.scale(500.0)).unwrap();
        assert_eq!(sum, GRAM.scale(2500.0));
    }

    #[test]
    fn test_sub() {
        let diff = KILOMETRE.scale(1.0).sub(&METRE.scale(250.0)).unwrap();
        assert_eq!(diff, METRE.scale(750.0));
    }

    #[test]
    fn test_cross_dimension_add_fails() {
        let err = METRE.add(&GRAM).unwrap_err();
        assert_eq!(err.left, "Metre");
        assert_eq!(err.right, "Gram");
    }

    #[test]
    fn test_cross_dimension_convert_fails() {
        assert!(METRE.convert_to(&GRAM).is_err());
    }

    #[test]
    fn test_mul_unit_does_not_compose_dimension() {
        let product = METRE.scale(2.0).mul_unit(&METRE.scale(3.0)).unwrap();
        assert_eq!(product, METRE.scale(6.0));
    }

    #[test]
    fn test_div_unit() {
        let ratio = KILOMETRE.scale(1.0).div_unit(&METRE.scale(200.0)).unwrap();
        assert_eq!(ratio, METRE.scale(5.0));
    }

    #[test]
    fn test_scalar_ops() {
        assert_eq!(METRE * 10.0, METRE.scale(10.0));
        assert_eq!(METRE.scale(10.0) / 2.0, METRE.scale(5.0));
        assert_eq!(-METRE, METRE.scale(-1.0));
        assert_eq!(METRE.increment(), METRE.scale(2.0));
        assert_eq!(METRE.scale(2.0).decrement(), METRE);
    }

    #[test]
    fn test_arithmetic_on_sentinels_fails() {
        assert!(Unit::empty().add(&METRE).is_err());
        assert!(METRE.convert_to(&Unit::unknown()).is_err());
    }

    proptest::proptest! {
        #[test]
        fn test_parse_display_roundtrip(value in -1e9f64..1e9) {
            let unit = KILOGRAM.scale(value);
            proptest::prop_assert_eq!(Unit::parse(&unit.to_string()).unwrap(), unit);
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let u = KILOGRAM.scale(12.0);
        let json = serde_json::to_string(&u).unwrap();
        assert_eq!(json, "\"12 kg\"");
        let back: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, u);
    }
}
