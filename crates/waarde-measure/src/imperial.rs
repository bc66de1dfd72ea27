//! # Imperial Length Catalog
//!
//! Foot-rooted imperial and nautical length units. The sub-foot units carry
//! fractional factors (an inch is a twelfth of a foot), so conversion back
//! and forth stays exact in the ratios even where the factors themselves are
//! not representable decimally.
//!
//! Imperial symbols are not covered by `Unit::parse`, which scans the metric
//! tables only. Construct these via the constants.

use crate::unit::{Unit, UnitDef};

const FOOT_DEF: UnitDef = UnitDef { name: "Foot", symbol: "ft", factor: 1.0, base: None };
const LEAGUE_DEF: UnitDef = UnitDef { name: "League", symbol: "lea", factor: 15_840.0, base: Some(&FOOT_DEF) };
const MILE_DEF: UnitDef = UnitDef { name: "Mile", symbol: "mi", factor: 5_280.0, base: Some(&FOOT_DEF) };
const FURLONG_DEF: UnitDef = UnitDef { name: "Furlong", symbol: "fur", factor: 660.0, base: Some(&FOOT_DEF) };
const CHAIN_DEF: UnitDef = UnitDef { name: "Chain", symbol: "ch", factor: 66.0, base: Some(&FOOT_DEF) };
const ROD_DEF: UnitDef = UnitDef { name: "Rod", symbol: "rd", factor: 16.5, base: Some(&FOOT_DEF) };
const YARD_DEF: UnitDef = UnitDef { name: "Yard", symbol: "yd", factor: 3.0, base: Some(&FOOT_DEF) };
const LINK_DEF: UnitDef = UnitDef { name: "Link", symbol: "li", factor: 0.66, base: Some(&FOOT_DEF) };
const HAND_DEF: UnitDef = UnitDef { name: "Hand", symbol: "hh", factor: 1.0 / 3.0, base: Some(&FOOT_DEF) };
const INCH_DEF: UnitDef = UnitDef { name: "Inch", symbol: "in", factor: 1.0 / 12.0, base: Some(&FOOT_DEF) };
const BARLEYCORN_DEF: UnitDef = UnitDef { name: "Barleycorn", symbol: "bc", factor: 1.0 / 36.0, base: Some(&FOOT_DEF) };
const THOU_DEF: UnitDef = UnitDef { name: "Thou", symbol: "th", factor: 1.0 / 12_000.0, base: Some(&FOOT_DEF) };
const TWIP_DEF: UnitDef = UnitDef { name: "Twip", symbol: "twip", factor: 1.0 / 17_280.0, base: Some(&FOOT_DEF) };
const FATHOM_DEF: UnitDef = UnitDef { name: "Fathom", symbol: "ftm", factor: 6.0761, base: Some(&FOOT_DEF) };
const CABLE_DEF: UnitDef = UnitDef { name: "Cable", symbol: "cb", factor: 607.61, base: Some(&FOOT_DEF) };
const NAUTICAL_MILE_DEF: UnitDef = UnitDef { name: "Nautical Mile", symbol: "nmi", factor: 6_076.1, base: Some(&FOOT_DEF) };

pub const LEAGUE: Unit = Unit::one(&LEAGUE_DEF);
pub const NAUTICAL_MILE: Unit = Unit::one(&NAUTICAL_MILE_DEF);
pub const MILE: Unit = Unit::one(&MILE_DEF);
pub const FURLONG: Unit = Unit::one(&FURLONG_DEF);
pub const CABLE: Unit = Unit::one(&CABLE_DEF);
pub const CHAIN: Unit = Unit::one(&CHAIN_DEF);
pub const ROD: Unit = Unit::one(&ROD_DEF);
pub const FATHOM: Unit = Unit::one(&FATHOM_DEF);
pub const YARD: Unit = Unit::one(&YARD_DEF);
pub const FOOT: Unit = Unit::one(&FOOT_DEF);
pub const LINK: Unit = Unit::one(&LINK_DEF);
pub const HAND: Unit = Unit::one(&HAND_DEF);
pub const INCH: Unit = Unit::one(&INCH_DEF);
pub const BARLEYCORN: Unit = Unit::one(&BARLEYCORN_DEF);
pub const THOU: Unit = Unit::one(&THOU_DEF);
pub const TWIP: Unit = Unit::one(&TWIP_DEF);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mile_in_yards() {
        let mile = MILE.to_base();
        assert_eq!(mile.value(), Some(5_280.0));
        let yards = MILE.convert_to(&YARD).unwrap();
        assert_eq!(yards.value(), Some(1_760.0));
    }

    #[test]
    fn test_inch_is_fraction_of_foot() {
        let foot = INCH.scale(12.0).to_base();
        assert_eq!(foot.value(), Some(1.0));
    }

    #[test]
    fn test_three_hands_make_a_foot() {
        let foot = HAND.scale(3.0).to_base();
        assert_eq!(foot.value(), Some(1.0));
    }

    #[test]
    fn test_imperial_and_metric_do_not_combine() {
        let err = FOOT.add(&crate::metric::length::METRE).unwrap_err();
        assert_eq!(err.left, "Foot");
        assert_eq!(err.right, "Metre");
    }
}
