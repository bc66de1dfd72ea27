//! # Metric System Catalog
//!
//! Static unit tables for mass, length, area, volume, capacity, and
//! temperature. Each table is a graph of [`UnitDef`] nodes whose `base`
//! pointers lead to the dimension's root (Gram, Metre, Square Metre, Cubic
//! Metre, Litre, Celsius). The public constants are one-of-that-unit
//! [`Unit`] values, ready to scale.
//!
//! [`find_symbol`] backs `Unit::parse`: the `"<number> <symbol>"` form is
//! resolved by an exact symbol scan over these tables.
//!
//! Temperature uses the same scale-factor model as every other table;
//! affine offset conversion is out of scope.

use crate::unit::{Unit, UnitDef};

pub mod mass {
    //! Gram-rooted mass units, plus the ton family
    //! (Megaton → MetricTon → Gram is the catalog's only multi-hop chain).

    use super::*;

    pub(crate) static DEFS: &[&UnitDef] = &[
        &YOTTAGRAM_DEF,
        &ZETTAGRAM_DEF,
        &EXAGRAM_DEF,
        &PETAGRAM_DEF,
        &TERAGRAM_DEF,
        &GIGAGRAM_DEF,
        &MEGAGRAM_DEF,
        &KILOGRAM_DEF,
        &HECTOGRAM_DEF,
        &DECAGRAM_DEF,
        &GRAM_DEF,
        &DECIGRAM_DEF,
        &CENTIGRAM_DEF,
        &MILLIGRAM_DEF,
        &MICROGRAM_DEF,
        &NANOGRAM_DEF,
        &PICOGRAM_DEF,
        &FEMTOGRAM_DEF,
        &ATTOGRAM_DEF,
        &ZEPTOGRAM_DEF,
        &METRIC_TON_DEF,
        &MEGATON_DEF,
    ];

    const GRAM_DEF: UnitDef = UnitDef { name: "Gram", symbol: "g", factor: 1.0, base: None };
    const YOTTAGRAM_DEF: UnitDef = UnitDef { name: "Yottagram", symbol: "Yg", factor: 1e24, base: Some(&GRAM_DEF) };
    const ZETTAGRAM_DEF: UnitDef = UnitDef { name: "Zettagram", symbol: "Zg", factor: 1e21, base: Some(&GRAM_DEF) };
    const EXAGRAM_DEF: UnitDef = UnitDef { name: "Exagram", symbol: "Eg", factor: 1e18, base: Some(&GRAM_DEF) };
    const PETAGRAM_DEF: UnitDef = UnitDef { name: "Petagram", symbol: "Pg", factor: 1e15, base: Some(&GRAM_DEF) };
    const TERAGRAM_DEF: UnitDef = UnitDef { name: "Teragram", symbol: "Tg", factor: 1e12, base: Some(&GRAM_DEF) };
    const GIGAGRAM_DEF: UnitDef = UnitDef { name: "Gigagram", symbol: "Gg", factor: 1e9, base: Some(&GRAM_DEF) };
    const MEGAGRAM_DEF: UnitDef = UnitDef { name: "Megagram", symbol: "Mg", factor: 1e6, base: Some(&GRAM_DEF) };
    const KILOGRAM_DEF: UnitDef = UnitDef { name: "Kilogram", symbol: "kg", factor: 1e3, base: Some(&GRAM_DEF) };
    const HECTOGRAM_DEF: UnitDef = UnitDef { name: "Hectogram", symbol: "hg", factor: 1e2, base: Some(&GRAM_DEF) };
    const DECAGRAM_DEF: UnitDef = UnitDef { name: "Decagram", symbol: "dag", factor: 1e1, base: Some(&GRAM_DEF) };
    const DECIGRAM_DEF: UnitDef = UnitDef { name: "Decigram", symbol: "dg", factor: 1e-1, base: Some(&GRAM_DEF) };
    const CENTIGRAM_DEF: UnitDef = UnitDef { name: "Centigram", symbol: "cg", factor: 1e-2, base: Some(&GRAM_DEF) };
    const MILLIGRAM_DEF: UnitDef = UnitDef { name: "Milligram", symbol: "mg", factor: 1e-3, base: Some(&GRAM_DEF) };
    const MICROGRAM_DEF: UnitDef = UnitDef { name: "Microgram", symbol: "\u{3bc}g", factor: 1e-6, base: Some(&GRAM_DEF) };
    const NANOGRAM_DEF: UnitDef = UnitDef { name: "Nanogram", symbol: "ng", factor: 1e-9, base: Some(&GRAM_DEF) };
    const PICOGRAM_DEF: UnitDef = UnitDef { name: "Picogram", symbol: "pg", factor: 1e-12, base: Some(&GRAM_DEF) };
    const FEMTOGRAM_DEF: UnitDef = UnitDef { name: "Femtogram", symbol: "fg", factor: 1e-15, base: Some(&GRAM_DEF) };
    const ATTOGRAM_DEF: UnitDef = UnitDef { name: "Attogram", symbol: "ag", factor: 1e-18, base: Some(&GRAM_DEF) };
    const ZEPTOGRAM_DEF: UnitDef = UnitDef { name: "Zeptogram", symbol: "zg", factor: 1e-21, base: Some(&GRAM_DEF) };
    const METRIC_TON_DEF: UnitDef = UnitDef { name: "Metric ton", symbol: "t", factor: 1e6, base: Some(&GRAM_DEF) };
    const MEGATON_DEF: UnitDef = UnitDef { name: "Megaton", symbol: "Mt", factor: 1e6, base: Some(&METRIC_TON_DEF) };

    pub const YOTTAGRAM: Unit = Unit::one(&YOTTAGRAM_DEF);
    pub const ZETTAGRAM: Unit = Unit::one(&ZETTAGRAM_DEF);
    pub const EXAGRAM: Unit = Unit::one(&EXAGRAM_DEF);
    pub const PETAGRAM: Unit = Unit::one(&PETAGRAM_DEF);
    pub const TERAGRAM: Unit = Unit::one(&TERAGRAM_DEF);
    pub const GIGAGRAM: Unit = Unit::one(&GIGAGRAM_DEF);
    pub const MEGAGRAM: Unit = Unit::one(&MEGAGRAM_DEF);
    pub const KILOGRAM: Unit = Unit::one(&KILOGRAM_DEF);
    pub const HECTOGRAM: Unit = Unit::one(&HECTOGRAM_DEF);
    pub const DECAGRAM: Unit = Unit::one(&DECAGRAM_DEF);
    pub const GRAM: Unit = Unit::one(&GRAM_DEF);
    pub const DECIGRAM: Unit = Unit::one(&DECIGRAM_DEF);
    pub const CENTIGRAM: Unit = Unit::one(&CENTIGRAM_DEF);
    pub const MILLIGRAM: Unit = Unit::one(&MILLIGRAM_DEF);
    pub const MICROGRAM: Unit = Unit::one(&MICROGRAM_DEF);
    pub const NANOGRAM: Unit = Unit::one(&NANOGRAM_DEF);
    pub const PICOGRAM: Unit = Unit::one(&PICOGRAM_DEF);
    pub const FEMTOGRAM: Unit = Unit::one(&FEMTOGRAM_DEF);
    pub const ATTOGRAM: Unit = Unit::one(&ATTOGRAM_DEF);
    pub const ZEPTOGRAM: Unit = Unit::one(&ZEPTOGRAM_DEF);
    pub const METRIC_TON: Unit = Unit::one(&METRIC_TON_DEF);
    pub const MEGATON: Unit = Unit::one(&MEGATON_DEF);
}

pub mod length {
    //! Metre-rooted length units.

    use super::*;

    pub(crate) static DEFS: &[&UnitDef] = &[
        &YOTTAMETRE_DEF,
        &ZETTAMETRE_DEF,
        &EXAMETRE_DEF,
        &PETAMETRE_DEF,
        &TERAMETRE_DEF,
        &GIGAMETRE_DEF,
        &MEGAMETRE_DEF,
        &KILOMETRE_DEF,
        &HECTOMETRE_DEF,
        &DECAMETRE_DEF,
        &METRE_DEF,
        &DECIMETRE_DEF,
        &CENTIMETRE_DEF,
        &MILLIMETRE_DEF,
        &MICROMETRE_DEF,
        &NANOMETRE_DEF,
        &PICOMETRE_DEF,
        &FEMTOMETRE_DEF,
        &ATTOMETRE_DEF,
        &ZEPTOMETRE_DEF,
        &YOCTOMETRE_DEF,
    ];

    const METRE_DEF: UnitDef = UnitDef { name: "Metre", symbol: "m", factor: 1.0, base: None };
    const YOTTAMETRE_DEF: UnitDef = UnitDef { name: "Yottametre", symbol: "Ym", factor: 1e24, base: Some(&METRE_DEF) };
    const ZETTAMETRE_DEF: UnitDef = UnitDef { name: "Zettametre", symbol: "Zm", factor: 1e21, base: Some(&METRE_DEF) };
    const EXAMETRE_DEF: UnitDef = UnitDef { name: "Exametre", symbol: "Em", factor: 1e18, base: Some(&METRE_DEF) };
    const PETAMETRE_DEF: UnitDef = UnitDef { name: "Petametre", symbol: "Pm", factor: 1e15, base: Some(&METRE_DEF) };
    const TERAMETRE_DEF: UnitDef = UnitDef { name: "Terametre", symbol: "Tm", factor: 1e12, base: Some(&METRE_DEF) };
    const GIGAMETRE_DEF: UnitDef = UnitDef { name: "Gigametre", symbol: "Gm", factor: 1e9, base: Some(&METRE_DEF) };
    const MEGAMETRE_DEF: UnitDef = UnitDef { name: "Megametre", symbol: "Mm", factor: 1e6, base: Some(&METRE_DEF) };
    const KILOMETRE_DEF: UnitDef = UnitDef { name: "Kilometre", symbol: "km", factor: 1e3, base: Some(&METRE_DEF) };
    const HECTOMETRE_DEF: UnitDef = UnitDef { name: "Hectometre", symbol: "hm", factor: 1e2, base: Some(&METRE_DEF) };
    const DECAMETRE_DEF: UnitDef = UnitDef { name: "Decametre", symbol: "dam", factor: 1e1, base: Some(&METRE_DEF) };
    const DECIMETRE_DEF: UnitDef = UnitDef { name: "Decimetre", symbol: "dm", factor: 1e-1, base: Some(&METRE_DEF) };
    const CENTIMETRE_DEF: UnitDef = UnitDef { name: "Centimetre", symbol: "cm", factor: 1e-2, base: Some(&METRE_DEF) };
    const MILLIMETRE_DEF: UnitDef = UnitDef { name: "Millimetre", symbol: "mm", factor: 1e-3, base: Some(&METRE_DEF) };
    const MICROMETRE_DEF: UnitDef = UnitDef { name: "Micrometre", symbol: "\u{3bc}m", factor: 1e-6, base: Some(&METRE_DEF) };
    const NANOMETRE_DEF: UnitDef = UnitDef { name: "Nanometre", symbol: "nm", factor: 1e-9, base: Some(&METRE_DEF) };
    const PICOMETRE_DEF: UnitDef = UnitDef { name: "Picometre", symbol: "pm", factor: 1e-12, base: Some(&METRE_DEF) };
    const FEMTOMETRE_DEF: UnitDef = UnitDef { name: "Femtometre", symbol: "fm", factor: 1e-15, base: Some(&METRE_DEF) };
    const ATTOMETRE_DEF: UnitDef = UnitDef { name: "Attometre", symbol: "am", factor: 1e-18, base: Some(&METRE_DEF) };
    const ZEPTOMETRE_DEF: UnitDef = UnitDef { name: "Zeptometre", symbol: "zm", factor: 1e-21, base: Some(&METRE_DEF) };
    const YOCTOMETRE_DEF: UnitDef = UnitDef { name: "Yoctometre", symbol: "ym", factor: 1e-24, base: Some(&METRE_DEF) };

    pub const YOTTAMETRE: Unit = Unit::one(&YOTTAMETRE_DEF);
    pub const ZETTAMETRE: Unit = Unit::one(&ZETTAMETRE_DEF);
    pub const EXAMETRE: Unit = Unit::one(&EXAMETRE_DEF);
    pub const PETAMETRE: Unit = Unit::one(&PETAMETRE_DEF);
    pub const TERAMETRE: Unit = Unit::one(&TERAMETRE_DEF);
    pub const GIGAMETRE: Unit = Unit::one(&GIGAMETRE_DEF);
    pub const MEGAMETRE: Unit = Unit::one(&MEGAMETRE_DEF);
    pub const KILOMETRE: Unit = Unit::one(&KILOMETRE_DEF);
    pub const HECTOMETRE: Unit = Unit::one(&HECTOMETRE_DEF);
    pub const DECAMETRE: Unit = Unit::one(&DECAMETRE_DEF);
    pub const METRE: Unit = Unit::one(&METRE_DEF);
    pub const DECIMETRE: Unit = Unit::one(&DECIMETRE_DEF);
    pub const CENTIMETRE: Unit = Unit::one(&CENTIMETRE_DEF);
    pub const MILLIMETRE: Unit = Unit::one(&MILLIMETRE_DEF);
    pub const MICROMETRE: Unit = Unit::one(&MICROMETRE_DEF);
    pub const NANOMETRE: Unit = Unit::one(&NANOMETRE_DEF);
    pub const PICOMETRE: Unit = Unit::one(&PICOMETRE_DEF);
    pub const FEMTOMETRE: Unit = Unit::one(&FEMTOMETRE_DEF);
    pub const ATTOMETRE: Unit = Unit::one(&ATTOMETRE_DEF);
    pub const ZEPTOMETRE: Unit = Unit::one(&ZEPTOMETRE_DEF);
    pub const YOCTOMETRE: Unit = Unit::one(&YOCTOMETRE_DEF);
}

pub mod area {
    //! Square-metre-rooted area units, including the are family.

    use super::*;

    pub(crate) static DEFS: &[&UnitDef] = &[
        &SQUARE_KILOMETRE_DEF,
        &SQUARE_HECTOMETRE_DEF,
        &SQUARE_DECAMETRE_DEF,
        &SQUARE_METRE_DEF,
        &SQUARE_DECIMETRE_DEF,
        &SQUARE_CENTIMETRE_DEF,
        &SQUARE_MILLIMETRE_DEF,
        &HECTARE_DEF,
        &ARE_DEF,
        &CENTIARE_DEF,
    ];

    const SQUARE_METRE_DEF: UnitDef = UnitDef { name: "Square Metre", symbol: "m\u{b2}", factor: 1.0, base: None };
    const SQUARE_KILOMETRE_DEF: UnitDef = UnitDef { name: "Square Kilometre", symbol: "km\u{b2}", factor: 1e6, base: Some(&SQUARE_METRE_DEF) };
    const SQUARE_HECTOMETRE_DEF: UnitDef = UnitDef { name: "Square Hectometre", symbol: "hm\u{b2}", factor: 1e4, base: Some(&SQUARE_METRE_DEF) };
    const SQUARE_DECAMETRE_DEF: UnitDef = UnitDef { name: "Square Decametre", symbol: "dam\u{b2}", factor: 1e2, base: Some(&SQUARE_METRE_DEF) };
    const SQUARE_DECIMETRE_DEF: UnitDef = UnitDef { name: "Square Decimetre", symbol: "dm\u{b2}", factor: 1e-2, base: Some(&SQUARE_METRE_DEF) };
    const SQUARE_CENTIMETRE_DEF: UnitDef = UnitDef { name: "Square Centimetre", symbol: "cm\u{b2}", factor: 1e-4, base: Some(&SQUARE_METRE_DEF) };
    const SQUARE_MILLIMETRE_DEF: UnitDef = UnitDef { name: "Square Millimetre", symbol: "mm\u{b2}", factor: 1e-6, base: Some(&SQUARE_METRE_DEF) };
    const ARE_DEF: UnitDef = UnitDef { name: "Are", symbol: "a", factor: 1e2, base: Some(&SQUARE_METRE_DEF) };
    const HECTARE_DEF: UnitDef = UnitDef { name: "Hectare", symbol: "ha", factor: 1e2, base: Some(&ARE_DEF) };
    const CENTIARE_DEF: UnitDef = UnitDef { name: "Centiare", symbol: "ca", factor: 1e-2, base: Some(&ARE_DEF) };

    pub const SQUARE_KILOMETRE: Unit = Unit::one(&SQUARE_KILOMETRE_DEF);
    pub const SQUARE_HECTOMETRE: Unit = Unit::one(&SQUARE_HECTOMETRE_DEF);
    pub const SQUARE_DECAMETRE: Unit = Unit::one(&SQUARE_DECAMETRE_DEF);
    pub const SQUARE_METRE: Unit = Unit::one(&SQUARE_METRE_DEF);
    pub const SQUARE_DECIMETRE: Unit = Unit::one(&SQUARE_DECIMETRE_DEF);
    pub const SQUARE_CENTIMETRE: Unit = Unit::one(&SQUARE_CENTIMETRE_DEF);
    pub const SQUARE_MILLIMETRE: Unit = Unit::one(&SQUARE_MILLIMETRE_DEF);
    pub const HECTARE: Unit = Unit::one(&HECTARE_DEF);
    pub const ARE: Unit = Unit::one(&ARE_DEF);
    pub const CENTIARE: Unit = Unit::one(&CENTIARE_DEF);
}

pub mod volume {
    //! Cubic-metre-rooted volume units.

    use super::*;

    pub(crate) static DEFS: &[&UnitDef] = &[
        &CUBIC_KILOMETRE_DEF,
        &CUBIC_METRE_DEF,
        &CUBIC_DECIMETRE_DEF,
        &CUBIC_CENTIMETRE_DEF,
        &CUBIC_MILLIMETRE_DEF,
        &STERE_DEF,
    ];

    const CUBIC_METRE_DEF: UnitDef = UnitDef { name: "Cubic Metre", symbol: "m\u{b3}", factor: 1.0, base: None };
    const CUBIC_KILOMETRE_DEF: UnitDef = UnitDef { name: "Cubic Kilometre", symbol: "km\u{b3}", factor: 1e9, base: Some(&CUBIC_METRE_DEF) };
    const CUBIC_DECIMETRE_DEF: UnitDef = UnitDef { name: "Cubic Decimetre", symbol: "dm\u{b3}", factor: 1e-3, base: Some(&CUBIC_METRE_DEF) };
    const CUBIC_CENTIMETRE_DEF: UnitDef = UnitDef { name: "Cubic Centimetre", symbol: "cm\u{b3}", factor: 1e-6, base: Some(&CUBIC_METRE_DEF) };
    const CUBIC_MILLIMETRE_DEF: UnitDef = UnitDef { name: "Cubic Millimetre", symbol: "mm\u{b3}", factor: 1e-9, base: Some(&CUBIC_METRE_DEF) };
    const STERE_DEF: UnitDef = UnitDef { name: "Stere", symbol: "st", factor: 1.0, base: Some(&CUBIC_METRE_DEF) };

    pub const CUBIC_KILOMETRE: Unit = Unit::one(&CUBIC_KILOMETRE_DEF);
    pub const CUBIC_METRE: Unit = Unit::one(&CUBIC_METRE_DEF);
    pub const CUBIC_DECIMETRE: Unit = Unit::one(&CUBIC_DECIMETRE_DEF);
    pub const CUBIC_CENTIMETRE: Unit = Unit::one(&CUBIC_CENTIMETRE_DEF);
    pub const CUBIC_MILLIMETRE: Unit = Unit::one(&CUBIC_MILLIMETRE_DEF);
    pub const STERE: Unit = Unit::one(&STERE_DEF);
}

pub mod capacity {
    //! Litre-rooted capacity units.

    use super::*;

    pub(crate) static DEFS: &[&UnitDef] = &[
        &KILOLITRE_DEF,
        &HECTOLITRE_DEF,
        &DECALITRE_DEF,
        &LITRE_DEF,
        &DECILITRE_DEF,
        &CENTILITRE_DEF,
        &MILLILITRE_DEF,
        &MICROLITRE_DEF,
    ];

    const LITRE_DEF: UnitDef = UnitDef { name: "Litre", symbol: "l", factor: 1.0, base: None };
    const KILOLITRE_DEF: UnitDef = UnitDef { name: "Kilolitre", symbol: "kl", factor: 1e3, base: Some(&LITRE_DEF) };
    const HECTOLITRE_DEF: UnitDef = UnitDef { name: "Hectolitre", symbol: "hl", factor: 1e2, base: Some(&LITRE_DEF) };
    const DECALITRE_DEF: UnitDef = UnitDef { name: "Decalitre", symbol: "dal", factor: 1e1, base: Some(&LITRE_DEF) };
    const DECILITRE_DEF: UnitDef = UnitDef { name: "Decilitre", symbol: "dl", factor: 1e-1, base: Some(&LITRE_DEF) };
    const CENTILITRE_DEF: UnitDef = UnitDef { name: "Centilitre", symbol: "cl", factor: 1e-2, base: Some(&LITRE_DEF) };
    const MILLILITRE_DEF: UnitDef = UnitDef { name: "Millilitre", symbol: "ml", factor: 1e-3, base: Some(&LITRE_DEF) };
    const MICROLITRE_DEF: UnitDef = UnitDef { name: "Microlitre", symbol: "\u{3bc}l", factor: 1e-6, base: Some(&LITRE_DEF) };

    pub const KILOLITRE: Unit = Unit::one(&KILOLITRE_DEF);
    pub const HECTOLITRE: Unit = Unit::one(&HECTOLITRE_DEF);
    pub const DECALITRE: Unit = Unit::one(&DECALITRE_DEF);
    pub const LITRE: Unit = Unit::one(&LITRE_DEF);
    pub const DECILITRE: Unit = Unit::one(&DECILITRE_DEF);
    pub const CENTILITRE: Unit = Unit::one(&CENTILITRE_DEF);
    pub const MILLILITRE: Unit = Unit::one(&MILLILITRE_DEF);
    pub const MICROLITRE: Unit = Unit::one(&MICROLITRE_DEF);
}

pub mod temperature {
    //! Celsius-rooted temperature scales.
    //!
    //! Scale factors only; affine offsets (°F = °C × 9/5 + 32) are not
    //! modelled, matching the rest of the catalog.

    use super::*;

    pub(crate) static DEFS: &[&UnitDef] =
        &[&RANKINE_DEF, &KELVIN_DEF, &FAHRENHEIT_DEF, &CELSIUS_DEF];

    const CELSIUS_DEF: UnitDef = UnitDef { name: "Celsius", symbol: "\u{b0}C", factor: 1.0, base: None };
    const KELVIN_DEF: UnitDef = UnitDef { name: "Kelvin", symbol: "K", factor: 274.15, base: Some(&CELSIUS_DEF) };
    const FAHRENHEIT_DEF: UnitDef = UnitDef { name: "Fahrenheit", symbol: "\u{b0}F", factor: 33.8, base: Some(&CELSIUS_DEF) };
    const RANKINE_DEF: UnitDef = UnitDef { name: "Rankine", symbol: "\u{b0}R", factor: 493.47, base: Some(&KELVIN_DEF) };

    pub const RANKINE: Unit = Unit::one(&RANKINE_DEF);
    pub const KELVIN: Unit = Unit::one(&KELVIN_DEF);
    pub const FAHRENHEIT: Unit = Unit::one(&FAHRENHEIT_DEF);
    pub const CELSIUS: Unit = Unit::one(&CELSIUS_DEF);
}

/// Exact symbol lookup across all metric tables.
pub(crate) fn find_symbol(symbol: &str) -> Option<&'static UnitDef> {
    let tables: [&[&UnitDef]; 6] = [
        mass::DEFS,
        length::DEFS,
        area::DEFS,
        volume::DEFS,
        capacity::DEFS,
        temperature::DEFS,
    ];
    tables
        .into_iter()
        .flatten()
        .find(|def| def.symbol == symbol)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_chain_terminates_at_factor_one_root() {
        let tables: [&[&UnitDef]; 6] = [
            mass::DEFS,
            length::DEFS,
            area::DEFS,
            volume::DEFS,
            capacity::DEFS,
            temperature::DEFS,
        ];
        for def in tables.into_iter().flatten() {
            let root = def.root();
            assert!(root.base.is_none());
            assert_eq!(root.factor, 1.0, "root of {} has factor != 1", def.name);
        }
    }

    #[test]
    fn test_symbols_are_unique() {
        let tables: [&[&UnitDef]; 6] = [
            mass::DEFS,
            length::DEFS,
            area::DEFS,
            volume::DEFS,
            capacity::DEFS,
            temperature::DEFS,
        ];
        let symbols: Vec<_> = tables.into_iter().flatten().map(|d| d.symbol).collect();
        let unique: std::collections::HashSet<_> = symbols.iter().collect();
        assert_eq!(symbols.len(), unique.len(), "duplicate unit symbols");
    }

    #[test]
    fn test_find_symbol() {
        assert_eq!(find_symbol("kg").unwrap().name, "Kilogram");
        assert_eq!(find_symbol("m\u{b2}").unwrap().name, "Square Metre");
        assert!(find_symbol("xyz").is_none());
    }

    #[test]
    fn test_hectare_chain_goes_through_are() {
        assert_eq!(find_symbol("ha").unwrap().root().name, "Square Metre");
    }
}
