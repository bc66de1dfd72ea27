//! # Country
//!
//! ISO 3166-1 countries from a compact built-in table. Canonical text is
//! the alpha-3 code; parsing also accepts the alpha-2 code, the numeric-3
//! code, and the English short name. The full ISO dataset lives outside
//! this crate; the table here covers the common cases.

use std::fmt;

use waarde_core::{parse_sentinels, FormatError, ValueObject, ValueState, UNKNOWN_MARKER};

/// One ISO 3166-1 table row.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CountryDef {
    /// English short name.
    pub name: &'static str,
    /// Alpha-2 code.
    pub alpha2: &'static str,
    /// Alpha-3 code. This is the canonical text.
    pub alpha3: &'static str,
    /// Numeric-3 code, zero-padded.
    pub numeric: &'static str,
    /// Continental region.
    pub region: &'static str,
    /// Sub-region.
    pub sub_region: &'static str,
}

macro_rules! country {
    ($name:literal, $a2:literal, $a3:literal, $num:literal, $region:literal, $sub:literal) => {
        CountryDef {
            name: $name,
            alpha2: $a2,
            alpha3: $a3,
            numeric: $num,
            region: $region,
            sub_region: $sub,
        }
    };
}

static DEFS: &[CountryDef] = &[
    country!("Australia", "AU", "AUS", "036", "Oceania", "Australia and New Zealand"),
    country!("Austria", "AT", "AUT", "040", "Europe", "Western Europe"),
    country!("Belgium", "BE", "BEL", "056", "Europe", "Western Europe"),
    country!("Brazil", "BR", "BRA", "076", "Americas", "Latin America and the Caribbean"),
    country!("Canada", "CA", "CAN", "124", "Americas", "Northern America"),
    country!("China", "CN", "CHN", "156", "Asia", "Eastern Asia"),
    country!("Czechia", "CZ", "CZE", "203", "Europe", "Eastern Europe"),
    country!("Denmark", "DK", "DNK", "208", "Europe", "Northern Europe"),
    country!("Finland", "FI", "FIN", "246", "Europe", "Northern Europe"),
    country!("France", "FR", "FRA", "250", "Europe", "Western Europe"),
    country!("Germany", "DE", "DEU", "276", "Europe", "Western Europe"),
    country!("Greece", "GR", "GRC", "300", "Europe", "Southern Europe"),
    country!("Hungary", "HU", "HUN", "348", "Europe", "Eastern Europe"),
    country!("Iceland", "IS", "ISL", "352", "Europe", "Northern Europe"),
    country!("India", "IN", "IND", "356", "Asia", "Southern Asia"),
    country!("Indonesia", "ID", "IDN", "360", "Asia", "South-eastern Asia"),
    country!("Ireland", "IE", "IRL", "372", "Europe", "Northern Europe"),
    country!("Israel", "IL", "ISR", "376", "Asia", "Western Asia"),
    country!("Italy", "IT", "ITA", "380", "Europe", "Southern Europe"),
    country!("Japan", "JP", "JPN", "392", "Asia", "Eastern Asia"),
    country!("Luxembourg", "LU", "LUX", "442", "Europe", "Western Europe"),
    country!("Mexico", "MX", "MEX", "484", "Americas", "Latin America and the Caribbean"),
    country!("Netherlands", "NL", "NLD", "528", "Europe", "Western Europe"),
    country!("New Zealand", "NZ", "NZL", "554", "Oceania", "Australia and New Zealand"),
    country!("Norway", "NO", "NOR", "578", "Europe", "Northern Europe"),
    country!("Poland", "PL", "POL", "616", "Europe", "Eastern Europe"),
    country!("Portugal", "PT", "PRT", "620", "Europe", "Southern Europe"),
    country!("Romania", "RO", "ROU", "642", "Europe", "Eastern Europe"),
    country!("South Africa", "ZA", "ZAF", "710", "Africa", "Sub-Saharan Africa"),
    country!("South Korea", "KR", "KOR", "410", "Asia", "Eastern Asia"),
    country!("Spain", "ES", "ESP", "724", "Europe", "Southern Europe"),
    country!("Sweden", "SE", "SWE", "752", "Europe", "Northern Europe"),
    country!("Switzerland", "CH", "CHE", "756", "Europe", "Western Europe"),
    country!("Turkey", "TR", "TUR", "792", "Asia", "Western Asia"),
    country!("United Kingdom", "GB", "GBR", "826", "Europe", "Northern Europe"),
    country!("United States", "US", "USA", "840", "Americas", "Northern America"),
];

/// A country value object backed by the static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Country(ValueState<&'static CountryDef>);

impl Country {
    /// The table row, if this country is valid.
    pub const fn def(&self) -> Option<&'static CountryDef> {
        match self.0.as_valid() {
            Some(def) => Some(*def),
            None => None,
        }
    }

    /// English short name, `""` for `Empty`, `"?"` for `Unknown`.
    pub fn name(&self) -> &'static str {
        self.select(|def| def.name)
    }

    /// Alpha-2 code, `""` for `Empty`, `"?"` for `Unknown`.
    pub fn alpha2(&self) -> &'static str {
        self.select(|def| def.alpha2)
    }

    /// Alpha-3 code, `""` for `Empty`, `"?"` for `Unknown`.
    pub fn alpha3(&self) -> &'static str {
        self.select(|def| def.alpha3)
    }

    /// Numeric-3 code, `""` for `Empty`, `"?"` for `Unknown`.
    pub fn numeric(&self) -> &'static str {
        self.select(|def| def.numeric)
    }

    fn select(&self, pick: impl Fn(&'static CountryDef) -> &'static str) -> &'static str {
        match &self.0 {
            ValueState::Empty => "",
            ValueState::Unknown => UNKNOWN_MARKER,
            ValueState::Valid(def) => pick(def),
        }
    }
}

/// Looks a country up by alpha-2 code, case-insensitively.
pub(crate) fn find_alpha2(code: &str) -> Option<&'static CountryDef> {
    DEFS.iter().find(|def| def.alpha2.eq_ignore_ascii_case(code))
}

fn find(s: &str) -> Option<&'static CountryDef> {
    DEFS.iter().find(|def| {
        def.alpha3.eq_ignore_ascii_case(s)
            || def.alpha2.eq_ignore_ascii_case(s)
            || def.numeric == s
            || def.name.eq_ignore_ascii_case(s)
    })
}

impl ValueObject for Country {
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
        find(s.trim())
            .map(|def| Self(ValueState::Valid(def)))
            .ok_or_else(|| FormatError::new("country", s))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alpha3())
    }
}

waarde_core::impl_value_object_text!(Country);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert!(Country::parse("").unwrap().is_empty());
        assert!(Country::parse("?").unwrap().is_unknown());
        assert_ne!(Country::empty(), Country::unknown());
    }

    #[test]
    fn test_parse_alpha3() {
        let nl = Country::parse("NLD").unwrap();
        assert_eq!(nl.name(), "Netherlands");
        assert_eq!(nl.alpha2(), "NL");
        assert_eq!(nl.numeric(), "528");
    }

    #[test]
    fn test_parse_other_spellings() {
        let nl = Country::parse("NLD").unwrap();
        assert_eq!(Country::parse("NL").unwrap(), nl);
        assert_eq!(Country::parse("nld").unwrap(), nl);
        assert_eq!(Country::parse("528").unwrap(), nl);
        assert_eq!(Country::parse("Netherlands").unwrap(), nl);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Country::parse("Atlantis").is_err());
    }

    #[test]
    fn test_display_is_alpha3() {
        assert_eq!(Country::parse("US").unwrap().to_string(), "USA");
        assert_eq!(Country::unknown().to_string(), "?");
    }

    #[test]
    fn test_roundtrip() {
        let de = Country::parse("DEU").unwrap();
        assert_eq!(Country::parse(&de.to_string()).unwrap(), de);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Country::parse("FRA").unwrap()).unwrap();
        assert_eq!(json, "\"FRA\"");
        let garbage: Country = serde_json::from_str("\"narnia\"").unwrap();
        assert!(garbage.is_unknown());
    }
}
