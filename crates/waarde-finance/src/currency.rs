//! # Currency — ISO Currencies as Value Objects
//!
//! A small static catalog of currencies, wrapped in the value-object
//! contract. Canonical text is the symbol (`"$"`, `"€"`); parsing also
//! accepts the ISO code, the English name, and common written aliases.
//!
//! There is no ambient default currency. Call sites that need one pass it
//! explicitly.

use std::fmt;

use waarde_core::{parse_sentinels, FormatError, ValueObject, ValueState, UNKNOWN_MARKER};

/// A catalog currency: identity plus the spellings `parse` accepts.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CurrencyDef {
    /// English name, e.g. `"Euro"`.
    pub name: &'static str,
    /// ISO 4217 alphabetic code, e.g. `"EUR"`.
    pub code: &'static str,
    /// Display symbol, e.g. `"€"`. This is the canonical text.
    pub symbol: &'static str,
    /// Name of the minor unit, e.g. `"cent"`.
    pub unit: &'static str,
    /// Extra spellings accepted by `parse`, matched case-insensitively.
    pub aliases: &'static [&'static str],
}

const EURO_DEF: CurrencyDef = CurrencyDef {
    name: "Euro",
    code: "EUR",
    symbol: "\u{20ac}",
    unit: "cent",
    aliases: &[],
};

const DOLLAR_DEF: CurrencyDef = CurrencyDef {
    name: "Dollar",
    code: "USD",
    symbol: "$",
    unit: "cent",
    aliases: &["dol.", "dols.", "dollars"],
};

const POUND_DEF: CurrencyDef = CurrencyDef {
    name: "Pound sterling",
    code: "GBP",
    symbol: "\u{a3}",
    unit: "penny",
    aliases: &["pound", "pounds"],
};

const YEN_DEF: CurrencyDef = CurrencyDef {
    name: "Yen",
    code: "JPY",
    symbol: "\u{a5}",
    unit: "sen",
    aliases: &[],
};

static DEFS: &[&CurrencyDef] = &[&EURO_DEF, &DOLLAR_DEF, &POUND_DEF, &YEN_DEF];

/// A currency value object backed by the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency(ValueState<&'static CurrencyDef>);

pub const EURO: Currency = Currency(ValueState::Valid(&EURO_DEF));
pub const DOLLAR: Currency = Currency(ValueState::Valid(&DOLLAR_DEF));
pub const POUND: Currency = Currency(ValueState::Valid(&POUND_DEF));
pub const YEN: Currency = Currency(ValueState::Valid(&YEN_DEF));

impl Currency {
    pub(crate) const fn from_def(def: &'static CurrencyDef) -> Self {
        Self(ValueState::Valid(def))
    }

    /// The catalog definition, if this currency is valid.
    pub const fn def(&self) -> Option<&'static CurrencyDef> {
        match self.0.as_valid() {
            Some(def) => Some(*def),
            None => None,
        }
    }

    /// The display symbol, `""` for `Empty`, `"?"` for `Unknown`.
    pub fn symbol(&self) -> &'static str {
        match &self.0 {
            ValueState::Empty => "",
            ValueState::Unknown => UNKNOWN_MARKER,
            ValueState::Valid(def) => def.symbol,
        }
    }

    /// The ISO 4217 code, `""` for `Empty`, `"?"` for `Unknown`.
    pub fn code(&self) -> &'static str {
        match &self.0 {
            ValueState::Empty => "",
            ValueState::Unknown => UNKNOWN_MARKER,
            ValueState::Valid(def) => def.code,
        }
    }

    /// The English name, `""` for `Empty`, `"?"` for `Unknown`.
    pub fn name(&self) -> &'static str {
        match &self.0 {
            ValueState::Empty => "",
            ValueState::Unknown => UNKNOWN_MARKER,
            ValueState::Valid(def) => def.name,
        }
    }

    /// The minor unit name, `""` for `Empty`, `"?"` for `Unknown`.
    pub fn unit(&self) -> &'static str {
        match &self.0 {
            ValueState::Empty => "",
            ValueState::Unknown => UNKNOWN_MARKER,
            ValueState::Valid(def) => def.unit,
        }
    }
}

/// Matches a spelling against the catalog: symbol exactly, then code, name
/// and aliases case-insensitively.
pub(crate) fn find(s: &str) -> Option<&'static CurrencyDef> {
    let trimmed = s.trim();
    DEFS.iter()
        .find(|def| {
            def.symbol == trimmed
                || def.code.eq_ignore_ascii_case(trimmed)
                || def.name.eq_ignore_ascii_case(trimmed)
                || def
                    .aliases
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(trimmed))
        })
        .copied()
}

impl ValueObject for Currency {
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
        find(s)
            .map(|def| Self(ValueState::Valid(def)))
            .ok_or_else(|| FormatError::new("currency", s))
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

waarde_core::impl_value_object_text!(Currency);
