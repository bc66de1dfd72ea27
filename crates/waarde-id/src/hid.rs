//! # Human-Readable Identifiers
//!
//! HIDs have the form `YEAR-NAME-NUMBER`: a four-digit year, an uppercase
//! name identifying the identifier family, and a 3-to-18-digit number.
//! [`hid_behavior!`](crate::hid_behavior) defines one behavior type per
//! family:
//!
//! ```
//! use waarde_id::{hid_behavior, Id};
//!
//! hid_behavior!(HydoBehavior, "HYDO");
//!
//! let id = Id::<HydoBehavior>::next().unwrap();
//! assert!(id.to_string().contains("HYDO"));
//! ```
//!
//! Parsing is forgiving about presentation: input is uppercased, stripped
//! of `-` and `.`, and trimmed before matching, then reconstructed into the
//! canonical dashed form. `2024HYDO001`, `2024-hydo-001`, and
//! `2024.HYDO.001` all parse to `2024-HYDO-001`.

use chrono::Datelike;
use regex::Regex;

/// Generates a fresh HID for the given family name:
/// `{current year}-{name}-{zero-padded random number}`. The name is
/// uppercased, matching the canonical form `try_parse` reconstructs.
pub fn next(name: &str) -> String {
    let year = chrono::Utc::now().year();
    let number: u32 = rand::random();
    format!("{year}-{}-{number:03}", name.to_uppercase())
}

/// Parses a HID of the given family, reconstructing the canonical
/// `YEAR-NAME-NUMBER` form. Returns `None` when the input does not match
/// the family's pattern.
pub fn try_parse(name: &str, s: &str) -> Option<String> {
    // Normalization uppercases the input, so the family name is matched
    // uppercase as well regardless of how the behavior spelled it.
    let name = name.to_uppercase();
    let normalized = normalize(s);
    let pattern = format!("^([1-9][0-9]{{3}}){}([0-9]{{3,18}})$", regex::escape(&name));
    // The pattern is built from a compile-time family name; a failure here
    // means the name itself is malformed, which reads as "no match".
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(&normalized)?;
    Some(format!("{}-{}-{}", &caps[1], name, &caps[2]))
}

fn normalize(s: &str) -> String {
    s.trim().to_uppercase().replace(['-', '.'], "")
}

/// Defines a behavior type for one HID family.
///
/// The generated type implements [`IdBehavior`](crate::IdBehavior) with
/// `Raw = String`; `supports` is defined as "round-trips through
/// `try_parse`". The family name appears uppercased in generated and
/// reconstructed ids, whatever the literal's case.
#[macro_export]
macro_rules! hid_behavior {
    ($ty:ident, $name:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $ty;

        impl $crate::IdBehavior for $ty {
            type Raw = String;

            const NAME: &'static str = $name;

            fn next() -> Result<String, $crate::UnsupportedError> {
                Ok($crate::hid::next($name))
            }

            fn supports(raw: &String) -> bool {
                $crate::hid::try_parse($name, raw).is_some()
            }

            fn format(raw: &String) -> String {
                raw.clone()
            }

            fn try_parse(s: &str) -> Option<String> {
                $crate::hid::try_parse($name, s)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IdBehavior;

    hid_behavior!(HydoBehavior, "HYDO");

    #[test]
    fn test_next_contains_family_name() {
        let raw = HydoBehavior::next().unwrap();
        assert!(raw.contains("HYDO"));
    }

    #[test]
    fn test_next_matches_canonical_pattern() {
        let raw = HydoBehavior::next().unwrap();
        let re = regex::Regex::new(r"^[1-9][0-9]{3}-HYDO-[0-9]{3,18}$").unwrap();
        assert!(re.is_match(&raw), "not canonical: {raw}");
    }

    #[test]
    fn test_generated_id_round_trips() {
        let raw = HydoBehavior::next().unwrap();
        assert_eq!(HydoBehavior::try_parse(&raw), Some(raw.clone()));
        assert!(HydoBehavior::supports(&raw));
    }

    #[test]
    fn test_parse_normalizes_presentation() {
        assert_eq!(
            try_parse("HYDO", "2024hydo001"),
            Some("2024-HYDO-001".to_string())
        );
        assert_eq!(
            try_parse("HYDO", " 2024.HYDO.001 "),
            Some("2024-HYDO-001".to_string())
        );
        assert_eq!(
            try_parse("HYDO", "2024-HYDO-001"),
            Some("2024-HYDO-001".to_string())
        );
    }

    #[test]
    fn test_lowercase_family_name_round_trips() {
        hid_behavior!(LowBehavior, "low");
        let raw = LowBehavior::next().unwrap();
        assert!(raw.contains("LOW"), "not uppercased: {raw}");
        assert_eq!(LowBehavior::try_parse(&raw), Some(raw.clone()));
        assert!(LowBehavior::supports(&raw));
    }

    #[test]
    fn test_parse_rejects_other_families() {
        assert_eq!(try_parse("HYDO", "2024-OTHER-001"), None);
    }

    #[test]
    fn test_parse_rejects_short_numbers() {
        assert_eq!(try_parse("HYDO", "2024-HYDO-01"), None);
    }

    #[test]
    fn test_parse_rejects_year_starting_with_zero() {
        assert_eq!(try_parse("HYDO", "0924-HYDO-001"), None);
    }
}
