//! # EmailAddress
//!
//! Canonicalizes to the bare lowercase address. Parsing unwraps display
//! forms (`"Ada Lovelace" <ada@example.org>`) and recognizes IP-based
//! domains, including the bracketed `[IPv6:...]` form.

use std::fmt;
use std::net::IpAddr;

use waarde_core::{parse_sentinels, FormatError, ValueObject, ValueState, UNKNOWN_MARKER};

/// An email address value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EmailAddress(ValueState<String>);

impl EmailAddress {
    /// The part before the `@`, if valid.
    pub fn local(&self) -> Option<&str> {
        self.parts().map(|(local, _)| local)
    }

    /// The part after the `@`, if valid. Brackets are kept as-is.
    pub fn domain(&self) -> Option<&str> {
        self.parts().map(|(_, domain)| domain)
    }

    /// Whether the domain is an IP literal rather than a host name.
    pub fn is_ip_based(&self) -> bool {
        self.ip_domain().is_some()
    }

    /// The domain as an address, for IP-based addresses.
    pub fn ip_domain(&self) -> Option<IpAddr> {
        let domain = self.domain()?;
        parse_ip_domain(domain)
    }

    fn parts(&self) -> Option<(&str, &str)> {
        self.0.as_valid().and_then(|s| s.rsplit_once('@'))
    }
}

/// Reads `1.2.3.4`, `[1.2.3.4]`, `[IPv6:::1]` and bare IPv6 domains.
fn parse_ip_domain(domain: &str) -> Option<IpAddr> {
    let inner = domain
        .strip_prefix('[')
        .and_then(|d| d.strip_suffix(']'))
        .unwrap_or(domain);
    let inner = inner
        .strip_prefix("IPv6:")
        .or_else(|| inner.strip_prefix("ipv6:"))
        .unwrap_or(inner);
    inner.parse().ok()
}

/// Strips a `"Display Name" <addr>` or `Name <addr>` wrapper.
fn unwrap_display_form(s: &str) -> &str {
    match (s.rfind('<'), s.rfind('>')) {
        (Some(open), Some(close)) if open < close => &s[open + 1..close],
        _ => s,
    }
}

fn is_valid_address(s: &str) -> bool {
    let Some((local, domain)) = s.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if local.contains(char::is_whitespace) || local.contains('@') {
        return false;
    }
    if parse_ip_domain(domain).is_some() {
        return true;
    }
    // Host names: dot-separated labels of letters, digits and hyphens.
    !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain
            .split('.')
            .all(|label| {
                !label.is_empty()
                    && label
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-')
            })
}

impl ValueObject for EmailAddress {
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
        let address = unwrap_display_form(s.trim()).trim();
        if !is_valid_address(address) {
            return Err(FormatError::new("email address", s));
        }
        // The IP bracket form is case-preserved; everything else lowers.
        let canonical = if address.contains('[') {
            address.to_string()
        } else {
            address.to_ascii_lowercase()
        };
        Ok(Self(ValueState::Valid(canonical)))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            ValueState::Empty => Ok(()),
            ValueState::Unknown => f.write_str(UNKNOWN_MARKER),
            ValueState::Valid(s) => f.write_str(s),
        }
    }
}

waarde_core::impl_value_object_text!(EmailAddress);
