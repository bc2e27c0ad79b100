//! Decimal parsing for raw provider payloads
//!
//! Upstream data providers routinely emit `"None"` or omit fields entirely
//! for immature companies. A hard failure on one field would abort the
//! whole dossier, so every parse failure degrades to zero instead.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Parses a provider-supplied numeric string into an exact decimal.
///
/// Returns zero for absent input, the empty string, the literal sentinel
/// `"None"`, and anything that fails to parse. Never errors.
pub fn parse_decimal(raw: Option<&str>) -> Decimal {
    match raw {
        None | Some("" | "None") => Decimal::ZERO,
        Some(text) => Decimal::from_str(text.trim()).unwrap_or(Decimal::ZERO),
    }
}

/// Reads a named field out of a raw report, with the same zero fallback.
///
/// Non-string values (including JSON null) count as absent.
pub fn decimal_field(report: &Value, key: &str) -> Decimal {
    parse_decimal(report.get(key).and_then(Value::as_str))
}
