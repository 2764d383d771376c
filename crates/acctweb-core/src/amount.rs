//! Monetary input parsing
//!
//! User-entered amounts are accepted only in a plain two-decimal-place
//! format: an optional leading `-`, then either digits with an optional
//! one- or two-digit fraction, or a bare fraction such as `.5`.

use rust_decimal::Decimal;
use std::str::FromStr;

const AMOUNT_PATTERN: &str = r"^-?([0-9]+(\.[0-9]{1,2})?|\.[0-9]{1,2})$";

/// Result of parsing a user-entered amount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedAmount {
    Valid(Decimal),
    Invalid,
}

impl ParsedAmount {
    pub fn is_valid(&self) -> bool {
        matches!(self, ParsedAmount::Valid(_))
    }

    pub fn value(self) -> Option<Decimal> {
        match self {
            ParsedAmount::Valid(value) => Some(value),
            ParsedAmount::Invalid => None,
        }
    }
}

/// Parse an already-trimmed amount string.
///
/// Blank input is `Invalid` here; callers report it separately. Values
/// beyond `Decimal::MAX` in magnitude are `Invalid` as well.
pub fn parse_amount(input: &str) -> ParsedAmount {
    static AMOUNT_REGEX: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let amount_regex = AMOUNT_REGEX.get_or_init(|| regex::Regex::new(AMOUNT_PATTERN).unwrap());

    if !amount_regex.is_match(input) {
        return ParsedAmount::Invalid;
    }

    // Decimal wants a leading digit before the point
    let normalized = if let Some(fraction) = input.strip_prefix("-.") {
        format!("-0.{}", fraction)
    } else if let Some(fraction) = input.strip_prefix('.') {
        format!("0.{}", fraction)
    } else {
        input.to_string()
    };

    match Decimal::from_str(&normalized) {
        Ok(value) => ParsedAmount::Valid(value),
        // digits beyond Decimal's range
        Err(_) => ParsedAmount::Invalid,
    }
}

/// Format an amount with exactly two decimal places
pub fn format_amount(value: &Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}
