// Brazilian Real amounts: "1.234,56" on screen, 1234.56 in memory and on the wire.
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

use crate::error::{FormsError, Result};

const CURRENCY_MARKER: &str = "R$";
// From 2^53 up every f64 is a whole number, so there is nothing left to round.
const WHOLE_NUMBERS_FROM: f64 = 9_007_199_254_740_992.0;

/// Renders an amount with two decimals, `.` for thousands and `,` for decimals.
///
/// Rounds half away from zero on the shortest decimal form of the number, so
/// `1.005` renders as `1,01`. Non-finite amounts are rejected.
pub fn format_brl(amount: f64) -> Result<String> {
    if !amount.is_finite() {
        return Err(FormsError::MalformedAmount(amount.to_string()));
    }
    // Anything this small rounds to zero and would only overflow Decimal's scale.
    if amount.abs() < 0.001 {
        return Ok("0,00".to_string());
    }
    if amount.abs() >= WHOLE_NUMBERS_FROM {
        let sign = if amount < 0.0 { "-" } else { "" };
        return Ok(format!("{}{},00", sign, group_thousands(&amount.abs().to_string())));
    }

    let exact = Decimal::from_str(&amount.to_string())
        .map_err(|_| FormsError::MalformedAmount(amount.to_string()))?;
    let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let text = format!("{:.2}", rounded.abs());
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

    Ok(format!("{}{},{}", sign, group_thousands(integer), fraction))
}

/// Same as [`format_brl`] with the currency marker in front: `R$ 1.234,56`, `-R$ 5,00`.
pub fn format_brl_with_symbol(amount: f64) -> Result<String> {
    let formatted = format_brl(amount)?;
    Ok(match formatted.strip_prefix('-') {
        Some(positive) => format!("-{} {}", CURRENCY_MARKER, positive),
        None => format!("{} {}", CURRENCY_MARKER, formatted),
    })
}

/// Parses text such as `"R$ 1.234,56"`, `"1.234,56"` or `"40"` into a number.
pub fn parse_brl(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(after_sign) if after_sign.trim_start().starts_with(CURRENCY_MARKER) => {
            (true, after_sign.trim_start())
        }
        _ => (false, trimmed),
    };
    let body = rest.strip_prefix(CURRENCY_MARKER).unwrap_or(rest).trim();

    if body.is_empty() {
        tracing::debug!(input = %text, "Rejected empty amount");
        return Err(FormsError::MissingAmount);
    }

    let unsigned = body.strip_prefix(['-', '+']).unwrap_or(body);
    if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return Err(malformed(text));
    }

    let normalized = body.replace('.', "").replace(',', ".");
    let value = f64::from_str(&normalized).map_err(|_| malformed(text))?;
    if !value.is_finite() {
        return Err(malformed(text));
    }

    Ok(if negative { -value } else { value })
}

/// Parses an amount coming from loosely typed input; only JSON strings are accepted.
pub fn parse_brl_value(value: &Value) -> Result<f64> {
    match value {
        Value::String(text) => parse_brl(text),
        other => {
            tracing::debug!(input = %other, "Rejected non-text amount");
            Err(FormsError::MissingAmount)
        }
    }
}

/// Formats keystrokes from a masked money input: typed digits are read as cents.
///
/// `"123456"` becomes `"1.234,56"`; anything that is not an ASCII digit is ignored.
pub fn mask_brl_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let significant = digits.trim_start_matches('0');
    let cents = format!("{:0>3}", significant);
    let (integer, fraction) = cents.split_at(cents.len() - 2);
    format!("{},{}", group_thousands(integer), fraction)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

fn malformed(text: &str) -> FormsError {
    tracing::debug!(input = %text, "Rejected malformed amount");
    FormsError::MalformedAmount(text.to_string())
}
