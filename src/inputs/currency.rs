//! pt-BR text entry for money, rate and period fields
//!
//! Money is typed as `1.234,56`: dots group thousands, a comma marks the
//! decimals. Empty fields count as zero.

use crate::display::group_thousands;
use crate::error::{ProjectionError, Result};

/// Parse a pt-BR money string such as `"R$ 10.000,50"` into a number.
pub fn parse_currency_input(text: &str) -> Result<f64> {
    let invalid = || ProjectionError::InvalidAmount { input: text.to_string() };

    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let (negative, unsigned) = match compact.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, compact.as_str()),
    };
    let unsigned = unsigned.strip_prefix("R$").unwrap_or(unsigned);
    let (negative, unsigned) = match unsigned.strip_prefix('-') {
        Some(rest) if !negative => (true, rest),
        Some(_) => return Err(invalid()),
        None => (negative, unsigned),
    };

    if unsigned.is_empty() {
        return Ok(0.0);
    }

    if !unsigned.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        || unsigned.matches(',').count() > 1
        || !unsigned.chars().any(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let normalized = unsigned.replace('.', "").replace(',', ".");
    let value: f64 = normalized.parse().map_err(|_| invalid())?;
    Ok(if negative { -value } else { value })
}

/// Cash-register style mask: every typed digit shifts in from the right as
/// cents, so `"123456"` reads `"1.234,56"`. Non-digits are dropped.
pub fn mask_currency_input(text: &str) -> String {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.trim_start_matches('0');
    let padded = format!("{:0>3}", digits);
    let (units, cents) = padded.split_at(padded.len() - 2);
    format!("{},{}", group_thousands(units, '.'), cents)
}

/// Parse a rate or period field. Accepts a decimal point or comma.
pub fn parse_number_input(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ProjectionError::InvalidNumber { input: text.to_string() }),
    }
}
