//! Form input parsing
//!
//! Raw text from the presentation layer is parsed here before it reaches
//! the data model. Nothing is coerced: a field that is not a whole number
//! in range is an error naming the field.

use crate::error::{Error, Result};

/// Parse a non-negative whole number (HP, AC, heal/damage amounts).
///
/// Surrounding whitespace is ignored. Empty input is an error.
pub fn parse_non_negative(field: &str, raw: &str) -> Result<u32> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(Error::InvalidInput(format!("{} is required", field)));
    }
    let parsed: i64 = value.parse().map_err(|_| {
        Error::InvalidInput(format!("{} must be a whole number, got {:?}", field, value))
    })?;
    if parsed < 0 {
        return Err(Error::InvalidInput(format!(
            "{} must not be negative, got {}",
            field, parsed
        )));
    }
    u32::try_from(parsed)
        .map_err(|_| Error::InvalidInput(format!("{} is too large, got {}", field, parsed)))
}

/// Parse a signed whole number (initiative)
pub fn parse_integer(field: &str, raw: &str) -> Result<i32> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(Error::InvalidInput(format!("{} is required", field)));
    }
    value.parse::<i32>().map_err(|_| {
        Error::InvalidInput(format!("{} must be a whole number, got {:?}", field, value))
    })
}

/// Parse an optional non-negative field; empty input means zero
pub fn parse_non_negative_or_zero(field: &str, raw: Option<&str>) -> Result<u32> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => parse_non_negative(field, value),
    }
}

/// Parse a yes/no flag such as the dead checkbox
pub fn parse_flag(field: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Ok(true),
        "false" | "no" | "n" | "0" | "off" => Ok(false),
        other => Err(Error::InvalidInput(format!(
            "{} must be yes or no, got {:?}",
            field, other
        ))),
    }
}
