//! Numeric and payment-card validators.

use crate::error::FieldError;
use regex::Regex;
use std::sync::OnceLock;

static PRICE_REGEX: OnceLock<Regex> = OnceLock::new();

fn price_regex() -> &'static Regex {
    // Decimal with at most two fraction digits. The optional sign exists
    // only so a negative amount reaches the range check instead of being
    // reported as a format problem.
    PRICE_REGEX.get_or_init(|| Regex::new(r"^-?\d+(\.\d{1,2})?$").unwrap())
}

/// Validate that a value parses as a number, optionally within bounds.
/// Empty values pass.
pub fn number(value: &str, min: Option<f64>, max: Option<f64>) -> Option<FieldError> {
    if value.is_empty() {
        return None;
    }
    let parsed: f64 = match value.parse() {
        Ok(n) => n,
        Err(_) => return Some(FieldError::format("Please enter a valid number")),
    };
    if let Some(min) = min {
        if parsed < min {
            return Some(FieldError::range(format!("Value must be at least {min}")));
        }
    }
    if let Some(max) = max {
        if parsed > max {
            return Some(FieldError::range(format!("Value must be at most {max}")));
        }
    }
    None
}

/// Validate a price: a non-negative decimal with at most two fraction
/// digits. Empty values pass.
pub fn price(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return None;
    }
    if !price_regex().is_match(value) {
        return Some(FieldError::format("Please enter a valid price"));
    }
    if value.parse::<f64>().unwrap_or(0.0) < 0.0 {
        return Some(FieldError::range("Price cannot be negative"));
    }
    None
}

/// Luhn checksum over a digit string: starting from the rightmost digit,
/// every second digit is doubled, with 9 subtracted when doubling exceeds
/// 9; the number is valid iff the digit sum is divisible by 10.
fn luhn_checksum(digits: &str) -> u32 {
    digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let mut d = u32::from(b - b'0');
            if i % 2 == 1 {
                d *= 2;
                if d > 9 {
                    d -= 9;
                }
            }
            d
        })
        .sum()
}

/// Validate a payment card number.
///
/// Whitespace is stripped before checking, so "4532 0151 1283 0366" and
/// "4532015112830366" are equivalent. The Luhn check catches typos, not
/// whether a real account exists.
pub fn credit_card(value: &str) -> Option<FieldError> {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.is_empty() {
        return Some(FieldError::required("Card number is required"));
    }
    if !(13..=19).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Some(FieldError::format("Please enter a valid card number"));
    }
    if luhn_checksum(&digits) % 10 != 0 {
        return Some(FieldError::semantic("Invalid card number"));
    }
    None
}

/// Validate a card security code: 3 or 4 digits.
pub fn cvv(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::required("CVV is required"));
    }
    let digits_only = value.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || !(3..=4).contains(&value.len()) {
        return Some(FieldError::format("CVV must be 3 or 4 digits"));
    }
    None
}
