//! Lexical validators for text fields.
//!
//! Each validator is a pure function from a raw value to an optional
//! [`FieldError`]. Validators other than [`required`] treat an empty value
//! as passing unless their contract says otherwise; required-ness is
//! composed as its own rule so the same format check can serve optional and
//! mandatory fields alike.

use crate::error::FieldError;
use regex::Regex;
use std::sync::OnceLock;

// Pre-compiled regex patterns
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    // local@domain.tld: at least one dot after the @, no whitespace anywhere
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn phone_regex() -> &'static Regex {
    // Optional +, optional parenthesised area code, 7-10 further digits
    // with optional separators
    PHONE_REGEX.get_or_init(|| Regex::new(r"^\+?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4,7}$").unwrap())
}

fn username_regex() -> &'static Regex {
    USERNAME_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+$").unwrap())
}

fn name_regex() -> &'static Regex {
    NAME_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z\s'-]+$").unwrap())
}

fn url_regex() -> &'static Regex {
    // Permissive, scheme-optional host + TLD + optional path
    URL_REGEX
        .get_or_init(|| Regex::new(r"(?i)^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$").unwrap())
}

/// Validate that a value is present.
///
/// The message embeds `label` so the caller controls how the field is named
/// to the user ("Email is required", "Event name is required", ...).
pub fn required(value: &str, label: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        Some(FieldError::required(format!("{label} is required")))
    } else {
        None
    }
}

/// Validate a minimum character count. Empty values pass; compose with
/// [`required`] for mandatory fields.
pub fn min_length(value: &str, min: usize, label: &str) -> Option<FieldError> {
    if value.is_empty() {
        return None;
    }
    if value.chars().count() < min {
        Some(FieldError::range(format!(
            "{label} must be at least {min} characters"
        )))
    } else {
        None
    }
}

/// Validate a maximum character count. Empty values pass.
pub fn max_length(value: &str, max: usize, label: &str) -> Option<FieldError> {
    if value.is_empty() {
        return None;
    }
    if value.chars().count() > max {
        Some(FieldError::range(format!(
            "{label} must be at most {max} characters"
        )))
    } else {
        None
    }
}

/// Validate an email address.
pub fn email(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::required("Email is required"));
    }
    if !email_regex().is_match(value) {
        return Some(FieldError::format("Please enter a valid email address"));
    }
    None
}

/// Validate a phone number. Empty values pass.
pub fn phone(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return None;
    }
    if !phone_regex().is_match(value) {
        return Some(FieldError::format("Please enter a valid phone number"));
    }
    None
}

/// Validate password strength: at least 8 characters with a lowercase
/// letter, an uppercase letter, and a digit. The first missing class wins.
pub fn password(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::required("Password is required"));
    }
    if value.chars().count() < 8 {
        return Some(FieldError::range(
            "Password must be at least 8 characters",
        ));
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Some(FieldError::format(
            "Password must contain a lowercase letter",
        ));
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Some(FieldError::format(
            "Password must contain an uppercase letter",
        ));
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Some(FieldError::format("Password must contain a number"));
    }
    None
}

/// Validate that a confirmation value matches the original password.
///
/// This is the one binary validator in the crate: it reads two values, the
/// sibling password and its confirmation.
pub fn confirm_password(password: &str, confirmation: &str) -> Option<FieldError> {
    if confirmation.is_empty() {
        return Some(FieldError::required("Please confirm your password"));
    }
    if confirmation != password {
        return Some(FieldError::mismatch("Passwords do not match"));
    }
    None
}

/// Validate a username: 3-20 characters from letters, digits, underscore.
pub fn username(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::required("Username is required"));
    }
    let len = value.chars().count();
    if !(3..=20).contains(&len) {
        return Some(FieldError::range(
            "Username must be between 3 and 20 characters",
        ));
    }
    if !username_regex().is_match(value) {
        return Some(FieldError::format(
            "Username can only contain letters, numbers, and underscores",
        ));
    }
    None
}

/// Validate a personal or display name: 2-50 characters from letters,
/// spaces, hyphens, apostrophes.
pub fn name(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::required("Name is required"));
    }
    let len = value.chars().count();
    if !(2..=50).contains(&len) {
        return Some(FieldError::range(
            "Name must be between 2 and 50 characters",
        ));
    }
    if !name_regex().is_match(value) {
        return Some(FieldError::format(
            "Name can only contain letters, spaces, hyphens, and apostrophes",
        ));
    }
    None
}

/// Validate a URL. Empty values pass; the pattern is deliberately
/// permissive and scheme-optional ("example.com/events" is fine).
pub fn url(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return None;
    }
    if !url_regex().is_match(value) {
        return Some(FieldError::format("Please enter a valid URL"));
    }
    None
}
