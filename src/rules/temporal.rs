//! Calendar and clock validators.

use crate::error::FieldError;
use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
static TIME_REGEX: OnceLock<Regex> = OnceLock::new();
static EXPIRY_REGEX: OnceLock<Regex> = OnceLock::new();

fn date_regex() -> &'static Regex {
    DATE_REGEX.get_or_init(|| Regex::new(r"^\d{2}/\d{2}/\d{4}$").unwrap())
}

fn time_regex() -> &'static Regex {
    TIME_REGEX.get_or_init(|| Regex::new(r"(?i)^(0?[1-9]|1[0-2]):[0-5][0-9]\s?(AM|PM)$").unwrap())
}

fn expiry_regex() -> &'static Regex {
    EXPIRY_REGEX.get_or_init(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").unwrap())
}

/// Validate an `MM/DD/YYYY` date.
///
/// After the lexical check the three integers go through calendar
/// construction, which rejects impossible dates (Feb 30, Jun 31, Feb 29 in
/// a non-leap year) instead of rolling them over into the next month.
pub fn date(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::required("Date is required"));
    }
    if !date_regex().is_match(value) {
        return Some(FieldError::format("Date must be in MM/DD/YYYY format"));
    }
    // slices are safe: the pattern guarantees ASCII digits at these offsets
    let month: u32 = value[0..2].parse().unwrap_or(0);
    let day: u32 = value[3..5].parse().unwrap_or(0);
    let year: i32 = value[6..10].parse().unwrap_or(0);
    if NaiveDate::from_ymd_opt(year, month, day).is_none() {
        return Some(FieldError::semantic("Please enter a valid date"));
    }
    None
}

/// Validate an `HH:MM AM/PM` time: hour 1-12, minute 00-59,
/// case-insensitive meridiem. Empty values pass.
pub fn time(value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return None;
    }
    if !time_regex().is_match(value) {
        return Some(FieldError::format("Time must be in HH:MM AM/PM format"));
    }
    None
}

/// Validate an `MM/YY` card expiry against today's local date.
pub fn expiry_date(value: &str) -> Option<FieldError> {
    expiry_date_at(value, Local::now().date_naive())
}

/// Validate an `MM/YY` card expiry against an explicit reference date.
///
/// The card is rejected when the first day of month `MM` in year `20YY`
/// falls strictly before `today`. Note that this marks a card expiring in
/// the current month as already expired once the month is underway, which
/// matches how the checkout flow has always treated it.
pub fn expiry_date_at(value: &str, today: NaiveDate) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::required("Expiry date is required"));
    }
    if !expiry_regex().is_match(value) {
        return Some(FieldError::format("Expiry date must be in MM/YY format"));
    }
    let month: u32 = value[0..2].parse().unwrap_or(0);
    let year: i32 = 2000 + value[3..5].parse::<i32>().unwrap_or(0);
    // the pattern pins the month to 01-12 and the day to 1, so
    // construction cannot fail
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first_of_month) if first_of_month < today => {
            Some(FieldError::semantic("This card has expired"))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn date_valid() {
        assert!(date("12/25/2024").is_none());
        assert!(date("01/01/1999").is_none());
    }

    #[test]
    fn date_format_errors() {
        assert_eq!(date("").unwrap().kind, ErrorKind::Required);
        assert_eq!(date("2024-12-25").unwrap().kind, ErrorKind::Format);
        assert_eq!(date("1/1/2024").unwrap().kind, ErrorKind::Format);
        assert_eq!(date("12/25/24").unwrap().kind, ErrorKind::Format);
    }

    #[test]
    fn date_calendar_errors() {
        // February never has 30 days
        assert_eq!(date("02/30/2024").unwrap().kind, ErrorKind::Semantic);
        // 2024 is a leap year, 2023 is not
        assert!(date("02/29/2024").is_none());
        assert_eq!(date("02/29/2023").unwrap().kind, ErrorKind::Semantic);
        // June has 30 days; there is no month 13
        assert_eq!(date("06/31/2024").unwrap().kind, ErrorKind::Semantic);
        assert_eq!(date("13/01/2024").unwrap().kind, ErrorKind::Semantic);
        assert_eq!(date("00/10/2024").unwrap().kind, ErrorKind::Semantic);
    }

    #[test]
    fn time_valid() {
        assert!(time("").is_none());
        assert!(time("9:30 AM").is_none());
        assert!(time("09:30 am").is_none());
        assert!(time("12:00 PM").is_none());
        assert!(time("1:05pm").is_none());
    }

    #[test]
    fn time_invalid() {
        assert_eq!(time("13:00 PM").unwrap().kind, ErrorKind::Format);
        assert_eq!(time("0:30 AM").unwrap().kind, ErrorKind::Format);
        assert_eq!(time("9:60 AM").unwrap().kind, ErrorKind::Format);
        assert_eq!(time("9:30").unwrap().kind, ErrorKind::Format);
        assert_eq!(time("noon").unwrap().kind, ErrorKind::Format);
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn expiry_future_passes() {
        let today = day(2026, 8, 30);
        assert!(expiry_date_at("09/26", today).is_none());
        assert!(expiry_date_at("01/30", today).is_none());
    }

    #[test]
    fn expiry_past_fails() {
        let today = day(2026, 8, 30);
        assert_eq!(
            expiry_date_at("07/26", today).unwrap().kind,
            ErrorKind::Semantic
        );
        assert_eq!(
            expiry_date_at("12/20", today).unwrap().kind,
            ErrorKind::Semantic
        );
    }

    #[test]
    fn expiry_current_month_counts_as_expired() {
        // first-of-month is strictly before the 30th
        let today = day(2026, 8, 30);
        assert_eq!(
            expiry_date_at("08/26", today).unwrap().kind,
            ErrorKind::Semantic
        );
        // on the 1st it is not strictly before
        assert!(expiry_date_at("08/26", day(2026, 8, 1)).is_none());
    }

    #[test]
    fn expiry_shape_errors() {
        let today = day(2026, 8, 30);
        assert_eq!(
            expiry_date_at("", today).unwrap().kind,
            ErrorKind::Required
        );
        assert_eq!(
            expiry_date_at("13/26", today).unwrap().kind,
            ErrorKind::Format
        );
        assert_eq!(
            expiry_date_at("8/26", today).unwrap().kind,
            ErrorKind::Format
        );
        assert_eq!(
            expiry_date_at("08/2026", today).unwrap().kind,
            ErrorKind::Format
        );
    }
}
