//! Error types for the validation engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Classification of a validation failure.
///
/// Every failure produced by this crate carries exactly one kind, so callers
/// can react to the class of problem without parsing message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required value is absent.
    Required,
    /// The value is present but does not match the expected lexical shape.
    Format,
    /// The value's length or numeric magnitude is outside allowed bounds.
    Range,
    /// The value is well-formed but fails a deeper domain check
    /// (impossible calendar date, failed checksum, expired card).
    Semantic,
    /// The value must equal another field's value and does not.
    Mismatch,
}

impl ErrorKind {
    /// Get the kind as a stable string code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::Format => "format",
            ErrorKind::Range => "range",
            ErrorKind::Semantic => "semantic",
            ErrorKind::Mismatch => "mismatch",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error recorded for a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    /// Failure classification
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Shorthand for a [`ErrorKind::Required`] error.
    pub fn required(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Required, message)
    }

    /// Shorthand for a [`ErrorKind::Format`] error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Format, message)
    }

    /// Shorthand for a [`ErrorKind::Range`] error.
    pub fn range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Range, message)
    }

    /// Shorthand for a [`ErrorKind::Semantic`] error.
    pub fn semantic(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Semantic, message)
    }

    /// Shorthand for a [`ErrorKind::Mismatch`] error.
    pub fn mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Mismatch, message)
    }
}

/// Sparse map of field name to the single error recorded for that field.
///
/// Absence of a key means "no error" for that field, never "error is empty".
/// At most one error is held per field; when several rules fail, the first
/// one recorded wins. All transformations return a new map rather than
/// mutating in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorMap {
    /// Map of field name to its recorded error
    #[serde(flatten)]
    fields: BTreeMap<String, FieldError>,
}

impl ErrorMap {
    /// Create an empty error map.
    ///
    /// Also serves as the "clear all errors" constructor: a fresh map with
    /// no entries, independent of any prior map.
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Record an error for a field.
    ///
    /// If the field already has an error the existing one is kept, so the
    /// first recorded error always wins.
    pub fn add(&mut self, field: impl Into<String>, error: FieldError) {
        self.fields.entry(field.into()).or_insert(error);
    }

    /// Check if there are no entries at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of fields with a recorded error.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Get the error for a specific field.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.fields.get(field)
    }

    /// Get the message for a specific field, if it has an error.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(|e| e.message.as_str())
    }

    /// Check if the map holds at least one genuine error.
    ///
    /// Only entries with a non-empty message count, so an accidental blank
    /// message can never gate a submission.
    pub fn has_errors(&self) -> bool {
        self.fields.values().any(|e| !e.message.is_empty())
    }

    /// Return a new map identical to this one except the named field's
    /// entry is removed. The original map is untouched.
    pub fn without(&self, field: &str) -> ErrorMap {
        let mut fields = self.fields.clone();
        fields.remove(field);
        ErrorMap { fields }
    }

    /// Merge another map into this one. On collision the entry already
    /// present here is kept.
    pub fn merge(&mut self, other: ErrorMap) {
        for (field, error) in other.fields {
            self.add(field, error);
        }
    }

    /// Get all field names with errors.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    /// Iterate over `(field, error)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Convert to Result - Ok if no errors, Err otherwise.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: {} error(s)", self.len())
    }
}

impl std::error::Error for ErrorMap {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_creation() {
        let error = FieldError::format("Invalid email format");
        assert_eq!(error.kind, ErrorKind::Format);
        assert_eq!(error.message, "Invalid email format");
        assert_eq!(error.to_string(), "Invalid email format");
    }

    #[test]
    fn error_kind_codes() {
        assert_eq!(ErrorKind::Required.as_str(), "required");
        assert_eq!(ErrorKind::Mismatch.as_str(), "mismatch");
    }

    #[test]
    fn empty_map_has_no_errors() {
        let errors = ErrorMap::new();
        assert!(errors.is_empty());
        assert!(!errors.has_errors());
    }

    #[test]
    fn add_and_get() {
        let mut errors = ErrorMap::new();
        errors.add("email", FieldError::required("Email is required"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message("email"), Some("Email is required"));
        assert!(errors.get("name").is_none());
        assert!(errors.has_errors());
    }

    #[test]
    fn first_error_wins() {
        let mut errors = ErrorMap::new();
        errors.add("email", FieldError::required("Email is required"));
        errors.add("email", FieldError::format("Invalid email format"));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email").unwrap().kind, ErrorKind::Required);
    }

    #[test]
    fn blank_message_is_not_an_error() {
        let mut errors = ErrorMap::new();
        errors.add("email", FieldError::format(""));
        assert!(!errors.is_empty());
        assert!(!errors.has_errors());
    }

    #[test]
    fn without_returns_new_map() {
        let mut errors = ErrorMap::new();
        errors.add("email", FieldError::format("x"));
        errors.add("name", FieldError::format("y"));

        let cleared = errors.without("email");
        assert_eq!(cleared.len(), 1);
        assert_eq!(cleared.message("name"), Some("y"));

        // original untouched
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.message("email"), Some("x"));
    }

    #[test]
    fn without_missing_field_is_identity() {
        let mut errors = ErrorMap::new();
        errors.add("name", FieldError::format("y"));
        assert_eq!(errors.without("email"), errors);
    }

    #[test]
    fn merge_keeps_existing_entries() {
        let mut left = ErrorMap::new();
        left.add("email", FieldError::required("Email is required"));

        let mut right = ErrorMap::new();
        right.add("email", FieldError::format("Invalid email format"));
        right.add("name", FieldError::required("Name is required"));

        left.merge(right);
        assert_eq!(left.len(), 2);
        assert_eq!(left.get("email").unwrap().kind, ErrorKind::Required);
    }

    #[test]
    fn into_result() {
        assert!(ErrorMap::new().into_result().is_ok());

        let mut errors = ErrorMap::new();
        errors.add("field", FieldError::format("message"));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut errors = ErrorMap::new();
        errors.add("email", FieldError::required("Email is required"));

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["email"]["kind"], "required");
        assert_eq!(json["email"]["message"], "Email is required");
    }
}
