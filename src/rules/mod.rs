//! Validation rules.
//!
//! The atomic validators live in the submodules as plain functions and can
//! be called on their own. [`Rule`] wraps them into composable values a
//! [`RuleSet`](crate::RuleSet) can hold, with an optional per-rule message
//! override.

mod numeric;
mod temporal;
mod text;

pub use numeric::{credit_card, cvv, number, price};
pub use temporal::{date, expiry_date, expiry_date_at, time};
pub use text::{
    confirm_password, email, max_length, min_length, name, password, phone, required, url,
    username,
};

use crate::error::FieldError;
use crate::form::FormData;
use std::fmt;
use std::sync::Arc;

type CustomFn = dyn Fn(&str, &FormData) -> Option<FieldError> + Send + Sync;

/// A custom check wrapped for cloning and debug printing.
#[derive(Clone)]
struct CustomCheck(Arc<CustomFn>);

impl fmt::Debug for CustomCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<custom check>")
    }
}

/// The closed set of checks a [`Rule`] can perform.
#[derive(Debug, Clone)]
enum RuleKind {
    Required { label: String },
    MinLength { min: usize, label: String },
    MaxLength { max: usize, label: String },
    Email,
    Phone,
    Password,
    /// Value must equal the named sibling field's value.
    Matches { other: String },
    Username,
    Name,
    Url,
    Date,
    Time,
    Price,
    Number { min: Option<f64>, max: Option<f64> },
    CreditCard,
    Cvv,
    ExpiryDate,
    Custom { name: &'static str, check: CustomCheck },
}

/// One validation step for a form field.
///
/// Rules are pure values: checking one never mutates anything, so a rule
/// set built once at startup can be shared across threads freely.
///
/// ## Example
///
/// ```rust,ignore
/// use gatherly_validate::prelude::*;
///
/// let rules = RuleSet::new()
///     .field("email", vec![Rule::required("Email"), Rule::email()])
///     .field("password", vec![Rule::password()]);
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    /// Custom error message overriding the validator's default
    message: Option<String>,
}

impl Rule {
    fn of(kind: RuleKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// The field must be non-empty; `label` names the field in the message.
    pub fn required(label: impl Into<String>) -> Self {
        Self::of(RuleKind::Required {
            label: label.into(),
        })
    }

    /// Non-empty values must have at least `min` characters.
    pub fn min_length(min: usize, label: impl Into<String>) -> Self {
        Self::of(RuleKind::MinLength {
            min,
            label: label.into(),
        })
    }

    /// Non-empty values must have at most `max` characters.
    pub fn max_length(max: usize, label: impl Into<String>) -> Self {
        Self::of(RuleKind::MaxLength {
            max,
            label: label.into(),
        })
    }

    /// The value must be a well-formed email address.
    pub fn email() -> Self {
        Self::of(RuleKind::Email)
    }

    /// Non-empty values must look like a phone number.
    pub fn phone() -> Self {
        Self::of(RuleKind::Phone)
    }

    /// The value must meet the password strength policy.
    pub fn password() -> Self {
        Self::of(RuleKind::Password)
    }

    /// The value must equal the named sibling field's value.
    ///
    /// This is the confirm-password rule: unlike every other rule it reads
    /// two fields, its own and the sibling it is compared against.
    pub fn matches(other: impl Into<String>) -> Self {
        Self::of(RuleKind::Matches {
            other: other.into(),
        })
    }

    /// The value must be a well-formed username.
    pub fn username() -> Self {
        Self::of(RuleKind::Username)
    }

    /// The value must be a well-formed personal or display name.
    pub fn name() -> Self {
        Self::of(RuleKind::Name)
    }

    /// Non-empty values must look like a URL.
    pub fn url() -> Self {
        Self::of(RuleKind::Url)
    }

    /// The value must be a real `MM/DD/YYYY` calendar date.
    pub fn date() -> Self {
        Self::of(RuleKind::Date)
    }

    /// Non-empty values must be an `HH:MM AM/PM` clock time.
    pub fn time() -> Self {
        Self::of(RuleKind::Time)
    }

    /// Non-empty values must be a non-negative price.
    pub fn price() -> Self {
        Self::of(RuleKind::Price)
    }

    /// Non-empty values must parse as a number within the given bounds.
    pub fn number(min: Option<f64>, max: Option<f64>) -> Self {
        Self::of(RuleKind::Number { min, max })
    }

    /// The value must be a Luhn-valid payment card number.
    pub fn credit_card() -> Self {
        Self::of(RuleKind::CreditCard)
    }

    /// The value must be a 3- or 4-digit security code.
    pub fn cvv() -> Self {
        Self::of(RuleKind::Cvv)
    }

    /// The value must be an `MM/YY` expiry that has not passed.
    pub fn expiry_date() -> Self {
        Self::of(RuleKind::ExpiryDate)
    }

    /// A custom check over the field's value and the whole form.
    ///
    /// ```rust,ignore
    /// let not_taken = Rule::custom("reserved", |value, _form| {
    ///     (value == "admin").then(|| FieldError::format("That name is reserved"))
    /// });
    /// ```
    pub fn custom<F>(name: &'static str, check: F) -> Self
    where
        F: Fn(&str, &FormData) -> Option<FieldError> + Send + Sync + 'static,
    {
        Self::of(RuleKind::Custom {
            name,
            check: CustomCheck(Arc::new(check)),
        })
    }

    /// Replace the validator's default message with a custom one.
    ///
    /// The error kind is unchanged; only the text shown to the user.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Get the rule name for error reporting and debugging.
    pub fn rule_name(&self) -> &'static str {
        match &self.kind {
            RuleKind::Required { .. } => "required",
            RuleKind::MinLength { .. } => "min_length",
            RuleKind::MaxLength { .. } => "max_length",
            RuleKind::Email => "email",
            RuleKind::Phone => "phone",
            RuleKind::Password => "password",
            RuleKind::Matches { .. } => "matches",
            RuleKind::Username => "username",
            RuleKind::Name => "name",
            RuleKind::Url => "url",
            RuleKind::Date => "date",
            RuleKind::Time => "time",
            RuleKind::Price => "price",
            RuleKind::Number { .. } => "number",
            RuleKind::CreditCard => "credit_card",
            RuleKind::Cvv => "cvv",
            RuleKind::ExpiryDate => "expiry_date",
            RuleKind::Custom { name, .. } => name,
        }
    }

    /// Check a raw value against this rule.
    ///
    /// `form` is the whole form snapshot; only the [`Rule::matches`] and
    /// [`Rule::custom`] rules read it.
    pub fn check(&self, value: &str, form: &FormData) -> Option<FieldError> {
        let error = match &self.kind {
            RuleKind::Required { label } => required(value, label),
            RuleKind::MinLength { min, label } => min_length(value, *min, label),
            RuleKind::MaxLength { max, label } => max_length(value, *max, label),
            RuleKind::Email => email(value),
            RuleKind::Phone => phone(value),
            RuleKind::Password => password(value),
            RuleKind::Matches { other } => confirm_password(form.raw(other), value),
            RuleKind::Username => username(value),
            RuleKind::Name => name(value),
            RuleKind::Url => url(value),
            RuleKind::Date => date(value),
            RuleKind::Time => time(value),
            RuleKind::Price => price(value),
            RuleKind::Number { min, max } => number(value, *min, *max),
            RuleKind::CreditCard => credit_card(value),
            RuleKind::Cvv => cvv(value),
            RuleKind::ExpiryDate => expiry_date(value),
            RuleKind::Custom { check, .. } => (check.0)(value, form),
        }?;
        match &self.message {
            Some(message) => Some(FieldError::new(error.kind, message.clone())),
            None => Some(error),
        }
    }
}
