//! Form data, rule sets, and the composing `validate_form` entry point.

use crate::error::ErrorMap;
use crate::rules::Rule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw field values for one form, owned by the caller.
///
/// Values are the strings exactly as typed; the validators decide what they
/// mean. A field that was never touched is simply absent, and reads as the
/// empty string during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    /// Map of field name to raw value
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

impl FormData {
    /// Create an empty form.
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style insert, replacing any previous value.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Set a field's value, replacing any previous value.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Remove a field, returning its previous value if any.
    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.fields.remove(field)
    }

    /// Get a field's value, if it has been set.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Get a field's value for validation; an unset field reads as `""`.
    pub fn raw(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Check if no fields have been set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of set fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Ordered validation rules for one form, declared once and reused for
/// every validation pass.
///
/// The order of a field's rules is part of the contract: the first failing
/// rule wins, so callers put the check they want surfaced first at the
/// front (typically `required` ahead of format checks).
///
/// ## Example
///
/// ```rust,ignore
/// use gatherly_validate::prelude::*;
///
/// let signup = RuleSet::new()
///     .field("name", vec![Rule::name()])
///     .field("email", vec![Rule::required("Email"), Rule::email()])
///     .field("password", vec![Rule::password()])
///     .field(
///         "confirm_password",
///         vec![Rule::required("Password confirmation"), Rule::matches("password")],
///     );
///
/// let errors = validate_form(&FormData::new(), &signup);
/// assert!(errors.has_errors());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: Vec<(String, Vec<Rule>)>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declare the rules for a field, in evaluation order.
    ///
    /// Declaring the same field twice appends to its existing rules.
    pub fn field(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => existing.extend(rules),
            None => self.fields.push((name, rules)),
        }
        self
    }

    /// Get the rules declared for a field.
    pub fn rules_for(&self, name: &str) -> Option<&[Rule]> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rules)| rules.as_slice())
    }

    /// Iterate over the declared field names.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    /// Check if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.fields
            .iter()
            .map(|(n, rules)| (n.as_str(), rules.as_slice()))
    }
}

/// Validate a form against a rule set.
///
/// For each field declared in `rules`, its rules run in declaration order
/// against that field's raw value; the first failure is recorded and the
/// field's remaining rules are skipped. Fields present in `form` but not
/// declared in `rules` are ignored. The returned map is freshly built on
/// every call and its key set is always a subset of the rule set's fields.
pub fn validate_form(form: &FormData, rules: &RuleSet) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for (field, field_rules) in rules.iter() {
        let value = form.raw(field);
        for rule in field_rules {
            if let Some(error) = rule.check(value, form) {
                errors.add(field, error);
                break;
            }
        }
    }
    errors
}
