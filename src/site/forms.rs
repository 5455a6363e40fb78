use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Why a single form field was rejected. The `Display` text is what the
/// form shows under the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{label} is required")]
    Required { label: &'static str },
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// A form's input fields. `name` doubles as the html `id`/`name` attribute.
pub trait FormField: Copy + Ord {
    fn name(self) -> &'static str;
    fn label(self) -> &'static str;
    fn is_required(self) -> bool;
}

/// Per-field error messages for one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors<F: Ord>(BTreeMap<F, FieldError>);

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<F: FormField> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, error: FieldError) {
        self.0.insert(field, error);
    }

    /// Records the error from a single check, if any.
    pub fn check(&mut self, field: F, result: Result<(), FieldError>) {
        if let Err(error) = result {
            self.insert(field, error);
        }
    }

    pub fn get(&self, field: F) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn message(&self, field: F) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn contains(&self, field: F) -> bool {
        self.0.contains_key(&field)
    }

    /// Drops the error for `field` only. Returns whether there was one.
    pub fn clear(&mut self, field: F) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.0.keys().copied()
    }
}

pub fn require(value: &str, label: &'static str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required { label })
    } else {
        Ok(())
    }
}

/// Select inputs only need a chosen option; the placeholder option is `""`.
pub fn require_selection(value: &str, label: &'static str) -> Result<(), FieldError> {
    if value.is_empty() {
        Err(FieldError::Required { label })
    } else {
        Ok(())
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

pub fn check_email(value: &str) -> Result<(), FieldError> {
    require(value, "Email")?;
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

/// Developer-facing trace of a payload that would have been sent to a server.
pub fn trace_submission<T: Serialize>(form: &'static str, payload: &T) {
    match serde_json::to_string(payload) {
        Ok(json) => tracing::info!(form, payload = %json, "form submitted"),
        Err(e) => tracing::warn!(form, error = %e, "could not serialize submitted form"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Field {
        Name,
        Email,
    }

    impl FormField for Field {
        fn name(self) -> &'static str {
            match self {
                Field::Name => "name",
                Field::Email => "email",
            }
        }

        fn label(self) -> &'static str {
            match self {
                Field::Name => "Name",
                Field::Email => "Email",
            }
        }

        fn is_required(self) -> bool {
            true
        }
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.example.co.uk"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("plainstring"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("us er@example.com"));
    }

    #[test]
    fn blank_email_reports_required_before_shape() {
        assert_eq!(check_email("   "), Err(FieldError::Required { label: "Email" }));
        assert_eq!(check_email("nope"), Err(FieldError::InvalidEmail));
        assert_eq!(check_email("a@b.io"), Ok(()));
    }

    #[test]
    fn required_trims_but_selection_does_not() {
        assert!(require(" \t", "Name").is_err());
        assert!(require(" x ", "Name").is_ok());
        assert!(require_selection("", "Budget range").is_err());
        assert!(require_selection(" ", "Budget range").is_ok());
    }

    #[test]
    fn messages_read_naturally() {
        let required = FieldError::Required { label: "ZIP code" };
        assert_eq!(required.to_string(), "ZIP code is required");
        assert_eq!(FieldError::InvalidEmail.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn clearing_one_field_keeps_the_others() {
        let mut errors = FieldErrors::new();
        errors.check(Field::Name, require("", "Name"));
        errors.check(Field::Email, check_email("bad"));
        assert_eq!(errors.len(), 2);

        assert!(errors.clear(Field::Name));
        assert!(!errors.contains(Field::Name));
        assert_eq!(errors.message(Field::Email).as_deref(), Some("Please enter a valid email address"));
        assert!(!errors.clear(Field::Name));
    }
}
