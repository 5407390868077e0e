//! Client-side form validation shared by the login, registration and product
//! forms.
//!
//! Validators return every problem they find as [`ValidationError`] values;
//! forms collect them into [`FieldErrors`] for inline rendering, while the
//! session guard only needs the first one.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;

/// A locally detected input problem tied to one form field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Wire name of the offending field (e.g. `"email"`).
    pub field: &'static str,
    /// Human-readable message shown next to the field.
    pub message: &'static str,
}

impl ValidationError {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Per-field error messages for a form. At most one message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Drop the message for `field`, as happens when the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<ValidationError> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut errors = Self::default();
        for err in iter {
            // First message per field wins.
            errors.0.entry(err.field).or_insert_with(|| err.message.to_owned());
        }
        errors
    }
}

/// Shape check for `local@domain.tld`.
///
/// The local part must be non-empty, the domain must contain a `.` with at
/// least one character on each side, and neither part may contain `@` or
/// whitespace.
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let last = domain.len().saturating_sub(1);
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < last)
}

/// `0x` followed by exactly 40 hex digits.
#[must_use]
pub fn is_wallet_address(raw: &str) -> bool {
    raw.strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Validate an email field, reporting "required" before "malformed".
pub fn check_email(email: &str, out: &mut Vec<ValidationError>) {
    if email.is_empty() {
        out.push(ValidationError::new("email", "Email is required"));
    } else if !is_valid_email(email) {
        out.push(ValidationError::new("email", "Valid email is required"));
    }
}

/// Validate the password-login form. Empty result means the input may be sent.
#[must_use]
pub fn login_errors(email: &str, password: &str) -> Vec<ValidationError> {
    let mut out = Vec::new();
    check_email(email, &mut out);
    if password.is_empty() {
        out.push(ValidationError::new("password", "Password is required"));
    }
    out
}
