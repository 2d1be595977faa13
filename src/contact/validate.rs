//! Submit-time validation of a contact form.

use std::sync::LazyLock;

use regex::Regex;

use super::form::{ContactForm, Field};
use super::notice::Notice;

// ASCII word characters only; `\w` in the regex crate is Unicode-aware.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*@([A-Za-z0-9_-]+\.)+[a-zA-Z]{2,7}$";

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(Field),
    #[error("invalid email address")]
    InvalidEmail,
}

impl ValidationError {
    /// The notice shown to the user for this rejection.
    #[must_use]
    pub fn notice(self) -> Notice {
        match self {
            Self::MissingField(_) => Notice::FillAllFields,
            Self::InvalidEmail => Notice::InvalidEmail,
        }
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_ok_and(|re| re.is_match(email))
}

/// Check presence of every field, then the email shape. Stops at the first
/// failure.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate(form: &ContactForm) -> Result<(), ValidationError> {
    if let Some(field) = Field::ALL.into_iter().find(|f| form.get(*f).is_empty()) {
        return Err(ValidationError::MissingField(field));
    }
    if !is_valid_email(form.email()) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
