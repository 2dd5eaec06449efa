//! Pre-flight validation for the signup form.
//!
//! Rules run in a fixed order and the first failure wins: name, email,
//! password. Messages are never accumulated.

use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::Secret;

use crate::domain::foundation::ValidationError;
use crate::domain::lifecycle::FormState;

pub const NAME_FIELD: &str = "name";
pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const NAME_TOO_SHORT_MESSAGE: &str = "Name must be at least 2 characters";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Password must be at least 6 characters";

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Signup values that passed validation.
#[derive(Debug, Clone)]
pub struct SignupFields {
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
}

/// Returns true if `email` has a `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Validates the signup form, returning trimmed name and email.
pub fn validate_signup(form: &FormState) -> Result<SignupFields, ValidationError> {
    let name = form.get(NAME_FIELD).trim();
    let name_len = name.chars().count();
    if name_len < MIN_NAME_LENGTH {
        return Err(ValidationError::too_short(
            NAME_FIELD,
            MIN_NAME_LENGTH,
            name_len,
            NAME_TOO_SHORT_MESSAGE,
        ));
    }

    let email = form.get(EMAIL_FIELD).trim();
    if !is_valid_email(email) {
        return Err(ValidationError::invalid_format(EMAIL_FIELD, INVALID_EMAIL_MESSAGE));
    }

    let password = form.get(PASSWORD_FIELD);
    let password_len = password.chars().count();
    if password_len < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::too_short(
            PASSWORD_FIELD,
            MIN_PASSWORD_LENGTH,
            password_len,
            PASSWORD_TOO_SHORT_MESSAGE,
        ));
    }

    Ok(SignupFields {
        name: name.to_string(),
        email: email.to_string(),
        password: Secret::new(password.to_string()),
    })
}
