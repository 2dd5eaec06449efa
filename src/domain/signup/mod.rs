//! Signup module - registration form validation.

mod validation;

pub use validation::{
    is_valid_email, validate_signup, SignupFields, EMAIL_FIELD, INVALID_EMAIL_MESSAGE,
    MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH, NAME_FIELD, NAME_TOO_SHORT_MESSAGE, PASSWORD_FIELD,
    PASSWORD_TOO_SHORT_MESSAGE,
};
