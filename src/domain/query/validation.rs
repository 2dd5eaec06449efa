//! Pre-flight validation for the question form.

use crate::domain::foundation::ValidationError;
use crate::domain::lifecycle::FormState;

/// Form field holding the question text.
pub const QUERY_FIELD: &str = "query";

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a question";

/// Returns the trimmed question, or an error if nothing is left after trimming.
pub fn validate_query(form: &FormState) -> Result<String, ValidationError> {
    let query = form.get(QUERY_FIELD).trim();
    if query.is_empty() {
        return Err(ValidationError::empty_field(QUERY_FIELD, EMPTY_QUERY_MESSAGE));
    }
    Ok(query.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn form(query: &str) -> FormState {
        FormState::with_fields([QUERY_FIELD]).with_value(QUERY_FIELD, query)
    }

    #[test]
    fn trims_accepted_query() {
        assert_eq!(validate_query(&form("  what is rust?\n")).unwrap(), "what is rust?");
    }

    #[test]
    fn empty_query_reports_message() {
        let err = validate_query(&form("")).unwrap_err();
        assert_eq!(err.message(), EMPTY_QUERY_MESSAGE);
        assert_eq!(err.field(), QUERY_FIELD);
    }

    proptest! {
        #[test]
        fn whitespace_only_is_always_rejected(query in "[ \t\r\n]{0,16}") {
            prop_assert!(validate_query(&form(&query)).is_err());
        }

        #[test]
        fn any_visible_character_is_accepted(prefix in "[ \t]{0,4}", body in "[a-zA-Z0-9?]{1,32}") {
            let query = format!("{}{}", prefix, body);
            prop_assert_eq!(validate_query(&form(&query)).unwrap(), body);
        }
    }
}
