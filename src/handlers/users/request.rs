//! User request DTOs

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::{constants::MAX_EMAIL_LENGTH, utils::validation::EMAIL_REGEX};

/// Create user request
///
/// Fields are kept as raw JSON so that a missing or wrong-typed field
/// produces a field-specific message instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<Value>,

    pub email: Option<Value>,

    pub domain: Option<Value>,

    /// Defaults to `student`
    pub role: Option<Value>,
}

/// Email as submitted, once it is known to be a string
#[derive(Debug, Validate)]
pub struct EmailInput {
    #[validate(length(max = MAX_EMAIL_LENGTH, message = "Email must be less than 255 characters"))]
    #[validate(regex(path = *EMAIL_REGEX, message = "Invalid email format"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_input_validation() {
        let ok = EmailInput {
            email: "ann@school.edu".to_string(),
        };
        assert!(ok.validate().is_ok());

        let malformed = EmailInput {
            email: "ann@school".to_string(),
        };
        assert!(malformed.validate().is_err());

        let long = EmailInput {
            email: format!("{}@example.com", "a".repeat(250)),
        };
        assert!(long.validate().is_err());
    }
}
