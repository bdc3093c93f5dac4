use regex::Regex;

use crate::shared::errors::AppError;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

pub struct Validator;

impl Validator {
    pub fn validate_item_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Name cannot be empty".to_string(),
            ));
        }
        if name.len() > 255 {
            return Err(AppError::ValidationError(
                "Name too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_email(email: &str) -> Result<(), AppError> {
        let re = Regex::new(EMAIL_PATTERN)
            .map_err(|e| AppError::InternalError(format!("Invalid email pattern: {}", e)))?;
        if !re.is_match(email) {
            return Err(AppError::ValidationError(
                "Invalid email format".to_string(),
            ));
        }
        Ok(())
    }

    /// Checks every item field and reports all failures at once as
    /// `"field: message"` entries.
    pub fn validate_item(name: &str, email: &str) -> Result<(), AppError> {
        let mut errors = Vec::new();

        for (field, result) in [
            ("name", Self::validate_item_name(name)),
            ("email", Self::validate_email(email)),
        ] {
            match result {
                Ok(()) => {}
                Err(AppError::ValidationError(message)) => {
                    errors.push(format!("{}: {}", field, message))
                }
                Err(other) => return Err(other),
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidFields(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_addresses() {
        assert!(Validator::validate_email("test@test.com").is_ok());
        assert!(Validator::validate_email("first.last+tag@mail.example.org").is_ok());
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for email in ["invalid", "no-at.example.com", "a@b", "@example.com", ""] {
            assert!(
                Validator::validate_email(email).is_err(),
                "{} should be rejected",
                email
            );
        }
    }

    #[test]
    fn test_validate_item_collects_every_field() {
        let err = Validator::validate_item("  ", "invalid").unwrap_err();
        match err {
            AppError::InvalidFields(errors) => {
                assert_eq!(
                    errors,
                    vec![
                        "name: Name cannot be empty".to_string(),
                        "email: Invalid email format".to_string(),
                    ]
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_item_passes_valid_input() {
        assert!(Validator::validate_item("Test", "valid@test.com").is_ok());
    }
}
