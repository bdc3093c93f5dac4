use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Field-level validation failures, one `"field: message"` entry per field
    #[error("Validation failed: {}", .0.join(", "))]
    InvalidFields(Vec<String>),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The batch join itself failed; never raised for a single item
    #[error("Batch aggregation failed: {0}")]
    AggregationFault(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            AppError::InternalError(format!("Blocking task panicked: {}", err))
        } else {
            AppError::InternalError(format!("Blocking task was cancelled: {}", err))
        }
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fields_display_joins_entries() {
        let err = AppError::InvalidFields(vec![
            "name: Name cannot be empty".to_string(),
            "email: Invalid email format".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: name: Name cannot be empty, email: Invalid email format"
        );
    }

    #[test]
    fn test_serializes_with_type_tag() {
        let value = serde_json::to_value(AppError::NotFound("Item 7".to_string())).unwrap();
        assert_eq!(value["type"], "NotFound");
        assert_eq!(value["message"], "Item 7");
    }
}
