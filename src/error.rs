//! Crate-level error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used by fallible operations in this crate.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Errors raised while building or loading a problem instance.
///
/// The search itself never fails; everything here happens before it starts.
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("IO error, more details: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed instance document, more details: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid instance: {}", join_messages(.0))]
    InvalidInstance(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for SelectionError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInstance(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_invalid_instance_message_lists_every_issue() {
        let err = SelectionError::from(vec![
            ValidationError::new(ValidationErrorKind::NoWorkers, "no workers"),
            ValidationError::new(ValidationErrorKind::TooManyTasks, "too many tasks"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid instance: no workers; too many tasks"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<u64>("not a number").unwrap_err();
        let err: SelectionError = json_err.into();
        assert!(matches!(err, SelectionError::Json(_)));
    }
}
