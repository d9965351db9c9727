use thiserror::Error;

use crate::domain::errors::DomainError;
use crate::domain::validation::{Violation, describe_violations};

/// The service-layer error taxonomy. This is the only layer that turns a
/// repository absence into `NotFound`; everything the storage layer reports
/// as a failure passes through as `Fault` untouched.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Not found: {id}")]
    NotFound { id: String },

    #[error("Validation failed: {}", describe_violations(.0))]
    Validation(Vec<Violation>),

    #[error("Fault: {0}")]
    Fault(String),
}

impl From<DomainError> for ApplicationError {
    fn from(error: DomainError) -> Self {
        // Storage failures are never reinterpreted as client errors.
        ApplicationError::Fault(error.to_string())
    }
}

impl From<Vec<Violation>> for ApplicationError {
    fn from(violations: Vec<Violation>) -> Self {
        ApplicationError::Validation(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::ApplicationError;
    use crate::domain::errors::DomainError;
    use crate::domain::validation::Violation;

    #[test]
    fn storage_failures_become_faults() {
        let error = ApplicationError::from(DomainError::Storage("disk on fire".to_string()));
        assert!(matches!(error, ApplicationError::Fault(_)));
    }

    #[test]
    fn cancellation_becomes_a_fault() {
        let error = ApplicationError::from(DomainError::Cancelled);
        assert!(matches!(error, ApplicationError::Fault(_)));
    }

    #[test]
    fn validation_display_names_field_and_bound() {
        let error =
            ApplicationError::Validation(vec![Violation::new("page_size", "above_maximum", "1000")]);
        assert_eq!(
            error.to_string(),
            "Validation failed: page_size above_maximum 1000"
        );
    }
}
