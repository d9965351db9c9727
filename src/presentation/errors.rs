use serde::Serialize;
use thiserror::Error;

use crate::application::errors::ApplicationError;
use crate::domain::validation::{Violation, describe_violations};

/// The boundary result failure kinds handed to external callers. This is
/// the only layer that maps service error kinds to boundary outcomes.
#[derive(Error, Debug, Serialize)]
pub enum BoundaryError {
    #[error("Bad request: {}", describe_violations(.violations))]
    BadRequest { violations: Vec<Violation> },

    #[error("Not found: {id}")]
    NotFound { id: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<ApplicationError> for BoundaryError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Validation(violations) => BoundaryError::BadRequest { violations },
            ApplicationError::NotFound { id } => BoundaryError::NotFound { id },
            // Internal detail is logged where the failure is mapped; the
            // payload itself stays generic.
            ApplicationError::Fault(_) => {
                BoundaryError::Internal("unexpected internal error".to_string())
            }
        }
    }
}
