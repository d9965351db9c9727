use thiserror::Error;

/// Errors surfaced by the storage layer. Absence of a record is not an
/// error at this layer; repositories report it as `Ok(None)` / `Ok(false)`.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Operation cancelled")]
    Cancelled,
}
