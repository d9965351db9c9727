use std::fmt::Display;

use tokio_util::sync::CancellationToken;

use crate::infrastructure::logging::logger;
use crate::presentation::errors::BoundaryError;

pub fn log_operation(operation: impl AsRef<str>) {
    logger::debug(&format!("Operation: {}", operation.as_ref()));
}

/// Log the full error at the boundary, then convert it to its boundary
/// kind. The logged detail never reaches the returned payload.
pub fn map_boundary_error<E>(context: impl AsRef<str>) -> impl FnOnce(E) -> BoundaryError
where
    E: Display + Into<BoundaryError>,
{
    let context = context.as_ref().to_string();

    move |error| {
        logger::error(&format!("{}: {}", context, error));
        error.into()
    }
}

/// Abort before doing any work if the caller has already cancelled.
pub fn guard_cancelled(ct: &CancellationToken) -> Result<(), BoundaryError> {
    if ct.is_cancelled() {
        return Err(BoundaryError::Internal("operation cancelled".to_string()));
    }
    Ok(())
}
