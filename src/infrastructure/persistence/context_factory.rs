use std::sync::Arc;

use crate::domain::audit::Audited;
use crate::domain::errors::DomainError;
use crate::infrastructure::config::environment;
use crate::infrastructure::persistence::context::{
    ContextOptions, PersistenceContext, StorageBackend,
};

/// Fixed for every context a factory produces; part of the on-disk
/// contract, never configurable per call.
pub const DEFAULT_SCHEMA: &str = "crudkit";
pub const DEFAULT_MIGRATION_HISTORY_TABLE: &str = "__migrations_history";

/// Produces a fresh [`PersistenceContext`] per operation. Immutable after
/// construction, so a single factory is shared across all concurrent
/// operations; the contexts themselves never are.
pub struct ContextFactory<E> {
    connection_string_provider: Arc<dyn Fn() -> String + Send + Sync>,
    backend: Arc<dyn StorageBackend<E>>,
}

impl<E> ContextFactory<E>
where
    E: Audited + Send + Sync,
{
    /// Fails fast when the connection string is absent or empty.
    pub fn new(
        connection_string: impl Into<String>,
        backend: Arc<dyn StorageBackend<E>>,
    ) -> Result<Self, DomainError> {
        let connection_string = connection_string.into();
        if connection_string.trim().is_empty() {
            return Err(DomainError::InvalidData(
                "Connection string must not be empty".to_string(),
            ));
        }

        Ok(Self {
            connection_string_provider: Arc::new(move || connection_string.clone()),
            backend,
        })
    }

    pub fn connection_string(&self) -> String {
        (self.connection_string_provider)()
    }

    /// A fresh context per call — no caching, no pooling of context
    /// instances. Parameter logging follows the environment marker.
    pub fn create_context(&self) -> PersistenceContext<E> {
        PersistenceContext::new(
            self.backend.clone(),
            ContextOptions {
                connection_string: self.connection_string(),
                schema: DEFAULT_SCHEMA,
                migration_history_table: DEFAULT_MIGRATION_HISTORY_TABLE,
                log_parameters: environment::is_development(),
            },
        )
    }
}

impl<E> Clone for ContextFactory<E> {
    fn clone(&self) -> Self {
        Self {
            connection_string_provider: self.connection_string_provider.clone(),
            backend: self.backend.clone(),
        }
    }
}
