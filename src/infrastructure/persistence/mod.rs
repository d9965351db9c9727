pub mod context;
pub mod context_factory;
pub mod file_backend;
pub mod file_store;
pub mod naming;

pub use context::{ContextOptions, PersistenceContext, StorageBackend, UnitOfWork};
pub use context_factory::{ContextFactory, DEFAULT_MIGRATION_HISTORY_TABLE, DEFAULT_SCHEMA};
pub use file_backend::FileStorageBackend;
