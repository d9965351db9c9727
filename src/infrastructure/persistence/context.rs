use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::domain::audit::Audited;
use crate::domain::errors::DomainError;
use crate::infrastructure::logging::logger;

/// One commit-scoped batch of record changes. The caller states explicitly
/// which records are being inserted and which are being updated; the
/// stamping pass never guesses.
#[derive(Debug)]
pub struct UnitOfWork<E> {
    inserts: Vec<E>,
    updates: Vec<E>,
}

impl<E: Audited> UnitOfWork<E> {
    pub fn new() -> Self {
        Self {
            inserts: Vec::new(),
            updates: Vec::new(),
        }
    }

    pub fn insert(&mut self, entity: E) {
        self.inserts.push(entity);
    }

    pub fn update(&mut self, entity: E) {
        self.updates.push(entity);
    }

    pub fn is_empty(&self) -> bool {
        self.inserts.is_empty() && self.updates.is_empty()
    }

    pub fn inserts(&self) -> &[E] {
        &self.inserts
    }

    pub fn updates(&self) -> &[E] {
        &self.updates
    }

    pub fn into_parts(self) -> (Vec<E>, Vec<E>) {
        (self.inserts, self.updates)
    }

    /// The audit-stamping pass. Runs exactly once per commit, with one
    /// captured `now` shared by every record in the batch:
    /// - inserted records get `created_at = now` unless it was pre-seeded;
    /// - updated records get `updated_at = now` unconditionally.
    fn stamp(&mut self, now: DateTime<Utc>) {
        for entity in &mut self.inserts {
            let stamp = entity.audit_mut();
            if stamp.created_at.is_none() {
                stamp.created_at = Some(now);
            }
        }
        for entity in &mut self.updates {
            entity.audit_mut().updated_at = Some(now);
        }
    }
}

impl<E: Audited> Default for UnitOfWork<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// The storage driver a persistence context delegates to. Connection
/// pooling, if any, lives behind this trait.
#[async_trait]
pub trait StorageBackend<E>: Send + Sync {
    async fn load_all(&self, ct: &CancellationToken) -> Result<Vec<E>, DomainError>;

    async fn load(&self, id: &Uuid, ct: &CancellationToken) -> Result<Option<E>, DomainError>;

    /// Write one commit batch. The whole batch is a single commit; a
    /// failure means none of it counts as persisted.
    async fn persist(
        &self,
        inserts: &[E],
        updates: &[E],
        ct: &CancellationToken,
    ) -> Result<(), DomainError>;

    async fn remove(&self, id: &Uuid, ct: &CancellationToken) -> Result<bool, DomainError>;
}

/// Options fixed by the factory for every context it produces.
#[derive(Debug, Clone)]
pub struct ContextOptions {
    pub connection_string: String,
    pub schema: &'static str,
    pub migration_history_table: &'static str,
    /// Parameter-value logging; enabled only in development environments.
    pub log_parameters: bool,
}

/// A commit-scoped handle on the storage backend. Each instance belongs to
/// exactly one operation; `commit` consumes it, so a context can never be
/// reused across commits.
pub struct PersistenceContext<E> {
    backend: Arc<dyn StorageBackend<E>>,
    options: ContextOptions,
}

impl<E> PersistenceContext<E>
where
    E: Audited + Send + Sync,
{
    pub(crate) fn new(backend: Arc<dyn StorageBackend<E>>, options: ContextOptions) -> Self {
        Self { backend, options }
    }

    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    pub async fn fetch_all(&self, ct: &CancellationToken) -> Result<Vec<E>, DomainError> {
        if ct.is_cancelled() {
            return Err(DomainError::Cancelled);
        }
        self.backend.load_all(ct).await
    }

    pub async fn fetch(
        &self,
        id: &Uuid,
        ct: &CancellationToken,
    ) -> Result<Option<E>, DomainError> {
        if ct.is_cancelled() {
            return Err(DomainError::Cancelled);
        }
        self.backend.load(id, ct).await
    }

    pub async fn remove(&self, id: &Uuid, ct: &CancellationToken) -> Result<bool, DomainError> {
        if ct.is_cancelled() {
            return Err(DomainError::Cancelled);
        }
        self.backend.remove(id, ct).await
    }

    /// Stamp the batch and delegate the write to the backend. On failure
    /// the stamped in-memory records are discarded with the work; nothing
    /// is considered persisted.
    pub async fn commit(
        self,
        mut work: UnitOfWork<E>,
        ct: &CancellationToken,
    ) -> Result<UnitOfWork<E>, DomainError> {
        if ct.is_cancelled() {
            return Err(DomainError::Cancelled);
        }

        work.stamp(Utc::now());
        self.log_commit(&work);
        self.backend
            .persist(work.inserts(), work.updates(), ct)
            .await?;

        Ok(work)
    }

    /// Synchronous commit against a caller-supplied sink. Runs the same
    /// stamping pass as [`commit`](Self::commit).
    pub fn commit_blocking<F>(
        self,
        mut work: UnitOfWork<E>,
        sink: F,
    ) -> Result<UnitOfWork<E>, DomainError>
    where
        F: FnOnce(&[E], &[E]) -> Result<(), DomainError>,
    {
        work.stamp(Utc::now());
        self.log_commit(&work);
        sink(work.inserts(), work.updates())?;

        Ok(work)
    }

    fn log_commit(&self, work: &UnitOfWork<E>) {
        if self.options.log_parameters {
            logger::debug(&format!(
                "Committing {} inserts, {} updates via '{}'",
                work.inserts().len(),
                work.updates().len(),
                self.options.connection_string,
            ));
        } else {
            logger::debug(&format!(
                "Committing {} inserts, {} updates",
                work.inserts().len(),
                work.updates().len(),
            ));
        }
    }
}
