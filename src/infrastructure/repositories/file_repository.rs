use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::domain::audit::Audited;
use crate::domain::errors::DomainError;
use crate::domain::repositories::{Predicate, Repository};
use crate::infrastructure::persistence::context::UnitOfWork;
use crate::infrastructure::persistence::context_factory::ContextFactory;

/// Generic file-backed implementation of the repository capability. Every
/// operation gets a fresh persistence context from the factory; writes go
/// through a unit of work so the audit-stamping pass runs on commit.
pub struct FileRepository<E> {
    context_factory: ContextFactory<E>,
}

impl<E> FileRepository<E>
where
    E: Audited + Send + Sync,
{
    pub fn new(context_factory: ContextFactory<E>) -> Self {
        Self { context_factory }
    }
}

#[async_trait]
impl<E> Repository<E, Uuid> for FileRepository<E>
where
    E: Audited + Send + Sync,
{
    async fn get_all(&self, ct: &CancellationToken) -> Result<Vec<E>, DomainError> {
        let context = self.context_factory.create_context();
        context.fetch_all(ct).await
    }

    async fn get_by_id(&self, id: &Uuid, ct: &CancellationToken) -> Result<Option<E>, DomainError> {
        let context = self.context_factory.create_context();
        context.fetch(id, ct).await
    }

    async fn add(&self, entity: E, ct: &CancellationToken) -> Result<E, DomainError> {
        let context = self.context_factory.create_context();

        let mut work = UnitOfWork::new();
        work.insert(entity);

        let work = context.commit(work, ct).await?;
        let (mut inserts, _) = work.into_parts();
        inserts
            .pop()
            .ok_or_else(|| DomainError::Storage("commit returned no inserted record".to_string()))
    }

    async fn update(&self, entity: E, ct: &CancellationToken) -> Result<E, DomainError> {
        let context = self.context_factory.create_context();

        let mut work = UnitOfWork::new();
        work.update(entity);

        let work = context.commit(work, ct).await?;
        let (_, mut updates) = work.into_parts();
        updates
            .pop()
            .ok_or_else(|| DomainError::Storage("commit returned no updated record".to_string()))
    }

    async fn delete(&self, id: &Uuid, ct: &CancellationToken) -> Result<bool, DomainError> {
        let context = self.context_factory.create_context();
        context.remove(id, ct).await
    }

    async fn find(
        &self,
        predicate: &Predicate<E>,
        ct: &CancellationToken,
    ) -> Result<Vec<E>, DomainError> {
        let context = self.context_factory.create_context();
        let records = context.fetch_all(ct).await?;
        Ok(records.into_iter().filter(|e| predicate(e)).collect())
    }
}
