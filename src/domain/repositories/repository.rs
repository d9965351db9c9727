use std::fmt::Display;
use std::hash::Hash;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::audit::Audited;
use crate::domain::errors::DomainError;

/// Bound for identifier types: non-nullable, comparable, printable.
pub trait EntityId: Clone + Eq + Hash + Display + Send + Sync {}

impl<T> EntityId for T where T: Clone + Eq + Hash + Display + Send + Sync {}

/// In-memory filter applied by [`Repository::find`].
pub type Predicate<E> = dyn Fn(&E) -> bool + Send + Sync;

/// The repository capability every concrete feature implements for its
/// entity type. Absence is a normal outcome here (`None` / `false`); raw
/// storage failures propagate untranslated.
#[async_trait]
pub trait Repository<E, Id>: Send + Sync
where
    E: Audited + Send + Sync,
    Id: EntityId,
{
    async fn get_all(&self, ct: &CancellationToken) -> Result<Vec<E>, DomainError>;

    async fn get_by_id(&self, id: &Id, ct: &CancellationToken) -> Result<Option<E>, DomainError>;

    async fn add(&self, entity: E, ct: &CancellationToken) -> Result<E, DomainError>;

    async fn update(&self, entity: E, ct: &CancellationToken) -> Result<E, DomainError>;

    async fn delete(&self, id: &Id, ct: &CancellationToken) -> Result<bool, DomainError>;

    async fn find(
        &self,
        predicate: &Predicate<E>,
        ct: &CancellationToken,
    ) -> Result<Vec<E>, DomainError>;
}
