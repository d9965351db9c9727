use std::fmt::Display;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::application::errors::ApplicationError;
use crate::domain::repositories::EntityId;

/// The service capability every concrete feature implements on top of its
/// repository. Operations return transfer objects, never entities, and an
/// identifier miss is always reported as [`ApplicationError::NotFound`] —
/// never as an empty or defaulted transfer object.
#[async_trait]
pub trait CrudService<TDto, TId, TCreate, TUpdate>: Send + Sync
where
    TId: EntityId,
{
    async fn get_all(&self, ct: &CancellationToken) -> Result<Vec<TDto>, ApplicationError>;

    async fn get_by_id(&self, id: &TId, ct: &CancellationToken)
    -> Result<TDto, ApplicationError>;

    async fn create(
        &self,
        input: TCreate,
        ct: &CancellationToken,
    ) -> Result<TDto, ApplicationError>;

    async fn update_by_id(
        &self,
        id: &TId,
        input: TUpdate,
        ct: &CancellationToken,
    ) -> Result<TDto, ApplicationError>;

    async fn delete_by_id(
        &self,
        id: &TId,
        ct: &CancellationToken,
    ) -> Result<TId, ApplicationError>;
}

/// Turn a repository absence into the service-layer `NotFound` kind,
/// carrying the identifier that missed. Using this helper keeps the
/// translation identical across every feature.
pub fn ensure_found<T, Id: Display>(found: Option<T>, id: &Id) -> Result<T, ApplicationError> {
    found.ok_or_else(|| ApplicationError::NotFound { id: id.to_string() })
}
