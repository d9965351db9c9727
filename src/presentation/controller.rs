use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::repositories::EntityId;
use crate::presentation::errors::BoundaryError;

/// The controller capability: the same operation shapes as the service
/// layer, returning boundary results. Implementations delegate to a
/// [`CrudService`](crate::application::services::CrudService) and use
/// [`map_boundary_error`](super::helpers::map_boundary_error) so every
/// feature translates error kinds the same way.
#[async_trait]
pub trait CrudController<TDto, TId, TCreate, TUpdate>: Send + Sync
where
    TId: EntityId,
{
    async fn get_all(&self, ct: &CancellationToken) -> Result<Vec<TDto>, BoundaryError>;

    async fn get_by_id(&self, id: &TId, ct: &CancellationToken) -> Result<TDto, BoundaryError>;

    async fn create(&self, input: TCreate, ct: &CancellationToken)
    -> Result<TDto, BoundaryError>;

    async fn update_by_id(
        &self,
        id: &TId,
        input: TUpdate,
        ct: &CancellationToken,
    ) -> Result<TDto, BoundaryError>;

    async fn delete_by_id(&self, id: &TId, ct: &CancellationToken)
    -> Result<TId, BoundaryError>;
}
