//! Service client contract shared by every entity screen

use crate::model::{EntityId, EntityPayload, EntityRecord};
use thiserror::Error;

/// A remote call that did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("could not reach {url}: {message}")]
    Transport { url: String, message: String },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("record {0} does not exist")]
    Missing(EntityId),
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// CRUD gateway to the remote store for one entity type
///
/// Calls block; screens run them through a `RequestRunner` so the UI
/// thread never waits on the network.
pub trait EntityService: Send + Sync {
    /// Fetch one record; `Ok(None)` when the service has no such id
    fn fetch_by_id(&self, id: EntityId) -> Result<Option<EntityRecord>, ServiceError>;

    fn create(&self, payload: &EntityPayload) -> Result<EntityRecord, ServiceError>;

    fn update(&self, id: EntityId, payload: &EntityPayload) -> Result<EntityRecord, ServiceError>;

    fn delete(&self, id: EntityId) -> Result<(), ServiceError>;
}
