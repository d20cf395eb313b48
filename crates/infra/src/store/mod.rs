//! Document storage: one collection of whole JSON records per entity type.
//!
//! Records are addressed by their entity id and listed in insertion order.
//! Writes replace the whole document; there is no partial update at this
//! level and no cross-record transaction.

pub mod in_memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use greenscape_core::Entity;

pub use in_memory::InMemoryDocumentStore;
pub use postgres::PostgresDocumentStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document (de)serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence boundary for a single entity type.
#[async_trait]
pub trait DocumentStore<T>: Send + Sync
where
    T: Entity + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<T>, StoreError>;

    async fn get(&self, id: &T::Id) -> Result<Option<T>, StoreError>;

    /// Insert or replace the record with the same id.
    async fn put(&self, record: &T) -> Result<(), StoreError>;

    /// Remove a record, returning what was stored.
    async fn delete(&self, id: &T::Id) -> Result<Option<T>, StoreError>;
}

#[async_trait]
impl<T, S> DocumentStore<T> for Arc<S>
where
    T: Entity + Serialize + DeserializeOwned + Send + Sync + 'static,
    S: DocumentStore<T> + ?Sized,
{
    async fn list(&self) -> Result<Vec<T>, StoreError> {
        (**self).list().await
    }

    async fn get(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        (**self).get(id).await
    }

    async fn put(&self, record: &T) -> Result<(), StoreError> {
        (**self).put(record).await
    }

    async fn delete(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        (**self).delete(id).await
    }
}
