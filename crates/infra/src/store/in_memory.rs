use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

use greenscape_core::Entity;

use super::{DocumentStore, StoreError};

type Collection = Vec<(String, JsonValue)>;

/// In-memory document store for tests/dev.
///
/// One instance serves every entity type; records are kept as JSON so they
/// round-trip through serde exactly as they would through Postgres.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<HashMap<&'static str, Collection>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E>(_: E) -> StoreError {
    StoreError::Unavailable("in-memory store lock poisoned".to_string())
}

#[async_trait]
impl<T> DocumentStore<T> for InMemoryDocumentStore
where
    T: Entity + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn list(&self) -> Result<Vec<T>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        let Some(docs) = map.get(T::COLLECTION) else {
            return Ok(Vec::new());
        };
        docs.iter()
            .map(|(_, body)| serde_json::from_value(body.clone()).map_err(StoreError::from))
            .collect()
    }

    async fn get(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        let key = id.to_string();
        let map = self.inner.read().map_err(poisoned)?;
        map.get(T::COLLECTION)
            .and_then(|docs| docs.iter().find(|(k, _)| *k == key))
            .map(|(_, body)| serde_json::from_value(body.clone()))
            .transpose()
            .map_err(StoreError::from)
    }

    async fn put(&self, record: &T) -> Result<(), StoreError> {
        let key = record.id().to_string();
        let body = serde_json::to_value(record)?;

        let mut map = self.inner.write().map_err(poisoned)?;
        let docs = map.entry(T::COLLECTION).or_default();
        match docs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = body,
            None => docs.push((key, body)),
        }
        Ok(())
    }

    async fn delete(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        let key = id.to_string();
        let removed = {
            let mut map = self.inner.write().map_err(poisoned)?;
            map.get_mut(T::COLLECTION).and_then(|docs| {
                let pos = docs.iter().position(|(k, _)| *k == key)?;
                Some(docs.remove(pos).1)
            })
        };
        removed
            .map(serde_json::from_value)
            .transpose()
            .map_err(StoreError::from)
    }
}
