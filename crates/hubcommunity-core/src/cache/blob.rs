use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::{CacheError, CacheStore, EntityKind};
use crate::models::{Community, Event};

/// Opaque byte-blob storage keyed by string.
pub trait BlobStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;
    fn set(&self, key: &str, bytes: &[u8]) -> Result<(), CacheError>;
    /// Deleting a key that does not exist is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;
}

/// `CacheStore` that keeps each collection as one JSON array blob.
pub struct BlobCache<S> {
    store: S,
}

impl<S: BlobStore> BlobCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn load<T: DeserializeOwned>(&self, kind: EntityKind) -> Result<Vec<T>, CacheError> {
        let Some(bytes) = self.store.get(kind.key())? else {
            return Ok(Vec::new());
        };

        let items: Vec<T> = serde_json::from_slice(&bytes).map_err(|source| {
            CacheError::Serialization {
                key: kind.key().to_string(),
                source,
            }
        })?;
        debug!(cache = %kind, count = items.len(), "Loaded cache snapshot");
        Ok(items)
    }

    fn save<T: Serialize>(&self, kind: EntityKind, items: &[T]) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(items).map_err(|source| CacheError::Serialization {
            key: kind.key().to_string(),
            source,
        })?;
        self.store.set(kind.key(), &bytes)?;
        debug!(cache = %kind, count = items.len(), "Saved cache snapshot");
        Ok(())
    }

    fn clear(&self, kind: EntityKind) -> Result<(), CacheError> {
        self.store.delete(kind.key())?;
        debug!(cache = %kind, "Cleared cache snapshot");
        Ok(())
    }
}

#[async_trait]
impl<S: BlobStore> CacheStore for BlobCache<S> {
    async fn save_events(&self, events: &[Event]) -> Result<(), CacheError> {
        self.save(EntityKind::Events, events)
    }

    async fn get_events(&self) -> Result<Vec<Event>, CacheError> {
        self.load(EntityKind::Events)
    }

    async fn clear_events(&self) -> Result<(), CacheError> {
        self.clear(EntityKind::Events)
    }

    async fn save_communities(&self, communities: &[Community]) -> Result<(), CacheError> {
        self.save(EntityKind::Communities, communities)
    }

    async fn get_communities(&self) -> Result<Vec<Community>, CacheError> {
        self.load(EntityKind::Communities)
    }

    async fn clear_communities(&self) -> Result<(), CacheError> {
        self.clear(EntityKind::Communities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryBlobStore;
    use crate::models::Location;

    fn event(id: &str) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            tags: vec![],
            talks: vec![],
            location: Location { id: "l1".to_string(), title: "Online".to_string() },
            images: vec![],
            communities: vec![Community::new("c1", "Rust BR", 3)],
        }
    }

    #[tokio::test]
    async fn test_empty_store_reads_empty() {
        let cache = BlobCache::new(MemoryBlobStore::new());
        assert!(cache.get_events().await.expect("read").is_empty());
        assert!(cache.get_communities().await.expect("read").is_empty());
    }

    #[tokio::test]
    async fn test_save_overwrites_whole_snapshot() {
        let cache = BlobCache::new(MemoryBlobStore::new());
        cache.save_events(&[event("1"), event("2")]).await.expect("save");
        cache.save_events(&[event("3")]).await.expect("save");

        let events = cache.get_events().await.expect("read");
        assert_eq!(events, vec![event("3")]);
    }

    #[tokio::test]
    async fn test_kinds_are_independent() {
        let cache = BlobCache::new(MemoryBlobStore::new());
        cache.save_events(&[event("1")]).await.expect("save");
        cache.save_communities(&[Community::new("c9", "Kotlin", 7)]).await.expect("save");

        cache.clear_events().await.expect("clear");
        assert!(cache.get_events().await.expect("read").is_empty());
        assert_eq!(cache.get_communities().await.expect("read").len(), 1);
        assert!(!cache.store().contains("cached_events"));
        assert!(cache.store().contains("cached_communities"));
    }

    #[tokio::test]
    async fn test_blob_is_json_array() {
        let cache = BlobCache::new(MemoryBlobStore::new());
        cache.save_communities(&[Community::new("c1", "Rust BR", 3)]).await.expect("save");

        let bytes = cache.store().get("cached_communities").expect("get").expect("present");
        let value: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(value[0]["members_quantity"], 3);
    }

    #[tokio::test]
    async fn test_corrupt_blob_is_serialization_error() {
        let store = MemoryBlobStore::new();
        store.set("cached_events", b"not json").expect("set");
        let cache = BlobCache::new(store);

        let err = cache.get_events().await.unwrap_err();
        assert!(matches!(err, CacheError::Serialization { .. }));
    }
}
