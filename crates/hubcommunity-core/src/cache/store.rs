use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Community, Event};

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache I/O failed for {key}: {source}")]
    Io {
        key: String,
        source: std::io::Error,
    },

    #[error("Failed to encode or decode cached {key}: {source}")]
    Serialization {
        key: String,
        source: serde_json::Error,
    },

    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

/// The entity collections that get a cache snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Events,
    Communities,
}

impl EntityKind {
    /// Storage key of the snapshot blob
    pub fn key(self) -> &'static str {
        match self {
            EntityKind::Events => "cached_events",
            EntityKind::Communities => "cached_communities",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Events => "events",
            EntityKind::Communities => "communities",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whole-collection snapshot storage, one snapshot per entity kind.
///
/// `get_*` returns an empty list when nothing has been saved.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn save_events(&self, events: &[Event]) -> Result<(), CacheError>;
    async fn get_events(&self) -> Result<Vec<Event>, CacheError>;
    async fn clear_events(&self) -> Result<(), CacheError>;

    async fn save_communities(&self, communities: &[Community]) -> Result<(), CacheError>;
    async fn get_communities(&self) -> Result<Vec<Community>, CacheError>;
    async fn clear_communities(&self) -> Result<(), CacheError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_keys() {
        assert_eq!(EntityKind::Events.key(), "cached_events");
        assert_eq!(EntityKind::Communities.key(), "cached_communities");
        assert_eq!(EntityKind::Communities.to_string(), "communities");
    }
}
