use std::sync::Arc;

use tracing::{debug, warn};

use super::ManagerError;
use crate::cache::CacheStore;
use crate::mapper::{EventMapper, Mapper};
use crate::models::Event;
use crate::service::{EventsService, GraphQLEventsService};

pub struct EventsManager {
    service: Arc<dyn EventsService>,
    cache: Arc<dyn CacheStore>,
}

impl EventsManager {
    pub fn new(service: Arc<dyn EventsService>, cache: Arc<dyn CacheStore>) -> Self {
        Self { service, cache }
    }

    /// Manager talking to `endpoint` through the production client
    pub fn with_endpoint(endpoint: &str, cache: Arc<dyn CacheStore>) -> Result<Self, ManagerError> {
        let service = GraphQLEventsService::with_endpoint(endpoint)?;
        Ok(Self::new(Arc::new(service), cache))
    }

    /// Fetch from the network and map, without touching the cache
    pub async fn fetch(&self) -> Result<Vec<Event>, ManagerError> {
        let dtos = self.service.get_events().await?;
        let received = dtos.len();
        let events = EventMapper::map_many(Some(dtos));

        if events.len() < received {
            debug!(received, kept = events.len(), "Dropped invalid event records");
        }
        Ok(events)
    }

    /// Return the cached snapshot if there is one, otherwise fetch and cache.
    ///
    /// The cache is best-effort here: a failed read counts as a miss and a
    /// failed write is logged, the fetched events are returned either way.
    pub async fn fetch_with_cache(&self) -> Result<Vec<Event>, ManagerError> {
        match self.cache.get_events().await {
            Ok(cached) if !cached.is_empty() => {
                debug!(cache = "events", count = cached.len(), "Serving events from cache");
                return Ok(cached);
            }
            Ok(_) => debug!(cache = "events", "Cache empty, fetching events"),
            Err(e) => warn!(cache = "events", error = %e, "Failed to read cache, fetching events"),
        }

        let events = self.fetch().await?;

        if let Err(e) = self.cache.save_events(&events).await {
            warn!(cache = "events", error = %e, "Failed to cache events");
        }
        Ok(events)
    }

    /// Fetch fresh events and overwrite the cache. A failed write is an error.
    pub async fn refresh(&self) -> Result<Vec<Event>, ManagerError> {
        let events = self.fetch().await?;
        self.cache.save_events(&events).await?;
        debug!(cache = "events", count = events.len(), "Refreshed events");
        Ok(events)
    }

    pub async fn get_cached(&self) -> Result<Vec<Event>, ManagerError> {
        Ok(self.cache.get_events().await?)
    }

    pub async fn clear_cache(&self) -> Result<(), ManagerError> {
        Ok(self.cache.clear_events().await?)
    }
}
