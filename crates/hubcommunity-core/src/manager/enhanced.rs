use std::sync::Arc;

use super::{EventsManager, ManagerError};
use crate::cache::CacheStore;
use crate::logic::{self, EventFilterOptions, EventSortOption, EventsStatistics};
use crate::models::{Community, Event, Tag};
use crate::service::EventsService;

/// Events manager with filtering, sorting and analytics on top.
///
/// Every business operation reads through `fetch_with_cache`, so they work
/// offline once a snapshot exists.
pub struct EnhancedEventsManager {
    inner: EventsManager,
}

impl EnhancedEventsManager {
    pub fn new(service: Arc<dyn EventsService>, cache: Arc<dyn CacheStore>) -> Self {
        Self::from_manager(EventsManager::new(service, cache))
    }

    pub fn from_manager(inner: EventsManager) -> Self {
        Self { inner }
    }

    pub fn with_endpoint(endpoint: &str, cache: Arc<dyn CacheStore>) -> Result<Self, ManagerError> {
        Ok(Self::from_manager(EventsManager::with_endpoint(endpoint, cache)?))
    }

    // ===== Basic Operations =====

    pub async fn fetch(&self) -> Result<Vec<Event>, ManagerError> {
        self.inner.fetch().await
    }

    pub async fn fetch_with_cache(&self) -> Result<Vec<Event>, ManagerError> {
        self.inner.fetch_with_cache().await
    }

    pub async fn refresh(&self) -> Result<Vec<Event>, ManagerError> {
        self.inner.refresh().await
    }

    pub async fn get_cached(&self) -> Result<Vec<Event>, ManagerError> {
        self.inner.get_cached().await
    }

    pub async fn clear_cache(&self) -> Result<(), ManagerError> {
        self.inner.clear_cache().await
    }

    // ===== Filtering and Sorting =====

    pub async fn filtered_events(
        &self,
        options: &EventFilterOptions,
    ) -> Result<Vec<Event>, ManagerError> {
        let events = self.fetch_with_cache().await?;
        Ok(logic::filter_events(events, options))
    }

    pub async fn sorted_events(&self, option: EventSortOption) -> Result<Vec<Event>, ManagerError> {
        let events = self.fetch_with_cache().await?;
        Ok(logic::sort_events(events, option))
    }

    /// Filter first, then sort what is left
    pub async fn filtered_and_sorted_events(
        &self,
        options: &EventFilterOptions,
        option: EventSortOption,
    ) -> Result<Vec<Event>, ManagerError> {
        let events = self.fetch_with_cache().await?;
        Ok(logic::sort_events(logic::filter_events(events, options), option))
    }

    pub async fn search_events(&self, term: &str) -> Result<Vec<Event>, ManagerError> {
        self.filtered_events(&EventFilterOptions::search(term)).await
    }

    // ===== Analytics =====

    pub async fn statistics(&self) -> Result<EventsStatistics, ManagerError> {
        let events = self.fetch_with_cache().await?;
        Ok(logic::events_statistics(&events))
    }

    pub async fn unique_tags(&self) -> Result<Vec<Tag>, ManagerError> {
        let events = self.fetch_with_cache().await?;
        Ok(logic::unique_tags(&events))
    }

    pub async fn unique_communities(&self) -> Result<Vec<Community>, ManagerError> {
        let events = self.fetch_with_cache().await?;
        Ok(logic::unique_communities(&events))
    }
}
