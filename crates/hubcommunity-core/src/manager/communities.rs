use std::sync::Arc;

use tracing::{debug, warn};

use super::ManagerError;
use crate::cache::CacheStore;
use crate::mapper::{CommunityMapper, Mapper};
use crate::models::Community;
use crate::service::{CommunitiesService, GraphQLCommunitiesService};

pub struct CommunitiesManager {
    service: Arc<dyn CommunitiesService>,
    cache: Arc<dyn CacheStore>,
}

impl CommunitiesManager {
    pub fn new(service: Arc<dyn CommunitiesService>, cache: Arc<dyn CacheStore>) -> Self {
        Self { service, cache }
    }

    pub fn with_endpoint(endpoint: &str, cache: Arc<dyn CacheStore>) -> Result<Self, ManagerError> {
        let service = GraphQLCommunitiesService::with_endpoint(endpoint)?;
        Ok(Self::new(Arc::new(service), cache))
    }

    pub async fn fetch(&self) -> Result<Vec<Community>, ManagerError> {
        let dtos = self.service.get_communities().await?;
        let received = dtos.len();
        let communities = CommunityMapper::map_many(Some(dtos));

        if communities.len() < received {
            debug!(received, kept = communities.len(), "Dropped invalid community records");
        }
        Ok(communities)
    }

    /// Cache-first read with the same best-effort caching as events
    pub async fn fetch_with_cache(&self) -> Result<Vec<Community>, ManagerError> {
        match self.cache.get_communities().await {
            Ok(cached) if !cached.is_empty() => {
                debug!(
                    cache = "communities",
                    count = cached.len(),
                    "Serving communities from cache"
                );
                return Ok(cached);
            }
            Ok(_) => debug!(cache = "communities", "Cache empty, fetching communities"),
            Err(e) => warn!(
                cache = "communities",
                error = %e,
                "Failed to read cache, fetching communities"
            ),
        }

        let communities = self.fetch().await?;

        if let Err(e) = self.cache.save_communities(&communities).await {
            warn!(cache = "communities", error = %e, "Failed to cache communities");
        }
        Ok(communities)
    }

    pub async fn refresh(&self) -> Result<Vec<Community>, ManagerError> {
        let communities = self.fetch().await?;
        self.cache.save_communities(&communities).await?;
        debug!(cache = "communities", count = communities.len(), "Refreshed communities");
        Ok(communities)
    }

    pub async fn get_cached(&self) -> Result<Vec<Community>, ManagerError> {
        Ok(self.cache.get_communities().await?)
    }

    pub async fn clear_cache(&self) -> Result<(), ManagerError> {
        Ok(self.cache.clear_communities().await?)
    }
}
