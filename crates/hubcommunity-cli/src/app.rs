//! Application wiring for the hubcommunity CLI.
//!
//! Builds the managers from `Config` with a file-backed cache and runs one
//! command against them.

use std::sync::Arc;

use anyhow::{Context, Result};
use futures::future;
use tracing::{debug, info};

use hubcommunity_core::cache::{BlobCache, CacheStore, FileBlobStore};
use hubcommunity_core::{CommunitiesManager, Config, EnhancedEventsManager, ManagerError};

use crate::args::{Command, EventQuery};
use crate::output;

pub struct App {
    events: EnhancedEventsManager,
    communities: CommunitiesManager,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = config.endpoint();
        let cache_dir = config.cache_dir()?;
        debug!(%endpoint, cache_dir = %cache_dir.display(), "Building managers");

        let store = FileBlobStore::new(cache_dir).context("Failed to open cache directory")?;
        let cache: Arc<dyn CacheStore> = Arc::new(BlobCache::new(store));

        Ok(Self {
            events: EnhancedEventsManager::with_endpoint(&endpoint, cache.clone())?,
            communities: CommunitiesManager::with_endpoint(&endpoint, cache)?,
        })
    }

    pub async fn run(&self, command: &Command) -> Result<()> {
        match command {
            Command::Events { query } => self.list_events(query, None).await?,
            Command::Search { term, query } => self.list_events(query, Some(term.as_str())).await?,
            Command::Communities => {
                let communities = self.communities.fetch_with_cache().await.map_err(describe)?;
                print!("{}", output::communities_table(&communities));
            }
            Command::Stats => {
                let stats = self.events.statistics().await.map_err(describe)?;
                print!("{}", output::statistics(&stats));
            }
            Command::Tags => {
                let tags = self.events.unique_tags().await.map_err(describe)?;
                print!("{}", output::tags(&tags));
            }
            Command::Summary => {
                let (stats, communities) = future::try_join(
                    self.events.statistics(),
                    self.communities.fetch_with_cache(),
                )
                .await
                .map_err(describe)?;
                print!("{}", output::statistics(&stats));
                println!("Known communities: {}", communities.len());
            }
            Command::Refresh => {
                let (events, communities) =
                    future::try_join(self.events.refresh(), self.communities.refresh())
                        .await
                        .map_err(describe)?;
                info!(events = events.len(), communities = communities.len(), "Cache refreshed");
                println!("Refreshed {} events and {} communities", events.len(), communities.len());
            }
            Command::Clear => {
                self.events.clear_cache().await.map_err(describe)?;
                self.communities.clear_cache().await.map_err(describe)?;
                println!("Cache cleared");
            }
            Command::Config { .. } => update_config(Config::load()?, command)?,
        }
        Ok(())
    }

    async fn list_events(&self, query: &EventQuery, term: Option<&str>) -> Result<()> {
        let events = self
            .events
            .filtered_and_sorted_events(&query.filter(term), query.sort)
            .await
            .map_err(describe)?;
        print!("{}", output::events_table(&events));
        Ok(())
    }
}

/// Apply `config` command values, saving only when something changed.
/// Runs without building the managers.
pub fn update_config(mut config: Config, command: &Command) -> Result<()> {
    let Command::Config { endpoint, cache_dir } = command else {
        return Ok(());
    };

    if endpoint.is_some() || cache_dir.is_some() {
        if let Some(endpoint) = endpoint {
            config.endpoint = Some(endpoint.clone());
        }
        if let Some(dir) = cache_dir {
            config.cache_dir = Some(dir.clone());
        }
        config.save()?;
        info!("Configuration saved");
    }

    print!("{}", output::config(&config)?);
    Ok(())
}

/// Turn a manager failure into a user-facing error
fn describe(err: ManagerError) -> anyhow::Error {
    if err.is_no_data() {
        anyhow::anyhow!("The server returned no data")
    } else {
        anyhow::Error::new(err)
    }
}
