//! Hub Community core - client data layer for the Hub Community GraphQL backend.
//!
//! Fetches events and communities over GraphQL, validates the nullable
//! payloads into strict domain models, keeps an offline snapshot of each
//! collection, and runs filtering, sorting and statistics over events.
//!
//! The layers stack as transport, service, mapper, cache and manager. Each
//! seam is a trait so tests can swap in the mocks shipped here.

pub mod api;
pub mod cache;
pub mod config;
pub mod logic;
pub mod manager;
pub mod mapper;
pub mod models;
pub mod service;
pub mod utils;

pub use api::{GraphQLClient, GraphQLError, GraphQLTransport, DEFAULT_ENDPOINT};
pub use cache::{BlobCache, CacheError, CacheStore, FileBlobStore, MemoryBlobStore};
pub use config::Config;
pub use logic::{EventFilterOptions, EventSortOption, EventsStatistics};
pub use manager::{CommunitiesManager, EnhancedEventsManager, EventsManager, ManagerError};
pub use models::{Community, Event, Location, Tag, Talk};
