//! Stateless business logic over in-memory event collections.
//!
//! Nothing here touches the network or the cache; the enhanced manager
//! feeds these functions from its cache-first fetch.

pub mod filter;
pub mod sort;
pub mod stats;

pub use filter::{filter_events, EventFilterOptions};
pub use sort::{sort_events, EventSortOption, ParseSortOptionError};
pub use stats::{events_statistics, unique_communities, unique_tags, EventsStatistics};
