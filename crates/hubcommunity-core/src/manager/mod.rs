//! Cache-first managers, one per entity type.
//!
//! A manager holds no state of its own beyond its injected service and
//! cache. Every call runs sequentially: at most one cache read, one network
//! fetch, and one cache write.

pub mod communities;
pub mod enhanced;
pub mod events;

use thiserror::Error;

use crate::api::GraphQLError;
use crate::cache::CacheError;

pub use communities::CommunitiesManager;
pub use enhanced::EnhancedEventsManager;
pub use events::EventsManager;

#[derive(Error, Debug)]
pub enum ManagerError {
    #[error(transparent)]
    GraphQL(#[from] GraphQLError),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
}

impl ManagerError {
    /// The GraphQL failure, if this came from the network side
    pub fn as_graphql(&self) -> Option<&GraphQLError> {
        match self {
            ManagerError::GraphQL(err) => Some(err),
            ManagerError::Cache(_) => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.as_graphql().is_some_and(GraphQLError::is_no_data)
    }
}
