//! Per-entity services: run one fixed query, return the raw DTO list.

pub mod communities;
pub mod events;

pub use communities::{CommunitiesService, GraphQLCommunitiesService};
pub use events::{EventsService, GraphQLEventsService};
