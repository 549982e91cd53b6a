//! GraphQL API module for the Hub Community backend.
//!
//! This module provides the `GraphQLTransport` seam, the reqwest-backed
//! `GraphQLClient`, a deterministic `MockGraphQLClient`, the fixed query
//! documents, and the all-optional transfer objects the server returns.
//!
//! There is no authentication: every query is an anonymous POST.

pub mod client;
pub mod dto;
pub mod error;
pub mod mock;
pub mod query;

pub use client::{execute, GraphQLClient, GraphQLTransport, DEFAULT_ENDPOINT};
pub use dto::{
    CommunitiesDto, CommunitiesQueryDto, CommunityDto, EventDto, EventsDto, EventsQueryDto,
    LocationDto, TagDto, TalkDto,
};
pub use error::{GraphQLError, NetworkCause};
pub use mock::MockGraphQLClient;
pub use query::{COMMUNITIES_QUERY, EVENTS_QUERY};
