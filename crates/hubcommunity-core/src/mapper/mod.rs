//! DTO-to-domain mapping.
//!
//! Mapping is drop-on-invalid: a record missing any required field maps to
//! `None` and is filtered out of lists. Nested records are mapped first, so
//! a bad tag only loses that tag, while a bad location loses the whole event.

pub mod community;
pub mod event;

pub use community::{map_communities_response, CommunityMapper};
pub use event::{map_events_response, EventMapper, LocationMapper, TagMapper, TalkMapper};

pub trait Mapper {
    type Dto;
    type Entity;

    /// Validate one record. `None` in, `None` out.
    fn map_one(dto: Option<Self::Dto>) -> Option<Self::Entity>;

    /// Validate a list, keeping only records that pass. Never fails.
    fn map_many(dtos: Option<Vec<Self::Dto>>) -> Vec<Self::Entity> {
        dtos.unwrap_or_default()
            .into_iter()
            .filter_map(|dto| Self::map_one(Some(dto)))
            .collect()
    }
}
