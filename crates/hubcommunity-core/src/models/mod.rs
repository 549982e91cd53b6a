//! Domain models for Hub Community entities.
//!
//! These are the validated, non-null shapes produced by the mappers and
//! stored in the cache:
//!
//! - `Event` with its nested `Tag`, `Talk`, `Location` and `Community` lists
//! - `Community` in its extended form (images, short description, tags)
//! - `EventsResponse`, `CommunitiesResponse`: thin envelopes over the lists

pub mod community;
pub mod event;

pub use community::{CommunitiesResponse, Community};
pub use event::{Event, EventsResponse, Location, Tag, Talk};
