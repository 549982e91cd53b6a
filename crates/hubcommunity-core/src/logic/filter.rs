use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::Event;
use crate::utils::contains_ignore_case;

/// Independently optional event predicates. Every option that is set must
/// hold for an event to be kept; unset options impose nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct EventFilterOptions {
    /// Case-insensitive substring of the title, location, a tag value, or a
    /// community title. Empty means no constraint.
    pub search_term: Option<String>,
    /// Keep events carrying at least one of these tag values (any case)
    pub tags: Option<Vec<String>>,
    /// Keep events linked to at least one of these community titles (any case)
    pub communities: Option<Vec<String>>,
    pub has_talks: Option<bool>,
    pub has_images: Option<bool>,
}

impl EventFilterOptions {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: Some(term.into()),
            ..Self::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_communities<I, S>(mut self, communities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.communities = Some(communities.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_talks(mut self, has_talks: bool) -> Self {
        self.has_talks = Some(has_talks);
        self
    }

    pub fn with_images(mut self, has_images: bool) -> Self {
        self.has_images = Some(has_images);
        self
    }

    /// True when no option constrains anything
    pub fn is_empty(&self) -> bool {
        EventPredicate::new(self).is_unconstrained()
    }

    pub fn matches(&self, event: &Event) -> bool {
        EventPredicate::new(self).matches(event)
    }
}

/// Filter options with the lowercasing done once up front.
struct EventPredicate {
    search: Option<String>,
    tags: Option<HashSet<String>>,
    communities: Option<HashSet<String>>,
    has_talks: Option<bool>,
    has_images: Option<bool>,
}

fn lowercase_set(values: Option<&Vec<String>>) -> Option<HashSet<String>> {
    values
        .filter(|v| !v.is_empty())
        .map(|v| v.iter().map(|s| s.to_lowercase()).collect())
}

impl EventPredicate {
    fn new(options: &EventFilterOptions) -> Self {
        Self {
            search: options
                .search_term
                .as_deref()
                .filter(|term| !term.is_empty())
                .map(str::to_lowercase),
            tags: lowercase_set(options.tags.as_ref()),
            communities: lowercase_set(options.communities.as_ref()),
            has_talks: options.has_talks,
            has_images: options.has_images,
        }
    }

    fn is_unconstrained(&self) -> bool {
        self.search.is_none()
            && self.tags.is_none()
            && self.communities.is_none()
            && self.has_talks.is_none()
            && self.has_images.is_none()
    }

    fn matches(&self, event: &Event) -> bool {
        if let Some(ref query) = self.search {
            let found = contains_ignore_case(&event.title, query)
                || contains_ignore_case(&event.location.title, query)
                || event.tag_values().any(|v| contains_ignore_case(v, query))
                || event.community_titles().any(|t| contains_ignore_case(t, query));
            if !found {
                return false;
            }
        }

        if let Some(ref wanted) = self.tags {
            if !event.tag_values().any(|v| wanted.contains(&v.to_lowercase())) {
                return false;
            }
        }

        if let Some(ref wanted) = self.communities {
            if !event.community_titles().any(|t| wanted.contains(&t.to_lowercase())) {
                return false;
            }
        }

        if let Some(has_talks) = self.has_talks {
            if event.has_talks() != has_talks {
                return false;
            }
        }

        if let Some(has_images) = self.has_images {
            if event.has_images() != has_images {
                return false;
            }
        }

        true
    }
}

/// Keep the events matching every set option, preserving order.
pub fn filter_events(events: Vec<Event>, options: &EventFilterOptions) -> Vec<Event> {
    let predicate = EventPredicate::new(options);
    if predicate.is_unconstrained() {
        return events;
    }
    events.into_iter().filter(|e| predicate.matches(e)).collect()
}
