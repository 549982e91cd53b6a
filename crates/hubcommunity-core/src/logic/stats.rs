use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Community, Event, Tag};

/// Aggregate counts over an events collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct EventsStatistics {
    pub total_events: usize,
    pub total_talks: usize,
    pub total_communities: usize,
    pub events_with_images: usize,
    pub events_with_talks: usize,
}

impl EventsStatistics {
    pub fn from_events(events: &[Event]) -> Self {
        Self {
            total_events: events.len(),
            total_talks: events.iter().map(|e| e.talks.len()).sum(),
            total_communities: events.iter().map(|e| e.communities.len()).sum(),
            events_with_images: events.iter().filter(|e| e.has_images()).count(),
            events_with_talks: events.iter().filter(|e| e.has_talks()).count(),
        }
    }

    fn ratio(&self, count: usize) -> f64 {
        if self.total_events == 0 {
            return 0.0;
        }
        count as f64 / self.total_events as f64
    }

    pub fn average_talks_per_event(&self) -> f64 {
        self.ratio(self.total_talks)
    }

    pub fn average_communities_per_event(&self) -> f64 {
        self.ratio(self.total_communities)
    }

    pub fn events_with_images_percentage(&self) -> f64 {
        self.ratio(self.events_with_images) * 100.0
    }

    pub fn events_with_talks_percentage(&self) -> f64 {
        self.ratio(self.events_with_talks) * 100.0
    }
}

pub fn events_statistics(events: &[Event]) -> EventsStatistics {
    EventsStatistics::from_events(events)
}

/// One tag per distinct id, first occurrence wins, in first-seen order.
pub fn unique_tags(events: &[Event]) -> Vec<Tag> {
    let mut seen = HashSet::new();
    events
        .iter()
        .flat_map(|e| e.tags.iter())
        .filter(|tag| seen.insert(tag.id.as_str()))
        .cloned()
        .collect()
}

/// One community per distinct id, first occurrence wins, in first-seen order.
pub fn unique_communities(events: &[Event]) -> Vec<Community> {
    let mut seen = HashSet::new();
    events
        .iter()
        .flat_map(|e| e.communities.iter())
        .filter(|community| seen.insert(community.id.as_str()))
        .cloned()
        .collect()
}
