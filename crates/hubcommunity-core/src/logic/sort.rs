use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Event;
use crate::utils::cmp_ignore_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub enum EventSortOption {
    #[default]
    TitleAscending,
    TitleDescending,
    CommunityCountAscending,
    CommunityCountDescending,
    TalkCountAscending,
    TalkCountDescending,
}

impl EventSortOption {
    pub const ALL: [EventSortOption; 6] = [
        EventSortOption::TitleAscending,
        EventSortOption::TitleDescending,
        EventSortOption::CommunityCountAscending,
        EventSortOption::CommunityCountDescending,
        EventSortOption::TalkCountAscending,
        EventSortOption::TalkCountDescending,
    ];

    /// Short name accepted by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            EventSortOption::TitleAscending => "title-asc",
            EventSortOption::TitleDescending => "title-desc",
            EventSortOption::CommunityCountAscending => "communities-asc",
            EventSortOption::CommunityCountDescending => "communities-desc",
            EventSortOption::TalkCountAscending => "talks-asc",
            EventSortOption::TalkCountDescending => "talks-desc",
        }
    }

    fn compare(self, a: &Event, b: &Event) -> Ordering {
        match self {
            EventSortOption::TitleAscending => cmp_ignore_case(&a.title, &b.title),
            EventSortOption::TitleDescending => cmp_ignore_case(&b.title, &a.title),
            EventSortOption::CommunityCountAscending => {
                a.communities.len().cmp(&b.communities.len())
            }
            EventSortOption::CommunityCountDescending => {
                b.communities.len().cmp(&a.communities.len())
            }
            EventSortOption::TalkCountAscending => a.talks.len().cmp(&b.talks.len()),
            EventSortOption::TalkCountDescending => b.talks.len().cmp(&a.talks.len()),
        }
    }
}

impl std::fmt::Display for EventSortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "Unknown sort option '{0}' (expected one of title-asc, title-desc, \
     communities-asc, communities-desc, talks-asc, talks-desc)"
)]
pub struct ParseSortOptionError(String);

impl FromStr for EventSortOption {
    type Err = ParseSortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        EventSortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == lower)
            .ok_or_else(|| ParseSortOptionError(s.to_string()))
    }
}

/// Stable sort: events that compare equal keep their relative order.
pub fn sort_events(mut events: Vec<Event>, option: EventSortOption) -> Vec<Event> {
    events.sort_by(|a, b| option.compare(a, b));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Community, Location, Talk};

    fn event(id: &str, title: &str, talks: usize, communities: usize) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            tags: vec![],
            talks: (0..talks)
                .map(|i| Talk { id: format!("k{}", i), title: format!("Talk {}", i) })
                .collect(),
            location: Location { id: "l1".to_string(), title: "Online".to_string() },
            images: vec![],
            communities: (0..communities)
                .map(|i| Community::new(format!("c{}", i), format!("Community {}", i), 1))
                .collect(),
        }
    }

    fn titles(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_sort_by_title() {
        let events = vec![
            event("1", "Web Development Workshop", 0, 0),
            event("2", "Swift Conference", 0, 0),
            event("3", "Android Summit", 0, 0),
        ];

        let ascending = sort_events(events.clone(), EventSortOption::TitleAscending);
        assert_eq!(
            titles(&ascending),
            vec!["Android Summit", "Swift Conference", "Web Development Workshop"]
        );

        let descending = sort_events(events, EventSortOption::TitleDescending);
        assert_eq!(
            titles(&descending),
            vec!["Web Development Workshop", "Swift Conference", "Android Summit"]
        );
    }

    #[test]
    fn test_title_sort_ignores_case() {
        let events = vec![event("1", "beta", 0, 0), event("2", "Alpha", 0, 0)];
        let sorted = sort_events(events, EventSortOption::TitleAscending);
        assert_eq!(titles(&sorted), vec!["Alpha", "beta"]);
    }

    #[test]
    fn test_sort_by_counts_is_stable() {
        let events = vec![
            event("a", "A", 1, 2),
            event("b", "B", 0, 1),
            event("c", "C", 2, 1),
            event("d", "D", 1, 0),
        ];

        let by_talks = sort_events(events.clone(), EventSortOption::TalkCountAscending);
        assert_eq!(titles(&by_talks), vec!["B", "A", "D", "C"]);

        let by_talks_desc = sort_events(events.clone(), EventSortOption::TalkCountDescending);
        assert_eq!(titles(&by_talks_desc), vec!["C", "A", "D", "B"]);

        let by_communities = sort_events(events.clone(), EventSortOption::CommunityCountAscending);
        assert_eq!(titles(&by_communities), vec!["D", "B", "C", "A"]);

        let by_communities_desc = sort_events(events, EventSortOption::CommunityCountDescending);
        assert_eq!(titles(&by_communities_desc), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_parse_sort_option() {
        for option in EventSortOption::ALL {
            assert_eq!(option.as_str().parse::<EventSortOption>(), Ok(option));
        }
        assert_eq!("Title-Desc".parse::<EventSortOption>(), Ok(EventSortOption::TitleDescending));
        assert!("date".parse::<EventSortOption>().is_err());
    }
}
