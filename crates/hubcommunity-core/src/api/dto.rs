//! Transfer objects mirroring the GraphQL payload.
//!
//! Every field is optional: the server is not trusted to send complete
//! records. The mappers decide what survives.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagDto {
    pub id: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TalkDto {
    pub id: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationDto {
    pub id: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityDto {
    pub id: Option<String>,
    pub title: Option<String>,
    pub images: Option<Vec<String>>,
    // Signed so that a negative count decodes and is rejected by the mapper
    pub members_quantity: Option<i64>,
    pub short_description: Option<String>,
    pub tags: Option<Vec<TagDto>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDto {
    pub id: Option<String>,
    pub title: Option<String>,
    pub tags: Option<Vec<TagDto>>,
    pub talks: Option<Vec<TalkDto>>,
    pub location: Option<LocationDto>,
    pub images: Option<Vec<String>>,
    pub communities: Option<Vec<CommunityDto>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventsDto {
    pub data: Option<Vec<EventDto>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunitiesDto {
    pub data: Option<Vec<CommunityDto>>,
}

/// `data` payload of the events query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsQueryDto {
    pub events: Option<EventsDto>,
}

/// `data` payload of the communities query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommunitiesQueryDto {
    pub communities: Option<CommunitiesDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_events_payload() {
        let json = r#"{"events":{"data":[{
            "id":"1",
            "title":"Swift Conference",
            "tags":[{"id":"t1","value":"iOS"}],
            "talks":null,
            "location":{"id":"l1","title":"Recife"},
            "images":["a.png"],
            "communities":[{"id":"c1","title":"Swift PE","members_quantity":120}]
        }]}}"#;

        let payload: EventsQueryDto = serde_json::from_str(json)
            .expect("Failed to parse events test JSON");
        let events = payload.events.and_then(|e| e.data).unwrap_or_default();
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.title.as_deref(), Some("Swift Conference"));
        assert!(event.talks.is_none());
        let community = &event.communities.as_ref().expect("communities present")[0];
        assert_eq!(community.members_quantity, Some(120));
        assert!(community.short_description.is_none());
    }

    #[test]
    fn test_parse_communities_payload_with_missing_fields() {
        let json = r#"{"communities":{"data":[
            {"id":"c1","short_description":"Rust folks","tags":[{"id":"t1"}]}
        ]}}"#;

        let payload: CommunitiesQueryDto = serde_json::from_str(json)
            .expect("Failed to parse communities test JSON");
        let communities = payload.communities.and_then(|c| c.data).unwrap_or_default();
        assert_eq!(communities[0].title, None);
        assert_eq!(communities[0].short_description.as_deref(), Some("Rust folks"));
        assert_eq!(communities[0].tags.as_ref().map(Vec::len), Some(1));
    }
}
