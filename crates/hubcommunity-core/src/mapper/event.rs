use crate::api::{EventDto, EventsDto, LocationDto, TagDto, TalkDto};
use crate::models::{Event, EventsResponse, Location, Tag, Talk};

use super::{CommunityMapper, Mapper};

pub struct TagMapper;

impl Mapper for TagMapper {
    type Dto = TagDto;
    type Entity = Tag;

    fn map_one(dto: Option<TagDto>) -> Option<Tag> {
        let TagDto { id, value } = dto?;
        Some(Tag { id: id?, value: value? })
    }
}

pub struct TalkMapper;

impl Mapper for TalkMapper {
    type Dto = TalkDto;
    type Entity = Talk;

    fn map_one(dto: Option<TalkDto>) -> Option<Talk> {
        let TalkDto { id, title } = dto?;
        Some(Talk { id: id?, title: title? })
    }
}

pub struct LocationMapper;

impl Mapper for LocationMapper {
    type Dto = LocationDto;
    type Entity = Location;

    fn map_one(dto: Option<LocationDto>) -> Option<Location> {
        let LocationDto { id, title } = dto?;
        Some(Location { id: id?, title: title? })
    }
}

pub struct EventMapper;

impl Mapper for EventMapper {
    type Dto = EventDto;
    type Entity = Event;

    fn map_one(dto: Option<EventDto>) -> Option<Event> {
        let EventDto {
            id,
            title,
            tags,
            talks,
            location,
            images,
            communities,
        } = dto?;

        let id = id?;
        let title = title?;
        let location = LocationMapper::map_one(location)?;

        Some(Event {
            id,
            title,
            tags: TagMapper::map_many(tags),
            talks: TalkMapper::map_many(talks),
            location,
            images: images.unwrap_or_default(),
            communities: CommunityMapper::map_many(communities),
        })
    }
}

/// Map the `events` envelope, keeping only valid events.
pub fn map_events_response(dto: Option<EventsDto>) -> Option<EventsResponse> {
    let dto = dto?;
    Some(EventsResponse {
        data: EventMapper::map_many(dto.data),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::CommunityDto;
    use crate::models::Community;

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    fn location_dto() -> LocationDto {
        LocationDto { id: s("l1"), title: s("Recife") }
    }

    fn full_event_dto() -> EventDto {
        EventDto {
            id: s("e1"),
            title: s("Swift Conference"),
            tags: Some(vec![TagDto { id: s("t1"), value: s("iOS") }]),
            talks: Some(vec![TalkDto { id: s("k1"), title: s("SwiftUI in depth") }]),
            location: Some(location_dto()),
            images: Some(vec!["cover.png".to_string()]),
            communities: Some(vec![CommunityDto {
                id: s("c1"),
                title: s("Swift PE"),
                members_quantity: Some(120),
                ..Default::default()
            }]),
        }
    }

    #[test]
    fn test_tag_requires_id_and_value() {
        assert_eq!(
            TagMapper::map_one(Some(TagDto { id: s("t1"), value: s("Kotlin") })),
            Some(Tag { id: "t1".to_string(), value: "Kotlin".to_string() })
        );
        assert_eq!(TagMapper::map_one(Some(TagDto { id: None, value: s("Kotlin") })), None);
        assert_eq!(TagMapper::map_one(Some(TagDto { id: s("t1"), value: None })), None);
        assert_eq!(TagMapper::map_one(None), None);
    }

    #[test]
    fn test_talk_and_location_require_id_and_title() {
        assert!(TalkMapper::map_one(Some(TalkDto { id: s("k1"), title: s("Intro") })).is_some());
        assert!(TalkMapper::map_one(Some(TalkDto { id: s("k1"), title: None })).is_none());
        assert!(LocationMapper::map_one(Some(location_dto())).is_some());
        let no_id = LocationDto { id: None, title: s("Recife") };
        assert!(LocationMapper::map_one(Some(no_id)).is_none());
    }

    #[test]
    fn test_full_event_copies_fields() {
        let event = EventMapper::map_one(Some(full_event_dto())).expect("Event should map");
        assert_eq!(event.id, "e1");
        assert_eq!(event.title, "Swift Conference");
        assert_eq!(event.location, Location { id: "l1".to_string(), title: "Recife".to_string() });
        assert_eq!(event.tags, vec![Tag { id: "t1".to_string(), value: "iOS".to_string() }]);
        assert_eq!(event.talks.len(), 1);
        assert_eq!(event.images, vec!["cover.png".to_string()]);
        assert_eq!(event.communities, vec![Community::new("c1", "Swift PE", 120)]);
    }

    #[test]
    fn test_event_without_required_fields_is_dropped() {
        let mut dto = full_event_dto();
        dto.id = None;
        assert!(EventMapper::map_one(Some(dto)).is_none());

        let mut dto = full_event_dto();
        dto.title = None;
        assert!(EventMapper::map_one(Some(dto)).is_none());

        let mut dto = full_event_dto();
        dto.location = None;
        assert!(EventMapper::map_one(Some(dto)).is_none());

        // A location that fails validation is as bad as none at all
        let mut dto = full_event_dto();
        dto.location = Some(LocationDto { id: s("l1"), title: None });
        assert!(EventMapper::map_one(Some(dto)).is_none());
    }

    #[test]
    fn test_bad_nested_records_are_dropped_individually() {
        let mut dto = full_event_dto();
        dto.tags = Some(vec![
            TagDto { id: s("t1"), value: s("iOS") },
            TagDto { id: None, value: s("broken") },
        ]);
        dto.talks = Some(vec![TalkDto { id: s("k1"), title: None }]);
        dto.communities = Some(vec![CommunityDto { id: s("c1"), ..Default::default() }]);

        let event = EventMapper::map_one(Some(dto)).expect("Event should still map");
        assert_eq!(event.tags.len(), 1);
        assert!(event.talks.is_empty());
        assert!(event.communities.is_empty());
    }

    #[test]
    fn test_absent_collections_become_empty() {
        let dto = EventDto {
            id: s("e1"),
            title: s("Meetup"),
            location: Some(location_dto()),
            ..Default::default()
        };
        let event = EventMapper::map_one(Some(dto)).expect("Event should map");
        assert!(event.tags.is_empty());
        assert!(event.talks.is_empty());
        assert!(event.images.is_empty());
        assert!(event.communities.is_empty());
    }

    #[test]
    fn test_map_many_filters_invalid() {
        assert!(EventMapper::map_many(None).is_empty());
        assert!(EventMapper::map_many(Some(vec![])).is_empty());

        let events = EventMapper::map_many(Some(vec![
            full_event_dto(),
            EventDto::default(),
            EventDto { id: s("e2"), ..full_event_dto() },
        ]));
        let ids: Vec<_> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e1", "e2"]);
    }

    #[test]
    fn test_map_events_response() {
        assert!(map_events_response(None).is_none());

        let response = map_events_response(Some(EventsDto { data: None }))
            .expect("Envelope should map");
        assert!(response.data.is_empty());

        let response = map_events_response(Some(EventsDto {
            data: Some(vec![full_event_dto(), EventDto::default()]),
        }))
        .expect("Envelope should map");
        assert_eq!(response.data.len(), 1);
    }
}
