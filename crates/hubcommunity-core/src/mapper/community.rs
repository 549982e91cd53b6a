use crate::api::{CommunitiesDto, CommunityDto};
use crate::models::{CommunitiesResponse, Community};

use super::{Mapper, TagMapper};

pub struct CommunityMapper;

impl Mapper for CommunityMapper {
    type Dto = CommunityDto;
    type Entity = Community;

    fn map_one(dto: Option<CommunityDto>) -> Option<Community> {
        let CommunityDto {
            id,
            title,
            images,
            members_quantity,
            short_description,
            tags,
        } = dto?;

        let id = id?;
        let title = title?;
        // Negative or absurd counts fail validation like a missing field
        let members_quantity = u32::try_from(members_quantity?).ok()?;

        Some(Community {
            id,
            title,
            members_quantity,
            images: images.unwrap_or_default(),
            short_description,
            tags: TagMapper::map_many(tags),
        })
    }
}

pub fn map_communities_response(dto: Option<CommunitiesDto>) -> Option<CommunitiesResponse> {
    let dto = dto?;
    Some(CommunitiesResponse {
        data: CommunityMapper::map_many(dto.data),
    })
}
