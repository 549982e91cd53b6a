use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::api::{
    execute, CommunitiesQueryDto, CommunityDto, GraphQLClient, GraphQLError, GraphQLTransport,
    COMMUNITIES_QUERY,
};

#[async_trait]
pub trait CommunitiesService: Send + Sync {
    /// Fetch the raw community records, unvalidated.
    async fn get_communities(&self) -> Result<Vec<CommunityDto>, GraphQLError>;
}

pub struct GraphQLCommunitiesService {
    transport: Arc<dyn GraphQLTransport>,
}

impl GraphQLCommunitiesService {
    pub fn new(transport: Arc<dyn GraphQLTransport>) -> Self {
        Self { transport }
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self, GraphQLError> {
        Ok(Self::new(Arc::new(GraphQLClient::with_endpoint(endpoint)?)))
    }
}

#[async_trait]
impl CommunitiesService for GraphQLCommunitiesService {
    async fn get_communities(&self) -> Result<Vec<CommunityDto>, GraphQLError> {
        let response: CommunitiesQueryDto =
            execute(self.transport.as_ref(), COMMUNITIES_QUERY).await?;
        let communities = response
            .communities
            .and_then(|communities| communities.data)
            .ok_or(GraphQLError::NoData)?;

        debug!(count = communities.len(), "Fetched community records");
        Ok(communities)
    }
}
