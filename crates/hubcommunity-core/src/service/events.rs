use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::api::{
    execute, EventDto, EventsQueryDto, GraphQLClient, GraphQLError, GraphQLTransport, EVENTS_QUERY,
};

#[async_trait]
pub trait EventsService: Send + Sync {
    /// Fetch the raw event records, unvalidated.
    async fn get_events(&self) -> Result<Vec<EventDto>, GraphQLError>;
}

pub struct GraphQLEventsService {
    transport: Arc<dyn GraphQLTransport>,
}

impl GraphQLEventsService {
    pub fn new(transport: Arc<dyn GraphQLTransport>) -> Self {
        Self { transport }
    }

    /// Service backed by a production `GraphQLClient` for `endpoint`
    pub fn with_endpoint(endpoint: &str) -> Result<Self, GraphQLError> {
        Ok(Self::new(Arc::new(GraphQLClient::with_endpoint(endpoint)?)))
    }
}

#[async_trait]
impl EventsService for GraphQLEventsService {
    async fn get_events(&self) -> Result<Vec<EventDto>, GraphQLError> {
        let response: EventsQueryDto = execute(self.transport.as_ref(), EVENTS_QUERY).await?;
        let events = response
            .events
            .and_then(|events| events.data)
            .ok_or(GraphQLError::NoData)?;

        debug!(count = events.len(), "Fetched event records");
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockGraphQLClient;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_events_unwraps_envelope() {
        let client = Arc::new(MockGraphQLClient::with_events(vec![
            EventDto {
                id: Some("1".to_string()),
                title: Some("Swift Conference".to_string()),
                ..Default::default()
            },
            EventDto { id: Some("2".to_string()), ..Default::default() },
        ]));
        let service = GraphQLEventsService::new(client.clone());

        let events = service.get_events().await.expect("Expected events");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title.as_deref(), Some("Swift Conference"));
        assert_eq!(client.last_query().as_deref(), Some(EVENTS_QUERY));
    }

    #[tokio::test]
    async fn test_missing_events_field_is_no_data() {
        let service = GraphQLEventsService::new(Arc::new(MockGraphQLClient::with_data(json!({}))));
        assert!(service.get_events().await.unwrap_err().is_no_data());

        let service = GraphQLEventsService::new(Arc::new(MockGraphQLClient::with_data(
            json!({ "events": { "data": null } }),
        )));
        assert!(service.get_events().await.unwrap_err().is_no_data());
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let service = GraphQLEventsService::new(Arc::new(MockGraphQLClient::failing(
            GraphQLError::from_status(500, "down"),
        )));
        assert_eq!(service.get_events().await.unwrap_err().status(), Some(500));
    }
}
