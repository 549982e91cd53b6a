//! Deterministic in-memory transport for tests and offline demos.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{json, Value};

use super::dto::{CommunityDto, EventDto};
use super::{GraphQLError, GraphQLTransport};

#[derive(Debug, Clone)]
enum MockResponse {
    Data(Value),
    Error(GraphQLError),
}

/// Transport that answers every query with the same canned result.
#[derive(Debug)]
pub struct MockGraphQLClient {
    response: MockResponse,
    calls: AtomicUsize,
    last_query: Mutex<Option<String>>,
}

impl MockGraphQLClient {
    /// Answer with `data` as the envelope payload
    pub fn with_data(data: Value) -> Self {
        Self::from_response(MockResponse::Data(data))
    }

    pub fn with_events(events: Vec<EventDto>) -> Self {
        Self::with_data(json!({ "events": { "data": events } }))
    }

    pub fn with_communities(communities: Vec<CommunityDto>) -> Self {
        Self::with_data(json!({ "communities": { "data": communities } }))
    }

    /// Fail every query with `error`
    pub fn failing(error: GraphQLError) -> Self {
        Self::from_response(MockResponse::Error(error))
    }

    fn from_response(response: MockResponse) -> Self {
        Self {
            response,
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().clone()
    }
}

#[async_trait]
impl GraphQLTransport for MockGraphQLClient {
    async fn execute_query(&self, query: &str) -> Result<Value, GraphQLError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock() = Some(query.to_string());

        match &self.response {
            MockResponse::Data(Value::Null) => Err(GraphQLError::NoData),
            MockResponse::Data(data) => Ok(data.clone()),
            MockResponse::Error(err) => Err(err.clone()),
        }
    }
}
