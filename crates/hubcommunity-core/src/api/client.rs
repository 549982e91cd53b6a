//! GraphQL transport for the Hub Community backend.
//!
//! Every query is a single `POST {"query": ...}` to one endpoint. The
//! response envelope is unwrapped here so callers only ever see the `data`
//! payload or a `GraphQLError`.

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::GraphQLError;

/// Production endpoint of the Hub Community BFF
pub const DEFAULT_ENDPOINT: &str = "https://hubcommunity-bff.8020digital.com.br/graphql";

#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    data: Option<Value>,
    errors: Option<Vec<GraphQLErrorMessage>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorMessage {
    message: String,
}

/// Something that can run a GraphQL query and hand back its `data` payload.
#[async_trait]
pub trait GraphQLTransport: Send + Sync {
    /// Run `query` and return the envelope's `data` value.
    ///
    /// A missing or null `data` is reported as `GraphQLError::NoData`.
    async fn execute_query(&self, query: &str) -> Result<Value, GraphQLError>;
}

/// Run `query` and decode the `data` payload into `T`.
pub async fn execute<T: DeserializeOwned>(
    transport: &dyn GraphQLTransport,
    query: &str,
) -> Result<T, GraphQLError> {
    let data = transport.execute_query(query).await?;
    Ok(serde_json::from_value(data)?)
}

/// HTTP client for the GraphQL endpoint.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct GraphQLClient {
    client: Client,
    endpoint: String,
}

impl GraphQLClient {
    /// Create a client for the production endpoint
    pub fn new() -> Result<Self, GraphQLError> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a client for a custom deployment or a local test server
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, GraphQLError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Turn a raw HTTP answer into the envelope's `data` payload.
    fn parse_response(status: StatusCode, body: &[u8]) -> Result<Value, GraphQLError> {
        if status != StatusCode::OK {
            return Err(GraphQLError::from_status(
                status.as_u16(),
                &String::from_utf8_lossy(body),
            ));
        }

        let envelope: GraphQLResponse = serde_json::from_slice(body)?;

        for error in envelope.errors.iter().flatten() {
            warn!(message = %error.message, "GraphQL error in response");
        }

        match envelope.data {
            Some(Value::Null) | None => Err(GraphQLError::NoData),
            Some(data) => Ok(data),
        }
    }
}

#[async_trait]
impl GraphQLTransport for GraphQLClient {
    async fn execute_query(&self, query: &str) -> Result<Value, GraphQLError> {
        debug!(endpoint = %self.endpoint, "Sending GraphQL query");

        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&GraphQLRequest { query })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "GraphQL response received");

        Self::parse_response(status, &body)
    }
}
