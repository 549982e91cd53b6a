use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum GraphQLError {
    #[error("No data received from GraphQL query")]
    NoData,

    #[error("Network error: {0}")]
    Network(#[from] NetworkCause),
}

/// What went wrong below the GraphQL layer.
///
/// Underlying errors are behind `Arc` so a `GraphQLError` can be cloned,
/// which the deterministic test doubles rely on.
#[derive(Error, Debug, Clone)]
pub enum NetworkCause {
    #[error("request failed: {0}")]
    Transport(#[source] Arc<reqwest::Error>),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("undecodable response: {0}")]
    Decode(#[source] Arc<serde_json::Error>),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl GraphQLError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        }
    }

    pub fn from_status(status: u16, body: &str) -> Self {
        GraphQLError::Network(NetworkCause::Status {
            status,
            body: Self::truncate_body(body),
        })
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, GraphQLError::NoData)
    }

    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            GraphQLError::Network(NetworkCause::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GraphQLError {
    fn from(err: reqwest::Error) -> Self {
        GraphQLError::Network(NetworkCause::Transport(Arc::new(err)))
    }
}

impl From<serde_json::Error> for GraphQLError {
    fn from(err: serde_json::Error) -> Self {
        GraphQLError::Network(NetworkCause::Decode(Arc::new(err)))
    }
}
