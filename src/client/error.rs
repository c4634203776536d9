use super::Endpoint;
use reqwest::StatusCode;
use thiserror::Error;

/// Message used when a load fails without a more specific cause.
const FAILED_TO_FETCH: &str = "failed to fetch metrics";

/// A request that did not produce a usable HTTP response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or its body could not be read (connection refused,
    /// timeout, reset, ...).
    #[error("request to {endpoint} failed: {source}")]
    Request {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("request to {endpoint} failed with HTTP status {status}")]
    Status { endpoint: Endpoint, status: StatusCode },
}

/// Why loading the dashboard's metrics failed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered successfully but the body is not what the endpoint promises.
    #[error("{endpoint} returned an unexpected response: {reason}")]
    InvalidResponse { endpoint: Endpoint, reason: String },

    /// A failure with no structured cause, such as a load task that died.
    #[error("{0}")]
    Failed(String),
}

impl LoadError {
    /// The generic "failed to fetch metrics" error.
    #[must_use]
    pub fn failed() -> Self {
        Self::Failed(FAILED_TO_FETCH.to_string())
    }

    pub(crate) fn invalid_response(endpoint: Endpoint, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            endpoint,
            reason: reason.into(),
        }
    }
}
