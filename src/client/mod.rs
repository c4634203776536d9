//! HTTP access to the metrics backend.

mod api_client;
mod endpoint;
mod error;
mod validation;

pub use api_client::ApiClient;
pub use endpoint::Endpoint;
pub use error::{LoadError, TransportError};

/// Log target for the backend client
pub(crate) const LOG_TARGET: &str = "client";
