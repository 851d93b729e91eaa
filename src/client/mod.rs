//! HTTP client abstraction for the telemetry service.
//!
//! Requests go through the [`Transport`] trait so the orchestrator can be
//! driven by the real [`HttpTransport`] or by an in-memory stand-in.

mod endpoint;
mod error;
mod http;

#[cfg(test)]
pub(crate) mod mock;

pub use endpoint::Endpoints;
pub use error::TransportError;
pub use http::HttpTransport;

use std::fmt::Debug;

use async_trait::async_trait;

/// Performs a GET request and yields the raw response body.
///
/// # Example
///
/// ```no_run
/// use tempwatch::{Endpoints, HttpTransport, Transport};
///
/// # tokio_test::block_on(async {
/// let endpoints = Endpoints::new("http://127.0.0.1:8080/");
/// let body = HttpTransport::new().get(&endpoints.current()).await;
/// # });
/// ```
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Fetch `url`.
    ///
    /// Non-success HTTP statuses are reported as [`TransportError::Status`];
    /// the body of such a response is never handed to a parser.
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}
