//! reqwest-backed transport.

use async_trait::async_trait;
use reqwest::Client;

use super::{Transport, TransportError};

/// Fetches bodies over HTTP with a shared [`reqwest::Client`].
///
/// No timeout is configured; a request that never completes simply never
/// delivers its completion.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
