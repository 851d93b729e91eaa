//! In-memory transport for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Transport, TransportError};

/// Answers by URL path (the part before `?`) and records every URL requested.
///
/// Paths without a configured answer get an `{"ok":false}` body.
#[derive(Debug, Default)]
pub struct MockTransport {
    answers: Mutex<HashMap<String, Result<Vec<u8>, TransportError>>>,
    requested: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests for `path` with `body`.
    pub fn respond(&self, path: &str, body: &str) {
        self.answers
            .lock()
            .unwrap()
            .insert(path.to_string(), Ok(body.as_bytes().to_vec()));
    }

    /// Fail requests for `path` with `error`.
    pub fn fail(&self, path: &str, error: TransportError) {
        self.answers.lock().unwrap().insert(path.to_string(), Err(error));
    }

    /// Every URL requested so far, in dispatch order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.requested.lock().unwrap().push(url.to_string());

        let without_query = url.split('?').next().unwrap_or(url);
        let path = without_query
            .find("/api/")
            .map(|i| &without_query[i..])
            .unwrap_or(without_query);

        self.answers
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Ok(br#"{"ok":false}"#.to_vec()))
    }
}
