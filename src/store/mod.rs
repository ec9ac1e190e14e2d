use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One persisted record capturing a single request/response pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Parsed request body, or `""` when the request carried no body.
    pub request: Value,
    /// Raw `Authorization` header value, when the request carried one.
    pub headers: Option<String>,
    /// Request path only, without scheme or host.
    pub url: String,
    /// Parsed response body; absent when the response carried no body.
    pub response: Option<Value>,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("log store unavailable: {0}")]
    Unavailable(String),
}

/// Persistent log store collaborator. Append-only: entries are created once
/// and never updated or deleted by this crate. Schema and retention belong to
/// the store implementation.
pub trait LogStore: Send + Sync {
    fn create(&self, entry: LogEntry) -> Result<(), StoreError>;
}

/// In-memory store used by the demo binary and the test suite.
#[derive(Debug, Default)]
pub struct InMemoryLogStore {
    entries: Mutex<Vec<LogEntry>>,
}

impl InMemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every entry created so far, in creation order.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().expect("log store mutex poisoned").clone()
    }
}

impl LogStore for InMemoryLogStore {
    fn create(&self, entry: LogEntry) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| StoreError::Unavailable("log store mutex poisoned".to_string()))?;
        entries.push(entry);
        Ok(())
    }
}
