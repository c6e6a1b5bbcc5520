//! Event domain: named occurrences attributed to a user identity.

pub mod client;
pub(crate) mod wire;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One element of a `track_many` batch for a single user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub data: Option<Value>,
}

impl EventRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
