//! User domain: identification, reidentification, subscription state, deletion.

pub mod client;
pub(crate) mod wire;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One element of a `track_many` batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Option<String>,
    pub email: Option<String>,
    pub data: Option<Value>,
}

impl UserRecord {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            email: Some(email.into()),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
