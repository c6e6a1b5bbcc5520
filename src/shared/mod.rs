//! Types shared across domains.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Who a user record or event belongs to. Either field may be absent; the
/// service decides what it accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            email: Some(email.into()),
        }
    }

    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            email: None,
        }
    }

    /// True when the identity carries a non-empty id.
    pub fn has_id(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    pub(crate) fn as_wire(&self) -> IdentityRef<'_> {
        IdentityRef {
            id: self.id.as_deref(),
            email: self.email.as_deref(),
        }
    }
}

/// Borrowed identity as it appears inside request bodies.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct IdentityRef<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

/// Free-form payload data, `{}` when the caller gave none.
pub(crate) fn data_or_empty(data: Option<Value>) -> Value {
    data.unwrap_or_else(|| Value::Object(Default::default()))
}
