//! Tag domain: attach and detach labels on a user record.
//!
//! Callers may hand over one tag or many. Statically typed input converts
//! through `From`; input of unknown shape (for instance tags read from a JSON
//! document) goes through `TagInput::Json` and is checked when normalized.

pub mod client;
pub(crate) mod wire;

use serde_json::Value;

use crate::error::ValidationError;

/// Tag argument accepted by every tag-mutation operation.
#[derive(Debug, Clone, PartialEq)]
pub enum TagInput {
    One(String),
    Many(Vec<String>),
    Json(Value),
}

impl TagInput {
    /// Flatten into the list sent on the wire. A single tag becomes a
    /// one-element list; JSON input must be a string or an array of strings.
    pub fn normalize(self) -> Result<Vec<String>, ValidationError> {
        match self {
            TagInput::One(tag) => Ok(vec![tag]),
            TagInput::Many(tags) => Ok(tags),
            TagInput::Json(Value::String(tag)) => Ok(vec![tag]),
            TagInput::Json(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(tag) => Ok(tag),
                    _ => Err(ValidationError::InvalidTags),
                })
                .collect(),
            TagInput::Json(_) => Err(ValidationError::InvalidTags),
        }
    }
}

impl From<&str> for TagInput {
    fn from(tag: &str) -> Self {
        TagInput::One(tag.to_string())
    }
}

impl From<String> for TagInput {
    fn from(tag: String) -> Self {
        TagInput::One(tag)
    }
}

impl From<Vec<String>> for TagInput {
    fn from(tags: Vec<String>) -> Self {
        TagInput::Many(tags)
    }
}

impl From<Vec<&str>> for TagInput {
    fn from(tags: Vec<&str>) -> Self {
        TagInput::Many(tags.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for TagInput {
    fn from(tags: &[&str]) -> Self {
        TagInput::Many(tags.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<&[&str; N]> for TagInput {
    fn from(tags: &[&str; N]) -> Self {
        TagInput::Many(tags.iter().map(|t| t.to_string()).collect())
    }
}

impl From<&[String]> for TagInput {
    fn from(tags: &[String]) -> Self {
        TagInput::Many(tags.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for TagInput {
    fn from(tags: [&str; N]) -> Self {
        TagInput::Many(tags.iter().map(|t| t.to_string()).collect())
    }
}

impl From<Value> for TagInput {
    fn from(value: Value) -> Self {
        TagInput::Json(value)
    }
}
