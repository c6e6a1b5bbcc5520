//! The settled HTTP exchange handed back to callers.

use serde::de::DeserializeOwned;

/// Status and body of a completed HTTP exchange.
///
/// Returned on success, and attached to `HttpError::Rejected` for non-2xx
/// statuses so callers can inspect what the service said.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VeroResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl VeroResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_bad_request(&self) -> bool {
        self.status == 400
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
