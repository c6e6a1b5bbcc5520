//! High-level client: `VeroClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the immutable configuration, the accessor
//! methods, and the calls that span domains.

use crate::batch;
use crate::domain::event::client::Events;
use crate::domain::tag::client::Tags;
use crate::domain::user::client::Users;
use crate::error::SdkResult;
use crate::http::{VeroHttp, VeroResponse};
use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT, ENV_API_URL, ENV_AUTH_TOKEN};

use futures_util::future::join;
use serde_json::Value;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::event::client::Events as EventsClient;
pub use crate::domain::tag::client::Tags as TagsClient;
pub use crate::domain::user::client::Users as UsersClient;

/// Settings fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
    pub timeout: Duration,
}

/// The primary entry point for the Vero SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.users()`, `client.tags()`, `client.events()`.
#[derive(Debug, Clone)]
pub struct VeroClient {
    pub(crate) http: VeroHttp,
    config: ClientConfig,
}

impl VeroClient {
    /// Client against the production API. `None` (or an empty token) yields an
    /// unauthenticated client whose requests carry no `auth_token`.
    pub fn new(auth_token: Option<&str>) -> SdkResult<Self> {
        let mut builder = Self::builder();
        if let Some(token) = auth_token {
            builder = builder.auth_token(token);
        }
        builder.build()
    }

    pub fn builder() -> VeroClientBuilder {
        VeroClientBuilder::default()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn auth_token(&self) -> Option<&str> {
        self.config.auth_token.as_deref()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    pub fn tags(&self) -> Tags<'_> {
        Tags { client: self }
    }

    pub fn events(&self) -> Events<'_> {
        Events { client: self }
    }

    // ── Cross-domain calls ───────────────────────────────────────────────

    /// Check that the service is reachable.
    pub async fn heartbeat(&self) -> SdkResult<VeroResponse> {
        Ok(self.http.get("/heartbeat").await?)
    }

    /// Track a user and record one event for them, both requests in flight
    /// at once.
    ///
    /// Resolves with `(user_response, event_response)` only when both
    /// succeed. Otherwise fails with a `BatchError` holding both outcomes.
    pub async fn create_user_and_track_event(
        &self,
        id: &str,
        email: Option<&str>,
        user_data: Option<Value>,
        event_name: &str,
        event_data: Option<Value>,
    ) -> SdkResult<(VeroResponse, VeroResponse)> {
        let users = self.users();
        let events = self.events();
        let (user, event) = join(
            users.track(Some(id), email, user_data),
            events.track(Some(id), email, event_name, event_data),
        )
        .await;

        match (user, event) {
            (Ok(user), Ok(event)) => Ok((user, event)),
            (user, event) => Err(batch::batch_failure("user and event", vec![user, event])),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct VeroClientBuilder {
    base_url: String,
    auth_token: Option<String>,
    timeout: Duration,
}

impl Default for VeroClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            auth_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl VeroClientBuilder {
    /// Start from `VERO_AUTH_TOKEN` and `VERO_API_URL` when they are set.
    pub fn from_env() -> Self {
        let mut builder = Self::default();
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.is_empty() {
                builder = builder.base_url(&url);
            }
        }
        if let Ok(token) = std::env::var(ENV_AUTH_TOKEN) {
            builder = builder.auth_token(token);
        }
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// An empty token is treated as no token.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.auth_token = if token.is_empty() { None } else { Some(token) };
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> SdkResult<VeroClient> {
        let http = VeroHttp::new(&self.base_url, self.timeout)?;
        let config = ClientConfig {
            base_url: http.base_url().to_string(),
            auth_token: self.auth_token,
            timeout: self.timeout,
        };
        Ok(VeroClient { http, config })
    }
}
