//! # Vero SDK
//!
//! An async Rust client for the Vero marketing-automation API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **HTTP**: `VeroHttp`, a thin `reqwest` wrapper that sends JSON and maps
//!    non-2xx statuses into errors carrying the response
//! 2. **Domain**: users, tags and events: request bodies and sub-clients
//! 3. **Batch**: concurrent fan-out that settles once every request has
//! 4. **High-Level Client**: `VeroClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vero::prelude::*;
//!
//! let client = VeroClient::new(Some("auth-token"))?;
//!
//! client.users().track(Some("u1"), Some("u1@example.com"), None).await?;
//! client.tags().add("u1", "beta").await?;
//! let status = client
//!     .events()
//!     .track(Some("u1"), None, "signed-up", None)
//!     .map_ok(|res| res.status)
//!     .await?;
//! ```

// ── Layer 1: HTTP ────────────────────────────────────────────────────────────

/// HTTP transport wrapper and response type.
pub mod http;

/// Unified SDK error types.
pub mod error;

/// Network URL and environment constants.
pub mod network;

/// Types shared across domains.
pub mod shared;

// ── Layer 2: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): input types, wire types, sub-clients.
pub mod domain;

// ── Layer 3: Batch ───────────────────────────────────────────────────────────

mod batch;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `VeroClient`, the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::event::EventRecord;
    pub use crate::domain::tag::TagInput;
    pub use crate::domain::user::UserRecord;
    pub use crate::shared::Identity;

    // Errors
    pub use crate::error::{BatchError, HttpError, SdkError, SdkResult, ValidationError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Client + sub-clients
    pub use crate::client::{
        ClientConfig, EventsClient, TagsClient, UsersClient, VeroClient, VeroClientBuilder,
    };
    pub use crate::http::VeroResponse;

    // Success-only response transforms: `.map_ok(|res| ...)`
    pub use futures_util::TryFutureExt;
}
