//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Caller-facing input types
//! - `wire.rs`: Serde request bodies matching the service's endpoints
//! - `client.rs`: Sub-client with one method per endpoint

pub mod event;
pub mod tag;
pub mod user;
