//! HTTP layer: `VeroHttp` transport wrapper and the `VeroResponse` it yields.

pub mod client;
pub mod response;

pub use client::VeroHttp;
pub use response::VeroResponse;
