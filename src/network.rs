//! Network constants for the Vero SDK.

use std::time::Duration;

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.getvero.com/api/v2";

/// Response format requested on every call.
pub const ACCEPT_JSON: &str = "application/json";

/// Transport-level request timeout used unless the builder overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the auth token for `VeroClientBuilder::from_env`.
pub const ENV_AUTH_TOKEN: &str = "VERO_AUTH_TOKEN";

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "VERO_API_URL";
