//! Request body for `POST /events/track`.

use serde::Serialize;
use serde_json::Value;

use crate::shared::IdentityRef;

#[derive(Debug, Serialize)]
pub(crate) struct TrackEventRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<&'a str>,
    pub identity: IdentityRef<'a>,
    pub event_name: &'a str,
    pub data: &'a Value,
}
