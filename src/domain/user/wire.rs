//! Request bodies for the `/users/*` endpoints.

use serde::Serialize;
use serde_json::Value;

/// `POST /users/track`
#[derive(Debug, Serialize)]
pub(crate) struct TrackUserRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
    pub data: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<&'a str>,
}

/// `PUT /users/reidentify`
#[derive(Debug, Serialize)]
pub(crate) struct ReidentifyRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<&'a str>,
    pub id: &'a str,
    pub new_id: &'a str,
}

/// Body shared by unsubscribe, resubscribe and delete.
#[derive(Debug, Serialize)]
pub(crate) struct UserIdRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<&'a str>,
    pub id: &'a str,
}
