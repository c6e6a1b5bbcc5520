//! Request body for `PUT /users/tags/edit`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct EditTagsRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<&'a str>,
    pub id: &'a str,
    pub add: Vec<String>,
    pub remove: Vec<String>,
}
