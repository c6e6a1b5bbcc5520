//! Tags sub-client: add, remove, or edit both lists in one call.

use crate::client::VeroClient;
use crate::domain::tag::wire::EditTagsRequest;
use crate::domain::tag::TagInput;
use crate::error::SdkResult;
use crate::http::VeroResponse;

pub struct Tags<'a> {
    pub(crate) client: &'a VeroClient,
}

impl<'a> Tags<'a> {
    /// Attach `tags` to the user.
    pub async fn add(&self, id: &str, tags: impl Into<TagInput>) -> SdkResult<VeroResponse> {
        let add = tags.into().normalize()?;
        self.send(id, add, Vec::new()).await
    }

    /// Detach `tags` from the user.
    pub async fn remove(&self, id: &str, tags: impl Into<TagInput>) -> SdkResult<VeroResponse> {
        let remove = tags.into().normalize()?;
        self.send(id, Vec::new(), remove).await
    }

    /// Attach `add` and detach `remove` in a single request.
    pub async fn edit(
        &self,
        id: &str,
        add: impl Into<TagInput>,
        remove: impl Into<TagInput>,
    ) -> SdkResult<VeroResponse> {
        let add = add.into().normalize()?;
        let remove = remove.into().normalize()?;
        self.send(id, add, remove).await
    }

    async fn send(&self, id: &str, add: Vec<String>, remove: Vec<String>) -> SdkResult<VeroResponse> {
        let body = EditTagsRequest {
            auth_token: self.client.auth_token(),
            id,
            add,
            remove,
        };
        Ok(self.client.http.put("/users/tags/edit", &body).await?)
    }
}
