//! Users sub-client: identify, reidentify, subscription state, delete.

use serde_json::Value;

use crate::batch;
use crate::client::VeroClient;
use crate::domain::user::wire::{ReidentifyRequest, TrackUserRequest, UserIdRequest};
use crate::domain::user::UserRecord;
use crate::error::SdkResult;
use crate::http::VeroResponse;
use crate::shared::data_or_empty;

pub struct Users<'a> {
    pub(crate) client: &'a VeroClient,
}

impl<'a> Users<'a> {
    /// Create or update a user. `data` defaults to `{}`.
    pub async fn track(
        &self,
        id: Option<&str>,
        email: Option<&str>,
        data: Option<Value>,
    ) -> SdkResult<VeroResponse> {
        let data = data_or_empty(data);
        let body = TrackUserRequest {
            id,
            email,
            data: &data,
            auth_token: self.client.auth_token(),
        };
        Ok(self.client.http.post("/users/track", &body).await?)
    }

    /// Change a user's id from `old_id` to `new_id`.
    pub async fn reidentify(&self, old_id: &str, new_id: &str) -> SdkResult<VeroResponse> {
        let body = ReidentifyRequest {
            auth_token: self.client.auth_token(),
            id: old_id,
            new_id,
        };
        Ok(self.client.http.put("/users/reidentify", &body).await?)
    }

    pub async fn unsubscribe(&self, id: &str) -> SdkResult<VeroResponse> {
        let body = self.id_body(id);
        Ok(self.client.http.post("/users/unsubscribe", &body).await?)
    }

    pub async fn resubscribe(&self, id: &str) -> SdkResult<VeroResponse> {
        let body = self.id_body(id);
        Ok(self.client.http.post("/users/resubscribe", &body).await?)
    }

    pub async fn delete(&self, id: &str) -> SdkResult<VeroResponse> {
        let body = self.id_body(id);
        Ok(self.client.http.delete("/users/delete", &body).await?)
    }

    /// Track every user in `users` concurrently.
    ///
    /// Fails without sending anything when `users` is empty. Otherwise resolves
    /// once every request has settled: with all responses in input order, or
    /// with a `BatchError` holding each outcome if any request failed.
    pub async fn track_many(&self, users: &[UserRecord]) -> SdkResult<Vec<VeroResponse>> {
        batch::ensure_non_empty(users, "users")?;

        let requests = users.iter().map(|user| {
            self.track(
                user.id.as_deref(),
                user.email.as_deref(),
                user.data.clone(),
            )
        });
        batch::settle_all("users", requests).await
    }

    fn id_body<'b>(&'b self, id: &'b str) -> UserIdRequest<'b> {
        UserIdRequest {
            auth_token: self.client.auth_token(),
            id,
        }
    }
}
