//! Events sub-client: single events and the two batch variants.

use serde_json::Value;

use crate::batch;
use crate::client::VeroClient;
use crate::domain::event::wire::TrackEventRequest;
use crate::domain::event::EventRecord;
use crate::error::{SdkResult, ValidationError};
use crate::http::VeroResponse;
use crate::shared::{data_or_empty, Identity, IdentityRef};

pub struct Events<'a> {
    pub(crate) client: &'a VeroClient,
}

impl<'a> Events<'a> {
    /// Record `event_name` for the given user. `data` defaults to `{}`.
    pub async fn track(
        &self,
        id: Option<&str>,
        email: Option<&str>,
        event_name: &str,
        data: Option<Value>,
    ) -> SdkResult<VeroResponse> {
        let data = data_or_empty(data);
        self.send(IdentityRef { id, email }, event_name, &data).await
    }

    /// Record the same event for every identity in `identities`.
    ///
    /// All identities are checked before anything is sent: an empty slice or
    /// an identity without an id fails the call and no request goes out.
    pub async fn track_for_many(
        &self,
        identities: &[Identity],
        event_name: &str,
        data: Option<Value>,
    ) -> SdkResult<Vec<VeroResponse>> {
        batch::ensure_non_empty(identities, "identities")?;
        if let Some(index) = identities.iter().position(|identity| !identity.has_id()) {
            tracing::debug!(index, "Identity without id in batch");
            return Err(ValidationError::MissingId { index }.into());
        }

        let data = data_or_empty(data);
        let requests = identities
            .iter()
            .map(|identity| self.send(identity.as_wire(), event_name, &data));
        batch::settle_all("identities", requests).await
    }

    /// Record every event in `events` for one user.
    pub async fn track_many(
        &self,
        id: Option<&str>,
        email: Option<&str>,
        events: &[EventRecord],
    ) -> SdkResult<Vec<VeroResponse>> {
        batch::ensure_non_empty(events, "events")?;

        let requests = events
            .iter()
            .map(|event| self.track(id, email, &event.name, event.data.clone()));
        batch::settle_all("events", requests).await
    }

    async fn send(
        &self,
        identity: IdentityRef<'_>,
        event_name: &str,
        data: &Value,
    ) -> SdkResult<VeroResponse> {
        let body = TrackEventRequest {
            auth_token: self.client.auth_token(),
            identity,
            event_name,
            data,
        };
        Ok(self.client.http.post("/events/track", &body).await?)
    }
}
