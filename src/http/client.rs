//! Low-level HTTP client: `VeroHttp`.
//!
//! Thin wrapper over `reqwest` with one verb helper per HTTP method. Sub-clients
//! build the payload; this layer sends it with the JSON accept header and maps
//! the outcome into `HttpError`. No retries happen here.

use crate::error::HttpError;
use crate::http::VeroResponse;
use crate::network::ACCEPT_JSON;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::Serialize;
use std::time::Duration;

/// Low-level HTTP client for the Vero REST API.
#[derive(Debug, Clone)]
pub struct VeroHttp {
    base_url: String,
    client: Client,
}

impl VeroHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get(&self, path: &str) -> Result<VeroResponse, HttpError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub(crate) async fn post<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<VeroResponse, HttpError> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<VeroResponse, HttpError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn delete<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<VeroResponse, HttpError> {
        self.request(Method::DELETE, path, Some(body)).await
    }

    async fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<VeroResponse, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, path, "Sending request");

        let mut req = self.client.request(method, &url).header(ACCEPT, ACCEPT_JSON);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        if resp.status().is_success() {
            let body = resp.text().await?;
            return Ok(VeroResponse {
                status,
                content_type,
                body,
            });
        }

        // A rejection keeps its status even when the body cannot be read.
        let body = resp.text().await.unwrap_or_default();
        let response = VeroResponse {
            status,
            content_type,
            body,
        };

        tracing::debug!(status, path, "Request rejected");
        Err(HttpError::Rejected(response))
    }
}
