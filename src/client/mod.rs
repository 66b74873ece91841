//! Typed client for the warehouse dispatch backend.
//!
//! One submodule per backend router. Every call is a single request-response
//! round trip: no retry, no idempotency key, no in-flight de-duplication.

mod forklifts;
mod orders;
mod plans;
mod warehouse;

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::DashboardError;

/// HTTP client for the dispatch backend REST surface.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client against `base_url` with a client-level timeout.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DashboardError> {
        let http = Client::builder().timeout(timeout).build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Maps non-2xx responses into [`DashboardError::Api`].
    fn check(response: Response, endpoint: &str) -> Result<Response, DashboardError> {
        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::api(status, endpoint));
        }
        Ok(response)
    }

    pub(crate) async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, DashboardError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut request = self.http.get(self.url(path));
        if let Some(query) = query {
            request = request.query(query);
        }
        let response = Self::check(request.send().await?, path)?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, DashboardError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = Self::check(self.http.post(self.url(path)).json(body).send().await?, path)?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), DashboardError> {
        Self::check(self.http.post(self.url(path)).send().await?, path)?;
        Ok(())
    }

    pub(crate) async fn patch_empty<B, Q>(
        &self,
        path: &str,
        body: Option<&B>,
        query: Option<&Q>,
    ) -> Result<(), DashboardError>
    where
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        let mut request = self.http.patch(self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(query) = query {
            request = request.query(query);
        }
        Self::check(request.send().await?, path)?;
        Ok(())
    }
}
