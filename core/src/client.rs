//! Request/response core shared by every endpoint.
//!
//! # Design
//! `CoolifyClient` holds an immutable base URL, the bearer token and its own
//! transport. Every endpoint method funnels through `execute`, which resolves
//! the path, serializes the optional body, attaches the standard headers,
//! performs exactly one transport call and interprets the status. There is
//! no retry, no redirect handling beyond the transport's and no shared
//! mutable state, so one client can serve concurrent callers.
//!
//! The base address carries the API prefix (`.../api/v1`); endpoint paths are
//! bare resource paths joined under it.

use std::io::Read;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};

/// Blocking client for the Coolify API.
#[derive(Clone)]
pub struct CoolifyClient {
    base_url: Url,
    token: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for CoolifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoolifyClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl CoolifyClient {
    /// Client with the default `ureq` transport and no timeout.
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        Self::from_config(ClientConfig::new(base_url, token))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let transport = Arc::new(UreqTransport::new(&config));
        Self::with_transport(&config.base_url, config.token, transport)
    }

    /// Client configured from `COOLIFY_API_HOST` / `COOLIFY_API_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Self::from_config(ClientConfig::from_env()?)
    }

    /// Client that sends every request through `transport`.
    pub fn with_transport(
        base_url: &str,
        token: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        Ok(Self {
            base_url: parse_base(base_url)?,
            token: token.into(),
            transport,
        })
    }

    /// Normalized base URL; always ends in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` against the base URL.
    ///
    /// A path that already starts with the base URL's own path is taken as
    /// given; any other path is joined under the base, leading slash or not.
    /// The result must stay on the base URL's origin.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        let base_path = self.base_url.path();
        let reference = if path.starts_with(base_path) || path == base_path.trim_end_matches('/') {
            path
        } else {
            path.trim_start_matches('/')
        };

        let url = self
            .base_url
            .join(reference)
            .map_err(|e| ApiError::construction(path, e))?;

        if url.origin() != self.base_url.origin() {
            return Err(ApiError::construction(path, "path leaves the base address origin"));
        }
        Ok(url)
    }

    /// Perform one call and decode a successful body into `T`.
    pub fn execute<B, T>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch(method, path, body)?;
        decode(response)
    }

    /// Like `execute`, writing into `target`. `target` is only touched when
    /// the call succeeds and the body decodes.
    pub fn execute_into<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        target: &mut T,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        *target = self.execute(method, path, body)?;
        Ok(())
    }

    /// Perform one call without a response destination. A successful body is
    /// dropped unread.
    pub fn send<B>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch(method, path, body).map(drop)
    }

    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(HttpMethod::Get, path, None::<&()>)
    }

    pub fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(HttpMethod::Post, path, Some(body))
    }

    pub fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(HttpMethod::Patch, path, Some(body))
    }

    pub fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(HttpMethod::Delete, path, None::<&()>)
    }

    /// Build, send and status-check one request. Returns the still-unread
    /// response on success.
    fn dispatch<B>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<HttpResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.resolve(path)?;

        let mut headers = Vec::with_capacity(3);
        let body = match body {
            Some(payload) => {
                let bytes = serde_json::to_vec(payload).map_err(ApiError::Serialization)?;
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(bytes)
            }
            None => None,
        };
        headers.push(("Accept".to_string(), "application/json".to_string()));
        headers.push(("Authorization".to_string(), format!("Bearer {}", self.token)));

        debug!(%method, %url, has_body = body.is_some(), "sending request");

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url: url.clone(),
                headers,
                body,
            })
            .map_err(ApiError::Transport)?;

        debug!(%method, %url, status = response.status, "received response");

        if response.is_success() {
            return Ok(response);
        }

        let status = response.status;
        let body = read_body(response)?;
        Err(ApiError::Api { status, body })
    }
}

/// Require an absolute http(s) URL usable as a base, normalized to end in `/`.
fn parse_base(address: &str) -> Result<Url> {
    let mut url = Url::parse(address).map_err(|e| ApiError::configuration(address, e))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::configuration(
            address,
            "expected an absolute http(s) URL",
        ));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(ApiError::configuration(
            address,
            "base address must not carry a query or fragment",
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn read_body(mut response: HttpResponse) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    response
        .body
        .read_to_end(&mut bytes)
        .map_err(ApiError::ResponseRead)?;
    Ok(bytes)
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T> {
    let bytes = read_body(response)?;
    trace!(len = bytes.len(), "decoding response body");
    serde_json::from_slice(&bytes).map_err(ApiError::Decode)
}
