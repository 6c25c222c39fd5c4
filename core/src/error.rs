//! Error types for the Coolify API client.
//!
//! # Design
//! Variants are split by where the call failed: before the request left the
//! process (`Configuration`, `RequestConstruction`, `Serialization`), on the
//! wire (`Transport`), at the server (`Api`), or while reading what came back
//! (`ResponseRead`, `Decode`). The server's error body is kept as the raw
//! bytes it sent so callers can inspect platform-specific error schemas
//! themselves, even when a proxy answers with something that is not UTF-8.

use std::borrow::Cow;

use serde::Deserialize;
use thiserror::Error;

/// Boxed cause carried by transport failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type using `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors returned by `CoolifyClient`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base address is not a usable absolute URL, or a configuration
    /// value is missing or malformed.
    #[error("invalid configuration for {address:?}: {reason}")]
    Configuration { address: String, reason: String },

    /// The request path could not be turned into a URL.
    #[error("cannot build request for {path:?}: {reason}")]
    RequestConstruction { path: String, reason: String },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The server answered with a status outside 200..300.
    #[error("API error: {}, status code: {status}", String::from_utf8_lossy(.body))]
    Api { status: u16, body: Vec<u8> },

    /// The response body could not be read.
    #[error("error reading response body: {0}")]
    ResponseRead(#[source] std::io::Error),

    /// A success body did not match the expected shape.
    #[error("deserialization failed: {0}")]
    Decode(#[source] serde_json::Error),
}

/// The `{"message": "..."}` shape the platform uses for most error bodies.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

impl ApiError {
    pub(crate) fn configuration(address: impl Into<String>, reason: impl ToString) -> Self {
        ApiError::Configuration {
            address: address.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn construction(path: impl Into<String>, reason: impl ToString) -> Self {
        ApiError::RequestConstruction {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// HTTP status of an `Api` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw body bytes of an `Api` error, exactly as received.
    pub fn body(&self) -> Option<&[u8]> {
        match self {
            ApiError::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Body of an `Api` error as text. Invalid UTF-8 sequences are replaced
    /// with U+FFFD; use `body` for the exact bytes.
    pub fn body_text(&self) -> Option<Cow<'_, str>> {
        self.body().map(String::from_utf8_lossy)
    }

    /// The `message` field of an `Api` error body, when the body is the
    /// platform's usual `{"message": ...}` object.
    pub fn message(&self) -> Option<String> {
        let body = self.body()?;
        serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .map(|b| b.message)
            .filter(|m| !m.is_empty())
    }

    /// True when the request never left the process.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ApiError::Configuration { .. }
                | ApiError::RequestConstruction { .. }
                | ApiError::Serialization(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
