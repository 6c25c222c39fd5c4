//! Typed blocking client for the Coolify platform-management API.
//!
//! # Overview
//! `CoolifyClient` turns a (method, path, optional body) triple into one
//! authenticated HTTP call and decodes the JSON answer into a typed record.
//! Endpoint methods for applications, databases, services, servers,
//! projects, deployments, teams and the rest are thin wrappers over that
//! single core.
//!
//! # Design
//! - The network sits behind the `Transport` trait. `UreqTransport` is the
//!   default; tests inject a recording double or run against the
//!   `mock-server` crate.
//! - The base address carries the `/api/v1` prefix. Endpoint paths are bare.
//! - Any 2xx is success. Anything else is `ApiError::Api` with the status and
//!   the exact body bytes.
//! - Records are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod client;
pub mod config;
mod endpoints;
pub mod error;
pub mod http;
pub mod types;

pub use client::CoolifyClient;
pub use config::{ClientConfig, API_PREFIX};
pub use error::{ApiError, BoxError, ErrorBody, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use types::*;
