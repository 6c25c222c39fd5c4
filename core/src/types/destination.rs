//! Deployment destinations.

use serde::{Deserialize, Serialize};

use super::{is_default, null_as_default};

/// A docker network on a server that resources are deployed into.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Destination {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub server_uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub engine_type: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub network_uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub network_name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub engine: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub resource_count: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub updated_at: String,
}
