//! Service records.

use serde::{Deserialize, Serialize};

use super::{is_default, null_as_default};

/// A one-click service (docker-compose based).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Service {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub environment_id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub server_id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub docker_compose_raw: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub docker_compose: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub destination_type: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub destination_id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub connect_to_docker_network: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_container_label_escape_enabled: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_container_label_readonly_enabled: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub config_hash: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub service_type: String,

    // Create-only: the one-click template and where to place it
    #[serde(rename = "type", deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub project_uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub server_uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub environment_name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub environment_uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub destination_uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub instant_deploy: bool,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}
