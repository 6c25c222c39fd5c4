//! Deployments.

use serde::{Deserialize, Serialize};

use super::{is_default, null_as_default};

/// One entry of the application deployment queue.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Deployment {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub application_id: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub deployment_uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub pull_request_id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub force_rebuild: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub commit: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_webhook: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_api: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub logs: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub current_process_id: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub restart_only: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub git_type: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub server_id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub application_name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub server_name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub deployment_url: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub destination_id: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub only_this_server: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub rollback: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub commit_message: String,
}
