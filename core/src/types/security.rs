//! Private keys.

use serde::{Deserialize, Serialize};

use super::{is_default, null_as_default};

/// An SSH private key used to reach servers or git remotes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PrivateKey {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub private_key: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_git_related: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub team_id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub updated_at: String,
}
