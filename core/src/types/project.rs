//! Projects and their environments.

use serde::{Deserialize, Serialize};

use super::{is_default, null_as_default};

/// A project groups environments and the resources deployed in them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub environments: Vec<Environment>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub updated_at: String,
}

/// An environment inside a project (production, staging, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Environment {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub project_id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub description: String,
}
