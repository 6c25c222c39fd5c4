//! Teams and members.

use serde::{Deserialize, Serialize};

use super::{is_default, null_as_default};

/// A team and, when expanded, its members.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Team {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub personal_team: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub show_boarding: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub custom_server_limit: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub members: Vec<User>,
}

/// A platform user as listed among team members.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified_at: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub two_factor_confirmed_at: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub force_password_reset: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub marketing_emails: bool,
}
