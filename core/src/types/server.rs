//! Server records.

use serde::{Deserialize, Serialize};

use super::{is_default, null_as_default};

/// A server the platform deploys to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Server {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub ip: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub user: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub port: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub private_key_uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub proxy_type: String,
    /// Free-form proxy settings object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<serde_json::Value>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub high_disk_usage_notification_sent: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub unreachable_notification_sent: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub unreachable_count: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub validation_logs: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub log_drain_notification_sent: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub swarm_cluster: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<ServerSetting>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_build_server: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub instant_validate: bool,
}

/// Per-server settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerSetting {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub concurrent_builds: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub dynamic_timeout: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub force_disabled: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub force_server_cleanup: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_build_server: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_cloudflare_tunnel: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_jump_server: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_logdrain_axiom_enabled: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_logdrain_custom_enabled: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_logdrain_highlight_enabled: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_logdrain_newrelic_enabled: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_metrics_enabled: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_reachable: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_sentinel_enabled: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_swarm_manager: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_swarm_worker: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_usable: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub logdrain_axiom_api_key: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub logdrain_axiom_dataset_name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub logdrain_custom_config: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub logdrain_custom_config_parser: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub logdrain_highlight_project_id: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub logdrain_newrelic_base_uri: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub logdrain_newrelic_license_key: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub sentinel_metrics_history_days: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub sentinel_metrics_refresh_rate_seconds: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub sentinel_token: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub docker_cleanup_frequency: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub docker_cleanup_threshold: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub server_id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub wildcard_domain: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub delete_unused_volumes: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub delete_unused_networks: bool,
}

/// Any deployable resource (application, database or service) as listed by
/// `/resources` and `/servers/{uuid}/resources`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Resource {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub status: String,
}

/// Domains routed to one IP of a server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerDomain {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub ip: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub domains: Vec<String>,
}
