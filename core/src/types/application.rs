//! Application records.

use serde::{Deserialize, Serialize};

use super::{is_default, null_as_default};

/// An application managed by the platform.
///
/// The same shape is returned by the read endpoints and accepted by the
/// create/update endpoints; only the fields that are set are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Application {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_project_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub description: String,

    // Placement, required by the create endpoints
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

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fqdn: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub config_hash: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub git_repository: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub git_branch: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub git_commit_sha: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_full_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_registry_image_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_registry_image_tag: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub build_pack: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub static_image: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub install_command: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub build_command: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub start_command: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub ports_exposes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ports_mappings: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub base_directory: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub publish_directory: String,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub health_check_enabled: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub health_check_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_port: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_host: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub health_check_method: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub health_check_return_code: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub health_check_scheme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_response_text: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub health_check_interval: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub health_check_timeout: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub health_check_retries: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub health_check_start_period: i64,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub limits_memory: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub limits_memory_swap: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub limits_memory_swappiness: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub limits_memory_reservation: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub limits_cpus: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits_cpuset: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub limits_cpu_shares: i64,

    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub preview_url_template: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub destination_type: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub destination_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_id: Option<i64>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub environment_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dockerfile: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub dockerfile_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_labels: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dockerfile_target_build: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_webhook_secret_github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_webhook_secret_gitlab: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_webhook_secret_bitbucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manual_webhook_secret_gitea: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub docker_compose_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_compose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_compose_raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_compose_domains: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_compose_custom_start_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_compose_custom_build_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swarm_replicas: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swarm_placement_constraints: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_docker_run_options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_deployment_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_deployment_command_container: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_deployment_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_deployment_command_container: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_paths: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub custom_healthcheck_found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub compose_parsing_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_nginx_configuration: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub domains: String,
}

/// An environment variable attached to an application or service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EnvironmentVariable {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub key: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub value: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_preview: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_build_time: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_literal: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_multiline: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_shown_once: bool,
}
