//! Database records.

use serde::{Deserialize, Serialize};

use super::{is_default, null_as_default};

/// A standalone database.
///
/// Engine-specific credentials and settings share one record; the create
/// endpoint for an engine only reads the fields of that engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Database {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub uuid: String,
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
    pub name: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub is_public: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub public_port: i64,
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
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub limits_cpuset: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub limits_cpu_shares: i64,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub instant_deploy: bool,

    // PostgreSQL
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub postgres_user: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub postgres_password: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub postgres_db: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub postgres_initdb_args: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub postgres_host_auth_method: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub postgres_conf: String,

    // ClickHouse
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub clickhouse_admin_user: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub clickhouse_admin_password: String,

    // DragonFly
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub dragonfly_password: String,

    // Redis
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub redis_password: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub redis_conf: String,

    // KeyDB
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub keydb_password: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub keydb_conf: String,

    // MariaDB
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub mariadb_conf: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub mariadb_root_password: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub mariadb_user: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub mariadb_password: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub mariadb_database: String,

    // MongoDB
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub mongo_conf: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub mongo_initdb_root_username: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub mongo_initdb_root_password: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub mongo_initdb_database: String,

    // MySQL
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub mysql_root_password: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub mysql_password: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub mysql_user: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub mysql_database: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub mysql_conf: String,
}
