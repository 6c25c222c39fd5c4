//! Resource records and acknowledgement shapes for the Coolify API.
//!
//! # Design
//! Records are shared between reads and writes. Every record decodes with
//! `#[serde(default)]`, so fields the server leaves out come back as their
//! zero value, and every field is skipped on serialization while empty, so a
//! create or update body only carries what the caller set. Nullable platform
//! fields are `Option`; any other field that arrives as `null` also decodes
//! to its zero value.

mod application;
mod database;
mod deployment;
mod destination;
mod project;
mod security;
mod server;
mod service;
mod team;

use serde::{Deserialize, Deserializer, Serialize};

pub use application::{Application, EnvironmentVariable};
pub use database::Database;
pub use deployment::Deployment;
pub use destination::Destination;
pub use project::{Environment, Project};
pub use security::PrivateKey;
pub use server::{Resource, Server, ServerDomain, ServerSetting};
pub use service::Service;
pub use team::{Team, User};

pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Decode `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Acknowledgement for create, update, delete and most lifecycle calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CreateResponse {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub message: String,
}

/// Acknowledgement for calls that queue a deployment.
///
/// Starting a single application fills `deployment_uuid`; a tag or uuid
/// trigger lists one entry per queued resource in `deployments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DeploymentResponse {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub deployment_uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub deployments: Vec<QueuedDeployment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QueuedDeployment {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub resource_uuid: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub deployment_uuid: String,
}

/// Output of a command run inside a container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CommandResponse {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub response: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MessageResponse {
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "is_default")]
    pub message: String,
}

/// Cleanup flags for deleting an application, database or service.
///
/// All four flags are always sent, `false` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOptions {
    pub delete_configurations: bool,
    pub delete_volumes: bool,
    pub docker_cleanup: bool,
    pub delete_connected_networks: bool,
}

impl Default for DeleteOptions {
    /// Everything is cleaned up, matching the platform's own defaults.
    fn default() -> Self {
        Self {
            delete_configurations: true,
            delete_volumes: true,
            docker_cleanup: true,
            delete_connected_networks: true,
        }
    }
}

impl DeleteOptions {
    /// Remove the resource only; keep volumes, configuration and networks.
    pub fn keep_everything() -> Self {
        Self {
            delete_configurations: false,
            delete_volumes: false,
            docker_cleanup: false,
            delete_connected_networks: false,
        }
    }

    pub(crate) fn query_pairs(&self) -> [(&'static str, bool); 4] {
        [
            ("delete_configurations", self.delete_configurations),
            ("delete_connected_networks", self.delete_connected_networks),
            ("delete_volumes", self.delete_volumes),
            ("docker_cleanup", self.docker_cleanup),
        ]
    }
}

/// Flags for starting (deploying) an application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartOptions {
    /// Rebuild without cache.
    pub force: bool,
    /// Skip the deployment queue.
    pub instant_deploy: bool,
}

impl StartOptions {
    pub(crate) fn query_pairs(&self) -> [(&'static str, bool); 2] {
        [("force", self.force), ("instant_deploy", self.instant_deploy)]
    }
}

/// What `deploy` should deploy: every resource carrying a tag, or one
/// resource by uuid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployTarget {
    Tag(String),
    Uuid(String),
}

impl DeployTarget {
    pub(crate) fn query_pair(&self) -> (&'static str, &str) {
        match self {
            DeployTarget::Tag(tag) => ("tag", tag),
            DeployTarget::Uuid(uuid) => ("uuid", uuid),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use serde::de::{self, DeserializeOwned, Visitor};

    use super::*;

    /// Wire names of a record's fields, as its derived `Deserialize` lists them.
    fn field_names<T: DeserializeOwned>() -> &'static [&'static str] {
        struct Capture<'a>(&'a mut &'static [&'static str]);

        impl<'de> Deserializer<'de> for Capture<'_> {
            type Error = de::value::Error;

            fn deserialize_any<V: Visitor<'de>>(self, _: V) -> Result<V::Value, Self::Error> {
                Err(de::Error::custom("expected a struct"))
            }

            fn deserialize_struct<V: Visitor<'de>>(
                self,
                _: &'static str,
                fields: &'static [&'static str],
                _: V,
            ) -> Result<V::Value, Self::Error> {
                *self.0 = fields;
                Err(de::Error::custom("field names captured"))
            }

            serde::forward_to_deserialize_any! {
                bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
                bytes byte_buf option unit unit_struct newtype_struct seq tuple
                tuple_struct map enum identifier ignored_any
            }
        }

        let mut fields: &'static [&'static str] = &[];
        let _ = T::deserialize(Capture(&mut fields));
        fields
    }

    /// Every field sent as `null` must decode, and to the zero value.
    fn assert_nulls_decode_to_default<T>()
    where
        T: DeserializeOwned + Default + PartialEq + Debug,
    {
        let fields = field_names::<T>();
        assert!(!fields.is_empty(), "{}", std::any::type_name::<T>());

        let nulls: serde_json::Map<String, serde_json::Value> = fields
            .iter()
            .map(|name| (name.to_string(), serde_json::Value::Null))
            .collect();
        let decoded: T = serde_json::from_value(serde_json::Value::Object(nulls))
            .unwrap_or_else(|e| panic!("{}: {e}", std::any::type_name::<T>()));
        assert_eq!(decoded, T::default(), "{}", std::any::type_name::<T>());
    }

    #[test]
    fn null_in_any_field_decodes_to_default() {
        assert_nulls_decode_to_default::<Application>();
        assert_nulls_decode_to_default::<EnvironmentVariable>();
        assert_nulls_decode_to_default::<Database>();
        assert_nulls_decode_to_default::<Deployment>();
        assert_nulls_decode_to_default::<Destination>();
        assert_nulls_decode_to_default::<Project>();
        assert_nulls_decode_to_default::<Environment>();
        assert_nulls_decode_to_default::<PrivateKey>();
        assert_nulls_decode_to_default::<Server>();
        assert_nulls_decode_to_default::<ServerSetting>();
        assert_nulls_decode_to_default::<Resource>();
        assert_nulls_decode_to_default::<ServerDomain>();
        assert_nulls_decode_to_default::<Service>();
        assert_nulls_decode_to_default::<Team>();
        assert_nulls_decode_to_default::<User>();
        assert_nulls_decode_to_default::<CreateResponse>();
        assert_nulls_decode_to_default::<DeploymentResponse>();
        assert_nulls_decode_to_default::<QueuedDeployment>();
        assert_nulls_decode_to_default::<CommandResponse>();
        assert_nulls_decode_to_default::<MessageResponse>();
    }

    #[test]
    fn null_description_keeps_the_other_fields() {
        let project: Project =
            serde_json::from_str(r#"{"uuid":"p1","name":"demo","description":null}"#).unwrap();
        assert_eq!(project.uuid, "p1");
        assert_eq!(project.name, "demo");
        assert!(project.description.is_empty());

        let server: Server =
            serde_json::from_str(r#"{"uuid":"s1","port":null,"is_build_server":null}"#).unwrap();
        assert_eq!(server.port, 0);
        assert!(!server.is_build_server);
    }

    #[test]
    fn empty_fields_are_not_serialized() {
        let project = Project {
            name: "demo".to_string(),
            ..Project::default()
        };
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json, serde_json::json!({"name": "demo"}));
    }

    #[test]
    fn false_and_zero_are_omitted_but_set_values_kept() {
        let db = Database {
            name: "pg".to_string(),
            is_public: true,
            public_port: 5433,
            instant_deploy: false,
            ..Database::default()
        };
        let json = serde_json::to_value(&db).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "pg", "is_public": true, "public_port": 5433})
        );
    }

    #[test]
    fn application_round_trips_set_fields() {
        let app = Application {
            name: "web".to_string(),
            git_repository: "https://github.com/example/web".to_string(),
            git_branch: "main".to_string(),
            build_pack: "nixpacks".to_string(),
            ports_exposes: "3000".to_string(),
            health_check_enabled: true,
            fqdn: Some("https://web.example.test".to_string()),
            swarm_replicas: Some(2),
            ..Application::default()
        };
        let json = serde_json::to_string(&app).unwrap();
        let back: Application = serde_json::from_str(&json).unwrap();
        assert_eq!(back, app);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 8);
        assert!(value.get("dockerfile").is_none());
    }

    #[test]
    fn records_decode_with_unknown_and_missing_fields() {
        let server: Server = serde_json::from_str(
            r#"{"uuid":"s1","name":"edge","ip":"10.0.0.2","port":22,
                "settings":{"is_reachable":true,"concurrent_builds":2},
                "proxy":{"type":"traefik"},"is_coolify_host":false}"#,
        )
        .unwrap();
        assert_eq!(server.uuid, "s1");
        assert_eq!(server.port, 22);
        assert!(server.description.is_empty());
        let settings = server.settings.unwrap();
        assert!(settings.is_reachable);
        assert_eq!(settings.concurrent_builds, 2);
        assert_eq!(server.proxy.unwrap()["type"], "traefik");
    }

    #[test]
    fn nullable_fields_decode_from_null() {
        let app: Application =
            serde_json::from_str(r#"{"uuid":"a1","fqdn":null,"deleted_at":null}"#).unwrap();
        assert_eq!(app.uuid, "a1");
        assert!(app.fqdn.is_none());
        assert!(app.deleted_at.is_none());
    }

    #[test]
    fn resource_type_field_is_renamed() {
        let resource: Resource =
            serde_json::from_str(r#"{"uuid":"r1","type":"application","status":"running:healthy"}"#)
                .unwrap();
        assert_eq!(resource.kind, "application");
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["type"], "application");
    }

    #[test]
    fn team_members_decode_as_users() {
        let team: Team = serde_json::from_str(
            r#"{"id":0,"name":"Root Team","personal_team":false,
                "members":[{"id":1,"name":"Admin","email":"admin@example.test","email_verified_at":null}]}"#,
        )
        .unwrap();
        assert_eq!(team.members.len(), 1);
        assert_eq!(team.members[0].email, "admin@example.test");
        assert!(team.members[0].email_verified_at.is_none());
    }

    #[test]
    fn delete_options_default_to_full_cleanup() {
        let pairs = DeleteOptions::default().query_pairs();
        assert!(pairs.iter().all(|(_, v)| *v));
        let pairs = DeleteOptions::keep_everything().query_pairs();
        assert!(pairs.iter().all(|(_, v)| !*v));
    }

    #[test]
    fn acknowledgements_tolerate_missing_fields() {
        let ack: CreateResponse = serde_json::from_str(r#"{"message":"Deleted."}"#).unwrap();
        assert_eq!(ack.message, "Deleted.");
        assert!(ack.uuid.is_empty());

        let dep: DeploymentResponse =
            serde_json::from_str(r#"{"message":"Queued.","deployment_uuid":"d1"}"#).unwrap();
        assert_eq!(dep.deployment_uuid, "d1");
        assert!(dep.deployments.is_empty());

        let triggered: DeploymentResponse = serde_json::from_str(
            r#"{"deployments":[{"message":"Application web deployment queued.",
                "resource_uuid":"a1","deployment_uuid":"d2"}]}"#,
        )
        .unwrap();
        assert_eq!(triggered.deployments.len(), 1);
        assert_eq!(triggered.deployments[0].resource_uuid, "a1");
    }
}
