use super::{query_value, segment, with_query};
use crate::client::CoolifyClient;
use crate::error::Result;
use crate::types::{DeployTarget, Deployment, DeploymentResponse};

impl CoolifyClient {
    /// Deployments currently queued or running.
    pub fn list_deployments(&self) -> Result<Vec<Deployment>> {
        self.get("/deployments")
    }

    pub fn get_deployment(&self, uuid: &str) -> Result<Deployment> {
        self.get(&format!("/deployments/{}", segment(uuid)?))
    }

    /// Deploy every resource carrying a tag, or a single resource by uuid.
    pub fn deploy(&self, target: &DeployTarget, force: bool) -> Result<DeploymentResponse> {
        let (key, value) = target.query_pair();
        let force = if force { "true" } else { "false" };
        self.get(&with_query(
            "/deploy".to_string(),
            [(key, query_value(value)?), ("force", force)],
        ))
    }
}
