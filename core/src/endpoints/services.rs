use super::{flags, segment, with_query, CommandRequest};
use crate::client::CoolifyClient;
use crate::error::Result;
use crate::types::{CommandResponse, CreateResponse, DeleteOptions, EnvironmentVariable, Service};

impl CoolifyClient {
    pub fn list_services(&self) -> Result<Vec<Service>> {
        self.get("/services")
    }

    pub fn get_service(&self, uuid: &str) -> Result<Service> {
        self.get(&format!("/services/{}", segment(uuid)?))
    }

    /// Create a one-click service.
    pub fn create_service(&self, service: &Service) -> Result<CreateResponse> {
        self.post("/services", service)
    }

    pub fn update_service(&self, uuid: &str, service: &Service) -> Result<CreateResponse> {
        self.patch(&format!("/services/{}", segment(uuid)?), service)
    }

    pub fn delete_service(&self, uuid: &str, options: DeleteOptions) -> Result<CreateResponse> {
        let path = format!("/services/{}", segment(uuid)?);
        self.delete(&with_query(path, flags(&options.query_pairs())))
    }

    pub fn start_service(&self, uuid: &str) -> Result<CreateResponse> {
        self.get(&format!("/services/{}/start", segment(uuid)?))
    }

    pub fn stop_service(&self, uuid: &str) -> Result<CreateResponse> {
        self.get(&format!("/services/{}/stop", segment(uuid)?))
    }

    pub fn restart_service(&self, uuid: &str) -> Result<CreateResponse> {
        self.get(&format!("/services/{}/restart", segment(uuid)?))
    }

    /// Run `command` inside the service's container.
    pub fn execute_service_command(&self, uuid: &str, command: &str) -> Result<CommandResponse> {
        self.post(
            &format!("/services/{}/execute", segment(uuid)?),
            &CommandRequest { command },
        )
    }

    pub fn list_service_envs(&self, uuid: &str) -> Result<Vec<EnvironmentVariable>> {
        self.get(&format!("/services/{}/envs", segment(uuid)?))
    }

    pub fn create_service_env(
        &self,
        service_uuid: &str,
        env: &EnvironmentVariable,
    ) -> Result<CreateResponse> {
        self.post(&format!("/services/{}/envs", segment(service_uuid)?), env)
    }

    pub fn update_service_env(
        &self,
        service_uuid: &str,
        env: &EnvironmentVariable,
    ) -> Result<CreateResponse> {
        self.patch(&format!("/services/{}/envs", segment(service_uuid)?), env)
    }

    pub fn delete_service_env(&self, service_uuid: &str, env_uuid: &str) -> Result<CreateResponse> {
        self.delete(&format!(
            "/services/{}/envs/{}",
            segment(service_uuid)?,
            segment(env_uuid)?
        ))
    }
}
