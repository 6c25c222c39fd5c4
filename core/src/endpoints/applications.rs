use super::{flags, segment, with_query, BulkEnvRequest, CommandRequest};
use crate::client::CoolifyClient;
use crate::error::Result;
use crate::types::{
    Application, CommandResponse, CreateResponse, DeleteOptions, DeploymentResponse,
    EnvironmentVariable, StartOptions,
};

impl CoolifyClient {
    pub fn list_applications(&self) -> Result<Vec<Application>> {
        self.get("/applications")
    }

    pub fn get_application(&self, uuid: &str) -> Result<Application> {
        self.get(&format!("/applications/{}", segment(uuid)?))
    }

    /// Create an application from a public git repository.
    pub fn create_public_application(&self, app: &Application) -> Result<CreateResponse> {
        self.post("/applications/public", app)
    }

    /// Create an application from a private repository through a GitHub App.
    pub fn create_private_github_app_application(
        &self,
        app: &Application,
    ) -> Result<CreateResponse> {
        self.post("/applications/private-github-app", app)
    }

    /// Create an application from a private repository through a deploy key.
    pub fn create_private_deploy_key_application(
        &self,
        app: &Application,
    ) -> Result<CreateResponse> {
        self.post("/applications/private-deploy-key", app)
    }

    pub fn create_dockerfile_application(&self, app: &Application) -> Result<CreateResponse> {
        self.post("/applications/dockerfile", app)
    }

    pub fn create_docker_image_application(&self, app: &Application) -> Result<CreateResponse> {
        self.post("/applications/dockerimage", app)
    }

    pub fn create_docker_compose_application(&self, app: &Application) -> Result<CreateResponse> {
        self.post("/applications/dockercompose", app)
    }

    /// Update the fields set on `app`.
    pub fn update_application(&self, uuid: &str, app: &Application) -> Result<CreateResponse> {
        self.patch(&format!("/applications/{}", segment(uuid)?), app)
    }

    pub fn delete_application(&self, uuid: &str, options: DeleteOptions) -> Result<CreateResponse> {
        let path = format!("/applications/{}", segment(uuid)?);
        self.delete(&with_query(path, flags(&options.query_pairs())))
    }

    /// Start (deploy) an application.
    pub fn start_application(
        &self,
        uuid: &str,
        options: StartOptions,
    ) -> Result<DeploymentResponse> {
        let path = format!("/applications/{}/start", segment(uuid)?);
        self.get(&with_query(path, flags(&options.query_pairs())))
    }

    pub fn stop_application(&self, uuid: &str) -> Result<CreateResponse> {
        self.get(&format!("/applications/{}/stop", segment(uuid)?))
    }

    pub fn restart_application(&self, uuid: &str) -> Result<DeploymentResponse> {
        self.get(&format!("/applications/{}/restart", segment(uuid)?))
    }

    /// Run `command` inside the application's container.
    pub fn execute_application_command(
        &self,
        uuid: &str,
        command: &str,
    ) -> Result<CommandResponse> {
        self.post(
            &format!("/applications/{}/execute", segment(uuid)?),
            &CommandRequest { command },
        )
    }

    pub fn list_application_envs(&self, uuid: &str) -> Result<Vec<EnvironmentVariable>> {
        self.get(&format!("/applications/{}/envs", segment(uuid)?))
    }

    pub fn create_application_env(
        &self,
        app_uuid: &str,
        env: &EnvironmentVariable,
    ) -> Result<CreateResponse> {
        self.post(&format!("/applications/{}/envs", segment(app_uuid)?), env)
    }

    /// Update the variable matching `env.key`.
    pub fn update_application_env(
        &self,
        app_uuid: &str,
        env: &EnvironmentVariable,
    ) -> Result<CreateResponse> {
        self.patch(&format!("/applications/{}/envs", segment(app_uuid)?), env)
    }

    /// Create or update several variables in one call.
    pub fn update_application_envs_bulk(
        &self,
        app_uuid: &str,
        envs: &[EnvironmentVariable],
    ) -> Result<CreateResponse> {
        self.patch(
            &format!("/applications/{}/envs/bulk", segment(app_uuid)?),
            &BulkEnvRequest { data: envs },
        )
    }

    pub fn delete_application_env(&self, app_uuid: &str, env_uuid: &str) -> Result<CreateResponse> {
        self.delete(&format!(
            "/applications/{}/envs/{}",
            segment(app_uuid)?,
            segment(env_uuid)?
        ))
    }
}
