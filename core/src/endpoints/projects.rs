use super::segment;
use crate::client::CoolifyClient;
use crate::error::Result;
use crate::types::{CreateResponse, Project};

impl CoolifyClient {
    pub fn list_projects(&self) -> Result<Vec<Project>> {
        self.get("/projects")
    }

    pub fn get_project(&self, uuid: &str) -> Result<Project> {
        self.get(&format!("/projects/{}", segment(uuid)?))
    }

    pub fn create_project(&self, project: &Project) -> Result<CreateResponse> {
        self.post("/projects", project)
    }

    pub fn update_project(&self, uuid: &str, project: &Project) -> Result<CreateResponse> {
        self.patch(&format!("/projects/{}", segment(uuid)?), project)
    }

    pub fn delete_project(&self, uuid: &str) -> Result<CreateResponse> {
        self.delete(&format!("/projects/{}", segment(uuid)?))
    }
}
