use super::segment;
use crate::client::CoolifyClient;
use crate::error::Result;
use crate::types::{CreateResponse, Resource, Server, ServerDomain};

impl CoolifyClient {
    pub fn list_servers(&self) -> Result<Vec<Server>> {
        self.get("/servers")
    }

    pub fn get_server(&self, uuid: &str) -> Result<Server> {
        self.get(&format!("/servers/{}", segment(uuid)?))
    }

    pub fn create_server(&self, server: &Server) -> Result<CreateResponse> {
        self.post("/servers", server)
    }

    pub fn update_server(&self, uuid: &str, server: &Server) -> Result<CreateResponse> {
        self.patch(&format!("/servers/{}", segment(uuid)?), server)
    }

    pub fn delete_server(&self, uuid: &str) -> Result<CreateResponse> {
        self.delete(&format!("/servers/{}", segment(uuid)?))
    }

    /// Queue a connectivity and docker check of the server.
    pub fn validate_server(&self, uuid: &str) -> Result<CreateResponse> {
        self.get(&format!("/servers/{}/validate", segment(uuid)?))
    }

    pub fn get_server_resources(&self, uuid: &str) -> Result<Vec<Resource>> {
        self.get(&format!("/servers/{}/resources", segment(uuid)?))
    }

    pub fn get_server_domains(&self, uuid: &str) -> Result<Vec<ServerDomain>> {
        self.get(&format!("/servers/{}/domains", segment(uuid)?))
    }
}
