use super::segment;
use crate::client::CoolifyClient;
use crate::error::Result;
use crate::types::{CreateResponse, Destination};

impl CoolifyClient {
    pub fn list_destinations(&self) -> Result<Vec<Destination>> {
        self.get("/destinations")
    }

    pub fn get_destination(&self, uuid: &str) -> Result<Destination> {
        self.get(&format!("/destinations/{}", segment(uuid)?))
    }

    pub fn create_destination(&self, destination: &Destination) -> Result<CreateResponse> {
        self.post("/destinations", destination)
    }

    pub fn update_destination(
        &self,
        uuid: &str,
        destination: &Destination,
    ) -> Result<CreateResponse> {
        self.patch(&format!("/destinations/{}", segment(uuid)?), destination)
    }

    pub fn delete_destination(&self, uuid: &str) -> Result<CreateResponse> {
        self.delete(&format!("/destinations/{}", segment(uuid)?))
    }
}
