use super::segment;
use crate::client::CoolifyClient;
use crate::error::Result;
use crate::types::{CreateResponse, PrivateKey};

impl CoolifyClient {
    pub fn list_private_keys(&self) -> Result<Vec<PrivateKey>> {
        self.get("/security/keys")
    }

    pub fn get_private_key(&self, uuid: &str) -> Result<PrivateKey> {
        self.get(&format!("/security/keys/{}", segment(uuid)?))
    }

    pub fn create_private_key(&self, key: &PrivateKey) -> Result<CreateResponse> {
        self.post("/security/keys", key)
    }

    pub fn delete_private_key(&self, uuid: &str) -> Result<CreateResponse> {
        self.delete(&format!("/security/keys/{}", segment(uuid)?))
    }
}
