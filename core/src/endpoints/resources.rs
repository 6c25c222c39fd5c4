use crate::client::CoolifyClient;
use crate::error::Result;
use crate::types::Resource;

impl CoolifyClient {
    /// Every application, database and service across all servers.
    pub fn list_resources(&self) -> Result<Vec<Resource>> {
        self.get("/resources")
    }
}
