use super::segment;
use crate::client::CoolifyClient;
use crate::error::Result;
use crate::types::{Team, User};

impl CoolifyClient {
    pub fn list_teams(&self) -> Result<Vec<Team>> {
        self.get("/teams")
    }

    pub fn get_team(&self, id: &str) -> Result<Team> {
        self.get(&format!("/teams/{}", segment(id)?))
    }

    pub fn get_team_members(&self, id: &str) -> Result<Vec<User>> {
        self.get(&format!("/teams/{}/members", segment(id)?))
    }

    /// The team the token belongs to.
    pub fn get_current_team(&self) -> Result<Team> {
        self.get("/teams/current")
    }

    pub fn get_current_team_members(&self) -> Result<Vec<User>> {
        self.get("/teams/current/members")
    }
}
