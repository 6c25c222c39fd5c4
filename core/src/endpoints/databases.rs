use super::{flags, segment, with_query};
use crate::client::CoolifyClient;
use crate::error::Result;
use crate::types::{CreateResponse, Database, DeleteOptions};

impl CoolifyClient {
    pub fn list_databases(&self) -> Result<Vec<Database>> {
        self.get("/databases")
    }

    pub fn get_database(&self, uuid: &str) -> Result<Database> {
        self.get(&format!("/databases/{}", segment(uuid)?))
    }

    pub fn create_postgres_database(&self, db: &Database) -> Result<CreateResponse> {
        self.post("/databases/postgresql", db)
    }

    pub fn create_clickhouse_database(&self, db: &Database) -> Result<CreateResponse> {
        self.post("/databases/clickhouse", db)
    }

    pub fn create_dragonfly_database(&self, db: &Database) -> Result<CreateResponse> {
        self.post("/databases/dragonfly", db)
    }

    pub fn create_redis_database(&self, db: &Database) -> Result<CreateResponse> {
        self.post("/databases/redis", db)
    }

    pub fn create_keydb_database(&self, db: &Database) -> Result<CreateResponse> {
        self.post("/databases/keydb", db)
    }

    pub fn create_mariadb_database(&self, db: &Database) -> Result<CreateResponse> {
        self.post("/databases/mariadb", db)
    }

    pub fn create_mongodb_database(&self, db: &Database) -> Result<CreateResponse> {
        self.post("/databases/mongodb", db)
    }

    pub fn create_mysql_database(&self, db: &Database) -> Result<CreateResponse> {
        self.post("/databases/mysql", db)
    }

    pub fn update_database(&self, uuid: &str, db: &Database) -> Result<CreateResponse> {
        self.patch(&format!("/databases/{}", segment(uuid)?), db)
    }

    pub fn delete_database(&self, uuid: &str, options: DeleteOptions) -> Result<CreateResponse> {
        let path = format!("/databases/{}", segment(uuid)?);
        self.delete(&with_query(path, flags(&options.query_pairs())))
    }
}
