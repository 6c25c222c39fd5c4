//! In-memory fake of the Coolify API used by the client's integration tests.
//!
//! Covers projects, private keys and the application lifecycle under
//! `/api/v1`. Every route requires `Authorization: Bearer <token>`. Errors
//! use the platform's `{"message": "..."}` body.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const VERSION: &str = "4.0.0-beta.360";

/// Flags every delete request must carry, with a literal `true`/`false`.
pub const DELETE_FLAGS: [&str; 4] = [
    "delete_configurations",
    "delete_connected_networks",
    "delete_volumes",
    "docker_cleanup",
];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub description: String,
    pub environments: Vec<Environment>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Environment {
    pub id: i64,
    pub name: String,
    pub project_id: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PrivateKey {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub description: String,
    pub private_key: String,
    pub is_git_related: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub uuid: String,
    pub name: String,
    pub description: String,
    pub project_uuid: String,
    pub environment_id: i64,
    pub fqdn: Option<String>,
    pub git_repository: String,
    pub git_branch: String,
    pub build_pack: String,
    pub ports_exposes: String,
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    pub uuid: String,
    pub key: String,
    pub value: String,
    pub is_preview: bool,
    pub is_build_time: bool,
    pub is_literal: bool,
}

#[derive(Deserialize)]
pub struct ProjectInput {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct PrivateKeyInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub private_key: Option<String>,
}

#[derive(Deserialize)]
pub struct ApplicationInput {
    pub project_uuid: Option<String>,
    pub server_uuid: Option<String>,
    pub environment_name: Option<String>,
    pub git_repository: Option<String>,
    pub git_branch: Option<String>,
    pub build_pack: Option<String>,
    pub ports_exposes: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub domains: Option<String>,
}

#[derive(Deserialize)]
pub struct EnvInput {
    pub key: Option<String>,
    pub value: Option<String>,
    pub is_preview: Option<bool>,
    pub is_build_time: Option<bool>,
    pub is_literal: Option<bool>,
}

#[derive(Deserialize)]
pub struct BulkEnvInput {
    pub data: Vec<EnvInput>,
}

#[derive(Deserialize)]
pub struct CommandInput {
    pub command: Option<String>,
}

#[derive(Default)]
pub struct Store {
    next_id: i64,
    projects: HashMap<String, Project>,
    private_keys: HashMap<String, PrivateKey>,
    applications: HashMap<String, Application>,
    /// Keyed by application uuid.
    envs: HashMap<String, Vec<EnvironmentVariable>>,
}

impl Store {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct AppState {
    db: Db,
    token: Arc<str>,
}

/// An error answered as `{"message": ...}` with its status.
#[derive(Debug)]
pub struct ApiFailure {
    status: StatusCode,
    message: String,
}

impl ApiFailure {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn not_found(what: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("{what} not found."))
    }

    fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "message": self.message }))).into_response()
    }
}

type ApiResult<T> = Result<T, ApiFailure>;

pub fn app(token: &str) -> Router {
    let state = AppState {
        db: Db::default(),
        token: Arc::from(token),
    };

    let api = Router::new()
        .route("/version", get(version))
        .route("/projects", get(list_projects).post(create_project))
        .route(
            "/projects/{uuid}",
            get(get_project).patch(update_project).delete(delete_project),
        )
        .route("/security/keys", get(list_keys).post(create_key))
        .route("/security/keys/{uuid}", get(get_key).delete(delete_key))
        .route("/applications", get(list_applications))
        .route("/applications/public", post(create_public_application))
        .route(
            "/applications/{uuid}",
            get(get_application)
                .patch(update_application)
                .delete(delete_application),
        )
        .route("/applications/{uuid}/start", get(start_application))
        .route("/applications/{uuid}/stop", get(stop_application))
        .route("/applications/{uuid}/restart", get(restart_application))
        .route("/applications/{uuid}/execute", post(execute_command))
        .route(
            "/applications/{uuid}/envs",
            get(list_envs).post(create_env).patch(update_env),
        )
        .route("/applications/{uuid}/envs/bulk", patch(bulk_update_envs))
        .route("/applications/{uuid}/envs/{env_uuid}", delete(delete_env))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token))
        .with_state(state);

    Router::new().nest("/api/v1", api)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

async fn require_token(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let expected = format!("Bearer {}", state.token);
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if presented != Some(expected.as_str()) {
        return ApiFailure::new(StatusCode::UNAUTHORIZED, "Unauthenticated.").into_response();
    }
    next.run(request).await
}

fn new_uuid() -> String {
    Uuid::new_v4().to_string()
}

fn required(value: Option<String>, field: &str) -> ApiResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiFailure::invalid(format!("The {field} field is required.")))
}

fn check_delete_flags(query: &HashMap<String, String>) -> ApiResult<()> {
    for key in DELETE_FLAGS {
        match query.get(key).map(String::as_str) {
            Some("true" | "false") => {}
            Some(other) => {
                return Err(ApiFailure::bad_request(format!(
                    "Invalid value {other:?} for {key}."
                )))
            }
            None => {
                return Err(ApiFailure::bad_request(format!(
                    "Missing query parameter {key}."
                )))
            }
        }
    }
    Ok(())
}

async fn version() -> Json<&'static str> {
    Json(VERSION)
}

// Projects

async fn list_projects(State(AppState { db, .. }): State<AppState>) -> Json<Vec<Project>> {
    let db = db.read().await;
    Json(db.projects.values().cloned().collect())
}

async fn create_project(
    State(AppState { db, .. }): State<AppState>,
    Json(input): Json<ProjectInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let name = required(input.name, "name")?;
    let mut db = db.write().await;
    let id = db.next_id();
    let environment = Environment {
        id: db.next_id(),
        name: "production".to_string(),
        project_id: id,
    };
    let project = Project {
        id,
        uuid: new_uuid(),
        name,
        description: input.description.unwrap_or_default(),
        environments: vec![environment],
    };
    let uuid = project.uuid.clone();
    db.projects.insert(uuid.clone(), project);
    Ok((StatusCode::CREATED, Json(json!({ "uuid": uuid }))))
}

async fn get_project(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<Project>> {
    let db = db.read().await;
    db.projects
        .get(&uuid)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiFailure::not_found("Project"))
}

async fn update_project(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
    Json(input): Json<ProjectInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let mut db = db.write().await;
    let project = db
        .projects
        .get_mut(&uuid)
        .ok_or_else(|| ApiFailure::not_found("Project"))?;
    if let Some(name) = input.name {
        project.name = name;
    }
    if let Some(description) = input.description {
        project.description = description;
    }
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "uuid": project.uuid,
            "name": project.name,
            "description": project.description,
        })),
    ))
}

async fn delete_project(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<Value>> {
    let mut db = db.write().await;
    if !db.projects.contains_key(&uuid) {
        return Err(ApiFailure::not_found("Project"));
    }
    if db.applications.values().any(|a| a.project_uuid == uuid) {
        return Err(ApiFailure::bad_request(
            "Project has resources, so it cannot be deleted.",
        ));
    }
    db.projects.remove(&uuid);
    Ok(Json(json!({ "message": "Project deleted." })))
}

// Private keys

async fn list_keys(State(AppState { db, .. }): State<AppState>) -> Json<Vec<PrivateKey>> {
    let db = db.read().await;
    Json(db.private_keys.values().cloned().collect())
}

async fn create_key(
    State(AppState { db, .. }): State<AppState>,
    Json(input): Json<PrivateKeyInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let private_key = required(input.private_key, "private_key")?;
    let mut db = db.write().await;
    let key = PrivateKey {
        id: db.next_id(),
        uuid: new_uuid(),
        name: input.name.unwrap_or_default(),
        description: input.description.unwrap_or_default(),
        private_key,
        is_git_related: false,
    };
    let uuid = key.uuid.clone();
    db.private_keys.insert(uuid.clone(), key);
    Ok((StatusCode::CREATED, Json(json!({ "uuid": uuid }))))
}

async fn get_key(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<PrivateKey>> {
    let db = db.read().await;
    db.private_keys
        .get(&uuid)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiFailure::not_found("Private Key"))
}

async fn delete_key(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<Value>> {
    let mut db = db.write().await;
    db.private_keys
        .remove(&uuid)
        .map(|_| Json(json!({ "message": "Private Key deleted." })))
        .ok_or_else(|| ApiFailure::not_found("Private Key"))
}

// Applications

async fn list_applications(
    State(AppState { db, .. }): State<AppState>,
) -> Json<Vec<Application>> {
    let db = db.read().await;
    Json(db.applications.values().cloned().collect())
}

async fn create_public_application(
    State(AppState { db, .. }): State<AppState>,
    Json(input): Json<ApplicationInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let project_uuid = required(input.project_uuid, "project_uuid")?;
    required(input.server_uuid, "server_uuid")?;
    let environment_name = required(input.environment_name, "environment_name")?;
    let git_repository = required(input.git_repository, "git_repository")?;
    let git_branch = required(input.git_branch, "git_branch")?;
    let build_pack = required(input.build_pack, "build_pack")?;
    let ports_exposes = required(input.ports_exposes, "ports_exposes")?;

    let mut db = db.write().await;
    let project = db
        .projects
        .get(&project_uuid)
        .ok_or_else(|| ApiFailure::not_found("Project"))?;
    let environment_id = project
        .environments
        .iter()
        .find(|e| e.name == environment_name)
        .map(|e| e.id)
        .ok_or_else(|| ApiFailure::not_found("Environment"))?;

    let uuid = new_uuid();
    let fqdn = input
        .domains
        .unwrap_or_else(|| format!("http://{uuid}.mock.test"));
    let application = Application {
        id: db.next_id(),
        uuid: uuid.clone(),
        name: input.name.unwrap_or_else(|| git_repository.clone()),
        description: input.description.unwrap_or_default(),
        project_uuid,
        environment_id,
        fqdn: Some(fqdn.clone()),
        git_repository,
        git_branch,
        build_pack,
        ports_exposes,
        status: "exited".to_string(),
    };
    db.applications.insert(uuid.clone(), application);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "uuid": uuid, "domains": fqdn })),
    ))
}

async fn get_application(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<Application>> {
    let db = db.read().await;
    db.applications
        .get(&uuid)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiFailure::not_found("Application"))
}

async fn update_application(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
    Json(input): Json<ApplicationInput>,
) -> ApiResult<Json<Value>> {
    let mut db = db.write().await;
    let app = db
        .applications
        .get_mut(&uuid)
        .ok_or_else(|| ApiFailure::not_found("Application"))?;
    if let Some(name) = input.name {
        app.name = name;
    }
    if let Some(description) = input.description {
        app.description = description;
    }
    if let Some(branch) = input.git_branch {
        app.git_branch = branch;
    }
    if let Some(ports) = input.ports_exposes {
        app.ports_exposes = ports;
    }
    if let Some(domains) = input.domains {
        app.fqdn = Some(domains);
    }
    Ok(Json(json!({ "uuid": uuid })))
}

async fn delete_application(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Json<Value>> {
    check_delete_flags(&query)?;
    let mut db = db.write().await;
    db.applications
        .remove(&uuid)
        .ok_or_else(|| ApiFailure::not_found("Application"))?;
    db.envs.remove(&uuid);
    Ok(Json(
        json!({ "message": "Application deletion request queued." }),
    ))
}

async fn set_status(db: &Db, uuid: &str, status: &str) -> ApiResult<()> {
    let mut db = db.write().await;
    let app = db
        .applications
        .get_mut(uuid)
        .ok_or_else(|| ApiFailure::not_found("Application"))?;
    app.status = status.to_string();
    Ok(())
}

async fn start_application(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<Value>> {
    set_status(&db, &uuid, "running:healthy").await?;
    Ok(Json(json!({
        "message": "Deployment request queued.",
        "deployment_uuid": new_uuid(),
    })))
}

async fn stop_application(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<Value>> {
    set_status(&db, &uuid, "exited").await?;
    Ok(Json(
        json!({ "message": "Application stopping request queued." }),
    ))
}

async fn restart_application(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<Value>> {
    set_status(&db, &uuid, "running:healthy").await?;
    Ok(Json(json!({
        "message": "Restart request queued.",
        "deployment_uuid": new_uuid(),
    })))
}

async fn execute_command(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
    Json(input): Json<CommandInput>,
) -> ApiResult<Json<Value>> {
    let command = required(input.command, "command")?;
    let db = db.read().await;
    let app = db
        .applications
        .get(&uuid)
        .ok_or_else(|| ApiFailure::not_found("Application"))?;
    Ok(Json(json!({
        "message": "Command executed.",
        "response": format!("{}: {command}", app.name),
    })))
}

// Environment variables

fn apply_env(env: &mut EnvironmentVariable, input: EnvInput) {
    if let Some(value) = input.value {
        env.value = value;
    }
    if let Some(flag) = input.is_preview {
        env.is_preview = flag;
    }
    if let Some(flag) = input.is_build_time {
        env.is_build_time = flag;
    }
    if let Some(flag) = input.is_literal {
        env.is_literal = flag;
    }
}

fn new_env(key: String, input: EnvInput) -> EnvironmentVariable {
    let mut env = EnvironmentVariable {
        uuid: new_uuid(),
        key,
        value: String::new(),
        is_preview: false,
        is_build_time: false,
        is_literal: false,
    };
    apply_env(&mut env, input);
    env
}

fn app_envs<'a>(
    store: &'a mut Store,
    uuid: &str,
) -> ApiResult<&'a mut Vec<EnvironmentVariable>> {
    if !store.applications.contains_key(uuid) {
        return Err(ApiFailure::not_found("Application"));
    }
    Ok(store.envs.entry(uuid.to_string()).or_default())
}

async fn list_envs(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
) -> ApiResult<Json<Vec<EnvironmentVariable>>> {
    let mut db = db.write().await;
    Ok(Json(app_envs(&mut db, &uuid)?.clone()))
}

async fn create_env(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
    Json(input): Json<EnvInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let key = required(input.key.clone(), "key")?;
    let mut db = db.write().await;
    let envs = app_envs(&mut db, &uuid)?;
    if envs.iter().any(|e| e.key == key) {
        return Err(ApiFailure::new(
            StatusCode::CONFLICT,
            "Environment variable already exists. Use PATCH request to update it.",
        ));
    }
    let env = new_env(key, input);
    let env_uuid = env.uuid.clone();
    envs.push(env);
    Ok((StatusCode::CREATED, Json(json!({ "uuid": env_uuid }))))
}

async fn update_env(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
    Json(input): Json<EnvInput>,
) -> ApiResult<(StatusCode, Json<EnvironmentVariable>)> {
    let key = required(input.key.clone(), "key")?;
    let mut db = db.write().await;
    let env = app_envs(&mut db, &uuid)?
        .iter_mut()
        .find(|e| e.key == key)
        .ok_or_else(|| ApiFailure::not_found("Environment variable"))?;
    apply_env(env, input);
    Ok((StatusCode::CREATED, Json(env.clone())))
}

async fn bulk_update_envs(
    State(AppState { db, .. }): State<AppState>,
    Path(uuid): Path<String>,
    Json(input): Json<BulkEnvInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    if input.data.is_empty() {
        return Err(ApiFailure::bad_request("Bulk data is required."));
    }
    let mut db = db.write().await;
    let envs = app_envs(&mut db, &uuid)?;
    for item in input.data {
        let key = required(item.key.clone(), "key")?;
        match envs.iter().position(|e| e.key == key) {
            Some(i) => apply_env(&mut envs[i], item),
            None => envs.push(new_env(key, item)),
        }
    }
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Environment variables updated." })),
    ))
}

async fn delete_env(
    State(AppState { db, .. }): State<AppState>,
    Path((uuid, env_uuid)): Path<(String, String)>,
) -> ApiResult<Json<Value>> {
    let mut db = db.write().await;
    let envs = app_envs(&mut db, &uuid)?;
    let before = envs.len();
    envs.retain(|e| e.uuid != env_uuid);
    if envs.len() == before {
        return Err(ApiFailure::not_found("Environment variable"));
    }
    Ok(Json(json!({ "message": "Environment variable deleted." })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn application_serializes_null_fqdn() {
        let app = Application {
            id: 1,
            uuid: "a1".to_string(),
            name: "web".to_string(),
            description: String::new(),
            project_uuid: "p1".to_string(),
            environment_id: 2,
            fqdn: None,
            git_repository: "https://github.com/example/web".to_string(),
            git_branch: "main".to_string(),
            build_pack: "nixpacks".to_string(),
            ports_exposes: "3000".to_string(),
            status: "exited".to_string(),
        };
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["uuid"], "a1");
        assert!(json["fqdn"].is_null());
    }

    #[test]
    fn inputs_accept_missing_and_unknown_fields() {
        let input: ApplicationInput =
            serde_json::from_str(r#"{"git_branch":"main","health_check_enabled":true}"#).unwrap();
        assert_eq!(input.git_branch.as_deref(), Some("main"));
        assert!(input.project_uuid.is_none());

        let env: EnvInput = serde_json::from_str(r#"{"key":"PORT"}"#).unwrap();
        assert_eq!(env.key.as_deref(), Some("PORT"));
        assert!(env.value.is_none());
    }

    #[test]
    fn delete_flags_must_all_be_present() {
        let all = flags(&[
            ("delete_configurations", "true"),
            ("delete_connected_networks", "false"),
            ("delete_volumes", "true"),
            ("docker_cleanup", "true"),
        ]);
        assert!(check_delete_flags(&all).is_ok());

        let missing = flags(&[("delete_volumes", "true")]);
        let err = check_delete_flags(&missing).unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn delete_flags_must_be_literal_booleans() {
        let mut all = flags(&[
            ("delete_configurations", "true"),
            ("delete_connected_networks", "true"),
            ("delete_volumes", "true"),
            ("docker_cleanup", "true"),
        ]);
        all.insert("docker_cleanup".to_string(), "1".to_string());
        let err = check_delete_flags(&all).unwrap_err();
        assert!(err.message.contains("docker_cleanup"));
    }

    #[test]
    fn required_rejects_empty() {
        assert_eq!(required(Some("x".into()), "name").unwrap(), "x");
        let err = required(Some(String::new()), "name").unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message, "The name field is required.");
        assert!(required(None, "name").is_err());
    }

    #[test]
    fn applying_env_input_only_touches_given_fields() {
        let mut env = new_env(
            "PORT".to_string(),
            EnvInput {
                key: None,
                value: Some("3000".to_string()),
                is_preview: None,
                is_build_time: Some(true),
                is_literal: None,
            },
        );
        assert_eq!(env.value, "3000");
        assert!(env.is_build_time);

        apply_env(
            &mut env,
            EnvInput {
                key: None,
                value: None,
                is_preview: Some(true),
                is_build_time: None,
                is_literal: None,
            },
        );
        assert_eq!(env.value, "3000");
        assert!(env.is_build_time);
        assert!(env.is_preview);
    }
}
