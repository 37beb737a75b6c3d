use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::debug;

use crate::{
    api::models::*,
    mcp::RepoToolServer,
    tools::{FileContent, RepoTools, RepositorySummary, TreeNode, DEFAULT_MAX_DEPTH},
    utils::validation::coerce_max_depth,
    Error, Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub tools: RepoTools,
}

/// Unwrap tool arguments, reporting a bad body as a validation error
fn arguments<T>(payload: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    payload
        .map(|Json(params)| params)
        .map_err(|rejection| Error::Validation(rejection.body_text()))
}

/// GET /api/tools - Tool catalog
pub async fn list_tools() -> Json<ToolsResponse> {
    Json(ToolsResponse {
        tools: RepoToolServer::catalog(),
    })
}

/// POST /api/tools/list_repos
pub async fn list_repos(State(state): State<AppState>) -> Result<Json<Vec<RepositorySummary>>> {
    debug!("list_repos request");

    Ok(Json(state.tools.list_repos().await?))
}

/// POST /api/tools/get_repo_tree
pub async fn get_repo_tree(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RepoTreeParams>, JsonRejection>,
) -> Result<Json<Vec<TreeNode>>> {
    let params = arguments(payload)?;
    debug!("get_repo_tree request: {:?}", params);

    let max_depth = coerce_max_depth(params.max_depth.as_ref(), DEFAULT_MAX_DEPTH)?;
    let tree = state
        .tools
        .get_repo_tree(&params.repo_name, &params.path, max_depth)
        .await?;

    Ok(Json(tree))
}

/// POST /api/tools/get_file_content
pub async fn get_file_content(
    State(state): State<AppState>,
    payload: std::result::Result<Json<FileContentParams>, JsonRejection>,
) -> Result<Json<FileContent>> {
    let params = arguments(payload)?;
    debug!("get_file_content request: {:?}", params);

    let content = state
        .tools
        .get_file_content(&params.repo_name, &params.path)
        .await?;

    Ok(Json(content))
}

/// POST /api/tools/list_files_in_repos - superseded by get_repo_tree
pub async fn list_files_in_repos(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RepoParams>, JsonRejection>,
) -> Result<Json<Vec<TreeNode>>> {
    let params = arguments(payload)?;
    debug!("list_files_in_repos request: {:?}", params);

    Ok(Json(state.tools.list_files_in_repos(&params.repo_name).await?))
}

/// GET /health - Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
