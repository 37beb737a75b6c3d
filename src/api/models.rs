use rmcp::model::Tool;
use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// `get_repo_tree` arguments
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct RepoTreeParams {
    /// Repository name under the authenticated user's account
    pub repo_name: String,
    /// Directory to start from; empty for the repository root
    #[serde(default)]
    pub path: String,
    /// Directory levels to expand below the start path (default 4). Accepts an
    /// integer or a numeric string.
    #[serde(default)]
    pub max_depth: Option<serde_json::Value>,
}

/// `get_file_content` arguments
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct FileContentParams {
    /// Repository name under the authenticated user's account
    pub repo_name: String,
    /// File path inside the repository
    #[serde(alias = "file_name")]
    pub path: String,
}

/// `list_files_in_repos` arguments
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct RepoParams {
    /// Repository name under the authenticated user's account
    pub repo_name: String,
}

/// Tool catalog response
#[derive(Debug, Clone, Serialize)]
pub struct ToolsResponse {
    pub tools: Vec<Tool>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
