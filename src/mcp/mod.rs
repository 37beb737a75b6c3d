//! MCP tool server.
//!
//! Exposes the repository tools to agent clients over the Model Context
//! Protocol. Input schemas are generated from the argument structs in
//! `api::models`, so the HTTP catalog and `tools/list` always agree.

use crate::api::models::{FileContentParams, RepoParams, RepoTreeParams};
use crate::tools::{RepoTools, DEFAULT_MAX_DEPTH};
use crate::utils::validation::coerce_max_depth;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Serialize;
use tracing::warn;

#[derive(Clone)]
pub struct RepoToolServer {
    tools: RepoTools,
    tool_router: ToolRouter<Self>,
}

impl RepoToolServer {
    pub fn new(tools: RepoTools) -> Self {
        Self {
            tools,
            tool_router: Self::tool_router(),
        }
    }

    /// Every registered tool with its generated input schema, sorted by name
    pub fn catalog() -> Vec<Tool> {
        let mut tools = Self::tool_router().list_all();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }
}

#[tool_handler]
impl ServerHandler for RepoToolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some("Read-only inspection of the authenticated GitHub user's repositories. Use 'list_repos' to find a repository, 'get_repo_tree' to see its layout and 'get_file_content' to read a file.".into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

#[tool_router]
impl RepoToolServer {
    #[tool(description = "Lists the repositories of the authenticated user.")]
    pub async fn list_repos(&self) -> Result<CallToolResult, McpError> {
        tool_result(self.tools.list_repos().await)
    }

    #[tool(description = "Returns the directory tree of a repository, expanded to a bounded depth. Build, dependency and VCS folders are omitted. Directories left unexpanded by the depth limit carry no children field.")]
    pub async fn get_repo_tree(
        &self,
        Parameters(params): Parameters<RepoTreeParams>,
    ) -> Result<CallToolResult, McpError> {
        let max_depth = match coerce_max_depth(params.max_depth.as_ref(), DEFAULT_MAX_DEPTH) {
            Ok(depth) => depth,
            Err(e) => return tool_result::<()>(Err(e)),
        };

        tool_result(
            self.tools
                .get_repo_tree(&params.repo_name, &params.path, max_depth)
                .await,
        )
    }

    #[tool(description = "Gets the decoded text of one file. Files over 200000 bytes are reported with too_large instead of content.")]
    pub async fn get_file_content(
        &self,
        Parameters(params): Parameters<FileContentParams>,
    ) -> Result<CallToolResult, McpError> {
        tool_result(
            self.tools
                .get_file_content(&params.repo_name, &params.path)
                .await,
        )
    }

    #[tool(description = "Deprecated: use get_repo_tree with max_depth 0. Lists the top-level entries of a repository as tree nodes; entries no longer carry download_url.")]
    pub async fn list_files_in_repos(
        &self,
        Parameters(params): Parameters<RepoParams>,
    ) -> Result<CallToolResult, McpError> {
        tool_result(self.tools.list_files_in_repos(&params.repo_name).await)
    }
}

/// Tool failures are reported in-band so the agent can read them
fn tool_result<T: Serialize>(result: crate::Result<T>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(value) => {
            let text = serde_json::to_string_pretty(&value)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;
            Ok(CallToolResult::success(vec![Content::text(text)]))
        }
        Err(e) => {
            warn!("Tool call failed: {}", e.log_safe());
            Ok(CallToolResult::error(vec![Content::text(e.public_message())]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::fake::{dir, file, FakeGateway};
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn server() -> RepoToolServer {
        let gateway = FakeGateway::new("octo")
            .with_repository("demo", false)
            .with_listing("demo", "", vec![file("README.md"), dir("src")])
            .with_listing("demo", "src", vec![file("src/main.ext")]);
        RepoToolServer::new(RepoTools::new(Arc::new(gateway)))
    }

    fn text(result: &CallToolResult) -> String {
        result
            .content
            .iter()
            .filter_map(|c| c.as_text().map(|t| t.text.clone()))
            .collect()
    }

    fn tree_params(value: Value) -> Parameters<RepoTreeParams> {
        Parameters(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn test_catalog_lists_every_tool() {
        let names: Vec<_> = RepoToolServer::catalog()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "get_file_content",
                "get_repo_tree",
                "list_files_in_repos",
                "list_repos"
            ]
        );
    }

    #[test]
    fn test_schemas_come_from_argument_types() {
        let catalog = RepoToolServer::catalog();
        let tree = catalog.iter().find(|t| t.name == "get_repo_tree").unwrap();

        let properties = tree.input_schema["properties"].as_object().unwrap();
        assert!(properties.contains_key("repo_name"));
        assert!(properties.contains_key("path"));
        assert!(properties.contains_key("max_depth"));
        assert_eq!(tree.input_schema["required"], json!(["repo_name"]));

        let legacy = catalog
            .iter()
            .find(|t| t.name == "list_files_in_repos")
            .unwrap();
        let description = legacy.description.as_deref().unwrap();
        assert!(description.starts_with("Deprecated"));
        assert!(description.contains("download_url"));
    }

    #[tokio::test]
    async fn test_tree_tool_returns_json_text() {
        let result = server()
            .get_repo_tree(tree_params(json!({"repo_name": "demo", "max_depth": 1})))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(false));
        let body: Value = serde_json::from_str(&text(&result)).unwrap();
        assert_eq!(
            body,
            json!([
                {"name": "README.md", "path": "README.md", "type": "file"},
                {"name": "src", "path": "src", "type": "dir", "children": [
                    {"name": "main.ext", "path": "src/main.ext", "type": "file"}
                ]}
            ])
        );
    }

    #[tokio::test]
    async fn test_negative_depth_is_a_tool_error() {
        let result = server()
            .get_repo_tree(tree_params(json!({"repo_name": "demo", "max_depth": -2})))
            .await
            .unwrap();

        assert_eq!(result.is_error, Some(true));
        assert!(text(&result).contains("negative"));
    }

    #[tokio::test]
    async fn test_file_tool_accepts_file_name_alias() {
        let params = serde_json::from_value(json!({"repo_name": "demo", "file_name": "missing.txt"}))
            .unwrap();
        let result = server().get_file_content(Parameters(params)).await.unwrap();

        let body: Value = serde_json::from_str(&text(&result)).unwrap();
        assert_eq!(body, json!({"path": "missing.txt", "content": null}));
    }

    #[tokio::test]
    async fn test_list_repos_tool() {
        let result = server().list_repos().await.unwrap();
        let body: Value = serde_json::from_str(&text(&result)).unwrap();
        assert_eq!(body[0]["full_name"], "octo/demo");
    }

    #[tokio::test]
    async fn test_legacy_tool_is_depth_zero() {
        let params = Parameters(RepoParams {
            repo_name: "demo".to_string(),
        });
        let result = server().list_files_in_repos(params).await.unwrap();

        let body: Value = serde_json::from_str(&text(&result)).unwrap();
        assert_eq!(body[1], json!({"name": "src", "path": "src", "type": "dir"}));
    }
}
