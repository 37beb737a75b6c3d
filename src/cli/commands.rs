use crate::github::GitHubClient;
use crate::mcp::RepoToolServer;
use crate::tools::{RepoTools, TreeNode};
use crate::{Error, Result};
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Build the tool façade over a live GitHub client
pub fn tools_for(client: GitHubClient) -> RepoTools {
    let per_page = client.config().repos_per_page;
    RepoTools::new(Arc::new(client)).with_repos_per_page(per_page)
}

/// Print the acting login and remaining API budget
pub async fn whoami(client: GitHubClient) -> Result<()> {
    let login = tools_for(client.clone()).whoami().await?;
    let (remaining, limit, reset_at) = client.rate_limit_status().await;

    println!("{login}");
    println!("  API budget: {remaining}/{limit} (resets {})", reset_at.to_rfc3339());
    Ok(())
}

/// Serve MCP over stdin/stdout until the client disconnects
pub async fn mcp(tools: RepoTools) -> Result<()> {
    info!("Starting repo-inspector MCP server on stdio");

    let server = RepoToolServer::new(tools)
        .serve(stdio())
        .await
        .map_err(|e| Error::Internal(format!("MCP initialization failed: {e}")))?;

    server
        .waiting()
        .await
        .map_err(|e| Error::Internal(format!("MCP server error: {e}")))?;

    info!("MCP server stopped");
    Ok(())
}

pub async fn repos(tools: &RepoTools) -> Result<()> {
    print_json(&tools.list_repos().await?)
}

pub async fn tree(tools: &RepoTools, repo: &str, path: &str, max_depth: u32) -> Result<()> {
    let nodes = tools.get_repo_tree(repo, path, max_depth).await?;
    print_json(&nodes)?;
    eprintln!("{} nodes", count_nodes(&nodes));
    Ok(())
}

pub async fn cat(tools: &RepoTools, repo: &str, path: &str) -> Result<()> {
    print_json(&tools.get_file_content(repo, path).await?)
}

pub async fn files(tools: &RepoTools, repo: &str) -> Result<()> {
    print_json(&tools.list_files_in_repos(repo).await?)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Total nodes in a tree, expanded children included
pub fn count_nodes(nodes: &[TreeNode]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + node.children.as_deref().map(count_nodes).unwrap_or(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_nodes() {
        let tree = vec![
            TreeNode::file("a", "a"),
            TreeNode::dir(
                "b",
                "b",
                Some(vec![
                    TreeNode::file("c", "b/c"),
                    TreeNode::dir("d", "b/d", None),
                ]),
            ),
        ];
        assert_eq!(count_nodes(&tree), 4);
        assert_eq!(count_nodes(&[]), 0);
    }
}
