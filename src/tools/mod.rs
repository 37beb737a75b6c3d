//! Repository inspection tools exposed to agents.
//!
//! Every operation resolves the acting user once and then issues its
//! contents requests sequentially against that owner.

pub mod content;
pub mod identity;
pub mod ignore;
pub mod models;
pub mod repos;
pub mod tree;

#[cfg(test)]
pub(crate) mod fake;

pub use content::MAX_FILE_SIZE;
pub use models::{EntryKind, FileContent, RepositorySummary, TreeNode};
pub use tree::DEFAULT_MAX_DEPTH;

use crate::github::{config::MAX_PER_PAGE, ContentGateway};
use crate::utils::validation::{normalize_repo_path, validate_repo_name};
use crate::{Error, Result};
use std::sync::Arc;
use tracing::info;

/// Tool façade over an explicitly constructed gateway
#[derive(Clone)]
pub struct RepoTools {
    gateway: Arc<dyn ContentGateway>,
    repos_per_page: u32,
}

impl RepoTools {
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self {
            gateway,
            repos_per_page: MAX_PER_PAGE,
        }
    }

    pub fn with_repos_per_page(mut self, per_page: u32) -> Self {
        self.repos_per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    /// Login of the acting user
    pub async fn whoami(&self) -> Result<String> {
        identity::resolve_owner_login(self.gateway.as_ref()).await
    }

    /// `list_repos`
    pub async fn list_repos(&self) -> Result<Vec<RepositorySummary>> {
        info!("Tool call: list_repos");
        repos::list_repositories(self.gateway.as_ref(), self.repos_per_page).await
    }

    /// `get_repo_tree`
    pub async fn get_repo_tree(
        &self,
        repo_name: &str,
        path: &str,
        max_depth: u32,
    ) -> Result<Vec<TreeNode>> {
        let repo = validate_repo_name(repo_name)?;
        let path = normalize_repo_path(path)?;
        info!(
            "Tool call: get_repo_tree repo={} path='{}' max_depth={}",
            repo, path, max_depth
        );

        let owner = self.whoami().await?;
        tree::build_tree(self.gateway.as_ref(), &owner, repo, &path, max_depth).await
    }

    /// `get_file_content`
    pub async fn get_file_content(&self, repo_name: &str, path: &str) -> Result<FileContent> {
        let repo = validate_repo_name(repo_name)?;
        let path = normalize_repo_path(path)?;
        if path.is_empty() {
            return Err(Error::Validation("File path cannot be empty".to_string()));
        }
        info!("Tool call: get_file_content repo={} path='{}'", repo, path);

        let owner = self.whoami().await?;
        content::get_file_content(self.gateway.as_ref(), &owner, repo, &path).await
    }

    /// `list_files_in_repos`: kept for older callers, same as a depth-0 tree
    /// of the repository root. Entries no longer carry `download_url`.
    pub async fn list_files_in_repos(&self, repo_name: &str) -> Result<Vec<TreeNode>> {
        self.get_repo_tree(repo_name, "", 0).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::fake::{dir, file, FakeGateway};

    fn tools(gateway: FakeGateway) -> (RepoTools, Arc<FakeGateway>) {
        let gateway = Arc::new(gateway);
        (RepoTools::new(gateway.clone()), gateway)
    }

    fn demo() -> FakeGateway {
        FakeGateway::new("octo")
            .with_repository("demo", false)
            .with_listing("demo", "", vec![file("README.md"), dir("src")])
            .with_listing("demo", "src", vec![dir("src/inner")])
            .with_listing("demo", "src/inner", vec![file("src/inner/x.rs")])
    }

    #[tokio::test]
    async fn test_identity_resolved_once_per_operation() {
        let (tools, gateway) = tools(demo());

        tools.get_repo_tree("demo", "", 4).await.unwrap();
        assert_eq!(gateway.user_calls(), 1);
        assert_eq!(gateway.fetched().len(), 3);

        tools.get_repo_tree("demo", "", 4).await.unwrap();
        assert_eq!(gateway.user_calls(), 2);
    }

    #[tokio::test]
    async fn test_list_repos_skips_identity() {
        let (tools, gateway) = tools(demo());
        let repos = tools.list_repos().await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(gateway.user_calls(), 0);
    }

    #[tokio::test]
    async fn test_legacy_listing_matches_depth_zero() {
        let (tools, _) = tools(demo());
        let legacy = tools.list_files_in_repos("demo").await.unwrap();
        let tree = tools.get_repo_tree("demo", "", 0).await.unwrap();

        assert_eq!(legacy, tree);
        assert!(legacy.iter().all(|n| !n.is_expanded()));
    }

    #[tokio::test]
    async fn test_path_is_normalized() {
        let (tools, gateway) = tools(demo());
        let tree = tools.get_repo_tree("demo", "/src/", 0).await.unwrap();
        assert_eq!(tree, vec![TreeNode::dir("inner", "src/inner", None)]);
        assert_eq!(gateway.fetched(), vec!["src"]);
    }

    #[tokio::test]
    async fn test_invalid_arguments_fail_before_any_request() {
        let (tools, gateway) = tools(demo());

        assert!(matches!(
            tools.get_repo_tree("octo/demo", "", 1).await,
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            tools.get_file_content("demo", "").await,
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            tools.get_file_content("demo", "../etc/passwd").await,
            Err(Error::Validation(_))
        ));
        assert_eq!(gateway.user_calls(), 0);
        assert!(gateway.fetched().is_empty());
    }

    #[tokio::test]
    async fn test_per_page_is_clamped() {
        let gateway = Arc::new(FakeGateway::new("octo"));
        let tools = RepoTools::new(gateway).with_repos_per_page(1000);
        assert_eq!(tools.repos_per_page, MAX_PER_PAGE);
    }
}
