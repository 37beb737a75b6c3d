use crate::github::models::{Contents, Repository, User};
use crate::Result;
use async_trait::async_trait;

/// Remote content API consumed by the repository tools.
///
/// `GitHubClient` is the production implementation; tests substitute an
/// in-memory fake.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// The authenticated user
    async fn current_user(&self) -> Result<User>;

    /// One page of the authenticated user's repositories
    async fn repositories(&self, per_page: u32) -> Result<Vec<Repository>>;

    /// Contents at `path` (empty for the repository root).
    ///
    /// Upstream "not found"-style answers are returned as `Contents::Other`
    /// rather than an error; only transport and auth failures are `Err`.
    async fn contents(&self, owner: &str, repo: &str, path: &str) -> Result<Contents>;
}
