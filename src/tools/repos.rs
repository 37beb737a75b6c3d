use crate::github::ContentGateway;
use crate::tools::models::RepositorySummary;
use crate::Result;
use tracing::debug;

/// One page of the acting user's repositories, in the order GitHub returns them
pub async fn list_repositories(
    gateway: &dyn ContentGateway,
    per_page: u32,
) -> Result<Vec<RepositorySummary>> {
    let repos = gateway.repositories(per_page).await?;
    debug!("Listed {} repositories (page size {})", repos.len(), per_page);

    Ok(repos.into_iter().map(RepositorySummary::from).collect())
}
