use crate::github::models::Contents;
use crate::github::ContentGateway;
use crate::tools::ignore;
use crate::tools::models::{EntryKind, TreeNode};
use crate::Result;
use futures::future::{BoxFuture, FutureExt};
use tracing::debug;

/// Default number of directory levels expanded below the start path
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// Walk `start_path` of `owner/repo` depth-first, one request at a time.
///
/// The listing at `start_path` is depth 0. A directory found at depth `d` is
/// expanded only while `d < max_depth`; past that it is returned without a
/// `children` field. Paths whose response is not a directory listing yield no
/// nodes. Transport and auth failures abort the walk.
pub async fn build_tree(
    gateway: &dyn ContentGateway,
    owner: &str,
    repo: &str,
    start_path: &str,
    max_depth: u32,
) -> Result<Vec<TreeNode>> {
    let walker = TreeWalker {
        gateway,
        owner,
        repo,
        max_depth,
    };

    let nodes = walker.walk(start_path.to_string(), 0).await?;
    debug!(
        "Built tree for {}/{} at '{}' (max depth {}): {} top-level nodes",
        owner,
        repo,
        start_path,
        max_depth,
        nodes.len()
    );
    Ok(nodes)
}

struct TreeWalker<'a> {
    gateway: &'a dyn ContentGateway,
    owner: &'a str,
    repo: &'a str,
    max_depth: u32,
}

impl TreeWalker<'_> {
    fn walk(&self, path: String, depth: u32) -> BoxFuture<'_, Result<Vec<TreeNode>>> {
        async move {
            let entries = match self.gateway.contents(self.owner, self.repo, &path).await? {
                Contents::Listing(entries) => entries,
                other => {
                    debug!(
                        "Treating '{}' as empty: expected a listing, got {}",
                        path,
                        other.shape()
                    );
                    return Ok(Vec::new());
                }
            };

            let mut nodes = Vec::with_capacity(entries.len());
            for entry in entries {
                if ignore::is_ignored(&entry.name) {
                    continue;
                }

                match EntryKind::from_api(&entry.entry_type) {
                    Some(EntryKind::File) => nodes.push(TreeNode::file(entry.name, entry.path)),
                    Some(EntryKind::Dir) => {
                        let children = if depth < self.max_depth {
                            Some(self.walk(entry.path.clone(), depth + 1).await?)
                        } else {
                            None
                        };
                        nodes.push(TreeNode::dir(entry.name, entry.path, children));
                    }
                    None => debug!("Skipping {} entry '{}'", entry.entry_type, entry.path),
                }
            }

            Ok(nodes)
        }
        .boxed()
    }
}
