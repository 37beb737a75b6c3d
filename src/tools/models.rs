use crate::github::models::Repository;
use serde::{Deserialize, Serialize};

/// Public projection of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub full_name: String,
    pub private: bool,
    pub url: String,
}

impl From<Repository> for RepositorySummary {
    fn from(repo: Repository) -> Self {
        Self {
            name: repo.name,
            full_name: repo.full_name,
            private: repo.private,
            url: repo.html_url,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    /// Map a contents API `type`; symlinks and submodules have no kind
    pub fn from_api(entry_type: &str) -> Option<Self> {
        match entry_type {
            "file" => Some(EntryKind::File),
            "dir" => Some(EntryKind::Dir),
            _ => None,
        }
    }
}

/// One node of a repository tree.
///
/// `children` is `None` for files and for directories that were not expanded
/// because the depth budget ran out; it is serialized only when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: EntryKind::File,
            children: None,
        }
    }

    pub fn dir(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Option<Vec<TreeNode>>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: EntryKind::Dir,
            children,
        }
    }

    /// Whether this directory was walked into
    pub fn is_expanded(&self) -> bool {
        self.children.is_some()
    }
}

/// Decoded file, or the reason there is none
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    pub path: String,
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub too_large: Option<bool>,
}

impl FileContent {
    pub fn text(path: impl Into<String>, content: String) -> Self {
        Self {
            path: path.into(),
            content: Some(content),
            too_large: None,
        }
    }

    /// Nothing retrievable at the path (missing, a directory, a submodule...)
    pub fn absent(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: None,
            too_large: None,
        }
    }

    pub fn too_large(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: None,
            too_large: Some(true),
        }
    }
}
