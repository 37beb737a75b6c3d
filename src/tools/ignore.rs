/// Entry names pruned from every listing: VCS metadata, dependency caches,
/// build output and editor state.
pub const IGNORED_NAMES: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "bower_components",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    ".venv",
    "venv",
    "env",
    "target",
    "dist",
    "build",
    ".next",
    ".nuxt",
    ".gradle",
    ".idea",
    ".vscode",
    ".DS_Store",
];

/// Exact, case-sensitive match on the entry name
pub fn is_ignored(name: &str) -> bool {
    IGNORED_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignored_names() {
        assert!(is_ignored("node_modules"));
        assert!(is_ignored(".git"));
        assert!(is_ignored("__pycache__"));
    }

    #[test]
    fn test_match_is_exact() {
        assert!(!is_ignored("src"));
        assert!(!is_ignored("node_modules_backup"));
        assert!(!is_ignored("Node_Modules"));
        assert!(!is_ignored(".gitignore"));
    }
}
