use crate::error::{Error, Result};
use std::env;

/// Largest page size the repository listing endpoint accepts
pub const MAX_PER_PAGE: u32 = 100;

/// GitHub integration configuration
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Personal access token used for every request
    pub token: Option<String>,

    /// Base URL of the REST API
    pub api_base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Rate limit buffer - reserve this many requests
    pub rate_limit_buffer: u32,

    /// Page size for the repository listing (single page only)
    pub repos_per_page: u32,

    pub user_agent: String,
}

impl GitHubConfig {
    /// Create a new GitHubConfig from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            token: env::var("GITHUB_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            api_base_url: env::var("GITHUB_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            timeout_secs: parse_var("GITHUB_TIMEOUT", defaults.timeout_secs)?,
            rate_limit_buffer: parse_var("GITHUB_RATE_LIMIT_BUFFER", defaults.rate_limit_buffer)?,
            repos_per_page: parse_var("GITHUB_REPOS_PER_PAGE", defaults.repos_per_page)?,
            user_agent: defaults.user_agent,
        })
    }

    /// Point the client at a different API host (GitHub Enterprise, test servers)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(Error::Config("GITHUB_TIMEOUT must be non-zero".to_string()));
        }

        if !(1..=MAX_PER_PAGE).contains(&self.repos_per_page) {
            return Err(Error::Config(format!(
                "GITHUB_REPOS_PER_PAGE must be between 1 and {MAX_PER_PAGE}"
            )));
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(Error::Config(
                "GITHUB_API_URL must use http or https".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_base_url: "https://api.github.com".to_string(),
            timeout_secs: 30,
            rate_limit_buffer: 50,
            repos_per_page: MAX_PER_PAGE,
            user_agent: format!("repo-inspector/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("Invalid {name} value"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GitHubConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.repos_per_page, 100);
        assert_eq!(config.api_base_url, "https://api.github.com");
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = GitHubConfig::default().with_base_url("http://127.0.0.1:1234/");
        assert_eq!(config.api_base_url, "http://127.0.0.1:1234");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = GitHubConfig {
            repos_per_page: 101,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.repos_per_page = 0;
        assert!(config.validate().is_err());

        config.repos_per_page = 30;
        config.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.timeout_secs = 10;
        config.api_base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }
}
