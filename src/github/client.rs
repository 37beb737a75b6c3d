use crate::github::{
    config::GitHubConfig,
    gateway::ContentGateway,
    models::{Contents, Repository, User},
    rate_limiter::RateLimiter,
};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use tracing::{debug, error, warn};

/// GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    config: GitHubConfig,
    rate_limiter: RateLimiter,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: GitHubConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            header::HeaderName::from_static("x-github-api-version"),
            header::HeaderValue::from_static("2022-11-28"),
        );

        if let Some(token) = &config.token {
            let mut auth_value = header::HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| Error::Config(format!("Invalid GitHub token: {e}")))?;
            auth_value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, auth_value);
        } else {
            warn!("GITHUB_TOKEN is not set; /user endpoints will be rejected upstream");
        }

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        let rate_limiter = RateLimiter::new(config.rate_limit_buffer);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    async fn send(&self, path: &str) -> Result<Response> {
        self.rate_limiter.wait_if_needed().await;

        let url = format!("{}{}", self.config.api_base_url, path);
        debug!("GitHub API request: GET {}", url);

        let response = self.client.get(&url).send().await?;

        self.rate_limiter
            .update_from_headers(response.headers())
            .await;

        Ok(response)
    }

    /// Make a GET request to GitHub API, failing on any non-success status
    async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.send(path).await?;
        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            error!("GitHub API error: {} - {}", status, error_body);
            return Err(status_error(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::Gateway(format!("Failed to parse GitHub API response: {e}")))
    }

    /// Get current rate limit status
    pub async fn rate_limit_status(&self) -> (u32, u32, chrono::DateTime<chrono::Utc>) {
        self.rate_limiter.get_status().await
    }
}

#[async_trait]
impl ContentGateway for GitHubClient {
    async fn current_user(&self) -> Result<User> {
        self.get("/user").await
    }

    async fn repositories(&self, per_page: u32) -> Result<Vec<Repository>> {
        self.get(&format!("/user/repos?per_page={per_page}")).await
    }

    async fn contents(&self, owner: &str, repo: &str, path: &str) -> Result<Contents> {
        let response = self.send(&contents_path(owner, repo, path)).await?;
        let status = response.status();

        if is_fatal_status(status) {
            error!("GitHub contents request failed: {}", status);
            return Err(status_error(status));
        }

        let body = response.text().await?;

        if !status.is_success() {
            debug!("Contents of {}/{}:{} answered {}", owner, repo, path, status);
        }

        // Unparseable bodies degrade to `Other` just like error payloads
        Ok(serde_json::from_str(&body)
            .unwrap_or_else(|_| Contents::Other(serde_json::Value::String(body))))
    }
}

/// Build the contents API path with each segment percent-encoded
pub fn contents_path(owner: &str, repo: &str, path: &str) -> String {
    let mut api_path = format!(
        "/repos/{}/{}/contents",
        urlencoding::encode(owner),
        urlencoding::encode(repo)
    );

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        api_path.push('/');
        api_path.push_str(&urlencoding::encode(segment));
    }

    api_path
}

/// Statuses that abort the operation instead of degrading to an empty result
fn is_fatal_status(status: StatusCode) -> bool {
    status.is_server_error()
        || matches!(
            status,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
        )
}

fn status_error(status: StatusCode) -> Error {
    match status {
        StatusCode::NOT_FOUND => Error::NotFound("GitHub resource not found".to_string()),
        StatusCode::UNAUTHORIZED => Error::Gateway("GitHub authentication failed".to_string()),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            Error::Gateway("GitHub API rate limit exceeded or access forbidden".to_string())
        }
        _ => Error::Gateway(format!("GitHub API error: {status}")),
    }
}
