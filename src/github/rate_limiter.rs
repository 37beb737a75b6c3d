use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Paces requests against the `x-ratelimit-*` budget reported by GitHub
#[derive(Clone)]
pub struct RateLimiter {
    state: Arc<RwLock<RateLimitState>>,
    buffer: u32,
}

#[derive(Debug, Clone)]
struct RateLimitState {
    limit: u32,
    remaining: u32,
    /// Unix timestamp when the budget resets
    reset_at: i64,
    /// No pacing until GitHub has reported a budget at least once
    observed: bool,
}

impl RateLimiter {
    pub fn new(buffer: u32) -> Self {
        Self {
            state: Arc::new(RwLock::new(RateLimitState {
                limit: 5000,
                remaining: 5000,
                reset_at: Utc::now().timestamp() + 3600,
                observed: false,
            })),
            buffer,
        }
    }

    /// Update rate limit from GitHub API response headers
    pub async fn update_from_headers(&self, headers: &HeaderMap) {
        let limit = header_value::<u32>(headers, "x-ratelimit-limit");
        let remaining = header_value::<u32>(headers, "x-ratelimit-remaining");
        let reset = header_value::<i64>(headers, "x-ratelimit-reset");

        if limit.is_none() && remaining.is_none() && reset.is_none() {
            return;
        }

        let mut state = self.state.write().await;
        if let Some(limit) = limit {
            state.limit = limit;
        }
        if let Some(remaining) = remaining {
            state.remaining = remaining;
        }
        if let Some(reset) = reset {
            state.reset_at = reset;
        }
        state.observed = true;

        debug!(
            "Rate limit updated: {}/{} (resets at {})",
            state.remaining, state.limit, state.reset_at
        );
    }

    /// Check if we should wait before making the next request
    pub async fn should_wait(&self) -> bool {
        let state = self.state.read().await;
        if !state.observed {
            return false;
        }
        // Small budgets (unauthenticated) scale the threshold down
        let threshold = std::cmp::min(self.buffer, (state.limit / 10).max(5));
        state.remaining <= threshold
    }

    /// Wait if necessary before making a request
    pub async fn wait_if_needed(&self) {
        if !self.should_wait().await {
            return;
        }

        let (remaining, limit, reset_at) = {
            let state = self.state.read().await;
            (state.remaining, state.limit, state.reset_at)
        };

        let now = Utc::now().timestamp();
        if now < reset_at {
            let wait_secs = (reset_at - now) as u64;
            warn!(
                "Rate limit approaching ({}/{}), waiting {} seconds until reset",
                remaining, limit, wait_secs
            );
            tokio::time::sleep(tokio::time::Duration::from_secs(wait_secs)).await;
        }
    }

    /// Remaining requests, total budget and reset instant
    pub async fn get_status(&self) -> (u32, u32, DateTime<Utc>) {
        let state = self.state.read().await;
        (
            state.remaining,
            state.limit,
            DateTime::from_timestamp(state.reset_at, 0).unwrap_or_else(Utc::now),
        )
    }
}

fn header_value<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
}
