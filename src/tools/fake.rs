//! In-memory gateway for unit tests

use crate::github::models::{ContentEntry, Contents, Repository, User};
use crate::github::ContentGateway;
use crate::{Error, Result};
use async_trait::async_trait;
use serde_json::json;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct FakeGateway {
    login: String,
    repositories: Vec<Repository>,
    contents: HashMap<(String, String), Contents>,
    failing: HashSet<(String, String)>,
    user_calls: AtomicUsize,
    fetched: Mutex<Vec<String>>,
}

impl FakeGateway {
    pub fn new(login: &str) -> Self {
        Self {
            login: login.to_string(),
            repositories: Vec::new(),
            contents: HashMap::new(),
            failing: HashSet::new(),
            user_calls: AtomicUsize::new(0),
            fetched: Mutex::new(Vec::new()),
        }
    }

    pub fn with_repository(mut self, name: &str, private: bool) -> Self {
        self.repositories.push(Repository {
            name: name.to_string(),
            full_name: format!("{}/{}", self.login, name),
            private,
            html_url: format!("https://github.com/{}/{}", self.login, name),
        });
        self
    }

    /// Directory listing at `path` of `repo`
    pub fn with_listing(mut self, repo: &str, path: &str, entries: Vec<ContentEntry>) -> Self {
        self.contents
            .insert(key(repo, path), Contents::Listing(entries));
        self
    }

    pub fn with_single(mut self, repo: &str, path: &str, entry: ContentEntry) -> Self {
        self.contents.insert(key(repo, path), Contents::Single(entry));
        self
    }

    /// Fetching `path` fails like a dropped connection
    pub fn with_failure(mut self, repo: &str, path: &str) -> Self {
        self.failing.insert(key(repo, path));
        self
    }

    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }

    /// Every contents path requested, in order
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

fn key(repo: &str, path: &str) -> (String, String) {
    (repo.to_string(), path.to_string())
}

pub fn file(path: &str) -> ContentEntry {
    entry(path, "file")
}

pub fn dir(path: &str) -> ContentEntry {
    entry(path, "dir")
}

pub fn entry(path: &str, entry_type: &str) -> ContentEntry {
    let name = path.rsplit('/').next().unwrap_or(path).to_string();
    ContentEntry {
        name,
        path: path.to_string(),
        entry_type: entry_type.to_string(),
        size: None,
        download_url: None,
        content: None,
        encoding: None,
    }
}

#[async_trait]
impl ContentGateway for FakeGateway {
    async fn current_user(&self) -> Result<User> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        Ok(User {
            login: self.login.clone(),
        })
    }

    async fn repositories(&self, per_page: u32) -> Result<Vec<Repository>> {
        Ok(self
            .repositories
            .iter()
            .take(per_page as usize)
            .cloned()
            .collect())
    }

    async fn contents(&self, owner: &str, repo: &str, path: &str) -> Result<Contents> {
        assert_eq!(owner, self.login, "contents requested for a foreign owner");
        self.fetched.lock().unwrap().push(path.to_string());

        let key = key(repo, path);
        if self.failing.contains(&key) {
            return Err(Error::Gateway("connection reset".to_string()));
        }

        Ok(self
            .contents
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Contents::Other(json!({"message": "Not Found"}))))
    }
}
