use serde::{Deserialize, Serialize};

/// Authenticated user (`GET /user`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub login: String,
}

/// GitHub repository information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub private: bool,
    pub html_url: String,
}

/// One object descriptor from the contents API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub download_url: Option<String>,
    /// Base64 body, only present when a single file is requested
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

/// Body of `GET /repos/{owner}/{repo}/contents/{path}`
///
/// Directories come back as an array, files as a single object. Anything
/// else (error bodies, unexpected JSON) lands in `Other`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Contents {
    Listing(Vec<ContentEntry>),
    Single(ContentEntry),
    Other(serde_json::Value),
}

impl Contents {
    pub fn shape(&self) -> &'static str {
        match self {
            Contents::Listing(_) => "listing",
            Contents::Single(_) => "single",
            Contents::Other(_) => "other",
        }
    }
}
