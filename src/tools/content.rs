use crate::github::models::{ContentEntry, Contents};
use crate::github::ContentGateway;
use crate::tools::models::FileContent;
use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use tracing::debug;

/// Largest declared size, in bytes, that is still decoded
pub const MAX_FILE_SIZE: u64 = 200_000;

/// Fetch and decode one file
pub async fn get_file_content(
    gateway: &dyn ContentGateway,
    owner: &str,
    repo: &str,
    path: &str,
) -> Result<FileContent> {
    match gateway.contents(owner, repo, path).await? {
        Contents::Single(entry) => resolve_descriptor(entry, path),
        other => {
            debug!(
                "No file content at {}/{}:{} ({} response)",
                owner,
                repo,
                path,
                other.shape()
            );
            Ok(FileContent::absent(path))
        }
    }
}

/// Shape a single descriptor into a `FileContent`.
///
/// The size check runs before any decoding. Decoded results echo the
/// descriptor's own path; `requested_path` is only used when there is no
/// content at all.
pub fn resolve_descriptor(entry: ContentEntry, requested_path: &str) -> Result<FileContent> {
    let Some(encoded) = entry.content else {
        debug!("Descriptor for '{}' carries no content", requested_path);
        return Ok(FileContent::absent(requested_path));
    };

    if let Some(size) = entry.size {
        if size > MAX_FILE_SIZE {
            debug!(
                "Skipping '{}': {} bytes exceeds {} byte limit",
                entry.path, size, MAX_FILE_SIZE
            );
            return Ok(FileContent::too_large(entry.path));
        }
    }

    if let Some(encoding) = entry.encoding.as_deref() {
        if encoding != "base64" {
            return Err(Error::Decode(format!(
                "Unsupported content encoding '{encoding}' for {}",
                entry.path
            )));
        }
    }

    let content = decode_content(&encoded)?;
    Ok(FileContent::text(entry.path, content))
}

/// Decode a base64 body (GitHub wraps it with newlines) into UTF-8 text
pub fn decode_content(encoded: &str) -> Result<String> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| Error::Decode(format!("Invalid base64 content: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|e| Error::Decode(format!("File is not valid UTF-8 text: {e}")))
}
