// Validation utilities for tool arguments
use crate::error::{Error, Result};
use serde_json::Value;
use tracing::warn;

/// Validate a repository name owned by the acting user
pub fn validate_repo_name(repo_name: &str) -> Result<&str> {
    let name = repo_name.trim();

    if name.is_empty() {
        return Err(Error::Validation(
            "Repository name cannot be empty".to_string(),
        ));
    }

    if name.contains('/') || name == "." || name == ".." {
        warn!("Security: Rejected repository name: {}", repo_name);
        return Err(Error::Validation(format!(
            "Invalid repository name '{repo_name}': expected a bare name without owner"
        )));
    }

    Ok(name)
}

/// Normalize a repository-relative path: trims surrounding slashes and
/// whitespace, collapses empty segments, rejects `.` and `..` segments
pub fn normalize_repo_path(path: &str) -> Result<String> {
    let mut segments = Vec::new();

    for segment in path.trim().split('/') {
        match segment {
            "" => continue,
            "." | ".." => {
                warn!("Security: Blocked path traversal attempt: {}", path);
                return Err(Error::Validation(
                    "Relative path segments are not allowed".to_string(),
                ));
            }
            _ => segments.push(segment),
        }
    }

    Ok(segments.join("/"))
}

/// Coerce a caller-supplied depth into a non-negative integer.
///
/// Accepts JSON integers, integral floats and decimal strings. `None` and
/// `null` select `default`.
pub fn coerce_max_depth(value: Option<&Value>, default: u32) -> Result<u32> {
    let depth = match value {
        None | Some(Value::Null) => return Ok(default),
        Some(Value::Number(number)) => {
            if let Some(n) = number.as_i64() {
                n
            } else if let Some(n) = number.as_u64() {
                i64::try_from(n).unwrap_or(i64::MAX)
            } else {
                match number.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => f as i64,
                    _ => {
                        return Err(Error::Validation(format!(
                            "max_depth must be an integer, got {number}"
                        )))
                    }
                }
            }
        }
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| {
            Error::Validation(format!("max_depth must be an integer, got \"{s}\""))
        })?,
        Some(other) => {
            return Err(Error::Validation(format!(
                "max_depth must be an integer, got {other}"
            )))
        }
    };

    if depth < 0 {
        return Err(Error::Validation(format!(
            "max_depth must not be negative, got {depth}"
        )));
    }

    u32::try_from(depth)
        .map_err(|_| Error::Validation(format!("max_depth is too large: {depth}")))
}
