//! Loading raw release batches from JSON documents supplied by the host.

use crate::errors::{AppError, AppResult};
use crate::models::event::{RawBatch, RawInput};
use std::fs;
use std::path::{Path, PathBuf};

/// Expand a leading `~/` to the home directory.
pub fn resolve_path(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Parse one JSON document into its batches.
pub fn parse_batches(json: &str) -> AppResult<Vec<RawBatch>> {
    let input: RawInput = serde_json::from_str(json)?;
    Ok(input.into_batches())
}

pub fn load_file(path: &Path) -> AppResult<Vec<RawBatch>> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let batches = parse_batches(&content)?;
    tracing::debug!(path = %path.display(), batches = batches.len(), "input loaded");
    Ok(batches)
}

/// Batches of every file, in file order.
pub fn load_batches<S: AsRef<str>>(paths: &[S]) -> AppResult<Vec<RawBatch>> {
    let mut all = Vec::new();
    for p in paths {
        all.extend(load_file(&resolve_path(p.as_ref()))?);
    }
    Ok(all)
}
