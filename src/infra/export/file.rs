use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::engine::ExportPayload;

/// Writes `payload` into `dir` under its suggested file name, creating the
/// directory if needed. Returns the written path.
pub fn write_payload(dir: &Path, payload: &ExportPayload) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export dir: {}", dir.display()))?;

    let path = dir.join(&payload.filename);
    fs::write(&path, payload.content.as_bytes())
        .with_context(|| format!("failed to write export file: {}", path.display()))?;

    Ok(path)
}
