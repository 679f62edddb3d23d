//! Manifest serialization and the one-shot generate job.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::builder::build_posts_list;
use crate::models::PostRecord;
use crate::utils::{manifest_path, posts_dir};

/// Outcome of a successful [`generate_posts_list`] run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub manifest_path: PathBuf,
    pub post_count: usize,
}

/// Serialize records as a 2-space indented JSON array
pub fn render_manifest(records: &[PostRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("Failed to serialize posts list")
}

/// Overwrite the manifest file atomically (temp file + rename)
pub fn write_manifest(path: &Path, records: &[PostRecord]) -> Result<()> {
    let json = render_manifest(records)?;

    let mut temp_name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, json)
        .with_context(|| format!("Failed to write manifest temp file: {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace manifest: {}", path.display()))?;

    Ok(())
}

/// Index `<site_root>/blog/posts` into `<site_root>/blog/posts-list.json`
///
/// Nothing is written when the posts directory is missing.
pub fn generate_posts_list(site_root: &Path) -> Result<GenerateSummary> {
    let records = build_posts_list(&posts_dir(site_root))?;
    let manifest_path = manifest_path(site_root);
    write_manifest(&manifest_path, &records)?;

    Ok(GenerateSummary { manifest_path, post_count: records.len() })
}
