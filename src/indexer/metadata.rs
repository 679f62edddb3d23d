//! Per-post metadata extraction.
//!
//! Extraction never fails: any problem reading or parsing a post is logged and
//! the record falls back to metadata derived from the file name.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use crate::models::PostRecord;
use crate::parsers::{FrontMatterParser, first_heading, normalize_date};
use crate::utils::{filename_date, humanize_filename, validate_file_size};

/// Build the manifest record for one post file
///
/// - `date`: front-matter `date` normalized to `YYYY-MM-DD`, else the file name prefix
/// - `title`: front-matter `title`, else the first `# Heading` line anywhere in
///   the raw file (front-matter comments included), else the humanized file name
///
/// Unreadable files, malformed front-matter and unparseable dates all produce
/// [`fallback_record`].
pub fn extract_post_record(
    path: &Path,
    filename: &str,
    parser: &dyn FrontMatterParser,
) -> PostRecord {
    match try_extract(path, filename, parser) {
        Ok(record) => record,
        Err(e) => {
            warn!("Error processing {}: {:#}", filename, e);
            fallback_record(filename)
        }
    }
}

/// Record built from the file name alone
pub fn fallback_record(filename: &str) -> PostRecord {
    PostRecord::new(filename, filename_date(filename).to_string(), humanize_filename(filename))
}

fn try_extract(path: &Path, filename: &str, parser: &dyn FrontMatterParser) -> Result<PostRecord> {
    let content = read_post(path)?;
    let document = parser.parse(&content).context("Malformed front-matter")?;

    let date = match document.value("date") {
        Some(value) => normalize_date(value).context("Invalid front-matter date")?,
        None => filename_date(filename).to_string(),
    };

    let title = document
        .text("title")
        .or_else(|| first_heading(&content))
        .unwrap_or_else(|| humanize_filename(filename));

    Ok(PostRecord::new(filename, date, title))
}

/// Read a post as text, replacing invalid UTF-8 sequences
fn read_post(path: &Path) -> Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open post: {}", path.display()))?;
    validate_file_size(&file, path)?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read post: {}", path.display()))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
