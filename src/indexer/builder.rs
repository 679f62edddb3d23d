//! Posts list builder.
//!
//! # Error Handling Strategy
//!
//! - **Missing posts directory**: the only fatal condition. Returns
//!   [`IndexError::PostsDirNotFound`] before anything is read or written.
//! - **Per-post failures**: unreadable files, malformed front-matter and bad
//!   dates are logged and the post falls back to file-name metadata. One bad
//!   post never aborts the batch.
//! - **Summary**: the record count is logged at `info` level once the list is sorted.

use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;
use tracing::info;

use super::IndexError;
use super::discovery::discover_posts;
use super::metadata::extract_post_record;
use crate::models::PostRecord;
use crate::parsers::{FrontMatterParser, YamlFrontMatter};

/// Build the posts list for a posts directory using YAML front-matter
///
/// Returns one [`PostRecord`] per date-prefixed markdown file, newest first.
///
/// # Errors
///
/// Returns [`IndexError::PostsDirNotFound`] if `posts_dir` is not a directory.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use redshift_site::build_posts_list;
///
/// let posts = build_posts_list(Path::new("blog/posts"))?;
/// println!("{} posts", posts.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_posts_list(posts_dir: &Path) -> Result<Vec<PostRecord>> {
    build_posts_list_with(posts_dir, &YamlFrontMatter)
}

/// Build the posts list with a custom front-matter parser
pub fn build_posts_list_with(
    posts_dir: &Path,
    parser: &dyn FrontMatterParser,
) -> Result<Vec<PostRecord>> {
    if !posts_dir.is_dir() {
        return Err(IndexError::PostsDirNotFound(posts_dir.to_path_buf()).into());
    }

    let posts = discover_posts(posts_dir)?;

    // Ordered collect joins the parallel reads back into scan order
    let mut records: Vec<PostRecord> = posts
        .par_iter()
        .map(|post| extract_post_record(&post.path, &post.filename, parser))
        .collect();

    sort_newest_first(&mut records);

    info!("Indexed {} posts from {}", records.len(), posts_dir.display());

    Ok(records)
}

/// Sort records by date, newest first
///
/// Dates are `YYYY-MM-DD`, so string order is date order. The sort is stable:
/// posts sharing a date keep their scan order.
pub fn sort_newest_first(records: &mut [PostRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}
