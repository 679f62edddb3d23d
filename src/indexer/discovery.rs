use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::utils::is_post_filename;

/// A date-prefixed markdown file found in the posts directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFile {
    pub filename: String,
    pub path: PathBuf,
}

/// List the posts directory and keep date-prefixed `.md` entries
///
/// The scan is non-recursive and ordered by file name, which makes the
/// manifest order deterministic for posts sharing a date. Entries that do not
/// match the naming pattern, or whose names are not valid UTF-8, are skipped.
/// Unreadable entries are logged and skipped.
pub fn discover_posts(posts_dir: &Path) -> Result<Vec<PostFile>> {
    let mut posts = Vec::new();

    for entry in WalkDir::new(posts_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", posts_dir.display(), e);
                continue;
            }
        };

        let Some(filename) = entry.file_name().to_str() else {
            debug!("Skipping non UTF-8 file name: {}", entry.path().display());
            continue;
        };

        if !is_post_filename(filename) {
            debug!("Skipping {}: not a dated markdown post", filename);
            continue;
        }

        posts.push(PostFile { filename: filename.to_string(), path: entry.path().to_path_buf() });
    }

    Ok(posts)
}
