use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;

// Maximum size of a single markdown post: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Blog directory, relative to the site root
pub const BLOG_DIR: &str = "blog";
/// Posts directory, relative to the blog directory
pub const POSTS_DIR: &str = "posts";
/// Manifest file name, relative to the blog directory
pub const MANIFEST_FILENAME: &str = "posts-list.json";

/// Length of the `YYYY-MM-DD` prefix
const DATE_PREFIX_LEN: usize = 10;
/// Length of the `YYYY-MM-DD-` prefix, separator included
const SLUG_OFFSET: usize = DATE_PREFIX_LEN + 1;

// ASCII digits only: the prefix is sliced by byte offset
static POST_FILENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}-.*\.md$").expect("post filename pattern is valid")
});

/// Directory holding the markdown posts
pub fn posts_dir(site_root: &Path) -> PathBuf {
    site_root.join(BLOG_DIR).join(POSTS_DIR)
}

/// Path of the generated posts manifest
pub fn manifest_path(site_root: &Path) -> PathBuf {
    site_root.join(BLOG_DIR).join(MANIFEST_FILENAME)
}

/// Check that a file name is a date-prefixed markdown post
///
/// ```
/// use redshift_site::utils::is_post_filename;
///
/// assert!(is_post_filename("2024-01-15-example-post.md"));
/// assert!(!is_post_filename("notes.md"));
/// ```
pub fn is_post_filename(filename: &str) -> bool {
    filename.ends_with(".md") && POST_FILENAME_RE.is_match(filename)
}

/// The `YYYY-MM-DD` prefix of a post file name
///
/// Callers must pass a name accepted by [`is_post_filename`]; anything
/// shorter yields the whole name.
pub fn filename_date(filename: &str) -> &str {
    filename.get(..DATE_PREFIX_LEN).unwrap_or(filename)
}

/// Derive a title from a post file name
///
/// Drops the `YYYY-MM-DD-` prefix and the `.md` extension and turns hyphens
/// into spaces. Extra separators are kept, so `2024-01-15--x.md` becomes `" x"`.
///
/// ```
/// use redshift_site::utils::humanize_filename;
///
/// assert_eq!(humanize_filename("2024-01-15-example-post.md"), "example post");
/// ```
pub fn humanize_filename(filename: &str) -> String {
    let slug = filename.get(SLUG_OFFSET..).unwrap_or("");
    let slug = slug.strip_suffix(".md").unwrap_or(slug);
    slug.replace('-', " ")
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle so the checked file is the one that gets read.
///
/// # Errors
///
/// Returns an error if the metadata cannot be read or the file is larger than 10MB.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}
