use serde::{Deserialize, Serialize};

/// Link prefix for individual post pages
pub const POST_URL_PREFIX: &str = "/blog/post.html?post=";

/// One entry of the posts manifest
///
/// Field order is the serialized order in `posts-list.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub filename: String,
    pub date: String,
    pub title: String,
    pub url: String,
}

impl PostRecord {
    /// Build a record, deriving the url from the filename
    pub fn new(filename: &str, date: String, title: String) -> Self {
        Self {
            filename: filename.to_string(),
            date,
            title,
            url: post_url(filename),
        }
    }
}

/// Build the post page link for a markdown filename
///
/// ```
/// use redshift_site::models::post_url;
///
/// assert_eq!(post_url("2024-01-15-example-post.md"), "/blog/post.html?post=2024-01-15-example-post");
/// ```
pub fn post_url(filename: &str) -> String {
    let stem = filename.strip_suffix(".md").unwrap_or(filename);
    format!("{}{}", POST_URL_PREFIX, stem)
}
