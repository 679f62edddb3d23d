//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for creating test site directory structures
pub struct SiteDirBuilder {
    temp_dir: TempDir,
}

impl SiteDirBuilder {
    /// Create a new builder with an empty `blog/posts` directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("blog").join("posts"))
            .expect("Failed to create posts dir");
        Self { temp_dir }
    }

    /// Create a site root without a posts directory
    pub fn without_posts() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the site root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a file to `blog/posts` with the given content
    pub fn with_post(self, filename: &str, content: &str) -> Self {
        self.with_post_bytes(filename, content.as_bytes())
    }

    /// Add a file to `blog/posts` with raw content
    pub fn with_post_bytes(self, filename: &str, content: &[u8]) -> Self {
        let path = self.temp_dir.path().join("blog").join("posts").join(filename);
        fs::write(path, content).expect("Failed to write post");
        self
    }

    /// Add a directory inside `blog/posts`
    pub fn with_post_dir(self, name: &str) -> Self {
        let path = self.temp_dir.path().join("blog").join("posts").join(name);
        fs::create_dir(path).expect("Failed to create directory");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SiteDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Post content with a YAML front-matter block
pub fn post_with_front_matter(date: &str, title: &str, body: &str) -> String {
    format!("---\ndate: {}\ntitle: \"{}\"\n---\n{}", date, title, body)
}

pub fn posts_dir(root: &Path) -> PathBuf {
    root.join("blog").join("posts")
}

pub fn manifest_path(root: &Path) -> PathBuf {
    root.join("blog").join("posts-list.json")
}

/// Parse the manifest written under `root`
pub fn read_manifest(root: &Path) -> serde_json::Value {
    let content = fs::read_to_string(manifest_path(root)).expect("Failed to read manifest");
    serde_json::from_str(&content).expect("Manifest is not valid JSON")
}
