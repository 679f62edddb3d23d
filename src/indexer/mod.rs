//! Blog post indexing
//!
//! Scans the posts directory, extracts per-post metadata and writes the
//! date-sorted `posts-list.json` manifest consumed by the blog listing page.
//!
//! # Error Handling Strategy
//!
//! Graceful degradation per post, fail fast per run:
//!
//! - **Run-level failure**: a missing posts directory aborts before any output
//!   is produced ([`IndexError::PostsDirNotFound`]). Failing to write the
//!   manifest also aborts.
//! - **Post-level failure**: problems with a single post are logged as
//!   warnings and the post is still listed using file-name metadata.

use std::path::PathBuf;

use thiserror::Error;

pub mod builder;
pub mod discovery;
pub mod manifest;
pub mod metadata;

pub use builder::{build_posts_list, build_posts_list_with, sort_newest_first};
pub use discovery::{PostFile, discover_posts};
pub use manifest::{GenerateSummary, generate_posts_list, render_manifest, write_manifest};
pub use metadata::{extract_post_record, fallback_record};

/// Run-level indexing failures callers may want to tell apart
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Posts directory not found: {}", .0.display())]
    PostsDirNotFound(PathBuf),
}
