//! Redshift Site - tooling for a personal website
//!
//! This library provides the two moving parts of the site:
//!
//! - A post index builder that scans `blog/posts/` for dated markdown files,
//!   reads their front-matter and writes `blog/posts-list.json`, newest first
//! - A simulated command console (`help`, `about`, `skills`, ...) with input
//!   history, usable through HTML, plain-text and terminal renderers
//!
//! # Example
//!
//! ```no_run
//! use redshift_site::generate_posts_list;
//! use std::path::PathBuf;
//!
//! let site_root = PathBuf::from("/srv/site");
//! let summary = generate_posts_list(&site_root)?;
//! println!("Indexed {} posts", summary.post_count);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ```
//! use redshift_site::{Console, TextRenderer};
//!
//! let mut console = Console::new(TextRenderer::new());
//! console.run_line("echo hello");
//! assert_eq!(console.target().lines().last().map(String::as_str), Some("hello"));
//! ```

pub mod cli;
pub mod console;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod render;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use console::{Console, ConsoleEvent, ConsoleState, Effect, update};
pub use indexer::{GenerateSummary, IndexError, build_posts_list, generate_posts_list};
pub use models::{Block, Command, PostRecord};
pub use render::{HtmlRenderer, RenderTarget, TextRenderer};
