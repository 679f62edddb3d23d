//! Data models shared across the crate.
//!
//! - [`PostRecord`] - One entry of the generated posts manifest
//! - [`Command`] - A parsed console command
//! - [`Block`] - A unit of console output

pub mod block;
pub mod command;
pub mod post;

pub use block::Block;
pub use command::Command;
pub use post::{POST_URL_PREFIX, PostRecord, post_url};
