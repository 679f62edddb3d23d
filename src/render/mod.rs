//! Display surfaces for the console.
//!
//! A [`RenderTarget`] receives the console's output operations. Renderers own
//! the presentation of each [`Block`] and are responsible for making
//! user-originated text safe for their surface.

pub mod html;
pub mod text;

pub use html::HtmlRenderer;
pub use text::{TextRenderer, block_lines};

use crate::models::Block;

/// Capability interface the console renders through
pub trait RenderTarget {
    /// Append a block after the newest one
    fn append(&mut self, block: &Block);

    /// Remove every block
    fn clear(&mut self);

    /// Bring the newest block into view
    fn scroll_to_end(&mut self);

    /// Leave the console for another page. Surfaces without routing ignore it.
    fn navigate(&mut self, _path: &str) {}
}
