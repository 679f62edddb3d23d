//! Output pane state for the terminal console.

use std::time::{Duration, Instant};

use ratatui::text::Line;

use super::rendering::styled_lines;
use crate::models::Block;
use crate::render::RenderTarget;

/// Duration for informational status messages (milliseconds)
pub const STATUS_INFO_DURATION_MS: u64 = 3000;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Styled output lines plus the pane's scroll position
///
/// `scroll_back` counts lines scrolled up from the newest one; 0 pins the
/// view to the bottom.
#[derive(Debug, Default)]
pub struct TuiOutput {
    lines: Vec<Line<'static>>,
    scroll_back: usize,
    status_message: Option<StatusMessage>,
}

impl TuiOutput {
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status_message.as_ref()
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_back = (self.scroll_back + rows).min(self.lines.len());
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(rows);
    }

    /// Set a transient status message with automatic expiry
    pub fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
    }

    /// Drop the status message once expired; returns true if one was dropped
    pub fn clear_expired_status(&mut self) -> bool {
        let expired =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
        }
        expired
    }
}

impl RenderTarget for TuiOutput {
    fn append(&mut self, block: &Block) {
        self.lines.extend(styled_lines(block));
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.scroll_back = 0;
    }

    fn scroll_to_end(&mut self) {
        self.scroll_back = 0;
    }

    fn navigate(&mut self, path: &str) {
        self.set_status(format!("Navigate to {}", path), MessageType::Info, STATUS_INFO_DURATION_MS);
    }
}
