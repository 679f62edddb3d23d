//! Plain-text renderer used for non-interactive output.
//!
//! User text is stripped of control sequences so it cannot drive the terminal.

use super::RenderTarget;
use crate::console::content::{
    ABOUT, CONTACT_LINKS, HELP_ENTRIES, MOTTO, MOTTO_ART, PROMPT, SKILLS, WELCOME,
};
use crate::models::Block;
use crate::utils::strip_control_sequences;

/// Collects rendered lines in order
#[derive(Debug, Default)]
pub struct TextRenderer {
    lines: Vec<String>,
    navigation: Option<String>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn navigation(&self) -> Option<&str> {
        self.navigation.as_deref()
    }

    /// All lines joined with newlines
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl RenderTarget for TextRenderer {
    fn append(&mut self, block: &Block) {
        self.lines.extend(block_lines(block));
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    // Lines are printed in order; the newest is always last
    fn scroll_to_end(&mut self) {}

    fn navigate(&mut self, path: &str) {
        self.navigation = Some(path.to_string());
        self.lines.push(format!("Navigate to {}", path));
    }
}

/// Text lines for a single block
pub fn block_lines(block: &Block) -> Vec<String> {
    match block {
        Block::Welcome => vec![WELCOME.to_string()],
        Block::Prompt(command) => {
            vec![format!("{} $ {}", PROMPT, strip_control_sequences(command))]
        }
        Block::Help => {
            let width = HELP_ENTRIES.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
            let mut lines = vec!["Available commands:".to_string()];
            lines.extend(HELP_ENTRIES.iter().map(|(usage, description)| {
                format!("  {:<width$} - {}", usage, description, width = width)
            }));
            lines
        }
        Block::About => ABOUT.iter().map(|p| p.to_string()).collect(),
        Block::Skills => SKILLS
            .iter()
            .map(|category| format!("{}: {}", category.name, category.items.join(", ")))
            .collect(),
        Block::Contact => CONTACT_LINKS
            .iter()
            .map(|link| format!("{} <{}>", link.label, link.url))
            .collect(),
        Block::Motto => {
            let mut lines: Vec<String> = MOTTO_ART.iter().map(|l| l.to_string()).collect();
            lines.push(MOTTO.to_string());
            lines
        }
        Block::Message(message) => vec![strip_control_sequences(message)],
        Block::NotFound(input) => vec![Block::not_found_text(&strip_control_sequences(input))],
    }
}
