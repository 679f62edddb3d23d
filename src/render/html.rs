//! HTML renderer producing the markup of the site's terminal widget.
//!
//! All user-originated text is passed through [`escape_html`] before it is
//! inserted, so `echo <script>` shows the tag instead of running it.

use std::fmt::Write;

use super::RenderTarget;
use crate::console::content::{
    ABOUT, CONTACT_LINKS, HELP_ENTRIES, MOTTO, MOTTO_ART, PROMPT, SKILLS, WELCOME,
};
use crate::models::Block;
use crate::utils::escape_html;

/// Renders blocks into the inner HTML of the terminal output element
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    html: String,
    scroll_requests: usize,
    navigation: Option<String>,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current inner HTML of the output element
    pub fn html(&self) -> &str {
        &self.html
    }

    /// How many times the view was asked to scroll to the newest block
    pub fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    /// Last requested page transition, if any
    pub fn navigation(&self) -> Option<&str> {
        self.navigation.as_deref()
    }
}

impl RenderTarget for HtmlRenderer {
    fn append(&mut self, block: &Block) {
        self.html.push_str(&render_block(block));
    }

    fn clear(&mut self) {
        self.html.clear();
    }

    fn scroll_to_end(&mut self) {
        self.scroll_requests += 1;
    }

    fn navigate(&mut self, path: &str) {
        self.navigation = Some(path.to_string());
    }
}

/// Markup for a single block
pub fn render_block(block: &Block) -> String {
    match block {
        Block::Welcome => output(&paragraph(WELCOME)),
        Block::Prompt(command) => format!(
            "<div class=\"terminal-line\"><span class=\"terminal-prompt\">{}</span><span class=\"terminal-command\">{}</span></div>",
            PROMPT,
            escape_html(command)
        ),
        Block::Help => {
            let mut body = paragraph("Available commands:");
            for (usage, description) in HELP_ENTRIES {
                let _ = write!(
                    body,
                    "<p><span class=\"help-command\">{}</span> <span class=\"help-description\">- {}</span></p>",
                    escape_html(usage),
                    description
                );
            }
            output(&body)
        }
        Block::About => output(&ABOUT.iter().map(|p| paragraph(p)).collect::<String>()),
        Block::Skills => {
            let mut grid = String::from("<div class=\"terminal-grid\">");
            for category in SKILLS {
                let _ = write!(grid, "<div class=\"terminal-card\"><h3>{}</h3><ul class=\"terminal-list\">", category.name);
                for item in category.items {
                    let _ = write!(grid, "<li>{}</li>", escape_html(item));
                }
                grid.push_str("</ul></div>");
            }
            grid.push_str("</div>");
            output(&grid)
        }
        Block::Contact => {
            let mut links = String::from("<div class=\"terminal-social\">");
            for link in CONTACT_LINKS {
                let _ = write!(links, "<a href=\"{}\" target=\"_blank\">{}</a>", link.url, link.label);
            }
            links.push_str("</div>");
            output(&links)
        }
        Block::Motto => {
            let art = escape_html(&MOTTO_ART.join("\n"));
            output(&format!("<p class=\"ascii-art\">\n{}\n</p>{}", art, paragraph(MOTTO)))
        }
        Block::Message(message) => output(&escape_html(message)),
        Block::NotFound(input) => output(&escape_html(&Block::not_found_text(input))),
    }
}

fn output(inner: &str) -> String {
    format!("<div class=\"terminal-output\">{}</div>", inner)
}

fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", escape_html(text))
}
