use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Console screen layout
pub struct ConsoleLayout {
    pub output_area: Rect,
    pub input_area: Rect,
    pub status_area: Rect,
}

impl ConsoleLayout {
    /// Stack the output pane, the one-row prompt and the one-row status bar
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Output pane (borders + at least one line)
                Constraint::Length(1), // Prompt
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self { output_area: chunks[0], input_area: chunks[1], status_area: chunks[2] }
    }
}
