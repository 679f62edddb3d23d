use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{self, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::layout::ConsoleLayout;
use super::output::{MessageType, StatusMessage};
use crate::console::InputBuffer;
use crate::console::content::PROMPT;
use crate::models::Block;
use crate::render::block_lines;
use crate::utils::strip_control_sequences;

const PROMPT_SEPARATOR: &str = " $ ";

const EMERALD: Color = Color::Rgb(16, 185, 129);
const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const RED: Color = Color::Rgb(239, 68, 68);
const CYAN: Color = Color::Rgb(34, 211, 238);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything needed to draw one frame
pub struct RenderState<'a> {
    pub lines: &'a [Line<'static>],
    pub scroll_back: usize,
    pub input: &'a InputBuffer,
    pub history_len: usize,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = ConsoleLayout::new(frame.area());

    render_output(frame, layout.output_area, state.lines, state.scroll_back);
    render_input(frame, layout.input_area, state.input);
    render_status_bar(frame, layout.status_area, state.history_len, state.status_message);
}

/// Styled lines for one output block
pub fn styled_lines(block: &Block) -> Vec<Line<'static>> {
    if let Block::Prompt(command) = block {
        return vec![Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(EMERALD).add_modifier(Modifier::BOLD)),
            Span::styled(PROMPT_SEPARATOR, Style::default().fg(MUTED)),
            Span::raw(strip_control_sequences(command)),
        ])];
    }

    let style = match block {
        Block::Welcome => Style::default().fg(MUTED),
        Block::Help => Style::default().fg(CYAN),
        Block::Motto => Style::default().fg(EMERALD),
        Block::NotFound(_) => Style::default().fg(RED),
        _ => Style::default(),
    };

    block_lines(block).into_iter().map(|line| Line::styled(line, style)).collect()
}

/// First visible line so that `scroll_back` lines are hidden below the view
fn scroll_offset(total: usize, visible: usize, scroll_back: usize) -> usize {
    total.saturating_sub(visible).saturating_sub(scroll_back)
}

fn render_output(frame: &mut Frame, area: Rect, lines: &[Line<'static>], scroll_back: usize) {
    let visible = area.height.saturating_sub(2) as usize;
    let offset = scroll_offset(lines.len(), visible, scroll_back);

    let paragraph = Paragraph::new(Text::from(lines.to_vec()))
        .block(
            widgets::Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(format!(" {} ", PROMPT)),
        )
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));

    frame.render_widget(paragraph, area);
}

fn render_input(frame: &mut Frame, area: Rect, input: &InputBuffer) {
    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(EMERALD).add_modifier(Modifier::BOLD)),
        Span::styled(PROMPT_SEPARATOR, Style::default().fg(MUTED)),
        Span::raw(input.text().to_string()),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    // Caret sits after the prompt plus the measured text left of it
    let column = PROMPT.width() + PROMPT_SEPARATOR.width() + input.caret_column();
    let max_x = area.x + area.width.saturating_sub(1);
    let x = area.x.saturating_add(u16::try_from(column).unwrap_or(u16::MAX)).min(max_x);
    frame.set_cursor_position(Position::new(x, area.y));
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    history_len: usize,
    status_message: Option<&StatusMessage>,
) {
    let (status_text, style) = match status_message {
        Some(message) => {
            let fg = match message.message_type {
                MessageType::Info => EMERALD,
                MessageType::Error => RED,
            };
            (format!(" {} ", message.text), Style::default().fg(fg).bg(BAR_BG))
        }
        None => (
            format!(
                " {} commands | Enter: run | ↑↓: history | PgUp/PgDn: scroll | Esc: quit ",
                history_len
            ),
            Style::default().fg(BRIGHT).bg(BAR_BG),
        ),
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal.backend().buffer().content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(5, 10, 0), 0);
        assert_eq!(scroll_offset(30, 10, 0), 20);
        assert_eq!(scroll_offset(30, 10, 5), 15);
        assert_eq!(scroll_offset(30, 10, 50), 0);
    }

    #[test]
    fn test_styled_prompt_line() {
        let lines = styled_lines(&Block::Prompt("help".to_string()));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].to_string(), "leo@redshift $ help");
    }

    #[test]
    fn test_styled_lines_match_text_lines() {
        for block in [Block::Help, Block::Skills, Block::Motto, Block::NotFound("x".to_string())] {
            assert_eq!(styled_lines(&block).len(), block_lines(&block).len());
        }
    }

    #[test]
    fn test_render_shows_newest_output_and_input() {
        let backend = TestBackend::new(80, 12);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut lines = Vec::new();
        for i in 0..30 {
            lines.extend(styled_lines(&Block::Message(format!("line {}", i))));
        }
        let mut input = InputBuffer::default();
        input.replace("ech");

        terminal
            .draw(|f| {
                let state = RenderState {
                    lines: &lines,
                    scroll_back: 0,
                    input: &input,
                    history_len: 3,
                    status_message: None,
                };
                render_ui(f, &state);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("line 29"));
        assert!(!text.contains("line 0 "));
        assert!(text.contains("leo@redshift $ ech"));
        assert!(text.contains("3 commands"));
    }

    #[test]
    fn test_render_caret_position() {
        let backend = TestBackend::new(80, 10);
        let mut terminal = Terminal::new(backend).unwrap();

        let mut input = InputBuffer::default();
        input.set("abc", 1);

        terminal
            .draw(|f| {
                let state = RenderState {
                    lines: &[],
                    scroll_back: 0,
                    input: &input,
                    history_len: 0,
                    status_message: None,
                };
                render_ui(f, &state);
            })
            .unwrap();

        let position = terminal.get_cursor_position().unwrap();
        // "leo@redshift $ " is 15 cells, plus one char before the caret
        assert_eq!(position, Position::new(16, 8));
    }

    #[test]
    fn test_render_status_message() {
        let backend = TestBackend::new(80, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let input = InputBuffer::default();
        let message = StatusMessage {
            text: "Navigate to /blog".to_string(),
            message_type: MessageType::Info,
            expires_at: Instant::now(),
        };

        terminal
            .draw(|f| {
                let state = RenderState {
                    lines: &[],
                    scroll_back: 0,
                    input: &input,
                    history_len: 0,
                    status_message: Some(&message),
                };
                render_ui(f, &state);
            })
            .unwrap();

        assert!(buffer_text(&terminal).contains("Navigate to /blog"));
    }

    #[test]
    fn test_render_tiny_terminal() {
        let backend = TestBackend::new(10, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputBuffer::default();
        input.replace("a very long command line");

        terminal
            .draw(|f| {
                let state = RenderState {
                    lines: &[],
                    scroll_back: 0,
                    input: &input,
                    history_len: 0,
                    status_message: None,
                };
                render_ui(f, &state);
            })
            .unwrap();
    }
}
