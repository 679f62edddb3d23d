//! TUI application state and event handling.
//!
//! `App` owns a [`Console`] bound to a [`TuiOutput`] and runs the main event
//! loop. Every key that edits the prompt is routed through
//! [`ConsoleEvent::Edit`], so history recall and submission behave exactly as
//! in the other front ends.

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::output::TuiOutput;
use super::rendering::{RenderState, render_ui};
use crate::console::{Console, ConsoleEvent, InputBuffer};

/// Rows moved per PageUp/PageDown
const SCROLL_PAGE: usize = 10;

pub struct App {
    console: Console<TuiOutput>,
    should_quit: bool,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new() -> Self {
        Self {
            console: Console::new(TuiOutput::default()),
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn console(&self) -> &Console<TuiOutput> {
        &self.console
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            if self.console.target_mut().clear_expired_status() {
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| {
                    let output = self.console.target();
                    let state = RenderState {
                        lines: output.lines(),
                        scroll_back: output.scroll_back(),
                        input: self.console.state().input(),
                        history_len: self.console.state().history().len(),
                        status_message: output.status_message(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::None => return,
            Action::Quit => self.should_quit = true,
            Action::Submit => self.console.handle(ConsoleEvent::Submit),
            Action::HistoryPrevious => self.console.handle(ConsoleEvent::RecallPrevious),
            Action::HistoryNext => self.console.handle(ConsoleEvent::RecallNext),
            Action::CaretLeft => self.edit(InputBuffer::move_left),
            Action::CaretRight => self.edit(InputBuffer::move_right),
            Action::CaretHome => self.edit(InputBuffer::move_home),
            Action::CaretEnd => self.edit(InputBuffer::move_end),
            Action::Insert(ch) => self.edit(|input| input.insert(ch)),
            Action::Backspace => self.edit(InputBuffer::backspace),
            Action::Delete => self.edit(InputBuffer::delete),
            Action::ClearScreen => self.clear_screen(),
            Action::ScrollUp => self.console.target_mut().scroll_up(SCROLL_PAGE),
            Action::ScrollDown => self.console.target_mut().scroll_down(SCROLL_PAGE),
        }
        self.needs_redraw = true;
    }

    /// Apply a local edit and report the resulting value and caret
    fn edit(&mut self, apply: impl FnOnce(&mut InputBuffer)) {
        let mut input = self.console.state().input().clone();
        apply(&mut input);
        self.console.handle(ConsoleEvent::Edit {
            value: input.text().to_string(),
            caret: input.caret(),
        });
    }

    /// Ctrl+L runs `clear` but keeps whatever is typed at the prompt
    fn clear_screen(&mut self) {
        let pending = self.console.state().input().clone();
        self.console.run_line("clear");
        self.console.handle(ConsoleEvent::Edit {
            value: pending.text().to_string(),
            caret: pending.caret(),
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
