//! Simulated command-line console for the personal site.
//!
//! The console is split into a pure state machine ([`ConsoleState`] + [`update`])
//! and a small driver ([`Console`]) that forwards the resulting effects to a
//! [`RenderTarget`]. Nothing here depends on a UI toolkit, so the same console
//! backs the HTML renderer, the plain-text `exec` command and the TUI.

pub mod content;
pub mod history;
pub mod input;
pub mod state;

pub use history::{History, Recall};
pub use input::InputBuffer;
pub use state::{ConsoleEvent, ConsoleState, Effect, update};

use crate::render::RenderTarget;

/// A console session bound to a display surface
pub struct Console<R: RenderTarget> {
    state: ConsoleState,
    target: R,
}

impl<R: RenderTarget> Console<R> {
    /// Start a session, rendering the welcome banner
    pub fn new(mut target: R) -> Self {
        let state = ConsoleState::new();
        for block in state.output() {
            target.append(block);
        }
        target.scroll_to_end();
        Self { state, target }
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut R {
        &mut self.target
    }

    pub fn into_target(self) -> R {
        self.target
    }

    /// Process one event and mirror its effects on the display surface
    pub fn handle(&mut self, event: ConsoleEvent) {
        let (state, effects) = update(std::mem::take(&mut self.state), event);
        self.state = state;
        for effect in effects {
            apply_effect(&mut self.target, effect);
        }
    }

    /// Submit a full command line, as if typed and followed by Enter
    pub fn run_line(&mut self, line: &str) {
        self.handle(ConsoleEvent::Edit { value: line.to_string(), caret: line.chars().count() });
        self.handle(ConsoleEvent::Submit);
    }
}

fn apply_effect<R: RenderTarget>(target: &mut R, effect: Effect) {
    match effect {
        Effect::Append(block) => target.append(&block),
        Effect::Clear => target.clear(),
        Effect::ScrollToEnd => target.scroll_to_end(),
        Effect::Navigate(path) => target.navigate(path),
    }
}
