//! Console state machine.
//!
//! [`update`] is a pure transition `(ConsoleState, ConsoleEvent) -> (ConsoleState, effects)`.
//! The state keeps its own copy of the output log, and the returned [`Effect`]s
//! tell a display surface how to mirror it.

use super::content::BLOG_PATH;
use super::history::{History, Recall};
use super::input::InputBuffer;
use crate::models::{Block, Command};

/// Input events the console reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// The text field changed: new value and caret offset (in chars)
    Edit { value: String, caret: usize },
    /// Enter: submit the input buffer
    Submit,
    /// Arrow up
    RecallPrevious,
    /// Arrow down
    RecallNext,
    /// The console was clicked or focused
    Focus,
}

/// Instructions for the display surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Append(Block),
    Clear,
    ScrollToEnd,
    Navigate(&'static str),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleState {
    input: InputBuffer,
    history: History,
    output: Vec<Block>,
}

impl ConsoleState {
    /// A fresh session showing the welcome banner
    pub fn new() -> Self {
        Self { output: vec![Block::Welcome], ..Self::default() }
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn output(&self) -> &[Block] {
        &self.output
    }

    /// Submit a command line
    ///
    /// Blank lines are ignored. Otherwise the trimmed line is echoed,
    /// dispatched and added to history, and the input buffer is cleared.
    pub fn submit(&mut self, line: &str) -> Vec<Effect> {
        let command = line.trim();
        if command.is_empty() {
            return Vec::new();
        }

        let mut effects = vec![self.append(Block::Prompt(command.to_string()))];
        effects.extend(self.dispatch(Command::parse(command)));
        effects.push(Effect::ScrollToEnd);

        self.history.push(command);
        self.input.clear();

        effects
    }

    /// Run a parsed command against the output log
    pub fn dispatch(&mut self, command: Command) -> Option<Effect> {
        let block = match command {
            Command::Help => Block::Help,
            Command::About => Block::About,
            Command::Skills => Block::Skills,
            Command::Contact => Block::Contact,
            Command::Motto => Block::Motto,
            Command::Echo(message) => Block::Message(message),
            Command::Unknown(input) => Block::NotFound(input),
            Command::Clear => {
                self.output.clear();
                return Some(Effect::Clear);
            }
            Command::Blog => return Some(Effect::Navigate(BLOG_PATH)),
        };

        Some(self.append(block))
    }

    /// Load the previous history entry into the input buffer
    pub fn recall_previous(&mut self) {
        if let Recall::Entry(command) = self.history.previous() {
            self.input.replace(command);
        }
    }

    /// Load the next history entry, or clear the input past the newest one
    pub fn recall_next(&mut self) {
        match self.history.next() {
            Recall::Entry(command) => self.input.replace(command),
            Recall::Fresh => self.input.clear(),
            Recall::Unchanged => {}
        }
    }

    fn append(&mut self, block: Block) -> Effect {
        self.output.push(block.clone());
        Effect::Append(block)
    }
}

/// Apply one event to the console state
pub fn update(mut state: ConsoleState, event: ConsoleEvent) -> (ConsoleState, Vec<Effect>) {
    let effects = match event {
        ConsoleEvent::Edit { value, caret } => {
            state.input.set(value, caret);
            Vec::new()
        }
        ConsoleEvent::Submit => {
            let line = state.input.text().to_string();
            state.submit(&line)
        }
        ConsoleEvent::RecallPrevious => {
            state.recall_previous();
            Vec::new()
        }
        ConsoleEvent::RecallNext => {
            state.recall_next();
            Vec::new()
        }
        ConsoleEvent::Focus => Vec::new(),
    };

    (state, effects)
}
