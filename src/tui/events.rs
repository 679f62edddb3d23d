use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    Submit,
    HistoryPrevious,
    HistoryNext,
    CaretLeft,
    CaretRight,
    CaretHome,
    CaretEnd,
    Insert(char),
    Backspace,
    Delete,
    ClearScreen,
    ScrollUp,
    ScrollDown,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::ClearScreen,

        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Up, _) => Action::HistoryPrevious,
        (KeyCode::Down, _) => Action::HistoryNext,

        // Emacs-style caret keys
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::CaretHome,
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::CaretEnd,
        (KeyCode::Left, _) => Action::CaretLeft,
        (KeyCode::Right, _) => Action::CaretRight,
        (KeyCode::Home, _) => Action::CaretHome,
        (KeyCode::End, _) => Action::CaretEnd,

        (KeyCode::PageUp, _) => Action::ScrollUp,
        (KeyCode::PageDown, _) => Action::ScrollDown,

        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Insert(c)
        }
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Delete, _) => Action::Delete,

        _ => Action::None,
    }
}
