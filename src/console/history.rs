/// Submitted commands with a browsing cursor
///
/// The cursor ranges over `0..=len`; `len` means "not browsing, editing fresh
/// input".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

/// Where a recall left the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Cursor moved onto an entry
    Entry(&'a str),
    /// Cursor is back on fresh input; the input buffer should be cleared
    Fresh,
    /// Nothing changed
    Unchanged,
}

impl History {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a command and reset the cursor to fresh input
    pub fn push(&mut self, command: impl Into<String>) {
        self.entries.push(command.into());
        self.index = self.entries.len();
    }

    /// Step back to the previous entry; no-op at the oldest
    pub fn previous(&mut self) -> Recall<'_> {
        if self.index == 0 {
            return Recall::Unchanged;
        }
        self.index -= 1;
        Recall::Entry(&self.entries[self.index])
    }

    /// Step forward; stepping past the newest entry returns to fresh input
    pub fn next(&mut self) -> Recall<'_> {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            Recall::Entry(&self.entries[self.index])
        } else {
            self.index = self.entries.len();
            Recall::Fresh
        }
    }
}
