use unicode_width::UnicodeWidthStr;

/// The uncommitted command line and its caret
///
/// The caret is a char offset in `0..=text.chars().count()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    caret: usize,
}

impl InputBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte index of a char offset (end of text if past it)
    fn byte_index(&self, char_offset: usize) -> usize {
        self.text.char_indices().nth(char_offset).map(|(idx, _)| idx).unwrap_or(self.text.len())
    }

    /// Replace the text and caret, as reported by the input field
    ///
    /// The caret is clamped to the text length.
    pub fn set(&mut self, value: impl Into<String>, caret: usize) {
        self.text = value.into();
        self.caret = caret.min(self.char_len());
    }

    /// Replace the text with the caret at the end
    pub fn replace(&mut self, value: impl Into<String>) {
        self.text = value.into();
        self.caret = self.char_len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.caret = 0;
    }

    pub fn insert(&mut self, ch: char) {
        let idx = self.byte_index(self.caret);
        self.text.insert(idx, ch);
        self.caret += 1;
    }

    /// Delete the char before the caret
    pub fn backspace(&mut self) {
        if self.caret == 0 {
            return;
        }
        let idx = self.byte_index(self.caret - 1);
        self.text.remove(idx);
        self.caret -= 1;
    }

    /// Delete the char under the caret
    pub fn delete(&mut self) {
        if self.caret < self.char_len() {
            let idx = self.byte_index(self.caret);
            self.text.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.char_len();
    }

    /// Text left of the caret
    pub fn before_caret(&self) -> &str {
        &self.text[..self.byte_index(self.caret)]
    }

    /// Display column of the caret, in terminal cells
    pub fn caret_column(&self) -> usize {
        self.before_caret().width()
    }
}
