//! Editable query text with a cursor
//!
//! The cursor is a byte offset that always sits on a char boundary.

/// Text of the search input plus its edit cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuffer {
    value: String,
    cursor: usize,
}

impl QueryBuffer {
    /// Create a buffer holding `value` with the cursor at the end
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    /// Current text
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position (byte offset)
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the whole text, moving the cursor to the end
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev_char_boundary = self.value[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
            self.value.remove(prev_char_boundary);
            self.cursor = prev_char_boundary;
        }
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.value[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.value[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.value.len(), |(i, _)| self.cursor + i);
        }
    }

    pub const fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Delete the word before the cursor (and trailing whitespace)
    pub fn delete_word(&mut self) {
        let trimmed = self.value[..self.cursor].trim_end();
        if let Some((idx, space)) = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
        {
            let word_start = idx + space.len_utf8();
            self.value.drain(word_start..self.cursor);
            self.cursor = word_start;
        } else {
            self.value.drain(..self.cursor);
            self.cursor = 0;
        }
    }
}
