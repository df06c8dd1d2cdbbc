// Text field for the search form
//
// Single-line editable buffer with a character cursor. Rendering helpers
// use display width (not byte or char count) so CJK and emoji usernames
// scroll correctly inside a narrow field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthChar;

/// Single-line editable text buffer
#[derive(Debug, Default, Clone)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars (0..=char count)
    cursor: usize,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the contents and move the cursor to the end
    pub fn set(&mut self, value: impl Into<String>) {
        *self = Self::new(value);
    }

    /// Apply an editing key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.set("");
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert(c);
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.value.chars().count() {
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }

    fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Slice of the value that fits in `width` columns while keeping the
    /// cursor visible, plus the cursor's column within that slice
    pub fn visible(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }

        let chars: Vec<char> = self.value.chars().collect();

        // Walk left from the cursor until the field is full (leave a cell for the cursor)
        let mut start = self.cursor;
        let mut used = 1;
        while start > 0 {
            let w = chars[start - 1].width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            start -= 1;
        }

        let mut shown = String::new();
        let mut cols = 0;
        let mut cursor_col = 0;
        for (i, c) in chars.iter().enumerate().skip(start) {
            if i == self.cursor {
                cursor_col = cols;
            }
            let w = c.width().unwrap_or(0);
            if cols + w > width {
                break;
            }
            shown.push(*c);
            cols += w;
        }
        if self.cursor >= chars.len() {
            cursor_col = cols;
        }

        (shown, cursor_col.min(width.saturating_sub(1)))
    }
}
