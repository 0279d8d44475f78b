//! Input field handling for the terminal user interface.

/// A single-line text input with a cursor measured in characters.
#[derive(Clone, Debug, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input field with initial text value, cursor at the end.
    #[cfg(test)]
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
        }
    }

    fn byte_index(&self, cursor: usize) -> usize {
        self.value
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let idx = self.byte_index(self.cursor - 1);
            self.value.remove(idx);
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.char_len() {
            let idx = self.byte_index(self.cursor);
            self.value.remove(idx);
        }
    }

    /// Move cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Slice of the value that fits in `width` columns with the cursor in
    /// view, and the cursor's column within that slice.
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        let start = (self.cursor + 1).saturating_sub(width);
        let visible = self.value.chars().skip(start).take(width).collect();
        (visible, self.cursor - start)
    }

    /// Empty the field and reset the cursor.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_multibyte_text() {
        let mut input = InputField::with_value("café");
        assert_eq!(input.cursor, 4);
        input.handle_backspace();
        assert_eq!(input.value, "caf");
        input.handle_char('é');
        input.move_cursor_home();
        input.handle_char('→');
        assert_eq!(input.value, "→café");
        input.move_cursor_end();
        input.move_cursor_left();
        input.handle_delete();
        assert_eq!(input.value, "→caf");
        input.move_cursor_right();
        input.move_cursor_right();
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn test_visible_window_follows_cursor() {
        let mut input = InputField::with_value("abcdefgh");
        assert_eq!(input.visible_window(4), ("fgh".to_string(), 3));
        input.move_cursor_home();
        assert_eq!(input.visible_window(4), ("abcd".to_string(), 0));
        input.move_cursor_right();
        input.move_cursor_right();
        assert_eq!(input.visible_window(10), ("abcdefgh".to_string(), 2));
        assert_eq!(input.visible_window(0), (String::new(), 0));

        let long = InputField::with_value(&"x".repeat(70_000));
        let (visible, column) = long.visible_window(39);
        assert_eq!(visible.len(), 38);
        assert_eq!(column, 38);
    }

    #[test]
    fn test_clear() {
        let mut input = InputField::with_value("walk dog");
        input.clear();
        assert!(input.value.is_empty());
        assert_eq!(input.cursor, 0);
        input.handle_backspace();
        input.handle_delete();
        assert!(input.value.is_empty());
    }
}
