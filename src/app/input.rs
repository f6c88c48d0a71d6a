/// Cursor-addressed text buffer behind the URL field and the editor pane.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the contents, leaving the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.prev_boundary() else {
            return false;
        };
        self.buffer.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        let Some(next) = self.next_boundary() else {
            return false;
        };
        self.buffer.drain(self.cursor..next);
        true
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    /// Jump to the start of the current line.
    pub fn move_home(&mut self) {
        self.cursor = self.buffer[..self.cursor]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
    }

    /// Jump to the end of the current line.
    pub fn move_end(&mut self) {
        self.cursor = self.buffer[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.buffer.len());
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_at_the_cursor() {
        let mut input = InputState::new();
        input.insert_char('a');
        input.insert_char('c');
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut input = InputState::new();
        input.set_text("x");
        input.move_home();
        assert!(!input.backspace());
        assert_eq!(input.text(), "x");
    }

    #[test]
    fn backspace_removes_whole_chars() {
        let mut input = InputState::new();
        input.set_text("héllo");
        input.move_home();
        input.move_right();
        input.move_right();
        assert!(input.backspace());
        assert_eq!(input.text(), "hllo");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn home_and_end_stay_within_the_current_line() {
        let mut input = InputState::new();
        input.set_text("first\nsecond");
        input.move_home();
        assert_eq!(input.cursor(), 6);
        input.move_end();
        assert_eq!(input.cursor(), 12);
    }

    #[test]
    fn delete_at_end_is_a_no_op() {
        let mut input = InputState::new();
        input.set_text("ab");
        assert!(!input.delete());
        input.move_left();
        assert!(input.delete());
        assert_eq!(input.text(), "a");
    }
}
