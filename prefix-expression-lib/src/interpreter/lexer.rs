pub static WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];
pub static SEPARATORS: [char; 2] = ['(', ')'];

/// A scan position over an expression's source text.
///
/// Every parse owns its own cursor, and nested parse calls share it by mutable
/// reference so that tokens are consumed strictly left to right.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Cursor<'a> {
        Cursor {
            source,
            position: 0,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor back to a position previously returned by [`Cursor::position`].
    pub fn rewind(&mut self, position: usize) {
        self.position = position;
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    pub fn skip_whitespace(&mut self) {
        let remaining = self.remaining();
        let skipped = remaining.len() - remaining.trim_start_matches(&WHITESPACE[..]).len();
        self.position += skipped;
    }

    /// Consumes and returns the next token.
    ///
    /// A parenthesis is a token on its own, anything else runs until the next
    /// whitespace or parenthesis. Returns an empty string at the end of input.
    pub fn read_token(&mut self) -> &'a str {
        let remaining = self.remaining();
        let length = match remaining.chars().next() {
            None => 0,
            Some(separator) if SEPARATORS.contains(&separator) => separator.len_utf8(),
            Some(_) => remaining
                .find(|character| {
                    WHITESPACE.contains(&character) || SEPARATORS.contains(&character)
                })
                .unwrap_or(remaining.len()),
        };
        self.position += length;
        &remaining[..length]
    }
}
