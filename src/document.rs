//! Whitespace tokenization over borrowed document text.

/// Tokenize `text` into whitespace-delimited tokens. Empty or
/// whitespace-only input yields no items.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, cursor: 0 }
}

/// Allocation-free iterator over the tokens of a text.
#[derive(Clone, Copy, Debug)]
pub struct Tokens<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let (word, next_cursor) = next_word_at(self.text, self.cursor)?;
        self.cursor = next_cursor;
        Some(word)
    }
}

pub(crate) fn next_word_at(text: &str, mut cursor: usize) -> Option<(&str, usize)> {
    let bytes = text.as_bytes();
    let len = bytes.len();

    while cursor < len && bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }
    if cursor >= len {
        return None;
    }

    let start = cursor;
    while cursor < len && !bytes[cursor].is_ascii_whitespace() {
        cursor += 1;
    }

    Some((&text[start..cursor], cursor))
}

/// Borrowed, immutable view of a loaded text. The token sequence and its
/// length never change after construction.
#[derive(Clone, Copy, Debug)]
pub struct Document<'a> {
    text: &'a str,
    word_total: usize,
}

impl<'a> Document<'a> {
    pub fn new(text: &'a str) -> Self {
        let word_total = tokenize(text).count();
        Self { text, word_total }
    }

    pub fn word_total(&self) -> usize {
        self.word_total
    }

    pub fn is_empty(&self) -> bool {
        self.word_total == 0
    }

    pub(crate) fn text(&self) -> &'a str {
        self.text
    }

    /// Byte cursor positioned before the token at `index`, or at the end of
    /// the text when `index >= word_total`.
    pub(crate) fn cursor_at(&self, index: usize) -> usize {
        let mut cursor = 0usize;
        let mut remaining = index;

        while remaining > 0 {
            match next_word_at(self.text, cursor) {
                Some((_, next_cursor)) => {
                    cursor = next_cursor;
                    remaining -= 1;
                }
                None => break,
            }
        }

        cursor
    }
}
