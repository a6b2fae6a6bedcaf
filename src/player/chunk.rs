impl<'a> PlayerEngine<'a> {
    /// Assemble the chunk starting at `current_index`, clipped to the end of
    /// the document. Words are joined by single spaces; on buffer overflow
    /// the chunk truncates at a word boundary.
    fn fill_chunk(&mut self, document: Document<'a>) {
        self.chunk.clear();

        let mut cursor = document.cursor_at(self.current_index);
        let mut emitted = 0usize;

        while emitted < self.words_per_sample as usize {
            let Some((word, next_cursor)) = next_word_at(document.text(), cursor) else {
                break;
            };

            let separator = usize::from(emitted > 0);
            if self.chunk.len() + separator + word.len() > CHUNK_BUFFER_BYTES {
                break;
            }
            if emitted > 0 {
                let _ = self.chunk.push(' ');
            }
            let _ = self.chunk.push_str(word);

            cursor = next_cursor;
            emitted += 1;
        }
    }
}
