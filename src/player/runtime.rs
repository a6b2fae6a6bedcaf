impl<'a> PlayerEngine<'a> {
    /// Cooperative timer tick. Emits at most one chunk per call, and only
    /// while playing with the deadline reached. Each emitting tick is
    /// atomic: fill the chunk, advance the index, rearm or finish.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        let next_chunk_ms = match self.state {
            PlayerState::Playing { next_chunk_ms } => next_chunk_ms,
            _ => return TickResult::NoChunk,
        };
        if now_ms < next_chunk_ms {
            return TickResult::NoChunk;
        }

        let Some(document) = self.document else {
            // Playing without a document is unreachable through the public
            // operations; recover to idle regardless.
            self.state = PlayerState::Idle;
            return TickResult::NoChunk;
        };

        self.fill_chunk(document);

        let advanced = self
            .current_index
            .saturating_add(self.words_per_sample as usize);
        self.current_index = advanced.min(document.word_total());

        if self.current_index >= document.word_total() {
            debug!("end of document at word {}", self.current_index);
            self.state = PlayerState::Idle;
            return TickResult::Finished;
        }

        self.state = PlayerState::Playing {
            next_chunk_ms: now_ms + self.current_interval_ms(),
        };
        TickResult::ChunkEmitted
    }
}
