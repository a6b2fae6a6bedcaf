impl<'a> PlayerEngine<'a> {
    /// Replace the document wholesale and reset playback. A blank text
    /// leaves the engine with nothing playable.
    pub fn load(&mut self, text: &'a str) {
        let document = Document::new(text);
        debug!("loaded document with {} words", document.word_total());

        self.document = if document.is_empty() {
            None
        } else {
            Some(document)
        };
        self.state = PlayerState::Idle;
        self.current_index = 0;
        self.chunk.clear();
    }

    /// Arm the chunk deadline and start (or resume) playback. Resuming after
    /// the end of the document restarts from the first word.
    pub fn play(&mut self, now_ms: u64) -> Result<(), PlayerError> {
        let Some(document) = self.document else {
            return Err(PlayerError::NoDocumentLoaded);
        };
        if matches!(self.state, PlayerState::Playing { .. }) {
            return Ok(());
        }

        if self.current_index >= document.word_total() {
            self.current_index = 0;
        }
        self.state = PlayerState::Playing {
            next_chunk_ms: now_ms + self.current_interval_ms(),
        };
        Ok(())
    }

    /// Disarm the deadline, keep the position, permit manual seek.
    pub fn pause(&mut self) {
        if matches!(self.state, PlayerState::Playing { .. }) {
            self.state = PlayerState::Paused;
        }
    }

    /// Return to idle with the position reset to the first word.
    pub fn stop(&mut self) {
        self.state = PlayerState::Idle;
        self.current_index = 0;
        self.chunk.clear();
    }

    /// Manual reposition, permitted while idle or paused. On success the
    /// chunk at the target is emitted as a peek render; status is unchanged.
    pub fn seek(&mut self, target_index: usize) -> Result<(), PlayerError> {
        if matches!(self.state, PlayerState::Playing { .. }) {
            return Err(PlayerError::InvalidSeekTarget);
        }
        // No document means word_total = 0, so every target is out of range.
        let Some(document) = self.document else {
            return Err(PlayerError::InvalidSeekTarget);
        };
        if target_index >= document.word_total() {
            return Err(PlayerError::InvalidSeekTarget);
        }

        self.current_index = target_index;
        self.fill_chunk(document);
        Ok(())
    }

    pub fn set_samples_per_minute(&mut self, value: u16, now_ms: u64) {
        self.samples_per_minute = clamp_samples_per_minute(value);
        self.rearm(now_ms);
    }

    pub fn set_words_per_sample(&mut self, value: u16, now_ms: u64) {
        self.words_per_sample = clamp_words_per_sample(value);
        self.rearm(now_ms);
    }

    /// Re-derive the deadline after a rate change without losing position.
    fn rearm(&mut self, now_ms: u64) {
        if matches!(self.state, PlayerState::Playing { .. }) {
            self.state = PlayerState::Playing {
                next_chunk_ms: now_ms + self.current_interval_ms(),
            };
        }
    }
}
