//! Playback state machine: owns the reading position and paces chunk
//! emission on a cooperative millisecond clock supplied by the host.

use heapless::String;
use log::debug;

use crate::{
    document::{Document, next_word_at},
    pacing::{clamp_samples_per_minute, clamp_words_per_sample, interval_ms},
};

/// Bytes reserved for one assembled chunk.
pub const CHUNK_BUFFER_BYTES: usize = 768;

/// Rate controls applied at construction. Defaults match the original
/// reader's startup values.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlayerConfig {
    pub samples_per_minute: u16,
    pub words_per_sample: u16,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            samples_per_minute: 250,
            words_per_sample: 1,
        }
    }
}

/// Public playback status. A stopped player reads as `Idle`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlayerStatus {
    Idle,
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum PlayerState {
    Idle,
    Playing { next_chunk_ms: u64 },
    Paused,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlayerError {
    NoDocumentLoaded,
    InvalidSeekTarget,
}

/// Outcome of one cooperative tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    /// Deadline not reached, or not playing.
    NoChunk,
    /// One chunk emitted; the deadline was rearmed.
    ChunkEmitted,
    /// The final chunk was emitted and the player returned to idle.
    Finished,
}

pub struct PlayerEngine<'a> {
    document: Option<Document<'a>>,
    state: PlayerState,
    current_index: usize,
    samples_per_minute: u16,
    words_per_sample: u16,
    chunk: String<CHUNK_BUFFER_BYTES>,
}

impl<'a> PlayerEngine<'a> {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            document: None,
            state: PlayerState::Idle,
            current_index: 0,
            samples_per_minute: clamp_samples_per_minute(config.samples_per_minute),
            words_per_sample: clamp_words_per_sample(config.words_per_sample),
            chunk: String::new(),
        }
    }

    pub fn status(&self) -> PlayerStatus {
        match self.state {
            PlayerState::Idle => PlayerStatus::Idle,
            PlayerState::Playing { .. } => PlayerStatus::Playing,
            PlayerState::Paused => PlayerStatus::Paused,
        }
    }

    /// Most recently emitted chunk; empty until the first emission.
    pub fn chunk(&self) -> &str {
        self.chunk.as_str()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn word_total(&self) -> usize {
        self.document.map_or(0, |doc| doc.word_total())
    }

    pub fn samples_per_minute(&self) -> u16 {
        self.samples_per_minute
    }

    pub fn words_per_sample(&self) -> u16 {
        self.words_per_sample
    }

    fn current_interval_ms(&self) -> u64 {
        (interval_ms(self.samples_per_minute, self.words_per_sample) as u64).max(1)
    }
}

impl Default for PlayerEngine<'_> {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}

include!("control.rs");
include!("runtime.rs");
include!("chunk.rs");

#[cfg(test)]
mod tests;
