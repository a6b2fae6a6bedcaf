//! Text-fit sizing: derives the point size that keeps a worst-case chunk
//! inside the available display width.

use heapless::String;

use crate::pacing::{MAX_WORDS_PER_SAMPLE, clamp_words_per_sample};

/// Character count of the synthetic worst-case word.
const PLACEHOLDER_WORD_CHARS: usize = 18;
const PROBE_BUFFER_BYTES: usize = (PLACEHOLDER_WORD_CHARS + 1) * MAX_WORDS_PER_SAMPLE as usize;

/// Narrow measurement seam over the host font backend.
pub trait TextMeasure {
    /// Rendered width in pixels of `text` at the given point size.
    fn text_width_px(&self, text: &str, point_size: f32) -> f32;
}

/// Point size at which the worst-case chunk of `words_per_sample` words
/// exactly fills `available_width_px`. Falls back to `base_point_size` when
/// either width degenerates to zero or below.
pub fn fit_point_size<M: TextMeasure>(
    words_per_sample: u16,
    available_width_px: f32,
    base_point_size: f32,
    metrics: &M,
) -> f32 {
    if available_width_px <= 0.0 {
        return base_point_size;
    }

    let mut probe: String<PROBE_BUFFER_BYTES> = String::new();
    for word in 0..clamp_words_per_sample(words_per_sample) {
        if word > 0 {
            let _ = probe.push(' ');
        }
        for _ in 0..PLACEHOLDER_WORD_CHARS {
            let _ = probe.push('a');
        }
    }

    let measured = metrics.text_width_px(probe.as_str(), base_point_size);
    if measured <= 0.0 {
        return base_point_size;
    }

    base_point_size * (available_width_px / measured)
}

/// Fixed-advance metrics used during bring-up and in tests.
#[derive(Default, Debug, Clone, Copy)]
pub struct FixedAdvanceMetrics {
    /// Horizontal advance per character, in pixels per point.
    pub advance_per_point: f32,
}

impl FixedAdvanceMetrics {
    pub const fn new(advance_per_point: f32) -> Self {
        Self { advance_per_point }
    }
}

impl TextMeasure for FixedAdvanceMetrics {
    fn text_width_px(&self, text: &str, point_size: f32) -> f32 {
        text.chars().count() as f32 * self.advance_per_point * point_size
    }
}
