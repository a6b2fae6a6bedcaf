//! Pacing interval derived from the two rate controls.

pub const MIN_SAMPLES_PER_MINUTE: u16 = 1;
pub const MAX_SAMPLES_PER_MINUTE: u16 = 1000;
pub const MIN_WORDS_PER_SAMPLE: u16 = 1;
pub const MAX_WORDS_PER_SAMPLE: u16 = 30;

pub fn clamp_samples_per_minute(value: u16) -> u16 {
    value.clamp(MIN_SAMPLES_PER_MINUTE, MAX_SAMPLES_PER_MINUTE)
}

pub fn clamp_words_per_sample(value: u16) -> u16 {
    value.clamp(MIN_WORDS_PER_SAMPLE, MAX_WORDS_PER_SAMPLE)
}

/// Milliseconds between successive chunk emissions. Out-of-range inputs are
/// clamped before use, so a caller-supplied zero never reaches the division.
pub fn interval_ms(samples_per_minute: u16, words_per_sample: u16) -> f32 {
    let spm = clamp_samples_per_minute(samples_per_minute) as f32;
    let wps = clamp_words_per_sample(words_per_sample) as f32;

    60_000.0 / (spm * wps)
}
