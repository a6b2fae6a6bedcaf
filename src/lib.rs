#![no_std]
//! Platform-independent RSVP playback engine.
//!
//! Splits loaded text into whitespace tokens, paces fixed-size chunks on a
//! cooperative millisecond clock, and derives a point size that keeps a
//! worst-case chunk inside the host display width. The host supplies the raw
//! text, the two rate controls, and a [`sizer::TextMeasure`] backend; it
//! receives chunk strings and point-size hints to render.

pub mod document;
pub mod pacing;
pub mod player;
pub mod sizer;
