//! Formant speech: phonemes, voices and the path from diphones to samples.

pub mod diphone;
pub mod envelope;
pub mod phoneme;
pub mod segment;
pub mod voice;

pub use diphone::{Diphone, Tempo, Transition};
pub use segment::{Glide, Segment, SegmentPlayer};
