//! Error type for the synth API.

use thiserror::Error;

/// Errors reported by synth creation and option setters.
///
/// Unknown phonetic symbols are not an error: they are spoken as silence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("synth pool exhausted: all {capacity} instances are in use")]
    PoolExhausted { capacity: usize },

    #[error("unknown voice index {0}")]
    UnknownVoice(usize),

    #[error("pitch offset {0} is outside -24..=24 semitones")]
    PitchOutOfRange(i8),

    #[error("pitch modulation {0}% is outside 0..=100%")]
    PitchModulationOutOfRange(u8),

    #[error("rate {0} wpm is outside 40..=400 wpm")]
    RateOutOfRange(u16),
}

pub type Result<T> = core::result::Result<T, Error>;
