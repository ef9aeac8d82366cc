#![doc = include_str!("../README.md")]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod error;
pub mod oscillator;
pub mod resources;
pub mod sink;
pub mod speech;
pub mod synth;
pub mod utils;

pub use error::{Error, Result};
pub use sink::{NullSink, SampleSink};
pub use speech::phoneme::{FreqSet, Phoneme, PhonemeClass, Place, SoundSource, Symbol};
pub use speech::voice::{Voice, VOICES, VOICE_BOB};
pub use synth::{Options, Synth, SynthHandle, SynthPool};

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 16000;

/// Number of timeslices per second. Frequencies and excitation sources are
/// recomputed once per timeslice.
pub const SLICES_PER_SECOND: u32 = 250;

/// Number of samples rendered per timeslice.
pub const SLICE_SAMPLES: usize = (SAMPLE_RATE / SLICES_PER_SECOND) as usize;

/// Converts a frequency in Hz to a phase increment per sample, i.e. a
/// fraction of a full 16-bit phase cycle.
pub const fn freq(hz: u32) -> u16 {
    (hz as u64 * 65536 / SAMPLE_RATE as u64) as u16
}

/// Converts a duration in milliseconds to a number of timeslices.
pub const fn dur(ms: u32) -> u16 {
    (ms * SLICES_PER_SECOND / 1000) as u16
}
