//! Oscillator banks.
//!
//! These are the only routines working at sample granularity. Everything above
//! them sets up oscillator frequencies once per timeslice.

pub mod formant_oscillator;
pub mod fricative_oscillator;

pub use formant_oscillator::{render_formants, Oscillator};
pub use fricative_oscillator::{render_fricative, FricOscillator};

use crate::sink::SampleSink;

/// Fundamental plus one pair of harmonics for each of the three formants.
pub const NUM_FORMANT_OSCILLATORS: usize = 7;

/// Three noise oscillators plus the voice bar.
pub const NUM_FRICATIVE_OSCILLATORS: usize = 4;

#[inline]
pub fn render_silence<S: SampleSink + ?Sized>(num_samples: usize, out: &mut S) {
    for _ in 0..num_samples {
        out.write_sample(0);
    }
}
