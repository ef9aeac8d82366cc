//! Per-timeslice oscillator setup.
//!
//! Each formant is approximated by the two harmonics of the fundamental that
//! bracket it. Their amplitudes are weighted by distance from the formant
//! frequency with a triangle window: for `f0 = 100` and `ff = 320` the
//! harmonics are 300 and 400, weighted 0.8 and 0.2 before quantization to the
//! sine table steps.

use super::phoneme::FreqSet;
use crate::oscillator::fricative_oscillator::VOICE_BAR;
use crate::oscillator::{
    FricOscillator, Oscillator, NUM_FORMANT_OSCILLATORS, NUM_FRICATIVE_OSCILLATORS,
};
use crate::resources::{Wavetable, BUZZ_WAVETABLE_SCALE};

/// The two harmonics approximating one formant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HarmonicPair {
    /// Number of the lower harmonic (0 when the formant is below `f0`).
    pub harmonic: u16,
    pub freqs: [u16; 2],
    /// Sine table steps, summing to the formant amplitude.
    pub amps: [usize; 2],
}

impl HarmonicPair {
    /// Splits formant `ff` of amplitude `amp` between the harmonics of `f0`
    /// just below and just above it. Everything is zero for an unvoiced slice.
    pub fn split(f0: u16, ff: u16, amp: usize) -> Self {
        if f0 == 0 {
            return Self::default();
        }
        let f0 = f0 as u32;
        let ff = ff as u32;
        let h = ff / f0;
        let lower = h * f0;
        let upper = lower + f0;
        let amp_lower = amp * (upper - ff) as usize / f0 as usize;

        Self {
            harmonic: h as u16,
            freqs: [lower as u16, upper as u16],
            amps: [amp_lower, amp - amp_lower],
        }
    }
}

/// Sets up the formant bank for one timeslice.
///
/// Oscillator 0 plays the fundamental with the voicing buzz and keeps its
/// phase. Each formant then gets a pair of harmonic oscillators whose phases
/// are locked to multiples of the fundamental's phase. The formant amplitude
/// drops by a quarter from one formant to the next.
pub fn calc_envelope<'a>(
    freqs: &FreqSet,
    osc: &mut [Oscillator<'a>; NUM_FORMANT_OSCILLATORS],
    buzz: &'a Wavetable,
    sine: &'a [Wavetable; BUZZ_WAVETABLE_SCALE],
) {
    let f0 = freqs.voice_bar();
    let (fundamental, harmonics) = osc.split_at_mut(1);
    let fundamental = &mut fundamental[0];
    fundamental.freq = f0;
    fundamental.waveform = buzz;
    let p0 = fundamental.phase;

    let mut amp = BUZZ_WAVETABLE_SCALE - 1;
    for (pair_osc, &ff) in harmonics.chunks_exact_mut(2).zip(&freqs.f[1..]) {
        let pair = HarmonicPair::split(f0, ff, amp);
        amp = amp * 3 / 4;

        for (k, o) in pair_osc.iter_mut().enumerate() {
            let n = pair.harmonic.wrapping_add(k as u16);
            o.freq = pair.freqs[k];
            o.phase = n.wrapping_mul(p0);
            o.waveform = &sine[pair.amps[k]];
        }
    }
}

/// Sets up the fricative bank for one timeslice: the three noise oscillators
/// take F1 to F3, the voice bar takes `f0`. Silent oscillators restart from
/// phase 0.
pub fn calc_frication(freqs: &FreqSet, osc: &mut [FricOscillator; NUM_FRICATIVE_OSCILLATORS]) {
    for (i, o) in osc.iter_mut().enumerate() {
        o.freq = if i == VOICE_BAR {
            freqs.voice_bar()
        } else {
            freqs.f[i + 1]
        };
        if o.freq == 0 {
            o.phase = 0;
        }
    }
}
