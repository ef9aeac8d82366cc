//! Wavetable oscillator used for the fundamental and the formant harmonics.

use super::NUM_FORMANT_OSCILLATORS;
use crate::resources::{
    Wavetable, BUZZ_WAVETABLE_SIZE, LOG2_BUZZ_WAVETABLE_PERIOD, LOG2_PHASE_MODULUS,
};
use crate::sink::SampleSink;
use crate::utils::clip_8;

#[derive(Debug, Clone, Copy)]
pub struct Oscillator<'a> {
    /// Phase increment per sample.
    pub freq: u16,
    pub phase: u16,
    pub waveform: &'a Wavetable,
}

impl<'a> Oscillator<'a> {
    pub fn new(waveform: &'a Wavetable) -> Self {
        Self {
            freq: 0,
            phase: 0,
            waveform,
        }
    }

    #[inline]
    pub fn tick(&mut self) -> i8 {
        self.phase = self.phase.wrapping_add(self.freq);
        let position = (self.phase >> (LOG2_PHASE_MODULUS - LOG2_BUZZ_WAVETABLE_PERIOD)) as usize
            & (BUZZ_WAVETABLE_SIZE - 1);
        self.waveform[position]
    }
}

/// Renders `num_samples` samples of the sum of all formant oscillators.
#[inline]
pub fn render_formants<S: SampleSink + ?Sized>(
    osc: &mut [Oscillator; NUM_FORMANT_OSCILLATORS],
    num_samples: usize,
    out: &mut S,
) {
    for _ in 0..num_samples {
        let s: i32 = osc.iter_mut().map(|o| o.tick() as i32).sum();
        out.write_sample(clip_8(s));
    }
}
