//! Noise oscillators for fricatives and aspiration.
//!
//! All noise oscillators index the same frication table. The phase
//! accumulator is 32 bits wide: the frication table is larger than one 16-bit
//! cycle, and a period of 8 table samples per cycle leaves enough integer
//! bits to cover all of it.

use super::NUM_FRICATIVE_OSCILLATORS;
use crate::resources::{
    Wavetables, BUZZ_WAVETABLE_SIZE, FRIC_WAVETABLE_SIZE, LOG2_BUZZ_WAVETABLE_PERIOD,
    LOG2_FRIC_WAVETABLE_PERIOD, LOG2_PHASE_MODULUS,
};
use crate::sink::SampleSink;
use crate::utils::clip_8;

/// Index of the voice bar oscillator inside the fricative bank.
pub const VOICE_BAR: usize = NUM_FRICATIVE_OSCILLATORS - 1;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FricOscillator {
    /// Phase increment per sample.
    pub freq: u16,
    pub phase: u32,
}

impl FricOscillator {
    pub const fn new() -> Self {
        Self { freq: 0, phase: 0 }
    }

    #[inline]
    fn advance(&mut self) -> u32 {
        self.phase = self.phase.wrapping_add(self.freq as u32);
        self.phase
    }
}

/// Renders `num_samples` samples of frication noise. The voice bar oscillator
/// modulates the noise amplitude with the glottal cycle and adds its own
/// voicing, which is how voiced fricatives are produced.
#[inline]
pub fn render_fricative<S: SampleSink + ?Sized>(
    osc: &mut [FricOscillator; NUM_FRICATIVE_OSCILLATORS],
    wavetables: &Wavetables,
    num_samples: usize,
    out: &mut S,
) {
    let (noise, voice_bar) = osc.split_at_mut(VOICE_BAR);
    let voice_bar = &mut voice_bar[0];

    for _ in 0..num_samples {
        let mut s: i32 = 0;
        // A noise oscillator at frequency 0 is not rendered.
        for o in noise.iter_mut().filter(|o| o.freq != 0) {
            let position = (o.advance() >> (LOG2_PHASE_MODULUS - LOG2_FRIC_WAVETABLE_PERIOD))
                as usize
                & (FRIC_WAVETABLE_SIZE - 1);
            s += wavetables.frication[position] as i32;
        }

        let position = (voice_bar.advance() >> (LOG2_PHASE_MODULUS - LOG2_BUZZ_WAVETABLE_PERIOD))
            as usize
            & (BUZZ_WAVETABLE_SIZE - 1);
        let modulation = wavetables.frication_buzz[position] as i32 + 128;
        s = s * modulation / 256 + wavetables.vowel_buzz[position] as i32;

        out.write_sample(clip_8(s));
    }
}
