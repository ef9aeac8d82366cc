//! Wavetable store.
//!
//! All tables hold signed 8-bit samples. The periodic ("buzz" and sine) tables
//! hold exactly one cycle of `BUZZ_WAVETABLE_SIZE` samples; the frication
//! table is a long stretch of noise so that its periodicity stays below the
//! audible range at the highest fricative frequency.
//!
//! The store is computed once, on first use, and is shared read-only by every
//! synth instance afterwards.

use core::f32::consts::PI;

#[allow(unused_imports)]
use num_traits::float::Float;
use spin::Once;

use crate::utils::random::Random;

/// Number of amplitude steps of the sine wavetables. Step 0 is silent.
pub const BUZZ_WAVETABLE_SCALE: usize = 4;

/// Width of the integer part of the phase accumulator, in bits.
pub const LOG2_PHASE_MODULUS: u32 = 16;

pub const LOG2_BUZZ_WAVETABLE_SIZE: u32 = 5;
pub const LOG2_BUZZ_WAVETABLE_PERIOD: u32 = 5;
pub const LOG2_FRIC_WAVETABLE_SIZE: u32 = 11;
pub const LOG2_FRIC_WAVETABLE_PERIOD: u32 = 3;

pub const BUZZ_WAVETABLE_SIZE: usize = 1 << LOG2_BUZZ_WAVETABLE_SIZE;
pub const FRIC_WAVETABLE_SIZE: usize = 1 << LOG2_FRIC_WAVETABLE_SIZE;

/// Peak of the loudest sine table. Three formants at full weight plus the
/// voicing buzz must stay within the `i8` range.
const SINE_PEAK: f32 = 40.0;

/// Peak of a single frication noise sample. Three noise oscillators plus the
/// voicing buzz must stay within the `i8` range.
const FRICATION_PEAK: u8 = 28;

const FRICATION_SEED: u32 = 0x5eed_f71c;

pub type Wavetable = [i8; BUZZ_WAVETABLE_SIZE];
pub type FricWavetable = [i8; FRIC_WAVETABLE_SIZE];

/// Voicing timbre of the fundamental oscillator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Buzz {
    #[default]
    Vowel,
    Liquid,
    Plosive,
    Nasal,
}

#[derive(Debug)]
pub struct Wavetables {
    /// Sine tables indexed by amplitude step.
    pub sine: [Wavetable; BUZZ_WAVETABLE_SCALE],

    pub vowel_buzz: Wavetable,
    pub liquid_buzz: Wavetable,
    pub plosive_buzz: Wavetable,
    pub nasal_buzz: Wavetable,

    /// Modulates frication noise with the glottal cycle of voiced fricatives.
    /// Starts at its maximum so that an unvoiced fricative (voice bar phase
    /// held at 0) passes the noise through almost unchanged.
    pub frication_buzz: Wavetable,

    pub frication: FricWavetable,
}

static WAVETABLES: Once<Wavetables> = Once::new();

/// Returns the shared wavetable store, building it on first use.
pub fn wavetables() -> &'static Wavetables {
    WAVETABLES.call_once(|| {
        log::debug!("building wavetables");
        Wavetables::new()
    })
}

impl Default for Wavetables {
    fn default() -> Self {
        Self::new()
    }
}

impl Wavetables {
    pub fn new() -> Self {
        let sine = core::array::from_fn(|step| {
            let amplitude = SINE_PEAK * step as f32 / (BUZZ_WAVETABLE_SCALE - 1) as f32;
            table_from_fn(|t| amplitude * f32::sin(2.0 * PI * t))
        });

        let mut random = Random::new(FRICATION_SEED);
        let frication = core::array::from_fn(|_| random.get_symmetric(FRICATION_PEAK));

        Self {
            sine,
            vowel_buzz: glottal_buzz(12.0, 5.0, 40.0),
            liquid_buzz: glottal_buzz(13.0, 8.0, 36.0),
            plosive_buzz: glottal_buzz(8.0, 3.0, 40.0),
            nasal_buzz: glottal_buzz(14.0, 10.0, 32.0),
            frication_buzz: table_from_fn(|t| 63.0 + 64.0 * f32::cos(2.0 * PI * t)),
            frication,
        }
    }

    #[inline]
    pub fn buzz(&self, buzz: Buzz) -> &Wavetable {
        match buzz {
            Buzz::Vowel => &self.vowel_buzz,
            Buzz::Liquid => &self.liquid_buzz,
            Buzz::Plosive => &self.plosive_buzz,
            Buzz::Nasal => &self.nasal_buzz,
        }
    }
}

/// Builds a one-cycle table from a function of the normalized phase `0..1`.
fn table_from_fn(f: impl Fn(f32) -> f32) -> Wavetable {
    core::array::from_fn(|i| {
        let t = i as f32 / BUZZ_WAVETABLE_SIZE as f32;
        f32::round(f(t)).clamp(i8::MIN as f32, i8::MAX as f32) as i8
    })
}

/// Derivative of a Rosenberg glottal pulse: a rising half-sine over `open`
/// samples, a steeper falling quarter-cosine over `close` samples, then a
/// closed phase. Both phases integrate to the same area, so the table carries
/// no DC, and it starts at 0.
fn glottal_buzz(open: f32, close: f32, peak: f32) -> Wavetable {
    let size = BUZZ_WAVETABLE_SIZE as f32;
    let flow_derivative = |t: f32| {
        let n = t * size;
        if n < open {
            PI / (2.0 * open) * f32::sin(PI * n / open)
        } else if n < open + close {
            -PI / (2.0 * close) * f32::sin(PI * (n - open) / (2.0 * close))
        } else {
            0.0
        }
    };

    let max = PI / (2.0 * f32::min(open, close));
    table_from_fn(|t| flow_derivative(t) * peak / max)
}
