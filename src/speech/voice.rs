//! Voices: base pitch, speaking rate and one phoneme record per symbol.

use super::phoneme::{Phoneme, PhonemeClass, Place, Symbol, NUM_SYMBOLS};
use crate::freq;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Voice {
    pub name: &'static str,
    /// Base pitch as a phase increment.
    pub pitch: u16,
    /// Natural speaking rate in words per minute. Class durations are tuned
    /// for this rate.
    pub rate: u16,
    /// Indexed by [`Symbol`].
    pub phonemes: [Phoneme; NUM_SYMBOLS],
}

impl Voice {
    #[inline]
    pub fn phoneme(&self, symbol: Symbol) -> &Phoneme {
        &self.phonemes[symbol as usize]
    }
}

use PhonemeClass::{
    Aspirated, Fricative, Liquid, Nasal, Plosive, Semivowel, Silence, Vowel, VoicedPlosive,
};

/// Vowel-like phoneme whose labial and alveolar targets only move F1 and F2.
const fn vowel(
    class: PhonemeClass,
    hz: [u32; 4],
    f0: u32,
    f1: u32,
    f3: u32,
    velar: [u32; 2],
) -> Phoneme {
    Phoneme::new(class, hz).with_targets(
        [f0, f1, 600, f3],
        [f0, f1, 1700, f3],
        [f0, f1, velar[0], velar[1]],
    )
}

const fn stop(class: PhonemeClass, hz: [u32; 4], place: Place) -> Phoneme {
    Phoneme::new(class, hz).with_place(place)
}

pub static VOICE_BOB: Voice = Voice {
    name: "bob",
    pitch: freq(130),
    rate: 120,
    phonemes: [
        // None
        Phoneme::silent(Silence),
        // j
        Phoneme::new(Semivowel, [140, 235, 2100, 3000]).with_targets(
            [140, 180, 600, 3000],
            [140, 180, 1700, 3000],
            [139, 180, 2700, 3000],
        ),
        // w
        vowel(Semivowel, [130, 280, 792, 2155], 130, 180, 2355, [1500, 1800]),
        // i
        vowel(Vowel, [139, 343, 2323, 3000], 139, 180, 3000, [2700, 3000]),
        // u
        vowel(Vowel, [130, 380, 992, 2355], 130, 180, 2355, [1500, 1800]),
        // I
        vowel(Vowel, [136, 429, 2034, 2687], 136, 180, 2687, [2600, 2900]),
        // U
        vowel(Vowel, [133, 469, 1123, 2435], 133, 180, 2435, [1500, 1800]),
        // e
        vowel(Vowel, [129, 476, 2090, 2692], 129, 180, 2692, [2600, 2900]),
        // o
        vowel(Vowel, [130, 498, 910, 2459], 130, 180, 2459, [1500, 1800]),
        // V
        vowel(Vowel, [129, 621, 1191, 2548], 129, 180, 2548, [1500, 1800]),
        // @
        vowel(Vowel, [130, 500, 1500, 2500], 130, 180, 2500, [1500, 1800]),
        // R
        vowel(Vowel, [130, 300, 1500, 1700], 130, 180, 2355, [1500, 1500]),
        // E
        vowel(Vowel, [127, 588, 1803, 2604], 127, 180, 2604, [2600, 2900]),
        // O
        vowel(Vowel, [125, 656, 1023, 2521], 125, 180, 2521, [1500, 1800]),
        // &
        vowel(Vowel, [126, 600, 2050, 2595], 126, 180, 2595, [2600, 2900]),
        // a
        vowel(Vowel, [128, 700, 1800, 2600], 128, 50, 2600, [2500, 2800]),
        // A
        vowel(Vowel, [127, 756, 1309, 2535], 125, 180, 2535, [2300, 2600]),
        // l
        vowel(Liquid, [130, 300, 1500, 2800], 130, 50, 2800, [2100, 2100]),
        // r
        Phoneme::new(Liquid, [130, 300, 1100, 1900]),
        // m
        stop(Nasal, [130, 180, 1000, 2000], Place::Labial),
        // n
        stop(Nasal, [130, 180, 1700, 2700], Place::Alveolar),
        // N
        stop(Nasal, [130, 180, 2300, 0], Place::Velar),
        // b
        stop(VoicedPlosive, [100, 300, 500, 900], Place::Labial),
        // p
        stop(Plosive, [0, 500, 500, 500], Place::Labial),
        // d
        stop(VoicedPlosive, [100, 300, 500, 900], Place::Alveolar),
        // t
        stop(Plosive, [0, 4000, 4000, 4000], Place::Alveolar),
        // g
        stop(VoicedPlosive, [100, 300, 500, 900], Place::Velar),
        // k
        stop(Plosive, [0, 1200, 1200, 1200], Place::Velar),
        // f
        Phoneme::new(Fricative, [0, 850, 1200, 0]),
        // v
        Phoneme::new(Fricative, [120, 850, 1200, 0]),
        // s
        Phoneme::new(Fricative, [0, 4000, 6000, 7000]),
        // z
        Phoneme::new(Fricative, [120, 4000, 6000, 7000]),
        // S
        Phoneme::new(Fricative, [0, 2500, 4800, 6400]),
        // Z
        Phoneme::new(Fricative, [120, 2500, 4800, 6400]),
        // T
        Phoneme::new(Fricative, [0, 5500, 0, 0]),
        // D
        Phoneme::new(Fricative, [120, 5500, 0, 0]),
        // h
        Phoneme::silent(Aspirated),
    ],
};

/// Voices selectable by index through the `voice` option.
pub static VOICES: [&Voice; 1] = [&VOICE_BOB];
