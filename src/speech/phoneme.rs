//! Phonetic alphabet, phoneme records and per-class behaviour.
//!
//! Timing and excitation behaviour is a property of the phoneme class, not of
//! individual phonemes: all phonemes of one class share one [`ClassFlags`]
//! record.

use crate::dur;
use crate::freq;
use crate::resources::Buzz;

pub const NUM_FREQS: usize = 4;

/// Voice bar (fundamental) frequency followed by the first three formant
/// frequencies, as phase increments per sample. A value of 0 means the
/// channel is not rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FreqSet {
    pub f: [u16; NUM_FREQS],
}

impl FreqSet {
    pub const SILENT: FreqSet = FreqSet { f: [0; NUM_FREQS] };

    pub const fn new(f: [u16; NUM_FREQS]) -> Self {
        Self { f }
    }

    /// Builds a frequency set from frequencies in Hz.
    pub const fn from_hz(hz: [u32; NUM_FREQS]) -> Self {
        Self {
            f: [freq(hz[0]), freq(hz[1]), freq(hz[2]), freq(hz[3])],
        }
    }

    #[inline]
    pub fn voice_bar(&self) -> u16 {
        self.f[0]
    }

    #[inline]
    pub fn set_voice_bar(&mut self, f0: u16) {
        self.f[0] = f0;
    }

    /// Copies the three formant frequencies of `other`, keeping the voice bar.
    #[inline]
    pub fn copy_formants_from(&mut self, other: &FreqSet) {
        self.f[1..].copy_from_slice(&other.f[1..]);
    }
}

/// Excitation driving a segment.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SoundSource {
    #[default]
    Silence,
    Aspiration,
    Frication,
    Buzz,
}

impl SoundSource {
    pub fn name(self) -> &'static str {
        match self {
            SoundSource::Silence => "silence",
            SoundSource::Aspiration => "aspiration",
            SoundSource::Frication => "frication",
            SoundSource::Buzz => "buzz",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PhonemeClass {
    #[default]
    Silence,
    Plosive,
    VoicedPlosive,
    Fricative,
    Aspirated,
    Vowel,
    Semivowel,
    Nasal,
    Liquid,
}

pub const NUM_PHONEME_CLASSES: usize = 9;

/// Behaviour shared by all phonemes of one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassFlags {
    /// Glide frequencies smoothly into the neighbour instead of stair-stepping.
    pub glide: bool,
    /// Transitions use the neighbour's place-of-articulation targets instead of
    /// this phoneme's own frequencies.
    pub obstruent: bool,
    /// Voicing timbre for buzz-excited segments.
    pub buzz: Buzz,
    pub pre_source: SoundSource,
    pub nucleus_source: SoundSource,
    pub post_source: SoundSource,
    /// In timeslices.
    pub nucleus_duration: u16,
    /// In timeslices.
    pub transition_duration: u16,
}

impl ClassFlags {
    const fn new(
        glide: bool,
        obstruent: bool,
        buzz: Buzz,
        sources: [SoundSource; 3],
        nucleus_ms: u32,
        transition_ms: u32,
    ) -> Self {
        Self {
            glide,
            obstruent,
            buzz,
            pre_source: sources[0],
            nucleus_source: sources[1],
            post_source: sources[2],
            nucleus_duration: dur(nucleus_ms),
            transition_duration: dur(transition_ms),
        }
    }
}

use SoundSource::{Aspiration as Asp, Buzz as Voiced, Frication as Fric, Silence as Sil};

/// Indexed by [`PhonemeClass`]. Sources are listed as pre, nucleus, post.
const CLASS_FLAGS: [ClassFlags; NUM_PHONEME_CLASSES] = [
    // Silence
    ClassFlags::new(false, false, Buzz::Vowel, [Sil, Sil, Sil], 40, 0),
    // Plosive: closure, release burst, aspiration into the neighbour.
    ClassFlags::new(false, true, Buzz::Vowel, [Sil, Fric, Asp], 30, 30),
    // VoicedPlosive
    ClassFlags::new(true, true, Buzz::Plosive, [Voiced, Sil, Voiced], 30, 20),
    // Fricative
    ClassFlags::new(false, false, Buzz::Vowel, [Sil, Fric, Sil], 110, 0),
    // Aspirated
    ClassFlags::new(false, false, Buzz::Vowel, [Asp, Asp, Asp], 0, 80),
    // Vowel
    ClassFlags::new(true, false, Buzz::Vowel, [Voiced, Voiced, Voiced], 50, 30),
    // Semivowel
    ClassFlags::new(true, false, Buzz::Vowel, [Voiced, Voiced, Voiced], 30, 50),
    // Nasal
    ClassFlags::new(true, true, Buzz::Nasal, [Voiced, Voiced, Voiced], 60, 30),
    // Liquid
    ClassFlags::new(true, false, Buzz::Liquid, [Voiced, Voiced, Voiced], 100, 25),
];

impl PhonemeClass {
    #[inline]
    pub fn flags(self) -> &'static ClassFlags {
        &CLASS_FLAGS[self as usize]
    }
}

/// Place of articulation of an obstruent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Place {
    /// b, p, m
    #[default]
    Labial,
    /// d, t, n
    Alveolar,
    /// g, k, N
    Velar,
}

pub const NUM_PLACES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phoneme {
    pub class: PhonemeClass,
    pub f: FreqSet,
    /// Only meaningful for obstruent classes.
    pub place: Place,
    /// Frequencies a neighbouring obstruent of each place transitions
    /// toward or from. Only meaningful for non-obstruent classes.
    pub obstruent_targets: [FreqSet; NUM_PLACES],
}

impl Phoneme {
    pub const fn new(class: PhonemeClass, hz: [u32; NUM_FREQS]) -> Self {
        Self {
            class,
            f: FreqSet::from_hz(hz),
            place: Place::Labial,
            obstruent_targets: [FreqSet::SILENT; NUM_PLACES],
        }
    }

    pub const fn silent(class: PhonemeClass) -> Self {
        Self::new(class, [0; NUM_FREQS])
    }

    pub const fn with_place(mut self, place: Place) -> Self {
        self.place = place;
        self
    }

    /// Sets the labial, alveolar and velar targets, in Hz.
    pub const fn with_targets(
        mut self,
        labial: [u32; NUM_FREQS],
        alveolar: [u32; NUM_FREQS],
        velar: [u32; NUM_FREQS],
    ) -> Self {
        self.obstruent_targets = [
            FreqSet::from_hz(labial),
            FreqSet::from_hz(alveolar),
            FreqSet::from_hz(velar),
        ];
        self
    }

    #[inline]
    pub fn flags(&self) -> &'static ClassFlags {
        self.class.flags()
    }

    #[inline]
    pub fn obstruent_target(&self, place: Place) -> FreqSet {
        self.obstruent_targets[place as usize]
    }
}

/// Phonetic alphabet. The discriminant indexes the phoneme table of a voice.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Symbol {
    /// Silence at word and utterance boundaries.
    #[default]
    None,

    // Vowels and semivowels
    J,
    W,
    Iy,
    Uw,
    Ih,
    Uh,
    Ey,
    Ow,
    Ah,
    Schwa,
    Er,
    Eh,
    Ao,
    Ae,
    A,
    Aa,

    // Liquids
    L,
    R,

    // Nasals
    M,
    N,
    Ng,

    // Stops
    B,
    P,
    D,
    T,
    G,
    K,

    // Fricatives
    F,
    V,
    S,
    Z,
    Sh,
    Zh,
    Th,
    Dh,

    // Aspirated
    H,
}

pub const NUM_SYMBOLS: usize = Symbol::H as usize + 1;

impl Symbol {
    /// Maps a character of the phonetic alphabet to its symbol. Everything
    /// else, punctuation, digits and whitespace included, maps to silence.
    pub const fn from_char(c: char) -> Symbol {
        match c {
            'j' => Symbol::J,
            'w' => Symbol::W,
            'i' => Symbol::Iy,
            'u' => Symbol::Uw,
            'I' => Symbol::Ih,
            'U' => Symbol::Uh,
            'e' => Symbol::Ey,
            'o' => Symbol::Ow,
            'V' => Symbol::Ah,
            '@' => Symbol::Schwa,
            'R' => Symbol::Er,
            'E' => Symbol::Eh,
            'O' => Symbol::Ao,
            '&' => Symbol::Ae,
            'a' => Symbol::A,
            'A' => Symbol::Aa,
            'l' => Symbol::L,
            'r' => Symbol::R,
            'm' => Symbol::M,
            'n' => Symbol::N,
            'N' => Symbol::Ng,
            'b' => Symbol::B,
            'p' => Symbol::P,
            'd' => Symbol::D,
            't' => Symbol::T,
            'g' => Symbol::G,
            'k' => Symbol::K,
            'f' => Symbol::F,
            'v' => Symbol::V,
            's' => Symbol::S,
            'z' => Symbol::Z,
            'S' => Symbol::Sh,
            'Z' => Symbol::Zh,
            'T' => Symbol::Th,
            'D' => Symbol::Dh,
            'h' => Symbol::H,
            _ => Symbol::None,
        }
    }

    /// Character of the phonetic alphabet; a space for silence.
    pub const fn to_char(self) -> char {
        match self {
            Symbol::None => ' ',
            Symbol::J => 'j',
            Symbol::W => 'w',
            Symbol::Iy => 'i',
            Symbol::Uw => 'u',
            Symbol::Ih => 'I',
            Symbol::Uh => 'U',
            Symbol::Ey => 'e',
            Symbol::Ow => 'o',
            Symbol::Ah => 'V',
            Symbol::Schwa => '@',
            Symbol::Er => 'R',
            Symbol::Eh => 'E',
            Symbol::Ao => 'O',
            Symbol::Ae => '&',
            Symbol::A => 'a',
            Symbol::Aa => 'A',
            Symbol::L => 'l',
            Symbol::R => 'r',
            Symbol::M => 'm',
            Symbol::N => 'n',
            Symbol::Ng => 'N',
            Symbol::B => 'b',
            Symbol::P => 'p',
            Symbol::D => 'd',
            Symbol::T => 't',
            Symbol::G => 'g',
            Symbol::K => 'k',
            Symbol::F => 'f',
            Symbol::V => 'v',
            Symbol::S => 's',
            Symbol::Z => 'z',
            Symbol::Sh => 'S',
            Symbol::Zh => 'Z',
            Symbol::Th => 'T',
            Symbol::Dh => 'D',
            Symbol::H => 'h',
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::from_char(c)
    }
}
