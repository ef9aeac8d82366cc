//! Synth instances and the fixed-capacity pool they live in.
//!
//! A synth turns phonetic symbols into samples. It remembers the last symbol
//! it spoke, so each new symbol completes a diphone with the previous one.

use core::ops::RangeInclusive;

use crate::error::{Error, Result};
use crate::resources::wavetables;
use crate::sink::{NullSink, SampleSink};
use crate::speech::diphone::{Diphone, Tempo};
use crate::speech::phoneme::{Phoneme, Symbol};
use crate::speech::segment::{Segment, SegmentPlayer};
use crate::speech::voice::{Voice, VOICES, VOICE_BOB};
use crate::utils::{scale_ratio_depth, semitones_to_ratio};

pub const PITCH_MODULATION_CYCLE: usize = 16;

/// Intonation contour, relative to 120.
const PITCH_CONTOUR: [u16; PITCH_MODULATION_CYCLE] = [
    120, 128, 134, 138, 140, 138, 134, 128, 120, 112, 106, 102, 100, 102, 106, 112,
];

/// Pitch contour as fixed-point ratios, 256 = unity.
const PITCH_MODULATION: [u16; PITCH_MODULATION_CYCLE] = {
    let mut ratios = [0; PITCH_MODULATION_CYCLE];
    let mut i = 0;
    while i < PITCH_MODULATION_CYCLE {
        ratios[i] = (PITCH_CONTOUR[i] as u32 * 256 / 120) as u16;
        i += 1;
    }
    ratios
};

/// Pitch offset in semitones.
pub const PITCH_RANGE: RangeInclusive<i8> = -24..=24;
/// Pitch modulation depth in percent.
pub const PITCH_MODULATION_RANGE: RangeInclusive<u8> = 0..=100;
/// Speaking rate in words per minute.
pub const RATE_RANGE: RangeInclusive<u16> = 40..=400;

/// Speech parameters of one synth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Index into [`VOICES`].
    pub voice: usize,
    /// Offset from the voice's base pitch, in semitones.
    pub pitch: i8,
    /// Depth of the intonation contour, in percent.
    pub pitch_modulation: u8,
    /// Words per minute.
    pub rate: u16,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            voice: 0,
            pitch: 0,
            pitch_modulation: 100,
            rate: 120,
        }
    }
}

#[derive(Debug)]
pub struct Synth<'a, S = NullSink> {
    output: Option<S>,
    voice: &'a Voice,
    player: SegmentPlayer<'static>,
    pitch_phase: usize,
    modulated_pitch: [u16; PITCH_MODULATION_CYCLE],
    last: Symbol,
    options: Options,
}

impl<S: SampleSink> Default for Synth<'_, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S: SampleSink> Synth<'a, S> {
    /// Creates a synth speaking with the default voice into no output.
    pub fn new() -> Self {
        let mut synth = Self {
            output: None,
            voice: &VOICE_BOB,
            player: SegmentPlayer::new(wavetables()),
            pitch_phase: 0,
            modulated_pitch: [0; PITCH_MODULATION_CYCLE],
            last: Symbol::None,
            options: Options::default(),
        };
        synth.update_modulated_pitch();
        synth
    }

    /// Installs a sink, or discards samples from now on with `None`.
    pub fn set_output(&mut self, output: Option<S>) {
        self.output = output;
    }

    pub fn output(&self) -> Option<&S> {
        self.output.as_ref()
    }

    pub fn output_mut(&mut self) -> Option<&mut S> {
        self.output.as_mut()
    }

    /// Removes the sink and returns it.
    pub fn take_output(&mut self) -> Option<S> {
        self.output.take()
    }

    pub fn voice(&self) -> &'a Voice {
        self.voice
    }

    /// Installs a voice and recomputes the pitch contour for it.
    pub fn set_voice(&mut self, voice: &'a Voice) {
        log::debug!("voice: {}", voice.name);
        self.voice = voice;
        if let Some(index) = VOICES.iter().position(|v| core::ptr::eq(*v, voice)) {
            self.options.voice = index;
        }
        self.update_modulated_pitch();
    }

    /// Pitch contour currently applied, as phase increments.
    pub fn modulated_pitch(&self) -> &[u16; PITCH_MODULATION_CYCLE] {
        &self.modulated_pitch
    }

    /// Last symbol spoken; the first half of the next diphone.
    pub fn last_symbol(&self) -> Symbol {
        self.last
    }

    pub fn player(&self) -> &SegmentPlayer<'static> {
        &self.player
    }

    pub fn play_segment(&mut self, segment: &Segment) {
        match self.output.as_mut() {
            Some(out) => self.player.play(segment, out),
            None => self.player.play(segment, &mut NullSink),
        }
    }

    /// Speaks the nucleus of `p1` and the transition into `p2`, and returns
    /// what was played.
    pub fn speak_diphone(&mut self, p1: &Phoneme, p2: &Phoneme) -> Diphone {
        let f0a = self.modulated_pitch[self.pitch_phase];
        self.pitch_phase = (self.pitch_phase + 1) % PITCH_MODULATION_CYCLE;
        let f0b = self.modulated_pitch[self.pitch_phase];

        let tempo = Tempo::new(self.voice.rate, self.options.rate);
        let diphone = Diphone::new(p1, p2, f0a, f0b, tempo);
        for segment in diphone.segments() {
            self.play_segment(segment);
        }
        diphone
    }

    pub fn speak(&mut self, symbol: Symbol) -> Diphone {
        log::debug!("diphone: /{}{}/", self.last.to_char(), symbol.to_char());
        let voice = self.voice;
        let diphone = self.speak_diphone(voice.phoneme(self.last), voice.phoneme(symbol));
        self.last = symbol;
        diphone
    }

    /// Speaks one character of the phonetic alphabet. Characters outside the
    /// alphabet are spoken as silence.
    pub fn speak_symbol(&mut self, c: char) -> Diphone {
        self.speak(Symbol::from_char(c))
    }

    /// Speaks every character, then a trailing silence to finish the last
    /// phoneme.
    pub fn speak_symbols(&mut self, symbols: &str) {
        for c in symbols.chars() {
            self.speak_symbol(c);
        }
        self.speak(Symbol::None);
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Applies every field on its own. Fields that are valid stay applied even
    /// when another one is rejected; the first rejection is returned.
    pub fn set_options(&mut self, options: &Options) -> Result<()> {
        let results = [
            self.set_voice_index(options.voice),
            self.set_pitch(options.pitch),
            self.set_pitch_modulation(options.pitch_modulation),
            self.set_rate(options.rate),
        ];
        results.into_iter().collect()
    }

    pub fn voice_index(&self) -> usize {
        self.options.voice
    }

    pub fn set_voice_index(&mut self, index: usize) -> Result<()> {
        let Some(&voice) = VOICES.get(index) else {
            log::warn!("rejected voice index {index}");
            return Err(Error::UnknownVoice(index));
        };
        if index == self.options.voice && core::ptr::eq(self.voice, voice) {
            return Ok(());
        }
        self.set_voice(voice);
        Ok(())
    }

    pub fn pitch(&self) -> i8 {
        self.options.pitch
    }

    pub fn set_pitch(&mut self, pitch: i8) -> Result<()> {
        if pitch == self.options.pitch {
            return Ok(());
        }
        if !PITCH_RANGE.contains(&pitch) {
            log::warn!("rejected pitch {pitch}");
            return Err(Error::PitchOutOfRange(pitch));
        }
        log::debug!("pitch: {pitch} semitones");
        self.options.pitch = pitch;
        self.update_modulated_pitch();
        Ok(())
    }

    pub fn pitch_modulation(&self) -> u8 {
        self.options.pitch_modulation
    }

    pub fn set_pitch_modulation(&mut self, depth: u8) -> Result<()> {
        if depth == self.options.pitch_modulation {
            return Ok(());
        }
        if !PITCH_MODULATION_RANGE.contains(&depth) {
            log::warn!("rejected pitch modulation {depth}");
            return Err(Error::PitchModulationOutOfRange(depth));
        }
        log::debug!("pitch modulation: {depth}%");
        self.options.pitch_modulation = depth;
        self.update_modulated_pitch();
        Ok(())
    }

    pub fn rate(&self) -> u16 {
        self.options.rate
    }

    pub fn set_rate(&mut self, rate: u16) -> Result<()> {
        if rate == self.options.rate {
            return Ok(());
        }
        if !RATE_RANGE.contains(&rate) {
            log::warn!("rejected rate {rate}");
            return Err(Error::RateOutOfRange(rate));
        }
        log::debug!("rate: {rate} wpm");
        self.options.rate = rate;
        Ok(())
    }

    fn update_modulated_pitch(&mut self) {
        let ratio = semitones_to_ratio(self.options.pitch as f32);
        let pitch = (self.voice.pitch as f32 * ratio) as u32;
        let depth = self.options.pitch_modulation;
        for (slot, &contour) in self.modulated_pitch.iter_mut().zip(&PITCH_MODULATION) {
            let ratio = scale_ratio_depth(contour, depth) as u32;
            *slot = (ratio * pitch / 256).min(u16::MAX as u32) as u16;
        }
    }
}

/// Identifies a synth inside its pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SynthHandle(usize);

impl SynthHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Fixed number of synth slots, handed out in order. Instances are never
/// released, so a handle stays valid for the lifetime of the pool.
#[derive(Debug)]
pub struct SynthPool<'a, S, const N: usize> {
    synths: [Synth<'a, S>; N],
    next: usize,
}

impl<S: SampleSink, const N: usize> Default for SynthPool<'_, S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S: SampleSink, const N: usize> SynthPool<'a, S, N> {
    pub fn new() -> Self {
        Self {
            synths: core::array::from_fn(|_| Synth::new()),
            next: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of synths handed out.
    pub fn len(&self) -> usize {
        self.next
    }

    pub fn is_empty(&self) -> bool {
        self.next == 0
    }

    /// Hands out the next free synth, in its initial state.
    pub fn create(&mut self) -> Result<SynthHandle> {
        if self.next >= N {
            log::warn!("synth pool exhausted ({} instances)", N);
            return Err(Error::PoolExhausted { capacity: N });
        }
        let handle = SynthHandle(self.next);
        self.next += 1;
        log::debug!("created synth {}", handle.0);
        Ok(handle)
    }

    pub fn get(&self, handle: SynthHandle) -> Option<&Synth<'a, S>> {
        self.synths[..self.next].get(handle.0)
    }

    pub fn get_mut(&mut self, handle: SynthHandle) -> Option<&mut Synth<'a, S>> {
        self.synths[..self.next].get_mut(handle.0)
    }
}
