//! Segments: linear frequency glides rendered one timeslice at a time.

use super::envelope::{calc_envelope, calc_frication};
use super::phoneme::{FreqSet, SoundSource, NUM_FREQS};
use crate::oscillator::{
    render_formants, render_fricative, render_silence, FricOscillator, Oscillator,
    NUM_FORMANT_OSCILLATORS, NUM_FRICATIVE_OSCILLATORS,
};
use crate::resources::{Buzz, Wavetables};
use crate::sink::SampleSink;
use crate::SLICE_SAMPLES;

/// Frequencies moving from `start` to `end` over `slices` timeslices, with one
/// excitation source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: FreqSet,
    pub end: FreqSet,
    pub slices: u16,
    pub source: SoundSource,
    /// Voicing timbre, only used by buzz segments.
    pub buzz: Buzz,
}

impl Segment {
    pub fn new(start: FreqSet, end: FreqSet, slices: u16, source: SoundSource) -> Self {
        Self {
            start,
            end,
            slices,
            source,
            buzz: Buzz::Vowel,
        }
    }

    pub fn with_buzz(mut self, buzz: Buzz) -> Self {
        self.buzz = buzz;
        self
    }

    #[inline]
    pub fn num_samples(&self) -> usize {
        self.slices as usize * SLICE_SAMPLES
    }

    /// Per-slice frequencies of this segment.
    pub fn glide(&self) -> Glide {
        Glide::new(self)
    }
}

/// Iterator over the frequency set of each timeslice of a segment.
///
/// A channel that is 0 at one end takes the value of the other end, so a
/// frequency is never interpolated from or to 0. A single slice sits halfway
/// between both ends; longer segments hit `start` on the first slice and `end`
/// on the last. Aspiration never carries a voice bar.
#[derive(Debug, Clone)]
pub struct Glide {
    a: [i32; NUM_FREQS],
    b: [i32; NUM_FREQS],
    slices: u16,
    index: u16,
}

impl Glide {
    pub fn new(segment: &Segment) -> Self {
        let mut a = segment.start.f.map(i32::from);
        let mut b = segment.end.f.map(i32::from);
        for (a, b) in a.iter_mut().zip(b.iter_mut()) {
            if *a == 0 {
                *a = *b;
            } else if *b == 0 {
                *b = *a;
            }
        }
        if segment.source == SoundSource::Aspiration {
            a[0] = 0;
            b[0] = 0;
        }

        Self {
            a,
            b,
            slices: segment.slices,
            index: 0,
        }
    }

    fn at(&self, index: u16) -> FreqSet {
        let n = self.slices as i64;
        let i = index as i64;
        let f = core::array::from_fn(|k| {
            let (a, b) = (self.a[k] as i64, self.b[k] as i64);
            // The product needs more than 32 bits for long glides over the
            // whole u16 range.
            let value = if n == 1 {
                a + (b - a) / 2
            } else {
                a + (b - a) * i / (n - 1)
            };
            value as u16
        });
        FreqSet::new(f)
    }
}

impl Iterator for Glide {
    type Item = FreqSet;

    fn next(&mut self) -> Option<FreqSet> {
        if self.index >= self.slices {
            return None;
        }
        let freqs = self.at(self.index);
        self.index += 1;
        Some(freqs)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.slices - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Glide {}

/// Renders segments through the two oscillator banks. Oscillator phases carry
/// over from one segment to the next, so consecutive segments join without
/// phase jumps.
#[derive(Debug, Clone)]
pub struct SegmentPlayer<'a> {
    wavetables: &'a Wavetables,
    formants: [Oscillator<'a>; NUM_FORMANT_OSCILLATORS],
    fricatives: [FricOscillator; NUM_FRICATIVE_OSCILLATORS],
}

impl<'a> SegmentPlayer<'a> {
    pub fn new(wavetables: &'a Wavetables) -> Self {
        Self {
            wavetables,
            formants: [Oscillator::new(&wavetables.sine[0]); NUM_FORMANT_OSCILLATORS],
            fricatives: [FricOscillator::new(); NUM_FRICATIVE_OSCILLATORS],
        }
    }

    pub fn formants(&self) -> &[Oscillator<'a>; NUM_FORMANT_OSCILLATORS] {
        &self.formants
    }

    pub fn fricatives(&self) -> &[FricOscillator; NUM_FRICATIVE_OSCILLATORS] {
        &self.fricatives
    }

    pub fn play<S: SampleSink + ?Sized>(&mut self, segment: &Segment, out: &mut S) {
        log::trace!(
            "segment: {} {} slices {:?} -> {:?}",
            segment.source.name(),
            segment.slices,
            segment.start.f,
            segment.end.f
        );

        match segment.source {
            SoundSource::Silence => render_silence(segment.num_samples(), out),
            SoundSource::Buzz => {
                let wavetables = self.wavetables;
                let buzz = wavetables.buzz(segment.buzz);
                for freqs in segment.glide() {
                    calc_envelope(&freqs, &mut self.formants, buzz, &wavetables.sine);
                    render_formants(&mut self.formants, SLICE_SAMPLES, out);
                }
            }
            SoundSource::Frication | SoundSource::Aspiration => {
                for freqs in segment.glide() {
                    calc_frication(&freqs, &mut self.fricatives);
                    render_fricative(&mut self.fricatives, self.wavetables, SLICE_SAMPLES, out);
                }
            }
        }
    }
}
