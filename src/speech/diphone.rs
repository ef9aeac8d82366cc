//! Diphone transition engine.
//!
//! A diphone covers the nucleus of one phoneme and the transition into the
//! next one. It is played as up to three segments:
//!
//! - nucleus: steady frequencies of the first phoneme, with its nucleus source
//! - post: first half of the transition, with the first phoneme's post source
//! - pre: second half of the transition, with the second phoneme's pre source
//!
//! Obstruents have no formant frequencies of their own during transitions.
//! Their neighbours provide place-dependent targets instead, which is how the
//! place of articulation of a stop or nasal becomes audible.

use super::phoneme::{FreqSet, Phoneme, SoundSource, NUM_FREQS};
use super::segment::Segment;

/// The four endpoints of a transition, before any pitch is applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub outer_start: FreqSet,
    pub inner_start: FreqSet,
    pub inner_end: FreqSet,
    pub outer_end: FreqSet,
}

impl Transition {
    pub fn between(p1: &Phoneme, p2: &Phoneme) -> Self {
        let flags1 = p1.flags();
        let flags2 = p2.flags();

        let outer_start = if flags1.obstruent {
            p2.obstruent_target(p1.place)
        } else {
            p1.f
        };
        let outer_end = if flags2.obstruent {
            p1.obstruent_target(p2.place)
        } else {
            p2.f
        };

        if !flags1.glide || !flags2.glide {
            // Stair-step: hold each side's frequencies for its own half.
            return Self {
                outer_start,
                inner_start: outer_start,
                inner_end: outer_end,
                outer_end,
            };
        }

        let mid = midpoint(
            &outer_start,
            &outer_end,
            flags1.transition_duration,
            flags2.transition_duration,
        );
        Self {
            outer_start,
            inner_start: mid,
            inner_end: mid,
            outer_end,
        }
    }
}

/// Point between `a` and `d` weighted by the two transition durations, so that
/// both halves of the transition glide at the same rate.
fn midpoint(a: &FreqSet, d: &FreqSet, d1: u16, d2: u16) -> FreqSet {
    let total = d1 as i32 + d2 as i32;
    let f = core::array::from_fn::<u16, NUM_FREQS, _>(|k| {
        let (a, d) = (a.f[k] as i32, d.f[k] as i32);
        if total == 0 || a == 0 || d == 0 {
            return a.max(d) as u16;
        }
        (a + d1 as i32 * (d - a) / total) as u16
    });
    FreqSet::new(f)
}

/// Scales class durations from the voice's natural rate to the requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tempo {
    natural_rate: u16,
    rate: u16,
}

impl Tempo {
    pub const fn new(natural_rate: u16, rate: u16) -> Self {
        Self { natural_rate, rate }
    }

    /// Durations are played exactly as tuned.
    pub const fn natural() -> Self {
        Self::new(1, 1)
    }

    /// Converts a class duration to the played duration. A non-zero duration
    /// never collapses to zero.
    pub fn scale(&self, slices: u16) -> u16 {
        if slices == 0 || self.rate == 0 || self.natural_rate == self.rate {
            return slices;
        }
        let scaled = slices as u32 * self.natural_rate as u32 / self.rate as u32;
        scaled.clamp(1, u16::MAX as u32) as u16
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Self::natural()
    }
}

/// Segment plan of one diphone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Diphone {
    pub transition: Transition,
    pub nucleus: Option<Segment>,
    pub post: Option<Segment>,
    pub pre: Option<Segment>,
}

impl Diphone {
    /// Plans the diphone from `p1` into `p2`. `f0a` is the pitch up to the
    /// middle of the transition, `f0b` the pitch reached at its end.
    pub fn new(p1: &Phoneme, p2: &Phoneme, f0a: u16, f0b: u16, tempo: Tempo) -> Self {
        let flags1 = p1.flags();
        let flags2 = p2.flags();

        let nucleus = (flags1.nucleus_duration != 0).then(|| {
            let mut f = p1.f;
            if f.voice_bar() != 0 {
                f.set_voice_bar(f0a);
            }
            Segment::new(
                f,
                f,
                tempo.scale(flags1.nucleus_duration),
                flags1.nucleus_source,
            )
            .with_buzz(flags1.buzz)
        });

        let d1 = flags1.transition_duration;
        let mut d2 = flags2.transition_duration;
        if d1 == 0 && d2 == 0 {
            return Self {
                transition: Transition::default(),
                nucleus,
                post: None,
                pre: None,
            };
        }

        let transition = Transition::between(p1, p2);

        let post = (d1 != 0).then(|| {
            let mut start = transition.outer_start;
            let mut end = transition.inner_start;
            start.set_voice_bar(f0a);
            end.set_voice_bar(f0a);
            // Aspirated phonemes take the formants of what follows them.
            if flags1.nucleus_source == SoundSource::Aspiration {
                start.copy_formants_from(&transition.outer_end);
            }
            Segment::new(start, end, tempo.scale(d1), flags1.post_source).with_buzz(flags1.buzz)
        });

        // The aspiration itself covers the approach to an aspirated phoneme.
        if flags2.pre_source == SoundSource::Aspiration {
            d2 = 0;
        }
        let pre = (d2 != 0).then(|| {
            let mut start = transition.inner_end;
            let mut end = transition.outer_end;
            start.set_voice_bar(f0a);
            end.set_voice_bar(f0b);
            Segment::new(start, end, tempo.scale(d2), flags2.pre_source).with_buzz(flags2.buzz)
        });

        Self {
            transition,
            nucleus,
            post,
            pre,
        }
    }

    /// Segments in playing order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        [&self.nucleus, &self.post, &self.pre]
            .into_iter()
            .filter_map(Option::as_ref)
    }

    pub fn num_samples(&self) -> usize {
        self.segments().map(Segment::num_samples).sum()
    }
}
