//! Tests for the diphone transition engine

use juno_synth::speech::{Diphone, Tempo, Transition};
use juno_synth::{
    dur, FreqSet, Phoneme, PhonemeClass, Place, SoundSource, Symbol, SLICE_SAMPLES, VOICE_BOB,
};

const F0A: u16 = 532;
const F0B: u16 = 567;

fn plan(p1: Symbol, p2: Symbol) -> Diphone {
    Diphone::new(
        VOICE_BOB.phoneme(p1),
        VOICE_BOB.phoneme(p2),
        F0A,
        F0B,
        Tempo::natural(),
    )
}

#[test]
fn stop_into_vowel_stair_steps() {
    let p = VOICE_BOB.phoneme(Symbol::P);
    let a = VOICE_BOB.phoneme(Symbol::A);

    let transition = Transition::between(p, a);

    assert_eq!(transition.outer_start, a.obstruent_target(Place::Labial));
    assert_eq!(transition.outer_end, a.f);
    assert_eq!(transition.inner_start, transition.outer_start);
    assert_eq!(transition.inner_end, transition.outer_end);
}

#[test]
fn vowel_into_vowel_meets_in_the_middle() {
    let i = VOICE_BOB.phoneme(Symbol::Iy);
    let a = VOICE_BOB.phoneme(Symbol::A);

    let transition = Transition::between(i, a);

    let mean: [u16; 4] = core::array::from_fn(|k| {
        let (x, y) = (i.f.f[k] as i32, a.f.f[k] as i32);
        (x + (y - x) / 2) as u16
    });
    assert_eq!(transition.inner_start, FreqSet::new(mean));
    assert_eq!(transition.inner_end, FreqSet::new(mean));
}

#[test]
fn midpoint_weighted_by_transition_durations() {
    // Semivowels transition in 50 ms, vowels in 30 ms.
    let j = VOICE_BOB.phoneme(Symbol::J);
    let a = VOICE_BOB.phoneme(Symbol::A);
    let (d1, d2) = (dur(50) as i32, dur(30) as i32);

    let transition = Transition::between(j, a);

    let f1 = (j.f.f[1] as i32 + d1 * (a.f.f[1] as i32 - j.f.f[1] as i32) / (d1 + d2)) as u16;
    assert_eq!(transition.inner_start.f[1], f1);
}

#[test]
fn midpoint_skips_silent_channels() {
    let p1 = Phoneme::new(PhonemeClass::Vowel, [130, 500, 1500, 0]);
    let p2 = Phoneme::new(PhonemeClass::Vowel, [130, 700, 1100, 2500]);

    let transition = Transition::between(&p1, &p2);

    let f = transition.inner_start.f;
    assert_eq!(f[0], p1.f.f[0]);
    assert_eq!(f[1], p1.f.f[1] + (p2.f.f[1] - p1.f.f[1]) / 2);
    assert_eq!(f[2], p1.f.f[2] - (p1.f.f[2] - p2.f.f[2]) / 2);
    assert_eq!(f[3], p2.f.f[3]);
}

#[test]
fn vowel_into_stop_targets_place() {
    let a = VOICE_BOB.phoneme(Symbol::A);

    let transition = Transition::between(a, VOICE_BOB.phoneme(Symbol::T));

    assert_eq!(transition.outer_start, a.f);
    assert_eq!(transition.outer_end, a.obstruent_target(Place::Alveolar));
}

#[test]
fn silence_is_only_a_nucleus() {
    let diphone = plan(Symbol::None, Symbol::None);

    let nucleus = diphone.nucleus.unwrap();
    assert_eq!(nucleus.source, SoundSource::Silence);
    assert_eq!(nucleus.slices, dur(40));
    assert!(diphone.post.is_none());
    assert!(diphone.pre.is_none());
    assert_eq!(diphone.num_samples(), 10 * SLICE_SAMPLES);
}

#[test]
fn vowel_nucleus_takes_current_pitch() {
    let diphone = plan(Symbol::A, Symbol::A);

    let nucleus = diphone.nucleus.unwrap();
    assert_eq!(nucleus.source, SoundSource::Buzz);
    assert_eq!(nucleus.start.voice_bar(), F0A);
    assert_eq!(nucleus.start, nucleus.end);
    assert_eq!(nucleus.slices, dur(50));
}

#[test]
fn unvoiced_nucleus_stays_unvoiced() {
    let diphone = plan(Symbol::S, Symbol::None);

    let nucleus = diphone.nucleus.unwrap();
    assert_eq!(nucleus.source, SoundSource::Frication);
    assert_eq!(nucleus.start.voice_bar(), 0);
    assert_eq!(nucleus.slices, dur(110));
    assert!(diphone.post.is_none());
    assert!(diphone.pre.is_none());
}

#[test]
fn transition_pitch_moves_from_f0a_to_f0b() {
    let diphone = plan(Symbol::Iy, Symbol::A);

    let post = diphone.post.unwrap();
    let pre = diphone.pre.unwrap();
    assert_eq!(post.start.voice_bar(), F0A);
    assert_eq!(post.end.voice_bar(), F0A);
    assert_eq!(pre.start.voice_bar(), F0A);
    assert_eq!(pre.end.voice_bar(), F0B);
    assert_eq!(post.slices, dur(30));
    assert_eq!(pre.slices, dur(30));
    assert_eq!(post.source, SoundSource::Buzz);
    assert_eq!(pre.source, SoundSource::Buzz);
}

#[test]
fn stop_release_uses_stop_sources() {
    let diphone = plan(Symbol::P, Symbol::A);

    assert_eq!(diphone.nucleus.unwrap().source, SoundSource::Frication);
    assert_eq!(diphone.post.unwrap().source, SoundSource::Aspiration);
    assert_eq!(diphone.pre.unwrap().source, SoundSource::Buzz);

    let segments: Vec<_> = diphone.segments().collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(
        diphone.num_samples(),
        (dur(30) + dur(30) + dur(30)) as usize * SLICE_SAMPLES
    );
}

#[test]
fn aspiration_takes_following_formants() {
    let a = VOICE_BOB.phoneme(Symbol::A);

    let diphone = plan(Symbol::H, Symbol::A);

    assert!(diphone.nucleus.is_none());
    let post = diphone.post.unwrap();
    assert_eq!(post.source, SoundSource::Aspiration);
    assert_eq!(post.start.f[1..], a.f.f[1..]);
    assert_eq!(post.slices, dur(80));
}

#[test]
fn no_approach_into_aspiration() {
    let diphone = plan(Symbol::A, Symbol::H);

    assert!(diphone.post.is_some());
    assert!(diphone.pre.is_none());
}

#[test]
fn tempo_scales_durations() {
    let faster = Tempo::new(120, 240);
    let slower = Tempo::new(120, 60);

    assert_eq!(faster.scale(12), 6);
    assert_eq!(faster.scale(1), 1);
    assert_eq!(faster.scale(0), 0);
    assert_eq!(slower.scale(12), 24);
    assert_eq!(Tempo::natural().scale(7), 7);
}

#[test]
fn tempo_applies_to_every_segment() {
    let a = VOICE_BOB.phoneme(Symbol::A);
    let i = VOICE_BOB.phoneme(Symbol::Iy);

    let natural = Diphone::new(a, i, F0A, F0B, Tempo::natural());
    let fast = Diphone::new(a, i, F0A, F0B, Tempo::new(120, 240));

    assert_eq!(fast.nucleus.unwrap().slices, natural.nucleus.unwrap().slices / 2);
    assert_eq!(fast.post.unwrap().slices, natural.post.unwrap().slices / 2);
    // Weighting of the midpoint ignores the tempo.
    assert_eq!(fast.transition, natural.transition);
}
