//! Utility functions.

pub mod random;

#[allow(unused_imports)]
use num_traits::float::Float;

#[inline]
pub fn clip_8(x: i32) -> i8 {
    x.clamp(i8::MIN as i32, i8::MAX as i32) as i8
}

/// Frequency ratio of an interval given in semitones.
#[inline]
pub fn semitones_to_ratio(semitones: f32) -> f32 {
    f32::powf(2.0, semitones / 12.0)
}

/// Scales a fixed-point ratio (256 = unity) by a depth given in percent.
#[inline]
pub fn scale_ratio_depth(ratio: u16, depth: u8) -> u16 {
    let deviation = ratio as i32 - 256;
    (256 + deviation * depth as i32 / 100) as u16
}
