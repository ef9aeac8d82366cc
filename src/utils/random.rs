//! Linear congruential pseudo random number generator.
//!
//! Used to fill the noise tables, so the sequence must be deterministic.

#[derive(Debug, Clone)]
pub struct Random {
    state: u32,
}

impl Default for Random {
    fn default() -> Self {
        Self::new(0x21)
    }
}

impl Random {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn get_word(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Returns a value uniformly spread over `-amplitude..=amplitude`.
    #[inline]
    pub fn get_symmetric(&mut self, amplitude: u8) -> i8 {
        let span = 2 * amplitude as u32 + 1;
        ((self.get_word() >> 16) % span) as i8 - amplitude as i8
    }
}
