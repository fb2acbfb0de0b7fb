#![allow(dead_code)]

use std::collections::VecDeque;

use rand::RngCore;

/// Raw value that makes `rng.gen::<f64>()` return 0.0: every Bernoulli
/// trial succeeds.
pub const HIT: u64 = 0;
/// Raw value that makes `rng.gen::<f64>()` return just under 1.0: every
/// Bernoulli trial fails.
pub const MISS: u64 = u64::MAX;

/// Replays a fixed list of raw draws, then repeats `fallback` forever.
pub struct ScriptedRng {
    script: VecDeque<u64>,
    fallback: u64,
    pub draws: usize,
}

impl ScriptedRng {
    pub fn new(script: impl IntoIterator<Item = u64>, fallback: u64) -> Self {
        ScriptedRng { script: script.into_iter().collect(), fallback, draws: 0 }
    }

    /// Never lets a trial succeed.
    pub fn never() -> Self {
        Self::new([], MISS)
    }

    /// Every trial succeeds.
    pub fn always() -> Self {
        Self::new([], HIT)
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.script.pop_front().unwrap_or(self.fallback)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
