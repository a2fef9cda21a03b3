//! Seedable random source for spawn randomization and collision spin.
//!
//! Every random draw in a session goes through one `SessionRng`, so a fixed
//! seed reproduces the exact spawn sequence and collision jitter.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DEFAULT_SEED: u64 = 12345;

#[derive(Clone, Debug)]
pub struct SessionRng {
    inner: ChaCha8Rng,
}

impl SessionRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform sample in `[min, max)`. Returns `min` for an empty range.
    pub fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if min < max {
            self.inner.gen_range(min..max)
        } else {
            min
        }
    }

    /// Uniform sample in `[-half_width, half_width)`.
    pub fn centered(&mut self, half_width: f32) -> f32 {
        self.uniform(-half_width, half_width)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

impl Default for SessionRng {
    fn default() -> Self {
        Self::seeded(DEFAULT_SEED)
    }
}
