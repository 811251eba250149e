use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::source::SampleSource;

/// Uniform white noise in [-1, 1], one independent draw per sample.
///
/// Entropy-seeded by default. Use [`Noise::with_seed`] when a test needs a
/// reproducible stream.
pub struct Noise {
    rng: SmallRng,
}

impl Noise {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Noise {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleSource for Noise {
    fn sample(&mut self) -> f32 {
        self.rng.gen_range(-1.0..=1.0)
    }
}
