use std::f32::consts::TAU;

use crate::graph::source::SharedSource;

/// A continuously wrapping phase accumulator.
///
/// Converts a frequency and sample rate into an angular position in
/// [0, TAU). The sample rate is fixed for the accumulator's lifetime; the
/// frequency is steerable, either directly through [`set_frequency`] or per
/// sample through an attached frequency-modulator source.
///
/// `next()` returns the *pre-advance* phase, so the first call observes the
/// initial phase rather than one step ahead. Wrapping is a single
/// subtraction, which is correct as long as the per-sample increment stays
/// below TAU - frequencies at or above the sample rate are out of contract.
///
/// [`set_frequency`]: Phase::set_frequency
pub struct Phase {
    value: f32,
    frequency: f32,
    sample_rate: f32,
    modulator: Option<SharedSource>,
}

impl Phase {
    pub fn new(frequency: f32, sample_rate: f32) -> Self {
        Self {
            value: 0.0,
            frequency,
            sample_rate,
            modulator: None,
        }
    }

    /// Attach a source whose output sets the frequency before every step.
    pub fn with_frequency_mod(mut self, modulator: SharedSource) -> Self {
        self.modulator = Some(modulator);
        self
    }

    /// Takes effect on the next increment; the current phase is untouched.
    pub fn set_frequency(&mut self, frequency: f32) {
        self.frequency = frequency;
    }

    /// Current phase without advancing. Only meaningful between steps.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Return the current phase, then advance one step and wrap.
    pub fn next(&mut self) -> f32 {
        if let Some(modulator) = &self.modulator {
            let frequency = modulator.borrow_mut().sample();
            self.frequency = frequency;
        }

        let current = self.value;
        self.value += TAU * self.frequency / self.sample_rate;
        if self.value > TAU {
            self.value -= TAU;
        }
        current
    }
}
