use std::f32::consts::TAU;

use tracing::debug;

use crate::error::GraphError;
use crate::graph::phase::Phase;
use crate::graph::source::{SampleSource, SharedSource};

/*
Oscillators
===========

Two flavors, with an explicit cost/flexibility trade:

Mutable oscillator: wraps a phase accumulator and evaluates the waveform
fresh on every call. More expensive per sample (sin() for the sine flavor),
but the frequency can change at any time - directly or driven by an attached
frequency-modulation source. This is the only flavor that can sit under FM.

Table oscillator: renders exactly one cycle into a lookup table at
construction and then just walks the table, wrapping the index. Much cheaper
per sample, but the frequency is frozen for the oscillator's lifetime.

The table length is floor(sample_rate / frequency), so the table's true
pitch is sample_rate / table_len rather than exactly the requested
frequency. At 48kHz and 440Hz the table holds 109 samples and actually
plays ~440.37Hz. That quantization is accepted in exchange for reusing one
cheap table per cycle; callers that need exact pitch use the mutable flavor.
*/

enum Waveform {
    Sine,
    /// Piecewise-linear map of phase to [-1, 1]; `negative_slope` flips it
    /// to fall instead of rise across the cycle.
    Saw { negative_slope: bool },
}

/// Frequency-steerable oscillator, recomputed every sample.
pub struct Oscillator {
    phase: Phase,
    waveform: Waveform,
}

impl Oscillator {
    pub fn sine(frequency: f32, sample_rate: f32) -> Self {
        Self {
            phase: Phase::new(frequency, sample_rate),
            waveform: Waveform::Sine,
        }
    }

    pub fn saw(frequency: f32, sample_rate: f32, negative_slope: bool) -> Self {
        Self {
            phase: Phase::new(frequency, sample_rate),
            waveform: Waveform::Saw { negative_slope },
        }
    }

    /// Drive the frequency from another source, re-read before every step.
    pub fn with_frequency_mod(mut self, modulator: SharedSource) -> Self {
        self.phase = self.phase.with_frequency_mod(modulator);
        self
    }

    pub fn set_frequency(&mut self, frequency: f32) {
        self.phase.set_frequency(frequency);
    }
}

impl SampleSource for Oscillator {
    fn sample(&mut self) -> f32 {
        let theta = self.phase.next();
        match self.waveform {
            Waveform::Sine => theta.sin(),
            Waveform::Saw { negative_slope } => {
                let ramp = 2.0 * (theta / TAU) - 1.0;
                if negative_slope {
                    -ramp
                } else {
                    ramp
                }
            }
        }
    }
}

/// Fixed-frequency sine backed by a one-cycle lookup table.
pub struct TableOscillator {
    table: Vec<f32>,
    index: usize,
}

impl TableOscillator {
    /// Fails if the frequency is non-positive or leaves no room for even a
    /// single table sample (frequency above the sample rate).
    pub fn sine(frequency: f32, sample_rate: f32) -> Result<Self, GraphError> {
        if frequency <= 0.0 || sample_rate <= 0.0 {
            return Err(GraphError::InvalidFrequency {
                frequency,
                sample_rate,
            });
        }

        let samples_per_cycle = (sample_rate / frequency) as usize;
        if samples_per_cycle == 0 {
            return Err(GraphError::InvalidFrequency {
                frequency,
                sample_rate,
            });
        }

        let mut phase = Phase::new(frequency, sample_rate);
        let mut table = Vec::with_capacity(samples_per_cycle);
        for _ in 0..samples_per_cycle {
            table.push(phase.next().sin());
        }

        debug!(
            frequency,
            table_len = table.len(),
            actual_frequency = sample_rate / table.len() as f32,
            "built table oscillator"
        );

        Ok(Self { table, index: 0 })
    }

    /// Number of samples in one cycle of the cached waveform.
    pub fn table_len(&self) -> usize {
        self.table.len()
    }
}

impl SampleSource for TableOscillator {
    fn sample(&mut self) -> f32 {
        let value = self.table[self.index];
        self.index += 1;
        if self.index >= self.table.len() {
            self.index = 0;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::combine::Constant;
    use crate::graph::shared;

    const SAMPLE_RATE: f32 = 48_000.0;

    #[test]
    fn mutable_sine_matches_closed_form() {
        let frequency = 440.0;
        let mut osc = Oscillator::sine(frequency, SAMPLE_RATE);

        for n in 0..64 {
            let expected = (TAU * frequency * n as f32 / SAMPLE_RATE).sin();
            let actual = osc.sample();
            // Accumulated phase drifts from the closed form by a few ulps
            // per step, hence the loose tolerance.
            assert!(
                (actual - expected).abs() < 1e-4,
                "sample {}: expected {}, got {}",
                n,
                expected,
                actual
            );
        }
    }

    #[test]
    fn saw_ramps_across_the_cycle() {
        let frequency = 1_000.0;
        let mut rising = Oscillator::saw(frequency, SAMPLE_RATE, false);
        let mut falling = Oscillator::saw(frequency, SAMPLE_RATE, true);

        assert_eq!(rising.sample(), -1.0);
        assert_eq!(falling.sample(), 1.0);

        let mut previous = -1.0;
        for _ in 0..30 {
            let value = rising.sample();
            assert!(value > previous, "rising saw must increase mid-cycle");
            assert!(value <= 1.0);
            previous = value;
        }
    }

    #[test]
    fn saw_slopes_mirror_each_other() {
        let mut rising = Oscillator::saw(700.0, SAMPLE_RATE, false);
        let mut falling = Oscillator::saw(700.0, SAMPLE_RATE, true);
        for _ in 0..100 {
            assert_eq!(rising.sample(), -falling.sample());
        }
    }

    #[test]
    fn frequency_mod_steers_the_oscillator() {
        let sample_rate = 1_000.0;
        let mut osc =
            Oscillator::sine(100.0, sample_rate).with_frequency_mod(shared(Constant::new(250.0)));

        // First sample is still phase zero; after that the phase advances at
        // the modulator's 250Hz, a quarter turn per sample.
        assert_eq!(osc.sample(), 0.0);
        assert!((osc.sample() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn table_length_truncates_partial_cycles() {
        let osc = TableOscillator::sine(440.0, SAMPLE_RATE).unwrap();
        assert_eq!(osc.table_len(), (SAMPLE_RATE / 440.0) as usize);
    }

    #[test]
    fn table_loops_identically() {
        let mut osc = TableOscillator::sine(480.0, SAMPLE_RATE).unwrap();
        let len = osc.table_len();

        let first_cycle: Vec<f32> = (0..len).map(|_| osc.sample()).collect();
        let second_cycle: Vec<f32> = (0..len).map(|_| osc.sample()).collect();
        assert_eq!(first_cycle, second_cycle);
        assert_eq!(first_cycle[0], 0.0, "cycle starts at phase zero");
    }

    #[test]
    fn table_rejects_degenerate_frequencies() {
        assert!(matches!(
            TableOscillator::sine(0.0, SAMPLE_RATE),
            Err(GraphError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            TableOscillator::sine(-20.0, SAMPLE_RATE),
            Err(GraphError::InvalidFrequency { .. })
        ));
        assert!(matches!(
            TableOscillator::sine(96_000.0, SAMPLE_RATE),
            Err(GraphError::InvalidFrequency { .. })
        ));
    }
}
