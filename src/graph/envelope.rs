use tracing::debug;

use crate::error::GraphError;
use crate::graph::source::{shared, SampleSource, SharedSource};

/*
Envelope Segments
=================

An envelope shapes amplitude over time by multiplying a signal with a
time-varying gain. The building block is a linear ramp segment: the entire
gain-per-sample series is precomputed at construction (duration is fixed for
the segment's lifetime), and playback is a table walk.

Completion is reported as a status value returned alongside each sample
rather than through a registered callback object. The composite envelope
that owns the segments inspects the status and performs the stage
transition itself, so a segment can never outlive or be copied away from
the thing it is supposed to notify.

Vocabulary
----------

  segment   One precomputed ramp between two gain values over a fixed
            duration. Loops its index back to zero on completion; it is
            built once, not rebuilt per cycle.

  stage     Which segment a composite envelope is currently playing.
            The two-stage bell loops attack -> decay -> attack -> ...

  scale     A linear factor applied to the peak gain at construction time.
*/

/// What a segment reports after producing a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStatus {
    Running,
    /// The sample just produced was the last of the ramp; the index has
    /// wrapped back to zero.
    Completed,
}

/// A precomputed linear gain ramp spanning `[start_gain, target_gain)`.
pub struct LinearSegment {
    gains: Vec<f32>,
    index: usize,
}

impl LinearSegment {
    /// Builds a ramp of `round(sample_rate * duration)` gain values.
    ///
    /// A non-positive duration is a construction error. A positive duration
    /// that rounds to zero samples is clamped to a single sample so the
    /// gain-per-sample division stays well-defined.
    pub fn new(
        sample_rate: f32,
        start_gain: f32,
        target_gain: f32,
        duration_secs: f32,
    ) -> Result<Self, GraphError> {
        if duration_secs <= 0.0 {
            return Err(GraphError::InvalidDuration {
                seconds: duration_secs,
            });
        }

        let samples = ((sample_rate * duration_secs).round() as usize).max(1);
        let gain_per_sample = (target_gain - start_gain) / samples as f32;

        let mut gains = Vec::with_capacity(samples);
        let mut gain = start_gain;
        for _ in 0..samples {
            gains.push(gain);
            gain += gain_per_sample;
        }

        Ok(Self { gains, index: 0 })
    }

    /// Produce the gain at the current index and advance, reporting
    /// completion on the call that consumes the final value.
    pub fn next(&mut self) -> (f32, SegmentStatus) {
        let gain = self.gains[self.index];
        self.index += 1;
        if self.index >= self.gains.len() {
            self.index = 0;
            (gain, SegmentStatus::Completed)
        } else {
            (gain, SegmentStatus::Running)
        }
    }

    /// Ramp length in samples.
    pub fn len(&self) -> usize {
        self.gains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gains.is_empty()
    }
}

/// Stage selector for the two-segment bell envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BellStage {
    Attack,
    Decay,
}

/// Two-stage looping envelope: a 3ms strike up to `0.5 * scale`, then a
/// long 3.75s decay back to silence, repeating indefinitely.
pub struct BellEnvelope {
    attack: LinearSegment,
    decay: LinearSegment,
    stage: BellStage,
}

impl BellEnvelope {
    const ATTACK_SECS: f32 = 0.003;
    const DECAY_SECS: f32 = 3.75;
    const PEAK_GAIN: f32 = 0.5;

    pub fn new(sample_rate: f32, scale: f32) -> Result<Self, GraphError> {
        let peak = Self::PEAK_GAIN * scale;
        let attack = LinearSegment::new(sample_rate, 0.0, peak, Self::ATTACK_SECS)?;
        let decay = LinearSegment::new(sample_rate, peak, 0.0, Self::DECAY_SECS)?;

        debug!(
            sample_rate,
            scale,
            attack_samples = attack.len(),
            decay_samples = decay.len(),
            "built bell envelope"
        );

        Ok(Self {
            attack,
            decay,
            stage: BellStage::Attack,
        })
    }
}

impl SampleSource for BellEnvelope {
    fn sample(&mut self) -> f32 {
        let (gain, status) = match self.stage {
            BellStage::Attack => self.attack.next(),
            BellStage::Decay => self.decay.next(),
        };

        if status == SegmentStatus::Completed {
            self.stage = match self.stage {
                BellStage::Attack => BellStage::Decay,
                BellStage::Decay => BellStage::Attack,
            };
        }

        gain
    }
}

/// Named envelope shapes exposed through the construction API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeId {
    Bell,
}

/// Build a shared envelope source by identifier.
pub fn create_envelope(
    id: EnvelopeId,
    sample_rate: f32,
    scale: f32,
) -> Result<SharedSource, GraphError> {
    match id {
        EnvelopeId::Bell => Ok(shared(BellEnvelope::new(sample_rate, scale)?)),
    }
}

/// Convert decibels to a linear gain factor.
pub fn db_to_gain(db: f32) -> f32 {
    10.0_f32.powf(db / 20.0)
}

/// Convert a list of decibel values to linear gains.
pub fn db_to_gains(dbs: &[f32]) -> Vec<f32> {
    dbs.iter().copied().map(db_to_gain).collect()
}
