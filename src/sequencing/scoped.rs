use crate::error::GraphError;
use crate::graph::source::{SampleSource, SharedSource};

/// Wraps a source with a fixed lifetime, silent once the lifetime expires.
///
/// While alive, each call forwards to the inner source; afterwards every
/// call returns 0.0 and the inner source is left untouched, its state
/// frozen at the moment of expiry. [`reset`] rewinds the lifetime counter
/// so the wrapper can be replayed (the inner source itself is not rewound -
/// it simply resumes from wherever it froze).
///
/// [`reset`]: ScopedSource::reset
pub struct ScopedSource {
    source: SharedSource,
    duration_secs: f32,
    duration_samples: u64,
    elapsed_samples: u64,
}

impl ScopedSource {
    pub fn new(
        source: SharedSource,
        duration_secs: f32,
        sample_rate: f32,
    ) -> Result<Self, GraphError> {
        if duration_secs <= 0.0 {
            return Err(GraphError::InvalidDuration {
                seconds: duration_secs,
            });
        }

        Ok(Self {
            source,
            duration_secs,
            duration_samples: (duration_secs * sample_rate) as u64,
            elapsed_samples: 0,
        })
    }

    /// The configured lifetime in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.duration_secs
    }

    /// Rewind the lifetime counter, allowing replay from the start.
    pub fn reset(&mut self) {
        self.elapsed_samples = 0;
    }
}

impl SampleSource for ScopedSource {
    fn sample(&mut self) -> f32 {
        if self.elapsed_samples <= self.duration_samples {
            self.elapsed_samples += 1;
            self.source.borrow_mut().sample()
        } else {
            0.0
        }
    }
}
