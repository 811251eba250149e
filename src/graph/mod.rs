//! Composable per-sample signal nodes.
//!
//! Every node implements [`SampleSource`]: one call, one amplitude value,
//! one time-step of state advance. Nodes compose by holding handles to
//! other nodes; the leaves are oscillators, noise, and constants, and the
//! interior nodes are combinators, envelopes, and mixers.

pub mod combine;
pub mod envelope;
pub mod mixer;
pub mod noise;
pub mod oscillator;
pub mod phase;
pub mod source;

pub use combine::{Constant, FmCarrier, Multiplier, Summer};
pub use envelope::{create_envelope, BellEnvelope, EnvelopeId, LinearSegment, SegmentStatus};
pub use mixer::{MutableSummer, SourceId};
pub use noise::Noise;
pub use oscillator::{Oscillator, TableOscillator};
pub use phase::Phase;
pub use source::{shared, SampleSource, SharedSource};
