pub mod error;
pub mod graph; // Composable per-sample signal nodes
pub mod patch; // Patch builders (construction API)
pub mod sequencing; // Duration scoping and milestone sequencing
pub mod stream;

pub use error::GraphError;
pub use graph::source::{shared, SampleSource, SharedSource};

/// Full-scale value for converting [-1, 1] float samples to signed 16-bit PCM.
pub const PCM_NORMALIZE: f32 = 32_767.0;
