/// Errors raised while constructing signal-graph nodes.
///
/// Sample production itself never fails: once a graph is wired it is a total
/// function of accumulated state. Everything that can go wrong is caught here,
/// before the graph is handed to a real-time render callback.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Frequency is non-positive, or too high for the requested node
    /// (a lookup-table oscillator needs at least one sample per cycle).
    InvalidFrequency { frequency: f32, sample_rate: f32 },
    /// A ramp or scope duration that is zero or negative.
    InvalidDuration { seconds: f32 },
    /// Paired lists handed to a composite builder differ in length.
    MismatchedLengths { left: usize, right: usize },
    /// A composite builder was handed nothing to combine.
    EmptyComposite,
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidFrequency {
                frequency,
                sample_rate,
            } => {
                write!(
                    f,
                    "invalid frequency {} Hz at sample rate {} Hz",
                    frequency, sample_rate
                )
            }
            GraphError::InvalidDuration { seconds } => {
                write!(f, "invalid duration: {} seconds", seconds)
            }
            GraphError::MismatchedLengths { left, right } => {
                write!(
                    f,
                    "paired lists differ in length: {} vs {}",
                    left, right
                )
            }
            GraphError::EmptyComposite => {
                write!(f, "composite builder needs at least one source")
            }
        }
    }
}

impl std::error::Error for GraphError {}
