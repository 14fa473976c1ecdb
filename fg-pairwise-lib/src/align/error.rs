use thiserror::Error;

/// Errors raised before any alignment work starts.  Alignment itself never fails: every pair of
/// valid sequences (empty ones included) has a defined optimal alignment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlignError {
    /// The gap score is positive.
    #[error("Invalid gap score: {value} must be zero or negative")]
    PositiveGapScore { value: i32 },

    /// The options could not be assembled, e.g. a required score was never set.
    #[error("Invalid alignment options: {0}")]
    InvalidOptions(String),

    /// An input sequence contains the byte reserved for gaps in the aligned output.
    #[error("Sequence {name} contains the reserved gap symbol '-' at offset {offset}")]
    ReservedSymbol { name: &'static str, offset: usize },

    /// A homology probability is not within (0, 1].
    #[error("Invalid {name} probability: {value} must be in the range (0, 1]")]
    InvalidProbability { name: &'static str, value: f64 },
}

impl From<crate::align::aligners::BuilderError> for AlignError {
    fn from(value: crate::align::aligners::BuilderError) -> Self {
        AlignError::InvalidOptions(value.to_string())
    }
}
