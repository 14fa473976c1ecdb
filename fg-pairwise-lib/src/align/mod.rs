pub mod aligners;
pub mod alignment;
pub mod error;
pub mod homology;
pub mod scoring;
pub mod traceback;

pub use aligners::{
    compute, compute_linear_space, constants::GAP, AlignmentMode, AlignmentOutcome, Aligners,
    Builder, LinearSpaceMode, MatrixMode,
};
pub use alignment::{AlignedPair, Alignment, AlignmentOperation};
pub use error::AlignError;
pub use scoring::{Score, Scoring};
