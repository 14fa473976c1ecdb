use crate::align::error::AlignError;
use serde::Serialize;
use std::{fmt::Display, str::FromStr};

/// The symbol used for a gap in aligned output.  Input sequences must not contain it.
pub const GAP: u8 = b'-';

/// The initial capacity (in bases) of the matrix aligner, re-used across alignments.
pub const DEFAULT_ALIGNER_CAPACITY: usize = 200;

/// Sub-problems of the linear-space aligner with at least this many cells are split across threads
/// when the `parallel` feature is enabled.
pub const PARALLEL_MIN_CELLS: usize = 1 << 16;

/// The modes of alignment supported.  The first three are computed with a full (quadratic)
/// dynamic programming matrix that is also returned for inspection, while the last two use only
/// linear extra memory.
///
/// The default alignment mode is Global.
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignmentMode {
    /// Aligns the full `x` versus the full `y` (Needleman-Wunsch).
    #[default]
    Global,
    /// Aligns a sub-sequence of `x` versus a sub-sequence of `y` (Smith-Waterman).
    Local,
    /// Aligns `x` and `y` without penalizing leading or trailing overhangs (overlap alignment).
    SemiGlobal,
    /// Global alignment in linear space (Hirschberg).
    GlobalLinearSpace,
    /// Local alignment in linear space: find the local window, then align it with Hirschberg.
    LocalLinearSpace,
}

impl AlignmentMode {
    pub fn is_linear_space(&self) -> bool {
        matches!(self, Self::GlobalLinearSpace | Self::LocalLinearSpace)
    }
}

impl Display for AlignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
            Self::SemiGlobal => write!(f, "semi-global"),
            Self::GlobalLinearSpace => write!(f, "global-linear-space"),
            Self::LocalLinearSpace => write!(f, "local-linear-space"),
        }
    }
}

impl FromStr for AlignmentMode {
    type Err = AlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "global" | "nw" | "needleman-wunsch" => Ok(AlignmentMode::Global),
            "local" | "sw" | "smith-waterman" => Ok(AlignmentMode::Local),
            "semi-global" | "semi_global" | "semiglobal" | "overlap" => {
                Ok(AlignmentMode::SemiGlobal)
            }
            "global-linear-space" | "global_linear_space" | "global-ls" | "hirschberg" => {
                Ok(AlignmentMode::GlobalLinearSpace)
            }
            "local-linear-space" | "local_linear_space" | "local-ls" => {
                Ok(AlignmentMode::LocalLinearSpace)
            }
            _ => Err(AlignError::InvalidOptions(format!(
                "Invalid alignment mode: {s}"
            ))),
        }
    }
}

/// The boundary semantics of the quadratic matrix aligner.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum MatrixMode {
    Global,
    Local,
    SemiGlobal,
}

/// The boundary semantics of the linear-space aligners.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum LinearSpaceMode {
    Global,
    Local,
}

impl From<MatrixMode> for AlignmentMode {
    fn from(value: MatrixMode) -> Self {
        match value {
            MatrixMode::Global => AlignmentMode::Global,
            MatrixMode::Local => AlignmentMode::Local,
            MatrixMode::SemiGlobal => AlignmentMode::SemiGlobal,
        }
    }
}

impl From<LinearSpaceMode> for AlignmentMode {
    fn from(value: LinearSpaceMode) -> Self {
        match value {
            LinearSpaceMode::Global => AlignmentMode::GlobalLinearSpace,
            LinearSpaceMode::Local => AlignmentMode::LocalLinearSpace,
        }
    }
}
