pub mod constants;
pub mod hirschberg;
pub mod linear_space;
pub mod local_linear_space;
pub mod matrix_aligner;

pub use constants::{AlignmentMode, LinearSpaceMode, MatrixMode};

use derive_builder::Builder;
use derive_getters::Getters;
use log::debug;
use serde::Serialize;

use crate::align::{
    aligners::{
        constants::GAP, hirschberg::HirschbergAligner, local_linear_space::LocalLinearSpaceAligner,
        matrix_aligner::MatrixAligner,
    },
    alignment::Alignment,
    error::AlignError,
    scoring::Scoring,
    traceback::Traceback,
};

/// The alignment options.  The three scores have no defaults and must always be given.
#[derive(Copy, Clone, Debug, Builder, Getters)]
#[builder(name = "Builder", build_fn(name = "build_options"))]
pub struct Options {
    #[builder(default)]
    mode: AlignmentMode,
    match_score: i32,
    mismatch_score: i32,
    gap_score: i32,
}

impl Options {
    pub fn scoring(&self) -> Result<Scoring, AlignError> {
        Scoring::new(self.match_score, self.mismatch_score, self.gap_score)
    }
}

impl Builder {
    pub fn build_aligners(&self) -> Result<Aligners, AlignError> {
        let opts = self.build_options()?;
        let scoring = opts.scoring()?;
        Ok(Aligners {
            matrix: MatrixAligner::new(scoring),
            hirschberg: HirschbergAligner::new(scoring),
            local_linear_space: LocalLinearSpaceAligner::new(scoring),
            opts,
        })
    }
}

/// The result of aligning two sequences: the alignment itself, and the full dynamic programming
/// matrix when a quadratic mode was used.
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
pub struct AlignmentOutcome {
    alignment: Alignment,
    matrix: Option<Traceback>,
}

impl AlignmentOutcome {
    pub fn into_parts(self) -> (Alignment, Option<Traceback>) {
        (self.alignment, self.matrix)
    }
}

/// The aligners for every mode, sharing one set of options.
pub struct Aligners {
    // Quadratic aligner for the global, local and semi-global modes
    matrix: MatrixAligner,
    // Linear-space global aligner
    hirschberg: HirschbergAligner,
    // Linear-space local aligner
    local_linear_space: LocalLinearSpaceAligner,
    opts: Options,
}

fn check_sequence(name: &'static str, seq: &[u8]) -> Result<(), AlignError> {
    match seq.iter().position(|&b| b == GAP) {
        Some(offset) => Err(AlignError::ReservedSymbol { name, offset }),
        None => Ok(()),
    }
}

impl Aligners {
    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Aligns with the quadratic aligner, returning the filled matrix alongside the alignment.
    pub fn compute(
        &mut self,
        x: &[u8],
        y: &[u8],
        mode: MatrixMode,
    ) -> Result<AlignmentOutcome, AlignError> {
        check_sequence("x", x)?;
        check_sequence("y", y)?;
        debug!("Aligning {}x{} in {} mode", x.len(), y.len(), AlignmentMode::from(mode));
        let alignment = self.matrix.align(x, y, mode);
        debug!("{alignment}");
        let matrix = std::mem::take(&mut self.matrix.traceback);
        Ok(AlignmentOutcome {
            alignment,
            matrix: Some(matrix),
        })
    }

    /// Aligns with one of the linear-space aligners; no matrix is returned.
    pub fn compute_linear_space(
        &self,
        x: &[u8],
        y: &[u8],
        mode: LinearSpaceMode,
    ) -> Result<AlignmentOutcome, AlignError> {
        check_sequence("x", x)?;
        check_sequence("y", y)?;
        debug!("Aligning {}x{} in {} mode", x.len(), y.len(), AlignmentMode::from(mode));
        let alignment = match mode {
            LinearSpaceMode::Global => self.hirschberg.global(x, y),
            LinearSpaceMode::Local => self.local_linear_space.local(x, y),
        };
        debug!("{alignment}");
        Ok(AlignmentOutcome {
            alignment,
            matrix: None,
        })
    }

    /// Aligns in the mode given by the options.
    pub fn align(&mut self, x: &[u8], y: &[u8]) -> Result<AlignmentOutcome, AlignError> {
        match self.opts.mode {
            AlignmentMode::Global => self.compute(x, y, MatrixMode::Global),
            AlignmentMode::Local => self.compute(x, y, MatrixMode::Local),
            AlignmentMode::SemiGlobal => self.compute(x, y, MatrixMode::SemiGlobal),
            AlignmentMode::GlobalLinearSpace => {
                self.compute_linear_space(x, y, LinearSpaceMode::Global)
            }
            AlignmentMode::LocalLinearSpace => {
                self.compute_linear_space(x, y, LinearSpaceMode::Local)
            }
        }
    }
}

/// Aligns `x` and `y` with the quadratic aligner in the given mode.
pub fn compute(
    x: &[u8],
    y: &[u8],
    match_score: i32,
    mismatch_score: i32,
    gap_score: i32,
    mode: MatrixMode,
) -> Result<AlignmentOutcome, AlignError> {
    Builder::default()
        .mode(mode.into())
        .match_score(match_score)
        .mismatch_score(mismatch_score)
        .gap_score(gap_score)
        .build_aligners()?
        .compute(x, y, mode)
}

/// Aligns `x` and `y` in linear space in the given mode.
pub fn compute_linear_space(
    x: &[u8],
    y: &[u8],
    match_score: i32,
    mismatch_score: i32,
    gap_score: i32,
    mode: LinearSpaceMode,
) -> Result<AlignmentOutcome, AlignError> {
    Builder::default()
        .mode(mode.into())
        .match_score(match_score)
        .mismatch_score(mismatch_score)
        .gap_score(gap_score)
        .build_aligners()?
        .compute_linear_space(x, y, mode)
}
