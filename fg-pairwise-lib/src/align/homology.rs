//! The total probability of all alignments of two sequences (the "sum of homology").
//!
//! Each column of an alignment is an independent event: two equal symbols, two different symbols,
//! or a symbol against a gap.  Rather than keeping the single best alignment, the forward
//! recurrence sums the probabilities of every alignment reaching each cell.  Values are kept as
//! natural logarithms so that long sequences do not underflow.

use serde::Serialize;

use crate::align::error::AlignError;

/// The probability of each kind of alignment column.
#[derive(Copy, Clone, PartialEq, Debug, Serialize)]
pub struct HomologyProbabilities {
    pub match_probability: f64,
    pub mismatch_probability: f64,
    pub gap_probability: f64,
}

impl HomologyProbabilities {
    /// Returns an error unless every probability is in the range `(0, 1]`.
    pub fn new(
        match_probability: f64,
        mismatch_probability: f64,
        gap_probability: f64,
    ) -> Result<Self, AlignError> {
        for (name, value) in [
            ("match", match_probability),
            ("mismatch", mismatch_probability),
            ("gap", gap_probability),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(AlignError::InvalidProbability { name, value });
            }
        }
        Ok(Self {
            match_probability,
            mismatch_probability,
            gap_probability,
        })
    }
}

/// The log-space forward matrix, `(|x| + 1) x (|y| + 1)` values stored row-major.
#[derive(Default, Clone, PartialEq, Debug, Serialize)]
pub struct HomologyMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl HomologyMatrix {
    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.rows);
        debug_assert!(j < self.cols);
        self.values[i * self.cols + j]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The natural log of the total probability of all alignments of `x` and `y`.
    pub fn log_probability(&self) -> f64 {
        self.get(self.rows - 1, self.cols - 1)
    }
}

#[inline(always)]
fn log_sum_exp(values: [f64; 3]) -> f64 {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    max + values.iter().map(|v| (v - max).exp()).sum::<f64>().ln()
}

/// Fills the log-space forward matrix of `x` versus `y`.
pub fn sum_of_homology(
    x: &[u8],
    y: &[u8],
    probabilities: &HomologyProbabilities,
) -> HomologyMatrix {
    let (rows, cols) = (x.len() + 1, y.len() + 1);
    let ln_match = probabilities.match_probability.ln();
    let ln_mismatch = probabilities.mismatch_probability.ln();
    let ln_gap = probabilities.gap_probability.ln();

    let mut values = vec![0.0; rows * cols];
    for i in 1..rows {
        values[i * cols] = i as f64 * ln_gap;
    }
    for j in 1..cols {
        values[j] = j as f64 * ln_gap;
    }
    for i in 1..rows {
        for j in 1..cols {
            let ln_pair = if x[i - 1] == y[j - 1] {
                ln_match
            } else {
                ln_mismatch
            };
            values[i * cols + j] = log_sum_exp([
                values[(i - 1) * cols + j] + ln_gap,
                values[i * cols + j - 1] + ln_gap,
                values[(i - 1) * cols + j - 1] + ln_pair,
            ]);
        }
    }

    HomologyMatrix { rows, cols, values }
}
