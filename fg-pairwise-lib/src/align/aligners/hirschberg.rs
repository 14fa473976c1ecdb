use log::trace;

use crate::align::{
    aligners::{
        constants::AlignmentMode,
        linear_space::nw_score,
        matrix_aligner::MatrixAligner,
    },
    alignment::{AlignedPair, Alignment},
    scoring::{Score, Scoring},
};

cfg_if::cfg_if! {
    if #[cfg(feature = "parallel")] {
        /// Runs both halves of a split on the rayon pool when the sub-problem is large enough.
        fn join<A, B, RA, RB>(cells: usize, a: A, b: B) -> (RA, RB)
        where
            A: FnOnce() -> RA + Send,
            B: FnOnce() -> RB + Send,
            RA: Send,
            RB: Send,
        {
            if cells >= crate::align::aligners::constants::PARALLEL_MIN_CELLS {
                rayon::join(a, b)
            } else {
                (a(), b())
            }
        }
    } else {
        fn join<A, B, RA, RB>(_cells: usize, a: A, b: B) -> (RA, RB)
        where
            A: FnOnce() -> RA,
            B: FnOnce() -> RB,
        {
            (a(), b())
        }
    }
}

/// Global alignment in linear space (Hirschberg, 1975).
///
/// `x` is split at its midpoint `xmid`.  The last row of the global matrix of `x[..xmid]` versus
/// every prefix of `y`, and that of the reversed `x[xmid..]` versus every suffix of `y`, locate the
/// column `ymid` through which an optimal alignment crosses row `xmid`.  The two halves are then
/// aligned independently and concatenated.  Sub-problems where either sequence has at most one
/// symbol are aligned with the quadratic aligner, whose matrix is then linear in size.
///
/// The score of the result equals the quadratic global score, though the aligned strings may
/// differ when there are several optimal alignments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HirschbergAligner {
    pub scoring: Scoring,
}

impl HirschbergAligner {
    pub fn new(scoring: Scoring) -> Self {
        HirschbergAligner { scoring }
    }

    /// Aligns all of `x` against all of `y`.
    pub fn align(&self, x: &[u8], y: &[u8]) -> AlignedPair {
        if x.is_empty() {
            return AlignedPair::gapped_x(y);
        }
        if y.is_empty() {
            return AlignedPair::gapped_y(x);
        }
        if x.len() == 1 || y.len() == 1 {
            return MatrixAligner::with_capacity(x.len(), y.len(), self.scoring)
                .global(x, y)
                .aligned;
        }

        let xmid = x.len() / 2;
        let ymid = self.partition_y(x, y, xmid);
        trace!(
            "Splitting {}x{} at x: {} y: {}",
            x.len(),
            y.len(),
            xmid,
            ymid
        );

        let (x_left, x_right) = x.split_at(xmid);
        let (y_left, y_right) = y.split_at(ymid);
        let (mut left, right) = join(
            x.len() * y.len(),
            || self.align(x_left, y_left),
            || self.align(x_right, y_right),
        );
        left.append(right);
        left
    }

    /// The column of `y` at which an optimal alignment crosses the row `xmid`.  Ties keep the
    /// smallest column.
    pub fn partition_y(&self, x: &[u8], y: &[u8], xmid: usize) -> usize {
        let left = nw_score(&x[..xmid], y, &self.scoring);
        let x_rev: Vec<u8> = x[xmid..].iter().rev().copied().collect();
        let y_rev: Vec<u8> = y.iter().rev().copied().collect();
        let right = nw_score(&x_rev, &y_rev, &self.scoring);

        let mut best = Score::NegativeInfinity;
        let mut ymid = 0;
        for j in 0..left.len().min(right.len()) {
            let value = Score::Finite(left[j] + right[right.len() - 1 - j]);
            if value > best {
                best = value;
                ymid = j;
            }
        }
        ymid
    }

    /// Aligns all of `x` against all of `y`, returning the scored alignment.
    pub fn global(&self, x: &[u8], y: &[u8]) -> Alignment {
        let aligned = self.align(x, y);
        Alignment {
            score: aligned.score(&self.scoring),
            xstart: 0,
            xend: x.len(),
            ystart: 0,
            yend: y.len(),
            xlen: x.len(),
            ylen: y.len(),
            aligned,
            mode: AlignmentMode::GlobalLinearSpace,
        }
    }
}
