use log::trace;

use crate::align::{
    aligners::{
        constants::AlignmentMode, hirschberg::HirschbergAligner, linear_space::find_end_point,
    },
    alignment::{AlignedPair, Alignment},
    scoring::Scoring,
};

/// The sub-sequences `x[xstart..xend]` and `y[ystart..yend]` covered by the best local alignment.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct LocalWindow {
    pub xstart: usize,
    pub xend: usize,
    pub ystart: usize,
    pub yend: usize,
    pub score: i64,
}

/// Local alignment in linear space.
///
/// A forward scan finds where the best local alignment ends.  The same scan over the reversed
/// prefixes ending there finds where it starts.  The window between the two is then aligned
/// globally with [`HirschbergAligner`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LocalLinearSpaceAligner {
    hirschberg: HirschbergAligner,
}

impl LocalLinearSpaceAligner {
    pub fn new(scoring: Scoring) -> Self {
        LocalLinearSpaceAligner {
            hirschberg: HirschbergAligner::new(scoring),
        }
    }

    pub fn scoring(&self) -> &Scoring {
        &self.hirschberg.scoring
    }

    /// Locates the best local alignment of `x` versus `y`.
    pub fn window(&self, x: &[u8], y: &[u8]) -> LocalWindow {
        let end = find_end_point(x, y, self.scoring());
        let x_rev: Vec<u8> = x[..end.x].iter().rev().copied().collect();
        let y_rev: Vec<u8> = y[..end.y].iter().rev().copied().collect();
        let start = find_end_point(&x_rev, &y_rev, self.scoring());
        LocalWindow {
            xstart: end.x - start.x,
            xend: end.x,
            ystart: end.y - start.y,
            yend: end.y,
            score: end.score,
        }
    }

    /// Aligns the best-scoring sub-sequence of `x` against the best-scoring sub-sequence of `y`,
    /// returning the aligned strings along with the window they cover.
    pub fn align(&self, x: &[u8], y: &[u8]) -> (AlignedPair, LocalWindow) {
        let window = self.window(x, y);
        trace!("Local window: {:?}", window);
        let aligned = self.hirschberg.align(
            &x[window.xstart..window.xend],
            &y[window.ystart..window.yend],
        );
        (aligned, window)
    }

    /// As [`LocalLinearSpaceAligner::align`], returning the scored alignment.
    pub fn local(&self, x: &[u8], y: &[u8]) -> Alignment {
        let (aligned, window) = self.align(x, y);
        Alignment {
            score: aligned.score(self.scoring()),
            xstart: window.xstart,
            xend: window.xend,
            ystart: window.ystart,
            yend: window.yend,
            xlen: x.len(),
            ylen: y.len(),
            aligned,
            mode: AlignmentMode::LocalLinearSpace,
        }
    }
}

#[cfg(test)]
pub mod tests {
    use rstest::rstest;

    use super::{LocalLinearSpaceAligner, LocalWindow};
    use crate::align::{
        aligners::{constants::MatrixMode, matrix_aligner::MatrixAligner, tests::random_pairs},
        scoring::Scoring,
    };

    fn aligner(match_score: i32, mismatch_score: i32, gap_score: i32) -> LocalLinearSpaceAligner {
        LocalLinearSpaceAligner::new(Scoring::new(match_score, mismatch_score, gap_score).unwrap())
    }

    fn quadratic_local_max(x: &[u8], y: &[u8], scoring: Scoring) -> i64 {
        let mut quadratic = MatrixAligner::new(scoring);
        let matrix = quadratic.fill(x, y, MatrixMode::Local);
        let (i, j) = matrix.max_location();
        matrix.get(i, j).value
    }

    #[rstest]
    #[case("AGTACGCA", "TATGC", (2, -1, -2), "TACGC", "TATGC", 7)]
    #[case("GATTAAGCCAAGGTTC", "CTAATCCAGGT", (2, -2, -3), "TAAGCCAAGGT", "TAATCCA-GGT", 13)]
    #[case("ACACACTA", "AGCACACA", (2, -1, -1), "A-CACACTA", "AGCACAC-A", 12)]
    #[case("AAA", "CCC", (1, -1, -1), "", "", 0)]
    #[case("", "ACGT", (1, -1, -1), "", "", 0)]
    fn test_local(
        #[case] x: &str,
        #[case] y: &str,
        #[case] params: (i32, i32, i32),
        #[case] x_aln: &str,
        #[case] y_aln: &str,
        #[case] score: i64,
    ) {
        let (match_score, mismatch_score, gap_score) = params;
        let alignment =
            aligner(match_score, mismatch_score, gap_score).local(x.as_bytes(), y.as_bytes());
        alignment.validate();
        assert_eq!(alignment.aligned.x_str(), x_aln);
        assert_eq!(alignment.aligned.y_str(), y_aln);
        assert_eq!(alignment.score, score);
    }

    #[rstest]
    fn test_window() {
        let window = aligner(2, -2, -3).window(b"GATTAAGCCAAGGTTC", b"CTAATCCAGGT");
        assert_eq!(
            window,
            LocalWindow {
                xstart: 3,
                xend: 14,
                ystart: 1,
                yend: 11,
                score: 13
            }
        );
    }

    #[rstest]
    fn test_align_returns_window() {
        let local = aligner(2, -1, -2);
        let (aligned, window) = local.align(b"AGTACGCA", b"TATGC");
        assert_eq!(aligned.x_str(), "TACGC");
        assert_eq!(aligned.y_str(), "TATGC");
        assert_eq!((window.xstart, window.xend), (2, 7));
        assert_eq!((window.ystart, window.yend), (0, 5));
        assert_eq!(aligned.score(local.scoring()), window.score);
    }

    #[rstest]
    fn test_score_equals_quadratic_local(
        #[values("A", "AGTACGCA", "GATTAAGCCAAGGTTC", "ACACACTA", "TTTTGGGGCCCCAAAA")] x: &str,
        #[values("C", "TATGC", "CTAATCCAGGT", "AGCACACA", "GGGGTTTT")] y: &str,
        #[values((2, -1, -2), (1, -1, -1), (2, -2, -3))] params: (i32, i32, i32),
    ) {
        let (match_score, mismatch_score, gap_score) = params;
        let local = aligner(match_score, mismatch_score, gap_score);
        let alignment = local.local(x.as_bytes(), y.as_bytes());
        alignment.validate();
        assert_eq!(
            alignment.score,
            quadratic_local_max(x.as_bytes(), y.as_bytes(), *local.scoring())
        );
    }

    #[rstest]
    fn test_random_pairs_score_equals_quadratic_local(
        #[values((3, -7, -11), (15, 7, -4), (1, -1, 0), (5, -3, -2))] params: (i32, i32, i32),
    ) {
        let (match_score, mismatch_score, gap_score) = params;
        let local = aligner(match_score, mismatch_score, gap_score);
        for (x, y) in random_pairs(1975, 2000, 11, b"ACG") {
            let alignment = local.local(&x, &y);
            alignment.validate();
            assert_eq!(
                alignment.score,
                quadratic_local_max(&x, &y, *local.scoring()),
                "{x:?} {y:?}"
            );
        }
    }
}
