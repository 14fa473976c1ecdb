use crate::align::{
    aligners::constants::{MatrixMode, DEFAULT_ALIGNER_CAPACITY},
    alignment::Alignment,
    scoring::{Score, Scoring},
    traceback::{traceback, Cell, Direction, Traceback},
};

/// A quadratic dynamic programming aligner with a linear gap score.
///
/// `S(i,j)` is the best score for the prefixes `x[0..i]` and `y[0..j]`, derived from one of three
/// predecessors:
/// ```ignore
///   up:   S(i-1,j)   + gap         x_i aligned with a gap
///   left: S(i,j-1)   + gap         y_j aligned with a gap
///   diag: S(i-1,j-1) + s(x_i, y_j) x_i aligned with y_j
/// ```
/// Local alignment additionally floors every cell at zero.  The full matrix is kept so that the
/// traceback can be walked, and so that callers may inspect it afterwards.
///
/// The aligner may be re-used across alignments; the matrix is re-sized for every call.
pub struct MatrixAligner {
    pub traceback: Traceback,
    pub scoring: Scoring,
}

impl MatrixAligner {
    pub fn new(scoring: Scoring) -> Self {
        MatrixAligner::with_capacity(DEFAULT_ALIGNER_CAPACITY, DEFAULT_ALIGNER_CAPACITY, scoring)
    }

    pub fn with_capacity(m: usize, n: usize, scoring: Scoring) -> Self {
        MatrixAligner {
            traceback: Traceback::with_capacity(m, n),
            scoring,
        }
    }

    /// Resets the matrix and sets the first row and column for the given mode.
    pub fn init_matrices(&mut self, m: usize, n: usize, mode: MatrixMode) {
        self.traceback.init(m, n);
        match mode {
            MatrixMode::Global => {
                for i in 1..=m {
                    let value = self.scoring.gaps(i);
                    self.traceback.set(i, 0, Cell::new(value, Direction::Up));
                }
                for j in 1..=n {
                    let value = self.scoring.gaps(j);
                    self.traceback.set(0, j, Cell::new(value, Direction::Left));
                }
            }
            // Borders are zero and terminate the traceback.
            MatrixMode::Local => (),
            // Leading overhangs are free but are still walked through.
            MatrixMode::SemiGlobal => {
                for i in 1..=m {
                    self.traceback.set(i, 0, Cell::new(0, Direction::Up));
                }
                for j in 1..=n {
                    self.traceback.set(0, j, Cell::new(0, Direction::Left));
                }
            }
        }
    }

    /// Fills the matrix for `x` (rows) versus `y` (columns).
    pub fn fill(&mut self, x: &[u8], y: &[u8], mode: MatrixMode) -> &Traceback {
        let (m, n) = (x.len(), y.len());
        self.init_matrices(m, n, mode);

        let gap = self.scoring.gap();
        let floor = match mode {
            MatrixMode::Local => Score::Finite(0),
            MatrixMode::Global | MatrixMode::SemiGlobal => Score::NegativeInfinity,
        };

        for i in 1..=m {
            let a = x[i - 1];
            for j in 1..=n {
                let up = self.traceback.get(i - 1, j).value + gap;
                let left = self.traceback.get(i, j - 1).value + gap;
                let diag = self.traceback.get(i - 1, j - 1).value + self.scoring.score(a, y[j - 1]);
                self.traceback.set(i, j, best_cell(up, left, diag, floor));
            }
        }

        &self.traceback
    }

    /// Fills the matrix and walks the traceback, returning the alignment.
    pub fn align(&mut self, x: &[u8], y: &[u8], mode: MatrixMode) -> Alignment {
        self.fill(x, y, mode);
        let traced = traceback(x, y, &mut self.traceback, mode);
        let (xstart, xend, ystart, yend) = match mode {
            MatrixMode::Local => (traced.xstart, traced.xend, traced.ystart, traced.yend),
            MatrixMode::Global | MatrixMode::SemiGlobal => (0, x.len(), 0, y.len()),
        };
        Alignment {
            score: traced.aligned.score(&self.scoring),
            xstart,
            xend,
            ystart,
            yend,
            xlen: x.len(),
            ylen: y.len(),
            aligned: traced.aligned,
            mode: mode.into(),
        }
    }

    pub fn global(&mut self, x: &[u8], y: &[u8]) -> Alignment {
        self.align(x, y, MatrixMode::Global)
    }

    pub fn local(&mut self, x: &[u8], y: &[u8]) -> Alignment {
        self.align(x, y, MatrixMode::Local)
    }

    pub fn semiglobal(&mut self, x: &[u8], y: &[u8]) -> Alignment {
        self.align(x, y, MatrixMode::SemiGlobal)
    }

    /// The matrix of the last alignment.
    pub fn traceback(&self) -> &Traceback {
        &self.traceback
    }

    pub fn into_traceback(self) -> Traceback {
        self.traceback
    }
}

/// Picks the best of the three predecessors, preferring up, then left, then diagonal on ties.  A
/// finite floor that beats every candidate yields a cell without a direction.
#[inline(always)]
fn best_cell(up: i64, left: i64, diag: i64, floor: Score) -> Cell {
    let best = up.max(left).max(diag);
    match floor {
        Score::Finite(floor) if floor > best => Cell::new(floor, Direction::None),
        _ => {
            let direction = if up == best {
                Direction::Up
            } else if left == best {
                Direction::Left
            } else {
                Direction::Diag
            };
            Cell::new(best, direction)
        }
    }
}

#[cfg(test)]
pub mod tests {
    use bio::alignment::pairwise::Aligner as BioAligner;
    use rstest::rstest;

    use super::{best_cell, MatrixAligner};
    use crate::align::{
        aligners::constants::MatrixMode,
        scoring::{final_score, Score, Scoring},
        traceback::Direction,
    };

    fn aligner(match_score: i32, mismatch_score: i32, gap_score: i32) -> MatrixAligner {
        MatrixAligner::new(Scoring::new(match_score, mismatch_score, gap_score).unwrap())
    }

    #[rstest]
    #[case(1, 1, 1, Score::NegativeInfinity, Direction::Up)]
    #[case(0, 1, 1, Score::NegativeInfinity, Direction::Left)]
    #[case(0, 0, 1, Score::NegativeInfinity, Direction::Diag)]
    #[case(-1, -2, -3, Score::Finite(0), Direction::None)]
    #[case(-1, 0, -3, Score::Finite(0), Direction::Left)]
    fn test_best_cell_tie_break(
        #[case] up: i64,
        #[case] left: i64,
        #[case] diag: i64,
        #[case] floor: Score,
        #[case] direction: Direction,
    ) {
        assert_eq!(best_cell(up, left, diag, floor).direction, direction);
    }

    #[rstest]
    fn test_global_borders() {
        let mut aligner = aligner(2, -1, -2);
        let matrix = aligner.fill(b"AC", b"GTA", MatrixMode::Global);
        assert_eq!(matrix.rows(), 3);
        assert_eq!(matrix.cols(), 4);
        assert_eq!(matrix.get(0, 0).direction, Direction::None);
        assert_eq!(matrix.get(2, 0).value, -4);
        assert_eq!(matrix.get(2, 0).direction, Direction::Up);
        assert_eq!(matrix.get(0, 3).value, -6);
        assert_eq!(matrix.get(0, 3).direction, Direction::Left);
    }

    #[rstest]
    fn test_local_and_semiglobal_borders() {
        let mut aligner = aligner(2, -1, -2);
        let matrix = aligner.fill(b"AC", b"GTA", MatrixMode::Local);
        assert!(matrix.row(0).iter().all(|c| c.value == 0 && c.direction == Direction::None));
        let matrix = aligner.fill(b"AC", b"GTA", MatrixMode::SemiGlobal);
        assert_eq!(matrix.get(2, 0).value, 0);
        assert_eq!(matrix.get(2, 0).direction, Direction::Up);
        assert_eq!(matrix.get(0, 1).direction, Direction::Left);
    }

    #[rstest]
    #[case(MatrixMode::Global, "AGTACGCA", "TATGC", (2, -1, -2), "AGTACGCA", "--TATGC-", 1)]
    #[case(MatrixMode::Local, "AGTACGCA", "TATGC", (2, -1, -2), "TACGC", "TATGC", 7)]
    #[case(MatrixMode::SemiGlobal, "AGTACGCA", "TATGC", (2, -1, -2), "AGTACGCA", "--TATGC-", 1)]
    #[case(MatrixMode::Global, "GATTACA", "GCATGCU", (1, -1, -1), "G-ATTACA", "GCATG-CU", 0)]
    #[case(MatrixMode::Local, "GATTACA", "GCATGCU", (1, -1, -1), "G-AT", "GCAT", 2)]
    #[case(MatrixMode::Local, "ACACACTA", "AGCACACA", (2, -1, -1), "A-CACACTA", "AGCACAC-A", 12)]
    #[case(MatrixMode::SemiGlobal, "ACGTTT", "TTTGCA", (1, -1, -1), "ACGTTT---", "---TTTGCA", -3)]
    #[case(MatrixMode::SemiGlobal, "AAAGGG", "TTAAAG", (1, -1, -2), "--AAAGGG", "TTAAAG--", -4)]
    #[case(MatrixMode::SemiGlobal, "ABC", "", (1, -1, -1), "ABC", "---", -3)]
    #[case(MatrixMode::SemiGlobal, "", "ABC", (1, -1, -1), "---", "ABC", -3)]
    #[case(MatrixMode::SemiGlobal, "", "", (1, -1, -1), "", "", 0)]
    #[case(MatrixMode::Global, "", "ABC", (1, -1, -1), "---", "ABC", -3)]
    #[case(MatrixMode::Local, "", "ABC", (1, -1, -1), "", "", 0)]
    #[case(MatrixMode::Local, "AAA", "CCC", (1, -1, -1), "", "", 0)]
    fn test_align(
        #[case] mode: MatrixMode,
        #[case] x: &str,
        #[case] y: &str,
        #[case] params: (i32, i32, i32),
        #[case] x_aln: &str,
        #[case] y_aln: &str,
        #[case] score: i64,
    ) {
        let (match_score, mismatch_score, gap_score) = params;
        let mut aligner = aligner(match_score, mismatch_score, gap_score);
        let alignment = aligner.align(x.as_bytes(), y.as_bytes(), mode);
        alignment.validate();
        assert_eq!(alignment.aligned.x_str(), x_aln);
        assert_eq!(alignment.aligned.y_str(), y_aln);
        assert_eq!(alignment.score, score);
    }

    #[rstest]
    fn test_local_score_is_matrix_maximum() {
        let mut aligner = aligner(2, -2, -3);
        let alignment = aligner.local(b"GATTAAGCCAAGGTTC", b"CTAATCCAGGT");
        let (i, j) = aligner.traceback().max_location();
        assert_eq!(alignment.score, aligner.traceback().get(i, j).value);
        assert_eq!(alignment.score, 13);
        assert_eq!((alignment.xstart, alignment.xend), (3, 14));
        assert_eq!((alignment.ystart, alignment.yend), (1, 11));
    }

    #[rstest]
    fn test_traced_cells_form_a_path() {
        let mut aligner = aligner(2, -1, -2);
        let alignment = aligner.global(b"AGTACGCA", b"TATGC");
        let traced = (0..aligner.traceback().rows())
            .map(|i| aligner.traceback().row(i).iter().filter(|c| c.traced).count())
            .sum::<usize>();
        assert_eq!(traced, alignment.length() + 1);
    }

    #[rstest]
    fn test_scores_agree_with_bio(
        #[values("A", "ACGT", "GATTACA", "AGTACGCA", "TTTTTGGGCC", "GATTAAGCCAAGGTTC")] x: &str,
        #[values("T", "TATGC", "GCATGCU", "ACGTACGTAA", "CTAATCCAGGT")] y: &str,
        #[values((2, -1, -2), (1, -1, -1), (2, -2, -3), (1, 0, -1))] params: (i32, i32, i32),
    ) {
        let (match_score, mismatch_score, gap_score) = params;
        let mut bio = BioAligner::new(0, gap_score, move |a: u8, b: u8| {
            if a == b {
                match_score
            } else {
                mismatch_score
            }
        });
        let mut ours = aligner(match_score, mismatch_score, gap_score);
        let (x, y) = (x.as_bytes(), y.as_bytes());

        let global = ours.global(x, y);
        assert_eq!(global.score, i64::from(bio.global(x, y).score));
        let local = ours.local(x, y);
        assert_eq!(local.score, i64::from(bio.local(x, y).score));
    }

    #[rstest]
    fn test_reported_score_matches_aligned_strings(
        #[values(MatrixMode::Global, MatrixMode::Local, MatrixMode::SemiGlobal)] mode: MatrixMode,
        #[values("", "G", "GATTACA", "AGTACGCA", "CCCCAAAA")] x: &str,
        #[values("", "T", "TATGC", "AAAACCCC")] y: &str,
    ) {
        let mut aligner = aligner(2, -1, -2);
        let alignment = aligner.align(x.as_bytes(), y.as_bytes(), mode);
        alignment.validate();
        let scoring = aligner.scoring;
        assert_eq!(
            alignment.score,
            final_score(&alignment.aligned.x, &alignment.aligned.y, &scoring)
        );
        if mode != MatrixMode::Local {
            let stripped = |s: &[u8]| s.iter().filter(|&&b| b != b'-').copied().collect::<Vec<_>>();
            assert_eq!(stripped(&alignment.aligned.x), x.as_bytes());
            assert_eq!(stripped(&alignment.aligned.y), y.as_bytes());
        }
    }
}
