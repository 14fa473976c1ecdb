use serde::Serialize;

use crate::align::{aligners::constants::GAP, error::AlignError};

/// Details of scoring are encapsulated in this structure.
///
/// A [linear gap score model](https://en.wikipedia.org/wiki/Gap_penalty#Linear) is used so that
/// the score of a gap of length `k` is `gap_score * k`.  Two symbols are scored with
/// `match_score` when they are equal, otherwise with `mismatch_score`.
///
/// Scores are integers so that every aligner sums exactly the same values regardless of the order
/// of summation; accumulated scores are `i64`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
pub struct Scoring {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap_score: i32,
}

impl Scoring {
    /// Create a new Scoring instance with the given match, mismatch, and gap scores.
    ///
    /// # Arguments
    ///
    /// * `match_score` - the score for aligning two equal symbols
    /// * `mismatch_score` - the score for aligning two different symbols
    /// * `gap_score` - the score for aligning a symbol against a gap, zero or negative
    ///
    /// Returns an error if the gap score is positive: a local alignment could then grow without
    /// bound through gaps, which the zero-floored local matrix does not represent.
    pub fn new(match_score: i32, mismatch_score: i32, gap_score: i32) -> Result<Self, AlignError> {
        if gap_score > 0 {
            return Err(AlignError::PositiveGapScore { value: gap_score });
        }
        Ok(Self {
            match_score,
            mismatch_score,
            gap_score,
        })
    }

    /// The score for aligning `a` with `b`.
    #[inline(always)]
    pub fn score(&self, a: u8, b: u8) -> i64 {
        if a == b {
            i64::from(self.match_score)
        } else {
            i64::from(self.mismatch_score)
        }
    }

    /// The score for aligning a symbol with a gap.
    #[inline(always)]
    pub fn gap(&self) -> i64 {
        i64::from(self.gap_score)
    }

    /// The score of a gap of length `k`.
    #[inline(always)]
    pub fn gaps(&self, k: usize) -> i64 {
        k as i64 * self.gap()
    }
}

/// A score that may be "negative infinity".
///
/// Used wherever a value must be lower than any score an alignment can reach: the floor of
/// non-local alignment, and the initial value when searching for a maximum.  The variant order
/// matters, `NegativeInfinity` compares below every `Finite` score, `i64::MIN` included.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Score {
    NegativeInfinity,
    Finite(i64),
}

impl Score {
    /// The finite value, if any.
    pub fn value(self) -> Option<i64> {
        match self {
            Score::NegativeInfinity => None,
            Score::Finite(value) => Some(value),
        }
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Score::Finite(value)
    }
}

/// Re-computes the score of an alignment from its two aligned strings alone.
///
/// Each column adds the gap score if either side is a gap, otherwise the match or mismatch score.
pub fn final_score(x_aligned: &[u8], y_aligned: &[u8], scoring: &Scoring) -> i64 {
    debug_assert_eq!(x_aligned.len(), y_aligned.len());
    x_aligned
        .iter()
        .zip(y_aligned.iter())
        .map(|(&a, &b)| {
            if a == GAP || b == GAP {
                scoring.gap()
            } else {
                scoring.score(a, b)
            }
        })
        .sum()
}

#[cfg(test)]
pub mod tests {
    use rstest::rstest;

    use super::{final_score, Score, Scoring};
    use crate::align::error::AlignError;

    #[rstest]
    #[case(1)]
    #[case(i32::MAX)]
    fn test_new_rejects_positive_gap(#[case] gap_score: i32) {
        assert_eq!(
            Scoring::new(1, -1, gap_score),
            Err(AlignError::PositiveGapScore { value: gap_score })
        );
    }

    #[rstest]
    fn test_new_accepts_zero_gap() {
        assert_eq!(Scoring::new(1, -1, 0).unwrap().gaps(5), 0);
    }

    #[rstest]
    fn test_score() {
        let scoring = Scoring::new(2, -1, -2).unwrap();
        assert_eq!(scoring.score(b'A', b'A'), 2);
        assert_eq!(scoring.score(b'A', b'C'), -1);
        assert_eq!(scoring.gaps(3), -6);
    }

    #[rstest]
    #[case(b"AGTACGCA", b"--TATGC-", 2, -1, -2, 1)]
    #[case(b"TACGC", b"TATGC", 2, -1, -2, 7)]
    #[case(b"TAAGCCAAGGT", b"TAATCCA-GGT", 2, -2, -3, 13)]
    #[case(b"", b"", 2, -2, -3, 0)]
    #[case(b"---", b"ABC", 1, -1, -2, -6)]
    fn test_final_score(
        #[case] x: &[u8],
        #[case] y: &[u8],
        #[case] match_score: i32,
        #[case] mismatch_score: i32,
        #[case] gap_score: i32,
        #[case] expected: i64,
    ) {
        let scoring = Scoring::new(match_score, mismatch_score, gap_score).unwrap();
        assert_eq!(final_score(x, y, &scoring), expected);
    }

    #[rstest]
    fn test_final_score_does_not_overflow_i32() {
        let scoring = Scoring::new(i32::MAX, -1, -1).unwrap();
        let x = vec![b'A'; 4];
        assert_eq!(final_score(&x, &x, &scoring), 4 * i64::from(i32::MAX));
    }

    #[rstest]
    fn test_negative_infinity_is_below_every_score() {
        assert!(Score::NegativeInfinity < Score::Finite(i64::MIN));
        assert!(Score::Finite(0) < Score::Finite(1));
        assert_eq!(Score::NegativeInfinity.value(), None);
        assert_eq!(Score::from(3).value(), Some(3));
    }
}
