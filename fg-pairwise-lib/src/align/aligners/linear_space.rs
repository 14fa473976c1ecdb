use crate::align::scoring::Scoring;

/// Splits the two rolling rows into the previous (read-only) and current (writable) row for row
/// `i` of the matrix.
#[inline(always)]
fn rolling(rows: &mut [Vec<i64>; 2], i: usize) -> (&[i64], &mut [i64]) {
    let [even, odd] = rows;
    if i % 2 == 0 {
        (&odd[..], &mut even[..])
    } else {
        (&even[..], &mut odd[..])
    }
}

/// Returns the last row of the global (Needleman-Wunsch) matrix of `x` versus `y`: element `j` is
/// the best global score of all of `x` against the prefix `y[0..j]`.  The output always has
/// `|y| + 1` elements.
///
/// Only two rows of `|y| + 1` scores are kept, the row for `x[0..i]` being written over the row
/// for `x[0..i-2]`.
pub fn nw_score(x: &[u8], y: &[u8], scoring: &Scoring) -> Vec<i64> {
    let n = y.len();
    let gap = scoring.gap();
    let mut rows: [Vec<i64>; 2] = [(0..=n).map(|j| scoring.gaps(j)).collect(), vec![0; n + 1]];

    for (i, &a) in x.iter().enumerate().map(|(i, a)| (i + 1, a)) {
        let (prev, curr) = rolling(&mut rows, i);
        curr[0] = prev[0] + gap;
        for j in 1..=n {
            let up = prev[j] + gap;
            let left = curr[j - 1] + gap;
            let diag = prev[j - 1] + scoring.score(a, y[j - 1]);
            curr[j] = up.max(left).max(diag);
        }
    }

    let [even, odd] = rows;
    if x.len() % 2 == 0 {
        even
    } else {
        odd
    }
}

/// The cell of maximum value in a local alignment matrix.  `x` and `y` are the number of symbols
/// of each sequence consumed up to and including the cell, so the local alignment ends just
/// before `x[x]` and `y[y]`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct EndPoint {
    pub x: usize,
    pub y: usize,
    pub score: i64,
}

/// Finds the end of the best local alignment of `x` versus `y` without building the matrix.
///
/// Rows of `x` are scanned in order, and within each row the columns of `y`; a cell replaces the
/// best one only if strictly greater.  The origin, with score zero, is the initial best, so the
/// origin is returned when no pair of symbols scores above zero.
pub fn find_end_point(x: &[u8], y: &[u8], scoring: &Scoring) -> EndPoint {
    let n = y.len();
    let gap = scoring.gap();
    let mut rows: [Vec<i64>; 2] = [vec![0; n + 1], vec![0; n + 1]];
    let mut best = EndPoint::default();

    for (i, &a) in x.iter().enumerate().map(|(i, a)| (i + 1, a)) {
        let (prev, curr) = rolling(&mut rows, i);
        curr[0] = 0;
        for j in 1..=n {
            let up = prev[j] + gap;
            let left = curr[j - 1] + gap;
            let diag = prev[j - 1] + scoring.score(a, y[j - 1]);
            let value = up.max(left).max(diag).max(0);
            curr[j] = value;
            if value > best.score {
                best = EndPoint {
                    x: i,
                    y: j,
                    score: value,
                };
            }
        }
    }

    best
}
