use std::{borrow::Cow, fmt};

use itertools::Itertools;
use serde::{Serialize, Serializer};

use crate::align::{
    aligners::constants::{AlignmentMode, GAP},
    scoring::{final_score, Scoring},
};

/// Alignment operations supported are match, substitution, insertion and deletion.  An insertion
/// is a symbol of `x` aligned against a gap, and a deletion is a symbol of `y` aligned against a
/// gap.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum AlignmentOperation {
    Match, // Consumes one x and one y symbol
    Subst, // Consumes one x and one y symbol
    Ins,   // Consumes a single x symbol
    Del,   // Consumes a single y symbol
}

impl AlignmentOperation {
    pub fn length_on_x(&self) -> usize {
        match *self {
            AlignmentOperation::Match | AlignmentOperation::Subst | AlignmentOperation::Ins => 1,
            AlignmentOperation::Del => 0,
        }
    }

    pub fn length_on_y(&self) -> usize {
        match *self {
            AlignmentOperation::Match | AlignmentOperation::Subst | AlignmentOperation::Del => 1,
            AlignmentOperation::Ins => 0,
        }
    }
}

impl fmt::Display for AlignmentOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentOperation::Match => write!(f, "="),
            AlignmentOperation::Subst => write!(f, "X"),
            AlignmentOperation::Ins => write!(f, "I"),
            AlignmentOperation::Del => write!(f, "D"),
        }
    }
}

fn as_text<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

/// Two equal-length strings, the gapped `x` and the gapped `y`, read column by column.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AlignedPair {
    #[serde(serialize_with = "as_text")]
    pub x: Vec<u8>,
    #[serde(serialize_with = "as_text")]
    pub y: Vec<u8>,
}

impl AlignedPair {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    /// Aligns every symbol of `y` against a gap.
    pub fn gapped_x(y: &[u8]) -> Self {
        Self {
            x: vec![GAP; y.len()],
            y: y.to_vec(),
        }
    }

    /// Aligns every symbol of `x` against a gap.
    pub fn gapped_y(x: &[u8]) -> Self {
        Self {
            x: x.to_vec(),
            y: vec![GAP; x.len()],
        }
    }

    #[inline(always)]
    pub fn push(&mut self, a: u8, b: u8) {
        self.x.push(a);
        self.y.push(b);
    }

    /// Appends the columns of `other` after the columns of this pair.
    pub fn append(&mut self, mut other: AlignedPair) {
        self.x.append(&mut other.x);
        self.y.append(&mut other.y);
    }

    pub fn reverse(&mut self) {
        self.x.reverse();
        self.y.reverse();
    }

    /// The number of alignment columns.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The aligned `x`, with gaps, as text.
    pub fn x_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.x)
    }

    /// The aligned `y`, with gaps, as text.
    pub fn y_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.y)
    }

    /// The number of non-gap symbols of `x` and of `y` consumed by the alignment.
    pub fn consumed(&self) -> (usize, usize) {
        let x = self.x.iter().filter(|&&a| a != GAP).count();
        let y = self.y.iter().filter(|&&b| b != GAP).count();
        (x, y)
    }

    /// The alignment operations, one per column.
    pub fn operations(&self) -> Vec<AlignmentOperation> {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&a, &b)| match (a == GAP, b == GAP) {
                (false, true) => AlignmentOperation::Ins,
                (true, false) => AlignmentOperation::Del,
                _ if a == b => AlignmentOperation::Match,
                _ => AlignmentOperation::Subst,
            })
            .collect()
    }

    /// Re-computes the score of this alignment under the given scoring.
    pub fn score(&self, scoring: &Scoring) -> i64 {
        final_score(&self.x, &self.y, scoring)
    }

    /// Checks that both strings have the same length and that no column is gap against gap.
    pub fn validate(&self) {
        assert_eq!(self.x.len(), self.y.len(), "aligned lengths differ");
        for (i, (&a, &b)) in self.x.iter().zip(self.y.iter()).enumerate() {
            assert!(!(a == GAP && b == GAP), "gap aligned to gap in column {i}");
        }
    }
}

impl fmt::Display for AlignedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.x_str(), self.y_str())
    }
}

/// We consider alignment between two sequences x and y.  An alignment consists of a score, the
/// start and end position of the alignment on sequence x and sequence y, the lengths of sequences
/// x and y, and the aligned strings.  For local alignment the start and end positions delimit the
/// aligned window; for every other mode they span the full sequences.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct Alignment {
    /// The alignment score, as re-computed from the aligned strings
    pub score: i64,

    /// Start position of alignment in x (0-based)
    pub xstart: usize,

    /// End position of alignment in x (0-based exclusive)
    pub xend: usize,

    /// Start position of alignment in y (0-based)
    pub ystart: usize,

    /// End position of alignment in y (0-based exclusive)
    pub yend: usize,

    /// Length of x (not the aligned length, the original length of x!)
    pub xlen: usize,

    /// Length of y (not the aligned length, the original length of y!)
    pub ylen: usize,

    /// The aligned strings
    pub aligned: AlignedPair,

    pub mode: AlignmentMode,
}

impl Alignment {
    // Validate that the spans agree with the mode and with the aligned strings.
    pub fn validate(&self) {
        match self.mode {
            AlignmentMode::Global
            | AlignmentMode::GlobalLinearSpace
            | AlignmentMode::SemiGlobal => {
                assert_eq!(self.xstart, 0);
                assert_eq!(self.xend, self.xlen);
                assert_eq!(self.ystart, 0);
                assert_eq!(self.yend, self.ylen);
            }
            AlignmentMode::Local | AlignmentMode::LocalLinearSpace => {
                assert!(self.xstart <= self.xend);
                assert!(self.xend <= self.xlen);
                assert!(self.ystart <= self.yend);
                assert!(self.yend <= self.ylen);
            }
        }
        self.aligned.validate();
        let (x_consumed, y_consumed) = self.aligned.consumed();
        assert_eq!(self.xend - self.xstart, x_consumed, "x span");
        assert_eq!(self.yend - self.ystart, y_consumed, "y span");
    }

    /// The number of alignment columns.
    pub fn length(&self) -> usize {
        self.aligned.len()
    }

    pub fn operations(&self) -> Vec<AlignmentOperation> {
        self.aligned.operations()
    }

    /// The run-length encoded operations, using `=`, `X`, `I` and `D`.
    pub fn cigar(&self) -> String {
        self.operations()
            .into_iter()
            .dedup_with_count()
            .map(|(count, op)| format!("{count}{op}"))
            .collect()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mode: {} x-span: {}-{}/{} y-span: {}-{}/{} score: {} cigar: {} aln-len: {}",
            self.mode,
            self.xstart,
            self.xend,
            self.xlen,
            self.ystart,
            self.yend,
            self.ylen,
            self.score,
            self.cigar(),
            self.length()
        )
    }
}
