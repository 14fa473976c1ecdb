use serde::Serialize;

use crate::align::{
    aligners::constants::{MatrixMode, GAP},
    alignment::AlignedPair,
    scoring::Score,
};

pub mod cell;

pub use cell::{Cell, Direction};

/// The full dynamic programming matrix, `(|x| + 1) x (|y| + 1)` cells stored row-major.  Row `i`
/// corresponds to the first `i` symbols of `x` and column `j` to the first `j` symbols of `y`.
#[derive(Default, Clone, Eq, PartialEq, Debug, Serialize)]
pub struct Traceback {
    rows: usize,
    cols: usize,
    matrix: Vec<Cell>,
}

impl Traceback {
    pub fn with_capacity(m: usize, n: usize) -> Self {
        let rows = m + 1;
        let cols = n + 1;
        Traceback {
            rows,
            cols,
            matrix: Vec::with_capacity(rows * cols),
        }
    }

    /// Re-sizes the matrix for sequences of length `m` and `n`, resetting every cell.
    pub fn init(&mut self, m: usize, n: usize) {
        self.matrix.clear();
        self.resize(m, n, Cell::default());
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, j: usize, v: Cell) {
        debug_assert!(i < self.rows);
        debug_assert!(j < self.cols);
        self.matrix[i * self.cols + j] = v;
    }

    #[inline(always)]
    pub fn get(&self, i: usize, j: usize) -> &Cell {
        debug_assert!(i < self.rows);
        debug_assert!(j < self.cols);
        &self.matrix[i * self.cols + j]
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut Cell {
        debug_assert!(i < self.rows);
        debug_assert!(j < self.cols);
        &mut self.matrix[i * self.cols + j]
    }

    pub fn resize(&mut self, m: usize, n: usize, v: Cell) {
        self.rows = m + 1;
        self.cols = n + 1;
        self.matrix.resize(self.rows * self.cols, v);
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The cells of row `i`, left to right.
    pub fn row(&self, i: usize) -> &[Cell] {
        &self.matrix[i * self.cols..(i + 1) * self.cols]
    }

    /// The location of the maximum value anywhere in the matrix, borders included.  Ties keep the
    /// first cell in row-major order.
    pub fn max_location(&self) -> (usize, usize) {
        let mut best = Score::NegativeInfinity;
        let mut location = (0, 0);
        for i in 0..self.rows {
            for j in 0..self.cols {
                let value = Score::Finite(self.get(i, j).value);
                if value > best {
                    best = value;
                    location = (i, j);
                }
            }
        }
        location
    }

    /// The location of the maximum value on the last column (rows `1..`, top to bottom) and then
    /// the last row (columns `1..`, left to right).  Ties keep the first cell visited.  Returns
    /// the origin when there is no such cell.
    pub fn frame_max_location(&self) -> (usize, usize) {
        let (m, n) = (self.rows - 1, self.cols - 1);
        let frame = (1..=m).map(|i| (i, n)).chain((1..=n).map(|j| (m, j)));
        let mut best = Score::NegativeInfinity;
        let mut location = (0, 0);
        for (i, j) in frame {
            let value = Score::Finite(self.get(i, j).value);
            if value > best {
                best = value;
                location = (i, j);
            }
        }
        location
    }

    /// The cell a traceback walk starts from in the given mode.
    pub fn start_location(&self, mode: MatrixMode) -> (usize, usize) {
        match mode {
            MatrixMode::Global => (self.rows - 1, self.cols - 1),
            MatrixMode::Local => self.max_location(),
            MatrixMode::SemiGlobal => self.frame_max_location(),
        }
    }
}

/// The aligned strings produced by a traceback walk, along with the cell where the walk began
/// (`xend`, `yend`) and the cell where it stopped (`xstart`, `ystart`).
#[derive(Debug, Clone, PartialEq)]
pub struct TracedAlignment {
    pub aligned: AlignedPair,
    pub xstart: usize,
    pub ystart: usize,
    pub xend: usize,
    pub yend: usize,
}

/// Walks the directions of a filled matrix back from the mode's start cell, marking every visited
/// cell as traced.
///
/// For semi-global alignment the symbols after the start cell are appended to the aligned
/// strings, and the shorter of the two is then padded with trailing gaps, so that the output
/// always spans both full sequences.
pub fn traceback(x: &[u8], y: &[u8], matrix: &mut Traceback, mode: MatrixMode) -> TracedAlignment {
    debug_assert_eq!(matrix.rows(), x.len() + 1);
    debug_assert_eq!(matrix.cols(), y.len() + 1);

    let (xend, yend) = matrix.start_location(mode);
    let mut aligned = AlignedPair::with_capacity(x.len() + y.len());
    let (mut i, mut j) = (xend, yend);
    loop {
        let cell = matrix.get_mut(i, j);
        cell.traced = true;
        match cell.direction {
            Direction::None => break,
            Direction::Up => {
                aligned.push(x[i - 1], GAP);
                i -= 1;
            }
            Direction::Left => {
                aligned.push(GAP, y[j - 1]);
                j -= 1;
            }
            Direction::Diag => {
                aligned.push(x[i - 1], y[j - 1]);
                i -= 1;
                j -= 1;
            }
        }
    }
    aligned.reverse();
    debug_assert!(mode == MatrixMode::Local || (i, j) == (0, 0));

    if mode == MatrixMode::SemiGlobal {
        aligned.x.extend_from_slice(&x[xend..]);
        aligned.y.extend_from_slice(&y[yend..]);
        let length = aligned.x.len().max(aligned.y.len());
        aligned.x.resize(length, GAP);
        aligned.y.resize(length, GAP);
    }

    TracedAlignment {
        aligned,
        xstart: i,
        ystart: j,
        xend,
        yend,
    }
}
