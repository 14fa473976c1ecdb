use serde::Serialize;

/// The predecessor a cell's value was derived from.  `None` marks the origin, the borders of a
/// local alignment, and local cells whose value came from the zero floor.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    None,
    Up,
    Left,
    Diag,
}

/// One cell of a dynamic programming matrix.
#[derive(Default, Copy, Clone, Eq, PartialEq, Debug, Serialize)]
pub struct Cell {
    pub value: i64,
    pub direction: Direction,
    /// Set when the traceback walk visits this cell, used only when rendering the matrix.
    pub traced: bool,
}

impl Cell {
    #[inline(always)]
    pub fn new(value: i64, direction: Direction) -> Self {
        Cell {
            value,
            direction,
            traced: false,
        }
    }
}
