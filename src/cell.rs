//! Cell coordinates and offsets.

use std::fmt;
use std::ops::Add;

/// A `(Δrow, Δcol)` offset between cells.
pub type Offset = (i32, i32);

/// A `(row, col)` position on a grid.
///
/// Coordinates are signed so that neighbor-offset arithmetic and stray
/// pointer positions (e.g. a click left of the surface) are representable;
/// anything outside a grid's bounds reads as dead and writes as a no-op.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Cell {
    /// Row index, counting down from the top of the grid.
    pub row: i32,
    /// Column index, counting right from the left edge of the grid.
    pub col: i32,
}

impl Cell {
    /// Creates a cell coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Add<Offset> for Cell {
    type Output = Self;

    #[inline]
    fn add(self, (d_row, d_col): Offset) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
