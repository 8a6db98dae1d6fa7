//! Finite 2D matrix of cell states.

use itertools::iproduct;

use crate::cell::Cell;

/// `width × height` matrix of boolean cell states, stored row-major.
///
/// The minimum coordinate is always `(0, 0)`. Reads outside the bounds return
/// dead rather than failing, and writes outside the bounds are ignored; the
/// engine's neighbor counting and toggle paths both rely on this.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Box<[bool]>,
}

impl Grid {
    /// Creates an all-dead grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height].into_boxed_slice(),
        }
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` if the coordinate is within the grid's bounds.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.flatten_idx(cell).is_some()
    }

    /// Returns the state of a cell, treating out-of-range coordinates as
    /// dead.
    #[inline]
    pub fn get(&self, cell: Cell) -> bool {
        match self.flatten_idx(cell) {
            Some(idx) => self.cells[idx],
            None => false,
        }
    }

    /// Sets the state of a cell, ignoring out-of-range coordinates.
    #[inline]
    pub fn set(&mut self, cell: Cell, alive: bool) {
        if let Some(idx) = self.flatten_idx(cell) {
            self.cells[idx] = alive;
        }
    }

    /// Counts the live cells in the grid.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Returns an iterator over every cell in the grid, enumerated by
    /// position in row-major order.
    pub fn iter_cells(&self) -> impl '_ + Iterator<Item = (Cell, bool)> {
        iproduct!(0..self.height as i32, 0..self.width as i32)
            .map(move |(row, col)| {
                let cell = Cell::new(row, col);
                (cell, self.get(cell))
            })
    }

    /// Returns the index into `cells` for an in-bounds coordinate.
    fn flatten_idx(&self, cell: Cell) -> Option<usize> {
        if (0..self.height as i32).contains(&cell.row)
            && (0..self.width as i32).contains(&cell.col)
        {
            Some(cell.row as usize * self.width + cell.col as usize)
        } else {
            None
        }
    }
}
