//! Rectangular (Moore-neighborhood) topology math.

use crate::cell::{Cell, Offset};

/// The 8-cell Moore neighborhood, independent of row.
#[rustfmt::skip]
pub(super) const NEIGHBOR_OFFSETS: &[Offset] = &[
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

pub(super) fn grid_dimensions(
    surface_width: u32,
    surface_height: u32,
    cell_size: u32,
) -> (usize, usize) {
    let cell_size = cell_size.max(1);
    (
        (surface_width / cell_size) as usize,
        (surface_height / cell_size) as usize,
    )
}

pub(super) fn cell_origin(cell: Cell, cell_size: u32) -> (i32, i32) {
    let size = cell_size as i32;
    (cell.col * size, cell.row * size)
}

pub(super) fn cell_center(cell: Cell, cell_size: u32) -> (f64, f64) {
    let (x, y) = cell_origin(cell, cell_size);
    let half = cell_size as f64 / 2.0;
    (x as f64 + half, y as f64 + half)
}

/// Exact inversion by floor division; negative pixel positions map to
/// negative (out-of-range) cells.
pub(super) fn pixel_to_cell(x: i32, y: i32, cell_size: u32) -> Cell {
    let size = cell_size.max(1) as i32;
    Cell::new(y.div_euclid(size), x.div_euclid(size))
}
