//! Hexagonal topology math.
//!
//! Hexagons are laid out in horizontal rows, with odd rows shifted half a
//! cell to the right, brick-style:
//!
//! ```text
//!   / \ / \ / \
//!  | 0,0| 0,1| 0,2|
//!   \ / \ / \ / \
//!    | 1,0| 1,1| 1,2|
//!   / \ / \ / \ /
//!  | 2,0| 2,1| 2,2|
//!   \ / \ / \ /
//! ```
//!
//! A hexagon `cell_size` pixels wide has a vertical side of `side_length`
//! pixels and sloped caps `inner_height` pixels tall, so successive rows are
//! `side_length + inner_height` pixels apart.

use noisy_float::prelude::*;

use crate::cell::{Cell, Offset};

/// Neighbor offsets for cells in even rows.
#[rustfmt::skip]
const EVEN_ROW_OFFSETS: &[Offset] = &[
    (-1, -1), (-1, 0),
    ( 0, -1), ( 0, 1),
    ( 1, -1), ( 1, 0),
];

/// Neighbor offsets for cells in odd rows (shifted right, so their up/down
/// neighbors sit at higher columns).
#[rustfmt::skip]
const ODD_ROW_OFFSETS: &[Offset] = &[
    (-1, 0), (-1, 1),
    ( 0, -1), ( 0, 1),
    ( 1, 0), ( 1, 1),
];

pub(super) fn neighbor_offsets(row: i32) -> &'static [Offset] {
    if row.rem_euclid(2) == 0 {
        EVEN_ROW_OFFSETS
    } else {
        ODD_ROW_OFFSETS
    }
}

/// Length of a hexagon's vertical side, in pixels.
fn side_length(cell_size: u32) -> i32 {
    (cell_size as f64 / 3_f64.sqrt()).floor() as i32
}

/// Vertical extent of a hexagon's sloped top (or bottom) cap, in pixels.
fn inner_height(cell_size: u32) -> i32 {
    (cell_size as f64 * 3_f64.sqrt() / 6.0).floor() as i32
}

/// Vertical distance between successive rows, in pixels. Never less than
/// one: both terms floor to zero for one-pixel cells.
fn row_pitch(cell_size: u32) -> i32 {
    (side_length(cell_size) + inner_height(cell_size)).max(1)
}

/// One margin row is reserved so partially drawn hexagons at the bottom edge
/// fall outside the grid.
pub(super) fn grid_dimensions(
    surface_width: u32,
    surface_height: u32,
    cell_size: u32,
) -> (usize, usize) {
    let cell_size = cell_size.max(1);
    let width = (surface_width / cell_size) as usize;
    let height = (surface_height / row_pitch(cell_size) as u32).saturating_sub(1) as usize;
    (width, height)
}

pub(super) fn cell_origin(cell: Cell, cell_size: u32) -> (i32, i32) {
    let size = cell_size as i32;
    let x = cell.col * size + cell.row.rem_euclid(2) * size / 2;
    let y = cell.row * row_pitch(cell_size);
    (x, y)
}

pub(super) fn cell_center(cell: Cell, cell_size: u32) -> (f64, f64) {
    let (x, y) = cell_origin(cell, cell_size);
    (
        x as f64 + cell_size as f64 / 2.0,
        y as f64 + inner_height(cell_size) as f64 + side_length(cell_size) as f64 / 2.0,
    )
}

/// Maps a pixel position to a hexagonal cell.
///
/// Floor division gives an approximate cell, but near the sloped caps the
/// true cell can be one of its neighbors. The approximate cell and its 6
/// neighbors are ranked by Euclidean distance from the click point to their
/// geometric centers; the closest in-bounds candidate wins. The comparison is
/// strict, so the first candidate at the minimum distance is chosen
/// deterministically. If every candidate is out of bounds, the approximate
/// cell is returned as-is and the caller's bounds check rejects it.
pub(super) fn pixel_to_cell(
    x: i32,
    y: i32,
    cell_size: u32,
    grid_width: usize,
    grid_height: usize,
) -> Cell {
    let cell_size = cell_size.max(1);
    let size = cell_size as i32;
    let row = y.div_euclid(row_pitch(cell_size));
    let col = (x - row.rem_euclid(2) * size / 2).div_euclid(size);
    let approx = Cell::new(row, col);

    let mut best: Option<(R64, Cell)> = None;
    for &offset in neighbor_offsets(row).iter().chain(std::iter::once(&(0, 0))) {
        let candidate = approx + offset;
        if !(0..grid_height as i32).contains(&candidate.row)
            || !(0..grid_width as i32).contains(&candidate.col)
        {
            continue;
        }
        let (cx, cy) = cell_center(candidate, cell_size);
        let distance = r64((cx - x as f64).powi(2) + (cy - y as f64).powi(2));
        if best.map_or(true, |(shortest, _)| distance < shortest) {
            best = Some((distance, candidate));
        }
    }
    best.map_or(approx, |(_, cell)| cell)
}
