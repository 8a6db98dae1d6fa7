//! Grid topologies: neighbor adjacency and cell geometry.
//!
//! A [`Topology`] bundles everything that varies between grid shapes — the
//! neighbor offset table, grid sizing against a pixel surface, cell geometry,
//! and the inverse mapping from a pixel position back to a cell. The engine
//! itself is topology-agnostic.

mod hex;
mod rect;

use std::fmt;

use crate::cell::{Cell, Offset};
use crate::rule::{Rule, HEX_LIFE, LIFE};

/// The neighbor-adjacency and coordinate-geometry rules for a grid shape.
///
/// This is a tagged variant rather than a trait object so that adding a
/// topology is a compile-time exhaustiveness obligation for every operation
/// below.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    /// Square cells with the 8-cell Moore neighborhood.
    Rectangular,
    /// Hexagonal cells in brick-offset rows, 6 neighbors each.
    Hexagonal,
}

impl Default for Topology {
    fn default() -> Self {
        Self::Rectangular
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangular => write!(f, "rectangular"),
            Self::Hexagonal => write!(f, "hexagonal"),
        }
    }
}

impl Topology {
    /// All topologies, in cycling order.
    pub const ALL: [Topology; 2] = [Topology::Rectangular, Topology::Hexagonal];

    /// Returns the next topology in cycling order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Rectangular => Self::Hexagonal,
            Self::Hexagonal => Self::Rectangular,
        }
    }

    /// Returns the neighbor offsets for a cell in the given row.
    ///
    /// Rectangular grids use the same 8 offsets everywhere; hexagonal grids
    /// alternate between two 6-entry tables by row parity.
    pub fn neighbor_offsets(self, row: i32) -> &'static [Offset] {
        match self {
            Self::Rectangular => rect::NEIGHBOR_OFFSETS,
            Self::Hexagonal => hex::neighbor_offsets(row),
        }
    }

    /// Returns the maximum number of live neighbors a cell can have.
    pub fn max_neighbors(self) -> u8 {
        self.neighbor_offsets(0).len() as u8
    }

    /// Returns the conventional Life rule for this topology.
    pub fn default_rule(self) -> Rule {
        match self {
            Self::Rectangular => LIFE,
            Self::Hexagonal => HEX_LIFE,
        }
    }

    /// Computes `(grid_width, grid_height)` in cells for a pixel surface.
    ///
    /// Hexagonal grids reserve a margin row so that partially drawn hexagons
    /// at the bottom edge are excluded. A zero cell size is treated as one
    /// pixel; the engine rejects it before it gets here.
    pub fn grid_dimensions(
        self,
        surface_width: u32,
        surface_height: u32,
        cell_size: u32,
    ) -> (usize, usize) {
        match self {
            Self::Rectangular => rect::grid_dimensions(surface_width, surface_height, cell_size),
            Self::Hexagonal => hex::grid_dimensions(surface_width, surface_height, cell_size),
        }
    }

    /// Returns the top-left pixel anchor of a cell's bounding region.
    pub fn cell_origin(self, cell: Cell, cell_size: u32) -> (i32, i32) {
        match self {
            Self::Rectangular => rect::cell_origin(cell, cell_size),
            Self::Hexagonal => hex::cell_origin(cell, cell_size),
        }
    }

    /// Returns the geometric center of a cell, in pixels.
    pub fn cell_center(self, cell: Cell, cell_size: u32) -> (f64, f64) {
        match self {
            Self::Rectangular => rect::cell_center(cell, cell_size),
            Self::Hexagonal => hex::cell_center(cell, cell_size),
        }
    }

    /// Maps a pixel position to the cell that contains it.
    ///
    /// Rectangular grids invert exactly with floor division. Hexagonal cell
    /// boundaries are diagonal, so the hexagonal case refines an approximate
    /// answer by distance to nearby cell centers; `grid_width` and
    /// `grid_height` bound the candidates it may consider. Positions outside
    /// the surface map to out-of-range cells, which every mutation path
    /// ignores.
    pub fn pixel_to_cell(
        self,
        x: i32,
        y: i32,
        cell_size: u32,
        grid_width: usize,
        grid_height: usize,
    ) -> Cell {
        match self {
            Self::Rectangular => rect::pixel_to_cell(x, y, cell_size),
            Self::Hexagonal => hex::pixel_to_cell(x, y, cell_size, grid_width, grid_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_neighbors() {
        assert_eq!(8, Topology::Rectangular.max_neighbors());
        assert_eq!(6, Topology::Hexagonal.max_neighbors());
    }

    #[test]
    fn test_cycle_visits_all() {
        let mut topology = Topology::default();
        for &expected in &Topology::ALL {
            assert_eq!(expected, topology);
            topology = topology.next();
        }
        assert_eq!(Topology::default(), topology);
    }

    #[test]
    fn test_offsets_exclude_origin() {
        for &topology in &Topology::ALL {
            for row in -2..=2 {
                assert!(!topology.neighbor_offsets(row).contains(&(0, 0)));
            }
        }
    }

    #[test]
    fn test_default_rules_are_valid() {
        for &topology in &Topology::ALL {
            assert!(topology.default_rule().validate_for(topology).is_ok());
        }
    }
}
