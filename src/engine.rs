//! Double-buffered automaton engine.

use std::fmt;

use itertools::iproduct;
use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::cell::Cell;
use crate::error::{LifegridError, LifegridResult};
use crate::grid::Grid;
use crate::paint::PaintCell;
use crate::rule::Rule;
use crate::topology::Topology;

/// Life-like automaton over a fixed-size grid of some [`Topology`].
///
/// The engine keeps two grid buffers of identical dimensions. One is the
/// active, externally visible state; the other is the write target for the
/// next generation, fully overwritten on each [`Engine::step`]. Every
/// mutation path repaints through the bound [`PaintCell`] sink, and only for
/// cells whose value actually changed.
///
/// All operations are synchronous and run to completion; the engine holds no
/// locks and expects its driver to serialize calls (e.g. a resize racing a
/// scheduled step).
pub struct Engine {
    topology: Topology,
    rule: Rule,
    cell_size: u32,
    grids: [Grid; 2],
    /// Index of the buffer holding the current, externally visible state.
    active: usize,
    generations: u64,
    rng: SmallRng,
    painter: Box<dyn PaintCell>,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("topology", &self.topology)
            .field("rule", &self.rule)
            .field("cell_size", &self.cell_size)
            .field("grids", &self.grids)
            .field("active", &self.active)
            .field("generations", &self.generations)
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Creates an engine for the given topology with its conventional rule,
    /// sized to the given pixel surface.
    pub fn new(
        topology: Topology,
        surface_width: u32,
        surface_height: u32,
        cell_size: u32,
        painter: Box<dyn PaintCell>,
    ) -> LifegridResult<Self> {
        Self::with_rule(
            topology,
            topology.default_rule(),
            surface_width,
            surface_height,
            cell_size,
            painter,
        )
    }

    /// Creates an engine with an explicit rule, which must fit the
    /// topology's neighbor count. The cell size must be at least one pixel.
    pub fn with_rule(
        topology: Topology,
        rule: Rule,
        surface_width: u32,
        surface_height: u32,
        cell_size: u32,
        painter: Box<dyn PaintCell>,
    ) -> LifegridResult<Self> {
        rule.validate_for(topology)?;
        if cell_size == 0 {
            return Err(LifegridError::ZeroCellSize);
        }
        let (width, height) = topology.grid_dimensions(surface_width, surface_height, cell_size);
        debug!(
            "new {} engine: {}x{} cells of {} px, rule {}",
            topology, width, height, cell_size, rule,
        );
        Ok(Self {
            topology,
            rule,
            cell_size,
            grids: [Grid::new(width, height), Grid::new(width, height)],
            active: 0,
            generations: 0,
            rng: SmallRng::from_entropy(),
            painter,
        })
    }

    /// Returns the engine's topology.
    #[inline]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Returns the engine's rule.
    #[inline]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Replaces the engine's rule, which must fit the topology.
    pub fn set_rule(&mut self, rule: Rule) -> LifegridResult<()> {
        rule.validate_for(self.topology)?;
        self.rule = rule;
        Ok(())
    }

    /// Returns the grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.grids[self.active].width()
    }

    /// Returns the grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.grids[self.active].height()
    }

    /// Returns the cell size in pixels.
    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Returns the number of generations that have elapsed since the last
    /// reset.
    #[inline]
    pub fn generation_count(&self) -> u64 {
        self.generations
    }

    /// Returns the number of live cells.
    pub fn population(&self) -> usize {
        self.grids[self.active].population()
    }

    /// Returns the state of a cell; out-of-range coordinates read as dead.
    pub fn get(&self, cell: Cell) -> bool {
        self.grids[self.active].get(cell)
    }

    /// Maps a pixel position on the surface to a cell.
    pub fn pixel_to_cell(&self, x: i32, y: i32) -> Cell {
        self.topology
            .pixel_to_cell(x, y, self.cell_size, self.width(), self.height())
    }

    /// Re-sizes the simulation against a (possibly changed) surface.
    ///
    /// Dimensions are recomputed, both buffers are replaced with all-dead
    /// grids, and live cells from the previous active buffer are carried
    /// forward wherever the new bounds still contain them (painting each);
    /// cells outside the new bounds are dropped. The generation count
    /// restarts at zero. Calling this again with the same inputs is a no-op
    /// on state. A zero cell size is rejected, leaving the engine untouched.
    pub fn reset(
        &mut self,
        surface_width: u32,
        surface_height: u32,
        cell_size: u32,
    ) -> LifegridResult<()> {
        if cell_size == 0 {
            return Err(LifegridError::ZeroCellSize);
        }
        self.cell_size = cell_size;
        let (width, height) =
            self.topology
                .grid_dimensions(surface_width, surface_height, cell_size);
        debug!(
            "reset {} engine to {}x{} cells of {} px",
            self.topology, width, height, cell_size,
        );

        let old = std::mem::take(&mut self.grids[self.active]);
        let mut fresh = Grid::new(width, height);
        for (cell, alive) in old.iter_cells() {
            if alive && fresh.contains(cell) {
                fresh.set(cell, true);
                self.painter.paint_cell(cell, true);
            }
        }
        self.grids = [fresh, Grid::new(width, height)];
        self.active = 0;
        self.generations = 0;
        Ok(())
    }

    /// Flips one cell in the active buffer and paints its new value.
    ///
    /// Out-of-range coordinates are silently ignored, with no paint call;
    /// drivers are expected to pre-validate, but stray pointer coordinates
    /// are tolerated.
    pub fn toggle(&mut self, cell: Cell) {
        if !self.grids[self.active].contains(cell) {
            return;
        }
        let value = !self.grids[self.active].get(cell);
        self.grids[self.active].set(cell, value);
        self.painter.paint_cell(cell, value);
    }

    /// Writes a specific value to one cell, painting only if the stored
    /// value changed. Out-of-range coordinates are silently ignored.
    pub fn set(&mut self, cell: Cell, alive: bool) {
        if !self.grids[self.active].contains(cell) || self.grids[self.active].get(cell) == alive {
            return;
        }
        self.grids[self.active].set(cell, alive);
        self.painter.paint_cell(cell, alive);
    }

    /// Toggles every cell with independent probability 1/2 using the
    /// engine's own RNG.
    ///
    /// Randomization runs through the toggle path so the paint-on-change
    /// invariant holds here exactly as it does everywhere else.
    pub fn randomize(&mut self) {
        let mut rng = self.rng.clone();
        self.randomize_with(&mut rng);
        self.rng = rng;
    }

    /// Toggles every cell with independent probability 1/2 using the given
    /// RNG. Seed the RNG to make the result reproducible.
    pub fn randomize_with(&mut self, rng: &mut impl Rng) {
        trace!("randomizing {}x{} grid", self.width(), self.height());
        for (row, col) in iproduct!(0..self.height() as i32, 0..self.width() as i32) {
            if rng.gen_bool(0.5) {
                self.toggle(Cell::new(row, col));
            }
        }
    }

    /// Advances the simulation by one generation.
    ///
    /// Every cell of the inactive buffer is computed from the active buffer,
    /// a paint call fires for each cell whose value changed, and then the
    /// buffers swap roles. The active buffer is never mutated mid-pass, so a
    /// re-entrant read anywhere during the sweep sees only the prior
    /// generation.
    pub fn step(&mut self) {
        let (left, right) = self.grids.split_at_mut(1);
        let (current, next) = if self.active == 0 {
            (&left[0], &mut right[0])
        } else {
            (&right[0], &mut left[0])
        };

        let (height, width) = (current.height() as i32, current.width() as i32);
        for (row, col) in iproduct!(0..height, 0..width) {
            let cell = Cell::new(row, col);
            let neighbors = self
                .topology
                .neighbor_offsets(row)
                .iter()
                .filter(|&&offset| current.get(cell + offset))
                .count() as u8;
            let alive = current.get(cell);
            let value = self.rule.next_state(alive, neighbors);
            next.set(cell, value);
            if value != alive {
                self.painter.paint_cell(cell, value);
            }
        }

        self.active = 1 - self.active;
        self.generations += 1;
    }

    /// Advances the simulation by `gens` generations.
    pub fn step_by(&mut self, gens: u64) {
        for _ in 0..gens {
            self.step();
        }
    }

    /// Replaces the engine's paint sink, returning the previous one.
    pub fn set_painter(&mut self, painter: Box<dyn PaintCell>) -> Box<dyn PaintCell> {
        std::mem::replace(&mut self.painter, painter)
    }

    /// Consumes the engine and releases its paint sink, the engine's one
    /// external resource binding.
    pub fn into_painter(self) -> Box<dyn PaintCell> {
        self.painter
    }
}
