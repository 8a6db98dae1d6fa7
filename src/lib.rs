//! Grid-topology storage and simulation backend for Life-like cellular
//! automata.
//!
//! The engine keeps two grid buffers and alternates between them each
//! generation, repainting only the cells that changed through a one-way
//! [`paint::PaintCell`] port. Neighbor adjacency, grid sizing, and
//! pixel-to-cell hit testing are delegated to a [`topology::Topology`], so the
//! same engine runs on rectangular (Moore-neighborhood) and hexagonal grids.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod cell;
pub mod engine;
mod error;
pub mod grid;
pub mod manager;
pub mod paint;
pub mod rule;
pub mod topology;

pub use error::{LifegridError, LifegridResult};

pub mod prelude {
    //! Re-exports of the types most drivers need.

    pub use crate::cell::{Cell, Offset};
    pub use crate::engine::Engine;
    pub use crate::grid::Grid;
    pub use crate::manager::EngineManager;
    pub use crate::paint::{FnPainter, NullPainter, PaintCell, PaintLog};
    pub use crate::rule::{Rule, HEX_LIFE, LIFE};
    pub use crate::topology::Topology;
    pub use crate::{LifegridError, LifegridResult};
}

#[cfg(test)]
mod tests;
