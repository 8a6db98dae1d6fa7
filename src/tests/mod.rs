//! Behavioral tests spanning the engine, topologies, and manager.

mod hex;
mod manager;

use crate::prelude::*;

/// Builds an engine over a square surface, wired to a shared paint log.
fn engine_with_log(topology: Topology, surface: u32, cell_size: u32) -> (Engine, PaintLog) {
    let log = PaintLog::new();
    let engine = Engine::new(topology, surface, surface, cell_size, Box::new(log.clone()))
        .expect("default rule must fit its topology");
    (engine, log)
}
