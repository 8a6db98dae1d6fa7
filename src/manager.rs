//! Selects and rebuilds the live engine when the topology changes.

use std::fmt;

use log::debug;

use crate::engine::Engine;
use crate::error::LifegridResult;
use crate::paint::{NullPainter, PaintCell};
use crate::topology::Topology;

/// Owns at most one live [`Engine`] and swaps it out when a different
/// topology is requested.
///
/// The paint sink is the engine's one external resource binding; on a switch
/// the manager recovers it from the outgoing engine and hands it to the
/// replacement, so the driver registers its sink once for the lifetime of
/// the manager. Switching discards the old simulation state.
pub struct EngineManager {
    surface_width: u32,
    surface_height: u32,
    cell_size: u32,
    engine: Option<Engine>,
    /// Paint sink, held here only while no engine is live.
    painter: Option<Box<dyn PaintCell>>,
}

impl fmt::Debug for EngineManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineManager")
            .field("surface_width", &self.surface_width)
            .field("surface_height", &self.surface_height)
            .field("cell_size", &self.cell_size)
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

impl EngineManager {
    /// Creates a manager for the given surface with no engine live yet.
    pub fn new(
        surface_width: u32,
        surface_height: u32,
        cell_size: u32,
        painter: Box<dyn PaintCell>,
    ) -> Self {
        Self {
            surface_width,
            surface_height,
            cell_size,
            engine: None,
            painter: Some(painter),
        }
    }

    /// Returns the live engine for `topology`, building one if needed.
    ///
    /// A live engine whose topology already matches is returned untouched,
    /// in-progress simulation state and all. Otherwise the old engine is
    /// torn down and a fresh one is constructed for the requested topology
    /// with that topology's conventional rule.
    pub fn engine(&mut self, topology: Topology) -> LifegridResult<&mut Engine> {
        let rebuild = self
            .engine
            .as_ref()
            .map_or(true, |engine| engine.topology() != topology);
        if rebuild {
            let painter = match self.engine.take() {
                Some(old) => {
                    debug!("switching topology: {} -> {}", old.topology(), topology);
                    old.into_painter()
                }
                // The sink lives in exactly one place: here before the first
                // build, in the engine afterwards.
                None => self.painter.take().expect("paint sink unbound"),
            };
            // The real sink is bound only once the build has succeeded; a
            // failed build hands it back for the next attempt.
            match Engine::new(
                topology,
                self.surface_width,
                self.surface_height,
                self.cell_size,
                Box::new(NullPainter),
            ) {
                Ok(mut engine) => {
                    engine.set_painter(painter);
                    self.engine = Some(engine);
                }
                Err(err) => {
                    self.painter = Some(painter);
                    return Err(err);
                }
            }
        }
        Ok(self.engine.as_mut().expect("engine just built"))
    }

    /// Switches to the next topology in cycling order (or builds the default
    /// engine if none is live).
    pub fn cycle(&mut self) -> LifegridResult<&mut Engine> {
        let next = self
            .engine
            .as_ref()
            .map_or_else(Topology::default, |engine| engine.topology().next());
        self.engine(next)
    }

    /// Records a new surface size and resets the live engine against it,
    /// carrying overlapping live cells forward.
    pub fn resize(&mut self, surface_width: u32, surface_height: u32) {
        self.surface_width = surface_width;
        self.surface_height = surface_height;
        if let Some(engine) = &mut self.engine {
            let cell_size = engine.cell_size();
            engine
                .reset(surface_width, surface_height, cell_size)
                .expect("live engine's cell size was validated at construction");
        }
    }

    /// Returns the live engine, if any.
    pub fn current(&self) -> Option<&Engine> {
        self.engine.as_ref()
    }

    /// Returns the live engine's topology, if any engine is live.
    pub fn topology(&self) -> Option<Topology> {
        self.engine.as_ref().map(Engine::topology)
    }
}
