//! One-way output port for cell repaints.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::cell::Cell;

/// Sink for cell repaint events.
///
/// The engine calls [`PaintCell::paint_cell`] once per cell whose displayed
/// state must change: on each toggle, on each generation's deltas, and on the
/// live cells a reset carries forward. The engine never reads back from the
/// sink; how (or whether) the event reaches a display surface is the
/// driver's business.
pub trait PaintCell {
    /// Paints one cell in its new state.
    fn paint_cell(&mut self, cell: Cell, alive: bool);
}

/// Adapter that turns any `FnMut(Cell, bool)` closure into a painter.
pub struct FnPainter<F>(pub F);

impl<F> fmt::Debug for FnPainter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FnPainter").finish()
    }
}

impl<F: FnMut(Cell, bool)> PaintCell for FnPainter<F> {
    fn paint_cell(&mut self, cell: Cell, alive: bool) {
        (self.0)(cell, alive)
    }
}

/// Painter that discards every event.
#[derive(Debug, Default, Copy, Clone)]
pub struct NullPainter;

impl PaintCell for NullPainter {
    fn paint_cell(&mut self, _cell: Cell, _alive: bool) {}
}

/// Painter that records every event.
///
/// Clones share the same underlying buffer, so a driver (or test) can keep
/// one handle while the engine owns the other.
#[derive(Debug, Default, Clone)]
pub struct PaintLog {
    events: Rc<RefCell<Vec<(Cell, bool)>>>,
}

impl PaintLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the recorded events, in paint order.
    pub fn events(&self) -> Vec<(Cell, bool)> {
        self.events.borrow().clone()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Discards all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl PaintCell for PaintLog {
    fn paint_cell(&mut self, cell: Cell, alive: bool) {
        self.events.borrow_mut().push((cell, alive));
    }
}
