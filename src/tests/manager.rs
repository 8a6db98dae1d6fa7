//! Engine manager switching behavior.

use crate::prelude::*;

fn manager_with_log(surface: u32, cell_size: u32) -> (EngineManager, PaintLog) {
    let log = PaintLog::new();
    let manager = EngineManager::new(surface, surface, cell_size, Box::new(log.clone()));
    (manager, log)
}

#[test]
fn test_matching_topology_preserves_state() {
    let (mut manager, _log) = manager_with_log(1000, 100);

    let engine = manager.engine(Topology::Rectangular).unwrap();
    engine.toggle(Cell::new(2, 3));
    engine.step();

    // Requesting the same topology must not reset the simulation.
    let engine = manager.engine(Topology::Rectangular).unwrap();
    assert_eq!(1, engine.generation_count());
}

#[test]
fn test_switch_rebuilds_and_rebinds_the_painter() {
    let (mut manager, log) = manager_with_log(1000, 100);

    manager.engine(Topology::Rectangular).unwrap().toggle(Cell::new(1, 1));
    assert_eq!(1, log.len());

    let engine = manager.engine(Topology::Hexagonal).unwrap();
    assert_eq!(Topology::Hexagonal, engine.topology());
    // Switching discards the old simulation state...
    assert_eq!(0, engine.population());
    // ...but the paint sink carries over to the replacement engine.
    engine.toggle(Cell::new(0, 0));
    assert_eq!(2, log.len());
}

#[test]
fn test_cycle_walks_the_topology_ring() {
    let (mut manager, _log) = manager_with_log(1000, 100);
    assert_eq!(None, manager.topology());

    assert_eq!(Topology::Rectangular, manager.cycle().unwrap().topology());
    assert_eq!(Topology::Hexagonal, manager.cycle().unwrap().topology());
    assert_eq!(Topology::Rectangular, manager.cycle().unwrap().topology());
    assert_eq!(Some(Topology::Rectangular), manager.topology());
}

#[test]
fn test_resize_carries_live_cells_forward() {
    let (mut manager, _log) = manager_with_log(500, 100);

    manager.engine(Topology::Rectangular).unwrap().toggle(Cell::new(2, 2));
    manager.resize(1000, 1000);

    let engine = manager.current().unwrap();
    assert_eq!((10, 10), (engine.width(), engine.height()));
    assert!(engine.get(Cell::new(2, 2)));

    // New engines built after the resize see the new surface too.
    let (mut manager, _log) = manager_with_log(500, 100);
    manager.resize(1000, 1000);
    let engine = manager.engine(Topology::Rectangular).unwrap();
    assert_eq!((10, 10), (engine.width(), engine.height()));
}

#[test]
fn test_failed_build_keeps_the_paint_sink() {
    // A zero cell size makes every build fail.
    let (mut manager, log) = manager_with_log(1000, 0);

    assert!(manager.engine(Topology::Rectangular).is_err());
    assert!(manager.current().is_none());

    // The sink survived the failed build, so the next attempt fails the same
    // way instead of panicking over a missing sink.
    assert!(manager.engine(Topology::Hexagonal).is_err());
    assert!(log.is_empty());
}

#[test]
fn test_each_topology_gets_its_conventional_rule() {
    let (mut manager, _log) = manager_with_log(1000, 100);
    assert_eq!(&LIFE, manager.engine(Topology::Rectangular).unwrap().rule());
    assert_eq!(&HEX_LIFE, manager.engine(Topology::Hexagonal).unwrap().rule());
}
