//! Engine behavior on the hexagonal topology.

use super::engine_with_log;
use crate::prelude::*;

/// 10x10 hex grid: 1000 px / 100 px cells wide, 1000 px / 85 px row pitch
/// tall, minus the margin row.
fn hex_engine() -> (Engine, PaintLog) {
    engine_with_log(Topology::Hexagonal, 1000, 100)
}

#[test]
fn test_hex_engine_dimensions_and_rule() {
    let (engine, _log) = hex_engine();
    assert_eq!(Topology::Hexagonal, engine.topology());
    assert_eq!((10, 10), (engine.width(), engine.height()));
    assert_eq!(&HEX_LIFE, engine.rule());
}

#[test]
fn test_one_pixel_cells_are_usable() {
    // side_length and inner_height both floor to zero at this size; the row
    // pitch still comes out as one pixel instead of dividing by zero.
    let (engine, _log) = engine_with_log(Topology::Hexagonal, 100, 1);
    assert_eq!((100, 99), (engine.width(), engine.height()));
}

#[test]
fn test_lone_hex_cell_dies() {
    let (mut engine, log) = hex_engine();
    engine.toggle(Cell::new(4, 4));
    log.clear();

    engine.step();

    assert_eq!(0, engine.population());
    assert_eq!(vec![(Cell::new(4, 4), false)], log.events());
}

#[test]
fn test_hex_birth_on_three_neighbors() {
    let (mut engine, _log) = hex_engine();
    // Three of (4, 4)'s six neighbors (row 4 is even).
    for &cell in &[(3, 3), (3, 4), (4, 3)] {
        engine.toggle(cell.into());
    }

    engine.step();
    assert!(engine.get(Cell::new(4, 4)));
}

#[test]
fn test_hex_edge_cells_count_missing_neighbors_as_dead() {
    let (mut engine, _log) = hex_engine();
    // Corner cell (0, 0) has only two in-bounds neighbors, (0, 1) and
    // (1, 0); the four out-of-range ones count as dead rather than erroring.
    engine.toggle(Cell::new(0, 0));
    engine.toggle(Cell::new(0, 1));

    engine.step();
    // Each of the pair sees exactly one live neighbor, within S1-3.
    assert!(engine.get(Cell::new(0, 0)));
    assert!(engine.get(Cell::new(0, 1)));
    assert_eq!(2, engine.population());
}

#[test]
fn test_hit_test_round_trips_every_cell_center() {
    let (engine, _log) = hex_engine();
    for row in 0..engine.height() as i32 {
        for col in 0..engine.width() as i32 {
            let cell = Cell::new(row, col);
            let (cx, cy) = Topology::Hexagonal.cell_center(cell, engine.cell_size());
            assert_eq!(
                cell,
                engine.pixel_to_cell(cx as i32, cy as i32),
                "center of {} did not hit-test back",
                cell,
            );
        }
    }
}

#[test]
fn test_hit_test_disambiguates_sloped_cap() {
    let (engine, _log) = hex_engine();
    // (152, 86) falls in the top-left corner of hex (1, 1)'s bounding box,
    // inside the sloped cap that actually belongs to hex (0, 1).
    assert_eq!(Cell::new(0, 1), engine.pixel_to_cell(152, 86));
}

#[test]
fn test_hit_test_tolerates_stray_pointer_positions() {
    let (mut engine, log) = hex_engine();
    for &(x, y) in &[(-400, -400), (5000, 5000), (0, 100_000)] {
        let cell = engine.pixel_to_cell(x, y);
        engine.toggle(cell);
    }
    assert!(log.is_empty());
    assert_eq!(0, engine.population());
}
