use gridgames::battleship::{Orientation, Ship};

#[test]
fn horizontal_cells_run_right_from_origin() {
    let ship = Ship::new(3, (2, 4), Orientation::Horizontal);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(2, 4), (2, 5), (2, 6)]);
}

#[test]
fn vertical_cells_run_down_from_origin() {
    let ship = Ship::new(4, (1, 7), Orientation::Vertical);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(1, 7), (2, 7), (3, 7), (4, 7)]);
}

#[test]
fn register_hit_only_marks_own_cells() {
    let mut ship = Ship::new(2, (0, 0), Orientation::Horizontal);
    assert!(!ship.register_hit((1, 0)));
    assert!(ship.register_hit((0, 1)));
    assert!(ship.is_hit((0, 1)));
    assert!(!ship.is_hit((0, 0)));
}

#[test]
fn sunk_only_when_every_segment_hit() {
    let mut ship = Ship::new(3, (5, 5), Orientation::Vertical);
    ship.register_hit((5, 5));
    ship.register_hit((6, 5));
    assert!(!ship.is_sunk());
    ship.register_hit((7, 5));
    assert!(ship.is_sunk());
}

#[test]
fn single_cell_ship_sinks_on_first_hit() {
    let mut ship = Ship::new(1, (9, 9), Orientation::Horizontal);
    assert!(!ship.is_sunk());
    ship.register_hit((9, 9));
    assert!(ship.is_sunk());
}
