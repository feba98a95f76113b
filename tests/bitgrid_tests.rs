use seabattle::{BitGrid, Coordinate};

#[test]
fn set_get_clear_roundtrip() {
    let mut grid = BitGrid::new();
    let cell = Coordinate::new(3, 7);
    assert!(!grid.get(cell));

    grid.set(cell);
    assert!(grid.get(cell));
    assert_eq!(grid.count_ones(), 1);

    grid.clear(cell);
    assert!(!grid.get(cell));
    assert!(grid.is_empty());
}

#[test]
fn off_board_coordinates_are_ignored() {
    let mut grid = BitGrid::new();
    grid.set(Coordinate::new(10, 0));
    grid.set(Coordinate::new(0, 10));
    grid.set(Coordinate::new(200, 200));
    assert!(grid.is_empty());
    assert!(!grid.get(Coordinate::new(10, 0)));
}

#[test]
fn iter_yields_row_major_order() {
    let grid = BitGrid::from_cells([
        Coordinate::new(5, 5),
        Coordinate::new(0, 3),
        Coordinate::new(5, 2),
    ]);
    let cells: Vec<Coordinate> = grid.iter().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(0, 3),
            Coordinate::new(5, 2),
            Coordinate::new(5, 5),
        ]
    );
}

#[test]
fn bitwise_ops_combine_grids() {
    let a = BitGrid::from_cells([Coordinate::new(1, 1), Coordinate::new(2, 2)]);
    let b = BitGrid::from_cells([Coordinate::new(2, 2), Coordinate::new(3, 3)]);

    assert_eq!((a & b).count_ones(), 1);
    assert_eq!((a | b).count_ones(), 3);
    assert_eq!((a ^ b).count_ones(), 2);
    assert!((a & b).get(Coordinate::new(2, 2)));
}

#[test]
fn not_inverts_within_board_bounds() {
    let empty = BitGrid::new();
    let full = !empty;
    assert_eq!(full.count_ones(), 100);
    assert!(full.get(Coordinate::new(9, 9)));
    assert!(!full.get(Coordinate::new(10, 0)));
}
