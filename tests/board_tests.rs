use seabattle::{Board, CellState, Coordinate};

#[test]
fn empty_board_reports_empty_cells() {
    let board = Board::new();
    assert!(board.is_empty());
    assert_eq!(board.cell(Coordinate::new(4, 4)), CellState::Empty);
    assert!(board.cells().is_empty());
}

#[test]
fn from_cells_builds_lookup() {
    let board = Board::from_cells(vec![
        (Coordinate::new(0, 0), CellState::Ship),
        (Coordinate::new(1, 2), CellState::HitShip),
        (Coordinate::new(9, 9), CellState::Miss),
    ]);

    assert_eq!(board.cell(Coordinate::new(0, 0)), CellState::Ship);
    assert_eq!(board.cell(Coordinate::new(1, 2)), CellState::HitShip);
    assert_eq!(board.cell(Coordinate::new(9, 9)), CellState::Miss);
    assert_eq!(board.cell(Coordinate::new(5, 5)), CellState::Empty);
    assert_eq!(board.ship_cells().count_ones(), 1);
}

#[test]
fn wire_order_is_preserved() {
    let cells = vec![
        (Coordinate::new(7, 7), CellState::Miss),
        (Coordinate::new(0, 1), CellState::HitShip),
        (Coordinate::new(3, 3), CellState::Miss),
    ];
    let board = Board::from_cells(cells.clone());
    assert_eq!(board.cells(), cells.as_slice());
}

#[test]
fn hits_shadow_stale_ship_entries() {
    // A server snapshot should never list a cell twice, but resolve it
    // deterministically if one does.
    let board = Board::from_cells(vec![
        (Coordinate::new(2, 2), CellState::Ship),
        (Coordinate::new(2, 2), CellState::HitShip),
    ]);
    assert_eq!(board.cell(Coordinate::new(2, 2)), CellState::HitShip);
}
