use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    rotate, BitGrid, Coordinate, Fleet, Orientation, Placement, PlacementError, ShipType,
    BOARD_SIZE, NUM_SHIPS, TOTAL_SHIP_CELLS,
};

fn placement(ship_type: ShipType, row: u8, column: u8, orientation: Orientation) -> Placement {
    Placement {
        ship_type,
        start_coordinate: Coordinate::new(row, column),
        orientation,
    }
}

#[test]
fn horizontal_overflow_is_rejected() {
    let fleet = Fleet::new();
    let err = fleet
        .validate(&placement(ShipType::Carrier, 0, 6, Orientation::Horizontal))
        .unwrap_err();
    assert_eq!(err, PlacementError::OutOfBounds);
}

#[test]
fn vertical_overflow_is_rejected() {
    // Vertical hulls grow toward row 0, so low rows are the tight ones.
    let fleet = Fleet::new();
    let err = fleet
        .validate(&placement(ShipType::Carrier, 2, 0, Orientation::Vertical))
        .unwrap_err();
    assert_eq!(err, PlacementError::OutOfBounds);
}

#[test]
fn overlap_is_rejected() {
    let mut fleet = Fleet::new();
    fleet
        .place(placement(ShipType::Carrier, 0, 0, Orientation::Horizontal))
        .unwrap();

    // Cruiser at (2,2) vertical covers (2,2), (1,2), (0,2); the last
    // cell sits inside the carrier.
    let err = fleet
        .validate(&placement(ShipType::Cruiser, 2, 2, Orientation::Vertical))
        .unwrap_err();
    assert_eq!(err, PlacementError::Overlaps);
}

#[test]
fn replacing_a_ship_ignores_its_own_previous_hull() {
    let mut fleet = Fleet::new();
    fleet
        .place(placement(ShipType::Destroyer, 5, 5, Orientation::Horizontal))
        .unwrap();

    // Shift one column to the right; the new hull reuses (5,6).
    fleet
        .place(placement(ShipType::Destroyer, 5, 6, Orientation::Horizontal))
        .unwrap();

    assert_eq!(fleet.placements().len(), 1);
    assert_eq!(
        fleet.get(ShipType::Destroyer).unwrap().start_coordinate,
        Coordinate::new(5, 6)
    );
}

#[test]
fn remove_frees_the_hull() {
    let mut fleet = Fleet::new();
    fleet
        .place(placement(ShipType::Submarine, 4, 4, Orientation::Horizontal))
        .unwrap();
    assert!(fleet.remove(ShipType::Submarine).is_some());
    assert!(fleet.occupied().is_empty());
    assert!(fleet.remove(ShipType::Submarine).is_none());
}

#[test]
fn rotation_keeps_the_anchor_and_checks_bounds() {
    let anchored = placement(ShipType::Carrier, 4, 0, Orientation::Horizontal);
    let rotated = rotate(&anchored).unwrap();
    assert_eq!(rotated.start_coordinate, anchored.start_coordinate);
    assert_eq!(rotated.orientation, Orientation::Vertical);
    assert_eq!(rotate(&rotated).unwrap(), anchored);

    // At row 0 a vertical carrier would leave the board upward.
    let cornered = placement(ShipType::Carrier, 0, 0, Orientation::Horizontal);
    assert_eq!(rotate(&cornered).unwrap_err(), PlacementError::OutOfBounds);
}

#[test]
fn is_complete_requires_all_five_ships() {
    let mut fleet = Fleet::new();
    assert!(!fleet.is_complete());
    for (i, ship_type) in ShipType::ALL.into_iter().enumerate() {
        fleet
            .place(placement(
                ship_type,
                2 * i as u8,
                0,
                Orientation::Horizontal,
            ))
            .unwrap();
    }
    assert!(fleet.is_complete());
}

#[test]
fn generated_fleet_is_complete_and_disjoint() {
    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let fleet = Fleet::generate(&mut rng).unwrap();
        assert!(fleet.is_complete());
        assert_eq!(fleet.placements().len(), NUM_SHIPS);
        // Disjoint hulls cover exactly the sum of their lengths.
        assert_eq!(fleet.occupied().count_ones(), TOTAL_SHIP_CELLS);
        for p in fleet.placements() {
            assert!(p.in_bounds());
        }
    }
}

#[test]
fn generation_is_reproducible_for_a_fixed_seed() {
    let mut rng_a = SmallRng::seed_from_u64(42);
    let mut rng_b = SmallRng::seed_from_u64(42);
    assert_eq!(
        Fleet::generate(&mut rng_a).unwrap(),
        Fleet::generate(&mut rng_b).unwrap()
    );
}

#[test]
fn generation_fails_cleanly_when_the_board_is_too_full() {
    // Block 96 of the 100 cells, leaving four isolated cells where not
    // even a destroyer fits.
    let mut blocked = BitGrid::new();
    for row in 0..BOARD_SIZE {
        for column in 0..BOARD_SIZE {
            blocked.set(Coordinate::new(row, column));
        }
    }
    for i in [0u8, 2, 4, 6] {
        blocked.clear(Coordinate::new(i, i));
    }
    assert_eq!(blocked.count_ones(), 96);

    let mut rng = SmallRng::seed_from_u64(7);
    let err = Fleet::generate_avoiding(&mut rng, &blocked).unwrap_err();
    assert_eq!(err, PlacementError::GenerationFailed);
}
