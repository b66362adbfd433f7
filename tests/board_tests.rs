use fleet_engine::{
    candidate_cells, ship_from_glyph, Battle, Board, BoardError, Orientation, Player, ShipKind, Tile,
    COMPACT_SIZE, NUM_SHIPS, SHIPS, TOTAL_SHIP_CELLS,
};

fn compact() -> Battle {
    Battle::new(COMPACT_SIZE, COMPACT_SIZE)
}

#[test]
fn test_catalog_lengths() {
    let lengths: Vec<usize> = SHIPS.iter().map(|k| k.length()).collect();
    assert_eq!(lengths, vec![5, 4, 3, 3, 2]);
    assert_eq!(lengths.iter().sum::<usize>(), TOTAL_SHIP_CELLS);
    assert_eq!(SHIPS.len(), NUM_SHIPS);
}

#[test]
fn test_glyph_lookup() {
    assert_eq!(ship_from_glyph('A'), Some(ShipKind::Carrier));
    assert_eq!(ship_from_glyph('s'), Some(ShipKind::Submarine));
    assert_eq!(ship_from_glyph('X'), None);
    assert_eq!(ship_from_glyph(' '), None);
}

#[test]
fn test_tile_glyphs() {
    assert_eq!(Tile::Water.glyph(), ' ');
    assert_eq!(Tile::Miss.glyph(), '~');
    assert_eq!(Tile::Undamaged(ShipKind::Cruiser).glyph(), 'C');
    assert_eq!(Tile::Damaged(ShipKind::Cruiser).glyph(), 'X');
    assert_eq!(Tile::Sunk(ShipKind::Cruiser).glyph(), 'c');
    assert_eq!(Tile::default(), Tile::Water);
}

#[test]
fn test_candidate_cells() {
    assert_eq!(
        candidate_cells((2, 3), Orientation::Horizontal, 3),
        Some(vec![(2, 3), (2, 4), (2, 5)])
    );
    assert_eq!(
        candidate_cells((6, 1), Orientation::Vertical, 4),
        Some(vec![(6, 1), (7, 1), (8, 1), (9, 1)])
    );
    assert_eq!(candidate_cells((0, 0), Orientation::Vertical, 0), Some(vec![]));
}

#[test]
fn test_candidate_cells_overflow() {
    assert_eq!(
        candidate_cells((0, usize::MAX - 1), Orientation::Horizontal, 3),
        None
    );
    assert_eq!(
        candidate_cells((usize::MAX, 4), Orientation::Vertical, 1),
        Some(vec![(usize::MAX, 4)])
    );
    let board = Board::new(COMPACT_SIZE, COMPACT_SIZE);
    assert_eq!(
        board.cells_over_water((usize::MAX, 0), Orientation::Vertical, 2),
        None
    );
}

#[test]
fn test_try_new_dimensions() {
    assert_eq!(
        Board::try_new(usize::MAX, 2),
        Err(BoardError::DimensionsTooLarge {
            rows: usize::MAX,
            cols: 2
        })
    );
    assert!(Battle::try_new(usize::MAX, usize::MAX).is_err());
    let board = Board::try_new(3, 5).unwrap();
    assert_eq!(board.coords().count(), 15);
    assert_eq!(board, Board::new(3, 5));
}

#[test]
fn test_board_json_checks_tile_count() {
    let board = Board::new(2, 2);
    let text = serde_json::to_string(&board).unwrap();
    assert_eq!(serde_json::from_str::<Board>(&text).unwrap(), board);

    let short = r#"{"rows":2,"cols":2,"tiles":["Water","Water","Miss"]}"#;
    let err = serde_json::from_str::<Board>(short).unwrap_err();
    assert!(err.to_string().contains("expects 4 tiles, found 3"), "{err}");

    let huge = format!(r#"{{"rows":{},"cols":2,"tiles":[]}}"#, usize::MAX);
    assert!(serde_json::from_str::<Board>(&huge).is_err());
}

#[test]
fn test_cells_over_water_bounds() {
    let board = Board::new(COMPACT_SIZE, COMPACT_SIZE);
    assert_eq!(
        board.cells_over_water((0, 6), Orientation::Horizontal, 2),
        Some(vec![(0, 6), (0, 7)])
    );
    assert_eq!(board.cells_over_water((0, 7), Orientation::Horizontal, 2), None);
    assert_eq!(board.cells_over_water((4, 0), Orientation::Vertical, 5), None);
    assert_eq!(board.cells_over_water((8, 0), Orientation::Vertical, 1), None);
}

#[test]
fn test_cells_over_water_occupied() {
    let battle = compact()
        .place_ship(ShipKind::Cruiser, Player::Player1, (3, 2), Orientation::Vertical)
        .battle;
    let board = battle.board(Player::Player1);
    assert_eq!(board.cells_over_water((4, 0), Orientation::Horizontal, 5), None);
    assert!(board
        .cells_over_water((4, 3), Orientation::Horizontal, 5)
        .is_some());
}

#[test]
fn test_board_queries() {
    let battle = compact()
        .place_ship(ShipKind::Destroyer, Player::Player1, (0, 0), Orientation::Horizontal)
        .battle
        .place_ship(ShipKind::Carrier, Player::Player1, (2, 2), Orientation::Vertical)
        .battle;
    let board = battle.board(Player::Player1);

    assert_eq!(board.ship_cell_count(), 7);
    assert_eq!(board.distinct_ship_count(), 2);
    assert_eq!(board.undamaged_ship_kind_count(), 2);
    assert!(board.is_ship_kind_undamaged(ShipKind::Carrier));
    assert!(!board.is_ship_kind_undamaged(ShipKind::Cruiser));
    assert!(!board.is_complete());
    assert_eq!(
        board.cells_for_ship_kind(ShipKind::Carrier),
        vec![(2, 2), (3, 2), (4, 2), (5, 2), (6, 2)]
    );
    assert!(board.cells_for_ship_kind(ShipKind::Submarine).is_empty());

    // the other board is untouched
    assert_eq!(battle.board(Player::Player2).ship_cell_count(), 0);
}

#[test]
fn test_get_out_of_range() {
    let board = Board::new(3, 4);
    assert_eq!(board.rows(), 3);
    assert_eq!(board.cols(), 4);
    assert_eq!(board.get((2, 3)), Some(Tile::Water));
    assert_eq!(board.get((3, 0)), None);
    assert_eq!(board.get((0, 4)), None);
    assert_eq!(board.coords().count(), 12);
}

#[test]
fn test_board_display() {
    let battle = Battle::new(2, 3)
        .place_ship(ShipKind::Destroyer, Player::Player2, (1, 1), Orientation::Horizontal)
        .battle;
    assert_eq!(battle.board(Player::Player2).to_string(), "   \n DD");
    assert_eq!(Board::default().rows(), 10);
}
