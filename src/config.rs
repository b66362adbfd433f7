use crate::ship::ShipKind;

/// Board height used by `Battle::default`.
pub const DEFAULT_ROWS: usize = 10;
/// Board width used by `Battle::default`.
pub const DEFAULT_COLS: usize = 10;
/// Side length of the compact board the touch front end plays on.
pub const COMPACT_SIZE: usize = 8;

pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipKind; NUM_SHIPS] = [
    ShipKind::Carrier,
    ShipKind::Battleship,
    ShipKind::Submarine,
    ShipKind::Cruiser,
    ShipKind::Destroyer,
];

/// Total number of ship segments in a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Look up a ship kind by its board glyph (case-insensitive).
pub fn ship_from_glyph(glyph: char) -> Option<ShipKind> {
    let upper = glyph.to_ascii_uppercase();
    SHIPS.iter().copied().find(|kind| kind.glyph() == upper)
}
