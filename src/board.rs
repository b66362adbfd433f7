//! Grid of tiles for one player and the pure queries the engine asks of it.
//!
//! A `Board` is a value: the engine never changes one that a snapshot already
//! holds. Transitions clone the board, edit the clone, and hand it to a new
//! snapshot.

use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::config::{NUM_SHIPS, SHIPS};
use crate::ship::{Orientation, ShipKind};

/// `(row, col)` position on a board, zero based.
pub type Coord = (usize, usize);

/// State of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Water,
    Miss,
    Undamaged(ShipKind),
    Damaged(ShipKind),
    Sunk(ShipKind),
}

impl Tile {
    /// Ship kind this tile belongs to, if any.
    pub const fn ship(self) -> Option<ShipKind> {
        match self {
            Tile::Undamaged(kind) | Tile::Damaged(kind) | Tile::Sunk(kind) => Some(kind),
            Tile::Water | Tile::Miss => None,
        }
    }

    pub const fn is_ship(self) -> bool {
        self.ship().is_some()
    }

    pub const fn is_undamaged(self) -> bool {
        matches!(self, Tile::Undamaged(_))
    }

    /// Character the front end draws for this tile.
    pub fn glyph(self) -> char {
        match self {
            Tile::Water => ' ',
            Tile::Miss => '~',
            Tile::Undamaged(kind) => kind.glyph(),
            Tile::Damaged(_) => 'X',
            Tile::Sunk(kind) => kind.glyph().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Rectangular grid of tiles stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "BoardParts"))]
pub struct Board {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

/// Raw serialized board, checked before it becomes a `Board`.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct BoardParts {
    rows: usize,
    cols: usize,
    tiles: Vec<Tile>,
}

#[cfg(feature = "std")]
impl TryFrom<BoardParts> for Board {
    type Error = BoardError;

    fn try_from(parts: BoardParts) -> Result<Self, BoardError> {
        let expected = cell_count(parts.rows, parts.cols)?;
        if parts.tiles.len() != expected {
            return Err(BoardError::TileCountMismatch {
                expected,
                found: parts.tiles.len(),
            });
        }
        Ok(Board {
            rows: parts.rows,
            cols: parts.cols,
            tiles: parts.tiles,
        })
    }
}

fn cell_count(rows: usize, cols: usize) -> Result<usize, BoardError> {
    rows.checked_mul(cols)
        .ok_or(BoardError::DimensionsTooLarge { rows, cols })
}

impl Board {
    /// All-water board of the given size.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`; use [`Board::try_new`] for
    /// untrusted dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Board::try_new(rows, cols) {
            Ok(board) => board,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible constructor: returns `Err(DimensionsTooLarge)` if the cell
    /// count does not fit in `usize`.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Ok(Board {
            rows,
            cols,
            tiles: alloc::vec![Tile::Water; cell_count(rows, cols)?],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `(row, col)` lies on the board.
    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.rows && col < self.cols
    }

    /// Tile at `coord`, or `None` when off the board.
    pub fn get(&self, coord: Coord) -> Option<Tile> {
        if self.contains(coord) {
            Some(self.tiles[coord.0 * self.cols + coord.1])
        } else {
            None
        }
    }

    /// Overwrite a tile. Only called on a freshly cloned board.
    pub(crate) fn set(&mut self, coord: Coord, tile: Tile) {
        if self.contains(coord) {
            self.tiles[coord.0 * self.cols + coord.1] = tile;
        }
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
    }

    /// Every `(coord, tile)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Tile)> + '_ {
        self.coords().zip(self.tiles.iter().copied())
    }

    /// Number of cells holding any ship segment.
    pub fn ship_cell_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_ship()).count()
    }

    /// Returns `true` if any cell references `kind`, whatever its damage.
    pub fn has_ship_kind(&self, kind: ShipKind) -> bool {
        self.tiles.iter().any(|t| t.ship() == Some(kind))
    }

    /// Number of catalog kinds present on the board.
    pub fn distinct_ship_count(&self) -> usize {
        SHIPS.iter().filter(|&&kind| self.has_ship_kind(kind)).count()
    }

    /// Returns `true` once every catalog kind has been placed.
    pub fn is_complete(&self) -> bool {
        self.distinct_ship_count() == NUM_SHIPS
    }

    pub fn is_ship_kind_undamaged(&self, kind: ShipKind) -> bool {
        self.tiles.contains(&Tile::Undamaged(kind))
    }

    /// Number of kinds with at least one undamaged segment. Zero on a
    /// complete board means its owner has lost.
    pub fn undamaged_ship_kind_count(&self) -> usize {
        SHIPS
            .iter()
            .filter(|&&kind| self.is_ship_kind_undamaged(kind))
            .count()
    }

    /// All coordinates occupied by `kind`.
    pub fn cells_for_ship_kind(&self, kind: ShipKind) -> Vec<Coord> {
        self.iter()
            .filter(|(_, tile)| tile.ship() == Some(kind))
            .map(|(coord, _)| coord)
            .collect()
    }

    /// The cells a ship of `length` would cover from `origin`, provided all of
    /// them are on the board and still water.
    pub fn cells_over_water(
        &self,
        origin: Coord,
        orientation: Orientation,
        length: usize,
    ) -> Option<Vec<Coord>> {
        let cells = candidate_cells(origin, orientation, length)?;
        let over_water = cells
            .iter()
            .all(|&coord| self.get(coord) == Some(Tile::Water));
        over_water.then_some(cells)
    }
}

/// The `length` contiguous coordinates from `origin` along `orientation`.
/// No board bounds checking is done; `None` only when a coordinate would
/// overflow `usize`.
pub fn candidate_cells(
    origin: Coord,
    orientation: Orientation,
    length: usize,
) -> Option<Vec<Coord>> {
    let (dr, dc) = orientation.step();
    (0..length)
        .map(|i| Some((origin.0.checked_add(dr * i)?, origin.1.checked_add(dc * i)?)))
        .collect()
}

impl Default for Board {
    fn default() -> Self {
        Board::new(crate::config::DEFAULT_ROWS, crate::config::DEFAULT_COLS)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                write!(f, "{}", self.tiles[r * self.cols + c])?;
            }
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
