//! Common types for the engine: player identities and operation outcomes.

use core::fmt;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// The other seat.
    pub const fn opponent(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Position of this seat's board in a snapshot (0 or 1).
    pub const fn index(self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Player1 => write!(f, "Player 1"),
            Player::Player2 => write!(f, "Player 2"),
        }
    }
}

/// Outcome code carried by every engine operation.
///
/// Rejections are ordinary values, never errors. Placement rejections and the
/// turn gate hand back the snapshot the caller passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Shot struck an undamaged segment.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Requested cells are off the board or already occupied.
    ShipNotAllowedHere,
    /// This kind already has cells on the board.
    ShipAlreadyPlaced,
    ShipPlaced,
    /// The board holds the whole catalog; also the success code of the
    /// random layout generator.
    AllShipsPlaced,
    GameStarted,
    /// The firing player also fired the previous shot.
    NotThisPlayersTurn,
    /// Shots are only accepted once both fleets are placed and until the
    /// game is over.
    GameNotInPlay,
    /// Shot at a segment already damaged or sunk. The board is unchanged but
    /// the shot still uses up the turn.
    HitSameSpot,
    /// Shot at a cell already marked as a miss. Uses up the turn.
    MissSameSpot,
    /// Shot coordinate lies outside the target board.
    OffBoard,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Message::Hit => "Hit",
            Message::Miss => "Miss",
            Message::ShipNotAllowedHere => "Ship Not Allowed Here",
            Message::ShipAlreadyPlaced => "Ship Already Placed",
            Message::ShipPlaced => "Ship Placed",
            Message::AllShipsPlaced => "All Ships Placed",
            Message::GameStarted => "Game Has Started",
            Message::NotThisPlayersTurn => "Not This Players Turn",
            Message::GameNotInPlay => "Game Not In Play",
            Message::HitSameSpot => "Hit Same Spot",
            Message::MissSameSpot => "Miss Same Spot",
            Message::OffBoard => "Off Board",
        };
        f.write_str(text)
    }
}

/// Errors returned when building a board from raw parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// `rows * cols` does not fit in `usize`.
    DimensionsTooLarge { rows: usize, cols: usize },
    /// Tile vector length does not match `rows * cols`.
    TileCountMismatch { expected: usize, found: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::DimensionsTooLarge { rows, cols } => {
                write!(f, "Board dimensions {}x{} overflow usize", rows, cols)
            }
            BoardError::TileCountMismatch { expected, found } => {
                write!(f, "Board expects {} tiles, found {}", expected, found)
            }
        }
    }
}
