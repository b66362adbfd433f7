//! Immutable game snapshots and the transitions between them.
//!
//! Every operation borrows the current [`Battle`] and returns an
//! [`Operation`] holding the next one. Nothing is changed in place, so a
//! caller that keeps old snapshots gets undo for free.

use core::fmt;

use log::{debug, trace};

use crate::board::{Board, Coord, Tile};
use crate::common::{BoardError, Message, Player};
use crate::config::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::ship::{Orientation, ShipKind};

/// Coarse stage of a game, in the only order it can advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GamePhase {
    Setup,
    SetupComplete,
    Playing,
    GameOver,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GamePhase::Setup => "Setup",
            GamePhase::SetupComplete => "Setup Complete",
            GamePhase::Playing => "Playing",
            GamePhase::GameOver => "Game Over",
        };
        f.write_str(text)
    }
}

/// Result of an engine operation: the outcome, the snapshot to continue
/// from, and the ship a shot has just sunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub message: Message,
    pub battle: Battle,
    pub just_sunk: Option<ShipKind>,
}

impl Operation {
    fn new(message: Message, battle: Battle) -> Self {
        Operation {
            message,
            battle,
            just_sunk: None,
        }
    }
}

/// One immutable snapshot of a two player game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(from = "BattleParts"))]
pub struct Battle {
    boards: [Board; 2],
    last_shooter: Option<Player>,
    phase: GamePhase,
}

/// Authoritative fields of a snapshot; the phase is always rebuilt from them.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct BattleParts {
    boards: [Board; 2],
    last_shooter: Option<Player>,
}

#[cfg(feature = "std")]
impl From<BattleParts> for Battle {
    fn from(parts: BattleParts) -> Self {
        Battle::assemble(parts.boards, parts.last_shooter)
    }
}

impl Battle {
    /// Fresh game: two all-water boards of `rows` × `cols`, nobody has fired.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`, like [`Board::new`].
    pub fn new(rows: usize, cols: usize) -> Self {
        let board = Board::new(rows, cols);
        Battle::assemble([board.clone(), board], None)
    }

    /// Fallible form of [`Battle::new`] for caller-supplied dimensions.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        let board = Board::try_new(rows, cols)?;
        Ok(Battle::assemble([board.clone(), board], None))
    }

    fn assemble(boards: [Board; 2], last_shooter: Option<Player>) -> Self {
        let phase = derive_phase(&boards, last_shooter);
        Battle {
            boards,
            last_shooter,
            phase,
        }
    }

    /// Copy of this snapshot with `player`'s board replaced.
    fn with_board(&self, player: Player, board: Board, shooter: Option<Player>) -> Self {
        let mut boards = self.boards.clone();
        boards[player.index()] = board;
        let next = Battle::assemble(boards, shooter.or(self.last_shooter));
        if next.phase != self.phase {
            debug!("phase {} -> {}", self.phase, next.phase);
        }
        next
    }

    /// Read-only view of a player's board.
    pub fn board(&self, player: Player) -> &Board {
        &self.boards[player.index()]
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Player who fired the most recent shot.
    pub fn last_shooter(&self) -> Option<Player> {
        self.last_shooter
    }

    /// Returns `true` once `player` has placed every ship in the catalog.
    pub fn board_complete(&self, player: Player) -> bool {
        self.board(player).is_complete()
    }

    pub fn setup_complete(&self) -> bool {
        self.boards.iter().all(Board::is_complete)
    }

    /// Place `kind` for `player` with its bow at `origin`.
    ///
    /// Checks, first match wins: the board is already complete, the kind is
    /// already on the board, the cells are not all on-board water.
    pub fn place_ship(
        &self,
        kind: ShipKind,
        player: Player,
        origin: Coord,
        orientation: Orientation,
    ) -> Operation {
        let board = self.board(player);
        if board.is_complete() {
            return Operation::new(Message::AllShipsPlaced, self.clone());
        }
        if board.has_ship_kind(kind) {
            trace!("{player}: {kind} already placed");
            return Operation::new(Message::ShipAlreadyPlaced, self.clone());
        }
        let Some(cells) = board.cells_over_water(origin, orientation, kind.length()) else {
            trace!("{player}: {kind} not allowed at {origin:?} {orientation:?}");
            return Operation::new(Message::ShipNotAllowedHere, self.clone());
        };

        let mut next = board.clone();
        for &coord in &cells {
            next.set(coord, Tile::Undamaged(kind));
        }
        debug!("{player}: placed {kind} at {origin:?} {orientation:?}");
        Operation::new(Message::ShipPlaced, self.with_board(player, next, None))
    }

    /// Fire at `target`'s board. The shot always comes from the opponent of
    /// `target`.
    pub fn fire_at(&self, target: Player, coord: Coord) -> Operation {
        let shooter = target.opponent();
        match self.phase {
            GamePhase::SetupComplete | GamePhase::Playing => {}
            GamePhase::Setup | GamePhase::GameOver => {
                return Operation::new(Message::GameNotInPlay, self.clone());
            }
        }
        if self.last_shooter == Some(shooter) {
            return Operation::new(Message::NotThisPlayersTurn, self.clone());
        }

        let board = self.board(target);
        let Some(tile) = board.get(coord) else {
            return Operation::new(Message::OffBoard, self.clone());
        };

        let mut next = board.clone();
        let mut just_sunk = None;
        let message = match tile {
            Tile::Undamaged(kind) => {
                next.set(coord, Tile::Damaged(kind));
                if !next.is_ship_kind_undamaged(kind) {
                    for cell in next.cells_for_ship_kind(kind) {
                        next.set(cell, Tile::Sunk(kind));
                    }
                    debug!("{shooter} sank {target}'s {kind}");
                    just_sunk = Some(kind);
                }
                Message::Hit
            }
            Tile::Damaged(_) | Tile::Sunk(_) => Message::HitSameSpot,
            Tile::Water => {
                next.set(coord, Tile::Miss);
                Message::Miss
            }
            Tile::Miss => Message::MissSameSpot,
        };
        trace!("{shooter} fired at {target} {coord:?}: {message}");

        Operation {
            message,
            battle: self.with_board(target, next, Some(shooter)),
            just_sunk,
        }
    }

    /// Acknowledge the end of setup. Reports `GameStarted` once both fleets
    /// are placed; the snapshot is never changed.
    pub fn start(&self) -> Operation {
        let message = if self.phase == GamePhase::Setup {
            Message::GameNotInPlay
        } else {
            Message::GameStarted
        };
        Operation::new(message, self.clone())
    }

    /// The player who fired the finishing shot, once the game is over.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            GamePhase::GameOver => self.last_shooter,
            _ => None,
        }
    }
}

impl Default for Battle {
    fn default() -> Self {
        Battle::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

/// Phase implied by the boards and the shot history.
fn derive_phase(boards: &[Board; 2], last_shooter: Option<Player>) -> GamePhase {
    if !boards.iter().all(Board::is_complete) {
        return GamePhase::Setup;
    }
    if last_shooter.is_none() {
        return GamePhase::SetupComplete;
    }
    if boards.iter().any(|b| b.undamaged_ship_kind_count() == 0) {
        GamePhase::GameOver
    } else {
        GamePhase::Playing
    }
}
