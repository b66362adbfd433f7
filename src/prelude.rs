//! Commonly used types and utilities for ease of import.

pub use crate::{Battle, Board, Coord, GamePhase, Message, Operation, Orientation, Player, ShipKind, Tile};

#[cfg(feature = "std")]
pub use crate::init_logging;
