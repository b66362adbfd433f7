//! Random fleet placement by backtracking search.

use alloc::vec::Vec;

use log::{debug, trace, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Coord;
use crate::common::{Message, Player};
use crate::config::SHIPS;
use crate::game::{Battle, Operation};
use crate::ship::{Orientation, ShipKind};

impl Battle {
    /// Place the whole catalog on `player`'s board at random.
    ///
    /// Returns `AllShipsPlaced` with the filled board, or `ShipNotAllowedHere`
    /// with this snapshot untouched when no arrangement was found.
    pub fn random_layout<R: Rng + ?Sized>(&self, player: Player, rng: &mut R) -> Operation {
        self.random_layout_of(player, &SHIPS, rng)
    }

    /// Same as [`Battle::random_layout`] for an explicit list of kinds, placed
    /// in the given order. Kinds already on the board are skipped.
    pub fn random_layout_of<R: Rng + ?Sized>(
        &self,
        player: Player,
        kinds: &[ShipKind],
        rng: &mut R,
    ) -> Operation {
        let Some((&kind, rest)) = kinds.split_first() else {
            return Operation {
                message: Message::AllShipsPlaced,
                battle: self.clone(),
                just_sunk: None,
            };
        };
        let board = self.board(player);
        if board.has_ship_kind(kind) {
            return self.random_layout_of(player, rest, rng);
        }

        let orientation = if rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let mut candidates: Vec<Coord> = board
            .coords()
            .filter(|&origin| {
                board
                    .cells_over_water(origin, orientation, kind.length())
                    .is_some()
            })
            .collect();
        candidates.shuffle(rng);

        for origin in candidates {
            let placed = self.place_ship(kind, player, origin, orientation);
            if placed.message != Message::ShipPlaced {
                warn!("{player}: prefiltered {kind} at {origin:?} rejected: {}", placed.message);
                continue;
            }
            let attempt = placed.battle.random_layout_of(player, rest, rng);
            if attempt.message == Message::AllShipsPlaced {
                return attempt;
            }
        }

        trace!("{player}: no room for {kind} {orientation:?}, backtracking");
        Operation {
            message: Message::ShipNotAllowedHere,
            battle: self.clone(),
            just_sunk: None,
        }
    }

    /// Run [`Battle::random_layout`] up to `attempts` times, each from this
    /// snapshot, and return the first snapshot with a full fleet.
    pub fn random_fleet<R: Rng + ?Sized>(
        &self,
        player: Player,
        rng: &mut R,
        attempts: usize,
    ) -> Option<Battle> {
        for attempt in 1..=attempts {
            let op = self.random_layout(player, rng);
            if op.message == Message::AllShipsPlaced {
                debug!("{player}: random fleet ready after {attempt} attempt(s)");
                return Some(op.battle);
            }
        }
        debug!("{player}: no random fleet after {attempts} attempts");
        None
    }
}
