use anyhow::anyhow;
use fleet_engine::prelude::*;
use log::debug;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

const LAYOUT_ATTEMPTS: usize = 16;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut battle = Battle::default();
    for player in [Player::Player1, Player::Player2] {
        battle = battle
            .random_fleet(player, &mut rng, LAYOUT_ATTEMPTS)
            .ok_or_else(|| anyhow!("unable to generate a layout for {player}"))?;
    }

    // Player 1 opens; each side sweeps the opponent's board in row-major order.
    let mut shooter = Player::Player1;
    let mut shots = [0usize; 2];
    let mut sunk = [0usize; 2];
    while battle.winner().is_none() {
        let target = shooter.opponent();
        let coord = battle
            .board(target)
            .iter()
            .find(|(_, tile)| matches!(tile, Tile::Water | Tile::Undamaged(_)))
            .map(|(coord, _)| coord)
            .ok_or_else(|| anyhow!("{target} has no untried cells left"))?;

        let op = battle.fire_at(target, coord);
        match op.message {
            Message::Hit | Message::Miss => {}
            other => return Err(anyhow!("unexpected outcome {other} at {coord:?}")),
        }
        if let Some(kind) = op.just_sunk {
            debug!("{shooter} sank {kind}");
            sunk[shooter.index()] += 1;
        }
        shots[shooter.index()] += 1;
        battle = op.battle;
        shooter = target;
    }

    let winner = battle.winner().map(|p| p.to_string());
    let result = json!({
        "player1": {"shots": shots[0], "sunk": sunk[0]},
        "player2": {"shots": shots[1], "sunk": sunk[1]},
        "winner": winner,
        "phase": battle.phase().to_string(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
