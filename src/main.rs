use anyhow::anyhow;
use clap::{Parser, Subcommand};
use fleet_engine::{init_logging, Battle, Board, Player, COMPACT_SIZE};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Fresh boards tried before giving up on a random fleet.
const LAYOUT_ATTEMPTS: usize = 16;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random fleets for both players and print the boards.
    Layout {
        #[arg(long, default_value_t = COMPACT_SIZE)]
        rows: usize,
        #[arg(long, default_value_t = COMPACT_SIZE)]
        cols: usize,
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the snapshot as JSON instead of glyph grids")]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            rows,
            cols,
            seed,
            json,
        } => {
            let mut rng = if let Some(s) = seed {
                info!("Using fixed seed: {}", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            let mut battle = Battle::try_new(rows, cols).map_err(|e| anyhow!(e))?;
            for player in [Player::Player1, Player::Player2] {
                battle = battle
                    .random_fleet(player, &mut rng, LAYOUT_ATTEMPTS)
                    .ok_or_else(|| {
                        anyhow!("unable to generate a layout for {player} on a {rows}x{cols} board")
                    })?;
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&battle)?);
            } else {
                for player in [Player::Player1, Player::Player2] {
                    println!("{player}:");
                    print_board(battle.board(player));
                    println!();
                }
                println!("Phase: {}", battle.phase());
            }
        }
    }
    Ok(())
}

fn print_board(board: &Board) {
    let border: String = "-".repeat(board.cols() + 2);
    println!("{border}");
    for line in board.to_string().lines() {
        println!("|{line}|");
    }
    println!("{border}");
}
