//! Polyreversi: Reversi on hexagonal and square tilings.
//!
//! ## Usage
//!
//! - `polyreversi` - Play in the console (human black, AI white, hex board)
//! - `polyreversi play --board square --size 4` - Console game, custom board
//! - `polyreversi demo --black ai --white random` - Watch two computer sides
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::io;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use polyreversi::board::Topology;
use polyreversi::config::{GameConfig, PlayerKind};
use polyreversi::console::Console;
use polyreversi::constants::{DEFAULT_RADIUS, DEFAULT_SIZE};
use polyreversi::player::HeuristicWeights;

/// Polyreversi: Reversi on hexagonal and square boards
#[derive(Parser)]
#[command(name = "polyreversi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: GameOptions,
}

#[derive(Subcommand)]
enum Commands {
    /// Play through the text console on stdin/stdout
    Play,
    /// Let computer players finish a game and print the result
    Demo,
}

#[derive(Args)]
struct GameOptions {
    /// Board tiling: hex or square
    #[arg(long, global = true, default_value = "hex")]
    board: Topology,

    /// Number of rings
    #[arg(long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Cell radius in model units
    #[arg(long, global = true, default_value_t = DEFAULT_RADIUS)]
    radius: f64,

    /// Black player: human, ai or random
    #[arg(long, global = true)]
    black: Option<PlayerKind>,

    /// White player: human, ai or random
    #[arg(long, global = true)]
    white: Option<PlayerKind>,

    /// Heuristic bonus for corners
    #[arg(long, global = true)]
    corner: Option<i32>,

    /// Heuristic penalty for cells next to a corner
    #[arg(long, global = true)]
    phobia: Option<i32>,

    /// Heuristic weight per piece the move gains
    #[arg(long, global = true)]
    greedy: Option<i32>,

    /// Heuristic weight per piece the opponent can gain back
    #[arg(long, global = true)]
    cautious: Option<i32>,

    /// Seed for random players
    #[arg(long, global = true)]
    seed: Option<u64>,
}

impl GameOptions {
    fn weights(&self) -> Option<HeuristicWeights> {
        if self.corner.is_none()
            && self.phobia.is_none()
            && self.greedy.is_none()
            && self.cautious.is_none()
        {
            return None;
        }
        let defaults = HeuristicWeights::default();
        Some(HeuristicWeights {
            corner: self.corner.unwrap_or(defaults.corner),
            next_to_corner: self.phobia.unwrap_or(defaults.next_to_corner),
            greedy: self.greedy.unwrap_or(defaults.greedy),
            cautious: self.cautious.unwrap_or(defaults.cautious),
        })
    }

    fn config(&self, black: PlayerKind, white: PlayerKind) -> GameConfig {
        GameConfig {
            topology: self.board,
            size: self.size,
            radius: self.radius,
            black: self.black.unwrap_or(black),
            white: self.white.unwrap_or(white),
            weights: self.weights(),
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo) => {
            let config = cli.options.config(PlayerKind::Ai, PlayerKind::Random);
            run_demo(&config)
        }
        Some(Commands::Play) | None => {
            let config = cli.options.config(PlayerKind::Human, PlayerKind::Ai);
            let game = config.build().context("could not set up the game")?;
            let mut console = Console::new(game);
            console
                .run(io::stdin().lock(), io::stdout().lock())
                .context("console i/o failed")
        }
    }
}

fn run_demo(config: &GameConfig) -> Result<()> {
    if config.black == PlayerKind::Human || config.white == PlayerKind::Human {
        bail!("the demo needs two computer players");
    }
    let mut game = config.build().context("could not set up the game")?;

    println!(
        "Polyreversi demo: {} board, size {}, {} (black) vs {} (white)\n",
        config.topology, config.size, config.black, config.white
    );
    println!("{}", game.board());

    let plies = game.tick().context("the game stopped on an error")?;
    let (black, white) = game.score();

    println!("{}", game.board());
    println!("{plies} plies, black {black} white {white}: {}", game.state());
    Ok(())
}
