//! Construction parameters for a game.
//!
//! The binary fills a [`GameConfig`] from its command line; tests build one
//! directly. [`GameConfig::build`] turns it into a ready-to-play [`Game`].

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Topology};
use crate::constants::{DEFAULT_RADIUS, DEFAULT_SIZE};
use crate::error::{ReversiError, Result};
use crate::game::Game;
use crate::player::{HeuristicStrategy, HeuristicWeights, HumanStrategy, RandomStrategy, Strategy};

/// Who plays one side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Ai,
    Random,
}

impl FromStr for PlayerKind {
    type Err = ReversiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "ai" | "heuristic" => Ok(PlayerKind::Ai),
            "random" | "crazy" => Ok(PlayerKind::Random),
            other => Err(ReversiError::invalid_argument(format!(
                "unknown player kind '{other}' (expected human, ai or random)"
            ))),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayerKind::Human => "human",
            PlayerKind::Ai => "ai",
            PlayerKind::Random => "random",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub topology: Topology,
    /// Number of rings.
    pub size: usize,
    /// Cell radius in model units.
    pub radius: f64,
    pub black: PlayerKind,
    pub white: PlayerKind,
    /// Custom heuristic weights. Only allowed when some side is `Ai`.
    pub weights: Option<HeuristicWeights>,
    /// Seed for random players. White uses `seed + 1`.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            topology: Topology::Hex,
            size: DEFAULT_SIZE,
            radius: DEFAULT_RADIUS,
            black: PlayerKind::Human,
            white: PlayerKind::Ai,
            weights: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// # Errors
    /// `InvalidArgument` for a board that cannot hold the opening, a
    /// non-positive radius, or weights without an AI side to use them.
    pub fn validate(&self) -> Result<()> {
        let min_size = match self.topology {
            Topology::Hex => 2,
            Topology::Square => 1,
        };
        if self.size < min_size {
            return Err(ReversiError::invalid_argument(format!(
                "a {} board needs a size of at least {min_size}, got {}",
                self.topology, self.size
            )));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ReversiError::invalid_argument(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if self.weights.is_some() && self.black != PlayerKind::Ai && self.white != PlayerKind::Ai {
            return Err(ReversiError::invalid_argument(
                "heuristic weights need at least one ai player",
            ));
        }
        Ok(())
    }

    fn strategy(&self, kind: PlayerKind, seed: Option<u64>) -> Box<dyn Strategy> {
        match kind {
            PlayerKind::Human => Box::new(HumanStrategy),
            PlayerKind::Ai => Box::new(HeuristicStrategy::new(self.weights.unwrap_or_default())),
            PlayerKind::Random => match seed {
                Some(seed) => Box::new(RandomStrategy::with_seed(seed)),
                None => Box::new(RandomStrategy::new()),
            },
        }
    }

    /// Validate, lay out the board and seed the opening.
    pub fn build(&self) -> Result<Game> {
        self.validate()?;
        let board = Board::new(self.topology, self.size, self.radius)?;
        let black = self.strategy(self.black, self.seed);
        let white = self.strategy(self.white, self.seed.map(|s| s.wrapping_add(1)));
        Game::new(board, black, white)
    }
}
