//! Polyreversi: Reversi on hexagonal and square tilings.
//!
//! The board is a set of regular polygons laid out ring by ring around the
//! origin. Captures run along edge directions and, on square boards, along
//! diagonals as well. Sides are played by pluggable strategies: a human
//! driven by an external selection, a random player, or a one-ply heuristic.
//!
//! ## Modules
//!
//! - [`constants`] - Geometry defaults, heuristic weights and session limits
//! - [`error`] - The crate error type
//! - [`position`] - Plane points in Cartesian or polar form
//! - [`cell`] - Polygonal cells and piece colours
//! - [`board`] - Layouts, neighbours, legality and captures
//! - [`selection`] - The input side's cell selection
//! - [`player`] - Move selection strategies
//! - [`game`] - Turn order, passes and the move driver
//! - [`config`] - Game construction parameters
//! - [`console`] - Text command loop
//!
//! ## Example
//!
//! ```
//! use polyreversi::game::Game;
//! use polyreversi::player::{HeuristicStrategy, RandomStrategy};
//!
//! let mut game = Game::square(
//!     3,
//!     30.0,
//!     Box::new(HeuristicStrategy::default()),
//!     Box::new(RandomStrategy::with_seed(1)),
//! )
//! .unwrap();
//! game.tick().unwrap();
//! assert!(game.state().is_terminal());
//! println!("{}", game.board());
//! ```

pub mod board;
pub mod cell;
pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod player;
pub mod position;
pub mod selection;
