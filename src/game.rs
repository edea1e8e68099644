//! Game sessions: turn order, passes, termination and the move driver.
//!
//! A [`Game`] owns the board, one strategy per side and the selection
//! overlay written by the input side. The state machine is
//!
//! ```text
//! BlackTurn <-> WhiteTurn  (move or pass)
//!     \           /
//!  Draw | BlackWins | WhiteWins   (neither side can move)
//! ```
//!
//! [`Game::tick`] drives the strategies until one of them has nothing to
//! play (typically a human waiting for input) or the game ends.

use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, CellId, Topology};
use crate::cell::Color;
use crate::constants::PLY_GUARD_FACTOR;
use crate::error::{ReversiError, Result};
use crate::player::Strategy;
use crate::position::Position;
use crate::selection::Selection;

/// Whose turn it is, or how the game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TurnState {
    BlackTurn,
    WhiteTurn,
    Draw,
    BlackWins,
    WhiteWins,
}

impl TurnState {
    /// The side to move, or `None` once the game is over.
    pub fn to_move(self) -> Option<Color> {
        match self {
            TurnState::BlackTurn => Some(Color::Black),
            TurnState::WhiteTurn => Some(Color::White),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.to_move().is_none()
    }

    fn other_side(self) -> TurnState {
        match self {
            TurnState::BlackTurn => TurnState::WhiteTurn,
            TurnState::WhiteTurn => TurnState::BlackTurn,
            terminal => terminal,
        }
    }
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TurnState::BlackTurn => "black to move",
            TurnState::WhiteTurn => "white to move",
            TurnState::Draw => "draw",
            TurnState::BlackWins => "black wins",
            TurnState::WhiteWins => "white wins",
        };
        write!(f, "{s}")
    }
}

/// One game between two strategies.
#[derive(Debug)]
pub struct Game {
    board: Board,
    black: Box<dyn Strategy>,
    white: Box<dyn Strategy>,
    state: TurnState,
    selection: Selection,
}

impl Game {
    /// Start a game on `board` with the topology's opening position.
    /// Black moves first.
    ///
    /// - Hex: ring 1 alternates black/white starting at index 0; the centre
    ///   stays empty.
    /// - Square: the 2x2 centre block alternates black/white.
    ///
    /// # Errors
    /// `InvalidArgument` if a hex board has no ring 1, or the board already
    /// holds pieces.
    pub fn new(
        mut board: Board,
        black: Box<dyn Strategy>,
        white: Box<dyn Strategy>,
    ) -> Result<Self> {
        if board.cells().iter().any(|cell| !cell.is_empty()) {
            return Err(ReversiError::invalid_argument(
                "a game must start from an empty board",
            ));
        }
        let opening_layer = match board.topology() {
            Topology::Hex => 1,
            Topology::Square => 0,
        };
        if board.layer_count() <= opening_layer {
            return Err(ReversiError::invalid_argument(format!(
                "a {} board needs at least {} rings to hold the opening",
                board.topology(),
                opening_layer + 1
            )));
        }
        for index in 0..board.layer_len(opening_layer)? {
            let color = if index % 2 == 0 { Color::Black } else { Color::White };
            let id = board.cell_id(opening_layer, index)?;
            board.set_occupancy(id, color)?;
        }

        let state = TurnState::BlackTurn;
        board.refresh_legal_moves(state.to_move());
        info!(
            topology = %board.topology(),
            size = board.size(),
            black = black.name(),
            white = white.name(),
            "new game"
        );
        Ok(Game {
            board,
            black,
            white,
            state,
            selection: Selection::new(),
        })
    }

    /// Resume from a position already on `board`, with `to_move` on turn.
    /// Nothing is seeded. A position where neither side can move is settled
    /// by the next [`Game::tick`] or [`Game::pass`].
    pub fn from_position(
        mut board: Board,
        black: Box<dyn Strategy>,
        white: Box<dyn Strategy>,
        to_move: Color,
    ) -> Self {
        let state = match to_move {
            Color::Black => TurnState::BlackTurn,
            Color::White => TurnState::WhiteTurn,
        };
        board.refresh_legal_moves(Some(to_move));
        info!(
            topology = %board.topology(),
            size = board.size(),
            %to_move,
            "resumed game"
        );
        Game {
            board,
            black,
            white,
            state,
            selection: Selection::new(),
        }
    }

    pub fn hex(
        size: usize,
        radius: f64,
        black: Box<dyn Strategy>,
        white: Box<dyn Strategy>,
    ) -> Result<Self> {
        Self::new(Board::new(Topology::Hex, size, radius)?, black, white)
    }

    pub fn square(
        size: usize,
        radius: f64,
        black: Box<dyn Strategy>,
        white: Box<dyn Strategy>,
    ) -> Result<Self> {
        Self::new(Board::new(Topology::Square, size, radius)?, black, white)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Piece counts as `(black, white)`.
    pub fn score(&self) -> (usize, usize) {
        (self.board.count(Color::Black), self.board.count(Color::White))
    }

    /// True once neither side has a legal cell. Both sides are swept from
    /// scratch; the stored legality flags are not consulted.
    pub fn is_game_over(&self) -> bool {
        self.state.is_terminal()
            || (!self.board.has_legal_move(Color::Black)
                && !self.board.has_legal_move(Color::White))
    }

    /// If the game just ended, record the result. Returns whether the game
    /// is over.
    fn settle_if_over(&mut self) -> bool {
        if self.state.is_terminal() {
            return true;
        }
        if !self.is_game_over() {
            return false;
        }
        let (black, white) = self.score();
        self.state = match black.cmp(&white) {
            Ordering::Greater => TurnState::BlackWins,
            Ordering::Less => TurnState::WhiteWins,
            Ordering::Equal => TurnState::Draw,
        };
        self.board.refresh_legal_moves(None);
        self.selection.clear();
        info!(black, white, result = %self.state, "game over");
        true
    }

    /// Play `id` for the side to move.
    ///
    /// The selection is cleared whether or not the move is accepted. On
    /// success the captures are applied, the turn passes to the other side
    /// and legality is recomputed for it.
    ///
    /// # Errors
    /// - `InvalidArgument` if `id` is not a cell of the board.
    /// - `IllegalMove` if the game is over or the cell is not flagged legal.
    ///   The board and turn are untouched in that case.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn apply_move(&mut self, id: CellId) -> Result<()> {
        self.selection.clear();
        let turn = self.state.to_move().ok_or_else(|| {
            ReversiError::illegal_move(format!("the game is over ({})", self.state))
        })?;
        if !self.board.cell(id)?.is_legal() {
            return Err(ReversiError::illegal_move(format!(
                "cell {id} is not a legal move for {turn}"
            )));
        }

        let flipped = self.board.one_move(id, turn)?;
        debug!(%turn, cell = id, flipped, "move");
        self.state = self.state.other_side();
        self.board.refresh_legal_moves(self.state.to_move());
        Ok(())
    }

    /// Hand the turn to the other side without moving, then check whether
    /// the game has ended. Does nothing once the game is over.
    pub fn pass(&mut self) {
        if self.state.is_terminal() {
            return;
        }
        debug!(side = %self.state, "pass");
        self.selection.clear();
        self.state = self.state.other_side();
        self.board.refresh_legal_moves(self.state.to_move());
        self.settle_if_over();
    }

    /// Drive the strategies.
    ///
    /// Repeatedly: stop if the game is over; otherwise ask the side to move
    /// for a cell and play it. A computer strategy with no legal cell
    /// passes. Stops as soon as a strategy has nothing to offer (a human
    /// without a selection). Returns the number of plies played, passes
    /// included.
    ///
    /// # Errors
    /// Whatever the strategy or [`Game::apply_move`] reports, e.g.
    /// `InvalidState` for a multi-cell selection or `IllegalMove` for a
    /// selected cell that is not legal.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn tick(&mut self) -> Result<usize> {
        let guard = self.board.cell_count() * PLY_GUARD_FACTOR + 2;
        for plies in 0..guard {
            if self.settle_if_over() {
                return Ok(plies);
            }
            let Some(turn) = self.state.to_move() else {
                return Ok(plies);
            };

            let (choice, passes_when_stuck) = {
                let strategy = match turn {
                    Color::Black => &mut self.black,
                    Color::White => &mut self.white,
                };
                let choice = strategy.choose_move(&self.board, turn, &self.selection)?;
                (choice, strategy.passes_when_stuck())
            };

            match choice {
                Some(id) => self.apply_move(id)?,
                None if passes_when_stuck && self.board.legal_cells().is_empty() => self.pass(),
                None => return Ok(plies),
            }
        }
        warn!(guard, "tick stopped at the ply guard");
        Ok(guard)
    }

    /// Input trigger "commit move": play the current selection.
    pub fn commit(&mut self) -> Result<usize> {
        self.tick()
    }

    /// Flip the selection of `id`.
    pub fn toggle_selection(&mut self, id: CellId) -> Result<bool> {
        self.board.cell(id)?;
        Ok(self.selection.toggle(id))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Mouse-style selection at a model-space point. A legal, unselected
    /// cell becomes the only selection; anything else clears it. Returns the
    /// newly selected cell.
    pub fn select_at(&mut self, point: &Position) -> Option<CellId> {
        if self.state.is_terminal() {
            return None;
        }
        match self.board.point_to_cell(point) {
            Some(id) if self.board.cells()[id].is_legal() && !self.selection.is_selected(id) => {
                self.selection.select_only(id);
                Some(id)
            }
            _ => {
                self.selection.clear();
                None
            }
        }
    }

    /// Pieces the opponent would lose if the side to move played `id`.
    ///
    /// # Errors
    /// `IllegalMove` if the game is over or the move is not legal.
    pub fn preview_score(&self, id: CellId) -> Result<usize> {
        let turn = self
            .state
            .to_move()
            .ok_or_else(|| ReversiError::illegal_move("the game is over"))?;
        self.board.move_score(id, turn)
    }
}
