//! Move selection strategies.
//!
//! Every strategy answers the same question: given the board (with legality
//! flags already computed for the side to move), which cell should be
//! played? `None` means "nothing to play right now": no legal cell, or a
//! human who has not picked one yet.
//!
//! - [`HumanStrategy`] - passes the externally selected cell through
//! - [`RandomStrategy`] - uniform choice among legal cells
//! - [`HeuristicStrategy`] - weighted corner / greedy / cautious scoring

use std::fmt;

use tracing::{debug, trace};

use crate::board::{Board, CellId};
use crate::cell::Color;
use crate::constants::{
    DEFAULT_CAUTIOUS_WEIGHT, DEFAULT_CORNER_WEIGHT, DEFAULT_GREEDY_WEIGHT,
    DEFAULT_NEXT_TO_CORNER_WEIGHT,
};
use crate::error::Result;
use crate::selection::Selection;

/// Something that can produce a move for one side.
pub trait Strategy: fmt::Debug {
    /// Short name for logs and the console.
    fn name(&self) -> &'static str;

    /// Pick a cell for `turn`. `selected` is the single externally selected
    /// cell, if any.
    fn pick(
        &mut self,
        board: &Board,
        turn: Color,
        selected: Option<CellId>,
    ) -> Result<Option<CellId>>;

    /// Whether the session should pass on this strategy's behalf when it
    /// has no legal cell. Humans pass explicitly.
    fn passes_when_stuck(&self) -> bool {
        false
    }

    /// Validate the selection overlay, then [`Strategy::pick`].
    ///
    /// # Errors
    /// `InvalidState` if more than one cell is selected.
    fn choose_move(
        &mut self,
        board: &Board,
        turn: Color,
        selection: &Selection,
    ) -> Result<Option<CellId>> {
        let selected = selection.single()?;
        self.pick(board, turn, selected)
    }
}

/// Plays whatever the input side selected.
#[derive(Debug, Clone, Default)]
pub struct HumanStrategy;

impl Strategy for HumanStrategy {
    fn name(&self) -> &'static str {
        "human"
    }

    fn pick(
        &mut self,
        _board: &Board,
        _turn: Color,
        selected: Option<CellId>,
    ) -> Result<Option<CellId>> {
        Ok(selected)
    }
}

/// Uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: fastrand::Rng,
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Reproducible sequence of choices.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn pick(
        &mut self,
        board: &Board,
        _turn: Color,
        _selected: Option<CellId>,
    ) -> Result<Option<CellId>> {
        let legal = board.legal_cells();
        if legal.is_empty() {
            return Ok(None);
        }
        Ok(Some(legal[self.rng.usize(..legal.len())]))
    }

    fn passes_when_stuck(&self) -> bool {
        true
    }
}

/// Weights of the four scoring terms.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HeuristicWeights {
    /// Bonus for a corner of the board.
    pub corner: i32,
    /// Penalty for a cell touching a corner.
    pub next_to_corner: i32,
    /// Per piece gained by the move, the placed piece included.
    pub greedy: i32,
    /// Per piece the opponent gains with its best reply.
    pub cautious: i32,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self {
            corner: DEFAULT_CORNER_WEIGHT,
            next_to_corner: DEFAULT_NEXT_TO_CORNER_WEIGHT,
            greedy: DEFAULT_GREEDY_WEIGHT,
            cautious: DEFAULT_CAUTIOUS_WEIGHT,
        }
    }
}

/// One-ply scoring with a one-reply caution term. Deterministic: ties go to
/// the first legal cell in layout order.
#[derive(Debug, Clone, Default)]
pub struct HeuristicStrategy {
    weights: HeuristicWeights,
}

impl HeuristicStrategy {
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> HeuristicWeights {
        self.weights
    }

    /// Score playing `id` for `turn`:
    ///
    /// ```text
    /// corner·[corner] − next_to_corner·[next to corner]
    ///   + greedy·gain − cautious·(opponent's best reply gain)
    /// ```
    ///
    /// A gain is the growth of the mover's piece count, so the placed piece
    /// counts along with the flips. With no reply available the opponent
    /// gains nothing.
    ///
    /// The board is only read; every trial move happens on a clone.
    pub fn score_move(&self, board: &Board, id: CellId, turn: Color) -> Result<i64> {
        let w = self.weights;
        let mut score = 0i64;

        if board.is_corner(id)? {
            score += i64::from(w.corner);
        }
        if board.is_next_to_corner(id)? {
            score -= i64::from(w.next_to_corner);
        }

        let mut after = board.clone();
        let gain = after.one_move(id, turn)? + 1;
        score += i64::from(w.greedy) * gain as i64;

        let opponent = turn.opponent();
        after.refresh_legal_moves(Some(opponent));
        let mut best_reply = 0;
        for reply in after.legal_cells() {
            best_reply = best_reply.max(after.move_score(reply, opponent)? + 1);
        }
        score -= i64::from(w.cautious) * best_reply as i64;

        trace!(cell = id, gain, best_reply, score, "scored candidate");
        Ok(score)
    }
}

impl Strategy for HeuristicStrategy {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn pick(
        &mut self,
        board: &Board,
        turn: Color,
        _selected: Option<CellId>,
    ) -> Result<Option<CellId>> {
        let mut best: Option<(CellId, i64)> = None;
        for id in board.legal_cells() {
            let score = self.score_move(board, id, turn)?;
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((id, score));
            }
        }
        if let Some((id, score)) = best {
            debug!(%turn, cell = id, score, "heuristic choice");
        }
        Ok(best.map(|(id, _)| id))
    }

    fn passes_when_stuck(&self) -> bool {
        true
    }
}
