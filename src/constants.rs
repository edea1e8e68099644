//! Constants for board geometry, heuristic defaults, and session limits.
//!
//! Everything that the command line does not override lives here so the
//! engine, the console driver and the tests agree on the same numbers.

use std::f64::consts::PI;

// =============================================================================
// Geometry
// =============================================================================

/// Two positions closer than this on both axes compare equal.
pub const POSITION_TOLERANCE: f64 = 1e-4;

/// Default board orientation for hexagonal cells (flat left/right edges).
pub const HEX_ORIENTATION: f64 = PI / 2.0;

/// Default board orientation for square cells (axis-aligned edges).
pub const SQUARE_ORIENTATION: f64 = PI / 4.0;

/// Direction that points from a hex cell to the next ring outward along the
/// board's first spoke. Ring `i` is seeded from the first cell of ring `i - 1`.
pub const HEX_OUTWARD_DIRECTION: usize = 4;

/// Direction that points from the last cell of a square ring to the first
/// cell of the next ring.
pub const SQUARE_OUTWARD_DIRECTION: usize = 3;

/// Default cell radius (centre to vertex) in model units.
pub const DEFAULT_RADIUS: f64 = 30.0;

/// Default number of rings for a new board.
pub const DEFAULT_SIZE: usize = 4;

// =============================================================================
// Heuristic Weights
// =============================================================================

/// Bonus for playing on a corner cell.
pub const DEFAULT_CORNER_WEIGHT: i32 = 1;

/// Penalty for playing next to a corner cell.
pub const DEFAULT_NEXT_TO_CORNER_WEIGHT: i32 = 1;

/// Weight per piece the move gains, the placed piece included.
pub const DEFAULT_GREEDY_WEIGHT: i32 = 1;

/// Weight per piece the opponent could gain on its best reply.
pub const DEFAULT_CAUTIOUS_WEIGHT: i32 = 1;

// =============================================================================
// Session Limits
// =============================================================================

/// Upper bound on plies one `tick` may chain, as a multiple of the cell count.
/// Every move fills a cell and two passes in a row end the game, so a healthy
/// game never gets near this.
pub const PLY_GUARD_FACTOR: usize = 2;
