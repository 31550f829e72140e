//! Global constants shared across the core.

use crate::types::Score;

/// Number of squares on the Reversi board.
pub const BOARD_SQUARES: usize = 64;

/// Bitmask with the four corner squares set (A1, H1, A8, H8 in internal coordinates).
pub const CORNER_MASK: u64 = 0x8100000000000081;

/// Mask that excludes the A-file, so a west/east shift never wraps column 0↔7.
pub const NOT_A_FILE: u64 = 0xFEFE_FEFE_FEFE_FEFE;

/// Mask that excludes the H-file, so an east/west shift never wraps column 0↔7.
pub const NOT_H_FILE: u64 = 0x7F7F_7F7F_7F7F_7F7F;

/// Maximum number of legal moves a single position can have.
///
/// Bounds the solver's per-node scratch arrays so they can live on the call
/// frame instead of the heap.
pub const MAX_MOVES: usize = 32;

/// Remaining-empties threshold below which the solver skips fastest-first
/// move ordering and falls back to plain negamax (see `solver::search`).
pub const FASTEST_FIRST_CUTOFF: u32 = 5;

/// Maximum possible score (disc count differential).
pub const SCORE_MAX: Score = 64;

/// Minimum possible score (disc count differential).
pub const SCORE_MIN: Score = -64;

/// Sentinel score returned by `solve_game` when the side to move has no
/// legal move at the root, chosen to exceed any real disc-differential score.
pub const INFINITY_SENTINEL: Score = 999;

/// Initial alpha/beta bound used by the root search.
///
/// Production builds only need to distinguish win/loss/draw, so `1` is
/// sufficient; the `benchmark-scoring` feature switches to a full
/// score-maximizing search and widens this to `SCORE_MAX`.
#[cfg(not(feature = "benchmark-scoring"))]
pub const INITIAL_BOUND: Score = 1;

/// See the non-`benchmark-scoring` doc comment above.
#[cfg(feature = "benchmark-scoring")]
pub const INITIAL_BOUND: Score = SCORE_MAX;
