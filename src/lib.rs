//! A bitboard-based Reversi/Othello engine: move generation, move
//! resolution, stable-disc analysis, random rollouts and an exact endgame
//! solver.
//!
//! The six external operations are [`board::find_moves`],
//! [`board::resolve_move`], [`stability::stability`],
//! [`rollout::random_rollout`], [`solver::solve_game`] and
//! [`board::make_singleton`]. Callers outside this crate work in the
//! top-left-origin `(x, y)` convention documented on [`adapters`]; internal
//! code works entirely in the plain row-major bitboard convention documented
//! on [`bitboard`].
//!
//! ```
//! use othello_core::adapters::to_external_move;
//! use othello_core::board::Board;
//! use othello_core::solver::solve_game;
//!
//! let board = Board::new();
//! assert_eq!(board.find_moves().popcount(), 4);
//!
//! let mv = solve_game(board.player, board.opponent);
//! let external = to_external_move(mv);
//! assert!((0..8).contains(&external.x) && (0..8).contains(&external.y));
//! ```

pub mod adapters;
pub mod bitboard;
pub mod board;
pub mod constants;
pub mod disc;
pub mod perft;
pub mod rollout;
pub mod solver;
pub mod square;
pub mod stability;
pub mod types;

pub use bitboard::Bitboard;
pub use board::{find_moves, make_singleton, resolve_move, Board};
pub use disc::Disc;
pub use rollout::{random_rollout, Outcome};
pub use solver::{solve_game, Move};
pub use square::Square;
pub use stability::stability;
