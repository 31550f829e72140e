//! Common type aliases used throughout the core.

/// Number of empty squares remaining (equivalently, remaining search depth).
pub type Depth = u32;

/// Score as a disc-count differential (-64..=64), or the `INFINITY_SENTINEL`
/// when `solve_game` has no move to report.
pub type Score = i32;
