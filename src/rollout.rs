//! Uniform-random playout to a terminal position.

use rand::Rng;

use crate::bitboard::Bitboard;
use crate::board::{apply_move, find_moves};

/// The result of a [`random_rollout`], relative to the side to move at the
/// start of the rollout (`ACTIVE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Active,
    Opponent,
    Draw,
}

/// Plays uniform-random moves from `(active, other)` to game end and reports
/// the outcome relative to `active`, the side to move when the rollout began.
///
/// # Preconditions
///
/// `active` must genuinely be the side to move; callers must not pre-swap
/// the boards before calling (see the crate's error-handling design — this
/// is a trusted-input contract, not checked here).
pub fn random_rollout(
    mut active: Bitboard,
    mut other: Bitboard,
    rng: &mut impl Rng,
) -> Outcome {
    let mut same_player = true;
    let mut just_passed = false;

    loop {
        let moves = find_moves(active, other);
        if moves.is_empty() {
            if just_passed {
                break;
            }
            just_passed = true;
        } else {
            just_passed = false;
            let k = rng.random_range(0..moves.popcount());
            let bit_pos = moves.select_bit(k + 1);
            let chosen = Bitboard::new(1u64 << (bit_pos - 1));
            let (next_active, next_other) = apply_move(active, other, chosen);
            active = next_active;
            other = next_other;
        }
        same_player = !same_player;
        std::mem::swap(&mut active, &mut other);
    }

    let score = active.popcount() as i64 - other.popcount() as i64;
    if score == 0 {
        Outcome::Draw
    } else if (score > 0) == same_player {
        Outcome::Active
    } else {
        Outcome::Opponent
    }
}
