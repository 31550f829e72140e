//! Stable-disc analysis.
//!
//! A disc is stable once no sequence of future legal moves, by either side,
//! can ever flip it. This module computes that set directly from occupancy
//! via edge-seeded occluded fills rather than a precomputed 256-entry edge
//! table, since this core has no move history to amortize a lookup table
//! against.

use crate::bitboard::{occluded_fill, Bitboard, Direction};
use crate::constants::{NOT_A_FILE, NOT_H_FILE};

const CORNER_MASK: u64 = 0x8100000000000081;
const TOP_ROW: u64 = 0xFF00000000000000;
const BOTTOM_ROW: u64 = 0x00000000000000FF;
const LEFT_COL: u64 = 0x0101010101010101;
const RIGHT_COL: u64 = 0x8080808080808080;

const EXPANSION_ROUNDS: u32 = 16;

/// Returns the subset of `player`'s discs that can never be flipped for the
/// remainder of the game.
pub fn stability(player: Bitboard, opp: Bitboard) -> Bitboard {
    let pcs = player | opp;

    let vertical = occluded_fill(Bitboard::new(TOP_ROW), pcs, Direction::South)
        & occluded_fill(Bitboard::new(BOTTOM_ROW), pcs, Direction::North);
    let horizontal = occluded_fill(Bitboard::new(LEFT_COL), pcs, Direction::East)
        & occluded_fill(Bitboard::new(RIGHT_COL), pcs, Direction::West);
    let diag_main = occluded_fill(Bitboard::new(BOTTOM_ROW | LEFT_COL), pcs, Direction::NorthEast)
        & occluded_fill(Bitboard::new(TOP_ROW | RIGHT_COL), pcs, Direction::SouthWest);
    let diag_anti = occluded_fill(Bitboard::new(BOTTOM_ROW | RIGHT_COL), pcs, Direction::NorthWest)
        & occluded_fill(Bitboard::new(TOP_ROW | LEFT_COL), pcs, Direction::SouthEast);

    let line_stable_all_axes = vertical & horizontal & diag_main & diag_anti;

    let mut stable = player & (Bitboard::new(CORNER_MASK) | line_stable_all_axes);

    for _ in 0..EXPANSION_ROUNDS {
        let v_neighbor = (stable << 8) | (stable >> 8);
        let h_neighbor =
            ((stable & Bitboard::new(NOT_H_FILE)) << 1) | ((stable & Bitboard::new(NOT_A_FILE)) >> 1);
        let main_neighbor =
            ((stable & Bitboard::new(NOT_H_FILE)) << 9) | ((stable & Bitboard::new(NOT_A_FILE)) >> 9);
        let anti_neighbor =
            ((stable & Bitboard::new(NOT_A_FILE)) << 7) | ((stable & Bitboard::new(NOT_H_FILE)) >> 7);

        let candidate = player
            & (v_neighbor | vertical)
            & (h_neighbor | horizontal)
            & (main_neighbor | diag_main)
            & (anti_neighbor | diag_anti);

        let expanded = stable | candidate;
        if expanded == stable {
            break;
        }
        stable = expanded;
    }

    stable
}
