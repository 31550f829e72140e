//! Game-tree node counting, used as a regression fixture for move generation
//! and move resolution rather than for search correctness.

use crate::board::{apply_move, find_moves, Board};

/// Counts leaf positions reachable from `board` in exactly `depth` plies,
/// passing the turn (without consuming a ply) whenever a side has no legal
/// move.
pub fn perft(board: Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = find_moves(board.player, board.opponent);
    if moves.is_empty() {
        let passed = board.switch_players();
        if find_moves(passed.player, passed.opponent).is_empty() {
            return 1;
        }
        return perft(passed, depth);
    }

    let mut nodes = 0u64;
    let mut remaining = moves;
    while !remaining.is_empty() {
        let new_disk = remaining.extract_disk();
        remaining = remaining ^ new_disk;
        let (next_player, next_opponent) = apply_move(board.player, board.opponent, new_disk);
        let child = Board {
            player: next_player,
            opponent: next_opponent,
        };
        nodes += perft(child, depth - 1);
    }
    nodes
}
