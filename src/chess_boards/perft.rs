use crate::chess_boards::game::ChessVar;
use std::collections::HashMap;

/// Leaf counts already known, keyed by position fingerprint and remaining depth.
///
/// The fingerprint covers board and side to move. Counts and outcome follow
/// from the board, so equal fingerprints mean equal subtrees.
pub type TranspositionTable = HashMap<(u64, u8), u64>;

/// Counts the leaves of the move tree `depth` plies deep. Finished games are leaves.
pub fn perft(game: &ChessVar, depth: u8) -> u64 {
    perft_with_table(game, depth, &mut TranspositionTable::new())
}

pub fn perft_with_table(game: &ChessVar, depth: u8, table: &mut TranspositionTable) -> u64 {
    if depth == 0 {
        return 1u64;
    }
    if let Some(&count) = table.get(&(game.hash(), depth)) {
        return count;
    }

    let mut node_count = 0u64;
    for mv in game.legal_moves() {
        let mut new_game = game.clone();
        if new_game.make_move(mv).is_ok() {
            node_count += perft_with_table(&new_game, depth - 1, table);
        }
    }
    table.insert((game.hash(), depth), node_count);
    node_count
}

/// Leaf count below each legal move, sorted by move text.
pub fn perft_divide(game: &ChessVar, depth: u8) -> Vec<(String, u64)> {
    let mut table = TranspositionTable::new();
    let mut result_moves = Vec::new();
    for mv in game.legal_moves() {
        let mut new_game = game.clone();
        if new_game.make_move(mv).is_ok() {
            let nodes = perft_with_table(&new_game, depth.saturating_sub(1), &mut table);
            result_moves.push((mv.as_algebraic(), nodes));
        }
    }
    result_moves.sort();
    result_moves
}
