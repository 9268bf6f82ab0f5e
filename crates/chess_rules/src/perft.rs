use crate::game::GameState;
use crate::movegen::legal_moves;

/// Pure perft node count.
/// Counts all legal move sequences of exactly `depth` plies from `state`.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(state);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|mv| perft(&state.apply_move(mv), depth - 1))
        .sum()
}
