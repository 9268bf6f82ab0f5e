use super::*;
use crate::test_support::{board, sq};

#[test]
fn test_rook_stops_at_first_piece() {
    let b = board([
        "....k...", //
        "........", //
        "...p....", //
        "........", //
        ".N.R....", //
        "........", //
        "........", //
        "....K...", //
    ]);
    let rook = |to: &str| rook_move(&b, sq("d4"), sq(to), Color::White);

    assert!(rook("d5"));
    assert!(rook("d6"), "capture of the blocking enemy pawn");
    assert!(!rook("d7"), "path blocked by d6");
    assert!(rook("c4"));
    assert!(!rook("b4"), "own knight");
    assert!(!rook("a4"), "behind own knight");
    assert!(rook("h4"));
    assert!(rook("d1"));
    assert!(!rook("e5"));
    assert!(!rook("d4"));
}

#[test]
fn test_bishop_needs_clear_diagonal() {
    let b = board([
        "....k...", //
        "........", //
        "........", //
        "........", //
        "........", //
        "....P...", //
        "........", //
        "..B.K...", //
    ]);
    let bishop = |to: &str| bishop_move(&b, sq("c1"), sq(to), Color::White);

    assert!(bishop("d2"));
    assert!(!bishop("e3"), "own pawn");
    assert!(!bishop("f4"), "blocked by e3");
    assert!(bishop("a3"));
    assert!(!bishop("c3"));
}

#[test]
fn test_bishop_captures_enemy_only_at_end_of_path() {
    let b = board([
        "....k...", //
        "........", //
        "........", //
        "........", //
        "........", //
        "....p...", //
        "........", //
        "..B.K...", //
    ]);
    assert!(bishop_move(&b, sq("c1"), sq("e3"), Color::White));
    assert!(!bishop_move(&b, sq("c1"), sq("f4"), Color::White));
}

#[test]
fn test_queen_combines_rook_and_bishop() {
    let b = board([
        "....k...", //
        "........", //
        "........", //
        "........", //
        "...Q....", //
        "........", //
        "........", //
        "....K...", //
    ]);
    let queen = |to: &str| queen_move(&b, sq("d4"), sq(to), Color::White);

    assert!(queen("h8"));
    assert!(queen("a4"));
    assert!(queen("d8"));
    assert!(queen("a1"));
    assert!(!queen("e6"));
    assert!(!queen("f5"));
}

#[test]
fn test_knight_jumps_over_pieces() {
    let b = Board::standard();
    assert!(knight_move(&b, sq("b1"), sq("c3"), Color::White));
    assert!(knight_move(&b, sq("b1"), sq("a3"), Color::White));
    assert!(!knight_move(&b, sq("b1"), sq("d2"), Color::White));
    assert!(!knight_move(&b, sq("b1"), sq("b3"), Color::White));
}

#[test]
fn test_king_keeps_distance_from_enemy_king() {
    let b = board([
        "........", //
        "........", //
        "....k...", //
        "........", //
        "....K...", //
        "........", //
        "........", //
        "........", //
    ]);
    assert!(!king_move(&b, sq("e4"), sq("e5"), Color::White));
    assert!(!king_move(&b, sq("e4"), sq("d5"), Color::White));
    assert!(king_move(&b, sq("e4"), sq("d4"), Color::White));
    assert!(king_move(&b, sq("e4"), sq("e3"), Color::White));
    assert!(!king_move(&b, sq("e4"), sq("e2"), Color::White), "two steps");
}

#[test]
fn test_king_never_steps_onto_attacked_square() {
    let b = board([
        ".......k", //
        "........", //
        "........", //
        "r.......", //
        "....K...", //
        "........", //
        "........", //
        "........", //
    ]);
    assert!(!king_move(&b, sq("e4"), sq("d5"), Color::White));
    assert!(!king_move(&b, sq("e4"), sq("e5"), Color::White));
    assert!(king_move(&b, sq("e4"), sq("d4"), Color::White));
    assert!(king_move(&b, sq("e4"), sq("f3"), Color::White));
}

#[test]
fn test_king_cannot_retreat_along_checking_line() {
    let b = board([
        "k...r...", //
        "........", //
        "........", //
        "........", //
        "....K...", //
        "........", //
        "........", //
        "........", //
    ]);
    assert!(!king_move(&b, sq("e4"), sq("e3"), Color::White));
    assert!(king_move(&b, sq("e4"), sq("d4"), Color::White));
}

#[test]
fn test_pawn_pushes() {
    let b = Board::standard();
    let pawn = |from: &str, to: &str, c| pawn_move(&b, sq(from), sq(to), c);

    assert!(pawn("e2", "e3", Color::White));
    assert!(pawn("e2", "e4", Color::White));
    assert!(!pawn("e2", "e5", Color::White));
    assert!(!pawn("e2", "e1", Color::White), "backwards");
    assert!(!pawn("e2", "d3", Color::White), "diagonal into empty square");

    assert!(pawn("d7", "d6", Color::Black));
    assert!(pawn("d7", "d5", Color::Black));
    assert!(!pawn("d7", "d8", Color::Black));
}

#[test]
fn test_pawn_blocked_and_captures() {
    let b = board([
        "....k...", //
        "........", //
        "........", //
        "........", //
        ".......P", //
        "...bn...", //
        "....P...", //
        "....K...", //
    ]);
    assert!(!pawn_move(&b, sq("e2"), sq("e3"), Color::White), "blocked");
    assert!(!pawn_move(&b, sq("e2"), sq("e4"), Color::White), "jump over blocker");
    assert!(pawn_move(&b, sq("e2"), sq("d3"), Color::White));
    assert!(!pawn_move(&b, sq("e2"), sq("f3"), Color::White));
    assert!(pawn_move(&b, sq("h4"), sq("h5"), Color::White));
    assert!(!pawn_move(&b, sq("h4"), sq("h6"), Color::White), "double step only from start");
}

#[test]
fn test_no_validator_captures_own_piece() {
    let b = Board::standard();
    for from in Square::all() {
        for to in Square::all() {
            if let Some(own) = b.piece_at(to)
                && b.piece_at(from).is_some_and(|pc| pc.color == own.color)
            {
                assert!(!is_geometrically_legal(&b, from, to), "{from}{to}");
            }
        }
    }
}

#[test]
fn test_empty_source_is_never_legal() {
    let b = Board::standard();
    assert!(!is_geometrically_legal(&b, sq("e4"), sq("e5")));
}
