use super::*;
use crate::test_support::{play, sq, state};

fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
    squares.sort();
    squares
}

#[test]
fn test_start_position_move_count() {
    let s = GameState::new_game();
    assert_eq!(legal_moves(&s).len(), 20);
    assert!(has_legal_move(&s));
}

#[test]
fn test_legal_destinations() {
    let s = GameState::new_game();
    assert_eq!(
        sorted(legal_destinations(&s, sq("e2"))),
        sorted(vec![sq("e3"), sq("e4")])
    );
    assert_eq!(
        sorted(legal_destinations(&s, sq("b1"))),
        sorted(vec![sq("a3"), sq("c3")])
    );
    assert!(legal_destinations(&s, sq("e7")).is_empty(), "not black's turn");
    assert!(legal_destinations(&s, sq("e4")).is_empty());
}

#[test]
fn test_rays_stop_at_first_piece() {
    let b = Board::standard();
    let rook = Piece::new(Color::White, PieceKind::Rook);
    assert_eq!(
        sorted(candidate_destinations(&b, sq("a1"), rook)),
        sorted(vec![sq("a2"), sq("b1")])
    );
}

#[test]
fn test_promotion_expands_to_every_choice() {
    let s = state(
        [
            "....k...", //
            "P.......", //
            "........", //
            "........", //
            "........", //
            "........", //
            "........", //
            "....K...", //
        ],
        Color::White,
    );
    let kinds: Vec<PieceKind> = legal_moves(&s)
        .into_iter()
        .filter_map(|mv| match mv.kind {
            MoveKind::Promotion { to } => Some(to),
            _ => None,
        })
        .collect();
    assert_eq!(kinds, PROMOTION_CHOICES.to_vec());
}

#[test]
fn test_special_moves_are_generated() {
    let s = state(
        [
            "r...k..r", //
            "...p....", //
            "........", //
            "....P...", //
            "........", //
            "........", //
            "........", //
            "R...K..R", //
        ],
        Color::Black,
    );
    let s = play(&s, "d7", "d5");
    let moves = legal_moves(&s);

    let castles = moves
        .iter()
        .filter(|mv| matches!(mv.kind, MoveKind::Castle { .. }))
        .count();
    assert_eq!(castles, 2);
    assert!(
        moves
            .iter()
            .any(|mv| mv.kind == MoveKind::EnPassant && mv.to == sq("d6"))
    );
}

#[test]
fn test_no_moves_when_stalemated() {
    let s = state(
        [
            "k.......", //
            "..K.....", //
            ".Q......", //
            "........", //
            "........", //
            "........", //
            "........", //
            "........", //
        ],
        Color::Black,
    );
    assert!(!has_legal_move(&s));
    assert!(legal_moves(&s).is_empty());
}
