use crate::board::bitboard::Bitboard;
use crate::board::board::Board;
use crate::board::geometry::{pawn_capture_pattern, pawn_start_band, shift_toward, BOARD_MASK};
use crate::board::types::{Color, Square};

/// Pawn targets: single push onto an empty forward square, double push
/// from the color's starting band when both squares ahead are empty, and
/// diagonal captures onto enemy-alliance pieces.
pub fn generate_pawn_moves(board: &Board, origin: Square, color: Color) -> Bitboard {
    let origin_bb = Bitboard::from_square(origin);
    let empty = board.empty();

    let single = shift_toward(color, origin_bb, 1) & BOARD_MASK & empty;
    let mut moves = single;
    if !single.is_empty() && !(origin_bb & pawn_start_band(color)).is_empty() {
        moves |= shift_toward(color, origin_bb, 2) & BOARD_MASK & empty;
    }

    let [first, second] = color.enemies();
    let enemy = board.color_occupancy(first) | board.color_occupancy(second);
    moves | (pawn_capture_pattern(color, origin_bb) & enemy)
}

/// Attacks-only mode: the diagonal attack squares regardless of occupancy.
/// Check detection asks this, never the push set.
pub fn pawn_attacks(origin: Square, color: Color) -> Bitboard {
    pawn_capture_pattern(color, Bitboard::from_square(origin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::geometry::square_at;
    use crate::board::types::{Piece, PieceKind};
    use crate::codec::position_parser::starting_board;

    #[test]
    fn starting_pawn_has_single_and_double_push() {
        let board = starting_board().expect("start string parses");
        let moves = generate_pawn_moves(&board, square_at(5, 1), Color::Red);
        assert_eq!(moves.count(), 2);
        assert!(moves.contains(square_at(5, 2)));
        assert!(moves.contains(square_at(5, 3)));

        let moves = generate_pawn_moves(&board, square_at(12, 8), Color::Green);
        assert_eq!(moves.count(), 2);
        assert!(moves.contains(square_at(11, 8)));
        assert!(moves.contains(square_at(10, 8)));
    }

    #[test]
    fn blocked_single_push_also_kills_the_double() {
        let mut board = Board::new();
        board
            .place((5, 1), Piece::new(Color::Red, PieceKind::Pawn))
            .expect("pawn");
        board
            .place((5, 2), Piece::new(Color::Blue, PieceKind::Pawn))
            .expect("blocker");
        let moves = generate_pawn_moves(&board, square_at(5, 1), Color::Red);
        assert!(moves.is_empty());

        // Blocking only the far square leaves the single push.
        let mut board = Board::new();
        board
            .place((5, 1), Piece::new(Color::Red, PieceKind::Pawn))
            .expect("pawn");
        board
            .place((5, 3), Piece::new(Color::Blue, PieceKind::Pawn))
            .expect("far blocker");
        let moves = generate_pawn_moves(&board, square_at(5, 1), Color::Red);
        assert_eq!(moves.count(), 1);
        assert!(moves.contains(square_at(5, 2)));
    }

    #[test]
    fn pawn_captures_enemies_but_never_allies() {
        let mut board = Board::new();
        board
            .place((5, 5), Piece::new(Color::Red, PieceKind::Pawn))
            .expect("pawn");
        board
            .place((4, 6), Piece::new(Color::Blue, PieceKind::Pawn))
            .expect("enemy on one diagonal");
        board
            .place((6, 6), Piece::new(Color::Yellow, PieceKind::Pawn))
            .expect("ally on the other");

        let moves = generate_pawn_moves(&board, square_at(5, 5), Color::Red);
        assert!(moves.contains(square_at(4, 6)));
        assert!(!moves.contains(square_at(6, 6)));
        assert!(moves.contains(square_at(5, 6)));
        // Off the starting band, no double push.
        assert!(!moves.contains(square_at(5, 7)));
    }

    #[test]
    fn attacks_only_mode_ignores_occupancy() {
        let attacks = pawn_attacks(square_at(5, 5), Color::Yellow);
        assert_eq!(attacks.count(), 2);
        assert!(attacks.contains(square_at(4, 4)));
        assert!(attacks.contains(square_at(6, 4)));
    }
}
