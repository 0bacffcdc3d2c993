use crate::board::bitboard::Bitboard;
use crate::board::board::Board;
use crate::board::geometry::{file_mask, rank_mask};
use crate::board::types::{Color, Square};
use crate::move_generation::legal_move_shared::resolve_blockers;

/// Rook targets: rank and file lines, blocker-truncated, minus
/// same-alliance squares.
pub fn generate_rook_moves(board: &Board, origin: Square, color: Color) -> Bitboard {
    let rays = rank_mask(origin) | file_mask(origin);
    resolve_blockers(origin, rays, board.occupied()) & !board.alliance_occupancy(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::geometry::square_at;
    use crate::board::types::{Piece, PieceKind};

    #[test]
    fn lone_rook_sweeps_its_full_rank_and_file() {
        let mut board = Board::new();
        board
            .place((7, 7), Piece::new(Color::Green, PieceKind::Rook))
            .expect("rook");
        let moves = generate_rook_moves(&board, square_at(7, 7), Color::Green);
        // 13 squares along the rank plus 13 along the file, origin excluded.
        assert_eq!(moves.count(), 26);
        assert!(!moves.contains(square_at(7, 7)));
    }

    #[test]
    fn single_blocker_truncates_exactly_at_its_square() {
        let mut board = Board::new();
        board
            .place((7, 7), Piece::new(Color::Green, PieceKind::Rook))
            .expect("rook");
        board
            .place((7, 3), Piece::new(Color::Red, PieceKind::Pawn))
            .expect("enemy blocker");

        let moves = generate_rook_moves(&board, square_at(7, 7), Color::Green);
        assert!(moves.contains(square_at(7, 3)));
        assert!(!moves.contains(square_at(7, 2)));
        assert!(moves.contains(square_at(7, 4)));

        // Swap the blocker for an ally: the square itself drops too.
        let mut board = Board::new();
        board
            .place((7, 7), Piece::new(Color::Green, PieceKind::Rook))
            .expect("rook");
        board
            .place((7, 3), Piece::new(Color::Blue, PieceKind::Pawn))
            .expect("ally blocker");
        let moves = generate_rook_moves(&board, square_at(7, 7), Color::Green);
        assert!(!moves.contains(square_at(7, 3)));
        assert!(!moves.contains(square_at(7, 2)));
        assert!(moves.contains(square_at(7, 4)));
    }
}
