use crate::board::bitboard::Bitboard;
use crate::board::board::Board;
use crate::board::geometry::{anti_diagonal_mask, diagonal_mask};
use crate::board::types::{Color, Square};
use crate::move_generation::legal_move_shared::resolve_blockers;

/// Bishop targets: both diagonal lines, blocker-truncated, minus
/// same-alliance squares.
pub fn generate_bishop_moves(board: &Board, origin: Square, color: Color) -> Bitboard {
    let rays = diagonal_mask(origin) | anti_diagonal_mask(origin);
    resolve_blockers(origin, rays, board.occupied()) & !board.alliance_occupancy(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::geometry::square_at;
    use crate::board::types::{Piece, PieceKind};

    #[test]
    fn bishop_stops_inclusively_on_enemies_and_before_allies() {
        let mut board = Board::new();
        board
            .place((7, 7), Piece::new(Color::Red, PieceKind::Bishop))
            .expect("bishop");
        board
            .place((10, 10), Piece::new(Color::Blue, PieceKind::Pawn))
            .expect("enemy");
        board
            .place((5, 9), Piece::new(Color::Yellow, PieceKind::Pawn))
            .expect("ally");

        let moves = generate_bishop_moves(&board, square_at(7, 7), Color::Red);
        assert!(moves.contains(square_at(10, 10)));
        assert!(!moves.contains(square_at(11, 11)));
        assert!(moves.contains(square_at(6, 8)));
        assert!(!moves.contains(square_at(5, 9)));
        assert!(!moves.contains(square_at(4, 10)));
        // The untouched directions run to the edge of the cross.
        assert!(moves.contains(square_at(3, 3)));
        assert!(moves.contains(square_at(11, 3)));
        assert!(!moves.contains(square_at(12, 2)));
    }
}
