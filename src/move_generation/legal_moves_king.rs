use crate::board::bitboard::Bitboard;
use crate::board::board::Board;
use crate::board::geometry::{king_pattern, location_of, ray_between, square_at};
use crate::board::types::{castling_squares, Color, Square, CASTLING_SIDES};
use crate::move_generation::legal_move_checks::is_square_attacked;

/// King targets: the eight neighbors minus same-alliance squares, plus the
/// castling destinations.
///
/// A castling move is encoded as the king landing on its own rook's home
/// square, so those squares bypass the ally filter. A right is offered
/// only while the king stands on its home square, is not in check, and no
/// piece of any color stands between king and rook; the slide and both
/// landing squares must be clear for the compound relocation.
pub fn generate_king_moves(board: &Board, origin: Square, color: Color) -> Bitboard {
    let mut moves =
        king_pattern(Bitboard::from_square(origin)) & !board.alliance_occupancy(color);

    if location_of(origin) != color.king_home() {
        return moves;
    }
    let [first, second] = color.enemies();
    if is_square_attacked(board, origin, first) || is_square_attacked(board, origin, second) {
        return moves;
    }

    for side in CASTLING_SIDES {
        if !board.has_castling_right(color, side) {
            continue;
        }
        let squares = castling_squares(color, side);
        let (rook_file, rook_rank) = squares.rook_from;
        let rook_square = square_at(rook_file, rook_rank);
        let path = ray_between(origin, rook_square);
        if (path & board.occupied()).is_empty() {
            moves |= Bitboard::from_square(rook_square);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::{CastlingSide, Piece, PieceKind};
    use crate::codec::position_parser::{parse_position, starting_board};

    #[test]
    fn king_steps_exclude_alliance_squares() {
        let mut board = Board::new();
        board
            .place((7, 7), Piece::new(Color::Green, PieceKind::King))
            .expect("king");
        board
            .place((7, 8), Piece::new(Color::Blue, PieceKind::Pawn))
            .expect("ally");
        board
            .place((8, 8), Piece::new(Color::Red, PieceKind::Pawn))
            .expect("enemy");
        let moves = generate_king_moves(&board, square_at(7, 7), Color::Green);
        assert_eq!(moves.count(), 7);
        assert!(!moves.contains(square_at(7, 8)));
        assert!(moves.contains(square_at(8, 8)));
    }

    #[test]
    fn no_castling_offer_while_the_back_rank_is_crowded() {
        let board = starting_board().expect("start string parses");
        let moves = generate_king_moves(&board, square_at(7, 0), Color::Red);
        assert!(moves.is_empty());
    }

    #[test]
    fn cleared_path_offers_the_rook_square() {
        // Red back rank with everything between king and rooks removed.
        let placement = "3yRyNyByKyQyByNyR3/3yPyPyPyPyPyPyPyP3/14/\
                         bRbP10gPgR/bNbP10gPgN/bBbP10gPgB/bKbP10gPgQ/\
                         bQbP10gPgK/bBbP10gPgB/bNbP10gPgN/bRbP10gPgR/\
                         14/3rPrPrPrPrPrPrPrP3/3rR3rK2rR3 ";
        let board = parse_position(placement).expect("placement parses");
        assert!(board.has_castling_right(Color::Red, CastlingSide::Kingside));
        assert!(board.has_castling_right(Color::Red, CastlingSide::Queenside));

        let moves = generate_king_moves(&board, square_at(7, 0), Color::Red);
        assert!(moves.contains(square_at(10, 0)));
        assert!(moves.contains(square_at(3, 0)));
        assert!(moves.contains(square_at(6, 0)));
        assert!(moves.contains(square_at(8, 0)));
    }

    #[test]
    fn any_piece_on_the_path_blocks_the_castle() {
        // Blue knight parked between red king and kingside rook.
        let placement = "14/".repeat(13) + "3rR3rKbN1rR3 ";
        let board = parse_position(&placement).expect("placement parses");
        assert!(board.has_castling_right(Color::Red, CastlingSide::Kingside));

        let moves = generate_king_moves(&board, square_at(7, 0), Color::Red);
        assert!(!moves.contains(square_at(10, 0)));
        assert!(moves.contains(square_at(3, 0)));
    }

    #[test]
    fn own_color_on_the_path_blocks_that_side_only() {
        let placement = "3yRyNyByKyQyByNyR3/3yPyPyPyPyPyPyPyP3/14/\
                         bRbP10gPgR/bNbP10gPgN/bBbP10gPgB/bKbP10gPgQ/\
                         bQbP10gPgK/bBbP10gPgB/bNbP10gPgN/bRbP10gPgR/\
                         14/3rPrPrPrPrPrPrPrP3/3rR1rB1rK2rR3 ";
        let board = parse_position(placement).expect("placement parses");
        let moves = generate_king_moves(&board, square_at(7, 0), Color::Red);
        assert!(moves.contains(square_at(10, 0)));
        assert!(!moves.contains(square_at(3, 0)));
    }

    #[test]
    fn no_castling_offer_while_in_check() {
        let placement = "14/".repeat(10) + "7bR6/14/14/3rR3rK2rR3 ";
        let board = parse_position(&placement).expect("placement parses");
        assert!(board.has_castling_right(Color::Red, CastlingSide::Kingside));
        let moves = generate_king_moves(&board, square_at(7, 0), Color::Red);
        assert!(!moves.contains(square_at(10, 0)));
        assert!(!moves.contains(square_at(3, 0)));
        // Ordinary steps are still offered; full legality under check is
        // the checkmate test's concern.
        assert!(moves.contains(square_at(6, 0)));
    }
}
