use crate::board::bitboard::Bitboard;
use crate::board::board::Board;
use crate::board::geometry::knight_pattern;
use crate::board::types::{Color, Square};

/// Knight targets: the eight L-shaped jumps, minus same-alliance squares.
pub fn generate_knight_moves(board: &Board, origin: Square, color: Color) -> Bitboard {
    knight_pattern(Bitboard::from_square(origin)) & !board.alliance_occupancy(color)
}
