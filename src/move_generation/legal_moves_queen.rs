use crate::board::bitboard::Bitboard;
use crate::board::board::Board;
use crate::board::geometry::{anti_diagonal_mask, diagonal_mask, file_mask, rank_mask};
use crate::board::types::{Color, Square};
use crate::move_generation::legal_move_shared::resolve_blockers;

/// Queen targets: all four lines, blocker-truncated, minus same-alliance
/// squares.
pub fn generate_queen_moves(board: &Board, origin: Square, color: Color) -> Bitboard {
    let rays =
        rank_mask(origin) | file_mask(origin) | diagonal_mask(origin) | anti_diagonal_mask(origin);
    resolve_blockers(origin, rays, board.occupied()) & !board.alliance_occupancy(color)
}
