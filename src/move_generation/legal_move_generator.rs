//! Legal-move composition: per-piece pseudo-legal geometry, alliance
//! filtering, then the pin restriction.

use crate::board::bitboard::Bitboard;
use crate::board::board::Board;
use crate::board::geometry::{on_board, square_at};
use crate::board::types::{BoardLocation, Color, Piece, PieceKind};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::pins::pin_restriction;

/// Legal target squares for a `color` piece of `kind` on `origin`.
///
/// An origin that is off the board or does not hold that exact piece
/// yields the empty set, never an error. An absolutely pinned piece is
/// confined to its king line.
pub fn legal_moves(board: &Board, kind: PieceKind, origin: BoardLocation, color: Color) -> Bitboard {
    let (file, rank) = origin;
    if !on_board(file, rank) {
        return Bitboard::EMPTY;
    }
    if board.piece_at(origin) != Some(Piece::new(color, kind)) {
        return Bitboard::EMPTY;
    }
    let square = square_at(file, rank);

    let mut moves = match kind {
        PieceKind::Pawn => generate_pawn_moves(board, square, color),
        PieceKind::Knight => generate_knight_moves(board, square, color),
        PieceKind::Bishop => generate_bishop_moves(board, square, color),
        PieceKind::Rook => generate_rook_moves(board, square, color),
        PieceKind::Queen => generate_queen_moves(board, square, color),
        PieceKind::King => generate_king_moves(board, square, color),
    };

    if let Some(line) = pin_restriction(board, color, square) {
        moves &= line;
    }
    moves
}

/// Convenience lookup when the caller only has a square: resolves the
/// occupant first, empty square means empty move set.
pub fn legal_moves_at(board: &Board, origin: BoardLocation) -> Bitboard {
    match board.piece_at(origin) {
        Some(piece) => legal_moves(board, piece.kind, origin, piece.color),
        None => Bitboard::EMPTY,
    }
}
