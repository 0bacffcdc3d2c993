//! Attack, check, and checkmate queries.

use crate::board::bitboard::Bitboard;
use crate::board::board::Board;
use crate::board::geometry::{
    anti_diagonal_mask, diagonal_mask, file_mask, king_pattern, knight_pattern, location_of,
    pawn_capture_sources, rank_mask,
};
use crate::board::types::{BoardLocation, Color, PieceKind, Square, PIECE_KINDS};
use crate::errors::BoardError;
use crate::move_application::apply_move::apply_move;
use crate::move_application::undo_move::undo_move;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::legal_move_shared::resolve_blockers;

/// Whether any piece of `by` attacks `square`. Each piece class is checked
/// with its reverse pattern from the target, so nothing is generated for
/// pieces that cannot possibly reach it.
pub fn is_square_attacked(board: &Board, square: Square, by: Color) -> bool {
    let target = Bitboard::from_square(square);

    if !(pawn_capture_sources(by, target) & board.pieces(by, PieceKind::Pawn)).is_empty() {
        return true;
    }
    if !(knight_pattern(target) & board.pieces(by, PieceKind::Knight)).is_empty() {
        return true;
    }
    if !(king_pattern(target) & board.pieces(by, PieceKind::King)).is_empty() {
        return true;
    }

    let occupied = board.occupied();
    let diagonal = resolve_blockers(
        square,
        diagonal_mask(square) | anti_diagonal_mask(square),
        occupied,
    );
    let diagonal_sliders =
        board.pieces(by, PieceKind::Bishop) | board.pieces(by, PieceKind::Queen);
    if !(diagonal & diagonal_sliders).is_empty() {
        return true;
    }

    let orthogonal = resolve_blockers(square, rank_mask(square) | file_mask(square), occupied);
    let orthogonal_sliders =
        board.pieces(by, PieceKind::Rook) | board.pieces(by, PieceKind::Queen);
    !(orthogonal & orthogonal_sliders).is_empty()
}

/// If `color`'s king is attacked by either enemy, its location; `None` when
/// safe or when the king is absent (an eliminated color checks nothing).
pub fn king_in_check(board: &Board, color: Color) -> Option<BoardLocation> {
    let king = board.pieces(color, PieceKind::King).bit_scan_forward().ok()?;
    let [first, second] = color.enemies();
    if is_square_attacked(board, king, first) || is_square_attacked(board, king, second) {
        Some(location_of(king))
    } else {
        None
    }
}

/// Checkmate: the king is in check and every legal move of every piece of
/// `color`, once applied, still leaves it in check. Each candidate is
/// applied, re-tested, and undone on the same board.
pub fn is_checkmated(board: &mut Board, color: Color) -> Result<bool, BoardError> {
    if king_in_check(board, color).is_none() {
        return Ok(false);
    }

    for kind in PIECE_KINDS {
        let mut origins = board.pieces(color, kind);
        while let Some(origin_square) = origins.pop_lowest() {
            let origin = location_of(origin_square);
            let mut targets = legal_moves(board, kind, origin, color);
            while let Some(target_square) = targets.pop_lowest() {
                let record = apply_move(board, origin, location_of(target_square))?;
                let still_in_check = king_in_check(board, color).is_some();
                undo_move(board, &record)?;
                if !still_in_check {
                    return Ok(false);
                }
            }
        }
    }
    Ok(true)
}
