//! Absolute-pin detection via X-ray attacks.

use crate::board::bitboard::Bitboard;
use crate::board::board::Board;
use crate::board::geometry::{
    anti_diagonal_mask, diagonal_mask, file_mask, line_through, rank_mask, ray_between,
};
use crate::board::types::{Color, PieceKind, Square};
use crate::move_generation::legal_move_shared::resolve_blockers;

/// Squares reachable from `origin` through exactly one blocker of `own`:
/// XOR of the direct blocker-resolved attack set with the set recomputed
/// after lifting the first layer of own blockers out of the occupancy.
fn xray_attacks(origin: Square, rays: Bitboard, occupied: Bitboard, own: Bitboard) -> Bitboard {
    let direct = resolve_blockers(origin, rays, occupied);
    let lifted = direct & own;
    direct ^ resolve_blockers(origin, rays, occupied & !lifted)
}

/// All pieces of `color` that are absolutely pinned to their king: every
/// own piece standing alone between the king and an enemy-alliance slider
/// of the matching line type.
pub fn absolute_pins(board: &Board, color: Color) -> Bitboard {
    let Ok(king) = board.pieces(color, PieceKind::King).bit_scan_forward() else {
        return Bitboard::EMPTY;
    };
    let occupied = board.occupied();
    let own = board.color_occupancy(color);
    let [first, second] = color.enemies();

    let orthogonal_sliders = board.pieces(first, PieceKind::Rook)
        | board.pieces(second, PieceKind::Rook)
        | board.pieces(first, PieceKind::Queen)
        | board.pieces(second, PieceKind::Queen);
    let diagonal_sliders = board.pieces(first, PieceKind::Bishop)
        | board.pieces(second, PieceKind::Bishop)
        | board.pieces(first, PieceKind::Queen)
        | board.pieces(second, PieceKind::Queen);

    let mut pinned = Bitboard::EMPTY;
    let lines = [
        (rank_mask(king) | file_mask(king), orthogonal_sliders),
        (
            diagonal_mask(king) | anti_diagonal_mask(king),
            diagonal_sliders,
        ),
    ];
    for (rays, sliders) in lines {
        let mut pinners = xray_attacks(king, rays, occupied, own) & sliders;
        while let Some(pinner) = pinners.pop_lowest() {
            pinned |= ray_between(king, pinner) & own;
        }
    }
    pinned
}

/// If the piece on `origin` is pinned, the line it is confined to: the
/// full king line through the origin, king square excluded. `None` means
/// the piece moves freely.
pub fn pin_restriction(board: &Board, color: Color, origin: Square) -> Option<Bitboard> {
    if !absolute_pins(board, color).contains(origin) {
        return None;
    }
    let king = board
        .pieces(color, PieceKind::King)
        .bit_scan_forward()
        .ok()?;
    Some(line_through(king, origin))
}
