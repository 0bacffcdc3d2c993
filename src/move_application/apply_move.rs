//! Move application.
//!
//! Mutates the board for one move and reports everything the caller needs
//! to undo it or redraw: the moved piece, the captured piece if any, and
//! the set of squares whose contents changed. The engine keeps no history;
//! the record is the caller's to retain.

use log::trace;

use crate::board::board::Board;
use crate::board::geometry::{ray_between, square_at};
use crate::board::types::{
    castling_squares, BoardLocation, CastlingSide, CastlingSquares, Color, Piece, PieceKind,
    CASTLING_SIDES, COLORS,
};
use crate::errors::BoardError;

/// The observable facts of one applied move, sufficient for an exact undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub moved: Piece,
    pub captured: Option<Piece>,
    /// The castling right this move cleared while it was still live; only
    /// a castle sets it, and undo re-grants exactly this right. Rights
    /// lost to ordinary king or rook moves stay lost.
    pub cleared_right: Option<(Color, CastlingSide)>,
    /// Every square whose contents changed, for display collaborators.
    pub changed: Vec<BoardLocation>,
}

/// Recognize `(color, from, to)` as one of the eight canonical castling
/// moves: the king's home square to one of its rook home squares.
pub fn recognize_castling(
    color: Color,
    from: BoardLocation,
    to: BoardLocation,
) -> Option<(CastlingSide, CastlingSquares)> {
    if from != color.king_home() {
        return None;
    }
    CASTLING_SIDES
        .into_iter()
        .find(|&side| to == color.rook_home(side))
        .map(|side| (side, castling_squares(color, side)))
}

/// Apply the move `from -> to`.
///
/// A king landing on its own color's rook is castling: both pieces
/// relocate in one compound update and that side's right is cleared. Any
/// other king move off the home square clears both of the color's rights;
/// a rook leaving a rook home square, or captured on one, clears the
/// matching single right.
pub fn apply_move(
    board: &mut Board,
    from: BoardLocation,
    to: BoardLocation,
) -> Result<MoveRecord, BoardError> {
    let moved = board
        .piece_at(from)
        .ok_or(BoardError::EmptySquare(from.0, from.1))?;
    let target = board.piece_at(to);

    if moved.kind == PieceKind::King {
        if let Some(rook) = target.filter(|p| p.color == moved.color && p.kind == PieceKind::Rook)
        {
            return apply_castling(board, moved, rook, from, to);
        }
    }
    if target.is_some_and(|p| moved.color.is_ally(p.color)) {
        return Err(BoardError::IllegalMove(from.0, from.1, to.0, to.1));
    }

    let captured = match target {
        Some(_) => {
            board.revoke_castling_rights_at(to);
            Some(board.lift(to)?)
        }
        None => None,
    };
    board.lift(from)?;
    board.place(to, moved)?;

    if moved.kind == PieceKind::King && from == moved.color.king_home() {
        board.revoke_all_castling_rights(moved.color);
    }
    if moved.kind == PieceKind::Rook {
        board.revoke_castling_rights_at(from);
    }

    trace!("applied {:?} {from:?} -> {to:?}", moved.kind);
    Ok(MoveRecord {
        from,
        to,
        moved,
        captured,
        cleared_right: None,
        changed: vec![from, to],
    })
}

fn apply_castling(
    board: &mut Board,
    king: Piece,
    rook: Piece,
    from: BoardLocation,
    to: BoardLocation,
) -> Result<MoveRecord, BoardError> {
    let Some((side, squares)) = recognize_castling(king.color, from, to) else {
        return Err(BoardError::IllegalMove(from.0, from.1, to.0, to.1));
    };

    // Both landing squares lie strictly between king and rook; any piece
    // there makes the compound relocation impossible.
    let king_square = square_at(squares.king_from.0, squares.king_from.1);
    let rook_square = square_at(squares.rook_from.0, squares.rook_from.1);
    if !(ray_between(king_square, rook_square) & board.occupied()).is_empty() {
        return Err(BoardError::IllegalMove(from.0, from.1, to.0, to.1));
    }

    let cleared_right = board
        .has_castling_right(king.color, side)
        .then_some((king.color, side));
    board.lift(squares.king_from)?;
    board.lift(squares.rook_from)?;
    board.place(squares.king_to, king)?;
    board.place(squares.rook_to, rook)?;
    board.revoke_castling_right(king.color, side);

    trace!("castled {:?} {side:?}", king.color);
    Ok(MoveRecord {
        from,
        to,
        moved: king,
        captured: Some(rook),
        cleared_right,
        changed: vec![
            squares.king_from,
            squares.rook_from,
            squares.king_to,
            squares.rook_to,
        ],
    })
}

/// Color whose king occupies no square any more, if any. Helper for
/// orchestrators tracking elimination.
pub fn missing_kings(board: &Board) -> Vec<Color> {
    COLORS
        .into_iter()
        .filter(|&color| board.pieces(color, PieceKind::King).is_empty())
        .collect()
}
