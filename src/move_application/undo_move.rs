//! Exact move reversal.
//!
//! The engine retains no history: the caller hands back the record it was
//! given by [`apply_move`](crate::move_application::apply_move::apply_move)
//! and the deltas are reversed symmetrically. A record that does not match
//! the last applied move silently produces a wrong board; debug builds
//! assert on the cheap mismatches.
//!
//! Rights revocation is permanent, with one exception: undoing one of the
//! eight canonical castling moves restores the right that castle cleared,
//! and only if the record says the right was still live when it cleared.

use crate::board::board::Board;
use crate::board::types::PieceKind;
use crate::errors::BoardError;
use crate::move_application::apply_move::{recognize_castling, MoveRecord};

pub fn undo_move(board: &mut Board, record: &MoveRecord) -> Result<(), BoardError> {
    if record.moved.kind == PieceKind::King {
        let captured_own_rook = record
            .captured
            .is_some_and(|p| p.color == record.moved.color && p.kind == PieceKind::Rook);
        if captured_own_rook {
            if let Some((side, squares)) =
                recognize_castling(record.moved.color, record.from, record.to)
            {
                let king = board.lift(squares.king_to)?;
                let rook = board.lift(squares.rook_to)?;
                debug_assert_eq!(king, record.moved);
                board.place(squares.king_from, king)?;
                board.place(squares.rook_from, rook)?;
                debug_assert!(record
                    .cleared_right
                    .is_none_or(|(color, cleared)| color == record.moved.color && cleared == side));
                if let Some((color, cleared)) = record.cleared_right {
                    board.grant_castling_right(color, cleared);
                }
                return Ok(());
            }
        }
    }

    let moved = board.lift(record.to)?;
    debug_assert_eq!(moved, record.moved);
    board.place(record.from, moved)?;
    if let Some(captured) = record.captured {
        board.place(record.to, captured)?;
    }
    Ok(())
}
