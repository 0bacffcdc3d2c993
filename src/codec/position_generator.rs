//! Position-string emission, the inverse of the parser.

use crate::board::board::Board;
use crate::board::geometry::{FILES, RANKS};

/// Serialize the placement field: ranks north to south, run-length skips
/// for empty squares, `/` between ranks and a space after the last.
///
/// Corner-zone squares are never occupied so they fold into the adjacent
/// skip runs, reproducing the `3...3` shape of the back ranks.
pub fn serialize_position(board: &Board) -> String {
    let mut out = String::new();
    for rank in (0..RANKS).rev() {
        let mut run = 0u8;
        for file in 0..FILES {
            match board.piece_at((file, rank)) {
                Some(piece) => {
                    if run > 0 {
                        out.push_str(&run.to_string());
                        run = 0;
                    }
                    out.push_str(&piece.code());
                }
                None => run += 1,
            }
        }
        if run > 0 {
            out.push_str(&run.to_string());
        }
        out.push(if rank == 0 { ' ' } else { '/' });
    }
    out
}

/// The castling-availability token: one `<owner><side>` pair per live
/// right in fixed red, blue, yellow, green order, or `-` if none remain.
pub fn castling_token(board: &Board) -> String {
    let rights = board.castling_rights();
    if rights.is_empty() {
        return "-".to_string();
    }
    let mut out = String::with_capacity(rights.len() * 2);
    for (color, side) in rights {
        out.push(color.code());
        out.push(side.code());
    }
    out
}
