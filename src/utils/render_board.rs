//! Terminal-oriented board renderer.
//!
//! Creates a human-readable view of the cross-shaped board for debugging,
//! tests, and diagnostics in text environments.

use crate::board::board::Board;
use crate::board::geometry::{on_board, FILES, RANKS};

const FILE_LABELS: &str = "   a  b  c  d  e  f  g  h  i  j  k  l  m  n";

/// Render the board as text, northernmost rank first. Corner zones print
/// as blanks, empty playable squares as a middle dot, occupied squares as
/// their two-character code.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str(FILE_LABELS);
    out.push('\n');

    for rank in (0..RANKS).rev() {
        out.push_str(&format!("{:>2} ", rank + 1));

        for file in 0..FILES {
            if !on_board(file, rank) {
                out.push_str("   ");
            } else {
                match board.piece_at((file, rank)) {
                    Some(piece) => {
                        out.push_str(&piece.code());
                        out.push(' ');
                    }
                    None => out.push_str(" · "),
                }
            }
        }

        out.push_str(&format!("{:>2}", rank + 1));
        out.push('\n');
    }

    out.push_str(FILE_LABELS);
    out
}
