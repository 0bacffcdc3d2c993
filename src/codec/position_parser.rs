//! Position-string parsing.
//!
//! The placement field lists 14 ranks from the northernmost down, ranks
//! separated by `/` and the final rank terminated by a space. A digit run
//! (one or two characters, skips reach 14) counts consecutive empty
//! squares; anything else is a two-character piece code, owner then type.
//! Any malformed input fails the whole parse, the caller never sees a
//! half-populated board.

use log::{debug, warn};

use crate::board::board::Board;
use crate::board::geometry::{on_board, FILES, RANKS};
use crate::board::types::{
    CastlingSide, Color, Piece, PieceKind, STARTING_POSITION, CASTLING_SIDES, COLORS,
};
use crate::errors::BoardError;

fn invalid(reason: impl Into<String>) -> BoardError {
    BoardError::InvalidPosition(reason.into())
}

/// Parse a placement field into a fresh board. Castling rights are granted
/// for every (color, side) still anchored: the color's king on its home
/// square and that side's rook on its home square.
pub fn parse_position(placement: &str) -> Result<Board, BoardError> {
    let mut board = build_placement(placement)?;
    let rights = anchored_rights(&board);
    board.set_castling_rights(&rights);
    debug!(
        "parsed position with {} pieces, {} castling rights",
        board.occupied().count(),
        rights.len()
    );
    Ok(board)
}

/// Like [`parse_position`] but with an explicit rights token
/// (`rKrQbKbQyKyQgKgQ`-style, `-` for none). Claimed rights that are no
/// longer anchored by king and rook on their home squares are pruned.
pub fn parse_position_with_rights(
    placement: &str,
    rights_token: &str,
) -> Result<Board, BoardError> {
    let mut board = parse_position(placement)?;
    apply_castling_token(&mut board, rights_token)?;
    Ok(board)
}

/// Revoke every right the token does not name. Rights are never re-granted:
/// a claimed right that the board no longer holds (no king/rook anchor)
/// stays revoked.
pub fn apply_castling_token(board: &mut Board, token: &str) -> Result<(), BoardError> {
    let claimed = parse_castling_token(token)?;
    let mut pruned = 0;
    for color in COLORS {
        for side in CASTLING_SIDES {
            let named = claimed.contains(&(color, side));
            if board.has_castling_right(color, side) {
                if !named {
                    board.revoke_castling_right(color, side);
                }
            } else if named {
                pruned += 1;
            }
        }
    }
    if pruned > 0 {
        warn!("pruned {pruned} claimed castling right(s) with no king/rook anchor");
    }
    Ok(())
}

/// The canonical starting board with all eight castling rights.
pub fn starting_board() -> Result<Board, BoardError> {
    parse_position(STARTING_POSITION)
}

fn build_placement(placement: &str) -> Result<Board, BoardError> {
    let mut board = Board::new();
    let mut chars = placement.chars().peekable();

    for rank in (0..RANKS).rev() {
        let mut file: i8 = 0;
        while file < FILES {
            let token = chars
                .next()
                .ok_or_else(|| invalid(format!("rank {rank} is truncated")))?;
            if let Some(first) = token.to_digit(10) {
                let mut run = first as i8;
                if let Some(second) = chars.peek().and_then(|c| c.to_digit(10)) {
                    chars.next();
                    run = run * 10 + second as i8;
                }
                if run == 0 || file + run > FILES {
                    return Err(invalid(format!(
                        "skip run of {run} overflows rank {rank} at file {file}"
                    )));
                }
                file += run;
            } else {
                let kind_code = chars
                    .next()
                    .ok_or_else(|| invalid(format!("dangling piece code '{token}'")))?;
                let piece = Piece::from_chars(token, kind_code)
                    .ok_or_else(|| invalid(format!("unknown piece code '{token}{kind_code}'")))?;
                if !on_board(file, rank) {
                    return Err(invalid(format!(
                        "piece placed in corner zone at ({file}, {rank})"
                    )));
                }
                board.place((file, rank), piece)?;
                file += 1;
            }
        }

        let expected = if rank == 0 { ' ' } else { '/' };
        match chars.next() {
            Some(c) if c == expected => {}
            other => {
                return Err(invalid(format!(
                    "rank {rank} not terminated by '{expected}', found {other:?}"
                )))
            }
        }
    }

    Ok(board)
}

/// Rights whose king and rook both still sit on their home squares.
fn anchored_rights(board: &Board) -> Vec<(Color, CastlingSide)> {
    let mut rights = Vec::new();
    for color in COLORS {
        if board.piece_at(color.king_home()) != Some(Piece::new(color, PieceKind::King)) {
            continue;
        }
        for side in CASTLING_SIDES {
            if board.piece_at(color.rook_home(side)) == Some(Piece::new(color, PieceKind::Rook)) {
                rights.push((color, side));
            }
        }
    }
    rights
}

/// Decode a castling-availability token into (color, side) pairs.
pub fn parse_castling_token(token: &str) -> Result<Vec<(Color, CastlingSide)>, BoardError> {
    if token == "-" {
        return Ok(Vec::new());
    }
    let mut rights = Vec::new();
    let mut chars = token.chars();
    while let Some(color_code) = chars.next() {
        let color = Color::from_code(color_code)
            .ok_or_else(|| invalid(format!("unknown owner code '{color_code}' in rights")))?;
        let side = match chars.next() {
            Some('K') => CastlingSide::Kingside,
            Some('Q') => CastlingSide::Queenside,
            other => {
                return Err(invalid(format!(
                    "owner '{color_code}' followed by {other:?} instead of K or Q"
                )))
            }
        };
        rights.push((color, side));
    }
    Ok(rights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::geometry::square_at;

    #[test]
    fn starting_position_parses_with_full_rights() {
        let board = starting_board().expect("canonical start string parses");
        assert_eq!(board.occupied().count(), 64);
        assert_eq!(board.castling_rights().len(), 8);

        assert!(board
            .pieces(Color::Red, PieceKind::King)
            .contains(square_at(7, 0)));
        assert_eq!(
            board.piece_at((0, 7)),
            Some(Piece::new(Color::Blue, PieceKind::King))
        );
        assert_eq!(
            board.piece_at((6, 13)),
            Some(Piece::new(Color::Yellow, PieceKind::King))
        );
        assert_eq!(
            board.piece_at((13, 6)),
            Some(Piece::new(Color::Green, PieceKind::King))
        );
        assert_eq!(board.pieces(Color::Green, PieceKind::Pawn).count(), 8);
        assert_eq!(
            board.piece_locations(Color::Red, PieceKind::Rook),
            vec![(3, 0), (10, 0)]
        );
    }

    #[test]
    fn empty_board_parses_from_all_skip_ranks() {
        let placement = "14/".repeat(13) + "14 ";
        let board = parse_position(&placement).expect("all-empty placement");
        assert!(board.occupied().is_empty());
        assert!(board.castling_rights().is_empty());
    }

    #[test]
    fn truncated_input_is_rejected() {
        assert!(matches!(
            parse_position("14/14"),
            Err(BoardError::InvalidPosition(_))
        ));
    }

    #[test]
    fn bad_rank_terminator_is_rejected() {
        // Final rank must end with a space, not a separator.
        let placement = "14/".repeat(14);
        assert!(matches!(
            parse_position(&placement),
            Err(BoardError::InvalidPosition(_))
        ));
    }

    #[test]
    fn overflowing_skip_run_is_rejected() {
        let placement = "15/".to_string() + &"14/".repeat(12) + "14 ";
        assert!(matches!(
            parse_position(&placement),
            Err(BoardError::InvalidPosition(_))
        ));
    }

    #[test]
    fn unknown_piece_code_is_rejected() {
        let placement = "3xQ10/".to_string() + &"14/".repeat(12) + "14 ";
        assert!(matches!(
            parse_position(&placement),
            Err(BoardError::InvalidPosition(_))
        ));
    }

    #[test]
    fn corner_zone_placement_is_rejected() {
        let placement = "rP13/".to_string() + &"14/".repeat(12) + "14 ";
        assert!(matches!(
            parse_position(&placement),
            Err(BoardError::InvalidPosition(_))
        ));
    }

    #[test]
    fn castling_token_round_trips_and_prunes() {
        let rights = parse_castling_token("rKrQgQ").expect("valid token");
        assert_eq!(
            rights,
            vec![
                (Color::Red, CastlingSide::Kingside),
                (Color::Red, CastlingSide::Queenside),
                (Color::Green, CastlingSide::Queenside),
            ]
        );
        assert_eq!(parse_castling_token("-").expect("none marker"), vec![]);
        assert!(parse_castling_token("rX").is_err());

        // Claiming a right with no rook behind it gets pruned.
        let board = parse_position_with_rights(STARTING_POSITION, "rK").expect("parses");
        assert_eq!(
            board.castling_rights(),
            vec![(Color::Red, CastlingSide::Kingside)]
        );

        // With red's kingside rook gone only the queenside claim survives.
        let no_rook =
            STARTING_POSITION.replace("3rRrNrBrQrKrBrNrR3 ", "3rRrNrBrQrKrBrN4 ");
        let board = parse_position_with_rights(&no_rook, "rKrQ").expect("parses");
        assert_eq!(
            board.castling_rights(),
            vec![(Color::Red, CastlingSide::Queenside)]
        );
    }

    #[test]
    fn rights_require_king_and_rook_on_home_squares() {
        // A lone red rook without its king anchors nothing.
        let placement = "14/".repeat(13) + "3rR10 ";
        let board = parse_position(&placement).expect("placement parses");
        assert!(board.castling_rights().is_empty());

        let placement = "14/".repeat(13) + "3rR3rK6 ";
        let board = parse_position(&placement).expect("placement parses");
        assert_eq!(
            board.castling_rights(),
            vec![(Color::Red, CastlingSide::Queenside)]
        );
    }
}
