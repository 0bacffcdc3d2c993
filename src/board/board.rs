//! Board state: per-color and per-kind bitboards kept in lockstep with a
//! square-indexed cell array.
//!
//! A specific piece's occupancy is `pieces(color, kind)`, the intersection
//! of one color plane and one kind plane. The cell array answers "what is
//! on this square" without scanning planes; every mutation goes through
//! [`Board::place`] / [`Board::lift`] so the two views cannot drift.

use crate::board::bitboard::Bitboard;
use crate::board::geometry::{on_board, square_at};
use crate::board::types::{
    BoardLocation, CastlingSide, Color, Piece, PieceKind, CASTLING_SIDES, COLORS,
};
use crate::errors::BoardError;

const CELLS: usize = 14 * 14;

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    colors: [Bitboard; 4],
    kinds: [Bitboard; 6],
    occupied: Bitboard,
    /// One entry per (color, side): a single bit at the rook's home square
    /// while the right is live, empty once revoked.
    castling: [Bitboard; 8],
    cells: [Option<Piece>; CELLS],
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

impl Board {
    /// An empty board with all eight castling rights set at the canonical
    /// rook home squares. The codec prunes rights the placement does not
    /// anchor.
    pub fn new() -> Board {
        let mut board = Board {
            colors: [Bitboard::EMPTY; 4],
            kinds: [Bitboard::EMPTY; 6],
            occupied: Bitboard::EMPTY,
            castling: [Bitboard::EMPTY; 8],
            cells: [None; CELLS],
        };
        for color in COLORS {
            for side in CASTLING_SIDES {
                board.grant_castling_right(color, side);
            }
        }
        board
    }

    #[inline]
    fn cell_index(location: BoardLocation) -> usize {
        let (file, rank) = location;
        rank as usize * 14 + file as usize
    }

    #[inline]
    pub fn piece_at(&self, location: BoardLocation) -> Option<Piece> {
        if !on_board(location.0, location.1) {
            return None;
        }
        self.cells[Board::cell_index(location)]
    }

    /// Put `piece` on an empty playable square.
    pub fn place(&mut self, location: BoardLocation, piece: Piece) -> Result<(), BoardError> {
        let (file, rank) = location;
        if !on_board(file, rank) {
            return Err(BoardError::OutOfBounds(file, rank));
        }
        debug_assert!(self.cells[Board::cell_index(location)].is_none());
        let square = square_at(file, rank);
        self.colors[piece.color.index()].set(square);
        self.kinds[piece.kind.index()].set(square);
        self.occupied.set(square);
        self.cells[Board::cell_index(location)] = Some(piece);
        Ok(())
    }

    /// Overwrite one cell, keeping the bitboards in sync. Returns whether
    /// the cell actually changed; writing the value already present is a
    /// no-op.
    pub fn set_cell(
        &mut self,
        location: BoardLocation,
        value: Option<Piece>,
    ) -> Result<bool, BoardError> {
        let (file, rank) = location;
        if !on_board(file, rank) {
            return Err(BoardError::OutOfBounds(file, rank));
        }
        if self.cells[Board::cell_index(location)] == value {
            return Ok(false);
        }
        if self.cells[Board::cell_index(location)].is_some() {
            self.lift(location)?;
        }
        if let Some(piece) = value {
            self.place(location, piece)?;
        }
        Ok(true)
    }

    /// Remove and return the piece on `location`.
    pub fn lift(&mut self, location: BoardLocation) -> Result<Piece, BoardError> {
        let (file, rank) = location;
        if !on_board(file, rank) {
            return Err(BoardError::OutOfBounds(file, rank));
        }
        let piece = self.cells[Board::cell_index(location)]
            .take()
            .ok_or(BoardError::EmptySquare(file, rank))?;
        let square = square_at(file, rank);
        self.colors[piece.color.index()].clear(square);
        self.kinds[piece.kind.index()].clear(square);
        self.occupied.clear(square);
        Ok(piece)
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// Unoccupied playable squares.
    #[inline]
    pub fn empty(&self) -> Bitboard {
        !self.occupied & crate::board::geometry::BOARD_MASK
    }

    #[inline]
    pub fn color_occupancy(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    #[inline]
    pub fn kind_occupancy(&self, kind: PieceKind) -> Bitboard {
        self.kinds[kind.index()]
    }

    #[inline]
    pub fn pieces(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.colors[color.index()] & self.kinds[kind.index()]
    }

    /// Occupancy of `color` and its alliance partner combined.
    #[inline]
    pub fn alliance_occupancy(&self, color: Color) -> Bitboard {
        self.colors[color.index()] | self.colors[color.ally().index()]
    }

    pub fn king_location(&self, color: Color) -> Option<BoardLocation> {
        let king = self.pieces(color, PieceKind::King);
        let square = king.bit_scan_forward().ok()?;
        Some(crate::board::geometry::location_of(square))
    }

    #[inline]
    fn right_index(color: Color, side: CastlingSide) -> usize {
        color.index() * 2 + side.index()
    }

    pub fn grant_castling_right(&mut self, color: Color, side: CastlingSide) {
        let (file, rank) = color.rook_home(side);
        self.castling[Board::right_index(color, side)] = Bitboard::from_square(square_at(file, rank));
    }

    pub fn revoke_castling_right(&mut self, color: Color, side: CastlingSide) {
        self.castling[Board::right_index(color, side)] = Bitboard::EMPTY;
    }

    pub fn revoke_all_castling_rights(&mut self, color: Color) {
        for side in CASTLING_SIDES {
            self.revoke_castling_right(color, side);
        }
    }

    #[inline]
    pub fn has_castling_right(&self, color: Color, side: CastlingSide) -> bool {
        !self.castling[Board::right_index(color, side)].is_empty()
    }

    /// Revoke every right anchored to `location`; called when a rook leaves
    /// its home square or is captured there.
    pub fn revoke_castling_rights_at(&mut self, location: BoardLocation) {
        let (file, rank) = location;
        if !on_board(file, rank) {
            return;
        }
        let square = Bitboard::from_square(square_at(file, rank));
        for entry in &mut self.castling {
            if !(*entry & square).is_empty() {
                *entry = Bitboard::EMPTY;
            }
        }
    }

    /// Grant exactly the rights named by `(color, side)` pairs, revoking the
    /// rest. Used when installing a parsed position.
    pub fn set_castling_rights(&mut self, rights: &[(Color, CastlingSide)]) {
        self.castling = [Bitboard::EMPTY; 8];
        for &(color, side) in rights {
            self.grant_castling_right(color, side);
        }
    }

    pub fn castling_rights(&self) -> Vec<(Color, CastlingSide)> {
        let mut out = Vec::new();
        for color in COLORS {
            for side in CASTLING_SIDES {
                if self.has_castling_right(color, side) {
                    out.push((color, side));
                }
            }
        }
        out
    }

    /// Squares of `color` holding any piece of `kind`, as locations. Test
    /// and rendering convenience.
    pub fn piece_locations(&self, color: Color, kind: PieceKind) -> Vec<BoardLocation> {
        let mut set = self.pieces(color, kind);
        let mut out = Vec::new();
        while let Some(square) = set.pop_lowest() {
            out.push(crate::board::geometry::location_of(square));
        }
        out
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("occupied", &self.occupied)
            .field("castling", &self.castling_rights())
            .finish()
    }
}
