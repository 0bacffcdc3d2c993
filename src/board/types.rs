//! Core type vocabulary for the four-player board.
//!
//! Colors, piece kinds, castling sides, and the canonical home-square and
//! castling geometry shared by the codec, the move generator, and the move
//! applier.

/// A playable square addressed as (file, rank), both in `0..14`.
pub type BoardLocation = (i8, i8);

/// Index into the padded 16x16 embedding: `(rank + 1) * 16 + (file + 1)`.
pub type Square = u8;

/// The four players. {Red, Yellow} are allied against {Blue, Green}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
    Yellow,
    Green,
}

pub const COLORS: [Color; 4] = [Color::Red, Color::Blue, Color::Yellow, Color::Green];

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Yellow => 2,
            Color::Green => 3,
        }
    }

    /// Owner code used by the position-exchange format.
    #[inline]
    pub const fn code(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Blue => 'b',
            Color::Yellow => 'y',
            Color::Green => 'g',
        }
    }

    #[inline]
    pub const fn from_code(code: char) -> Option<Color> {
        match code {
            'r' => Some(Color::Red),
            'b' => Some(Color::Blue),
            'y' => Some(Color::Yellow),
            'g' => Some(Color::Green),
            _ => None,
        }
    }

    /// The partner color in the fixed 2-vs-2 alliance.
    #[inline]
    pub const fn ally(self) -> Color {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
            Color::Blue => Color::Green,
            Color::Green => Color::Blue,
        }
    }

    /// Both members of the opposing alliance.
    #[inline]
    pub const fn enemies(self) -> [Color; 2] {
        match self {
            Color::Red | Color::Yellow => [Color::Blue, Color::Green],
            Color::Blue | Color::Green => [Color::Red, Color::Yellow],
        }
    }

    /// "Friendly" means same alliance, not same color.
    #[inline]
    pub const fn is_ally(self, other: Color) -> bool {
        matches!(
            (self, other),
            (Color::Red | Color::Yellow, Color::Red | Color::Yellow)
                | (Color::Blue | Color::Green, Color::Blue | Color::Green)
        )
    }

    /// Home square of this color's king.
    #[inline]
    pub const fn king_home(self) -> BoardLocation {
        match self {
            Color::Red => (7, 0),
            Color::Blue => (0, 7),
            Color::Yellow => (6, 13),
            Color::Green => (13, 6),
        }
    }

    /// Home square of this color's rook on the given side.
    #[inline]
    pub const fn rook_home(self, side: CastlingSide) -> BoardLocation {
        match (self, side) {
            (Color::Red, CastlingSide::Kingside) => (10, 0),
            (Color::Red, CastlingSide::Queenside) => (3, 0),
            (Color::Blue, CastlingSide::Kingside) => (0, 10),
            (Color::Blue, CastlingSide::Queenside) => (0, 3),
            (Color::Yellow, CastlingSide::Kingside) => (3, 13),
            (Color::Yellow, CastlingSide::Queenside) => (10, 13),
            (Color::Green, CastlingSide::Kingside) => (13, 3),
            (Color::Green, CastlingSide::Queenside) => (13, 10),
        }
    }
}

/// Piece kind (color is represented separately; a specific piece's occupancy
/// is the AND of its color and kind bitboards).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

pub const PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Type code used by the position-exchange format.
    #[inline]
    pub const fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[inline]
    pub const fn from_code(code: char) -> Option<PieceKind> {
        match code {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A colored piece, the value stored in the board's cell array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// The two-character cell code, e.g. "rK".
    pub fn code(self) -> String {
        let mut out = String::with_capacity(2);
        out.push(self.color.code());
        out.push(self.kind.code());
        out
    }

    #[inline]
    pub const fn from_chars(color_code: char, kind_code: char) -> Option<Piece> {
        match (Color::from_code(color_code), PieceKind::from_code(kind_code)) {
            (Some(color), Some(kind)) => Some(Piece { color, kind }),
            _ => None,
        }
    }
}

/// Which of a color's two rooks a castling right refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

pub const CASTLING_SIDES: [CastlingSide; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];

impl CastlingSide {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastlingSide::Kingside => 0,
            CastlingSide::Queenside => 1,
        }
    }

    #[inline]
    pub const fn code(self) -> char {
        match self {
            CastlingSide::Kingside => 'K',
            CastlingSide::Queenside => 'Q',
        }
    }
}

/// The four squares involved in one castling move. `rook_from` doubles as the
/// king's requested destination: castling is encoded as the king landing on
/// its own rook's square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingSquares {
    pub king_from: BoardLocation,
    pub rook_from: BoardLocation,
    pub king_to: BoardLocation,
    pub rook_to: BoardLocation,
}

/// Landing squares for a castling move, derived from the king-to-rook offset:
/// magnitude 3 is kingside, 4 is queenside, and the sign along the shared
/// axis picks the slide direction. The king ends two squares toward the rook
/// and the rook lands on the square the king crossed.
pub const fn castling_squares(color: Color, side: CastlingSide) -> CastlingSquares {
    let king_from = color.king_home();
    let rook_from = color.rook_home(side);
    let (king_file, king_rank) = king_from;
    let (rook_file, rook_rank) = rook_from;

    let (king_to, rook_to) = if king_rank == rook_rank {
        let delta = rook_file - king_file;
        let (king_to_file, rook_to_file) = match side {
            CastlingSide::Kingside if delta > 0 => (rook_file - 1, king_file + 1),
            CastlingSide::Kingside => (rook_file + 1, king_file - 1),
            CastlingSide::Queenside if delta < 0 => (rook_file + 2, king_file - 1),
            CastlingSide::Queenside => (rook_file - 2, king_file + 1),
        };
        ((king_to_file, king_rank), (rook_to_file, king_rank))
    } else {
        let delta = rook_rank - king_rank;
        let (king_to_rank, rook_to_rank) = match side {
            CastlingSide::Kingside if delta > 0 => (rook_rank - 1, king_rank + 1),
            CastlingSide::Kingside => (rook_rank + 1, king_rank - 1),
            CastlingSide::Queenside if delta < 0 => (rook_rank + 2, king_rank - 1),
            CastlingSide::Queenside => (rook_rank - 2, king_rank + 1),
        };
        ((king_file, king_to_rank), (king_file, rook_to_rank))
    };

    CastlingSquares {
        king_from,
        rook_from,
        king_to,
        rook_to,
    }
}

/// Canonical starting position: the placement field of the four-player FEN,
/// ranks listed north (yellow's back rank) to south, trailing space after
/// the final rank.
pub const STARTING_POSITION: &str = "3yRyNyByKyQyByNyR3/3yPyPyPyPyPyPyPyP3/14/\
                                     bRbP10gPgR/bNbP10gPgN/bBbP10gPgB/bKbP10gPgQ/\
                                     bQbP10gPgK/bBbP10gPgB/bNbP10gPgN/bRbP10gPgR/\
                                     14/3rPrPrPrPrPrPrPrP3/3rRrNrBrQrKrBrNrR3 ";
