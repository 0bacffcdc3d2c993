//! Square embedding and bit-pattern geometry.
//!
//! The 14x14 cross-shaped board is embedded in a 16x16 address space with a
//! one-square border on every side, so directional shifts can never wrap a
//! bit onto an adjacent row. Line masks are produced by shifting a single
//! canonical full-board line, not by per-square tables.

use crate::board::bitboard::Bitboard;
use crate::board::types::{BoardLocation, Color, Square};

pub const FILES: i8 = 14;
pub const RANKS: i8 = 14;

/// Width of one embedded row.
const GRID: u32 = 16;

#[inline]
pub const fn square_at(file: i8, rank: i8) -> Square {
    ((rank + 1) as u8) * 16 + (file + 1) as u8
}

#[inline]
pub const fn file_of(square: Square) -> i8 {
    (square % 16) as i8 - 1
}

#[inline]
pub const fn rank_of(square: Square) -> i8 {
    (square / 16) as i8 - 1
}

#[inline]
pub const fn location_of(square: Square) -> BoardLocation {
    (file_of(square), rank_of(square))
}

/// Whether (file, rank) is one of the 160 playable squares: inside the
/// 14x14 extent and outside the four 3x3 corner zones.
#[inline]
pub const fn on_board(file: i8, rank: i8) -> bool {
    if file < 0 || file >= FILES || rank < 0 || rank >= RANKS {
        return false;
    }
    let corner = (file < 3 || file > 10) && (rank < 3 || rank > 10);
    !corner
}

const fn generate_board_mask() -> Bitboard {
    let mut mask = Bitboard::EMPTY;
    let mut rank = 0i8;
    while rank < RANKS {
        let mut file = 0i8;
        while file < FILES {
            if on_board(file, rank) {
                mask = mask.with_square(square_at(file, rank));
            }
            file += 1;
        }
        rank += 1;
    }
    mask
}

/// All playable squares.
pub const BOARD_MASK: Bitboard = generate_board_mask();

// Canonical lines through the embedded origin corner; every concrete line
// mask is one of these shifted by a whole number of rows or columns.

const fn generate_rank_line() -> Bitboard {
    let mut line = Bitboard::EMPTY;
    let mut col = 0u8;
    while col < 16 {
        line = line.with_square(col);
        col += 1;
    }
    line
}

const fn generate_file_line() -> Bitboard {
    let mut line = Bitboard::EMPTY;
    let mut row = 0u8;
    while row < 16 {
        line = line.with_square(row * 16);
        row += 1;
    }
    line
}

const fn generate_main_diagonal() -> Bitboard {
    let mut line = Bitboard::EMPTY;
    let mut step = 0u16;
    while step < 16 {
        line = line.with_square((step * 17) as Square);
        step += 1;
    }
    line
}

const fn generate_anti_diagonal() -> Bitboard {
    let mut line = Bitboard::EMPTY;
    let mut step = 0u16;
    while step < 16 {
        line = line.with_square((step * 15 + 15) as Square);
        step += 1;
    }
    line
}

const RANK_LINE: Bitboard = generate_rank_line();
const FILE_LINE: Bitboard = generate_file_line();
const MAIN_DIAGONAL: Bitboard = generate_main_diagonal();
const ANTI_DIAGONAL: Bitboard = generate_anti_diagonal();

const fn generate_column_span(min_col: u8, max_col: u8) -> Bitboard {
    let mut mask = Bitboard::EMPTY;
    let mut row = 0u8;
    while row < 16 {
        let mut col = min_col;
        while col <= max_col {
            mask = mask.with_square(row * 16 + col);
            col += 1;
        }
        row += 1;
    }
    mask
}

const fn generate_east_guards() -> [Bitboard; 16] {
    let mut guards = [Bitboard::EMPTY; 16];
    let mut steps = 0u8;
    while steps < 16 {
        guards[steps as usize] = generate_column_span(0, 15 - steps);
        steps += 1;
    }
    guards
}

const fn generate_west_guards() -> [Bitboard; 16] {
    let mut guards = [Bitboard::EMPTY; 16];
    let mut steps = 0u8;
    while steps < 16 {
        guards[steps as usize] = generate_column_span(steps, 15);
        steps += 1;
    }
    guards
}

/// Edge masks keeping an eastward shift of `n` columns from wrapping.
const EAST_GUARDS: [Bitboard; 16] = generate_east_guards();
/// Edge masks keeping a westward shift of `n` columns from wrapping.
const WEST_GUARDS: [Bitboard; 16] = generate_west_guards();

// The eight directional shifts. North is toward higher ranks (yellow's
// side), east toward higher files (green's side).

#[inline]
pub fn shift_north(bb: Bitboard, steps: u32) -> Bitboard {
    bb << (GRID * steps)
}

#[inline]
pub fn shift_south(bb: Bitboard, steps: u32) -> Bitboard {
    bb >> (GRID * steps)
}

#[inline]
pub fn shift_east(bb: Bitboard, steps: u32) -> Bitboard {
    (bb & EAST_GUARDS[steps as usize]) << steps
}

#[inline]
pub fn shift_west(bb: Bitboard, steps: u32) -> Bitboard {
    (bb & WEST_GUARDS[steps as usize]) >> steps
}

#[inline]
pub fn shift_north_east(bb: Bitboard, steps: u32) -> Bitboard {
    (bb & EAST_GUARDS[steps as usize]) << ((GRID + 1) * steps)
}

#[inline]
pub fn shift_south_west(bb: Bitboard, steps: u32) -> Bitboard {
    (bb & WEST_GUARDS[steps as usize]) >> ((GRID + 1) * steps)
}

#[inline]
pub fn shift_north_west(bb: Bitboard, steps: u32) -> Bitboard {
    (bb & WEST_GUARDS[steps as usize]) << ((GRID - 1) * steps)
}

#[inline]
pub fn shift_south_east(bb: Bitboard, steps: u32) -> Bitboard {
    (bb & EAST_GUARDS[steps as usize]) >> ((GRID - 1) * steps)
}

// Line masks: every square sharing the line with the origin, origin
// excluded, restricted to the playable board.

pub fn rank_mask(square: Square) -> Bitboard {
    let row = square as u32 / GRID;
    ((RANK_LINE << (GRID * row)) ^ Bitboard::from_square(square)) & BOARD_MASK
}

pub fn file_mask(square: Square) -> Bitboard {
    let col = square as u32 % GRID;
    ((FILE_LINE << col) ^ Bitboard::from_square(square)) & BOARD_MASK
}

pub fn diagonal_mask(square: Square) -> Bitboard {
    let col = (square as i32) % 16;
    let row = (square as i32) / 16;
    let offset = col - row;
    let line = if offset >= 0 {
        MAIN_DIAGONAL >> (16 * offset as u32)
    } else {
        MAIN_DIAGONAL << (16 * (-offset) as u32)
    };
    (line ^ Bitboard::from_square(square)) & BOARD_MASK
}

pub fn anti_diagonal_mask(square: Square) -> Bitboard {
    let col = (square as i32) % 16;
    let row = (square as i32) / 16;
    let offset = col + row - 15;
    let line = if offset >= 0 {
        ANTI_DIAGONAL << (16 * offset as u32)
    } else {
        ANTI_DIAGONAL >> (16 * (-offset) as u32)
    };
    (line ^ Bitboard::from_square(square)) & BOARD_MASK
}

/// All indices strictly greater than `square`.
#[inline]
fn above(square: Square) -> Bitboard {
    Bitboard::FULL << (square as u32 + 1)
}

/// All indices strictly less than `square`.
#[inline]
fn below(square: Square) -> Bitboard {
    Bitboard::FULL >> (256 - square as u32)
}

/// The full line mask of `origin` whose direction points at `target`.
///
/// Classification is by index delta: same embedded row is a rank, a delta
/// divisible by 16 a file, by 17 a diagonal, by 15 an anti-diagonal.
/// Callers pass squares already known to share a line (blockers found on a
/// ray, a king on a pin line); unaligned input yields the empty set.
pub fn line_through(origin: Square, target: Square) -> Bitboard {
    if origin == target {
        return Bitboard::EMPTY;
    }
    if origin as u32 / GRID == target as u32 / GRID {
        return rank_mask(origin);
    }
    let delta = target as i32 - origin as i32;
    if delta % 16 == 0 {
        file_mask(origin)
    } else if delta % 17 == 0 {
        diagonal_mask(origin)
    } else if delta % 15 == 0 {
        anti_diagonal_mask(origin)
    } else {
        Bitboard::EMPTY
    }
}

/// The portion of the shared line on the far side of `blocker` as seen
/// from `origin`, blocker excluded.
pub fn ray_beyond(origin: Square, blocker: Square) -> Bitboard {
    let line = line_through(origin, blocker);
    if blocker > origin {
        line & above(blocker)
    } else {
        line & below(blocker)
    }
}

/// The squares strictly between `origin` and `blocker` on their shared line.
pub fn ray_between(origin: Square, blocker: Square) -> Bitboard {
    let line = line_through(origin, blocker);
    if blocker > origin {
        line & above(origin) & below(blocker)
    } else {
        line & above(blocker) & below(origin)
    }
}

/// Union of the eight two-step L-shaped shift compositions.
pub fn knight_pattern(origin: Bitboard) -> Bitboard {
    let mut out = shift_north(shift_east(origin, 1), 2);
    out |= shift_north(shift_west(origin, 1), 2);
    out |= shift_south(shift_east(origin, 1), 2);
    out |= shift_south(shift_west(origin, 1), 2);
    out |= shift_north(shift_east(origin, 2), 1);
    out |= shift_south(shift_east(origin, 2), 1);
    out |= shift_north(shift_west(origin, 2), 1);
    out |= shift_south(shift_west(origin, 2), 1);
    out & BOARD_MASK
}

/// The eight adjacent squares.
pub fn king_pattern(origin: Bitboard) -> Bitboard {
    let mut out = shift_north(origin, 1);
    out |= shift_south(origin, 1);
    out |= shift_east(origin, 1);
    out |= shift_west(origin, 1);
    out |= shift_north_east(origin, 1);
    out |= shift_north_west(origin, 1);
    out |= shift_south_east(origin, 1);
    out |= shift_south_west(origin, 1);
    out & BOARD_MASK
}

/// Shift along a color's forward axis: each color marches toward the
/// opposite edge of the cross.
#[inline]
pub fn shift_toward(color: Color, bb: Bitboard, steps: u32) -> Bitboard {
    match color {
        Color::Red => shift_north(bb, steps),
        Color::Yellow => shift_south(bb, steps),
        Color::Blue => shift_east(bb, steps),
        Color::Green => shift_west(bb, steps),
    }
}

/// The two forward-diagonal squares a pawn of `color` attacks, ignoring
/// occupancy.
pub fn pawn_capture_pattern(color: Color, origin: Bitboard) -> Bitboard {
    let attacks = match color {
        Color::Red => shift_north_east(origin, 1) | shift_north_west(origin, 1),
        Color::Yellow => shift_south_east(origin, 1) | shift_south_west(origin, 1),
        Color::Blue => shift_north_east(origin, 1) | shift_south_east(origin, 1),
        Color::Green => shift_north_west(origin, 1) | shift_south_west(origin, 1),
    };
    attacks & BOARD_MASK
}

/// Reverse form of [`pawn_capture_pattern`]: the squares from which a pawn
/// of `color` would attack `target`. Used by check detection.
pub fn pawn_capture_sources(color: Color, target: Bitboard) -> Bitboard {
    let sources = match color {
        Color::Red => shift_south_east(target, 1) | shift_south_west(target, 1),
        Color::Yellow => shift_north_east(target, 1) | shift_north_west(target, 1),
        Color::Blue => shift_south_west(target, 1) | shift_north_west(target, 1),
        Color::Green => shift_south_east(target, 1) | shift_north_east(target, 1),
    };
    sources & BOARD_MASK
}

const fn generate_rank_band(rank: i8) -> Bitboard {
    let mut band = Bitboard::EMPTY;
    let mut file = 0i8;
    while file < FILES {
        if on_board(file, rank) {
            band = band.with_square(square_at(file, rank));
        }
        file += 1;
    }
    band
}

const fn generate_file_band(file: i8) -> Bitboard {
    let mut band = Bitboard::EMPTY;
    let mut rank = 0i8;
    while rank < RANKS {
        if on_board(file, rank) {
            band = band.with_square(square_at(file, rank));
        }
        rank += 1;
    }
    band
}

/// Second-rank (or second-file) bands from which each color's pawns may
/// double-push, indexed by `Color::index()`.
const PAWN_START_BANDS: [Bitboard; 4] = [
    generate_rank_band(1),
    generate_file_band(1),
    generate_rank_band(12),
    generate_file_band(12),
];

#[inline]
pub fn pawn_start_band(color: Color) -> Bitboard {
    PAWN_START_BANDS[color.index()]
}
