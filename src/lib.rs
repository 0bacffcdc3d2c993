//! Crate root module declarations for the Cross Chess engine core.
//!
//! This file exposes all top-level subsystems (board representation and
//! geometry, position codec, move generation, and move application) so
//! orchestrating frontends, tests, and external tooling can import stable
//! module paths. The crate models the four-player Teams variant on a 14x14
//! cross-shaped board: four colors in two fixed alliances, 256-bit
//! bitboards embedded in a padded 16x16 address space.

pub mod errors;

pub mod board {
    pub mod bitboard;
    pub mod board;
    pub mod geometry;
    pub mod types;
}

pub mod codec {
    pub mod position_generator;
    pub mod position_parser;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod pins;
}

pub mod move_application {
    pub mod apply_move;
    pub mod undo_move;
}

pub mod utils {
    pub mod render_board;
}
