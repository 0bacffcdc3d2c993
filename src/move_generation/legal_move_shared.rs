//! Helpers shared by the per-piece move generators.

use crate::board::bitboard::Bitboard;
use crate::board::geometry::ray_beyond;
use crate::board::types::Square;

/// Truncate a union of full-length rays at the first occupied square in
/// each direction. The blocker square itself stays in the result; whether
/// it is a capture or an illegal ally landing is the caller's filter.
///
/// Each found blocker clears everything on its far side, so blockers
/// shadowed by a nearer one drop out of the scan set before they are
/// visited. Cost scales with blocker count, not ray length.
pub fn resolve_blockers(origin: Square, rays: Bitboard, occupied: Bitboard) -> Bitboard {
    let mut attacks = rays;
    let mut blockers = rays & occupied;
    while let Some(blocker) = blockers.pop_lowest() {
        if !attacks.contains(blocker) {
            continue;
        }
        attacks &= !ray_beyond(origin, blocker);
        blockers &= attacks;
    }
    attacks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::geometry::{file_mask, rank_mask, square_at};

    #[test]
    fn open_lines_pass_through_unchanged() {
        let origin = square_at(7, 7);
        let rays = rank_mask(origin) | file_mask(origin);
        assert_eq!(resolve_blockers(origin, rays, Bitboard::EMPTY), rays);
    }

    #[test]
    fn nearest_blocker_shadows_the_rest() {
        let origin = square_at(7, 0);
        let rays = file_mask(origin);
        let near = square_at(7, 4);
        let far = square_at(7, 9);
        let occupied = Bitboard::from_square(near) | Bitboard::from_square(far);

        let attacks = resolve_blockers(origin, rays, occupied);
        assert!(attacks.contains(square_at(7, 3)));
        assert!(attacks.contains(near));
        assert!(!attacks.contains(square_at(7, 5)));
        assert!(!attacks.contains(far));
    }

    #[test]
    fn blockers_truncate_each_direction_independently() {
        let origin = square_at(7, 7);
        let rays = rank_mask(origin);
        let west = square_at(4, 7);
        let east = square_at(10, 7);
        let occupied = Bitboard::from_square(west) | Bitboard::from_square(east);

        let attacks = resolve_blockers(origin, rays, occupied);
        assert!(attacks.contains(west));
        assert!(attacks.contains(east));
        assert!(!attacks.contains(square_at(3, 7)));
        assert!(!attacks.contains(square_at(11, 7)));
        assert!(attacks.contains(square_at(5, 7)));
        assert!(attacks.contains(square_at(9, 7)));
    }
}
