//! Collision detection between the entity and obstacle pairs
//!
//! The entity is a circle tested by its bounding extents. An obstacle pair is
//! two rectangles spanning `width` horizontally, separated by a vertical gap
//! centered at the pair's `y`. The entity is safe while its whole vertical
//! extent sits strictly inside the gap.

use super::state::{Entity, ObstaclePair};

/// Which segment of a pair was struck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Top,
    Bottom,
}

/// Check collision between the entity and one obstacle pair
///
/// Returns `None` when the entity is clear of the pair horizontally or fully
/// inside its gap.
pub fn check_collision(
    entity: &Entity,
    pair: &ObstaclePair,
    width: f32,
    gap_size: f32,
) -> Option<Segment> {
    let horizontal_overlap = entity.right() > pair.left(width) && entity.left() < pair.right(width);
    if !horizontal_overlap {
        return None;
    }

    let clear_of_top = entity.top() > pair.gap_top(gap_size);
    let clear_of_bottom = entity.bottom() < pair.gap_bottom(gap_size);
    if clear_of_top && clear_of_bottom {
        return None;
    }

    // Straddling both edges only happens when the entity is taller than the gap
    if !clear_of_top {
        Some(Segment::Top)
    } else {
        Some(Segment::Bottom)
    }
}
