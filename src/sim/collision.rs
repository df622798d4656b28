//! Axis-aligned bounding box overlap tests
//!
//! Everything in Surf Dash is a rectangle; overlap means both axes'
//! intervals intersect (strict inequalities, so edge contact is a miss).

use glam::Vec2;

use super::state::{Duckie, Surfer};

/// 2D AABB overlap test. Positions are top-left corners.
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Does the surfer's box overlap a duckie's box?
#[inline]
pub fn surfer_hits_duckie(surfer: &Surfer, duckie: &Duckie) -> bool {
    aabb_overlap(surfer.pos, surfer.size, duckie.pos, duckie.size_vec())
}
