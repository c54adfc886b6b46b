//! Axis-aligned bounding-box collision between player and obstacle
//!
//! The vertical test is deliberately one-sided: only the player's bottom
//! edge against the obstacle's top edge. Both entities are ground-aligned
//! with compatible heights, so the single half-test is the collision policy
//! for this game. Do not "complete" it into a symmetric AABB test; that
//! silently changes behavior.

use super::state::{Obstacle, Player};

/// Raw AABB overlap test on primitive coordinates.
///
/// True iff the player's right edge passes the obstacle's left edge, the
/// player's left edge is left of the obstacle's right edge, and the player's
/// bottom edge is below the obstacle's top edge.
#[inline]
pub fn boxes_collide(
    player_x: f32,
    player_y: f32,
    player_w: f32,
    player_h: f32,
    obstacle_x: f32,
    obstacle_w: f32,
    obstacle_y: f32,
) -> bool {
    player_x + player_w > obstacle_x
        && player_x < obstacle_x + obstacle_w
        && player_y + player_h > obstacle_y
}

/// Collision check on live simulation state.
pub fn player_obstacle_collision(player: &Player, obstacle: &Obstacle) -> bool {
    player.right() > obstacle.left()
        && player.left() < obstacle.right()
        && player.bottom() > Obstacle::top()
}
