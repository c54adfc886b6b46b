//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one logical tick per call)
//! - Stable state layout, serializable
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{boxes_collide, player_obstacle_collision};
pub use state::{Background, GameEvent, GamePhase, GameState, Obstacle, Player};
pub use tick::{TickInput, tick};
