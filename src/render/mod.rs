//! Draw requests handed from the game loop to the compositor
//!
//! The simulation never draws. Each tick the loop captures a `Frame` - the
//! small snapshot the renderer needs - and on run end it issues one terminal
//! message request. The compositor (`terminal`) owns everything else.

pub mod terminal;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{GameState, Obstacle};

/// Fixed message shown when the run ends
pub const GAME_OVER_MESSAGE: &str = "Game Over! Press any key to quit.";

/// Per-tick render snapshot: positions, scroll offsets, score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Horizontal offsets of the two background tiles
    pub background_x1: f32,
    pub background_x2: f32,
    /// Player sprite position (top-left, logical pixels)
    pub player_pos: Vec2,
    /// Obstacle sprite position (top-left, logical pixels)
    pub obstacle_pos: Vec2,
    pub score: u32,
}

impl Frame {
    /// Capture the drawable snapshot of the current state.
    pub fn capture(state: &GameState) -> Self {
        Self {
            background_x1: state.background.x1,
            background_x2: state.background.x2,
            player_pos: Vec2::new(PLAYER_X, state.player.y),
            obstacle_pos: Vec2::new(state.obstacle.x, Obstacle::top()),
            score: state.score,
        }
    }
}

/// One request per tick from the loop to the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DrawRequest {
    /// Composite the scene
    Scene(Frame),
    /// Clear the screen and show the terminal message
    GameOver { message: &'static str },
}
