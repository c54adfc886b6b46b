//! Game state and core simulation types
//!
//! Everything the loop owns for one run lives here. The state is plain data:
//! no rendering handles, no platform resources, fully serializable.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::ground_line;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Collision happened; the terminal message has not been shown yet
    GameOver,
    /// Terminal message shown; waiting for a keypress or quit to exit
    Waiting,
}

/// Events produced by a single tick
///
/// `ObstaclePassed` is the one place scoring is decided: the obstacle left
/// the screen, so the dodge counts and the difficulty ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Obstacle fully exited the left edge and was recycled
    ObstaclePassed,
    /// Player and obstacle boxes overlap; the run is over
    Collision,
}

/// The player character
///
/// Horizontal position and size are fixed (`PLAYER_X`, `PLAYER_WIDTH`,
/// `PLAYER_HEIGHT`); only the vertical state changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    /// Vertical position (top edge, pixels)
    pub y: f32,
    /// Vertical velocity (pixels per tick, negative = up)
    pub vel_y: f32,
    /// True from jump trigger until landing
    pub jumping: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            y: ground_line(PLAYER_HEIGHT),
            vel_y: 0.0,
            jumping: false,
        }
    }
}

impl Player {
    /// Vertical coordinate the player rests on between jumps
    #[inline]
    pub fn ground_line() -> f32 {
        ground_line(PLAYER_HEIGHT)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        PLAYER_X
    }

    #[inline]
    pub fn right(&self) -> f32 {
        PLAYER_X + PLAYER_WIDTH
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + PLAYER_HEIGHT
    }

    /// Begin a jump. Callers must gate on `!self.jumping`.
    pub fn start_jump(&mut self) {
        self.jumping = true;
        self.vel_y = JUMP_VELOCITY;
    }

    /// One gravity step, applied only while airborne.
    ///
    /// Semi-implicit Euler, position before velocity: the order matters for
    /// parity with the tuned constants. Landing clamps to the ground line,
    /// clears the jump flag, and zeroes velocity.
    pub fn integrate(&mut self) {
        if !self.jumping {
            return;
        }
        self.y += self.vel_y;
        self.vel_y += GRAVITY;

        let ground = Self::ground_line();
        if self.y >= ground {
            self.y = ground;
            self.vel_y = 0.0;
            self.jumping = false;
        }
    }
}

/// The oncoming obstacle
///
/// Vertically fixed at its ground line; moves left by `speed` every tick.
/// Speed only ever goes up within a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    /// Horizontal position (left edge, pixels)
    pub x: f32,
    /// Leftward speed in pixels per tick
    pub speed: u32,
}

impl Default for Obstacle {
    fn default() -> Self {
        Self {
            x: SCREEN_WIDTH,
            speed: OBSTACLE_START_SPEED,
        }
    }
}

impl Obstacle {
    /// Vertical coordinate of the obstacle's top edge (fixed for the run)
    #[inline]
    pub fn top() -> f32 {
        ground_line(OBSTACLE_HEIGHT)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }

    /// Move left by the current speed.
    pub fn advance(&mut self) {
        self.x -= self.speed as f32;
    }

    /// True once no part of the obstacle is visible past the left edge.
    #[inline]
    pub fn fully_off_left(&self) -> bool {
        self.x < -OBSTACLE_WIDTH
    }

    /// Reposition to the right edge and ramp the speed.
    pub fn recycle(&mut self) {
        self.x = SCREEN_WIDTH;
        self.speed += OBSTACLE_SPEED_STEP;
    }
}

/// Two tiled copies of the background, scrolled left and wrapped.
///
/// Purely cosmetic; nothing in gameplay reads these offsets.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Background {
    pub x1: f32,
    pub x2: f32,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            x1: 0.0,
            x2: SCREEN_WIDTH,
        }
    }
}

impl Background {
    /// Scroll both tiles; each wraps independently to the right edge once
    /// fully off-screen.
    pub fn advance(&mut self) {
        self.x1 -= SCROLL_SPEED;
        self.x2 -= SCROLL_SPEED;

        if self.x1 <= -SCREEN_WIDTH {
            self.x1 = SCREEN_WIDTH;
        }
        if self.x2 <= -SCREEN_WIDTH {
            self.x2 = SCREEN_WIDTH;
        }
    }
}

/// Complete run state, owned exclusively by the game loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub obstacle: Obstacle,
    pub background: Background,
    /// Successful dodges this run
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh run: player grounded, obstacle at the right edge, score zero.
    pub fn new() -> Self {
        Self {
            player: Player::default(),
            obstacle: Obstacle::default(),
            background: Background::default(),
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
        }
    }

    /// Called by the loop once the terminal message has been drawn.
    ///
    /// `Waiting` is terminal: there is no path back to `Playing`. A fresh
    /// process starts the next run.
    pub fn acknowledge_game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            self.phase = GamePhase::Waiting;
        }
    }
}
