//! Dodge the Roar - a side-scrolling jump-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (jump physics, obstacle motion, collision, scoring)
//! - `render`: Frame snapshots and the terminal compositor
//! - `platform`: Fixed-rate clock and terminal input polling
//! - `assets`: Startup sprite loading (fail-fast)
//! - `settings`: User preferences persisted as JSON

pub mod assets;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// Everything is tuned for the 30 Hz tick rate. Changing `TICK_RATE` without
/// rescaling gravity and the speed constants changes game feel.
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 30;

    /// Screen dimensions (logical pixels, fixed for the run)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 500.0;

    /// Vertical gap between the bottom of a ground-aligned sprite and the
    /// bottom of the screen. Shared by player and obstacle placement.
    pub const GROUND_MARGIN: f32 = 100.0;

    /// Player defaults - horizontal position never changes
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 70.0;
    pub const PLAYER_HEIGHT: f32 = 80.0;
    /// Vertical velocity applied at the instant of a jump (negative = up)
    pub const JUMP_VELOCITY: f32 = -16.0;
    /// Downward acceleration per tick while airborne
    pub const GRAVITY: f32 = 0.85;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const OBSTACLE_HEIGHT: f32 = 70.0;
    /// Leftward speed at run start (pixels per tick)
    pub const OBSTACLE_START_SPEED: u32 = 5;
    /// Speed gained each time the obstacle is recycled
    pub const OBSTACLE_SPEED_STEP: u32 = 1;

    /// Background scroll speed (pixels per tick, both tiles)
    pub const SCROLL_SPEED: f32 = 2.0;
}

/// Vertical coordinate a ground-aligned sprite of the given height rests at.
#[inline]
pub fn ground_line(sprite_height: f32) -> f32 {
    consts::SCREEN_HEIGHT - sprite_height - consts::GROUND_MARGIN
}
