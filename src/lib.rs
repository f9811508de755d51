//! Wingit - a flap-through-the-gap arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, game state)
//! - `settings`: Data-driven tuning constants and difficulty presets
//! - `error`: Configuration errors
//!
//! Rendering, input devices, audio and score persistence live outside this
//! crate; they read [`sim::Snapshot`]s and drive a [`sim::GameSimulation`].

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Result, SimError};
pub use settings::{Difficulty, SimConfig};

/// Game configuration constants
pub mod consts {
    /// Radius of the flying entity
    pub const ENTITY_RADIUS: f32 = 30.0;
    /// Downward acceleration added to velocity every tick
    pub const GRAVITY: f32 = 0.6;
    /// Velocity set by a jump (negative = upward)
    pub const JUMP_IMPULSE: f32 = -13.0;
    /// Maximum downward velocity
    pub const MAX_VELOCITY: f32 = 25.0;
    /// Entity x = viewport width / ENTITY_X_DIVISOR (a little left of center)
    pub const ENTITY_X_DIVISOR: f32 = 3.5;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 150.0;
    /// Horizontal scroll per tick
    pub const OBSTACLE_SPEED: f32 = 5.0;
    /// Vertical gap between top and bottom segments
    pub const GAP_SIZE: f32 = 250.0;
}
