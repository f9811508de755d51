//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update per rendered frame, no internal clock
//! - Injected, seedable RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod game;
pub mod state;
pub mod tick;

pub use collision::{Segment, check_collision};
pub use game::GameSimulation;
pub use state::{
    Entity, GameEvent, GameOverCause, GameState, GameStatus, ObstaclePair, ScoreBoard, Snapshot,
    Viewport,
};
pub use tick::{advance_obstacles, spawn_obstacle, tick};
