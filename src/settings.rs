//! Simulation tuning and difficulty presets
//!
//! A `SimConfig` is fixed for the lifetime of a simulation. It can be built
//! from a preset or loaded from a JSON document (missing fields fall back to
//! the defaults in [`crate::consts`]).

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Multiplier applied to the default gap size
    pub fn gap_scale(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.2,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.8,
        }
    }

    /// Multiplier applied to the default obstacle scroll speed
    pub fn speed_scale(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.8,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.3,
        }
    }
}

/// Physics and obstacle tuning, immutable per simulation instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Radius of the flying entity
    pub entity_radius: f32,
    /// Added to velocity every tick while playing
    pub gravity: f32,
    /// Velocity assigned on jump (negative = upward)
    pub jump_impulse: f32,
    /// Upper bound on velocity after gravity is applied
    pub max_velocity: f32,
    /// Horizontal extent of each obstacle pair
    pub obstacle_width: f32,
    /// Leftward scroll per tick
    pub obstacle_speed: f32,
    /// Vertical opening between top and bottom segments
    pub gap_size: f32,
    /// Entity x = viewport width / entity_x_divisor
    pub entity_x_divisor: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            entity_radius: ENTITY_RADIUS,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            max_velocity: MAX_VELOCITY,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_speed: OBSTACLE_SPEED,
            gap_size: GAP_SIZE,
            entity_x_divisor: ENTITY_X_DIVISOR,
        }
    }
}

impl SimConfig {
    /// Create a config from a difficulty preset
    pub fn from_preset(preset: Difficulty) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    /// Rescale gap and scroll speed from the defaults for a preset
    pub fn apply_preset(&mut self, preset: Difficulty) {
        self.gap_size = GAP_SIZE * preset.gap_scale();
        self.obstacle_speed = OBSTACLE_SPEED * preset.speed_scale();
    }

    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make placement or spawning ill-defined
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("entity_radius", self.entity_radius),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("max_velocity", self.max_velocity),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_speed", self.obstacle_speed),
            ("gap_size", self.gap_size),
            ("entity_x_divisor", self.entity_x_divisor),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SimError::InvalidConfig(format!("{name} must be finite")));
            }
        }

        let positive = [
            ("entity_radius", self.entity_radius),
            ("max_velocity", self.max_velocity),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_speed", self.obstacle_speed),
            ("gap_size", self.gap_size),
            ("entity_x_divisor", self.entity_x_divisor),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                log::warn!("Rejected config: {name} = {value}");
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        Ok(())
    }
}
