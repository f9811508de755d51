//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::settings::SimConfig;

/// Lifecycle status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the first start
    #[default]
    Idle,
    /// Active gameplay
    Started,
    /// Game is paused
    Paused,
    /// Run ended (only left through restart)
    Over,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverCause {
    /// Hit the top segment of an obstacle pair
    HitTop,
    /// Hit the bottom segment of an obstacle pair
    HitBottom,
    /// Fell past the bottom of the viewport
    Fell,
}

/// Notifications for observers, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    Jumped,
    ObstacleSpawned { x: f32, top_height: f32 },
    ObstacleRemoved,
    Scored { score: u32 },
    GameOver { cause: GameOverCause },
    NewBest { best: u32 },
    Restarted,
}

/// Viewport size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Validated viewport; both dimensions must be positive
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            log::warn!("Rejected viewport {}x{}", width, height);
            return Err(SimError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Validated viewport tall enough that every spawned pair has a
    /// non-negative bottom segment (`height >= 2 * gap_size`)
    pub fn fitting(width: u32, height: u32, config: &SimConfig) -> Result<Self> {
        let viewport = Self::new(width, height)?;
        if viewport.height_f() < 2.0 * config.gap_size {
            log::warn!(
                "Rejected viewport {}x{}: too short for gap {}",
                width,
                height,
                config.gap_size
            );
            return Err(SimError::InvalidViewport { width, height });
        }
        Ok(viewport)
    }

    #[inline]
    pub fn width_f(&self) -> f32 {
        self.width as f32
    }

    #[inline]
    pub fn height_f(&self) -> f32 {
        self.height as f32
    }
}

/// The player-controlled flying entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Center position; x stays fixed, obstacles scroll past it
    pub pos: Vec2,
    pub radius: f32,
}

impl Entity {
    /// Entity at its start position: left third horizontally, centered vertically
    pub fn spawn(viewport: Viewport, config: &SimConfig) -> Self {
        Self {
            pos: Self::start_pos(viewport, config),
            radius: config.entity_radius,
        }
    }

    pub fn start_pos(viewport: Viewport, config: &SimConfig) -> Vec2 {
        Vec2::new(
            viewport.width_f() / config.entity_x_divisor,
            viewport.height_f() / 2.0,
        )
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// A top and bottom segment with a passable gap between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    /// Horizontal center
    pub x: f32,
    /// Vertical center of the gap
    pub y: f32,
    pub top_height: f32,
    pub bottom_height: f32,
    /// Set once the pair's right edge has scrolled past the entity
    #[serde(default)]
    pub passed: bool,
}

impl ObstaclePair {
    /// Build a pair whose segments and gap exactly fill `viewport_height`
    pub fn new(x: f32, top_height: f32, gap_size: f32, viewport_height: f32) -> Self {
        Self {
            x,
            y: top_height + gap_size / 2.0,
            top_height,
            bottom_height: viewport_height - top_height - gap_size,
            passed: false,
        }
    }

    #[inline]
    pub fn left(&self, width: f32) -> f32 {
        self.x - width / 2.0
    }

    #[inline]
    pub fn right(&self, width: f32) -> f32 {
        self.x + width / 2.0
    }

    #[inline]
    pub fn gap_top(&self, gap_size: f32) -> f32 {
        self.y - gap_size / 2.0
    }

    #[inline]
    pub fn gap_bottom(&self, gap_size: f32) -> f32 {
        self.y + gap_size / 2.0
    }
}

/// Current and best score for the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub current: u32,
    pub best: u32,
}

impl ScoreBoard {
    /// Credit one passed obstacle, returning the new score
    pub fn credit(&mut self) -> u32 {
        self.current += 1;
        self.current
    }

    /// Raise best to current if exceeded; returns the new best when it changed
    pub fn commit_best(&mut self) -> Option<u32> {
        if self.current > self.best {
            self.best = self.current;
            Some(self.best)
        } else {
            None
        }
    }
}

/// Events kept when nobody drains the queue; the oldest are dropped first
pub const MAX_PENDING_EVENTS: usize = 256;

/// Complete mutable game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
    pub entity: Entity,
    /// Vertical speed (positive = falling)
    pub velocity: f32,
    /// Ordered by spawn time, which is also ascending x
    pub obstacles: Vec<ObstaclePair>,
    pub score: ScoreBoard,
    pub viewport: Viewport,
    /// Bumped on every observable mutation
    pub version: u64,
    /// Simulation tick counter (ticks spent in Started)
    pub time_ticks: u64,
    /// Pending notifications, capped at `MAX_PENDING_EVENTS`
    #[serde(skip)]
    pub events: VecDeque<GameEvent>,
}

impl GameState {
    pub fn new(viewport: Viewport, config: &SimConfig) -> Self {
        Self {
            status: GameStatus::Idle,
            entity: Entity::spawn(viewport, config),
            velocity: 0.0,
            obstacles: Vec::new(),
            score: ScoreBoard::default(),
            viewport,
            version: 0,
            time_ticks: 0,
            events: VecDeque::with_capacity(MAX_PENDING_EVENTS),
        }
    }

    /// Record an event and bump the version
    pub fn emit(&mut self, event: GameEvent) {
        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
        self.touch();
    }

    #[inline]
    pub fn touch(&mut self) {
        self.version += 1;
    }

    /// End the run, committing the score to best
    pub fn game_over(&mut self, cause: GameOverCause) {
        if self.status == GameStatus::Over {
            return;
        }
        self.status = GameStatus::Over;
        log::info!(
            "Game over ({:?}) score={} best={}",
            cause,
            self.score.current,
            self.score.best.max(self.score.current)
        );
        self.emit(GameEvent::GameOver { cause });
        if let Some(best) = self.score.commit_best() {
            self.emit(GameEvent::NewBest { best });
        }
    }

    /// Read-only copy for a renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            status: self.status,
            entity: self.entity,
            velocity: self.velocity,
            obstacles: self.obstacles.clone(),
            score: self.score.current,
            best_score: self.score.best,
            viewport: self.viewport,
            version: self.version,
            ticks: self.time_ticks,
        }
    }
}

/// Owned view of the state at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: GameStatus,
    pub entity: Entity,
    pub velocity: f32,
    pub obstacles: Vec<ObstaclePair>,
    pub score: u32,
    pub best_score: u32,
    pub viewport: Viewport,
    pub version: u64,
    /// Ticks spent in `Started` during the current run
    pub ticks: u64,
}
