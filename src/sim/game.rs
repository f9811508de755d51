//! Game simulation driver
//!
//! `GameSimulation` owns the config, the state and the RNG and exposes the
//! call surface used by the frame clock, the input layer and the layout
//! layer. All calls are synchronous and run on one thread; invalid calls
//! (jumping while paused, pausing while idle) are silent no-ops.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{
    Entity, GameEvent, GameState, GameStatus, ObstaclePair, Snapshot, Viewport,
};
use super::tick::tick;
use crate::error::Result;
use crate::settings::SimConfig;

/// A single game session: one entity, its obstacles and its scores
#[derive(Debug, Clone)]
pub struct GameSimulation<R: Rng = Pcg32> {
    config: SimConfig,
    state: GameState,
    rng: R,
}

impl GameSimulation<Pcg32> {
    /// Create a simulation with a seeded PCG generator
    pub fn new(config: SimConfig, width: u32, height: u32, seed: u64) -> Result<Self> {
        Self::with_rng(config, width, height, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> GameSimulation<R> {
    /// Create a simulation drawing spawn heights from `rng`
    pub fn with_rng(config: SimConfig, width: u32, height: u32, rng: R) -> Result<Self> {
        config.validate()?;
        let viewport = Viewport::fitting(width, height, &config)?;
        Ok(Self {
            state: GameState::new(viewport, &config),
            config,
            rng,
        })
    }

    /// Update the viewport size
    ///
    /// Existing obstacles are left where they are; new spawns use the new
    /// size. While idle the entity is re-centered for the new size. The
    /// height must fit two gaps so spawned segments never go negative.
    pub fn configure_viewport(&mut self, width: u32, height: u32) -> Result<()> {
        let viewport = Viewport::fitting(width, height, &self.config)?;
        if viewport == self.state.viewport {
            return Ok(());
        }

        log::debug!(
            "Viewport {}x{} -> {}x{}",
            self.state.viewport.width,
            self.state.viewport.height,
            width,
            height
        );
        self.state.viewport = viewport;
        if self.state.status == GameStatus::Idle {
            self.state.entity.pos = Entity::start_pos(viewport, &self.config);
        }
        self.state.touch();
        Ok(())
    }

    /// Enter `Started` without resetting position or score
    pub fn start(&mut self) {
        if self.state.status == GameStatus::Started {
            return;
        }
        log::info!("Game started from {:?}", self.state.status);
        self.state.status = GameStatus::Started;
        self.state.emit(GameEvent::Started);
    }

    pub fn pause(&mut self) {
        if self.state.status == GameStatus::Started {
            log::info!("Game paused");
            self.state.status = GameStatus::Paused;
            self.state.emit(GameEvent::Paused);
        }
    }

    pub fn resume(&mut self) {
        if self.state.status == GameStatus::Paused {
            log::info!("Game resumed");
            self.state.status = GameStatus::Started;
            self.state.emit(GameEvent::Resumed);
        }
    }

    /// Pause if playing, resume if paused, otherwise nothing
    pub fn toggle_pause(&mut self) {
        match self.state.status {
            GameStatus::Started => self.pause(),
            GameStatus::Paused => self.resume(),
            GameStatus::Idle | GameStatus::Over => {}
        }
    }

    /// Set (not add) the upward jump velocity
    pub fn jump(&mut self) {
        if self.state.status == GameStatus::Started {
            self.state.velocity = self.config.jump_impulse;
            self.state.emit(GameEvent::Jumped);
        }
    }

    /// Advance one frame
    pub fn update(&mut self) {
        tick(&mut self.state, &self.config, &mut self.rng);
    }

    /// Commit the best score, reset the run and start again
    pub fn restart(&mut self) {
        let final_score = self.state.score.current;
        if let Some(best) = self.state.score.commit_best() {
            self.state.emit(GameEvent::NewBest { best });
        }
        log::info!(
            "Restarting (score={} best={})",
            final_score,
            self.state.score.best
        );

        self.reset();
        self.state.emit(GameEvent::Restarted);
        self.start();
    }

    fn reset(&mut self) {
        let state = &mut self.state;
        state.status = GameStatus::Idle;
        state.velocity = 0.0;
        state.entity.pos = Entity::start_pos(state.viewport, &self.config);
        state.obstacles.clear();
        state.score.current = 0;
        state.time_ticks = 0;
        state.touch();
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn entity(&self) -> &Entity {
        &self.state.entity
    }

    pub fn velocity(&self) -> f32 {
        self.state.velocity
    }

    pub fn obstacles(&self) -> &[ObstaclePair] {
        &self.state.obstacles
    }

    pub fn score(&self) -> u32 {
        self.state.score.current
    }

    pub fn best_score(&self) -> u32 {
        self.state.score.best
    }

    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    /// Ticks spent in `Started` during the current run
    pub fn ticks(&self) -> u64 {
        self.state.time_ticks
    }

    /// Changes whenever observable state changes
    pub fn version(&self) -> u64 {
        self.state.version
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Take all events emitted since the last drain
    ///
    /// Undrained events are capped; the oldest are dropped first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.events.drain(..).collect()
    }
}
