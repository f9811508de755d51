//! Demo autopilot
//!
//! Plays the game for attract mode and the headless runner. Reads state
//! only; the caller decides whether to act on the answer with `jump()`.

use super::state::{GameState, GameStatus};
use crate::settings::SimConfig;

/// Fraction of the gap below its center at which the autopilot flaps
const JUMP_MARGIN: f32 = 0.2;

/// Vertical position the autopilot steers toward
///
/// The gap center of the first pair the entity has not cleared yet, or the
/// middle of the screen when nothing is ahead.
pub fn target_y(state: &GameState, config: &SimConfig) -> f32 {
    let entity_left = state.entity.left();
    state
        .obstacles
        .iter()
        .find(|pair| pair.right(config.obstacle_width) >= entity_left)
        .map(|pair| pair.y)
        .unwrap_or(state.viewport.height_f() / 2.0)
}

/// Whether to jump this tick: below the target band and not already rising
pub fn should_jump(state: &GameState, config: &SimConfig) -> bool {
    if state.status != GameStatus::Started {
        return false;
    }
    let threshold = target_y(state, config) + config.gap_size * JUMP_MARGIN;
    state.entity.pos.y > threshold && state.velocity >= 0.0
}
