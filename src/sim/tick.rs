//! Per-frame simulation tick
//!
//! Order matters: collisions first, then the screen boundaries, then physics,
//! then obstacle scrolling. An early return skips everything after it for
//! that tick.

use rand::Rng;

use super::collision::{Segment, check_collision};
use super::state::{GameEvent, GameOverCause, GameState, GameStatus, ObstaclePair};
use crate::settings::SimConfig;

/// Advance the game state by one frame
pub fn tick<R: Rng>(state: &mut GameState, config: &SimConfig, rng: &mut R) {
    // Collision checks run in every status
    let hit = state.obstacles.iter().find_map(|pair| {
        check_collision(&state.entity, pair, config.obstacle_width, config.gap_size)
    });
    if let Some(segment) = hit {
        let cause = match segment {
            Segment::Top => GameOverCause::HitTop,
            Segment::Bottom => GameOverCause::HitBottom,
        };
        state.game_over(cause);
        return;
    }

    // Flying off the top is clamped, not fatal. Falling off the bottom is.
    if state.entity.pos.y < 0.0 {
        state.entity.pos.y = 0.0;
        state.touch();
        return;
    }
    if state.entity.pos.y > state.viewport.height_f() {
        state.game_over(GameOverCause::Fell);
        return;
    }

    if state.status != GameStatus::Started {
        return;
    }

    state.time_ticks += 1;
    apply_physics(state, config);
    if state.entity.pos.y > state.viewport.height_f() {
        state.game_over(GameOverCause::Fell);
        return;
    }

    advance_obstacles(state, config, rng);
}

/// Gravity, velocity clamp, then vertical motion
fn apply_physics(state: &mut GameState, config: &SimConfig) {
    state.velocity = (state.velocity + config.gravity).min(config.max_velocity);
    state.entity.pos.y += state.velocity;
    state.touch();
}

/// Scroll obstacles left, credit passed pairs, drop off-screen pairs and
/// spawn a new pair once the last one is past mid-screen
pub fn advance_obstacles<R: Rng>(state: &mut GameState, config: &SimConfig, rng: &mut R) {
    let width = config.obstacle_width;
    let entity_x = state.entity.pos.x;

    let mut passed = 0;
    for pair in &mut state.obstacles {
        pair.x -= config.obstacle_speed;
        if !pair.passed && pair.right(width) < entity_x {
            pair.passed = true;
            passed += 1;
        }
    }
    for _ in 0..passed {
        let score = state.score.credit();
        log::debug!("Scored: {}", score);
        state.emit(GameEvent::Scored { score });
    }

    let before = state.obstacles.len();
    state.obstacles.retain(|pair| pair.right(width) >= 0.0);
    for _ in state.obstacles.len()..before {
        state.emit(GameEvent::ObstacleRemoved);
    }

    let half_width = state.viewport.width_f() / 2.0;
    if state.obstacles.last().is_none_or(|last| last.x < half_width) {
        spawn_obstacle(state, config, rng);
    }
}

/// Spawn a pair just beyond the right edge with a random top height in
/// `[0, height / 2)`
pub fn spawn_obstacle<R: Rng>(state: &mut GameState, config: &SimConfig, rng: &mut R) {
    let height = state.viewport.height_f();
    let max_top = height / 2.0;
    let top_height = if max_top > 0.0 {
        rng.random_range(0.0..max_top)
    } else {
        0.0
    };

    let x = state.viewport.width_f() + config.obstacle_width;
    let pair = ObstaclePair::new(x, top_height, config.gap_size, height);
    log::debug!(
        "Spawned obstacle at x={} top={:.1} bottom={:.1}",
        x,
        pair.top_height,
        pair.bottom_height
    );
    state.obstacles.push(pair);
    state.emit(GameEvent::ObstacleSpawned { x, top_height });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn started_state(config: &SimConfig) -> GameState {
        let viewport = Viewport::new(400, 800).unwrap();
        let mut state = GameState::new(viewport, config);
        state.status = GameStatus::Started;
        state
    }

    #[test]
    fn test_tick_applies_gravity_and_clamp() {
        let config = SimConfig::default();
        let mut state = started_state(&config);
        let mut rng = Pcg32::seed_from_u64(1);

        tick(&mut state, &config, &mut rng);
        assert!((state.velocity - 0.6).abs() < 1e-6);
        assert!((state.entity.pos.y - 400.6).abs() < 1e-3);

        state.velocity = 24.9;
        state.entity.pos.y = 100.0;
        tick(&mut state, &config, &mut rng);
        assert_eq!(state.velocity, config.max_velocity);
        assert_eq!(state.entity.pos.y, 125.0);
    }

    #[test]
    fn test_tick_clamps_above_top_without_game_over() {
        let config = SimConfig::default();
        let mut state = started_state(&config);
        let mut rng = Pcg32::seed_from_u64(1);
        state.entity.pos.y = -5.0;
        state.velocity = -10.0;

        tick(&mut state, &config, &mut rng);

        assert_eq!(state.entity.pos.y, 0.0);
        assert_eq!(state.status, GameStatus::Started);
        // Clamp tick returns before physics and scrolling
        assert_eq!(state.velocity, -10.0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_tick_driven_exactly_to_top_is_not_over() {
        // Binary-exact gravity so the step lands on 0.0 exactly
        let config = SimConfig {
            gravity: 0.5,
            ..SimConfig::default()
        };
        let mut state = started_state(&config);
        let mut rng = Pcg32::seed_from_u64(1);
        state.entity.pos.y = 10.0;
        state.velocity = -10.5;

        tick(&mut state, &config, &mut rng);
        assert_eq!(state.entity.pos.y, 0.0);
        assert_eq!(state.status, GameStatus::Started);

        // Zero is not below the top, so the next tick is an ordinary physics step
        tick(&mut state, &config, &mut rng);
        assert_eq!(state.status, GameStatus::Started);
        assert_eq!(state.velocity, -9.5);
        assert_eq!(state.entity.pos.y, -9.5);
    }

    #[test]
    fn test_tick_exactly_at_bottom_is_not_over_yet() {
        let config = SimConfig::default();
        let mut state = started_state(&config);
        let mut rng = Pcg32::seed_from_u64(1);
        state.entity.pos.y = 800.0;
        state.velocity = -13.0;

        tick(&mut state, &config, &mut rng);

        assert_eq!(state.status, GameStatus::Started);
        assert!((state.entity.pos.y - 787.6).abs() < 1e-3);
    }

    #[test]
    fn test_tick_below_bottom_is_game_over() {
        let config = SimConfig::default();
        let mut state = started_state(&config);
        let mut rng = Pcg32::seed_from_u64(1);
        state.entity.pos.y = 800.5;

        tick(&mut state, &config, &mut rng);

        assert_eq!(state.status, GameStatus::Over);
        assert!(state.events.contains(&GameEvent::GameOver {
            cause: GameOverCause::Fell
        }));
    }

    #[test]
    fn test_physics_step_past_bottom_is_game_over() {
        let config = SimConfig::default();
        let mut state = started_state(&config);
        let mut rng = Pcg32::seed_from_u64(1);
        state.entity.pos.y = 795.0;
        state.velocity = 10.0;

        tick(&mut state, &config, &mut rng);

        assert_eq!(state.status, GameStatus::Over);
        // Scrolling is skipped once the run is over
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_idle_tick_does_not_move() {
        let config = SimConfig::default();
        let viewport = Viewport::new(400, 800).unwrap();
        let mut state = GameState::new(viewport, &config);
        let mut rng = Pcg32::seed_from_u64(1);
        let before = state.entity.pos;

        tick(&mut state, &config, &mut rng);

        assert_eq!(state.entity.pos, before);
        assert_eq!(state.velocity, 0.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.version, 0);
    }

    #[test]
    fn test_first_tick_spawns_at_right_edge() {
        let config = SimConfig::default();
        let mut state = started_state(&config);
        let mut rng = Pcg32::seed_from_u64(7);

        tick(&mut state, &config, &mut rng);

        assert_eq!(state.obstacles.len(), 1);
        let pair = state.obstacles[0];
        assert_eq!(pair.x, 400.0 + 150.0);
        assert!(pair.top_height >= 0.0 && pair.top_height < 400.0);
        assert!((pair.top_height + config.gap_size + pair.bottom_height - 800.0).abs() < 1e-3);
        assert_eq!(pair.y, pair.top_height + config.gap_size / 2.0);
    }

    #[test]
    fn test_spawns_only_after_last_crosses_midpoint() {
        let config = SimConfig::default();
        let mut state = started_state(&config);
        let mut rng = Pcg32::seed_from_u64(3);
        state.obstacles.push(ObstaclePair::new(205.0, 100.0, config.gap_size, 800.0));

        // 205 -> 200: not yet strictly left of the midpoint
        advance_obstacles(&mut state, &config, &mut rng);
        assert_eq!(state.obstacles.len(), 1);

        // 200 -> 195: spawn
        advance_obstacles(&mut state, &config, &mut rng);
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.obstacles[1].x, 550.0);
    }

    #[test]
    fn test_removes_pair_once_right_edge_leaves_screen() {
        let config = SimConfig::default();
        let mut state = started_state(&config);
        let mut rng = Pcg32::seed_from_u64(3);
        // Right edge at -72 + 75 = 3, then -2 after one scroll
        state.obstacles.push(ObstaclePair::new(-72.0, 100.0, config.gap_size, 800.0));
        state.obstacles.push(ObstaclePair::new(300.0, 100.0, config.gap_size, 800.0));

        advance_obstacles(&mut state, &config, &mut rng);

        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].x, 295.0);
        assert!(state.events.contains(&GameEvent::ObstacleRemoved));
    }

    #[test]
    fn test_scores_when_right_edge_crosses_entity() {
        let config = SimConfig::default();
        let mut state = started_state(&config);
        let mut rng = Pcg32::seed_from_u64(3);
        state.entity.pos = Vec2::new(100.0, 400.0);
        // Right edge 30 + 75 = 105 -> 100 after one scroll: not strictly past
        state.obstacles.push(ObstaclePair::new(30.0, 275.0, config.gap_size, 800.0));

        advance_obstacles(&mut state, &config, &mut rng);
        assert_eq!(state.score.current, 0);

        advance_obstacles(&mut state, &config, &mut rng);
        assert_eq!(state.score.current, 1);
        assert!(state.obstacles[0].passed);
        assert!(state.events.contains(&GameEvent::Scored { score: 1 }));

        // Never credited twice
        advance_obstacles(&mut state, &config, &mut rng);
        assert_eq!(state.score.current, 1);
    }
}
