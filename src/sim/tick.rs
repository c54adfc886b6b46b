//! Fixed timestep simulation tick
//!
//! Advances one run by exactly one tick. The tick is the whole game: scroll
//! the background, resolve the jump, move the obstacle, recycle and score,
//! then check for the run-ending collision.

use super::collision::player_obstacle_collision;
use super::state::{GameEvent, GamePhase, GameState};

/// Input sampled by the platform layer for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump key currently pressed
    pub jump: bool,
}

/// Advance the game state by one tick.
///
/// Only `Playing` states advance; `GameOver` and `Waiting` are inert. The
/// returned events are already applied to the state (score, phase); callers
/// use them for logging or effects.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    if state.phase != GamePhase::Playing {
        return Vec::new();
    }

    state.time_ticks += 1;

    state.background.advance();

    // Jump triggers once per press-while-grounded; pressing mid-air is a no-op
    if input.jump && !state.player.jumping {
        state.player.start_jump();
    }
    state.player.integrate();

    state.obstacle.advance();

    let mut events = Vec::new();
    if state.obstacle.fully_off_left() {
        // Recycle mutates the obstacle; the event carries the scoring side
        state.obstacle.recycle();
        events.push(GameEvent::ObstaclePassed);
    }

    if player_obstacle_collision(&state.player, &state.obstacle) {
        events.push(GameEvent::Collision);
    }

    apply_events(state, &events);
    events
}

/// The scoring and termination handler.
///
/// Keeps "what triggers scoring" in one place: a dodge is counted exactly
/// when the obstacle recycles, and a collision ends the run.
fn apply_events(state: &mut GameState, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::ObstaclePassed => {
                state.score += 1;
                log::debug!(
                    "obstacle passed: score={} speed={}",
                    state.score,
                    state.obstacle.speed
                );
            }
            GameEvent::Collision => {
                state.phase = GamePhase::GameOver;
                log::debug!("collision at tick {}", state.time_ticks);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::Player;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_gravity_step_mid_air() {
        // One step from (300, -10, jumping): position uses pre-increment
        // velocity, then gravity lands on the velocity.
        let mut player = Player {
            y: 300.0,
            vel_y: -10.0,
            jumping: true,
        };
        player.integrate();
        assert!(approx(player.y, 290.0));
        assert!(approx(player.vel_y, -9.15));
        assert!(player.jumping);
    }

    #[test]
    fn test_gravity_step_landing() {
        // From y=435 the step crosses the ground line (320) and clamps.
        let mut player = Player {
            y: 435.0,
            vel_y: -10.0,
            jumping: true,
        };
        player.integrate();
        assert_eq!(player.y, 320.0);
        assert_eq!(player.vel_y, 0.0);
        assert!(!player.jumping);
    }

    #[test]
    fn test_grounded_player_ignores_velocity() {
        // Integration is gated strictly on the jump flag
        let mut player = Player {
            y: Player::ground_line(),
            vel_y: -42.0,
            jumping: false,
        };
        player.integrate();
        assert_eq!(player.y, Player::ground_line());
        assert!(!player.jumping);
    }

    #[test]
    fn test_landing_is_idempotent() {
        let mut player = Player {
            y: 435.0,
            vel_y: -10.0,
            jumping: true,
        };
        player.integrate();
        player.integrate();
        assert_eq!(player.y, 320.0);
        assert!(!player.jumping);
    }

    #[test]
    fn test_jump_triggers_only_while_grounded() {
        let mut state = GameState::new();
        let jump = TickInput { jump: true };

        tick(&mut state, &jump);
        assert!(state.player.jumping);
        let vel_after_launch = state.player.vel_y;
        assert!(approx(vel_after_launch, JUMP_VELOCITY + GRAVITY));

        // Holding jump mid-air must not reset velocity to the launch value
        tick(&mut state, &jump);
        assert!(approx(state.player.vel_y, vel_after_launch + GRAVITY));
    }

    #[test]
    fn test_full_jump_arc_returns_to_ground() {
        let mut state = GameState::new();
        tick(&mut state, &TickInput { jump: true });

        // -16 velocity under 0.85 gravity lands well within 40 ticks
        for _ in 0..40 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.player.y, Player::ground_line());
        assert!(!state.player.jumping);
    }

    #[test]
    fn test_obstacle_recycle_scores_once() {
        let mut state = GameState::new();
        // Park the obstacle one step short of being fully off-screen
        state.obstacle.x = -OBSTACLE_WIDTH + 1.0;

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::ObstaclePassed]);
        assert_eq!(state.score, 1);
        assert_eq!(state.obstacle.speed, OBSTACLE_START_SPEED + OBSTACLE_SPEED_STEP);
        assert_eq!(state.obstacle.x, SCREEN_WIDTH);
    }

    #[test]
    fn test_no_score_on_ordinary_ticks() {
        let mut state = GameState::new();
        for _ in 0..50 {
            tick(&mut state, &TickInput::default());
        }
        // 800 / 5 = 160 ticks to cross, so nothing recycled yet
        assert_eq!(state.score, 0);
        assert_eq!(state.obstacle.speed, OBSTACLE_START_SPEED);
    }

    #[test]
    fn test_background_wrap_cadence() {
        let mut state = GameState::new();
        // x1 starts at 0 and scrolls 2/tick; the wrap to +800 fires on the
        // tick that reaches -800, i.e. after exactly 400 ticks.
        for _ in 0..399 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.background.x1, -798.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.background.x1, SCREEN_WIDTH);
    }

    #[test]
    fn test_collision_ends_run() {
        let mut state = GameState::new();
        // Place the obstacle so this tick's movement lands it on the player
        state.obstacle.x = PLAYER_X + state.obstacle.speed as f32;

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::Collision));
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_game_over_state_is_inert() {
        let mut state = GameState::new();
        state.phase = GamePhase::GameOver;
        let before_ticks = state.time_ticks;
        let before_player = state.player.y;

        let events = tick(&mut state, &TickInput { jump: true });
        assert!(events.is_empty());
        assert_eq!(state.time_ticks, before_ticks);
        assert_eq!(state.player.y, before_player);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_waiting_has_no_way_back_to_playing() {
        let mut state = GameState::new();
        state.phase = GamePhase::GameOver;
        state.acknowledge_game_over();
        assert_eq!(state.phase, GamePhase::Waiting);

        tick(&mut state, &TickInput { jump: true });
        assert_eq!(state.phase, GamePhase::Waiting);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new();
        let mut state2 = GameState::new();

        let inputs = [
            TickInput { jump: true },
            TickInput::default(),
            TickInput { jump: true },
            TickInput::default(),
        ];

        for _ in 0..100 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.player.y, state2.player.y);
        assert_eq!(state1.obstacle.x, state2.obstacle.x);
    }
}
