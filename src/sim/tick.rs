//! Fixed timestep simulation tick
//!
//! One call advances the whole game by one step: spawn, move, collide,
//! integrate, score. The host owns scheduling; this module never blocks,
//! draws, or reads the clock.

use super::collision;
use super::spawn;
use super::state::{GamePhase, GameState, Viewport, difficulty_for_score};
use crate::consts::*;

/// Input flags for a single tick
///
/// `left`/`right` are held-key levels; `jump` is a one-shot edge the adapter
/// clears after the tick consumes it. Conflicting directions resolve
/// left-before-right.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Advance the game state by one tick.
///
/// `dt_ms` is the elapsed time this tick represents; it only drives the
/// spawn timers. Physics is per-tick, tuned for 60 Hz. A state in
/// `GameOver` is never mutated; restart replaces it wholesale.
pub fn tick(state: &mut GameState, input: &TickInput, viewport: Viewport, dt_ms: f64) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;
    state.time_ms += dt_ms;

    spawn::spawn_wave(state, viewport);
    advance_waves(state);

    spawn::spawn_duckie(state, viewport);
    advance_duckies(state);

    integrate_surfer(state, input, viewport);

    state.score += state.surfer.vel.x.abs() * SCORE_RATE;
    state.difficulty = difficulty_for_score(state.score);
}

/// Cosmetic: scroll every wave's phase
fn advance_waves(state: &mut GameState) {
    for wave in &mut state.waves {
        wave.phase += WAVE_PHASE_RATE;
    }
}

/// Move duckies leftward, resolve collisions, drop off-screen stragglers.
///
/// Collisions test against the surfer pose from the start of the tick.
/// An airborne surfer consumes the duckie; a grounded hit ends the run.
fn advance_duckies(state: &mut GameState) {
    let surfer = state.surfer;
    let mut grounded_hit = false;
    let mut dodged = 0;

    state.duckies.retain_mut(|duckie| {
        duckie.pos.x -= duckie.speed;

        if collision::surfer_hits_duckie(&surfer, duckie) {
            if surfer.jumping {
                dodged += 1;
            } else {
                grounded_hit = true;
            }
            return false;
        }

        duckie.pos.x + duckie.size > 0.0
    });

    state.dodged += dodged;
    if grounded_hit {
        state.phase = GamePhase::GameOver;
    }
}

/// Integrate the surfer's velocity and position for one tick
fn integrate_surfer(state: &mut GameState, input: &TickInput, viewport: Viewport) {
    let surfer = &mut state.surfer;

    // Horizontal: held keys override, otherwise exponential damping with a
    // zero snap so velocity settles exactly
    if input.left {
        surfer.vel.x = -MOVE_SPEED;
    } else if input.right {
        surfer.vel.x = MOVE_SPEED;
    } else {
        surfer.vel.x *= VX_DAMPING;
        if surfer.vel.x.abs() < VX_EPSILON {
            surfer.vel.x = 0.0;
        }
    }

    // Jump trigger only fires while grounded
    if input.jump && !surfer.jumping {
        surfer.jumping = true;
        surfer.vel.y = JUMP_FORCE;
    }

    if surfer.jumping {
        surfer.vel.y += GRAVITY;
        surfer.pos.y += surfer.vel.y;

        let ground = viewport.ground_y();
        if surfer.pos.y >= ground {
            surfer.pos.y = ground;
            surfer.jumping = false;
            surfer.vel.y = 0.0;
        }
    } else {
        // Grounded surfer follows the live ground line (viewport may resize)
        surfer.pos.y = viewport.ground_y();
    }

    surfer.pos.x =
        (surfer.pos.x + surfer.vel.x).clamp(0.0, (viewport.width - surfer.size.x).max(0.0));
    surfer.rotation = surfer.vel.x * ROTATION_FACTOR;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Duckie;
    use glam::Vec2;

    const VIEWPORT: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    fn playing_state() -> GameState {
        GameState::new(99, VIEWPORT)
    }

    /// Duckie guaranteed to overlap the surfer even after this tick's move
    fn duckie_on_surfer(state: &GameState) -> Duckie {
        Duckie {
            pos: Vec2::new(state.surfer.pos.x, VIEWPORT.waterline_y() - 40.0),
            size: 40.0,
            speed: 3.0,
            hue: 45.0,
        }
    }

    #[test]
    fn grounded_collision_ends_the_run() {
        let mut state = playing_state();
        let duckie = duckie_on_surfer(&state);
        state.duckies.push(duckie);

        tick(&mut state, &TickInput::default(), VIEWPORT, SIM_DT_MS);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.duckies.is_empty());
        assert_eq!(state.dodged, 0);
    }

    #[test]
    fn game_over_ticks_are_no_ops() {
        let mut state = playing_state();
        state.duckies.push(duckie_on_surfer(&state));
        tick(&mut state, &TickInput::default(), VIEWPORT, SIM_DT_MS);
        assert_eq!(state.phase, GamePhase::GameOver);

        let frozen = serde_json::to_string(&state).unwrap();
        for _ in 0..10 {
            let input = TickInput {
                left: true,
                right: true,
                jump: true,
            };
            tick(&mut state, &input, VIEWPORT, SIM_DT_MS);
        }
        assert_eq!(serde_json::to_string(&state).unwrap(), frozen);
    }

    #[test]
    fn airborne_collision_consumes_the_duckie() {
        let mut state = playing_state();
        state.surfer.jumping = true;
        state.surfer.vel.y = JUMP_FORCE;
        state.surfer.pos.y = VIEWPORT.ground_y() - 5.0;
        state.duckies.push(duckie_on_surfer(&state));

        tick(&mut state, &TickInput::default(), VIEWPORT, SIM_DT_MS);

        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.duckies.is_empty());
        assert_eq!(state.dodged, 1);
    }

    #[test]
    fn offscreen_duckies_are_dropped() {
        let mut state = playing_state();
        state.duckies.push(Duckie {
            pos: Vec2::new(-27.0, VIEWPORT.waterline_y() - 30.0),
            size: 30.0,
            speed: 4.0,
            hue: 45.0,
        });

        tick(&mut state, &TickInput::default(), VIEWPORT, SIM_DT_MS);
        // x + size = -31 + 30 <= 0, fully off the left edge
        assert!(state.duckies.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn left_input_wins_over_right() {
        let mut state = playing_state();
        let input = TickInput {
            left: true,
            right: true,
            jump: false,
        };
        tick(&mut state, &input, VIEWPORT, SIM_DT_MS);
        assert_eq!(state.surfer.vel.x, -MOVE_SPEED);
        assert_eq!(state.surfer.rotation, -MOVE_SPEED * ROTATION_FACTOR);
    }

    #[test]
    fn position_clamps_to_viewport() {
        let mut state = playing_state();
        // Long run; keep duckies out of it so the phase stays Playing
        state.duckie_interval_ms = f64::MAX;
        let input = TickInput {
            left: true,
            ..Default::default()
        };
        for _ in 0..200 {
            tick(&mut state, &input, VIEWPORT, SIM_DT_MS);
        }
        assert_eq!(state.surfer.pos.x, 0.0);

        let input = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..400 {
            tick(&mut state, &input, VIEWPORT, SIM_DT_MS);
        }
        assert_eq!(state.surfer.pos.x, VIEWPORT.width - state.surfer.size.x);
    }

    #[test]
    fn velocity_decays_to_exact_zero() {
        let mut state = playing_state();
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        tick(&mut state, &right, VIEWPORT, SIM_DT_MS);
        assert_eq!(state.surfer.vel.x, MOVE_SPEED);

        // 0.9^n * 5 drops below 0.01 within ~60 ticks, then snaps to zero
        for _ in 0..80 {
            tick(&mut state, &TickInput::default(), VIEWPORT, SIM_DT_MS);
        }
        assert_eq!(state.surfer.vel.x, 0.0);
        assert_eq!(state.surfer.rotation, 0.0);
    }

    #[test]
    fn jump_matches_closed_form_ballistics() {
        let mut state = playing_state();
        let ground = VIEWPORT.ground_y();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };

        // y(n) = ground + n*J + G*n(n+1)/2, integrated as vy += G; y += vy
        for n in 1..=5u32 {
            let input = if n == 1 { jump } else { TickInput::default() };
            tick(&mut state, &input, VIEWPORT, SIM_DT_MS);
            let n = n as f32;
            let expected = ground + n * JUMP_FORCE + GRAVITY * n * (n + 1.0) / 2.0;
            assert!(
                (state.surfer.pos.y - expected).abs() < 1e-3,
                "tick {n}: y = {}, expected {expected}",
                state.surfer.pos.y
            );
            assert!(state.surfer.jumping);
        }
    }

    #[test]
    fn landing_clamps_to_ground_without_overshoot() {
        let mut state = playing_state();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, VIEWPORT, SIM_DT_MS);

        let mut ticks = 0;
        while state.surfer.jumping && ticks < 200 {
            tick(&mut state, &TickInput::default(), VIEWPORT, SIM_DT_MS);
            ticks += 1;
        }
        assert!(!state.surfer.jumping);
        assert_eq!(state.surfer.pos.y, VIEWPORT.ground_y());
        assert_eq!(state.surfer.vel.y, 0.0);
    }

    #[test]
    fn jump_edge_does_not_refire_while_airborne() {
        let mut state = playing_state();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, VIEWPORT, SIM_DT_MS);
        let vy_after_first = state.surfer.vel.y;

        // Holding jump must not reset vertical velocity mid-air
        tick(&mut state, &jump, VIEWPORT, SIM_DT_MS);
        assert_eq!(state.surfer.vel.y, vy_after_first + GRAVITY);
    }

    #[test]
    fn score_accrues_from_horizontal_speed() {
        let mut state = playing_state();
        let input = TickInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            tick(&mut state, &input, VIEWPORT, SIM_DT_MS);
        }
        // 10 ticks at |vx| = 5 and 0.1 score per pixel/tick
        assert!((state.score - 5.0).abs() < 1e-4);
        assert_eq!(state.difficulty, 1);
    }

    #[test]
    fn resize_moves_the_grounded_surfer() {
        let mut state = playing_state();
        let shrunk = Viewport {
            width: 800.0,
            height: 400.0,
        };
        tick(&mut state, &TickInput::default(), shrunk, SIM_DT_MS);
        assert_eq!(state.surfer.pos.y, shrunk.ground_y());
    }
}
