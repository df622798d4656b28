//! Entity spawning
//!
//! Spawn timers are polled against accumulated simulation time; at most one
//! spawn of each kind fires per tick.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Duckie, GameState, Viewport, Wave, duckie_interval_for};
use crate::consts::*;

/// Spawn a duckie at the right edge if its interval has elapsed.
///
/// On spawn the interval is recomputed from the current difficulty, so the
/// spawn rate rises as the run progresses.
pub fn spawn_duckie(state: &mut GameState, viewport: Viewport) {
    if state.time_ms - state.last_duckie_ms <= state.duckie_interval_ms {
        return;
    }
    let size = state.rng.random_range(DUCKIE_MIN_SIZE..DUCKIE_MAX_SIZE);
    let hue = state.rng.random_range(DUCKIE_MIN_HUE..DUCKIE_MAX_HUE);
    state.duckies.push(Duckie {
        pos: Vec2::new(viewport.width, viewport.waterline_y() - size),
        size,
        speed: DUCKIE_BASE_SPEED + state.difficulty as f32,
        hue,
    });
    state.last_duckie_ms = state.time_ms;
    state.duckie_interval_ms = duckie_interval_for(state.difficulty);
}

/// Spawn a decorative wave spanning the viewport if its interval has elapsed.
///
/// The wave list is capped; the oldest wave is dropped to make room.
pub fn spawn_wave(state: &mut GameState, viewport: Viewport) {
    if state.time_ms - state.last_wave_ms <= WAVE_INTERVAL_MS {
        return;
    }
    state.waves.push(Wave {
        y: viewport.waterline_y(),
        width: viewport.width,
        height: WAVE_HEIGHT,
        amplitude: state.rng.random_range(WAVE_MIN_AMPLITUDE..WAVE_MAX_AMPLITUDE),
        frequency: state.rng.random_range(WAVE_MIN_FREQUENCY..WAVE_MAX_FREQUENCY),
        phase: state.rng.random_range(0.0..TAU),
    });
    if state.waves.len() > MAX_WAVES {
        state.waves.remove(0);
    }
    state.last_wave_ms = state.time_ms;
}
