//! Surf Dash - a surf-and-dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, physics, collisions, scoring)
//! - `renderer`: Canvas 2D rendering (wasm only)
//! - `settings`: User preferences with LocalStorage persistence on web

pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz, matching display refresh)
    pub const SIM_DT_MS: f64 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Surfer dimensions
    pub const SURFER_WIDTH: f32 = 40.0;
    pub const SURFER_HEIGHT: f32 = 60.0;
    /// Surfer rides this far above the bottom of the viewport
    pub const GROUND_OFFSET: f32 = 100.0;
    /// Waves and duckies sit on this line above the bottom of the viewport
    pub const WATERLINE_OFFSET: f32 = 50.0;

    /// Horizontal speed while a direction key is held (pixels/tick)
    pub const MOVE_SPEED: f32 = 5.0;
    /// Exponential damping applied to horizontal velocity with no input
    pub const VX_DAMPING: f32 = 0.9;
    /// Below this magnitude, horizontal velocity snaps to exactly zero
    pub const VX_EPSILON: f32 = 0.01;
    /// Initial vertical velocity of a jump (pixels/tick, negative is up)
    pub const JUMP_FORCE: f32 = -15.0;
    /// Gravity applied while airborne (pixels/tick²)
    pub const GRAVITY: f32 = 0.8;
    /// Cosmetic banking: rotation = vel.x * ROTATION_FACTOR
    pub const ROTATION_FACTOR: f32 = 0.1;

    /// Score gained per tick per pixel/tick of horizontal speed
    pub const SCORE_RATE: f32 = 0.1;
    /// Difficulty cap
    pub const MAX_DIFFICULTY: u32 = 5;
    /// Score needed per difficulty level
    pub const DIFFICULTY_SCORE_STEP: f32 = 1000.0;

    /// Duckie defaults
    pub const DUCKIE_BASE_SPEED: f32 = 3.0;
    pub const DUCKIE_MIN_SIZE: f32 = 30.0;
    pub const DUCKIE_MAX_SIZE: f32 = 50.0;
    /// Duckie hues span the yellow-orange band
    pub const DUCKIE_MIN_HUE: f32 = 30.0;
    pub const DUCKIE_MAX_HUE: f32 = 90.0;
    /// Spawn interval bounds (milliseconds)
    pub const DUCKIE_BASE_INTERVAL_MS: f64 = 2000.0;
    pub const DUCKIE_MIN_INTERVAL_MS: f64 = 500.0;
    /// Interval shrinks this much per difficulty level
    pub const DUCKIE_INTERVAL_STEP_MS: f64 = 200.0;

    /// Wave defaults (decorative only)
    pub const WAVE_INTERVAL_MS: f64 = 2000.0;
    pub const WAVE_HEIGHT: f32 = 30.0;
    pub const WAVE_MIN_AMPLITUDE: f32 = 10.0;
    pub const WAVE_MAX_AMPLITUDE: f32 = 30.0;
    pub const WAVE_MIN_FREQUENCY: f32 = 0.01;
    pub const WAVE_MAX_FREQUENCY: f32 = 0.03;
    /// Phase advance per tick
    pub const WAVE_PHASE_RATE: f32 = 0.05;
    /// Waves are cosmetic; keep only the newest few
    pub const MAX_WAVES: usize = 12;
}
