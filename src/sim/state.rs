//! Game state and core simulation types
//!
//! The whole of a run lives in [`GameState`]; restart discards it and
//! constructs a fresh one.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only an external restart leaves this state
    GameOver,
}

/// Current viewport dimensions, supplied by the host every tick.
///
/// Never cached across ticks so resizes take effect immediately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Vertical position the surfer rides at while grounded
    pub fn ground_y(&self) -> f32 {
        self.height - GROUND_OFFSET
    }

    /// Waterline duckies and waves sit on
    pub fn waterline_y(&self) -> f32 {
        self.height - WATERLINE_OFFSET
    }
}

/// The player's surfer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surfer {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    /// Cosmetic banking angle (radians), derived from vel.x
    pub rotation: f32,
    pub jumping: bool,
}

impl Surfer {
    /// Surfer standing at the horizontal center, on the ground line
    pub fn new(viewport: Viewport) -> Self {
        Self {
            pos: Vec2::new(viewport.width / 2.0, viewport.ground_y()),
            size: Vec2::new(SURFER_WIDTH, SURFER_HEIGHT),
            vel: Vec2::ZERO,
            rotation: 0.0,
            jumping: false,
        }
    }
}

/// An obstacle drifting in from the right
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Duckie {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Duckies are square
    pub size: f32,
    /// Pixels per tick, leftward
    pub speed: f32,
    /// Color hue in degrees (yellow-orange band)
    pub hue: f32,
}

impl Duckie {
    pub fn size_vec(&self) -> Vec2 {
        Vec2::splat(self.size)
    }
}

/// A decorative sinusoidal wave (never collides)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wave {
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub phase: f32,
}

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn randomness (sizes, hues, wave shapes)
    #[serde(skip, default = "default_rng")]
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Accumulated simulation time in milliseconds
    pub time_ms: f64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Monotonic while Playing; accrues from horizontal movement
    pub score: f32,
    /// Always `difficulty_for_score(score)`, recomputed every tick
    pub difficulty: u32,
    /// Duckies cleared by jumping over them
    pub dodged: u32,
    pub surfer: Surfer,
    /// Append at spawn; removal preserves survivor order
    pub duckies: Vec<Duckie>,
    /// Cosmetic only, capped at MAX_WAVES
    pub waves: Vec<Wave>,
    /// Sim time of the last duckie spawn
    pub last_duckie_ms: f64,
    /// Current duckie spawn interval; shrinks with difficulty
    pub duckie_interval_ms: f64,
    /// Sim time of the last wave spawn
    pub last_wave_ms: f64,
}

impl GameState {
    /// Create the canonical initial state for a run
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            time_ms: 0.0,
            time_ticks: 0,
            score: 0.0,
            difficulty: 1,
            dodged: 0,
            surfer: Surfer::new(viewport),
            duckies: Vec::new(),
            waves: Vec::new(),
            last_duckie_ms: 0.0,
            duckie_interval_ms: DUCKIE_BASE_INTERVAL_MS,
            last_wave_ms: 0.0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Difficulty as a pure function of score: `min(5, 1 + floor(score / 1000))`
///
/// Non-finite or negative scores fall back to level 1.
pub fn difficulty_for_score(score: f32) -> u32 {
    if !score.is_finite() || score <= 0.0 {
        return 1;
    }
    ((score / DIFFICULTY_SCORE_STEP) as u32)
        .saturating_add(1)
        .min(MAX_DIFFICULTY)
}

/// Duckie spawn interval for a difficulty level: `max(500, 2000 - d * 200)` ms
pub fn duckie_interval_for(difficulty: u32) -> f64 {
    (DUCKIE_BASE_INTERVAL_MS - difficulty as f64 * DUCKIE_INTERVAL_STEP_MS)
        .max(DUCKIE_MIN_INTERVAL_MS)
}
