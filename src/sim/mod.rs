//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{aabb_overlap, surfer_hits_duckie};
pub use state::{
    Duckie, GamePhase, GameState, Surfer, Viewport, Wave, difficulty_for_score,
    duckie_interval_for,
};
pub use tick::{TickInput, tick};
