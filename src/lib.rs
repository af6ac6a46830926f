//! Star Catcher - A constellation-drawing puzzle
//!
//! Core modules:
//! - `geometry`: Pure distance/intersection tests in the unit square
//! - `level`: Level model and deterministic procedural generation
//! - `engine`: Touch-drag state machine and connection validation
//! - `scoring`: Timed attempts, hints and score
//! - `progress`: Unlock progress collaborator
//! - `tuning`: Data-driven game balance

pub mod engine;
pub mod error;
pub mod geometry;
pub mod level;
pub mod progress;
pub mod scoring;
pub mod tuning;

pub use engine::{DragState, Engine, EngineEvent, PreviewState};
pub use error::{GenerationError, LevelError, TuningError};
pub use level::{Connection, Difficulty, Level, Obstacle, Star, generate, generate_level};
pub use progress::{MemoryProgress, ProgressStore};
pub use scoring::{Attempt, AttemptOutcome};
pub use tuning::Tuning;

use glam::Vec2;

/// A position in the normalized `[0,1]×[0,1]` play field
pub type Point = Vec2;

/// Game configuration constants
pub mod consts {
    /// Minimum distance between any two stars
    pub const MIN_STAR_SEPARATION: f32 = 0.1;

    /// Safe zone margins (keep stars clear of HUD chrome)
    pub const SAFE_MARGIN_X: f32 = 0.1;
    pub const SAFE_MARGIN_Y: f32 = 0.15;

    /// Obstacle radius range
    pub const OBSTACLE_RADIUS_MIN: f32 = 0.05;
    pub const OBSTACLE_RADIUS_MAX: f32 = 0.1;

    /// Pointer pick radius (~80px on a phone-width canvas)
    pub const TOUCH_RADIUS: f32 = 0.07;

    /// Candidate samples per star before placement is declared unsatisfiable
    pub const PLACEMENT_ATTEMPTS: u32 = 10_000;

    /// Hints
    pub const HINTS_PER_LEVEL: u8 = 3;
    pub const HINT_PENALTY: u32 = 250;

    /// Time limit: 60s at level 1, one second less per level, floor of 15s
    pub const BASE_TIME_LIMIT_MS: u64 = 60_000;
    pub const TIME_LIMIT_STEP_MS: u64 = 1_000;
    pub const MIN_TIME_LIMIT_MS: u64 = 15_000;
    /// Score per whole second left on the clock
    pub const TIME_BONUS_PER_SECOND: u32 = 10;
}

/// Clamp a point into the unit square
#[inline]
pub fn clamp_to_unit(p: Point) -> Point {
    p.clamp(Vec2::ZERO, Vec2::ONE)
}
