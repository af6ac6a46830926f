//! Levels: the immutable puzzle model and its procedural generator
//!
//! - Seeded RNG only, passed in by the caller
//! - Stable id assignment: real stars first, then decoys
//! - Display order is shuffled and carries no meaning

pub mod generator;
pub mod model;

pub use generator::{Difficulty, generate, generate_level, generate_with};
pub use model::{Connection, Level, Obstacle, Star};
