//! Error types

use thiserror::Error;

/// What the generator was placing when it gave up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementKind {
    Star,
    Decoy,
}

impl std::fmt::Display for PlacementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementKind::Star => f.write_str("star"),
            PlacementKind::Decoy => f.write_str("decoy"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error("level index must be at least 1, got {0}")]
    InvalidLevelIndex(u32),

    #[error(
        "unsatisfiable placement: could not place {kind} {placed} of {requested} after {attempts} attempts"
    )]
    UnsatisfiablePlacement {
        kind: PlacementKind,
        /// Stars of this kind already placed
        placed: usize,
        requested: usize,
        attempts: u32,
    },

    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),

    #[error("generated level rejected: {0}")]
    Level(#[from] LevelError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("duplicate star id {0}")]
    DuplicateStar(u32),

    #[error("connection references unknown star {0}")]
    UnknownStar(u32),

    #[error("star {0} cannot connect to itself")]
    SelfConnection(u32),

    #[error("duplicate connection {0}-{1}")]
    DuplicateConnection(u32, u32),

    #[error("level has no required connections")]
    NoConnections,
}

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("{0} must be positive")]
    NonPositive(&'static str),

    #[error("margins leave no safe zone (margin_x={margin_x}, margin_y={margin_y})")]
    EmptySafeZone { margin_x: f32, margin_y: f32 },

    #[error("obstacle radius range is inverted ({min} > {max})")]
    InvertedRadiusRange { min: f32, max: f32 },

    #[error("tuning json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PartialEq for TuningError {
    // serde_json::Error has no PartialEq; compare its message instead
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NonPositive(a), Self::NonPositive(b)) => a == b,
            (
                Self::EmptySafeZone { margin_x: ax, margin_y: ay },
                Self::EmptySafeZone { margin_x: bx, margin_y: by },
            ) => ax == bx && ay == by,
            (
                Self::InvertedRadiusRange { min: a0, max: a1 },
                Self::InvertedRadiusRange { min: b0, max: b1 },
            ) => a0 == b0 && a1 == b1,
            (Self::Json(a), Self::Json(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
