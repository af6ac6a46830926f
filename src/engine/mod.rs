//! Interaction engine
//!
//! Owns the player's progress on one `Level`. Pointer handlers in `input`
//! drive an `Idle`/`Dragging` state machine and return the events the
//! renderer should react to; nothing here draws or animates.

pub mod input;
pub mod state;

pub use state::{DragState, EngineEvent, PreviewState, SessionProgress};

use crate::geometry::{segment_intersects_circle, segments_intersect};
use crate::level::{Connection, Level};
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Engine {
    level: Level,
    touch_radius: f32,
    progress: SessionProgress,
}

impl Engine {
    pub fn new(level: Level, touch_radius: f32) -> Self {
        Self {
            level,
            touch_radius,
            progress: SessionProgress::default(),
        }
    }

    pub fn with_tuning(level: Level, tuning: &Tuning) -> Self {
        Self::new(level, tuning.touch_radius)
    }

    /// Replace the level and start a fresh attempt
    pub fn load_level(&mut self, level: Level) {
        log::debug!("Loading level {}", level.index());
        self.level = level;
        self.reset();
    }

    /// Clear all progress on the current level
    pub fn reset(&mut self) {
        self.progress = SessionProgress::default();
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn progress(&self) -> &SessionProgress {
        &self.progress
    }

    pub fn state(&self) -> DragState {
        self.progress.drag
    }

    pub fn touch_radius(&self) -> f32 {
        self.touch_radius
    }

    pub fn is_complete(&self) -> bool {
        self.progress.confirmed.len() == self.level.required_connections().len()
    }

    /// Whether `connection` could be drawn right now
    ///
    /// Obstacles always block. Crossing a confirmed line blocks only on
    /// levels that forbid crossings. Does not check that the connection is
    /// required.
    pub fn is_legal(&self, connection: &Connection) -> bool {
        let Some((p1, p2)) = self.level.segment(connection) else {
            return false;
        };

        if self
            .level
            .obstacles()
            .iter()
            .any(|o| segment_intersects_circle(p1, p2, o.center, o.radius))
        {
            return false;
        }

        if !self.level.allow_line_crossing() {
            let crosses = self
                .progress
                .confirmed
                .iter()
                .filter_map(|c| self.level.segment(c))
                .any(|(a, b)| segments_intersect(p1, p2, a, b));
            if crosses {
                return false;
            }
        }

        true
    }

    /// First required connection (in generation order) not yet drawn
    pub fn request_hint(&self) -> Option<Connection> {
        self.level
            .required_connections()
            .iter()
            .find(|c| !self.progress.confirmed.contains(c))
            .copied()
    }
}
