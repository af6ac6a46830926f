//! Interaction state and engine notifications

use std::collections::HashSet;

use crate::Point;
use crate::level::Connection;

/// Gesture state machine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,
    /// Pointer went down on `origin` and is now at `cursor`
    Dragging { origin: u32, cursor: Point },
}

impl DragState {
    pub fn origin(&self) -> Option<u32> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { origin, .. } => Some(*origin),
        }
    }
}

/// Live feedback for the line being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    /// Over another star and the line could be drawn
    Valid,
    /// Over another star but the line is blocked
    Invalid,
    /// Not over a candidate star
    Neutral,
}

/// Notifications for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineEvent {
    PreviewChanged {
        state: PreviewState,
        from: u32,
        end: Point,
    },
    ConnectionConfirmed(Connection),
    LevelCompleted,
}

/// Mutable progress on one attempt at one level
#[derive(Debug, Clone, Default)]
pub struct SessionProgress {
    /// Always a subset of the level's required connections
    pub(crate) confirmed: HashSet<Connection>,
    pub(crate) drag: DragState,
    /// Set once `LevelCompleted` has been emitted
    pub(crate) completion_reported: bool,
}

impl SessionProgress {
    pub fn confirmed(&self) -> impl Iterator<Item = &Connection> {
        self.confirmed.iter()
    }

    pub fn confirmed_count(&self) -> usize {
        self.confirmed.len()
    }

    pub fn is_confirmed(&self, connection: &Connection) -> bool {
        self.confirmed.contains(connection)
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }
}
