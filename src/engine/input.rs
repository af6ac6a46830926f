//! Pointer event handling
//!
//! One event is processed to completion before the next. Positions are in
//! the normalized play field; finite positions outside it are clamped and
//! non-finite ones are ignored.

use super::Engine;
use super::state::{DragState, EngineEvent, PreviewState};
use crate::geometry::distance;
use crate::level::{Connection, Star};
use crate::{Point, clamp_to_unit};

fn sanitize(pos: Point) -> Option<Point> {
    if pos.is_finite() {
        Some(clamp_to_unit(pos))
    } else {
        log::warn!("Ignoring non-finite pointer position {:?}", pos);
        None
    }
}

impl Engine {
    /// Closest star within the touch radius of `pos` (lowest id on ties)
    pub fn star_at(&self, pos: Point) -> Option<&Star> {
        self.level()
            .stars()
            .iter()
            .map(|s| (s, distance(s.pos, pos)))
            .filter(|(_, d)| *d <= self.touch_radius())
            .min_by(|(a, da), (b, db)| da.total_cmp(db).then(a.id.cmp(&b.id)))
            .map(|(s, _)| s)
    }

    /// Start a gesture if the pointer lands on a star
    ///
    /// Ignored while a gesture is already in progress.
    pub fn on_pointer_down(&mut self, pos: Point) -> Vec<EngineEvent> {
        if matches!(self.progress.drag, DragState::Dragging { .. }) {
            return Vec::new();
        }
        let Some(pos) = sanitize(pos) else {
            return Vec::new();
        };

        if let Some(origin) = self.star_at(pos).map(|s| s.id) {
            self.progress.drag = DragState::Dragging { origin, cursor: pos };
        }
        Vec::new()
    }

    /// Track the cursor and report whether the line under it could be drawn
    pub fn on_pointer_move(&mut self, pos: Point) -> Vec<EngineEvent> {
        let DragState::Dragging { origin, .. } = self.progress.drag else {
            return Vec::new();
        };
        let Some(pos) = sanitize(pos) else {
            return Vec::new();
        };
        self.progress.drag = DragState::Dragging { origin, cursor: pos };

        let state = match self.candidate(origin, pos) {
            Some(c) if self.is_legal(&c) => PreviewState::Valid,
            Some(_) => PreviewState::Invalid,
            None => PreviewState::Neutral,
        };

        vec![EngineEvent::PreviewChanged {
            state,
            from: origin,
            end: pos,
        }]
    }

    /// Finish the gesture, committing the connection if it is required,
    /// new and legal. Always returns to `Idle`.
    pub fn on_pointer_up(&mut self, pos: Point) -> Vec<EngineEvent> {
        let DragState::Dragging { origin, .. } = self.progress.drag else {
            return Vec::new();
        };
        self.progress.drag = DragState::Idle;

        let Some(pos) = sanitize(pos) else {
            return Vec::new();
        };
        let Some(connection) = self.candidate(origin, pos) else {
            return Vec::new();
        };

        if !self.level().requires(&connection) {
            log::debug!("Rejected {:?}: not part of the constellation", connection.ids());
            return Vec::new();
        }
        if self.progress.confirmed.contains(&connection) {
            log::debug!("Rejected {:?}: already drawn", connection.ids());
            return Vec::new();
        }
        if !self.is_legal(&connection) {
            log::debug!("Rejected {:?}: blocked", connection.ids());
            return Vec::new();
        }

        self.progress.confirmed.insert(connection);
        log::debug!(
            "Confirmed {:?} ({}/{})",
            connection.ids(),
            self.progress.confirmed.len(),
            self.level().required_connections().len()
        );

        let mut events = vec![EngineEvent::ConnectionConfirmed(connection)];
        if self.is_complete() && !self.progress.completion_reported {
            self.progress.completion_reported = true;
            log::info!("Level {} complete", self.level().index());
            events.push(EngineEvent::LevelCompleted);
        }
        events
    }

    /// Connection from `origin` to a different star under `pos`
    fn candidate(&self, origin: u32, pos: Point) -> Option<Connection> {
        let target = self.star_at(pos)?;
        Connection::new(origin, target.id)
    }
}
