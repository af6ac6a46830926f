//! Level data types
//!
//! A `Level` is immutable once built; the interaction engine owns all
//! per-attempt progress separately.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::LevelError;

/// A star the player can draw from or to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    pub id: u32,
    pub pos: Point,
}

impl Star {
    pub fn new(id: u32, x: f32, y: f32) -> Self {
        Self {
            id,
            pos: Point::new(x, y),
        }
    }
}

/// An unordered pair of distinct star ids
///
/// Stored with the lower id first, so derived equality and hashing treat
/// `{a, b}` and `{b, a}` as the same connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct Connection {
    low: u32,
    high: u32,
}

impl Connection {
    /// Connect two stars. Returns `None` when both ids are the same.
    pub fn new(a: u32, b: u32) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Both endpoints, lower id first
    #[inline]
    pub fn ids(&self) -> (u32, u32) {
        (self.low, self.high)
    }

    #[inline]
    pub fn contains(&self, id: u32) -> bool {
        self.low == id || self.high == id
    }

    /// The endpoint opposite `id`, if `id` is an endpoint
    pub fn other(&self, id: u32) -> Option<u32> {
        if id == self.low {
            Some(self.high)
        } else if id == self.high {
            Some(self.low)
        } else {
            None
        }
    }
}

impl TryFrom<(u32, u32)> for Connection {
    type Error = LevelError;

    fn try_from((a, b): (u32, u32)) -> Result<Self, Self::Error> {
        Connection::new(a, b).ok_or(LevelError::SelfConnection(a))
    }
}

impl From<Connection> for (u32, u32) {
    fn from(c: Connection) -> Self {
        c.ids()
    }
}

/// Circular region that blocks any segment passing through it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub center: Point,
    pub radius: f32,
}

/// A complete puzzle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LevelData")]
pub struct Level {
    index: u32,
    /// All stars, real and decoy, in display order
    stars: Vec<Star>,
    /// Target graph, in generation order (hint order)
    required_connections: Vec<Connection>,
    obstacles: Vec<Obstacle>,
    allow_line_crossing: bool,
}

/// Unvalidated wire form of a level
#[derive(Deserialize)]
struct LevelData {
    index: u32,
    stars: Vec<Star>,
    required_connections: Vec<Connection>,
    #[serde(default)]
    obstacles: Vec<Obstacle>,
    #[serde(default = "default_allow_crossing")]
    allow_line_crossing: bool,
}

fn default_allow_crossing() -> bool {
    true
}

impl TryFrom<LevelData> for Level {
    type Error = LevelError;

    fn try_from(data: LevelData) -> Result<Self, Self::Error> {
        Level::new(
            data.index,
            data.stars,
            data.required_connections,
            data.obstacles,
            data.allow_line_crossing,
        )
    }
}

impl Level {
    /// Build a level, checking star ids are unique and the required
    /// connections are a non-empty set of distinct edges between existing
    /// stars
    pub fn new(
        index: u32,
        stars: Vec<Star>,
        required_connections: Vec<Connection>,
        obstacles: Vec<Obstacle>,
        allow_line_crossing: bool,
    ) -> Result<Self, LevelError> {
        let mut ids = HashSet::with_capacity(stars.len());
        for star in &stars {
            if !ids.insert(star.id) {
                return Err(LevelError::DuplicateStar(star.id));
            }
        }

        if required_connections.is_empty() {
            return Err(LevelError::NoConnections);
        }

        let mut seen = HashSet::with_capacity(required_connections.len());
        for connection in &required_connections {
            let (a, b) = connection.ids();
            for id in [a, b] {
                if !ids.contains(&id) {
                    return Err(LevelError::UnknownStar(id));
                }
            }
            if !seen.insert(*connection) {
                return Err(LevelError::DuplicateConnection(a, b));
            }
        }

        Ok(Self {
            index,
            stars,
            required_connections,
            obstacles,
            allow_line_crossing,
        })
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn required_connections(&self) -> &[Connection] {
        &self.required_connections
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn allow_line_crossing(&self) -> bool {
        self.allow_line_crossing
    }

    pub fn star(&self, id: u32) -> Option<&Star> {
        self.stars.iter().find(|s| s.id == id)
    }

    pub fn requires(&self, connection: &Connection) -> bool {
        self.required_connections.contains(connection)
    }

    /// Endpoint positions of a connection
    pub fn segment(&self, connection: &Connection) -> Option<(Point, Point)> {
        let (a, b) = connection.ids();
        Some((self.star(a)?.pos, self.star(b)?.pos))
    }

    /// Ids of stars that appear in the target graph, ascending
    pub fn real_star_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .stars
            .iter()
            .map(|s| s.id)
            .filter(|&id| self.required_connections.iter().any(|c| c.contains(id)))
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Ids of distractor stars, ascending
    pub fn decoy_star_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self
            .stars
            .iter()
            .map(|s| s.id)
            .filter(|&id| !self.required_connections.iter().any(|c| c.contains(id)))
            .collect();
        ids.sort_unstable();
        ids
    }
}
