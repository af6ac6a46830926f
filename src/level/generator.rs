//! Procedural level generation
//!
//! Deterministic for a given random stream: the caller supplies the RNG, and
//! nothing here reads ambient state.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::model::{Connection, Level, Obstacle, Star};
use crate::Point;
use crate::error::{GenerationError, PlacementKind};
use crate::geometry::distance;
use crate::tuning::Tuning;

/// Difficulty-derived counts for a level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    pub star_count: usize,
    pub decoy_count: usize,
    pub obstacle_count: usize,
    pub allow_line_crossing: bool,
}

impl Difficulty {
    pub fn for_level(level_index: u32) -> Self {
        let n = level_index as usize;
        Self {
            star_count: 3 + n / 3,
            decoy_count: 1 + n / 5,
            obstacle_count: if n < 5 { 0 } else { 1 + n / 7 },
            allow_line_crossing: level_index < 10,
        }
    }
}

/// Generate a level with the default tuning
pub fn generate<R: Rng + ?Sized>(level_index: u32, rng: &mut R) -> Result<Level, GenerationError> {
    generate_with(level_index, rng, &Tuning::default())
}

/// Generate a level reproducibly from a run seed
///
/// Each level index gets its own stream derived from `(seed, level_index)`.
pub fn generate_level(level_index: u32, seed: u64) -> Result<Level, GenerationError> {
    let level_seed = (level_index as u64)
        .wrapping_mul(2654435761)
        .wrapping_add(seed);
    let mut rng = Pcg32::seed_from_u64(level_seed);
    generate(level_index, &mut rng)
}

pub fn generate_with<R: Rng + ?Sized>(
    level_index: u32,
    rng: &mut R,
    tuning: &Tuning,
) -> Result<Level, GenerationError> {
    if level_index < 1 {
        return Err(GenerationError::InvalidLevelIndex(level_index));
    }
    tuning.validate()?;

    let difficulty = Difficulty::for_level(level_index);
    // Grows as stars are placed: huge indices run out of retries long before
    // the requested counts could be allocated
    let mut stars: Vec<Star> = Vec::new();

    // Real stars take ids 1..=star_count, decoys continue from there
    for i in 0..difficulty.star_count {
        let star = place_star(rng, &stars, i as u32 + 1, tuning, PlacementKind::Star, i, difficulty.star_count)?;
        stars.push(star);
    }
    for i in 0..difficulty.decoy_count {
        let id = (difficulty.star_count + i) as u32 + 1;
        let star = place_star(rng, &stars, id, tuning, PlacementKind::Decoy, i, difficulty.decoy_count)?;
        stars.push(star);
    }

    // Obstacles are free to overlap stars
    let obstacles: Vec<Obstacle> = (0..difficulty.obstacle_count)
        .map(|_| Obstacle {
            center: sample_safe_point(rng, tuning),
            radius: rng.random_range(tuning.obstacle_radius_min..=tuning.obstacle_radius_max),
        })
        .collect();

    let required_connections = nearest_neighbor_chain(&stars[..difficulty.star_count]);

    stars.shuffle(rng);

    log::info!(
        "Level {}: {} stars, {} decoys, {} obstacles, {} connections, crossing {}",
        level_index,
        difficulty.star_count,
        difficulty.decoy_count,
        obstacles.len(),
        required_connections.len(),
        if difficulty.allow_line_crossing { "allowed" } else { "forbidden" }
    );

    Ok(Level::new(
        level_index,
        stars,
        required_connections,
        obstacles,
        difficulty.allow_line_crossing,
    )?)
}

/// Uniform sample inside the safe zone
fn sample_safe_point<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Point {
    let (width, height) = tuning.safe_zone_size();
    Point::new(
        tuning.margin_x + rng.random::<f32>() * width,
        tuning.margin_y + rng.random::<f32>() * height,
    )
}

/// Rejection-sample a star position at least `min_separation` from all others
fn place_star<R: Rng + ?Sized>(
    rng: &mut R,
    existing: &[Star],
    id: u32,
    tuning: &Tuning,
    kind: PlacementKind,
    placed: usize,
    requested: usize,
) -> Result<Star, GenerationError> {
    for attempt in 0..tuning.placement_attempts {
        let pos = sample_safe_point(rng, tuning);
        if existing
            .iter()
            .all(|s| distance(s.pos, pos) >= tuning.min_separation)
        {
            if attempt > 100 {
                log::debug!("Placed {} {} after {} attempts", kind, id, attempt + 1);
            }
            return Ok(Star { id, pos });
        }
    }

    log::warn!(
        "Placement budget exhausted for {} {} ({} already on the field)",
        kind,
        id,
        existing.len()
    );
    Err(GenerationError::UnsatisfiablePlacement {
        kind,
        placed,
        requested,
        attempts: tuning.placement_attempts,
    })
}

/// Greedy nearest-neighbor chain over `real`, starting at the first star
///
/// Not a minimum spanning tree: each step only looks at the current star.
/// Ties go to the lowest id.
fn nearest_neighbor_chain(real: &[Star]) -> Vec<Connection> {
    let Some((first, rest)) = real.split_first() else {
        return Vec::new();
    };

    let mut unvisited: Vec<&Star> = rest.iter().collect();
    let mut connections = Vec::with_capacity(unvisited.len());
    let mut current = first;

    while !unvisited.is_empty() {
        let mut best = 0;
        let mut best_dist = distance(current.pos, unvisited[0].pos);
        for (i, star) in unvisited.iter().enumerate().skip(1) {
            let d = distance(current.pos, star.pos);
            if d < best_dist || (d == best_dist && star.id < unvisited[best].id) {
                best = i;
                best_dist = d;
            }
        }

        let next = unvisited.remove(best);
        connections.extend(Connection::new(current.id, next.id));
        current = next;
    }

    connections
}
