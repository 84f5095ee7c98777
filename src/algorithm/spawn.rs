//! Spawn point selection along the inside of the border ring

use crate::io::configuration::{CORNER_OFFSET, MIN_SPAWN_SEPARATION};
use crate::math::probability::RandomSelector;
use crate::spatial::direction::Direction;
use crate::spatial::grid::BoundingBox;
use rand::Rng;

/// Entry cell of one obstacle path
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpawnPoint {
    /// Column of the first path cell
    pub x: usize,
    /// Row of the first path cell
    pub y: usize,
    /// Direction leading away from the border into the interior
    pub direction: Direction,
}

impl SpawnPoint {
    /// Position as `[x, y]`
    pub const fn position(&self) -> [usize; 2] {
        [self.x, self.y]
    }

    /// Manhattan distance to another spawn point
    pub const fn manhattan(&self, other: &Self) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Every admissible spawn cell, tagged with its inward direction
///
/// Candidates are the interior cells touching each side of the border, minus
/// `CORNER_OFFSET` cells at both ends of every side. Sides are listed top,
/// right, bottom, left.
pub fn spawn_candidates(interior: &BoundingBox) -> Vec<SpawnPoint> {
    let [left, top] = interior.min;
    let [right, bottom] = interior.max;

    let columns = (left + CORNER_OFFSET)..(right + 1).saturating_sub(CORNER_OFFSET);
    let rows = (top + CORNER_OFFSET)..(bottom + 1).saturating_sub(CORNER_OFFSET);

    let mut candidates = Vec::new();
    candidates.extend(columns.clone().map(|x| SpawnPoint {
        x,
        y: top,
        direction: Direction::Down,
    }));
    candidates.extend(rows.clone().map(|y| SpawnPoint {
        x: right,
        y,
        direction: Direction::Left,
    }));
    candidates.extend(columns.map(|x| SpawnPoint {
        x,
        y: bottom,
        direction: Direction::Up,
    }));
    candidates.extend(rows.map(|y| SpawnPoint {
        x: left,
        y,
        direction: Direction::Right,
    }));
    candidates
}

/// Greedily accept points that keep the minimum separation
///
/// Scans `candidates` in order and stops after `count` acceptances. Returning
/// fewer than `count` points is normal on small borders.
pub fn select_separated(candidates: &[SpawnPoint], count: usize) -> Vec<SpawnPoint> {
    let mut selected: Vec<SpawnPoint> = Vec::with_capacity(count.min(candidates.len()));

    for candidate in candidates {
        if selected.len() >= count {
            break;
        }
        let far_enough = selected
            .iter()
            .all(|chosen| candidate.manhattan(chosen) >= MIN_SPAWN_SEPARATION);
        if far_enough {
            selected.push(*candidate);
        }
    }

    selected
}

/// Shuffle the candidates and pick up to `count` well-separated spawn points
pub fn select_spawn_points<R: Rng>(
    interior: &BoundingBox,
    count: usize,
    random: &mut RandomSelector<R>,
) -> Vec<SpawnPoint> {
    let mut candidates = spawn_candidates(interior);
    random.shuffle(&mut candidates);
    let selected = select_separated(&candidates, count);

    log::debug!(
        "Selected {} of {} requested spawn points from {} candidates",
        selected.len(),
        count,
        candidates.len()
    );

    selected
}
