//! Constrained random walk that grows one obstacle path from a spawn point
//!
//! Each step is admitted only if it stays inside the interior and out of the
//! corner zones, does not close a 2x2 block, and leaves every empty interior
//! cell reachable from every other. The first rejection ends the walk; it is
//! a normal outcome, not an error, and the cells already placed stay placed.

use rand::Rng;

use crate::algorithm::connectivity::would_not_isolate;
use crate::algorithm::spawn::SpawnPoint;
use crate::io::configuration::{CORNER_OFFSET, GenerationConfig};
use crate::math::probability::RandomSelector;
use crate::spatial::grid::{BoundingBox, OutOfBounds};
use crate::spatial::neighbors::NeighborPattern;
use crate::spatial::{Cell, Grid};

/// Why a walk stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The drawn length was used up
    Completed,
    /// The next cell left the interior or entered a corner zone
    OutOfZone,
    /// The next cell was occupied or would close a 2x2 block
    Blocked,
    /// The next cell would cut off part of the empty interior
    WouldIsolate,
    /// The spawn cell itself could not be used; nothing was placed
    SpawnRejected,
}

/// Result of growing one path
#[derive(Clone, Debug)]
pub struct GrowthOutcome {
    /// Spawn the walk started from
    pub spawn: SpawnPoint,
    /// Number of steps drawn for the walk
    pub requested_length: usize,
    /// Placed cells in walk order, spawn first; empty when the spawn was rejected
    pub path: Vec<[usize; 2]>,
    /// Why the walk ended
    pub stop: StopReason,
}

impl GrowthOutcome {
    /// Steps placed after the spawn cell
    pub fn steps_taken(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Whether `pos` lies within `offset` cells of two sides at one corner
pub const fn in_corner_zone(interior: &BoundingBox, pos: [usize; 2], offset: usize) -> bool {
    let [x, y] = pos;
    let near_left = x < interior.min[0] + offset;
    let near_right = x > interior.max[0].saturating_sub(offset);
    let near_top = y < interior.min[1] + offset;
    let near_bottom = y > interior.max[1].saturating_sub(offset);

    (near_left || near_right) && (near_top || near_bottom)
}

/// Whether an obstacle may occupy `(x, y)` under the local pattern rule
///
/// The cell must be empty, and no quadrant block around it may already hold
/// three occupied cells. Cells outside the grid count as occupied.
pub fn can_place_obstacle(grid: &Grid, x: usize, y: usize) -> bool {
    if grid.get(x, y).is_occupied() {
        return false;
    }
    !NeighborPattern::extract(grid, x, y, OutOfBounds::Wall).completes_block()
}

/// Grow one path, marking placed cells as [`Cell::Wall`]
pub fn grow_path<R: Rng>(
    grid: &mut Grid,
    interior: &BoundingBox,
    spawn: SpawnPoint,
    config: &GenerationConfig,
    random: &mut RandomSelector<R>,
) -> GrowthOutcome {
    grow_path_observed(grid, interior, spawn, config, random, &mut |_| {})
}

/// Grow one path, calling `observer` after every placed cell
pub fn grow_path_observed<R: Rng>(
    grid: &mut Grid,
    interior: &BoundingBox,
    spawn: SpawnPoint,
    config: &GenerationConfig,
    random: &mut RandomSelector<R>,
    observer: &mut dyn FnMut(&Grid),
) -> GrowthOutcome {
    let [spawn_x, spawn_y] = spawn.position();

    if !can_place_obstacle(grid, spawn_x, spawn_y)
        || !would_not_isolate(grid, interior, spawn_x, spawn_y)
    {
        log::debug!("Spawn at ({spawn_x}, {spawn_y}) rejected");
        return GrowthOutcome {
            spawn,
            requested_length: 0,
            path: Vec::new(),
            stop: StopReason::SpawnRejected,
        };
    }

    grid.set(spawn_x, spawn_y, Cell::Wall);
    observer(grid);

    let mut path = vec![spawn.position()];
    let mut direction = spawn.direction;
    let mut position = direction.step(spawn.position());
    let requested_length = random.path_length(config.max_path_length);
    let mut stop = StopReason::Completed;

    for step in 0..requested_length {
        let Some([x, y]) = position
            .filter(|&pos| interior.contains(pos) && !in_corner_zone(interior, pos, CORNER_OFFSET))
        else {
            stop = StopReason::OutOfZone;
            break;
        };

        if !can_place_obstacle(grid, x, y) {
            stop = StopReason::Blocked;
            break;
        }
        if !would_not_isolate(grid, interior, x, y) {
            stop = StopReason::WouldIsolate;
            break;
        }

        path.push([x, y]);
        grid.set(x, y, Cell::Wall);
        observer(grid);

        let forced_turn =
            config.guaranteed_turn_step > 0 && (step + 1) % config.guaranteed_turn_step == 0;
        if forced_turn || random.chance(config.turn_chance) {
            if let Some(turned) = random.pick(&direction.turn_options()) {
                direction = turned;
            }
        }

        position = direction.step([x, y]);
    }

    log::debug!(
        "Path from ({spawn_x}, {spawn_y}) heading {:?}: {} of {requested_length} steps, stopped {stop:?}",
        spawn.direction,
        path.len() - 1,
    );

    GrowthOutcome {
        spawn,
        requested_length,
        path,
        stop,
    }
}
