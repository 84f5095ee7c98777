//! Reachability of empty cells within a region

use bitvec::prelude::*;

use crate::spatial::grid::BoundingBox;
use crate::spatial::{Cell, Grid};

/// Flood fill over the empty cells of a rectangular region
///
/// Uses an explicit stack so large regions cannot exhaust the call stack. The
/// visited set is a bitset over the region, indexed row-major.
struct RegionFill<'a> {
    grid: &'a Grid,
    region: BoundingBox,
    visited: BitVec,
    stack: Vec<[usize; 2]>,
}

impl<'a> RegionFill<'a> {
    fn new(grid: &'a Grid, region: BoundingBox) -> Self {
        Self {
            grid,
            region,
            visited: bitvec![0; region.width() * region.height()],
            stack: Vec::new(),
        }
    }

    const fn index(&self, [x, y]: [usize; 2]) -> usize {
        (y - self.region.min[1]) * self.region.width() + (x - self.region.min[0])
    }

    fn is_open(&self, pos: [usize; 2]) -> bool {
        self.region.contains(pos) && self.grid.get(pos[0], pos[1]) == Cell::Empty
    }

    fn is_visited(&self, pos: [usize; 2]) -> bool {
        self.visited.get(self.index(pos)).as_deref() == Some(&true)
    }

    /// Count cells 4-connected to `start`
    fn count_from(&mut self, start: [usize; 2]) -> usize {
        if !self.is_open(start) || self.is_visited(start) {
            return 0;
        }

        let mut reached = 0;
        let start_index = self.index(start);
        self.visited.set(start_index, true);
        self.stack.push(start);

        while let Some([x, y]) = self.stack.pop() {
            reached += 1;

            let neighbours = [
                x.checked_add(1).map(|nx| [nx, y]),
                x.checked_sub(1).map(|nx| [nx, y]),
                y.checked_add(1).map(|ny| [x, ny]),
                y.checked_sub(1).map(|ny| [x, ny]),
            ];

            for next in neighbours.into_iter().flatten() {
                if !self.is_open(next) || self.is_visited(next) {
                    continue;
                }
                let index = self.index(next);
                self.visited.set(index, true);
                self.stack.push(next);
            }
        }

        reached
    }
}

/// First empty cell of the region in row-major order
fn first_empty(grid: &Grid, region: &BoundingBox) -> Option<[usize; 2]> {
    region
        .positions()
        .find(|&[x, y]| grid.get(x, y) == Cell::Empty)
}

/// Count empty cells reachable from `start` without leaving `region`
pub fn reachable_empty(grid: &Grid, region: &BoundingBox, start: [usize; 2]) -> usize {
    RegionFill::new(grid, *region).count_from(start)
}

/// Whether every empty cell of `region` belongs to a single 4-connected area
///
/// A region without empty cells counts as connected.
pub fn is_connected(grid: &Grid, region: &BoundingBox) -> bool {
    let Some(start) = first_empty(grid, region) else {
        return true;
    };
    let total = region
        .positions()
        .filter(|&[x, y]| grid.get(x, y) == Cell::Empty)
        .count();
    reachable_empty(grid, region, start) == total
}

/// Sizes of the separate empty areas of `region`
///
/// Areas are listed in row-major order of their first cell; a connected region
/// yields at most one entry.
pub fn empty_regions(grid: &Grid, region: &BoundingBox) -> Vec<usize> {
    let mut fill = RegionFill::new(grid, *region);
    region
        .positions()
        .filter_map(|pos| match fill.count_from(pos) {
            0 => None,
            size => Some(size),
        })
        .collect()
}

/// Whether walling `(x, y)` keeps the empty cells of `region` connected
///
/// The cell is set to [`Cell::Wall`] for the check and restored afterwards,
/// whatever the outcome.
pub fn would_not_isolate(grid: &mut Grid, region: &BoundingBox, x: usize, y: usize) -> bool {
    let original = grid.get(x, y);
    grid.set(x, y, Cell::Wall);
    let connected = is_connected(grid, region);
    grid.set(x, y, original);
    connected
}
