//! Summary statistics over finished grids

use std::fmt;

use crate::algorithm::connectivity::empty_regions;
use crate::spatial::{Cell, Grid};

/// Tile code counts and empty-area connectivity of a grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridStatistics {
    /// Grid width
    pub width: usize,
    /// Grid height
    pub height: usize,
    /// Non-zero code counts, in [`Cell::ALL`] order
    pub histogram: Vec<(Cell, usize)>,
    /// Sizes of the separate empty areas inside the outer ring
    pub empty_regions: Vec<usize>,
}

impl GridStatistics {
    /// Collect statistics for `grid`
    ///
    /// Connectivity is measured inside the outer ring, which is where both
    /// pipelines keep walkable floor. Grids without an interior report no
    /// empty regions.
    pub fn collect(grid: &Grid) -> Self {
        let histogram = Cell::ALL
            .iter()
            .map(|&code| (code, grid.count(|cell| cell == code)))
            .filter(|&(_, count)| count > 0)
            .collect();

        let empty_regions = grid
            .interior(1)
            .map_or_else(Vec::new, |interior| empty_regions(grid, &interior));

        Self {
            width: grid.width(),
            height: grid.height(),
            histogram,
            empty_regions,
        }
    }

    /// Number of cells holding `code`
    pub fn count(&self, code: Cell) -> usize {
        self.histogram
            .iter()
            .find(|&&(cell, _)| cell == code)
            .map_or(0, |&(_, count)| count)
    }

    /// Number of empty cells inside the outer ring
    pub fn empty_cells(&self) -> usize {
        self.empty_regions.iter().sum()
    }

    /// Whether the interior floor forms at most one connected area
    pub fn is_connected(&self) -> bool {
        self.empty_regions.len() <= 1
    }

    /// Cells holding a turn or junction code
    pub fn turn_cells(&self) -> usize {
        self.histogram
            .iter()
            .filter(|(cell, _)| cell.is_turn())
            .map(|&(_, count)| count)
            .sum()
    }
}

impl fmt::Display for GridStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{} grid", self.width, self.height)?;
        for (cell, count) in &self.histogram {
            writeln!(f, "  {:<10} {count}", cell.code())?;
        }
        write!(
            f,
            "  {} empty cells in {} region(s)",
            self.empty_cells(),
            self.empty_regions.len()
        )
    }
}
