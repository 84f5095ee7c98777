//! Fixed-size tile grid with fail-closed reads
//!
//! Cells are stored row-major in an `ndarray` array indexed `[y, x]`, while every
//! public accessor takes `(x, y)` to match map layouts. Reads outside the grid
//! return a configurable sentinel so neighbour scans never need their own bounds
//! handling; writes outside the grid are programming errors.

use ndarray::Array2;
use std::fmt;

use crate::io::error::{MapError, Result};
use crate::spatial::tiles::Cell;

/// What a read outside the grid reports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutOfBounds {
    /// Outside cells behave as walls
    #[default]
    Wall,
    /// Outside cells behave as empty floor
    Empty,
}

impl OutOfBounds {
    /// Cell returned for an out-of-range read
    pub const fn sentinel(self) -> Cell {
        match self {
            Self::Wall => Cell::Wall,
            Self::Empty => Cell::Empty,
        }
    }
}

/// Axis-aligned rectangle of grid positions, both corners inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum `[x, y]`
    pub min: [usize; 2],
    /// Maximum `[x, y]`
    pub max: [usize; 2],
}

impl BoundingBox {
    /// Check if a position is within the bounds
    pub const fn contains(&self, pos: [usize; 2]) -> bool {
        pos[0] >= self.min[0] && pos[0] <= self.max[0] && pos[1] >= self.min[1] && pos[1] <= self.max[1]
    }

    /// Number of columns covered
    pub const fn width(&self) -> usize {
        self.max[0] + 1 - self.min[0]
    }

    /// Number of rows covered
    pub const fn height(&self) -> usize {
        self.max[1] + 1 - self.min[1]
    }

    /// Iterate positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = [usize; 2]> + '_ {
        (self.min[1]..=self.max[1])
            .flat_map(move |y| (self.min[0]..=self.max[0]).map(move |x| [x, y]))
    }
}

/// Rectangular grid of tile codes
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2<Cell>,
    out_of_bounds: OutOfBounds,
}

impl Grid {
    /// Create a grid of empty cells
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), Cell::Empty),
            out_of_bounds: OutOfBounds::Wall,
        }
    }

    /// Build a grid from rows of cells
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows or the rows differ in length
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if height == 0 || width == 0 {
            return Err(MapError::DimensionOutOfRange {
                axis: if height == 0 { "height" } else { "width" },
                value: 0,
                min: 1,
                max: usize::MAX,
            });
        }

        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(MapError::NonRectangular {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
        }

        let flat: Vec<Cell> = rows.into_iter().flatten().collect();
        let cells = Array2::from_shape_vec((height, width), flat).map_err(|e| {
            MapError::InvalidParameter {
                parameter: "rows",
                value: format!("{width}x{height}"),
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            cells,
            out_of_bounds: OutOfBounds::Wall,
        })
    }

    /// Replace the out-of-bounds policy
    #[must_use]
    pub const fn with_out_of_bounds(mut self, policy: OutOfBounds) -> Self {
        self.out_of_bounds = policy;
        self
    }

    /// Current out-of-bounds policy
    pub const fn out_of_bounds(&self) -> OutOfBounds {
        self.out_of_bounds
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Check that `(x, y)` addresses a cell
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }

    /// Read a cell, returning the sentinel outside the grid
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells
            .get([y, x])
            .copied()
            .unwrap_or_else(|| self.out_of_bounds.sentinel())
    }

    /// Read the cell at `(x + dx, y + dy)`
    pub fn get_offset(&self, x: usize, y: usize, dx: isize, dy: isize) -> Cell {
        match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
            (Some(nx), Some(ny)) => self.get(nx, ny),
            _ => self.out_of_bounds.sentinel(),
        }
    }

    /// Whether the cell at `(x, y)` blocks movement
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_occupied()
    }

    /// Write a cell
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        assert!(
            self.in_bounds(x, y),
            "write at ({x}, {y}) outside {}x{} grid",
            self.width(),
            self.height()
        );
        if let Some(slot) = self.cells.get_mut([y, x]) {
            *slot = cell;
        }
    }

    /// The positions of the inner area when a ring of `thickness` surrounds it
    pub fn interior(&self, thickness: usize) -> Option<BoundingBox> {
        let max_x = self.width().checked_sub(thickness + 1)?;
        let max_y = self.height().checked_sub(thickness + 1)?;
        (max_x >= thickness && max_y >= thickness).then_some(BoundingBox {
            min: [thickness, thickness],
            max: [max_x, max_y],
        })
    }

    /// Whether `(x, y)` lies on the outermost ring
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.in_bounds(x, y)
            && (x == 0 || y == 0 || x + 1 == self.width() || y + 1 == self.height())
    }

    /// Iterate `(x, y, cell)` in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), &cell)| (x, y, cell))
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Collapse every non-empty cell to a raw wall
    #[must_use]
    pub fn to_binary(&self) -> Self {
        Self {
            cells: self
                .cells
                .mapv(|cell| if cell.is_occupied() { Cell::Wall } else { Cell::Empty }),
            out_of_bounds: self.out_of_bounds,
        }
    }

    /// Count cells matching a predicate
    pub fn count(&self, predicate: impl Fn(Cell) -> bool) -> usize {
        self.cells.iter().filter(|&&cell| predicate(cell)).count()
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Grid {}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column_width = self
            .cells
            .iter()
            .map(|cell| cell.code().len())
            .max()
            .unwrap_or(1);

        for row in self.cells.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| format!("{:<column_width$}", cell.code()))
                .collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}
