//! Context-aware tile classification of binary grids
//!
//! Every wall cell is classified in two tiers. Cells on the outer ring are
//! classified by position: corners always get corner codes, and edge cells
//! become start codes when the cell just inside them is also a wall. All other
//! wall cells are classified from their orthogonal neighbour pattern, with L
//! turns and T junctions routed through the turn table so that their rotation is
//! recorded alongside the code.

use std::collections::HashMap;

use crate::analysis::turns::lookup_turn;
use crate::io::configuration::ClassifierConfig;
use crate::io::error::{MapError, Result, check_dimension};
use crate::spatial::grid::Grid;
use crate::spatial::neighbors::NeighborPattern;
use crate::spatial::{Cell, Rotation};

/// Rotations recorded for turn tiles, keyed by `[x, y]`
pub type RotationMap = HashMap<[usize; 2], Rotation>;

/// Output of one classification pass
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classification {
    /// Classified grid, same dimensions as the input
    pub grid: Grid,
    /// Rotation for every cell that received a turn code
    pub rotations: RotationMap,
    /// Cells whose neighbour shape had no tile and fell back to a cross
    pub unmatched: usize,
}

impl Classification {
    /// Rotation to render the cell at `(x, y)` with, if it has one
    pub fn rotation_at(&self, x: usize, y: usize) -> Option<Rotation> {
        self.rotations.get(&[x, y]).copied()
    }
}

/// Outer-ring side a border cell lies on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    const fn border_code(self) -> Cell {
        match self {
            Self::Top => Cell::BorderTop,
            Self::Bottom => Cell::BorderBottom,
            Self::Left => Cell::BorderLeft,
            Self::Right => Cell::BorderRight,
        }
    }

    const fn start_code(self) -> Cell {
        match self {
            Self::Top => Cell::StartTop,
            Self::Bottom => Cell::StartBottom,
            Self::Left => Cell::StartLeft,
            Self::Right => Cell::StartRight,
        }
    }

    /// Offset from the border cell to its inward neighbour
    const fn inward(self) -> (isize, isize) {
        match self {
            Self::Top => (0, 1),
            Self::Bottom => (0, -1),
            Self::Left => (1, 0),
            Self::Right => (-1, 0),
        }
    }
}

/// Classify a grid of raw walls into directional tile codes
///
/// With `context_aware` disabled the input is returned unchanged with no
/// rotations. Otherwise only `Empty` and `Wall` cells are accepted, empty cells
/// stay empty, and each wall receives a code derived from its position and
/// neighbours. The result depends on nothing but the input grid.
///
/// # Errors
///
/// Returns an error if:
/// - Either dimension is outside the configured bounds
/// - A cell other than `Empty` or `Wall` is present in context-aware mode
pub fn classify(grid: &Grid, config: &ClassifierConfig) -> Result<Classification> {
    check_dimension("width", grid.width(), config.min_width, config.max_width)?;
    check_dimension("height", grid.height(), config.min_height, config.max_height)?;

    if !config.context_aware {
        return Ok(Classification {
            grid: grid.clone(),
            rotations: RotationMap::new(),
            unmatched: 0,
        });
    }

    if let Some((x, y, cell)) = grid.tiles().find(|&(_, _, cell)| !cell.is_binary()) {
        return Err(MapError::InvalidCell {
            x,
            y,
            value: cell.code().to_string(),
        });
    }

    let mut output = Grid::new(grid.width(), grid.height());
    let mut rotations = RotationMap::new();
    let mut unmatched = 0;

    for (x, y, cell) in grid.tiles() {
        if cell != Cell::Wall {
            continue;
        }

        let code = if grid.is_edge(x, y) {
            border_tile(grid, x, y)
        } else {
            let pattern = NeighborPattern::extract(grid, x, y, config.out_of_bounds);
            match interior_tile(&pattern) {
                Some((code, Some(rotation))) => {
                    rotations.insert([x, y], rotation);
                    code
                }
                Some((code, None)) => code,
                None => {
                    log::warn!(
                        "No tile for {}-neighbour shape {:?} at ({x}, {y}), using {}",
                        pattern.orthogonal_count(),
                        pattern.orthogonal(),
                        Cell::Cross
                    );
                    unmatched += 1;
                    Cell::Cross
                }
            }
        };
        output.set(x, y, code);
    }

    log::info!(
        "Classified {}x{} grid: {} turn tiles, {} unmatched",
        output.width(),
        output.height(),
        rotations.len(),
        unmatched
    );

    Ok(Classification {
        grid: output,
        rotations,
        unmatched,
    })
}

/// Code for a wall on the outer ring, by position
fn border_tile(grid: &Grid, x: usize, y: usize) -> Cell {
    let left = x == 0;
    let right = x + 1 == grid.width();
    let top = y == 0;
    let bottom = y + 1 == grid.height();

    let edge = match (top, right, bottom, left) {
        (true, _, _, true) => return Cell::CornerUpperLeft,
        (true, true, _, _) => return Cell::CornerUpperRight,
        (_, _, true, true) => return Cell::CornerLowerLeft,
        (_, true, true, _) => return Cell::CornerLowerRight,
        (true, _, _, _) => Edge::Top,
        (_, _, true, _) => Edge::Bottom,
        (_, _, _, true) => Edge::Left,
        _ => Edge::Right,
    };

    let (dx, dy) = edge.inward();
    if grid.get_offset(x, y, dx, dy) == Cell::Wall {
        edge.start_code()
    } else {
        edge.border_code()
    }
}

/// Code and optional rotation for an interior wall
///
/// `None` marks a non-straight shape missing from the turn table.
const fn interior_tile(pattern: &NeighborPattern) -> Option<(Cell, Option<Rotation>)> {
    match pattern.orthogonal() {
        (false, false, false, false) | (true, true, true, true) => Some((Cell::Cross, None)),

        (true, false, false, false) => Some((Cell::EndUp, None)),
        (false, true, false, false) => Some((Cell::EndRight, None)),
        (false, false, true, false) => Some((Cell::EndDown, None)),
        (false, false, false, true) => Some((Cell::EndLeft, None)),

        (true, false, true, false) => Some((Cell::BodyVertical, None)),
        (false, true, false, true) => Some((Cell::BodyHorizontal, None)),

        shape @ ((true, true, false, false)
        | (false, true, true, false)
        | (false, false, true, true)
        | (true, false, false, true)
        | (false, true, true, true)
        | (true, false, true, true)
        | (true, true, true, false)
        | (true, true, false, true)) => match lookup_turn(shape) {
            Some((code, rotation)) => Some((code, Some(rotation))),
            None => None,
        },
    }
}
