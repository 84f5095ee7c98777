//! Eight-neighbour wall patterns around a cell

use crate::spatial::grid::{Grid, OutOfBounds};

/// Wall presence around a cell, orthogonal and diagonal
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NeighborPattern {
    /// Cell above
    pub top: bool,
    /// Cell below
    pub bottom: bool,
    /// Cell to the left
    pub left: bool,
    /// Cell to the right
    pub right: bool,
    /// Cell above and to the left
    pub top_left: bool,
    /// Cell above and to the right
    pub top_right: bool,
    /// Cell below and to the left
    pub bottom_left: bool,
    /// Cell below and to the right
    pub bottom_right: bool,
}

impl NeighborPattern {
    /// Read the pattern around `(x, y)`, resolving outside cells with `policy`
    pub fn extract(grid: &Grid, x: usize, y: usize, policy: OutOfBounds) -> Self {
        let is_wall = |dx: isize, dy: isize| match (x.checked_add_signed(dx), y.checked_add_signed(dy)) {
            (Some(nx), Some(ny)) if grid.in_bounds(nx, ny) => grid.get(nx, ny).is_occupied(),
            _ => policy == OutOfBounds::Wall,
        };

        Self {
            top: is_wall(0, -1),
            bottom: is_wall(0, 1),
            left: is_wall(-1, 0),
            right: is_wall(1, 0),
            top_left: is_wall(-1, -1),
            top_right: is_wall(1, -1),
            bottom_left: is_wall(-1, 1),
            bottom_right: is_wall(1, 1),
        }
    }

    /// Orthogonal walls as `(top, right, bottom, left)`, clockwise from the top
    pub const fn orthogonal(&self) -> (bool, bool, bool, bool) {
        (self.top, self.right, self.bottom, self.left)
    }

    /// Number of orthogonal walls
    pub const fn orthogonal_count(&self) -> usize {
        self.top as usize + self.right as usize + self.bottom as usize + self.left as usize
    }

    /// Whether filling the centre would close one of the four 2x2 quadrant blocks
    ///
    /// A quadrant is the centre plus one orthogonal pair and the diagonal between
    /// them. If the other three cells of any quadrant are already walls, filling
    /// the centre would leave a solid 2x2 block.
    pub const fn completes_block(&self) -> bool {
        (self.top && self.left && self.top_left)
            || (self.top && self.right && self.top_right)
            || (self.bottom && self.left && self.bottom_left)
            || (self.bottom && self.right && self.bottom_right)
    }
}
