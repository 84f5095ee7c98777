use crate::io::configuration::BORDER_THICKNESS;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Cell, Grid};

/// Stamp the outer ring around an empty interior
///
/// The result measures `(inner_width + 2) x (inner_height + 2)`. Corners get
/// their own codes, the remaining ring cells get edge codes and the interior
/// stays empty.
///
/// # Errors
///
/// Returns an error if `border_thickness` is not 1, since corner and edge
/// placement assume a single-cell ring
pub fn synthesize_border(
    inner_width: usize,
    inner_height: usize,
    border_thickness: usize,
) -> Result<Grid> {
    if border_thickness != BORDER_THICKNESS {
        return Err(invalid_parameter(
            "border_thickness",
            &border_thickness,
            &"only a single-cell border ring is supported",
        ));
    }

    let width = inner_width + 2 * border_thickness;
    let height = inner_height + 2 * border_thickness;
    let (right, bottom) = (width - 1, height - 1);

    let mut grid = Grid::new(width, height);

    for x in 1..right {
        grid.set(x, 0, Cell::BorderTop);
        grid.set(x, bottom, Cell::BorderBottom);
    }
    for y in 1..bottom {
        grid.set(0, y, Cell::BorderLeft);
        grid.set(right, y, Cell::BorderRight);
    }

    grid.set(0, 0, Cell::CornerUpperLeft);
    grid.set(right, 0, Cell::CornerUpperRight);
    grid.set(0, bottom, Cell::CornerLowerLeft);
    grid.set(right, bottom, Cell::CornerLowerRight);

    Ok(grid)
}
