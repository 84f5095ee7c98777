use crate::spatial::direction::Direction;
use crate::spatial::{Cell, Grid};

/// Start code for a path entering the interior in `direction`
///
/// Only vertical entries have dedicated start tiles; side entries reuse the
/// horizontal body.
pub const fn start_code(direction: Direction) -> Cell {
    match direction {
        Direction::Down => Cell::StartTop,
        Direction::Up => Cell::StartBottom,
        Direction::Left | Direction::Right => Cell::BodyHorizontal,
    }
}

/// Body code shared by every interior cell of a path
pub const fn body_code(direction: Direction) -> Cell {
    if direction.is_vertical() {
        Cell::BodyVertical
    } else {
        Cell::BodyHorizontal
    }
}

/// End code for the last cell, from the step that reached it
pub const fn end_code(previous: [usize; 2], last: [usize; 2]) -> Cell {
    let dx = last[0] as isize - previous[0] as isize;
    let dy = last[1] as isize - previous[1] as isize;

    if dy > 0 {
        Cell::EndUp
    } else if dy < 0 {
        Cell::EndDown
    } else if dx > 0 {
        Cell::EndLeft
    } else if dx < 0 {
        Cell::EndRight
    } else {
        Cell::EndUp
    }
}

/// Rewrite the raw cells of a finished path into directional codes
///
/// The first coordinate gets the start code, the last gets an end code and
/// every coordinate in between gets the body code.
pub fn apply_path_codes(grid: &mut Grid, path: &[[usize; 2]], spawn_direction: Direction) {
    let Some((&[start_x, start_y], rest)) = path.split_first() else {
        return;
    };
    grid.set(start_x, start_y, start_code(spawn_direction));

    let Some((&last, body)) = rest.split_last() else {
        return;
    };
    let previous = body.last().copied().unwrap_or([start_x, start_y]);
    grid.set(last[0], last[1], end_code(previous, last));

    let body_cell = body_code(spawn_direction);
    for &[x, y] in body {
        grid.set(x, y, body_cell);
    }
}
