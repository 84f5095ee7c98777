//! Turn table for non-straight neighbour shapes
//!
//! L turns and T junctions each share one visual asset per family. The table
//! gives the tile code together with the clockwise rotation of that asset,
//! measured from the canonical shapes: the L joining top and right, and the T
//! open on left, right and bottom.

use crate::spatial::{Cell, Rotation};

/// Look up a turn or junction for the orthogonal walls `(top, right, bottom, left)`
///
/// Straight pairs, single neighbours, the empty pattern and the full cross are
/// not turns and return `None`, as does the T open on left, right and top,
/// which has no tile.
pub const fn lookup_turn(orthogonal: (bool, bool, bool, bool)) -> Option<(Cell, Rotation)> {
    match orthogonal {
        (true, true, false, false) => Some((Cell::TurnTopRight, Rotation::Deg0)),
        (false, true, true, false) => Some((Cell::TurnBottomRight, Rotation::Deg90)),
        (false, false, true, true) => Some((Cell::TurnBottomLeft, Rotation::Deg180)),
        (true, false, false, true) => Some((Cell::TurnTopLeft, Rotation::Deg270)),

        (false, true, true, true) => Some((Cell::TeeDown, Rotation::Deg0)),
        (true, false, true, true) => Some((Cell::TeeLeft, Rotation::Deg90)),
        (true, true, true, false) => Some((Cell::TeeRight, Rotation::Deg270)),

        (true, true, false, true)
        | (false, false, false, false)
        | (true, false, false, false)
        | (false, true, false, false)
        | (false, false, true, false)
        | (false, false, false, true)
        | (true, false, true, false)
        | (false, true, false, true)
        | (true, true, true, true) => None,
    }
}
