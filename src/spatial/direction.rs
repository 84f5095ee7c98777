//! Cardinal directions used for walk stepping and end code derivation

/// One of the four cardinal directions, numbered clockwise from `Up`
///
/// The y axis grows downward, so `Up` decreases the row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0
    Up = 0,
    /// Toward the last column
    Right = 1,
    /// Toward the last row
    Down = 2,
    /// Toward column 0
    Left = 3,
}

impl Direction {
    /// All directions in numeric order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Direction from its numeric value, wrapping modulo 4
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Up,
            1 => Self::Right,
            2 => Self::Down,
            _ => Self::Left,
        }
    }

    /// Numeric value in `0..4`
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The reverse direction, `(d + 2) mod 4`
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Unit offset `(dx, dy)` for one step
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }

    /// Whether the direction moves along the y axis
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// The three directions a walk may take without reversing
    pub fn turn_options(self) -> [Self; 3] {
        let opposite = self.opposite();
        let mut options = [self; 3];
        let mut slot = 0;
        for direction in Self::ALL {
            if direction != opposite {
                if let Some(entry) = options.get_mut(slot) {
                    *entry = direction;
                }
                slot += 1;
            }
        }
        options
    }

    /// Position one step away, `None` when it would leave the non-negative quadrant
    pub const fn step(self, position: [usize; 2]) -> Option<[usize; 2]> {
        let (dx, dy) = self.offset();
        match (
            position[0].checked_add_signed(dx),
            position[1].checked_add_signed(dy),
        ) {
            (Some(x), Some(y)) => Some([x, y]),
            _ => None,
        }
    }
}
