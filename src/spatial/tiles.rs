//! Tile code vocabulary shared by generation and classification
//!
//! Every cell of a finished map holds one [`Cell`]. Codes serialize to the short
//! strings used by map layout files, so a layout written by the generator can be
//! read back by the classifier or handed to a renderer unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single grid cell: empty floor, a raw wall, or a classified tile code
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Walkable floor
    #[default]
    #[serde(rename = "0")]
    Empty,
    /// Unclassified wall or obstacle cell
    #[serde(rename = "1")]
    Wall,

    /// Upper-left corner of the border ring
    #[serde(rename = "cul")]
    CornerUpperLeft,
    /// Upper-right corner of the border ring
    #[serde(rename = "cur")]
    CornerUpperRight,
    /// Lower-left corner of the border ring
    #[serde(rename = "cbl")]
    CornerLowerLeft,
    /// Lower-right corner of the border ring
    #[serde(rename = "cbr")]
    CornerLowerRight,

    /// Top border edge
    #[serde(rename = "bu")]
    BorderTop,
    /// Bottom border edge
    #[serde(rename = "bb")]
    BorderBottom,
    /// Left border edge
    #[serde(rename = "bl")]
    BorderLeft,
    /// Right border edge
    #[serde(rename = "br")]
    BorderRight,

    /// Path origin attached to the top border
    #[serde(rename = "su")]
    StartTop,
    /// Path origin attached to the bottom border
    #[serde(rename = "sb")]
    StartBottom,
    /// Path origin attached to the left border
    #[serde(rename = "sl")]
    StartLeft,
    /// Path origin attached to the right border
    #[serde(rename = "sr")]
    StartRight,

    /// Straight segment running top to bottom
    #[serde(rename = "o")]
    BodyVertical,
    /// Straight segment running left to right
    #[serde(rename = "os")]
    BodyHorizontal,

    /// Path terminus joined to the cell above
    #[serde(rename = "eu")]
    EndUp,
    /// Path terminus joined to the cell below
    #[serde(rename = "eb")]
    EndDown,
    /// Path terminus joined to the cell on its left
    #[serde(rename = "el")]
    EndLeft,
    /// Path terminus joined to the cell on its right
    #[serde(rename = "er")]
    EndRight,

    /// L turn joining top and right
    #[serde(rename = "turn_tr")]
    TurnTopRight,
    /// L turn joining top and left
    #[serde(rename = "turn_tl")]
    TurnTopLeft,
    /// L turn joining bottom and right
    #[serde(rename = "turn_br")]
    TurnBottomRight,
    /// L turn joining bottom and left
    #[serde(rename = "turn_bl")]
    TurnBottomLeft,

    /// T junction open on left, right and bottom
    #[serde(rename = "turn_hb")]
    TeeDown,
    /// T junction open on top, bottom and right
    #[serde(rename = "turn_vr")]
    TeeRight,
    /// T junction open on top, bottom and left
    #[serde(rename = "turn_vl")]
    TeeLeft,

    /// Four-way junction, also used for isolated cells
    #[serde(rename = "turn_multi")]
    Cross,
}

impl Cell {
    /// Every cell variant in declaration order
    pub const ALL: [Self; 28] = [
        Self::Empty,
        Self::Wall,
        Self::CornerUpperLeft,
        Self::CornerUpperRight,
        Self::CornerLowerLeft,
        Self::CornerLowerRight,
        Self::BorderTop,
        Self::BorderBottom,
        Self::BorderLeft,
        Self::BorderRight,
        Self::StartTop,
        Self::StartBottom,
        Self::StartLeft,
        Self::StartRight,
        Self::BodyVertical,
        Self::BodyHorizontal,
        Self::EndUp,
        Self::EndDown,
        Self::EndLeft,
        Self::EndRight,
        Self::TurnTopRight,
        Self::TurnTopLeft,
        Self::TurnBottomRight,
        Self::TurnBottomLeft,
        Self::TeeDown,
        Self::TeeRight,
        Self::TeeLeft,
        Self::Cross,
    ];

    /// Short code used in layout files and text output
    pub const fn code(self) -> &'static str {
        match self {
            Self::Empty => "0",
            Self::Wall => "1",
            Self::CornerUpperLeft => "cul",
            Self::CornerUpperRight => "cur",
            Self::CornerLowerLeft => "cbl",
            Self::CornerLowerRight => "cbr",
            Self::BorderTop => "bu",
            Self::BorderBottom => "bb",
            Self::BorderLeft => "bl",
            Self::BorderRight => "br",
            Self::StartTop => "su",
            Self::StartBottom => "sb",
            Self::StartLeft => "sl",
            Self::StartRight => "sr",
            Self::BodyVertical => "o",
            Self::BodyHorizontal => "os",
            Self::EndUp => "eu",
            Self::EndDown => "eb",
            Self::EndLeft => "el",
            Self::EndRight => "er",
            Self::TurnTopRight => "turn_tr",
            Self::TurnTopLeft => "turn_tl",
            Self::TurnBottomRight => "turn_br",
            Self::TurnBottomLeft => "turn_bl",
            Self::TeeDown => "turn_hb",
            Self::TeeRight => "turn_vr",
            Self::TeeLeft => "turn_vl",
            Self::Cross => "turn_multi",
        }
    }

    /// Whether the cell blocks movement
    pub const fn is_occupied(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Whether the cell is one of the two raw input values
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::Empty | Self::Wall)
    }

    /// Whether the cell is one of the four border corners
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::CornerUpperLeft
                | Self::CornerUpperRight
                | Self::CornerLowerLeft
                | Self::CornerLowerRight
        )
    }

    /// Whether the cell is an L turn or T junction
    pub const fn is_turn(self) -> bool {
        matches!(
            self,
            Self::TurnTopRight
                | Self::TurnTopLeft
                | Self::TurnBottomRight
                | Self::TurnBottomLeft
                | Self::TeeDown
                | Self::TeeRight
                | Self::TeeLeft
        )
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when a string is not a known tile code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCode(pub String);

impl fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tile code '{}'", self.0)
    }
}

impl std::error::Error for UnknownCode {}

impl FromStr for Cell {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|cell| cell.code() == s)
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}

/// Clockwise orientation applied to a shared turn asset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    /// Canonical orientation
    #[default]
    #[serde(rename = "0")]
    Deg0,
    /// Quarter turn clockwise
    #[serde(rename = "90")]
    Deg90,
    /// Half turn
    #[serde(rename = "180")]
    Deg180,
    /// Three quarter turns clockwise
    #[serde(rename = "270")]
    Deg270,
}

impl Rotation {
    /// Angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}
