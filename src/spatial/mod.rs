//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - The tile code vocabulary
//! - Cardinal directions
//! - Grid storage with out-of-bounds policy
//! - Neighbour pattern extraction

/// Cardinal directions and stepping
pub mod direction;
/// Grid storage and bounds handling
pub mod grid;
/// Eight-neighbour wall patterns
pub mod neighbors;
/// Tile codes and rotations
pub mod tiles;

pub use grid::Grid;
pub use tiles::{Cell, Rotation};
