//! Procedural arena generation and context-aware tile classification
//!
//! Arenas are bordered grids with obstacle paths grown inward from the border
//! by a constrained random walk that never cuts the open floor into pockets.
//! Independently, any binary wall layout can be classified into directional
//! tile codes with rotations for turn tiles.

#![forbid(unsafe_code)]

/// Border synthesis, spawn selection, path growth and generation entry point
pub mod algorithm;
/// Tile classification, turn lookup and grid statistics
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Seeded random draws
pub mod math;
/// Grid storage, tile codes, directions and neighbour patterns
pub mod spatial;

pub use algorithm::executor::{ArenaGenerator, Generation, generate};
pub use analysis::classifier::{Classification, classify};
pub use io::configuration::{ClassifierConfig, GenerationConfig};
pub use io::error::{MapError, Result};
