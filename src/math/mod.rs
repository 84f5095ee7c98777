//! Mathematical utilities for the algorithm

/// Seeded random source and uniform draws
pub mod probability;
