//! Classification of binary grids and grid statistics

/// Context-aware tile classification
pub mod classifier;
/// Code histograms and connectivity summaries
pub mod statistics;
/// Turn and junction lookup with rotations
pub mod turns;
