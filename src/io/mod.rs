//! Configuration, errors, layout files and the command line

/// Command-line parsing and dispatch
pub mod cli;
/// Constants and runtime configuration
pub mod configuration;
/// Error types and result alias
pub mod error;
/// JSON map layout read and write
pub mod layout;
/// Batch progress display
pub mod progress;
