//! Input/output operations and error handling

/// Command-line interface for running built-in presets
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Error types and the crate result alias
pub mod error;
/// Attempt-loop progress reporting
pub mod progress;
/// Plain-text rendering of solved grids
pub mod render;
