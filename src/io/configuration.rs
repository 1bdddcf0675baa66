//! Runtime configuration defaults for the command-line interface

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default attempt budget before a generation request fails
pub const DEFAULT_ATTEMPTS: usize = 20;

/// Default output width in cells
pub const DEFAULT_WIDTH: usize = 24;

/// Default output height in cells
pub const DEFAULT_HEIGHT: usize = 24;
