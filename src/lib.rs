//! Constraint-propagation pattern synthesis for 2D and 3D grids
//!
//! Given per-pattern frequencies and direction-symmetric adjacency rules,
//! the solver collapses the lowest-entropy cell to a weighted random
//! pattern, propagates the consequences to an arc-consistency fixpoint,
//! and repeats until every cell is decided or a contradiction forces a
//! fresh attempt with a new seed.

#![deny(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for entropy bookkeeping
pub mod math;
/// Pattern frequencies and adjacency rule tables
pub mod rules;
/// Core algorithm: wave, propagator, and control loop
pub mod solver;
/// Grid layouts and direction primitives
pub mod spatial;

pub use io::error::{GenerationError, Result};
