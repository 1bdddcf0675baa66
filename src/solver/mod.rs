//! Core algorithm: wave state, support propagation, and the control loop

/// Observe/propagate loop and the bounded retry runner
pub mod executor;
/// Adjacency support counters and the removal worklist
pub mod propagator;
/// Candidate sets with incremental entropy bookkeeping
pub mod wave;

pub use executor::{GenerateOptions, SolveStatus, Solver, generate, generate_with};
pub use propagator::Propagator;
pub use wave::{CellChoice, Wave};
