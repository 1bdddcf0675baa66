//! Spatial primitives shared by the solver and its callers
//!
//! This module contains grid-related functionality including:
//! - Row-major coordinate layouts and neighbor lookup
//! - Dense fixed-size grid storage
//! - The axis-aligned direction scheme

/// Direction indices, axes, and the opposite relation
pub mod direction;
/// Coordinate layouts and dense grid storage
pub mod grid;

pub use grid::{Grid, Layout};
