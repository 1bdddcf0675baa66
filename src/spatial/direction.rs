//! Axis-aligned direction indexing for `D`-dimensional grids
//!
//! A `D`-dimensional grid has `2 * D` face directions, numbered so that
//! direction `d < D` steps negatively along axis `d` and direction
//! `d >= D` steps positively along axis `2 * D - 1 - d`. Under this
//! numbering a direction and its opposite always sum to `2 * D - 1`,
//! making the opposite lookup a single subtraction.

/// Number of face directions of a `D`-dimensional grid
pub const fn count<const D: usize>() -> usize {
    2 * D
}

/// Direction pointing the opposite way
pub const fn opposite<const D: usize>(dir: usize) -> usize {
    2 * D - 1 - dir
}

/// Axis a direction moves along
pub const fn axis<const D: usize>(dir: usize) -> usize {
    if dir < D { dir } else { 2 * D - 1 - dir }
}

/// True for directions stepping toward lower coordinates
pub const fn is_negative<const D: usize>(dir: usize) -> bool {
    dir < D
}
