//! Plain-text rendering of solved pattern grids
//!
//! One glyph per pattern, one text row per grid row; 3D grids render as a
//! sequence of labelled layer slabs. This is demo plumbing for the CLI,
//! not an image pipeline: callers mapping patterns back onto real tile
//! content do so outside the solver.

use crate::spatial::grid::Grid;
use std::fmt::Write as _;

/// Glyph shown for pattern indices without a configured glyph
const FALLBACK_GLYPH: char = '?';

/// Render a 2D assignment, one glyph per cell
pub fn render_plane(grid: &Grid<usize, 2>, glyphs: &[char]) -> String {
    let [rows, cols] = grid.extents();
    let mut out = String::with_capacity(rows * (cols + 1));
    for r in 0..rows {
        for c in 0..cols {
            out.push(glyph_for(grid.get([r, c]), glyphs));
        }
        out.push('\n');
    }
    out
}

/// Render a 3D assignment layer by layer along the first axis
pub fn render_layers(grid: &Grid<usize, 3>, glyphs: &[char]) -> String {
    let [layers, rows, cols] = grid.extents();
    let mut out = String::new();
    for l in 0..layers {
        let _ = writeln!(out, "layer {l}");
        for r in 0..rows {
            for c in 0..cols {
                out.push(glyph_for(grid.get([l, r, c]), glyphs));
            }
            out.push('\n');
        }
        if l + 1 < layers {
            out.push('\n');
        }
    }
    out
}

fn glyph_for(pattern: Option<&usize>, glyphs: &[char]) -> char {
    pattern
        .and_then(|&p| glyphs.get(p))
        .copied()
        .unwrap_or(FALLBACK_GLYPH)
}
