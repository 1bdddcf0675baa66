//! Built-in demonstration rule sets
//!
//! Stand-ins for the scenario files of a full tile pipeline: each preset
//! bundles a frequency set, an adjacency table, optional placement bands,
//! and one rendering glyph per pattern.

use crate::io::error::Result;
use crate::rules::{AxisBand, CompatibilityTable, PatternSet};
use crate::spatial::direction;

/// A named rule set ready to hand to the solver
#[derive(Clone, Debug)]
pub struct Preset<const D: usize> {
    /// Pattern frequencies
    pub patterns: PatternSet,
    /// Adjacency compatibility table
    pub table: CompatibilityTable<D>,
    /// Optional per-pattern placement bands
    pub bands: Option<Vec<Option<AxisBand>>>,
    /// Rendering glyph per pattern
    pub glyphs: Vec<char>,
}

/// Two patterns that must strictly alternate
///
/// Solvable whenever no periodic axis has odd extent (an odd wrap cycle
/// cannot two-colour).
///
/// # Errors
///
/// Returns an error if the frequency set fails validation, which the
/// hard-coded values never do.
pub fn checkerboard<const D: usize>() -> Result<Preset<D>> {
    let patterns = PatternSet::new(vec![1.0, 1.0])?;
    let mut table = CompatibilityTable::new(2);
    for dir in 0..direction::count::<D>() {
        table.allow(0, dir, 1);
    }
    Ok(Preset {
        patterns,
        table,
        bands: None,
        glyphs: vec!['#', '.'],
    })
}

/// A common background pattern with isolated islands
///
/// The background borders anything; islands border only background, so no
/// two islands ever touch.
///
/// # Errors
///
/// Returns an error if the frequency set fails validation, which the
/// hard-coded values never do.
pub fn sparse_islands<const D: usize>() -> Result<Preset<D>> {
    let patterns = PatternSet::new(vec![4.0, 1.0])?;
    let mut table = CompatibilityTable::new(2);
    for dir in 0..direction::count::<D>() {
        table.allow(0, dir, 0);
        table.allow(0, dir, 1);
    }
    Ok(Preset {
        patterns,
        table,
        bands: None,
        glyphs: vec!['.', 'o'],
    })
}

/// Layered terrain driven by vertical placement bands
///
/// All patterns are mutually adjacent; rock is banded to the lower layers
/// and air to the upper ones, with soil free to appear anywhere. `layers`
/// is the extent along the first (layer) axis.
///
/// # Errors
///
/// Returns an error if the frequency set fails validation, which the
/// hard-coded values never do.
pub fn strata(layers: usize) -> Result<Preset<3>> {
    let patterns = PatternSet::new(vec![1.0, 2.0, 1.0])?;
    let mut table = CompatibilityTable::new(3);
    for dir in 0..direction::count::<3>() {
        for a in 0..3 {
            for b in a..3 {
                table.allow(a, dir, b);
            }
        }
    }
    let split = layers / 2;
    let top = layers.saturating_sub(1);
    let bands = vec![
        Some(AxisBand {
            axis: 0,
            low: 0,
            high: split,
        }),
        None,
        Some(AxisBand {
            axis: 0,
            low: split,
            high: top,
        }),
    ];
    Ok(Preset {
        patterns,
        table,
        bands: Some(bands),
        glyphs: vec!['%', '=', ' '],
    })
}
