//! Pattern frequencies and adjacency rule tables
//!
//! Everything here is built once before solving and never mutated during a
//! solve. The solver consumes exactly two artifacts: a validated frequency
//! distribution and a direction-symmetric compatibility table.

use crate::io::error::{GenerationError, Result};
use crate::spatial::direction;

/// Built-in demonstration rule sets
pub mod presets;

/// Validated pattern frequency distribution
///
/// Frequencies are relative likelihoods; they need not sum to one. Every
/// frequency must be positive and finite, checked at construction so the
/// wave's logarithmic bookkeeping never sees a degenerate value.
#[derive(Clone, Debug)]
pub struct PatternSet {
    frequencies: Vec<f64>,
}

impl PatternSet {
    /// Validate and wrap a frequency distribution
    ///
    /// # Errors
    ///
    /// Returns an error if the distribution is empty or any frequency is
    /// zero, negative, or not finite.
    pub fn new(frequencies: Vec<f64>) -> Result<Self> {
        if frequencies.is_empty() {
            return Err(GenerationError::EmptyPatternSet);
        }
        for (index, &value) in frequencies.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(GenerationError::InvalidFrequency { index, value });
            }
        }
        Ok(Self { frequencies })
    }

    /// Number of patterns
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    /// True if the set holds no patterns (never the case after `new`)
    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// The raw frequency slice, indexed by pattern
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }
}

/// Per-pattern, per-direction adjacency compatibility lists
///
/// `allowed(a, d)` lists the patterns permitted next to `a` along
/// direction `d`. Tables built through [`CompatibilityTable::allow`] are
/// direction-symmetric by construction; [`CompatibilityTable::from_lists`]
/// validates symmetry on explicit input because an asymmetric table makes
/// the propagator silently unsound rather than failing loudly.
#[derive(Clone, Debug)]
pub struct CompatibilityTable<const D: usize> {
    num_patterns: usize,
    allowed: Vec<Vec<usize>>,
}

impl<const D: usize> CompatibilityTable<D> {
    /// Create a table with no rules
    pub fn new(num_patterns: usize) -> Self {
        Self {
            num_patterns,
            allowed: vec![Vec::new(); num_patterns * direction::count::<D>()],
        }
    }

    const fn slot(pattern: usize, dir: usize) -> usize {
        pattern * direction::count::<D>() + dir
    }

    /// Permit `b` adjacent to `a` along `dir`
    ///
    /// The mirrored rule (`a` adjacent to `b` along the opposite
    /// direction) is inserted automatically.
    ///
    /// # Panics
    ///
    /// Panics if a pattern index or the direction is out of range; those
    /// are programming errors, not runtime conditions.
    pub fn allow(&mut self, a: usize, dir: usize, b: usize) {
        assert!(
            a < self.num_patterns && b < self.num_patterns,
            "pattern index out of range"
        );
        assert!(dir < direction::count::<D>(), "direction out of range");
        self.insert(a, dir, b);
        self.insert(b, direction::opposite::<D>(dir), a);
    }

    fn insert(&mut self, pattern: usize, dir: usize, other: usize) {
        if let Some(list) = self.allowed.get_mut(Self::slot(pattern, dir)) {
            if let Err(at) = list.binary_search(&other) {
                list.insert(at, other);
            }
        }
    }

    /// Build a table from explicit per-pattern, per-direction lists
    ///
    /// # Errors
    ///
    /// Returns an error if any row lacks one list per direction, any
    /// referenced pattern index is out of range, or any rule lacks its
    /// opposite-direction mirror.
    pub fn from_lists(lists: &[Vec<Vec<usize>>]) -> Result<Self> {
        let num_patterns = lists.len();
        let mut table = Self::new(num_patterns);
        for (pattern, row) in lists.iter().enumerate() {
            if row.len() != direction::count::<D>() {
                return Err(GenerationError::MalformedRuleTable {
                    pattern,
                    expected: direction::count::<D>(),
                    found: row.len(),
                });
            }
            for (dir, list) in row.iter().enumerate() {
                for &other in list {
                    if other >= num_patterns {
                        return Err(GenerationError::PatternOutOfRange {
                            index: other,
                            num_patterns,
                        });
                    }
                    table.insert(pattern, dir, other);
                }
            }
        }
        table.check_symmetry()?;
        Ok(table)
    }

    fn check_symmetry(&self) -> Result<()> {
        for pattern in 0..self.num_patterns {
            for dir in 0..direction::count::<D>() {
                for &other in self.allowed(pattern, dir) {
                    let mirror = self.allowed(other, direction::opposite::<D>(dir));
                    if mirror.binary_search(&pattern).is_err() {
                        return Err(GenerationError::AsymmetricRule {
                            pattern,
                            direction: dir,
                            other,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Patterns permitted next to `pattern` along `dir`, sorted ascending
    pub fn allowed(&self, pattern: usize, dir: usize) -> &[usize] {
        self.allowed
            .get(Self::slot(pattern, dir))
            .map_or(&[], Vec::as_slice)
    }

    /// Number of patterns the table covers
    pub const fn num_patterns(&self) -> usize {
        self.num_patterns
    }
}

/// Restriction of a pattern to a coordinate band along one axis
///
/// Evaluated when a cell is collapsed: a banded pattern is never chosen
/// for a cell whose coordinate along `axis` falls outside `low..=high`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisBand {
    /// Axis the band constrains
    pub axis: usize,
    /// Lowest admissible coordinate (inclusive)
    pub low: usize,
    /// Highest admissible coordinate (inclusive)
    pub high: usize,
}

impl AxisBand {
    /// Whether a cell's coordinates sit inside the band
    pub fn contains(&self, coords: &[usize]) -> bool {
        coords
            .get(self.axis)
            .is_some_and(|&c| c >= self.low && c <= self.high)
    }
}
