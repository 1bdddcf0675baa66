//! Directional support counters and the removal worklist
//!
//! For every (cell, pattern, direction) the propagator counts how many
//! patterns still allowed in the neighbor along that direction remain
//! compatible. A count reaching zero means the pattern has lost its last
//! support across that face and must leave the wave; the removal is pushed
//! onto a worklist and its own consequences spread the same way, an
//! arc-consistency fixpoint restricted to grid adjacency.

use crate::rules::CompatibilityTable;
use crate::solver::wave::Wave;
use crate::spatial::direction;
use crate::spatial::grid::Layout;
use ndarray::{Array3, s};

/// Propagation state for one solve attempt
#[derive(Clone, Debug)]
pub struct Propagator<const D: usize> {
    table: CompatibilityTable<D>,
    layout: Layout<D>,
    periodic: bool,
    /// Remaining compatible neighbors per (cell, pattern, direction)
    support: Array3<i32>,
    /// Pending removals, drained depth-first
    worklist: Vec<(usize, usize)>,
}

impl<const D: usize> Propagator<D> {
    /// Build the counter tensor for a fresh all-candidates wave
    ///
    /// Each counter starts at the size of the compatibility list in the
    /// *opposite* direction: the count a neighbor probes back across the
    /// shared face.
    pub fn new(layout: Layout<D>, periodic: bool, table: CompatibilityTable<D>) -> Self {
        let dirs = direction::count::<D>();
        let num_patterns = table.num_patterns();
        let support =
            Array3::from_shape_fn((layout.len(), num_patterns, dirs), |(_, pattern, dir)| {
                table.allowed(pattern, direction::opposite::<D>(dir)).len() as i32
            });
        Self {
            table,
            layout,
            periodic,
            support,
            worklist: Vec::new(),
        }
    }

    /// Record the removal of `pattern` from `cell`
    ///
    /// The entry's own counters stop being meaningful once the pattern is
    /// gone, so they are zeroed; the pair is pushed for propagation.
    ///
    /// # Panics
    ///
    /// Panics if `cell` or `pattern` is out of range; passing either is a
    /// programming error.
    pub fn enqueue_removal(&mut self, cell: usize, pattern: usize) {
        self.support.slice_mut(s![cell, pattern, ..]).fill(0);
        self.worklist.push((cell, pattern));
    }

    /// Number of removals awaiting propagation
    pub fn pending(&self) -> usize {
        self.worklist.len()
    }

    /// Drain the worklist to the arc-consistency fixpoint
    ///
    /// Every popped removal decrements the support counters of compatible
    /// patterns in each neighboring cell; counters hitting zero trigger
    /// further removals. Terminates because each (cell, pattern) pair can
    /// be removed at most once.
    pub fn propagate(&mut self, wave: &mut Wave) {
        let Self {
            table,
            layout,
            periodic,
            support,
            worklist,
        } = self;
        while let Some((cell, pattern)) = worklist.pop() {
            for dir in 0..direction::count::<D>() {
                let Some(neighbor) = layout.neighbor(cell, dir, *periodic) else {
                    continue;
                };
                for &other in table.allowed(pattern, dir) {
                    let mut lost_support = false;
                    if let Some(count) = support.get_mut((neighbor, other, dir)) {
                        *count -= 1;
                        lost_support = *count == 0;
                    }
                    if lost_support {
                        support.slice_mut(s![neighbor, other, ..]).fill(0);
                        worklist.push((neighbor, other));
                        wave.remove(neighbor, other);
                    }
                }
            }
        }
    }
}
