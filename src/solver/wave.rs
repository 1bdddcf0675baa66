//! Per-cell candidate sets with incremental entropy bookkeeping
//!
//! The wave maps every (cell, pattern) pair to "still allowed". Membership
//! only ever shrinks during a solve, which lets each cell keep running
//! sums (frequency sum, `p ln p` sum, remaining count) that turn every
//! removal into an O(1) entropy update instead of a rescan.

use crate::math::entropy;
use crate::rules::PatternSet;
use bitvec::prelude::*;
use rand::Rng;
use rand::rngs::StdRng;

/// Outcome of a minimum-entropy scan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellChoice {
    /// Some cell has no remaining candidate; this attempt cannot succeed
    Impossible,
    /// Every cell holds exactly one candidate
    AllDecided,
    /// Flat index of the undecided cell with the lowest noisy entropy
    Candidate(usize),
}

/// Candidate-set state for every cell of one solve attempt
#[derive(Clone, Debug)]
pub struct Wave {
    frequencies: Vec<f64>,
    plogp: Vec<f64>,
    /// Upper bound of the tie-break noise, half the most peaked single
    /// pattern contribution
    noise_cap: f64,
    bits: BitVec,
    num_cells: usize,
    num_patterns: usize,
    plogp_sum: Vec<f64>,
    sum: Vec<f64>,
    log_sum: Vec<f64>,
    remaining: Vec<usize>,
    entropy: Vec<f64>,
    impossible: bool,
}

impl Wave {
    /// Allocate an all-candidates wave for `num_cells` cells
    ///
    /// Every cell starts with the full pattern set and therefore the same
    /// entropy, computed once from the whole distribution.
    pub fn new(num_cells: usize, patterns: &PatternSet) -> Self {
        let frequencies = patterns.frequencies().to_vec();
        let plogp = entropy::plogp(&frequencies);
        let noise_cap = entropy::half_min(&plogp).abs();
        let num_patterns = frequencies.len();
        let base_plogp: f64 = plogp.iter().sum();
        let base_sum: f64 = frequencies.iter().sum();
        let base_entropy = entropy::shannon_entropy(base_sum, base_plogp);
        Self {
            frequencies,
            plogp,
            noise_cap,
            bits: bitvec![1; num_cells * num_patterns],
            num_cells,
            num_patterns,
            plogp_sum: vec![base_plogp; num_cells],
            sum: vec![base_sum; num_cells],
            log_sum: vec![base_sum.ln(); num_cells],
            remaining: vec![num_patterns; num_cells],
            entropy: vec![base_entropy; num_cells],
            impossible: false,
        }
    }

    const fn slot(&self, cell: usize, pattern: usize) -> usize {
        cell * self.num_patterns + pattern
    }

    /// True if `pattern` is still allowed in `cell`
    pub fn get(&self, cell: usize, pattern: usize) -> bool {
        self.bits.get(self.slot(cell, pattern)).as_deref() == Some(&true)
    }

    /// Withdraw `pattern` from `cell`'s candidates
    ///
    /// No-op when the pattern is already gone. Updates the cell's running
    /// sums and entropy in O(1); a cell emptying marks the whole wave
    /// impossible.
    pub fn remove(&mut self, cell: usize, pattern: usize) {
        let slot = self.slot(cell, pattern);
        if self.bits.get(slot).as_deref() != Some(&true) {
            return;
        }
        self.bits.set(slot, false);
        let frequency = self.frequencies.get(pattern).copied().unwrap_or(0.0);
        let contribution = self.plogp.get(pattern).copied().unwrap_or(0.0);
        let mut sum = 0.0;
        if let Some(value) = self.sum.get_mut(cell) {
            *value -= frequency;
            sum = *value;
        }
        let mut plogp_sum = 0.0;
        if let Some(value) = self.plogp_sum.get_mut(cell) {
            *value -= contribution;
            plogp_sum = *value;
        }
        let mut log_sum = 0.0;
        if let Some(value) = self.log_sum.get_mut(cell) {
            *value = sum.ln();
            log_sum = *value;
        }
        if let Some(value) = self.entropy.get_mut(cell) {
            *value = log_sum - plogp_sum / sum;
        }
        if let Some(value) = self.remaining.get_mut(cell) {
            *value -= 1;
            if *value == 0 {
                self.impossible = true;
            }
        }
    }

    /// Number of candidates still allowed in `cell`
    pub fn remaining(&self, cell: usize) -> usize {
        self.remaining.get(cell).copied().unwrap_or(0)
    }

    /// Sum of the remaining candidates' frequencies in `cell`
    pub fn sum_remaining(&self, cell: usize) -> f64 {
        self.sum.get(cell).copied().unwrap_or(0.0)
    }

    /// Memoised entropy of `cell`'s remaining distribution
    pub fn entropy(&self, cell: usize) -> f64 {
        self.entropy.get(cell).copied().unwrap_or(f64::INFINITY)
    }

    /// Whether any cell has lost its last candidate
    pub const fn is_impossible(&self) -> bool {
        self.impossible
    }

    /// Number of cells
    pub const fn num_cells(&self) -> usize {
        self.num_cells
    }

    /// Number of patterns
    pub const fn num_patterns(&self) -> usize {
        self.num_patterns
    }

    /// The single remaining pattern of a decided cell
    pub fn chosen(&self, cell: usize) -> Option<usize> {
        if self.remaining(cell) != 1 {
            return None;
        }
        let start = self.slot(cell, 0);
        let slice = self.bits.get(start..start + self.num_patterns)?;
        slice.iter_ones().next()
    }

    /// Pick the undecided cell with the lowest entropy
    ///
    /// Each candidate's entropy receives uniform noise below `noise_cap`,
    /// small enough that a clear minimum always wins while exact ties
    /// break randomly instead of by scan order.
    pub fn min_entropy_cell(&self, rng: &mut StdRng) -> CellChoice {
        if self.impossible {
            return CellChoice::Impossible;
        }
        let mut min = f64::INFINITY;
        let mut argmin = None;
        for cell in 0..self.num_cells {
            if self.remaining(cell) == 1 {
                continue;
            }
            let entropy = self.entropy(cell);
            if entropy <= min {
                let noise = if self.noise_cap > 0.0 {
                    rng.random_range(0.0..self.noise_cap)
                } else {
                    0.0
                };
                if entropy + noise < min {
                    min = entropy + noise;
                    argmin = Some(cell);
                }
            }
        }
        argmin.map_or(CellChoice::AllDecided, CellChoice::Candidate)
    }
}
