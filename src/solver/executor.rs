//! Observe/propagate control loop and the bounded retry runner
//!
//! A `Solver` owns one wave/propagator pair for exactly one attempt: it
//! alternates collapsing the lowest-entropy cell with propagating the
//! consequences until every cell is decided or some cell empties. Because
//! the random collapse can paint itself into a corner, `generate` retries
//! with fresh state and a derived seed up to a bounded attempt budget.

use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::rules::{AxisBand, CompatibilityTable, PatternSet};
use crate::solver::propagator::Propagator;
use crate::solver::wave::{CellChoice, Wave};
use crate::spatial::grid::{Grid, Layout};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of one observation step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Observation {
    /// Every cell is decided
    Complete,
    /// A cell has no admissible candidate left
    Contradiction,
    /// One cell was collapsed; its removals await propagation
    Ongoing,
}

/// Progress of a solve attempt after one step
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveStatus<const D: usize> {
    /// More steps remain
    Running,
    /// Full assignment reached
    Succeeded(Grid<usize, D>),
    /// A contradiction ended the attempt
    Failed,
}

/// Single-attempt solver owning one wave/propagator pair
pub struct Solver<const D: usize> {
    layout: Layout<D>,
    wave: Wave,
    propagator: Propagator<D>,
    frequencies: Vec<f64>,
    rng: StdRng,
    bands: Option<Vec<Option<AxisBand>>>,
}

impl<const D: usize> Solver<D> {
    /// Build a solver for one attempt over the given extents
    ///
    /// # Errors
    ///
    /// Returns an error if the frequency set and rule table disagree on
    /// the pattern count.
    pub fn new(
        patterns: &PatternSet,
        table: &CompatibilityTable<D>,
        extents: [usize; D],
        periodic: bool,
        seed: u64,
    ) -> Result<Self> {
        if patterns.len() != table.num_patterns() {
            return Err(GenerationError::PatternCountMismatch {
                patterns: patterns.len(),
                rules: table.num_patterns(),
            });
        }
        let layout = Layout::new(extents);
        let wave = Wave::new(layout.len(), patterns);
        let propagator = Propagator::new(layout, periodic, table.clone());
        Ok(Self {
            layout,
            wave,
            propagator,
            frequencies: patterns.frequencies().to_vec(),
            rng: StdRng::seed_from_u64(seed),
            bands: None,
        })
    }

    /// Restrict where individual patterns may be chosen
    ///
    /// One optional band per pattern; `None` entries are unrestricted.
    ///
    /// # Errors
    ///
    /// Returns an error if the band list length does not match the
    /// pattern count or a band names an axis outside the dimensionality.
    pub fn with_bands(mut self, bands: Vec<Option<AxisBand>>) -> Result<Self> {
        if bands.len() != self.frequencies.len() {
            return Err(invalid_parameter(
                "bands",
                &bands.len(),
                &format!("expected one entry per pattern ({})", self.frequencies.len()),
            ));
        }
        for band in bands.iter().flatten() {
            if band.axis >= D {
                return Err(invalid_parameter(
                    "bands",
                    &band.axis,
                    &format!("axis out of range for a {D}-dimensional grid"),
                ));
            }
        }
        self.bands = Some(bands);
        Ok(self)
    }

    /// Force `cell` to `pattern` before solving starts
    ///
    /// All other candidates are withdrawn and queued for propagation. A
    /// seed contradicting earlier seeds surfaces as a failed attempt, not
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell lies outside the extents or the
    /// pattern index is out of range.
    pub fn seed_cell(&mut self, cell: [usize; D], pattern: usize) -> Result<()> {
        let index = self.cell_index(cell)?;
        self.check_pattern(pattern)?;
        self.collapse(index, pattern);
        Ok(())
    }

    /// Withdraw a single candidate from a cell
    ///
    /// External constraint injection between steps; a no-op when the
    /// candidate is already gone.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell lies outside the extents or the
    /// pattern index is out of range.
    pub fn ban(&mut self, cell: [usize; D], pattern: usize) -> Result<()> {
        let index = self.cell_index(cell)?;
        self.check_pattern(pattern)?;
        if self.wave.get(index, pattern) {
            self.wave.remove(index, pattern);
            self.propagator.enqueue_removal(index, pattern);
        }
        Ok(())
    }

    fn cell_index(&self, cell: [usize; D]) -> Result<usize> {
        self.layout
            .index_of(cell)
            .ok_or_else(|| GenerationError::CellOutOfBounds {
                cell: cell.to_vec(),
                extents: self.layout.extents().to_vec(),
            })
    }

    fn check_pattern(&self, pattern: usize) -> Result<()> {
        if pattern >= self.frequencies.len() {
            return Err(GenerationError::PatternOutOfRange {
                index: pattern,
                num_patterns: self.frequencies.len(),
            });
        }
        Ok(())
    }

    fn band_allows(&self, coords: [usize; D], pattern: usize) -> bool {
        match &self.bands {
            None => true,
            Some(bands) => bands
                .get(pattern)
                .and_then(Option::as_ref)
                .is_none_or(|band| band.contains(&coords)),
        }
    }

    fn collapse(&mut self, index: usize, pattern: usize) {
        for k in 0..self.frequencies.len() {
            if k != pattern && self.wave.get(index, k) {
                self.wave.remove(index, k);
                self.propagator.enqueue_removal(index, k);
            }
        }
    }

    fn observe(&mut self) -> Observation {
        match self.wave.min_entropy_cell(&mut self.rng) {
            CellChoice::Impossible => Observation::Contradiction,
            CellChoice::AllDecided => Observation::Complete,
            CellChoice::Candidate(index) => {
                let coords = self.layout.coords_of(index);
                let mut total = 0.0;
                for (k, &frequency) in self.frequencies.iter().enumerate() {
                    if self.wave.get(index, k) && self.band_allows(coords, k) {
                        total += frequency;
                    }
                }
                if total <= 0.0 {
                    // every remaining candidate is band-excluded here
                    return Observation::Contradiction;
                }
                let mut draw = self.rng.random::<f64>() * total;
                let mut chosen = None;
                for (k, &frequency) in self.frequencies.iter().enumerate() {
                    if !(self.wave.get(index, k) && self.band_allows(coords, k)) {
                        continue;
                    }
                    // falls through to the last admissible candidate
                    chosen = Some(k);
                    draw -= frequency;
                    if draw <= 0.0 {
                        break;
                    }
                }
                if let Some(pattern) = chosen {
                    self.collapse(index, pattern);
                }
                Observation::Ongoing
            }
        }
    }

    /// Advance one observe/propagate cycle
    pub fn step(&mut self) -> SolveStatus<D> {
        match self.observe() {
            Observation::Contradiction => SolveStatus::Failed,
            Observation::Complete => SolveStatus::Succeeded(self.assignment()),
            Observation::Ongoing => {
                self.propagator.propagate(&mut self.wave);
                SolveStatus::Running
            }
        }
    }

    /// Current partial assignment, decided cells only
    pub fn snapshot(&self) -> Grid<Option<usize>, D> {
        Grid::from_fn(self.layout.extents(), |coords| {
            self.layout
                .index_of(coords)
                .and_then(|index| self.wave.chosen(index))
        })
    }

    /// Drive this attempt to completion
    ///
    /// Pre-seeded removals are propagated before the first observation.
    /// Returns `None` on contradiction.
    pub fn run(mut self) -> Option<Grid<usize, D>> {
        self.propagator.propagate(&mut self.wave);
        loop {
            match self.step() {
                SolveStatus::Running => {}
                SolveStatus::Succeeded(grid) => return Some(grid),
                SolveStatus::Failed => return None,
            }
        }
    }

    fn assignment(&self) -> Grid<usize, D> {
        Grid::from_fn(self.layout.extents(), |coords| {
            self.layout
                .index_of(coords)
                .and_then(|index| self.wave.chosen(index))
                .unwrap_or(0)
        })
    }
}

/// Parameters for a bounded multi-attempt generation request
#[derive(Clone, Debug)]
pub struct GenerateOptions<const D: usize> {
    /// Output extents; row-major, last coordinate fastest-varying
    pub extents: [usize; D],
    /// Wrap neighbor lookups around the grid edges
    pub periodic: bool,
    /// Base random seed; attempt `i` runs with `seed + i`
    pub seed: u64,
    /// Attempt budget
    pub max_attempts: usize,
    /// Cells fixed before solving starts
    pub seeds: Vec<([usize; D], usize)>,
    /// Optional per-pattern placement bands
    pub bands: Option<Vec<Option<AxisBand>>>,
}

impl<const D: usize> GenerateOptions<D> {
    /// Options for a plain unconstrained request
    pub const fn new(extents: [usize; D], periodic: bool, seed: u64, max_attempts: usize) -> Self {
        Self {
            extents,
            periodic,
            seed,
            max_attempts,
            seeds: Vec::new(),
            bands: None,
        }
    }
}

/// Run independent attempts until one succeeds, reporting each outcome
///
/// `on_attempt` receives the attempt index and whether it succeeded,
/// after the attempt finishes.
///
/// # Errors
///
/// Returns an error for invalid configuration (pattern count mismatch,
/// out-of-range seed cells or bands) or when every attempt ends in
/// contradiction.
pub fn generate_with<const D: usize, F>(
    patterns: &PatternSet,
    table: &CompatibilityTable<D>,
    options: &GenerateOptions<D>,
    mut on_attempt: F,
) -> Result<Grid<usize, D>>
where
    F: FnMut(usize, bool),
{
    for attempt in 0..options.max_attempts {
        let seed = options.seed.wrapping_add(attempt as u64);
        let mut solver = Solver::new(patterns, table, options.extents, options.periodic, seed)?;
        if let Some(bands) = &options.bands {
            solver = solver.with_bands(bands.clone())?;
        }
        for &(cell, pattern) in &options.seeds {
            solver.seed_cell(cell, pattern)?;
        }
        match solver.run() {
            Some(grid) => {
                on_attempt(attempt, true);
                return Ok(grid);
            }
            None => on_attempt(attempt, false),
        }
    }
    Err(GenerationError::AttemptsExhausted {
        attempts: options.max_attempts,
    })
}

/// Run independent attempts until one succeeds
///
/// # Errors
///
/// Returns an error for invalid configuration or when every attempt ends
/// in contradiction.
pub fn generate<const D: usize>(
    patterns: &PatternSet,
    table: &CompatibilityTable<D>,
    options: &GenerateOptions<D>,
) -> Result<Grid<usize, D>> {
    generate_with(patterns, table, options, |_, _| {})
}
