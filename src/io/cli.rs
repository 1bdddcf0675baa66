//! Command-line interface for running built-in generation presets

use crate::io::configuration::{DEFAULT_ATTEMPTS, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::io::progress::AttemptProgress;
use crate::io::render::{render_layers, render_plane};
use crate::rules::presets::{self, Preset};
use crate::solver::executor::{GenerateOptions, generate_with};
use crate::spatial::grid::Grid;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the pattern generation tool
#[derive(Parser)]
#[command(name = "wavegrid")]
#[command(
    author,
    version,
    about = "Generate grid patterns by constraint propagation"
)]
pub struct Cli {
    /// Built-in rule set to run: checkerboard, islands, or strata
    #[arg(value_name = "PRESET")]
    pub preset: String,

    /// Output width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Output height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Output depth in layers; selects 3D generation
    #[arg(short = 'd', long)]
    pub depth: Option<usize>,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Maximum independent attempts before giving up
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Wrap neighbor lookups around the grid edges
    #[arg(short, long)]
    pub periodic: bool,

    /// Write the rendered grid to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Runs one preset generation request end to end
pub struct GenerationJob {
    cli: Cli,
}

impl GenerationJob {
    /// Create a job from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate, render, and emit the result
    ///
    /// # Errors
    ///
    /// Returns an error for unknown presets, invalid extents, exhausted
    /// attempt budgets, or output file failures.
    pub fn run(&self) -> Result<()> {
        self.validate_extents()?;
        match self.cli.depth {
            Some(depth) => self.run_3d(depth),
            None => self.run_2d(),
        }
    }

    fn validate_extents(&self) -> Result<()> {
        if self.cli.width == 0 || self.cli.height == 0 {
            return Err(invalid_parameter(
                "extents",
                &format!("{}x{}", self.cli.width, self.cli.height),
                &"width and height must be at least 1",
            ));
        }
        if self.cli.depth == Some(0) {
            return Err(invalid_parameter("depth", &0, &"must be at least 1"));
        }
        if self.cli.attempts == 0 {
            return Err(invalid_parameter("attempts", &0, &"must be at least 1"));
        }
        Ok(())
    }

    fn preset_2d(&self) -> Result<Preset<2>> {
        match self.cli.preset.as_str() {
            "checkerboard" => presets::checkerboard(),
            "islands" => presets::sparse_islands(),
            "strata" => Err(invalid_parameter(
                "preset",
                &self.cli.preset,
                &"strata is three-dimensional; pass --depth",
            )),
            _ => Err(self.unknown_preset()),
        }
    }

    fn preset_3d(&self, layers: usize) -> Result<Preset<3>> {
        match self.cli.preset.as_str() {
            "checkerboard" => presets::checkerboard(),
            "islands" => presets::sparse_islands(),
            "strata" => presets::strata(layers),
            _ => Err(self.unknown_preset()),
        }
    }

    fn unknown_preset(&self) -> GenerationError {
        invalid_parameter(
            "preset",
            &self.cli.preset,
            &"expected checkerboard, islands, or strata",
        )
    }

    fn run_2d(&self) -> Result<()> {
        let preset = self.preset_2d()?;
        let mut options = GenerateOptions::new(
            [self.cli.height, self.cli.width],
            self.cli.periodic,
            self.cli.seed,
            self.cli.attempts,
        );
        options.bands = preset.bands;
        let grid = self.solve(&preset.patterns, &preset.table, &options)?;
        self.emit(&render_plane(&grid, &preset.glyphs))
    }

    fn run_3d(&self, depth: usize) -> Result<()> {
        let preset = self.preset_3d(depth)?;
        let mut options = GenerateOptions::new(
            [depth, self.cli.height, self.cli.width],
            self.cli.periodic,
            self.cli.seed,
            self.cli.attempts,
        );
        options.bands = preset.bands;
        let grid = self.solve(&preset.patterns, &preset.table, &options)?;
        self.emit(&render_layers(&grid, &preset.glyphs))
    }

    fn solve<const D: usize>(
        &self,
        patterns: &crate::rules::PatternSet,
        table: &crate::rules::CompatibilityTable<D>,
        options: &GenerateOptions<D>,
    ) -> Result<Grid<usize, D>> {
        let progress = AttemptProgress::new(self.cli.attempts, self.cli.quiet);
        let result = generate_with(patterns, table, options, |_, succeeded| {
            if !succeeded {
                progress.attempt_failed();
            }
        });
        progress.finish(result.is_ok());
        result
    }

    // Allow print for user-facing output
    #[allow(clippy::print_stdout)]
    fn emit(&self, text: &str) -> Result<()> {
        match &self.cli.output {
            Some(path) => {
                std::fs::write(path, text).map_err(|source| GenerationError::FileSystem {
                    path: path.clone(),
                    operation: "write",
                    source,
                })
            }
            None => {
                print!("{text}");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_for(preset: &str) -> Cli {
        Cli {
            preset: preset.to_string(),
            width: 4,
            height: 4,
            depth: None,
            seed: 1,
            attempts: 5,
            periodic: false,
            output: None,
            quiet: true,
        }
    }

    #[test]
    fn test_unknown_presets_are_rejected() {
        let job = GenerationJob::new(cli_for("mosaic"));
        assert!(matches!(
            job.run(),
            Err(GenerationError::InvalidParameter {
                parameter: "preset",
                ..
            })
        ));
    }

    #[test]
    fn test_strata_requires_a_depth() {
        let job = GenerationJob::new(cli_for("strata"));
        assert!(job.run().is_err());
    }

    #[test]
    fn test_zero_extents_are_rejected() {
        let mut cli = cli_for("islands");
        cli.width = 0;
        let job = GenerationJob::new(cli);
        assert!(matches!(
            job.run(),
            Err(GenerationError::InvalidParameter {
                parameter: "extents",
                ..
            })
        ));
    }

    #[test]
    fn test_job_writes_rendered_output_to_a_file() {
        let dir = tempfile::tempdir().unwrap_or_else(|_| unreachable!());
        let path = dir.path().join("islands.txt");
        let mut cli = cli_for("islands");
        cli.output = Some(path.clone());
        let job = GenerationJob::new(cli);
        job.run().unwrap_or_else(|_| unreachable!());

        let text = std::fs::read_to_string(&path).unwrap_or_default();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.len() == 4));
        assert!(text.chars().all(|c| matches!(c, '.' | 'o' | '\n')));
    }
}
