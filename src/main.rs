//! CLI entry point for the wavegrid pattern generator

use clap::Parser;
use wavegrid::io::cli::{Cli, GenerationJob};

fn main() -> wavegrid::Result<()> {
    let cli = Cli::parse();
    let job = GenerationJob::new(cli);
    job.run()
}
