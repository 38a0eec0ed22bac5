//! CLI entry point for the slot layout generator

use clap::Parser;
use slotgrid::io::cli::{Cli, CommandRunner};
use slotgrid::io::logging::init_logger;

fn main() -> slotgrid::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbosity());
    let runner = CommandRunner::new(cli)?;
    runner.run(&mut std::io::stdout().lock())
}
