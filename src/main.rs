//! CLI entry point for distance field overlays

use clap::Parser;
use visual_sdf::io::cli::{Cli, CommandRunner};
use visual_sdf::io::logger;

fn main() -> visual_sdf::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.quiet);
    CommandRunner::new(cli).run()?;
    Ok(())
}
