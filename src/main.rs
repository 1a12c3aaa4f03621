//! CLI entry point for the identicon generator

use clap::Parser;
use identicon::io::cli::{BatchGenerator, Cli};

fn main() -> identicon::Result<()> {
    let cli = Cli::parse();
    let mut generator = BatchGenerator::new(cli);
    generator.process()?;
    Ok(())
}
