//! CLI entry point for arena generation and tile classification

use arenatile::io::cli::{Cli, CommandProcessor};
use clap::Parser;

fn main() -> arenatile::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    CommandProcessor::new(cli).process()
}
