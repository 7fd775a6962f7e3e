use anyhow::Result;
use clap::Parser;

use bathygrid::cli::{Cli, Commands};
use bathygrid::commands::{contours, points};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Points(args) => points::run(&cli, args),
        Commands::Contours(args) => contours::run(&cli, args),
    }
}
