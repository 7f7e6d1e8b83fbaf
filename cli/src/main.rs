mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{compute, resolve};
use tracing_subscriber::fmt::SubscriberBuilder;

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Compute(args) => compute::run(&cli, args),
        Commands::Resolve(args) => resolve::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
