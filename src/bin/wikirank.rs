// src/bin/wikirank.rs
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use wikirank_core::cli::{handlers, Cli};
use wikirank_core::exit::RankExit;

fn main() -> RankExit {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match handlers::handle_rank(&cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            RankExit::from(&e)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
