// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wikirank", version, about = "PageRank for MediaWiki content dumps")]
pub struct Cli {
    /// Directory holding the index files and page dumps
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,
    /// Number of power iterations (always run in full)
    #[arg(long, short = 'k')]
    pub iterations: Option<usize>,
    /// Damping factor in (0, 1]
    #[arg(long, short = 'a')]
    pub damping: Option<f64>,
    /// Number of ingestion workers
    #[arg(long, short = 'p')]
    pub parallel: Option<usize>,
    /// Output file (defaults to ROOT/pagerank.txt)
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Read settings from this TOML file instead of ROOT/wikirank.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Print the N best-ranked articles (0 disables)
    #[arg(long, default_value = "10")]
    pub top: usize,
    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}
