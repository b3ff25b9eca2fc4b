// src/cli/handlers.rs
use crate::cli::args::Cli;
use crate::config::PipelineConfig;
use crate::exit::RankExit;
use crate::output;
use crate::pipeline::{Pipeline, RunReport};
use crate::rank::collect::top_n;
use anyhow::Result;
use colored::Colorize;

/// Resolves configuration: defaults, then the TOML file, then flags.
///
/// # Errors
/// Returns error if the config file cannot be read or parsed.
pub fn resolve_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = PipelineConfig::new(&cli.root);
            config.apply_file(path)?;
            config
        }
        None => PipelineConfig::load(&cli.root)?,
    };

    if let Some(iterations) = cli.iterations {
        config.iterations = iterations;
    }
    if let Some(damping) = cli.damping {
        config.damping = damping;
    }
    if let Some(parallel) = cli.parallel {
        config.parallelism = parallel;
    }
    if let Some(output) = &cli.output {
        config.output = Some(output.clone());
    }
    config.validate()?;
    Ok(config)
}

/// Runs the ranking pipeline and writes the output file.
///
/// # Errors
/// Returns error if configuration, ingestion or writing fails.
pub fn handle_rank(cli: &Cli) -> Result<RankExit> {
    let config = resolve_config(cli)?;
    let output_path = config.output_path();

    println!(
        "{} {} ({} iterations, damping {}, {} workers)",
        "Ranking".cyan().bold(),
        config.root.display(),
        config.iterations,
        config.damping,
        config.parallelism
    );

    let report = Pipeline::new(config).run()?;
    output::write_ranking(&output_path, &report.ranked)?;

    print_summary(&report, cli.top);
    println!(
        "{} {}",
        "✓ Wrote".green().bold(),
        output_path.display()
    );
    Ok(RankExit::Success)
}

fn print_summary(report: &RunReport, top: usize) {
    println!(
        "  {} articles, {} links, {} dangling ({} index files, {} page dumps)",
        report.articles.to_string().bold(),
        report.links.to_string().bold(),
        report.dangling,
        report.index_files,
        report.page_files
    );
    println!("  score mass {:.9}", report.mass);

    let best = top_n(&report.ranked, top);
    if best.is_empty() {
        return;
    }
    println!("{}", format!("Top {}:", best.len()).yellow().bold());
    for (rank, entry) in best.iter().enumerate() {
        println!("  {:>3}. {:.6}  {}", rank + 1, entry.score, entry.title);
    }
}
