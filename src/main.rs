mod batch;
mod classify;
mod config;
mod extract;
mod metadata;
mod record;
mod report;

use clap::Parser;
use config::SummaryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

/// Scrape a directory of GAMESS log files into a consolidated CSV report:
/// extract bond length, heat of formation, total energy and run time,
/// resolve experiment metadata, and classify each run.
#[derive(Parser, Debug)]
#[command(name = "gamess-summary", version, about)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "gamess-summary.toml")]
    config: PathBuf,

    /// Directory of log files (overrides config)
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Output CSV path (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// File glob within the input directory (overrides config)
    #[arg(short, long)]
    pattern: Option<String>,

    /// Validate config and print resolved settings, don't run
    #[arg(long)]
    dry_run: bool,

    /// Extra logging (per-file extraction detail)
    #[arg(short, long)]
    verbose: bool,

    /// Only warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut config = match SummaryConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, path = %cli.config.display(), "config load failed");
            return ExitCode::FAILURE;
        }
    };
    if let Some(dir) = cli.input_dir {
        config.input_dir = dir;
    }
    if let Some(out) = cli.output {
        config.output = out;
    }
    if let Some(pattern) = cli.pattern {
        config.pattern = pattern;
    }

    if cli.dry_run {
        println!("input_dir:  {}", config.input_dir.display());
        println!("pattern:    {}", config.pattern);
        println!("output:     {}", config.output.display());
        println!("skip_files: {}", config.skip_files.join(", "));
        return ExitCode::SUCCESS;
    }

    let files = match batch::discover(&config.input_dir, &config.pattern) {
        Ok(files) => files,
        Err(e) => {
            tracing::error!(error = %e, pattern = %config.pattern, "invalid file pattern");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        count = files.len(),
        dir = %config.input_dir.display(),
        "discovered log files"
    );

    let summary = batch::run(&files, &config.skip_files);

    match report::write_csv(&config.output, &summary.records) {
        Ok(rows) => {
            println!("wrote {rows} rows to {}", config.output.display());
            println!(
                "{} rejected, {} skipped",
                summary.rejected, summary.skipped
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, path = %config.output.display(), "report write failed");
            ExitCode::FAILURE
        }
    }
}
