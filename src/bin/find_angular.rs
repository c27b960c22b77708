//! `find-angular`: average, minimum, and maximum angular separation between
//! every pair of stars of a catalog file.
use std::io::IsTerminal;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use starsep::{
    compute_separation_stats,
    constants::DEFAULT_CATALOG_PATH,
    reference::{max_deviation, sequential_separation_stats},
    Catalog, ComputeMode, SeparationParams, StarSepError,
};

#[derive(Parser)]
#[command(name = "find-angular")]
#[command(about = "Pairwise angular separation statistics of a star catalog")]
#[command(version)]
struct Cli {
    /// Number of threads to use
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    threads: i64,

    /// Catalog file, one `id ra dec` record per line
    #[arg(short, long, default_value = DEFAULT_CATALOG_PATH)]
    catalog: Utf8PathBuf,

    /// Reproduce the historical partitioning and mean denominator
    #[arg(long)]
    legacy: bool,

    /// Also run the sequential reference and report the deviation
    #[arg(long)]
    verify: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default.into());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.threads == 0 {
        println!("No threads were created");
        return Ok(ExitCode::SUCCESS);
    }
    let Ok(workers) = usize::try_from(cli.threads) else {
        println!("Invalid number of threads");
        return Ok(ExitCode::SUCCESS);
    };

    let params = match SeparationParams::builder()
        .workers(workers)
        .legacy(cli.legacy)
        .build()
    {
        Ok(params) => params,
        Err(err) => {
            println!("{err}");
            return Ok(ExitCode::SUCCESS);
        }
    };

    let catalog = match Catalog::from_file(&cli.catalog).and_then(|catalog| {
        if catalog.len() < 2 {
            Err(StarSepError::NotEnoughStars(catalog.len()))
        } else {
            Ok(catalog)
        }
    }) {
        Ok(catalog) => catalog,
        Err(err) => {
            println!("ERROR: {err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("{} records read", catalog.len());
    println!("{} threads created", params.workers);

    let summary = compute_separation_stats(&catalog, &params)?;

    println!("Average distance found is {:.6}", summary.mean);
    println!("Minimum distance found is {}", fmt_extreme(summary.min));
    println!("Maximum distance found is {}", fmt_extreme(summary.max));

    if cli.verify {
        if params.mode == ComputeMode::Legacy {
            tracing::warn!("legacy runs skip rows and divide by n(n+1)/2; expect a deviation");
        }
        let reference = sequential_separation_stats(&catalog)?;
        match max_deviation(&summary, &reference) {
            Some(dev) => println!("Largest deviation from the sequential reference is {dev:e}"),
            None => println!("No pair was visited; nothing to compare"),
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn fmt_extreme(v: Option<f64>) -> String {
    v.map_or_else(|| "n/a".to_string(), |v| format!("{v:.6}"))
}
