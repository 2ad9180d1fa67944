// ABOUTME: CLI for loading a racing season with gridstats-season and printing JSON.
// ABOUTME: Fetches standings/results/constructors for a season and optionally circuit statistics.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridstats_season::{load_circuits, CircuitStats, SeasonClient};

/// Load a season's standings and race results and output JSON.
#[derive(Parser, Debug)]
#[command(name = "gridstats-cli")]
#[command(about = "Fetch season standings and results, print JSON", long_about = None)]
struct Args {
    /// Season year to load, e.g. 2022.
    season: String,

    /// Path to the circuit reference CSV; enables circuit statistics output.
    #[arg(long)]
    circuits: Option<PathBuf>,

    /// Output compact JSON instead of pretty.
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Write JSON to a file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Override the statistics site base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// HTTP timeout in seconds.
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridstats_season=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut builder = SeasonClient::builder().timeout(Duration::from_secs(args.timeout_secs));
    if let Some(ref base_url) = args.base_url {
        builder = builder.base_url(base_url);
    }
    let client = builder.build();

    let data = client.load_season(&args.season).await?;

    let mut doc = json!({
        "season": data.season,
        "standings": data.standings,
        "results": data.results,
        "constructors": data.constructors,
    });

    if let Some(ref path) = args.circuits {
        let circuits = load_circuits(path)?;
        if let Some(stats) = CircuitStats::compute(&circuits) {
            doc["circuit_stats"] = json!({
                "longest": stats.longest,
                "shortest": stats.shortest,
                "most_turns": stats.most_turns,
                "fewest_turns": stats.fewest_turns,
                "mean_turns": stats.mean_turns,
                "summary": stats.summary(),
            });
        }
        doc["circuits"] = serde_json::to_value(&circuits)?;
    }

    let rendered = if args.compact {
        serde_json::to_string(&doc)?
    } else {
        serde_json::to_string_pretty(&doc)?
    };

    match args.output {
        Some(path) => fs::write(path, rendered + "\n")?,
        None => println!("{}", rendered),
    }

    Ok(())
}
