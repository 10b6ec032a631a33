//! Command-line driver: load the NEO and close-approach files and summarize them.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use neo_extract::ingestion::{
    CompositeObserver, FileObserver, LoadObserver, LoadOptions, LoadRequest, LoadSeverity, TracingObserver,
};
use neo_extract::models::{CloseApproach, NearEarthObject, StandardFactory};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "neo-extract",
    version,
    about = "Load near-Earth object and close-approach data and report what was extracted."
)]
struct Cli {
    /// CSV file of near-Earth objects.
    #[arg(long, default_value = "data/neos.csv")]
    neofile: PathBuf,

    /// JSON file of close approaches.
    #[arg(long, default_value = "data/cad.json")]
    cadfile: PathBuf,

    /// Print the first N records of each collection.
    #[arg(long, default_value_t = 0)]
    limit: usize,

    /// Output format for the summary.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also append load events to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Serialize)]
struct Summary<'a> {
    neos: usize,
    approaches: usize,
    neo_sample: &'a [NearEarthObject],
    approach_sample: &'a [CloseApproach],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("neo_extract=info".parse().context("invalid log directive")?),
        )
        .init();

    let cli = Cli::parse();

    let mut observers: Vec<Arc<dyn LoadObserver>> = vec![Arc::new(TracingObserver)];
    if let Some(path) = &cli.log_file {
        observers.push(Arc::new(FileObserver::new(path)));
    }
    let options = LoadOptions {
        observer: Some(Arc::new(CompositeObserver::new(observers))),
        alert_at_or_above: LoadSeverity::Critical,
    };

    let catalog = LoadRequest::new(&cli.neofile, &cli.cadfile)
        .with_options(options)
        .run(&StandardFactory)
        .with_context(|| {
            format!(
                "failed to load {} and {}",
                cli.neofile.display(),
                cli.cadfile.display()
            )
        })?;

    let neo_sample = &catalog.neos[..cli.limit.min(catalog.neos.len())];
    let approach_sample = &catalog.approaches[..cli.limit.min(catalog.approaches.len())];

    match cli.format {
        OutputFormat::Text => {
            println!(
                "Loaded {} near-Earth objects and {} close approaches.",
                catalog.neos.len(),
                catalog.approaches.len()
            );
            for neo in neo_sample {
                println!("{neo}");
            }
            for approach in approach_sample {
                println!("{approach}");
            }
        }
        OutputFormat::Json => {
            let summary = Summary {
                neos: catalog.neos.len(),
                approaches: catalog.approaches.len(),
                neo_sample,
                approach_sample,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
