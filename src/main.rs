mod config;
mod dedup;
mod fetcher;
mod model;
mod normalizer;
mod parser;
mod utils;
mod writer;

use config::ImportConfig;
use dedup::dedupe_latest;
use fetcher::{FeedFetcher, Fetcher};
use model::{ImportError, ImportSummary, OutputDocument};
use normalizer::normalize_all;
use parser::parse_feed;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::fmt::MakeWriter;
use writer::write_document;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr, stdout carries only the progress lines
    if let Err(e) = tracing::subscriber::set_global_default(log_subscriber(std::io::stderr)) {
        eprintln!("Failed to initialize logging: {e}");
    }

    let config = ImportConfig::default();

    let fetcher = match FeedFetcher::new(&config.user_agent) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run_import(&config, &fetcher).await {
        Ok(summary) => {
            info!(
                "Import finished: {} fetched, {} without calories, {} written",
                summary.fetched, summary.skipped_without_calories, summary.written
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Import failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn log_subscriber<W>(make_writer: W) -> impl tracing::Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt().with_writer(make_writer).finish()
}

/// Fetches the offer feed, keeps the latest offer per food and writes the import file.
/// Nothing is written unless every step before it succeeded.
async fn run_import(
    config: &ImportConfig,
    fetcher: &dyn Fetcher,
) -> Result<ImportSummary, ImportError> {
    let asset_base = config.asset_base()?;

    println!("Downloading food offers...");
    let body = fetcher.fetch(&config.feed_url).await?;
    let offers = parse_feed(&body)?;
    let fetched = offers.len();
    info!("Fetched {} food offers", fetched);

    let visited = dedupe_latest(offers);
    info!(
        "Kept {} distinct foods, skipped {} offers without calories",
        visited.len(),
        visited.skipped_without_calories
    );

    let foods = normalize_all(visited.values(), &asset_base)?;
    let document = OutputDocument::new(foods);

    println!("Saving import.json...");
    write_document(&document, &config.output_path)?;
    info!("Wrote {}", config.output_path.display());

    Ok(ImportSummary {
        fetched,
        skipped_without_calories: visited.skipped_without_calories,
        written: document.food_list.len(),
    })
}
