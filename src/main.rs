//! # News Corpus
//!
//! Builds a small corpus of Spanish-language environmental news from an RSS
//! feed, then normalizes, classifies and summarizes it into CSV tables.
//!
//! ## Features
//!
//! - Reads the first available feed endpoint out of an ordered list
//! - Scrapes each article's body, byline and date with selector cascades
//! - Normalizes text, canonicalizes dates and counts words
//! - Assigns one topic and one country per article from keyword lexicons
//! - Writes per-article records plus top topics, countries and words
//!
//! ## Usage
//!
//! ```sh
//! news_corpus -o ./corpus
//! news_corpus -o ./corpus --from-raw ./corpus/raw_articles.csv
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Feed**: Read items from the first endpoint that returns any
//! 2. **Collect**: Fetch pages sequentially, dedupe, gate and cap
//! 3. **Analyze**: Normalize, classify and aggregate
//! 4. **Output**: Write CSV tables and a JSON run summary

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod analysis;
mod cli;
mod config;
mod defaults;
mod error;
mod models;
mod outputs;
mod scrapers;
mod utils;

use analysis::pipeline::Analyzer;
use cli::Cli;
use config::Config;
use models::RunSummary;
use outputs::{OutputPaths, csv, json};
use scrapers::collect::{CollectOptions, collect_articles};
use scrapers::feed::read_first_available;
use scrapers::http::HttpClient;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_corpus starting up");

    let args = Cli::parse();
    debug!(?args.output_dir, ?args.config, ?args.from_raw, "Parsed CLI arguments");

    let mut config = match args.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(max) = args.max_articles {
        config.max_articles = max;
    }

    // Early check: fail on a bad output path before any network work
    let paths = match OutputPaths::prepare(&args.output_dir).await {
        Ok(paths) => paths,
        Err(e) => {
            error!(
                path = %args.output_dir,
                error = %e,
                "Output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e.into());
        }
    };

    let analyzer = Analyzer::new(&config)?;

    // ---- Acquire the raw corpus ----
    let mut feed_url = None;
    let mut items_in_feed = 0;
    let corpus = if let Some(raw_path) = args.from_raw.as_deref() {
        info!(path = %raw_path, "Processing existing raw corpus; skipping acquisition");
        csv::read_raw_corpus(raw_path)?
    } else {
        let client = HttpClient::new(&config)?;
        let selection = match read_first_available(&client, &config.feed_urls).await {
            Ok(selection) => selection,
            Err(e) => {
                error!(error = %e, "No feed endpoint returned items");
                return Err(e.into());
            }
        };
        items_in_feed = selection.items.len();

        let corpus =
            collect_articles(&client, &selection.items, &CollectOptions::from(&config)).await;
        csv::write_raw_corpus(&paths.raw, &corpus)?;
        feed_url = Some(selection.feed_url);
        corpus
    };
    let articles_collected = corpus.len();

    // ---- Analyze ----
    let (enriched, report) = analyzer.process(&corpus);

    csv::write_processed(&paths.processed, &enriched)?;
    csv::write_tops(&paths.tops, &report)?;
    csv::write_top_words(&paths.words, &report)?;

    let summary = RunSummary {
        generated_at: Local::now().to_rfc3339(),
        feed_url,
        items_in_feed,
        articles_collected,
        articles_processed: enriched.len(),
        report,
    };
    if let Err(e) = json::write_summary(&summary, &paths.summary).await {
        error!(error = %e, "Failed to write run summary");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        collected = articles_collected,
        processed = summary.articles_processed,
        "Execution complete"
    );

    Ok(())
}
