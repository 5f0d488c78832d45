//! Command-line interface definitions for the news corpus builder.
//!
//! Arguments can be provided via command-line flags; the config path can
//! also come from the environment.

use clap::Parser;

/// Command-line arguments for one batch run.
///
/// # Examples
///
/// ```sh
/// # Scrape the feed and write every output into ./corpus
/// news_corpus -o ./corpus
///
/// # Custom lexicons and a smaller cap
/// news_corpus -o ./corpus -c ./config.yaml --max-articles 10
///
/// # Re-run the analysis over a previously scraped corpus
/// news_corpus -o ./corpus --from-raw ./corpus/raw_articles.csv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for the CSV files and the JSON summary
    #[arg(short, long)]
    pub output_dir: String,

    /// Optional path to config.yaml file
    #[arg(short, long, env = "NEWS_CORPUS_CONFIG")]
    pub config: Option<String>,

    /// Override the maximum number of articles to collect
    #[arg(long)]
    pub max_articles: Option<usize>,

    /// Skip scraping and analyze an existing raw corpus CSV
    #[arg(long)]
    pub from_raw: Option<String>,
}
