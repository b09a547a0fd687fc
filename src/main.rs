//! Folio-Crawl main entry point
//!
//! This is the command-line interface for the Folio-Crawl catalog scraper.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use folio_crawl::config::{load_config_with_hash, Config};
use folio_crawl::crawler::{self, Coordinator};
use folio_crawl::output::{to_json_string, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Folio-Crawl: a book catalog scraper
///
/// Walks a paginated book catalog and saves either summary rows from the
/// listing pages or full records from every book's detail page.
#[derive(Parser, Debug)]
#[command(name = "folio-crawl")]
#[command(version = "1.0.0")]
#[command(about = "A book catalog scraper", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Follow "next" links and save one TSV row per catalog card
    Listing {
        /// Page to start from (default: the catalog root)
        #[arg(long)]
        start_url: Option<String>,

        /// Stop after this many pages (default: unlimited)
        #[arg(long)]
        max_pages: Option<u32>,

        /// TSV file to write (default: <output dir>/<listing file>)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Enumerate catalog pages and save a full record per book
    Catalog {
        /// First catalog page, containing a page-N.html segment
        #[arg(long)]
        first_page: Option<String>,

        /// Pages to visit; 0 walks until a missing page
        #[arg(long, default_value_t = 0)]
        page_count: u32,

        /// File format for the saved records
        #[arg(long, value_enum, default_value_t = Format::Ndjson)]
        format: Format,

        /// Do not write the records to disk
        #[arg(long)]
        no_save: bool,

        /// Print the records to stdout as a JSON array
        #[arg(long)]
        print_json: bool,
    },

    /// Fetch a single book page and print its record
    Book {
        /// Book detail page URL (relative URLs use the catalog base)
        url: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// One JSON object per line
    Ndjson,
    /// A single JSON array
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Ndjson => OutputFormat::NdJson,
            Format::Json => OutputFormat::JsonArray,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout is reserved for results.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("folio_crawl=info,warn"),
            1 => EnvFilter::new("folio_crawl=debug,info"),
            2 => EnvFilter::new("folio_crawl=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn load_configuration(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::debug!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("loading configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_configuration(cli.config.as_ref())?;

    match cli.command {
        Command::Listing {
            start_url,
            max_pages,
            output,
        } => {
            let start_url = start_url.unwrap_or_else(|| config.catalog.base_url.clone());
            let output = output.unwrap_or_else(|| config.output.listing_path());

            let rows = crawler::scrape_listing(config, &start_url, max_pages, &output)
                .await
                .context("listing crawl failed")?;

            println!("Saved {} rows to {}", rows.len(), output.display());
        }

        Command::Catalog {
            first_page,
            page_count,
            format,
            no_save,
            print_json,
        } => {
            let first_page = first_page.unwrap_or_else(|| config.catalog.first_page.clone());
            let output = config.output.catalog_path();
            let save = (!no_save).then(|| OutputFormat::from(format));

            let books = crawler::scrape_books(config, &first_page, page_count, save)
                .await
                .context("catalog crawl failed")?;

            if print_json {
                println!("{}", to_json_string(&books)?);
            }

            if no_save {
                println!("Scraped {} books", books.len());
            } else {
                println!("Saved {} books to {}", books.len(), output.display());
            }
        }

        Command::Book { url } => {
            let coordinator = Coordinator::new(config)?;
            let record = coordinator
                .get_book_data(&url)
                .await
                .with_context(|| format!("fetching {}", url))?;

            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}
