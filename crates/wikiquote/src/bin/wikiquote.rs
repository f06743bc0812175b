// ABOUTME: CLI binary for the wikiquote client.
// ABOUTME: Prints quotes, search results, random titles or the quote of the day, as lines or JSON.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wikiquote::{Client, DEFAULT_LANG, DEFAULT_MAX_QUOTES};

#[derive(Parser, Debug)]
#[command(name = "wikiquote")]
#[command(about = "Fetch quotations from Wikiquote")]
struct Args {
    /// Language edition to query (e.g. en, de, fr)
    #[arg(short = 'l', long = "lang", env = "WIKIQUOTE_LANG", default_value = DEFAULT_LANG, global = true)]
    lang: String,

    /// API endpoint template; {lang} is replaced by the language code
    #[arg(long = "api-url", env = "WIKIQUOTE_API_URL", global = true)]
    api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long = "timeout-secs", default_value_t = 30, global = true)]
    timeout_secs: u64,

    /// Output as JSON instead of one entry per line
    #[arg(long = "json", global = true)]
    json_output: bool,

    /// Log requests and extraction details to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print quotes from a page
    Quotes {
        /// Page title to fetch (omit with --html)
        title: Option<String>,

        /// Maximum number of quotes
        #[arg(short = 'n', long = "max", default_value_t = DEFAULT_MAX_QUOTES)]
        max: usize,

        /// Extract from a local HTML file instead of fetching
        #[arg(long = "html")]
        html: Option<PathBuf>,
    },
    /// Search page titles
    Search {
        query: String,
    },
    /// Print random page titles
    Random {
        /// Maximum number of titles
        #[arg(short = 'n', long = "max", default_value_t = DEFAULT_MAX_QUOTES)]
        max: usize,
    },
    /// Print the quote of the day
    Qotd,
    /// List supported language codes
    Languages,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("wikiquote=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn format_lines(lines: &[String], json_output: bool) -> Result<String> {
    if json_output {
        Ok(serde_json::to_string_pretty(lines)?)
    } else {
        Ok(lines.join("\n"))
    }
}

async fn run(args: Args) -> Result<String> {
    let mut builder = Client::builder().timeout(Duration::from_secs(args.timeout_secs));
    if let Some(api_url) = &args.api_url {
        builder = builder.api_url(api_url);
    }
    let client = builder.build()?;
    let lang = args.lang.as_str();

    match args.command {
        Command::Quotes { title, max, html } => {
            let quotes = match (title, html) {
                (Some(_), Some(_)) => bail!("cannot use both a title and --html"),
                (None, None) => bail!("a page title is required, or use --html"),
                (Some(title), None) => client.quotes(&title, max, lang).await?,
                (None, Some(path)) => {
                    let html = fs::read_to_string(&path)
                        .with_context(|| format!("reading {}", path.display()))?;
                    client.quotes_from_html(&html, max, lang)?
                }
            };
            format_lines(&quotes, args.json_output)
        }
        Command::Search { query } => {
            let titles = client.search(&query, lang).await?;
            format_lines(&titles, args.json_output)
        }
        Command::Random { max } => {
            let titles = client.random_titles(lang, max).await?;
            format_lines(&titles, args.json_output)
        }
        Command::Qotd => {
            let (quote, author) = client.quote_of_the_day(lang).await?;
            if args.json_output {
                Ok(serde_json::to_string_pretty(
                    &json!({ "quote": quote, "author": author }),
                )?)
            } else {
                Ok(format!("{}\n  ~ {}", quote, author))
            }
        }
        Command::Languages => {
            let codes: Vec<String> = client
                .supported_languages()
                .into_iter()
                .map(String::from)
                .collect();
            format_lines(&codes, args.json_output)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
