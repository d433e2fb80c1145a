mod config;

use clap::{Parser, Subcommand, ValueEnum};
use std::cmp::Ordering;
use std::io::{self, BufRead};
use std::path::PathBuf;
use textfold::padding::{pad, PadSide};
use textfold::truncation::truncate_hard;
use textfold::{numbers, CaseStyle};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "textfold")]
#[command(about = "Slugs, case styles, truncation, distance and natural sorting for text")]
struct Cli {
    /// Config file (default: ~/.config/textfold/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn text into a lowercase, hyphen-separated ASCII slug
    Slug { text: String },
    /// Re-case text (camel, underscored, dasherized, titleized, classified, humanized)
    Case {
        text: String,
        /// Target style (default from config, else underscored)
        #[arg(long, short)]
        style: Option<CaseStyle>,
    },
    /// Shorten text without splitting a word
    Truncate {
        text: String,
        /// Maximum length in characters; negative values count as 0
        #[arg(long, short, allow_negative_numbers = true)]
        length: i64,
        /// Continuation marker (default from config, else "...")
        #[arg(long, short)]
        marker: Option<String>,
        /// Cut at exactly the length, even inside a word
        #[arg(long)]
        hard: bool,
    },
    /// Levenshtein distance between two texts
    Distance { a: String, b: String },
    /// Natural-order comparison of two texts
    Compare { a: String, b: String },
    /// Sort items in natural order (reads lines from stdin when none are given)
    Sort { items: Vec<String> },
    /// Pad text to a length
    Pad {
        text: String,
        #[arg(long, short, allow_negative_numbers = true)]
        length: i64,
        /// Fill character (default from config, else space)
        #[arg(long, short)]
        fill: Option<String>,
        #[arg(long, value_enum)]
        side: Option<Side>,
    },
    /// Parse a decimal number, printing NaN when it is not one
    Number {
        text: String,
        #[arg(long, short, default_value_t = 0)]
        decimals: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Left,
    Right,
    Both,
}

impl From<Side> for PadSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => PadSide::Left,
            Side::Right => PadSide::Right,
            Side::Both => PadSide::Both,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn clamp_len(n: i64) -> usize {
    numbers::to_positive(n as f64)
}

fn read_stdin_lines() -> Result<Vec<String>, io::Error> {
    io::stdin().lock().lines().collect()
}

fn run(command: Commands, config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    let output = match command {
        Commands::Slug { text } => textfold::slugify(&text),
        Commands::Case { text, style } => {
            let style = style.unwrap_or(config.case.style);
            tracing::debug!("re-casing as {}", style);
            textfold::to_style(&text, style)
        }
        Commands::Truncate {
            text,
            length,
            marker,
            hard,
        } => {
            let marker = marker.as_deref().unwrap_or(&config.truncate.marker);
            if length < 0 {
                tracing::warn!("negative length {} treated as 0", length);
            }
            if hard {
                truncate_hard(&text, clamp_len(length), marker)
            } else {
                textfold::truncate(&text, clamp_len(length), marker)
            }
        }
        Commands::Distance { a, b } => textfold::levenshtein(&a, &b).to_string(),
        Commands::Compare { a, b } => match textfold::natural_cmp(&a, &b) {
            Ordering::Less => "less".to_string(),
            Ordering::Equal => "equal".to_string(),
            Ordering::Greater => "greater".to_string(),
        },
        Commands::Sort { items } => {
            let mut items = if items.is_empty() {
                tracing::debug!("reading items from stdin");
                read_stdin_lines()?
            } else {
                items
            };
            tracing::info!("sorting {} items", items.len());
            textfold::natural_sort(&mut items);
            items.join("\n")
        }
        Commands::Pad {
            text,
            length,
            fill,
            side,
        } => {
            let fill = fill.as_deref().unwrap_or(&config.pad.fill);
            let side = side.map(PadSide::from).unwrap_or(config.pad.side);
            pad(&text, clamp_len(length), fill, side)
        }
        Commands::Number { text, decimals } => {
            let value = numbers::to_number(&text, decimals);
            if value.is_nan() {
                tracing::warn!("{:?} is not a number", text);
                "NaN".to_string()
            } else {
                format!("{value:.decimals$}")
            }
        }
    };
    Ok(output)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;
    let output = run(cli.command, &config)?;
    println!("{output}");
    Ok(())
}
