//! `sieve` command-line entrypoint.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use sieve::{Config, ResultRecord, SortMode, Verifier, verify_sort_order};

#[derive(Parser, Debug)]
#[command(name = "sieve")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Print machine-readable JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that every result record contains the query
    Verify {
        /// Search query
        #[arg(short, long)]
        query: String,

        /// JSON file holding an array of harvested result records
        #[arg(short, long)]
        records: PathBuf,

        /// Fuzzy threshold (0-100), overrides SIEVE_FUZZY_THRESHOLD
        #[arg(short, long, allow_negative_numbers = true)]
        threshold: Option<i64>,

        /// Records to check, overrides SIEVE_MAX_RECORDS
        #[arg(long)]
        max_records: Option<usize>,

        /// Score the details dialog of records that do not match
        #[arg(long)]
        deep_check: bool,

        /// Match percentage required to pass, overrides SIEVE_MIN_MATCH_PERCENTAGE
        #[arg(long)]
        min_match: Option<f64>,
    },

    /// Count query occurrences in a page of text
    Blocks {
        /// Search query
        #[arg(short, long)]
        query: String,

        /// Text file, one block per line
        #[arg(long)]
        text: PathBuf,
    },

    /// Check that result records follow a sort order
    Sort {
        /// Sort label as shown in the UI, e.g. "Title (A-Z)"
        #[arg(short, long)]
        mode: SortMode,

        /// JSON file holding an array of result records
        #[arg(short, long)]
        records: PathBuf,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    match cli.command {
        Commands::Verify {
            query,
            records,
            threshold,
            max_records,
            deep_check,
            min_match,
        } => {
            let mut verifier_config = config.verifier_config();
            if let Some(threshold) = threshold {
                verifier_config = verifier_config.with_threshold(threshold);
            }
            if let Some(max_records) = max_records {
                verifier_config = verifier_config.with_max_records(max_records);
            }
            if deep_check {
                verifier_config = verifier_config.with_deep_check(true);
            }
            if let Some(min_match) = min_match {
                config.min_match_percentage = min_match;
                config.validate()?;
            }

            let harvested = read_json_array(&records)?;
            let report = Verifier::new(verifier_config)?.verify_harvested(&query, &harvested)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }

            Ok(exit_code(report.passes(config.min_match_percentage)))
        }
        Commands::Blocks { query, text } => {
            let text = fs::read_to_string(&text)
                .with_context(|| format!("failed to read {}", text.display()))?;
            let counts = Verifier::new(config.verifier_config())?.count_blocks(&query, &text)?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            } else {
                println!(
                    "\"{}\" found {} times (exact: {}, fuzzy: {}, blocks kept: {} of {})",
                    query.trim(),
                    counts.count(),
                    counts.exact,
                    counts.fuzzy,
                    counts.kept_blocks,
                    counts.total_blocks
                );
            }

            Ok(exit_code(counts.count() > 0))
        }
        Commands::Sort { mode, records } => {
            let records: Vec<ResultRecord> = read_json_array(&records)?
                .iter()
                .map(ResultRecord::try_from)
                .collect::<Result<_, _>>()
                .with_context(|| format!("invalid record in {}", records.display()))?;
            let check = verify_sort_order(mode, &records);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&check)?);
            } else {
                println!("{}: {}", mode, check);
            }

            Ok(exit_code(check.is_ok()))
        }
    }
}

fn read_json_array(path: &Path) -> anyhow::Result<Vec<Value>> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of records", path.display()))
}

fn exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
