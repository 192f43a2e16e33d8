//! fuzzmatch: fuzzy string similarity from the command line.

use clap::{Parser, Subcommand};
use fuzzmatch_cli::output::{self, Status};
use fuzzmatch_core::config::Config;
use fuzzmatch_core::error::{exit_codes, Error, ErrorCode, Result};
use fuzzmatch_similarity::{
    compare, damerau, levenshtein, rank, rank_json, tokenize, Candidate, MatchResult, Mode,
    RankOptions,
};
use fuzzmatch_telemetry::{TelemetryConfig, Timer};
use std::collections::BTreeMap;
use std::io::{BufRead, Read};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "fuzzmatch")]
#[command(about = "Fuzzy string similarity")]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a fuzzmatch.toml configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Similarity ratio between two strings
    Compare {
        /// First string
        a: String,
        /// Second string
        b: String,
        /// Algorithm: bag_of_words, levenshtein or damerau_levenshtein
        #[arg(short, long)]
        mode: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Raw edit distance between two strings
    Distance {
        /// First string
        a: String,
        /// Second string
        b: String,
        /// Count adjacent swaps as one edit (Damerau-Levenshtein)
        #[arg(short, long)]
        transpositions: bool,
    },

    /// Normalized word tokens of a string
    Tokenize {
        /// Text to tokenize
        text: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank candidates by similarity to a query
    Rank {
        /// Query string
        query: String,
        /// Candidates; read one per line from stdin when omitted
        candidates: Vec<String>,
        /// Read candidates from stdin as a JSON array of {"id", "text"} objects
        #[arg(long, conflicts_with = "candidates")]
        json_input: bool,
        /// Algorithm: bag_of_words, levenshtein or damerau_levenshtein
        #[arg(short, long)]
        mode: Option<String>,
        /// Minimum score to keep a candidate
        #[arg(short, long)]
        threshold: Option<f64>,
        /// Maximum results, 0 for all
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report(&e),
    };

    let telemetry = if cli.verbose {
        TelemetryConfig::verbose()
    } else {
        TelemetryConfig::with_level(&config.schema.logging.level)
    };
    if let Err(e) = fuzzmatch_telemetry::init_with_config(telemetry) {
        Status::warning(&format!("Logging disabled: {}", e));
    }

    match run(cli.command, &config) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => report(&e),
    }
}

fn report(error: &Error) -> ExitCode {
    tracing::debug!(code = %error.code, "command failed");
    Status::error(&error.to_string());
    ExitCode::from(error.exit_code() as u8)
}

fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Compare { a, b, mode, json } => {
            let mode = resolve_mode(mode.as_deref(), config.schema.matching.mode)?;
            run_compare(&a, &b, mode, json)
        }
        Commands::Distance { a, b, transpositions } => {
            run_distance(&a, &b, transpositions);
            Ok(())
        }
        Commands::Tokenize { text, json } => run_tokenize(&text, json),
        Commands::Rank {
            query,
            candidates,
            json_input,
            mode,
            threshold,
            limit,
            json,
        } => {
            let mut options = config.schema.matching.to_rank_options();
            options = options.with_mode(resolve_mode(mode.as_deref(), options.mode)?);
            if let Some(threshold) = threshold {
                if !(0.0..=1.0).contains(&threshold) {
                    return Err(Error::invalid_input(format!(
                        "threshold {} is outside [0, 1]",
                        threshold
                    )));
                }
                options = options.with_threshold(threshold);
            }
            if let Some(limit) = limit {
                options = options.with_limit(limit);
            }

            let timer = Timer::start("rank");
            let results = if json_input {
                let mut input = String::new();
                std::io::stdin().read_to_string(&mut input)?;
                rank_json(&query, &input, &options)?
            } else {
                let texts = if candidates.is_empty() {
                    read_stdin_lines()?
                } else {
                    candidates
                };
                let candidates: Vec<Candidate> = texts
                    .into_iter()
                    .enumerate()
                    .map(|(i, text)| Candidate::new((i + 1).to_string(), text))
                    .collect();
                rank(&query, &candidates, &options)
            };
            timer.stop();

            print_rank(&query, &results, &options, json)
        }
    }
}

/// Parse a mode name given on the command line, or fall back to `default`
fn resolve_mode(name: Option<&str>, default: Mode) -> Result<Mode> {
    match name {
        Some(name) => Ok(name.parse::<Mode>()?),
        None => Ok(default),
    }
}

fn run_compare(a: &str, b: &str, mode: Mode, json: bool) -> Result<()> {
    let score = compare(a, b, mode);

    if json {
        let value = serde_json::json!({ "mode": mode, "score": score });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", output::format_score(score));
    }

    Ok(())
}

fn run_distance(a: &str, b: &str, transpositions: bool) {
    let distance = if transpositions {
        damerau::distance(a, b)
    } else {
        levenshtein::distance(a, b)
    };
    println!("{}", distance);
}

fn run_tokenize(text: &str, json: bool) -> Result<()> {
    let bag = tokenize(text);
    let counts: BTreeMap<&str, usize> = bag.iter().collect();

    if json {
        let value = serde_json::json!({ "total": bag.len(), "tokens": counts });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if counts.is_empty() {
        Status::warning("No tokens");
    } else {
        for (word, count) in counts {
            if count > 1 {
                println!("{} ×{}", word, count);
            } else {
                println!("{}", word);
            }
        }
    }

    Ok(())
}

fn print_rank(query: &str, results: &[MatchResult], options: &RankOptions, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if results.is_empty() {
        Status::warning(&format!(
            "No candidates scored at least {}",
            output::format_score(options.threshold)
        ));
        return Ok(());
    }

    Status::header(&format!(
        "{} for \"{}\" ({})",
        output::format_count(results.len(), "match", "matches"),
        query,
        options.mode
    ));
    for (i, result) in results.iter().enumerate() {
        output::print_ranked(i + 1, result.score, &result.text);
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let lines = std::io::stdin()
        .lock()
        .lines()
        .collect::<std::io::Result<Vec<String>>>()?;

    let candidates: Vec<String> = lines.into_iter().filter(|line| !line.trim().is_empty()).collect();
    if candidates.is_empty() {
        return Err(Error::new(ErrorCode::InvalidInput, "No candidates given")
            .with_suggestion("Pass candidates as arguments or pipe them one per line"));
    }

    Ok(candidates)
}
