//! gamelens CLI - Command-line interface for the gamelens engine
//!
//! Loads raw game descriptions (JSON files or built-in catalogue entries),
//! normalizes and analyzes them, and prints or exports the result.

mod render;

use clap::{Parser, Subcommand, ValueEnum};
use gamelens_engine::catalogue::{catalogue, example_by_id};
use gamelens_engine::{analyze, normalize, AnalysisResult, EngineError, Game, RawDescription};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "gamelens")]
#[command(about = "Pure-strategy analysis of normal-form games")]
#[command(version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one or more JSON game descriptions
    Analyze {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Analyze a built-in example game
    Example {
        id: String,
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List built-in example games
    Examples,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid game description in {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("cannot write csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown example {0:?} (run `gamelens examples` to list them)")]
    UnknownExample(String),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("{0} description(s) could not be analyzed")]
    Failed(usize),
}

/// A normalized game with its analysis and the extraction notes.
pub struct Report {
    pub game: Game,
    pub analysis: AnalysisResult,
    pub ambiguities: Vec<String>,
    pub assumptions: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Analyze { files, format } => {
            log::info!("analyzing {} description(s)", files.len());
            // Each file is an independent analysis; results keep argument order.
            let reports: Vec<Result<Report, CliError>> =
                files.par_iter().map(|path| load_and_analyze(path)).collect();
            let mut failed = 0usize;
            for report in reports {
                match report {
                    Ok(report) => print!("{}", render::render(&report, format)?),
                    Err(e) => {
                        log::error!("{}", e);
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                return Err(CliError::Failed(failed));
            }
            Ok(())
        }
        Commands::Example { id, format } => {
            let example = example_by_id(&id).ok_or(CliError::UnknownExample(id))?;
            log::info!("analyzing example {}", example.id);
            let report = build_report(example.raw())?;
            print!("{}", render::render(&report, format)?);
            Ok(())
        }
        Commands::Examples => {
            for example in catalogue() {
                println!("{:<22} {:<18} {}", example.id, example.category, example.title);
            }
            Ok(())
        }
    }
}

fn load_and_analyze(path: &Path) -> Result<Report, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })?;
    let raw: RawDescription = serde_json::from_str(&text).map_err(|source| CliError::Decode {
        path: path.to_owned(),
        source,
    })?;
    build_report(raw)
}

fn build_report(raw: RawDescription) -> Result<Report, CliError> {
    let game = normalize(&raw)?;
    let analysis = analyze(&game);
    Ok(Report {
        game,
        analysis,
        ambiguities: raw.ambiguities,
        assumptions: raw.assumptions,
    })
}
