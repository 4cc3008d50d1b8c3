//! Command line argument parsing for the Vesper CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Vesper - a term-weighted intent classifier for voice command assistants
#[derive(Parser, Debug, Clone)]
#[command(name = "vesper")]
#[command(about = "A term-weighted intent classifier for voice command assistants")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct VesperArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl VesperArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify a single utterance
    Classify(ClassifyArgs),

    /// Run the interactive command loop
    Repl(ReplArgs),

    /// Show statistics for a trained model
    Stats(StatsArgs),
}

/// Arguments for one-shot classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// The utterance to classify
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Training corpus file (label: phrase per line)
    #[arg(short, long, value_name = "CORPUS_FILE", default_value = "data/training.txt")]
    pub corpus: PathBuf,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// Training corpus file (label: phrase per line)
    #[arg(short, long, value_name = "CORPUS_FILE", default_value = "data/training.txt")]
    pub corpus: PathBuf,
}

/// Arguments for model statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Training corpus file (label: phrase per line)
    #[arg(short, long, value_name = "CORPUS_FILE", default_value = "data/training.txt")]
    pub corpus: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
