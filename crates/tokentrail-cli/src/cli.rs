//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tokentrail_domain::WalkMode;

/// Tokentrail - reconstruct where values in captured HTTP traffic came from.
#[derive(Debug, Parser)]
#[command(name = "tokentrail")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "TOKENTRAIL_CONFIG")]
    pub config: Option<PathBuf>,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
    /// Quiet format (values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Walk dependency chains from one or more seeds
    Trace(TraceArgs),

    /// Propose seed values from the capture
    Seeds(SeedsArgs),

    /// Summarise traffic and token statistics
    Survey(SurveyArgs),

    /// List every transaction whose body contains a value
    Locate(LocateArgs),
}

/// Arguments for the trace command.
#[derive(Debug, Parser)]
pub struct TraceArgs {
    /// HAR capture file
    pub har: PathBuf,

    /// Value to trace; repeat for several. Seeds are discovered when omitted
    #[arg(short, long = "seed")]
    pub seeds: Vec<String>,

    /// Traversal mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Entropy threshold in bits per character
    #[arg(short = 't', long)]
    pub entropy_threshold: Option<f64>,

    /// Deepest step that is still expanded
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// Arguments for the seeds command.
#[derive(Debug, Parser)]
pub struct SeedsArgs {
    /// HAR capture file
    pub har: PathBuf,

    /// Entropy threshold in bits per character
    #[arg(short = 't', long)]
    pub entropy_threshold: Option<f64>,
}

/// Arguments for the survey command.
#[derive(Debug, Parser)]
pub struct SurveyArgs {
    /// HAR capture file
    pub har: PathBuf,

    /// Entropy threshold in bits per character
    #[arg(short = 't', long)]
    pub entropy_threshold: Option<f64>,
}

/// Arguments for the locate command.
#[derive(Debug, Parser)]
pub struct LocateArgs {
    /// HAR capture file
    pub har: PathBuf,

    /// Value to search for (exact, case-sensitive)
    pub value: String,
}

/// Traversal mode argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// First-reference walkback
    First,
    /// Full recursive chain
    Full,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ModeArg> for WalkMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::First => WalkMode::First,
            ModeArg::Full => WalkMode::Full,
        }
    }
}
