use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "summary-analyzer",
    version,
    about = "Heuristic comparison of LLM-generated text summaries"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score every model summary and render a ranked report
    Analyze(AnalyzeCommand),
    /// Score a single summary file
    Score(ScoreCommand),
    /// Copy the pre-written base report to its generated location
    Publish(PublishCommand),
    /// Print line, word and character counts for a report
    Stats(StatsCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    pub path: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Report destination, relative to PATH unless absolute
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Print the report without writing it to disk
    #[arg(long, conflicts_with = "output")]
    pub no_write: bool,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub file: PathBuf,
    #[arg(short, long)]
    pub model: String,
    /// Directory holding analyzer.toml
    #[arg(long, default_value = ".")]
    pub config_root: PathBuf,
}

#[derive(Args)]
pub struct PublishCommand {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct StatsCommand {
    pub file: PathBuf,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
