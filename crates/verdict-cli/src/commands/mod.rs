//! Subcommand definitions and dispatch.

mod aggregate;
mod chart;
mod prepare;
mod score;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Offline evaluation toolkit for RAG pipelines.
#[derive(Parser, Debug)]
#[command(name = "verdict", version, about)]
pub struct Verdict {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rewrite a field of a JSON record array into judging prompts.
    Prepare(PrepareArgs),
    /// Dispatch prepared prompts to the judge model and persist results.
    Score(ScoreArgs),
    /// Aggregate judge scorecards into a summary CSV.
    Aggregate(AggregateArgs),
    /// Render accuracy-vs-top-K comparison charts.
    Chart(ChartArgs),
}

#[derive(clap::Args, Debug)]
pub struct PrepareArgs {
    /// Input JSON file or directory of JSON files.
    pub input: PathBuf,

    /// Output file (or directory with --per-file).
    pub output: PathBuf,

    /// Record field to rewrite into the judging prompt.
    #[arg(long, default_value = "content")]
    pub field: String,

    /// Template file with a {content} placeholder (built-in rubric if unset).
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// With a directory input, write one output file per input file instead
    /// of one merged array.
    #[arg(long)]
    pub per_file: bool,
}

#[derive(clap::Args, Debug)]
pub struct ScoreArgs {
    /// Prepared record array (a single top-level object is tolerated).
    pub input: PathBuf,

    /// Output JSON array; existing results are kept and appended to.
    pub output: PathBuf,

    /// Judge model (overrides VERDICT_MODEL).
    #[arg(long)]
    pub model: Option<String>,

    /// Worker-pool size (overrides VERDICT_CONCURRENCY).
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Judge system prompt (overrides VERDICT_SYSTEM_PROMPT).
    #[arg(long)]
    pub system_prompt: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct AggregateArgs {
    /// Directory of result files written by `score`.
    pub dir: PathBuf,

    /// Summary CSV path (defaults to score_summary.csv inside the directory).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct ChartArgs {
    /// Accuracy CSV with file,accuracy,samples columns.
    pub input: PathBuf,

    /// Directory the PNG charts are written to.
    #[arg(long, default_value = "charts")]
    pub out_dir: PathBuf,

    /// Rename a series for display, e.g. --rename 8b=qwen3-embedding-8B
    /// (repeatable).
    #[arg(long = "rename", value_parser = parse_rename)]
    pub renames: Vec<(String, String)>,
}

fn parse_rename(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(old, new)| (old.trim().to_string(), new.trim().to_string()))
        .filter(|(old, new)| !old.is_empty() && !new.is_empty())
        .ok_or_else(|| format!("expected OLD=NEW, got '{s}'"))
}

/// Runs the parsed command.
pub async fn run(cli: Verdict) -> anyhow::Result<()> {
    match cli.command {
        Command::Prepare(args) => prepare::run(args),
        Command::Score(args) => score::run(args).await,
        Command::Aggregate(args) => aggregate::run(args),
        Command::Chart(args) => chart::run(args),
    }
}
