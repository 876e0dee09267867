use std::sync::Arc;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};

use verdict::{Config, Dispatcher, GenaiJudge, ResultSink, jobs_from_records, read_records_lenient};

use super::ScoreArgs;

pub(crate) async fn run(args: ScoreArgs) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(model) = args.model {
        config.model = model;
    }
    if let Some(concurrency) = args.concurrency {
        config.concurrency = concurrency;
    }
    if let Some(system_prompt) = args.system_prompt {
        config.system_prompt = system_prompt;
    }
    config.validate()?;

    let sink = Arc::new(ResultSink::open(&args.output).await?);
    let existing = sink.len().await;
    if existing > 0 {
        println!(
            "keeping {existing} existing result(s) in {}",
            args.output.display()
        );
    }

    let records = read_records_lenient(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let jobs = jobs_from_records(&records);
    if jobs.is_empty() {
        println!("no scoreable records in {}", args.input.display());
        return Ok(());
    }

    println!(
        "scoring {} prompt(s) with {} ({} workers)",
        jobs.len(),
        config.model,
        config.concurrency.min(jobs.len())
    );

    let bar = ProgressBar::new(jobs.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("[{bar:40}] {pos}/{len} {msg}")?.progress_chars("=>-"),
    );

    let bar_in_progress = bar.clone();
    let dispatcher = Dispatcher::from_config(GenaiJudge::new(&config.model), &config);
    let summary = dispatcher
        .run(jobs, Arc::clone(&sink), move |p| {
            bar_in_progress.set_position(p.done as u64);
            if p.failed > 0 {
                bar_in_progress.set_message(format!("{} failed", p.failed));
            }
        })
        .await?;
    bar.finish();

    println!(
        "scored {}/{} prompt(s) in {:.1}s ({} failed); results in {}",
        summary.completed,
        summary.total,
        summary.elapsed.as_secs_f64(),
        summary.failed,
        args.output.display()
    );
    Ok(())
}
