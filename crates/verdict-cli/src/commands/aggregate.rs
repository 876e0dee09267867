use anyhow::bail;

use verdict::{summarize_dir, write_summary_csv};

use super::AggregateArgs;

pub(crate) fn run(args: AggregateArgs) -> anyhow::Result<()> {
    if !args.dir.is_dir() {
        bail!("not a directory: {}", args.dir.display());
    }

    let summaries = summarize_dir(&args.dir)?;
    if summaries.is_empty() {
        println!("no readable result files in {}", args.dir.display());
        return Ok(());
    }

    for summary in &summaries {
        println!(
            "[{}] {}: total {:.2} over {} record(s) ({} unparsed)",
            summary.index,
            summary.file_name,
            summary.total_avg,
            summary.record_count,
            summary.parse_failures
        );
    }

    let out = args
        .out
        .unwrap_or_else(|| args.dir.join("score_summary.csv"));
    write_summary_csv(&out, &summaries)?;

    println!(
        "summarized {} file(s) into {}",
        summaries.len(),
        out.display()
    );
    Ok(())
}
