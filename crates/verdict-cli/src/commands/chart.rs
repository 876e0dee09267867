use std::fs;

use anyhow::Context;

use verdict::{AccuracyTable, render_bar_chart, render_heatmap, render_line_chart};

use super::ChartArgs;

pub(crate) fn run(args: ChartArgs) -> anyhow::Result<()> {
    let mut table = AccuracyTable::from_csv(&args.input)?;
    table.rename_models(&args.renames);

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let line = args.out_dir.join("accuracy_line.png");
    let bars = args.out_dir.join("accuracy_bars.png");
    let heatmap = args.out_dir.join("accuracy_heatmap.png");

    render_line_chart(&table, &line)?;
    render_bar_chart(&table, &bars)?;
    render_heatmap(&table, &heatmap)?;

    println!(
        "wrote {} model(s) x {} top-K value(s) to:",
        table.model_count(),
        table.top_ks().len()
    );
    for path in [&line, &bars, &heatmap] {
        println!("  {}", path.display());
    }
    Ok(())
}
