//! Accuracy comparison charts.
//!
//! Renders the accuracy-vs-top-K matrix three ways (line, grouped bars,
//! heatmap) as PNG files. Input is the `file,accuracy,samples` CSV; series
//! are derived from the `-top<K>` marker in each label.

pub mod error;
pub mod series;

#[cfg(test)]
mod tests;

pub use error::ChartError;
pub use series::{AccuracyRow, AccuracyTable, parse_label};

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

const CHART_SIZE: (u32, u32) = (1024, 640);
const HEATMAP_SIZE: (u32, u32) = (960, 540);

/// Accuracy vs top-K, one line (with markers) per model.
pub fn render_line_chart(table: &AccuracyTable, path: &Path) -> Result<(), ChartError> {
    let ks = table.top_ks();
    let (Some(first), Some(last)) = (ks.first(), ks.last()) else {
        return Err(ChartError::EmptyTable);
    };
    let x_range = (*first as f64 - 0.5)..(*last as f64 + 0.5);
    let (y_min, y_max) = padded_y_range(table);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Accuracy by top-K", ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(x_range, y_min..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Top K")
        .y_desc("Accuracy (%)")
        .draw()
        .map_err(render_err)?;

    for (series_idx, model) in table.models().enumerate() {
        let color = Palette99::pick(series_idx);
        let style = color.stroke_width(2);
        let points: Vec<(f64, f64)> = table
            .points(model)
            .into_iter()
            .flatten()
            .map(|(k, v)| (*k as f64, *v))
            .collect();

        chart
            .draw_series(LineSeries::new(points.clone(), style))
            .map_err(render_err)?
            .label(model)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], style));

        chart
            .draw_series(points.iter().map(|p| Circle::new(*p, 4, color.filled())))
            .map_err(render_err)?;
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.85))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), "wrote line chart");
    Ok(())
}

/// Grouped bars: one cluster per top-K, one bar per model.
pub fn render_bar_chart(table: &AccuracyTable, path: &Path) -> Result<(), ChartError> {
    let ks = table.top_ks();
    if ks.is_empty() {
        return Err(ChartError::EmptyTable);
    }
    let model_count = table.model_count();
    let (_, max_acc) = table.accuracy_bounds();
    let y_max = (max_acc * 1.15).clamp(1.0, 110.0);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Accuracy by model and top-K", ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(44)
        .y_label_area_size(56)
        .build_cartesian_2d(0f64..ks.len() as f64, 0f64..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(ks.len())
        .x_label_formatter(&|x| {
            ks.get(x.floor() as usize)
                .map(|k| format!("top{k}"))
                .unwrap_or_default()
        })
        .x_desc("Top K")
        .y_desc("Accuracy (%)")
        .draw()
        .map_err(render_err)?;

    let bar_width = 0.8 / model_count as f64;

    for (series_idx, model) in table.models().enumerate() {
        let color = Palette99::pick(series_idx);
        let bars: Vec<Rectangle<(f64, f64)>> = ks
            .iter()
            .enumerate()
            .filter_map(|(cluster, k)| {
                table.accuracy(model, *k).map(|value| {
                    let x0 = cluster as f64 + 0.1 + series_idx as f64 * bar_width;
                    Rectangle::new([(x0, 0.0), (x0 + bar_width * 0.9, value)], color.filled())
                })
            })
            .collect();

        chart
            .draw_series(bars)
            .map_err(render_err)?
            .label(model)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.85))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), "wrote bar chart");
    Ok(())
}

/// Model x top-K matrix with per-cell accuracy labels. Missing cells stay
/// blank.
pub fn render_heatmap(table: &AccuracyTable, path: &Path) -> Result<(), ChartError> {
    let ks = table.top_ks();
    if ks.is_empty() {
        return Err(ChartError::EmptyTable);
    }
    let models: Vec<&str> = table.models().collect();
    let (min_acc, max_acc) = table.accuracy_bounds();

    let root = BitMapBackend::new(path, HEATMAP_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Accuracy heatmap", ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(44)
        .y_label_area_size(140)
        .build_cartesian_2d(0f64..ks.len() as f64, 0f64..models.len() as f64)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(ks.len())
        .y_labels(models.len())
        .x_label_formatter(&|x| {
            ks.get(x.floor() as usize)
                .map(|k| format!("top{k}"))
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| {
            models
                .get(y.floor() as usize)
                .map(|m| m.to_string())
                .unwrap_or_default()
        })
        .x_desc("Top K")
        .y_desc("Model")
        .draw()
        .map_err(render_err)?;

    let spread = max_acc - min_acc;
    let mut cells = Vec::new();
    let mut labels = Vec::new();

    for (row, model) in models.iter().enumerate() {
        for (col, k) in ks.iter().enumerate() {
            let Some(value) = table.accuracy(model, *k) else {
                continue;
            };

            let t = if spread.abs() < f64::EPSILON {
                1.0
            } else {
                (value - min_acc) / spread
            };

            cells.push(Rectangle::new(
                [
                    (col as f64 + 0.02, row as f64 + 0.02),
                    (col as f64 + 0.98, row as f64 + 0.98),
                ],
                heat_color(t).filled(),
            ));
            labels.push(Text::new(
                format!("{value:.1}"),
                (col as f64 + 0.36, row as f64 + 0.55),
                ("sans-serif", 16),
            ));
        }
    }

    chart.draw_series(cells).map_err(render_err)?;
    chart.draw_series(labels).map_err(render_err)?;

    root.present().map_err(render_err)?;
    info!(path = %path.display(), "wrote heatmap");
    Ok(())
}

fn padded_y_range(table: &AccuracyTable) -> (f64, f64) {
    let (min, max) = table.accuracy_bounds();
    let pad = ((max - min) * 0.15).max(2.0);
    ((min - pad).max(0.0), (max + pad).min(100.0))
}

// light yellow -> deep red, YlOrRd-ish
fn heat_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let lerp = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    RGBColor(lerp(255.0, 189.0), lerp(255.0, 0.0), lerp(204.0, 38.0))
}

fn render_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}
