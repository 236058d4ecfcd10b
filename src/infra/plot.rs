// ============================================================
// Layer 6 — Terminal Charts
// ============================================================
// Renders the metrics table as braille line charts straight in
// the terminal, so a run can be judged without leaving the shell
// or opening the CSV in a spreadsheet.
//
// Two charts are produced after training:
//   1. Loss curves    — training loss and validation loss,
//      both on a log10 y-axis
//   2. Accuracy curve — validation accuracy per evaluation pass
//
// Why log10 for the losses?
//   Loss starts near ln(10) ≈ 2.3 and quickly drops by an order
//   of magnitude. On a linear axis the late epochs flatten into
//   an unreadable line along the floor. log10 spreads them out.
//
// The x-axis is the row index in the metrics table, so training
// rows (many per epoch) and validation rows (one per epoch)
// share a common timeline.
//
// Charts are best-effort: with fewer than two usable points
// there is nothing to draw and None is returned.
//
// Reference: textplots crate (Unicode braille canvas)

use textplots::{Chart, Plot, Shape};

use crate::domain::metrics::MetricsRow;

/// Chart canvas size in terminal cells.
const CHART_WIDTH:  u32 = 256;
const CHART_HEIGHT: u32 = 32;

/// Extract one column of the table as (row index, value) points.
fn series(
    rows:   &[MetricsRow],
    column: fn(&MetricsRow) -> Option<f64>,
) -> Vec<(f32, f32)> {
    rows.iter()
        .enumerate()
        .filter_map(|(i, row)| column(row).map(|v| (i as f32, v as f32)))
        .collect()
}

/// Apply log10 and drop points the chart cannot place.
/// A zero loss maps to -inf, which has no pixel row.
fn log10_series(points: Vec<(f32, f32)>) -> Vec<(f32, f32)> {
    points
        .into_iter()
        .map(|(x, y)| (x, y.log10()))
        .filter(|(_, y)| y.is_finite())
        .collect()
}

/// Render training and validation loss on a shared log10 axis.
pub fn loss_chart(rows: &[MetricsRow]) -> Option<String> {
    if rows.len() < 2 {
        return None;
    }

    let train = log10_series(series(rows, MetricsRow::train_loss));
    let val   = log10_series(series(rows, MetricsRow::val_loss));
    if train.len() < 2 && val.len() < 2 {
        return None;
    }

    let xmax = (rows.len() - 1) as f32;
    // Shapes borrow the point vectors, so build the whole chart
    // in one statement to keep the temporaries alive
    let chart = Chart::new(CHART_WIDTH, CHART_HEIGHT, 0.0, xmax)
        .lineplot(&Shape::Lines(&train))
        .lineplot(&Shape::Lines(&val))
        .to_string();
    Some(chart)
}

/// Render validation accuracy over the run.
pub fn accuracy_chart(rows: &[MetricsRow]) -> Option<String> {
    let points = series(rows, MetricsRow::accuracy);
    if points.len() < 2 {
        return None;
    }

    let xmax = (rows.len() - 1) as f32;
    let chart = Chart::new(CHART_WIDTH, CHART_HEIGHT, 0.0, xmax)
        .lineplot(&Shape::Lines(&points))
        .to_string();
    Some(chart)
}
