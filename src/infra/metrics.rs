// ============================================================
// Layer 6 — Metrics Recorder
// ============================================================
// Collects metric rows in memory during training and writes
// them out as a single CSV file once the run is over.
//
// Why buffer instead of streaming to disk?
//   - The table is small (a few thousand rows per run)
//   - One write at the end means no half-written file if the
//     run is interrupted
//   - The in-memory table is what the terminal charts plot
//
// CSV layout (one column group per row kind):
//
//   train_loss,val_loss,accuracy
//   ,2.302585,0.098700        <- validation row (baseline)
//   2.214890,,                <- training row
//   ...
//
// Reference: RFC 4180 (CSV format)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
};

use crate::domain::evaluation::EvalReport;
use crate::domain::metrics::MetricsRow;
use crate::domain::traits::MetricsSink;

/// The fixed CSV header line.
pub const CSV_HEADER: &str = "train_loss,val_loss,accuracy";

/// In-memory metrics table for one training run.
#[derive(Debug, Default)]
pub struct MetricsRecorder {
    /// Rows in the order they were recorded
    rows: Vec<MetricsRow>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded rows, oldest first.
    pub fn rows(&self) -> &[MetricsRow] {
        &self.rows
    }

    /// Write the whole table to {dir}/metrics.csv.
    ///
    /// File::create truncates any previous file, so re-running
    /// training replaces the old table instead of appending.
    pub fn write_csv(&self, dir: impl Into<String>) -> Result<PathBuf> {
        let dir = PathBuf::from(dir.into());
        fs::create_dir_all(&dir)?;
        let path = dir.join("metrics.csv");

        let mut file = File::create(&path)
            .with_context(|| {
                format!("Cannot create metrics file '{}'", path.display())
            })?;

        writeln!(file, "{CSV_HEADER}")?;
        for row in &self.rows {
            writeln!(file, "{}", row.to_csv())?;
        }

        tracing::info!("Wrote {} metric rows to '{}'", self.rows.len(), path.display());
        Ok(path)
    }
}

// The trainer only sees this trait, never the recorder itself.
impl MetricsSink for MetricsRecorder {
    fn record_train_loss(&mut self, loss: f64) {
        self.rows.push(MetricsRow::Train { loss });
    }

    fn record_validation(&mut self, report: &EvalReport) {
        self.rows.push(MetricsRow::Validation {
            loss:     report.loss,
            accuracy: report.accuracy,
        });
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_artifact_dir;

    fn report(loss: f64, accuracy: f64) -> EvalReport {
        EvalReport { loss, accuracy, correct: 0, examples: 0 }
    }

    #[test]
    fn test_rows_keep_recording_order() {
        let mut recorder = MetricsRecorder::new();

        recorder.record_validation(&report(2.3, 0.1));
        recorder.record_train_loss(1.9);
        recorder.record_train_loss(1.5);
        recorder.record_validation(&report(1.2, 0.6));

        let rows = recorder.rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].val_loss(),   Some(2.3));
        assert_eq!(rows[1].train_loss(), Some(1.9));
        assert_eq!(rows[2].train_loss(), Some(1.5));
        assert_eq!(rows[3].accuracy(),   Some(0.6));
    }

    #[test]
    fn test_csv_file_layout() {
        let dir = temp_artifact_dir("csv");

        let mut recorder = MetricsRecorder::new();
        recorder.record_validation(&report(2.302585, 0.0987));
        recorder.record_train_loss(2.21489);

        let path = recorder
            .write_csv(dir.to_string_lossy().into_owned())
            .unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "train_loss,val_loss,accuracy");
        assert_eq!(lines[1], ",2.302585,0.098700");
        assert_eq!(lines[2], "2.214890,,");
        assert_eq!(lines.len(), 3);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_rewriting_truncates_previous_table() {
        let dir = temp_artifact_dir("truncate");

        let mut first = MetricsRecorder::new();
        first.record_train_loss(1.0);
        first.record_train_loss(2.0);
        first.write_csv(dir.to_string_lossy().into_owned()).unwrap();

        let mut second = MetricsRecorder::new();
        second.record_train_loss(3.0);
        let path = second.write_csv(dir.to_string_lossy().into_owned()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2); // header + one row

        std::fs::remove_dir_all(&dir).ok();
    }
}
