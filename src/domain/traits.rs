// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are the seams between the training loop and the
// infrastructure that records its observations.
//
// The trainer only sees `MetricsSink`; the concrete recorder
// (Layer 6) keeps the rows and writes the CSV at the end.
// Tests can pass any in-memory sink and assert on exactly what
// the loop recorded, in exactly which order.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)
//            Rust Book §17 (Object Oriented Patterns)

use crate::domain::evaluation::EvalReport;

// ─── MetricsSink ──────────────────────────────────────────────────────────────
/// Receives the chronological metrics stream of a training run.
///
/// Implementations:
///   - MetricsRecorder → keeps rows in memory, writes metrics.csv
pub trait MetricsSink {
    /// Record the scalar loss of one training batch
    fn record_train_loss(&mut self, loss: f64);

    /// Record the outcome of one full evaluation pass
    fn record_validation(&mut self, report: &EvalReport);
}
