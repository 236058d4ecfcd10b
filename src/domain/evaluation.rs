// ============================================================
// Layer 3 — Evaluation Aggregation
// ============================================================
// Accumulates per-batch results of a test pass into one report.
//
// The mean loss over the split must weight each batch's mean
// loss by that batch's example count before dividing by the
// total example count. The final batch of a split is usually
// smaller than the rest, and a naive average of per-batch means
// would give its examples too much weight:
//
//   batches of sizes 3 and 1, mean losses 2.0 and 6.0
//     weighted: (2.0*3 + 6.0*1) / 4 = 3.0   (correct)
//     naive:    (2.0 + 6.0) / 2     = 4.0   (wrong)
//
// Reference: Rust Book §5 (Structs)

/// Result of one full evaluation pass over the test split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalReport {
    /// Example-weighted mean NLL loss over the whole split
    pub loss: f64,

    /// correct / examples, always in [0.0, 1.0]
    pub accuracy: f64,

    /// Number of correctly classified examples (arg-max == label)
    pub correct: usize,

    /// Total number of examples seen in the pass
    pub examples: usize,
}

/// Running totals while iterating the test batches.
#[derive(Debug, Default)]
pub struct EvalTotals {
    loss_sum: f64,
    correct:  usize,
    examples: usize,
}

impl EvalTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in one batch: `mean_loss` is the batch's mean loss,
    /// `correct` how many of its `examples` were classified right.
    pub fn add_batch(&mut self, mean_loss: f64, correct: usize, examples: usize) {
        self.loss_sum += mean_loss * examples as f64;
        self.correct  += correct;
        self.examples += examples;
    }

    /// Close the pass and compute the report.
    /// An empty pass has no defined mean loss (NaN) and 0.0 accuracy.
    pub fn finish(self) -> EvalReport {
        let (loss, accuracy) = if self.examples > 0 {
            (
                self.loss_sum / self.examples as f64,
                self.correct as f64 / self.examples as f64,
            )
        } else {
            (f64::NAN, 0.0)
        };

        EvalReport {
            loss,
            accuracy,
            correct:  self.correct,
            examples: self.examples,
        }
    }
}
