// ============================================================
// Layer 3 — Metrics Row Domain Type
// ============================================================
// One row of the metrics table a training run accumulates.
//
// The table interleaves two kinds of observation:
//   - Train:      the scalar loss of ONE training batch
//   - Validation: mean loss + accuracy of ONE full test pass
//
// Chronology of a run with E epochs and B train batches per epoch:
//   row 0:        Validation   (baseline, before any training)
//   rows 1..=B:   Train        (epoch 1, one row per batch)
//   row B+1:      Validation   (after epoch 1)
//   ...repeated for every epoch...
//   total rows:   1 + E * (B + 1)
//
// The enum makes the table invariant hold by construction:
// a row is EITHER a train observation OR a validation one,
// never both, and a validation row always carries loss and
// accuracy together.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};

/// A single chronological observation in the metrics table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MetricsRow {
    /// Scalar mean NLL loss of one training batch
    Train { loss: f64 },

    /// One full evaluation pass over the test split
    Validation { loss: f64, accuracy: f64 },
}

impl MetricsRow {
    /// The training loss, if this is a train row
    pub fn train_loss(&self) -> Option<f64> {
        match self {
            MetricsRow::Train { loss }       => Some(*loss),
            MetricsRow::Validation { .. }    => None,
        }
    }

    /// The validation loss, if this is a validation row
    pub fn val_loss(&self) -> Option<f64> {
        match self {
            MetricsRow::Train { .. }            => None,
            MetricsRow::Validation { loss, .. } => Some(*loss),
        }
    }

    /// The validation accuracy, if this is a validation row
    pub fn accuracy(&self) -> Option<f64> {
        match self {
            MetricsRow::Train { .. }                => None,
            MetricsRow::Validation { accuracy, .. } => Some(*accuracy),
        }
    }

    /// Render this row as one CSV line under the header
    /// `train_loss,val_loss,accuracy`.
    ///
    /// Unset optional fields stay empty, so a train row reads
    /// "2.281004,," and a validation row ",0.351200,0.894300".
    pub fn to_csv(&self) -> String {
        match self {
            MetricsRow::Train { loss }                => format!("{:.6},,", loss),
            MetricsRow::Validation { loss, accuracy } => format!(",{:.6},{:.6}", loss, accuracy),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_row_fields() {
        let row = MetricsRow::Train { loss: 2.5 };
        assert_eq!(row.train_loss(), Some(2.5));
        assert_eq!(row.val_loss(),   None);
        assert_eq!(row.accuracy(),   None);
    }

    #[test]
    fn test_validation_row_fields() {
        let row = MetricsRow::Validation { loss: 0.4, accuracy: 0.91 };
        assert_eq!(row.train_loss(), None);
        assert_eq!(row.val_loss(),   Some(0.4));
        assert_eq!(row.accuracy(),   Some(0.91));
    }

    #[test]
    fn test_csv_cells_leave_unset_fields_empty() {
        let train = MetricsRow::Train { loss: 2.302585 };
        assert_eq!(train.to_csv(), "2.302585,,");

        let val = MetricsRow::Validation { loss: 0.25, accuracy: 0.925 };
        assert_eq!(val.to_csv(), ",0.250000,0.925000");
    }
}
