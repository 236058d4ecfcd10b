// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load MNIST train/test splits  (Layer 4 - data)
//   Step 2: Save config for inference     (Layer 6 - infra)
//   Step 3: Run training loop             (Layer 5 - ml)
//   Step 4: Write the metrics CSV         (Layer 6 - infra)
//   Step 5: Render terminal charts        (Layer 6 - infra)
//
// Reference: Rust Book §7 (Modules)
//            Burn Book §5 (Training)

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::data::dataset;
use crate::domain::metrics::MetricsRow;
use crate::infra::{
    checkpoint::CheckpointManager,
    metrics::MetricsRecorder,
    plot,
};
use crate::ml::trainer::run_training;

// ─── Training Configuration ──────────────────────────────────────────────────
// All hyperparameters for a training run.
// Serialisable so it can be saved to disk and reloaded for inference.
// The #[derive(Serialize, Deserialize)] macros from serde handle
// reading/writing this struct to JSON automatically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub artifact_dir:    String,
    pub epochs:          usize,
    pub batch_size:      usize,
    pub eval_batch_size: usize,
    pub lr:              f64,
    pub seed:            u64,
    pub num_classes:     usize,
    pub padding:         usize,
    pub num_workers:     usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            artifact_dir:    "artifacts".to_string(),
            epochs:          3,
            batch_size:      64,
            eval_batch_size: 512,
            lr:              1e-3,
            seed:            42,
            num_classes:     10,
            padding:         2,
            num_workers:     1,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full training pipeline.
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    /// Create a new TrainUseCase with the given configuration
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Load MNIST splits ─────────────────────────────────────────
        // Downloads on first run, then serves from the local cache
        let train_dataset = dataset::load_train();
        let test_dataset  = dataset::load_test();

        // ── Step 2: Save config for inference ─────────────────────────────────
        // The inferencer needs to know the model architecture to rebuild it
        let ckpt_manager = CheckpointManager::new(&cfg.artifact_dir);
        ckpt_manager.save_config(cfg)?;

        // ── Step 3: Run training loop (Layer 5) ───────────────────────────────
        // Every batch loss and evaluation result lands in the recorder
        let mut recorder = MetricsRecorder::new();
        run_training(cfg, train_dataset, test_dataset, ckpt_manager, &mut recorder)?;

        // ── Step 4: Write the metrics table ───────────────────────────────────
        let csv_path = recorder.write_csv(&cfg.artifact_dir)?;
        println!("Metrics table written to '{}'", csv_path.display());

        // ── Step 5: Terminal charts ───────────────────────────────────────────
        print_charts(recorder.rows());

        Ok(())
    }
}

// ─── Terminal Charts ─────────────────────────────────────────────────────────
// Best-effort: with too few rows there is nothing worth drawing
// and the charts are simply skipped.
fn print_charts(rows: &[MetricsRow]) {
    if let Some(chart) = plot::loss_chart(rows) {
        println!("\nLoss (log10): train + validation");
        println!("{chart}");
    }
    if let Some(chart) = plot::accuracy_chart(rows) {
        println!("\nValidation accuracy");
        println!("{chart}");
    }
}
