// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Saves and restores model weights using Burn's CompactRecorder.
//
// What gets saved per run:
//   1. Model weights (model.mpk) — all learned parameters,
//      written once when training finishes
//   2. train_config.json — the run configuration
//
// The config is saved separately because inference needs the
// exact architecture (num_classes, padding) to rebuild the
// model before the weights can be loaded into it.
//
// Burn's CompactRecorder:
//   - Serialises model parameters to MessagePack format
//   - Stores tensors at half precision for smaller file size
//   - Type-safe: loading fails if architecture doesn't match
//
// Reference: Burn Book §5 (Records and Checkpointing)
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};
use std::{fs, path::PathBuf};

use crate::application::train_use_case::TrainConfig;
use crate::ml::model::LeNet;

/// Manages saving and loading of a run's artifacts.
/// All files are stored in the configured directory.
pub struct CheckpointManager {
    /// Path to the directory where artifacts are stored
    dir: PathBuf,
}

impl CheckpointManager {
    /// Create a new CheckpointManager.
    /// Creates the directory if it doesn't already exist.
    pub fn new(dir: impl Into<String>) -> Self {
        let dir = PathBuf::from(dir.into());
        // create_dir_all creates parent directories too, like `mkdir -p`
        fs::create_dir_all(&dir).ok();
        Self { dir }
    }

    /// Save the final model weights.
    ///
    /// Uses Burn's CompactRecorder which:
    ///   1. Calls model.into_record() to extract all parameters
    ///   2. Serialises to MessagePack at half precision
    ///   3. Writes to {dir}/model.mpk
    pub fn save_model<B: Backend>(&self, model: &LeNet<B>) -> Result<()> {
        // Build the file path (without extension — recorder adds it)
        let path = self.dir.join("model");

        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| {
                format!("Failed to save weights to '{}'", path.display())
            })?;

        tracing::debug!("Saved model weights to '{}'", path.display());
        Ok(())
    }

    /// Load model weights from a finished run.
    ///
    /// The model parameter must have the correct architecture
    /// (matching the saved weights) or loading will fail.
    pub fn load_model<B: Backend>(
        &self,
        model:  LeNet<B>,
        device: &B::Device,
    ) -> Result<LeNet<B>> {
        let path = self.dir.join("model");

        // Load the serialised record from disk
        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!(
                    "Cannot load weights from '{}'. Have you trained the model first?",
                    path.display()
                )
            })?;

        // load_record() returns a new model carrying the loaded weights
        Ok(model.load_record(record))
    }

    /// Save the training configuration to JSON.
    ///
    /// This must be called before training starts so the
    /// inferencer can reconstruct the exact model architecture.
    pub fn save_config(&self, cfg: &TrainConfig) -> Result<()> {
        let path = self.dir.join("train_config.json");

        // serde_json::to_string_pretty adds indentation for readability
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| {
                format!("Cannot write config to '{}'", path.display())
            })?;

        tracing::debug!("Saved training config to '{}'", path.display());
        Ok(())
    }

    /// Load the training configuration from JSON.
    ///
    /// Called by the Inferencer to know what model architecture
    /// was used during training so it can rebuild the same model.
    pub fn load_config(&self) -> Result<TrainConfig> {
        let path = self.dir.join("train_config.json");

        let json = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read config from '{}'. \
                     Make sure you have run 'train' before 'infer'.",
                    path.display()
                )
            })?;

        // Deserialise JSON back into TrainConfig struct
        Ok(serde_json::from_str(&json)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::model::LeNetConfig;
    use crate::test_support::{rng_guard, temp_artifact_dir};
    use burn::backend::ndarray::NdArrayDevice;
    use burn::backend::NdArray;

    // Backend aliases resolve their type defaults; a bare `NdArray::seed`
    // call in expression position leaves the element type uninferable.
    type TestBackend = NdArray;

    #[test]
    fn test_config_round_trip() {
        let dir  = temp_artifact_dir("config");
        let ckpt = CheckpointManager::new(dir.to_string_lossy().into_owned());

        let cfg = TrainConfig {
            epochs:  7,
            lr:      5e-4,
            padding: 1,
            ..TrainConfig::default()
        };
        ckpt.save_config(&cfg).unwrap();
        let loaded = ckpt.load_config().unwrap();

        assert_eq!(loaded.epochs,      7);
        assert_eq!(loaded.lr,          5e-4);
        assert_eq!(loaded.padding,     1);
        assert_eq!(loaded.num_classes, cfg.num_classes);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_model_round_trip_preserves_outputs() {
        let _rng = rng_guard();
        let dir  = temp_artifact_dir("weights");
        let ckpt = CheckpointManager::new(dir.to_string_lossy().into_owned());

        let device = NdArrayDevice::default();
        TestBackend::seed(99);
        let model: LeNet<TestBackend> = LeNetConfig::new().init(&device);
        ckpt.save_model(&model).unwrap();

        assert!(dir.join("model.mpk").exists());

        let restored = ckpt
            .load_model(LeNetConfig::new().init(&device), &device)
            .unwrap();

        let images = Tensor::<TestBackend, 4>::ones([2, 1, 28, 28], &device);
        let before = model.forward(images.clone()).into_data().to_vec::<f32>().unwrap();
        let after  = restored.forward(images).into_data().to_vec::<f32>().unwrap();

        // CompactRecorder stores half-precision tensors, so outputs
        // match within tolerance rather than bit-exactly
        for (b, a) in before.iter().zip(after.iter()) {
            assert!((b - a).abs() < 5e-2, "outputs diverged: {b} vs {a}");
        }

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_without_training_fails_with_hint() {
        let dir  = temp_artifact_dir("missing");
        let ckpt = CheckpointManager::new(dir.to_string_lossy().into_owned());

        let err = ckpt.load_config().unwrap_err();
        assert!(err.to_string().contains("train"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
