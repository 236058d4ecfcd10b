// ============================================================
// Layer 5 — Inferencer
// ============================================================
use anyhow::Result;
use burn::data::dataloader::batcher::Batcher;
use burn::data::dataset::vision::MnistItem;
use burn::prelude::*;

use crate::data::batcher::MnistBatcher;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::{LeNet, LeNetConfig};

type InferBackend = burn::backend::NdArray;

/// The classifier's verdict for one image.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    /// Predicted class, 0..num_classes
    pub digit: usize,

    /// Probability the model assigns to that class
    pub confidence: f32,
}

pub struct Inferencer {
    model:  LeNet<InferBackend>,
    device: burn::backend::ndarray::NdArrayDevice,
}

impl Inferencer {
    /// Rebuild the trained model from a finished run's artifacts.
    ///
    /// Steps:
    ///   1. Load train_config.json to learn the architecture
    ///   2. Init a model with that exact architecture
    ///   3. Load the saved weights into it
    pub fn from_checkpoint(ckpt_manager: &CheckpointManager) -> Result<Self> {
        let device = burn::backend::ndarray::NdArrayDevice::default();
        let cfg    = ckpt_manager.load_config()?;

        let model_cfg = LeNetConfig::new()
            .with_num_classes(cfg.num_classes)
            .with_padding(cfg.padding);
        let model: LeNet<InferBackend> = model_cfg.init(&device);
        let model = ckpt_manager.load_model(model, &device)?;

        tracing::info!("Model loaded from checkpoint");
        Ok(Self { model, device })
    }

    /// Classify a single MNIST image.
    pub fn predict(&self, item: &MnistItem) -> Prediction {
        // Reuse the training batcher for a batch of one, so the image
        // gets exactly the same [0,1] scaling as during training
        let batcher = MnistBatcher::<InferBackend>::new(self.device.clone());
        let batch   = batcher.batch(vec![item.clone()]);

        let log_probs = self.model.forward(batch.images);

        // Last layer is log-softmax, so exp() recovers probabilities
        let probs = log_probs.clone().exp();

        let digit = log_probs
            .argmax(1)
            .flatten::<1>(0, 1)
            .into_scalar()
            .elem::<i64>() as usize;
        let confidence = probs.max().into_scalar().elem::<f32>();

        tracing::debug!("Predicted digit {} conf={:.4}", digit, confidence);
        Prediction { digit, confidence }
    }
}
