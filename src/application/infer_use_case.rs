// ============================================================
// Layer 2 — Infer Use Case
// ============================================================
// Classifies one image from the MNIST test split using the
// weights of a finished training run:
//   1. Rebuild the trained model from the artifact directory
//   2. Fetch the requested test image
//   3. Report predicted digit, confidence, and the true label

use anyhow::{anyhow, Result};
use burn::data::dataset::vision::MnistItem;
use burn::data::dataset::Dataset;

use crate::data::dataset;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::inferencer::{Inferencer, Prediction};

pub struct InferUseCase {
    inferencer: Inferencer,
}

impl InferUseCase {
    pub fn new(artifact_dir: String) -> Result<Self> {
        let ckpt       = CheckpointManager::new(artifact_dir);
        let inferencer = Inferencer::from_checkpoint(&ckpt)?;
        Ok(Self { inferencer })
    }

    /// Classify test image `index` and return the prediction
    /// together with the image's true label.
    pub fn classify_test_image(&self, index: usize) -> Result<(Prediction, u8)> {
        let test = dataset::load_test();
        let item: MnistItem = test.get(index).ok_or_else(|| {
            anyhow!(
                "Test index {} out of range (split has {} images)",
                index,
                test.len(),
            )
        })?;

        let prediction = self.inferencer.predict(&item);
        Ok((prediction, item.label))
    }
}
