// ============================================================
// Layer 4 — MNIST Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<MnistItem>
// into model-ready tensors.
//
// How batching works here:
//   Input:  Vec of N MnistItems, each a 28×28 image + label
//   Output: MnistBatch with images [N, 1, 28, 28], targets [N]
//
//   We flatten all pixels into one long Vec, then reshape:
//   [i1_p1, ..., i1_p784, i2_p1, ..., iN_p784] → [N, 1, 28, 28]
//
// Pixels arrive as 0..=255 floats and leave scaled to [0, 1].
//
// Reference: Burn Book §4 (Batcher)
//            Rust Book §8 (Vectors)

use burn::{
    data::{dataloader::batcher::Batcher, dataset::vision::MnistItem},
    prelude::*,
};

/// Height and width of every MNIST image.
pub const IMAGE_SIZE: usize = 28;

// ─── MnistBatch ───────────────────────────────────────────────────────────────
/// A batch of digit images ready for the model forward pass.
/// All tensors have batch_size as their first dimension.
#[derive(Debug, Clone)]
pub struct MnistBatch<B: Backend> {
    /// Pixel values in [0, 1] — shape: [batch_size, 1, 28, 28]
    pub images: Tensor<B, 4>,

    /// Class labels 0..=9 — shape: [batch_size]
    pub targets: Tensor<B, 1, Int>,
}

// ─── MnistBatcher ─────────────────────────────────────────────────────────────
/// The batcher struct — holds the target device so tensors
/// are created on the correct backend device.
#[derive(Clone, Debug)]
pub struct MnistBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> MnistBatcher<B> {
    /// Create a new batcher for the given device
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

// ─── Burn Batcher Trait Implementation ────────────────────────────────────────
// This is what makes MnistBatcher work with Burn's DataLoader.
// The DataLoader calls .batch(items) with each mini-batch of items.
impl<B: Backend> Batcher<MnistItem, MnistBatch<B>> for MnistBatcher<B> {
    /// Convert a Vec of MnistItems into a single MnistBatch.
    ///
    /// Steps:
    ///   1. Flatten all pixel rows into one Vec<f32>
    ///   2. Create a 1D tensor from the flat Vec
    ///   3. Reshape to [batch_size, 1, 28, 28]
    ///   4. Scale from 0..=255 down to [0, 1]
    ///   5. Create the 1D Int tensor of labels
    fn batch(&self, items: Vec<MnistItem>) -> MnistBatch<B> {
        let batch_size = items.len();

        // ── Flatten pixels ────────────────────────────────────────────────────
        // Row-major over each 28×28 image, images in item order
        let pixels: Vec<f32> = items
            .iter()
            .flat_map(|item| item.image.iter().flatten().copied())
            .collect();

        // ── Collect labels ────────────────────────────────────────────────────
        // One scalar class index per item (Burn uses i32 input for Int tensors)
        let labels: Vec<i32> = items
            .iter()
            .map(|item| item.label as i32)
            .collect();

        // ── Create tensors ────────────────────────────────────────────────────
        let images = Tensor::<B, 1>::from_floats(pixels.as_slice(), &self.device)
            .reshape([batch_size, 1, IMAGE_SIZE, IMAGE_SIZE])
            / 255.0;

        let targets = Tensor::<B, 1, Int>::from_ints(labels.as_slice(), &self.device);

        MnistBatch { images, targets }
    }
}
