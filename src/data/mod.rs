// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the MNIST corpus on disk and the tensor
// batches the model consumes.
//
// The pipeline flows in this order:
//
//   MNIST corpus (downloaded/cached by Burn)
//       │
//       ▼
//   MnistDataset      → 28×28 images + labels, train/test splits
//       │
//       ▼
//   MnistBatcher      → stacks items into [N, 1, 28, 28] batches
//       │
//       ▼
//   DataLoader        → feeds shuffled batches to the training loop
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Loads the MNIST train/test splits through Burn's dataset provider
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
