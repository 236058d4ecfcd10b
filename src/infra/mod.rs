// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles all cross-cutting concerns that don't belong in
// any specific business layer:
//
//   checkpoint.rs — Saving and loading model weights
//                   Uses Burn's CompactRecorder to serialise
//                   model parameters to disk. Also saves/loads
//                   TrainConfig as JSON so inference can
//                   rebuild the same model architecture.
//
//   metrics.rs    — In-memory metrics table
//                   Collects per-batch training loss and
//                   per-evaluation validation loss/accuracy,
//                   then writes the whole table to one CSV
//                   file after training.
//
//   plot.rs       — Terminal charts
//                   Renders the metrics table as braille
//                   line charts (loss on a log10 axis,
//                   accuracy linear) for a quick read of the
//                   run without leaving the shell.
//
// Why is this a separate layer?
//   These concerns are used by multiple other layers but
//   don't belong to any one of them. Keeping them here:
//   - Prevents duplication across layers
//   - Makes it easy to swap implementations
//     (e.g. swap file checkpoints for S3 cloud storage)
//   - Keeps other layers focused on their core logic
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)
//            Burn Book §5 (Checkpointing)

/// Model checkpoint saving and loading
pub mod checkpoint;

/// In-memory metrics table and CSV writer
pub mod metrics;

/// Terminal loss and accuracy charts
pub mod plot;
