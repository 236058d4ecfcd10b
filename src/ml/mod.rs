// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one
// and the data layer (for the Dataset/Batcher plumbing).
//
// Why isolate Burn code here?
//   - If Burn's API changes, we only update this layer
//   - The domain layer stays testable without tensors
//   - The model architecture is clearly separated from
//     data loading and application logic
//
// What's in this layer:
//
//   model.rs      — The LeNet-5 style CNN architecture
//                   Three tanh-activated convolution stages with
//                   2×2 average pooling between the first two,
//                   then two fully connected layers and a
//                   log-softmax output head
//
//   trainer.rs    — The training loop
//                   Baseline evaluation, then per epoch: forward
//                   pass, NLL loss, backward pass, Adam step,
//                   full test-split evaluation. Saves the final
//                   weights once at the end
//
//   inferencer.rs — The inference engine
//                   Loads the saved config + weights, runs the
//                   model on one image, reports digit and
//                   confidence
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)
//            LeCun et al. (1998) Gradient-Based Learning
//            Applied to Document Recognition

/// LeNet-5 style CNN architecture
pub mod model;

/// Full training loop with baseline evaluation and final save
pub mod trainer;

/// Inference engine — loads checkpoint and classifies images
pub mod inferencer;
