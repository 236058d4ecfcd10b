// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates all the other layers to accomplish
// a specific goal (training or classifying an image).
//
// Rules for this layer:
//   - No ML math or model code here
//   - No tensor or file plumbing (that's Layers 4-6)
//   - Only workflow coordination and end-of-run reporting
//
// Think of this layer as the "director" — it tells other
// layers what to do but doesn't do the work itself.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The training workflow
pub mod train_use_case;

// The single-image classification workflow
pub mod infer_use_case;
