// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs and traits that define the core concepts
// of a training run.
//
// Rules for this layer:
//   - NO Burn framework types allowed here
//   - NO file I/O
//   - Only plain Rust structs, enums, and traits
//
// Think of this layer as the "dictionary" of the system:
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One row of the metrics table (training or validation)
pub mod metrics;

// Aggregation of evaluation passes over the test split
pub mod evaluation;

// Core abstractions (traits) that other layers implement
pub mod traits;
