// ============================================================
// Test Support
// ============================================================
// Shared helpers for the unit tests:
//
//   rng_guard()          — serialises tests that touch the
//                          backend's global RNG (seeding, weight
//                          init), so parallel tests cannot
//                          interleave their draws
//   temp_artifact_dir()  — fresh per-test scratch directory
//   synthetic_items()    — deterministic stand-in for MNIST
//                          images, so no test needs the download

use burn::data::dataset::vision::MnistItem;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

static RNG_LOCK: Mutex<()> = Mutex::new(());

/// Hold the returned guard for the whole test whenever the test
/// seeds the backend or initialises model weights.
pub fn rng_guard() -> MutexGuard<'static, ()> {
    // A panicking holder poisons the lock; later tests still run
    RNG_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Scratch directory unique to this test and process.
/// Pre-cleared so reruns start from an empty slate.
pub fn temp_artifact_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join(format!("lenet-mnist-test-{}-{}", tag, std::process::id()));
    std::fs::remove_dir_all(&dir).ok();
    dir
}

/// Deterministic fake MNIST items: item i carries label i % 10
/// and one bright row at a height unique to that label, so the
/// classes are trivially separable.
pub fn synthetic_items(count: usize) -> Vec<MnistItem> {
    (0..count)
        .map(|i| {
            let label = (i % 10) as u8;
            let mut image = [[0.0f32; 28]; 28];
            for px in image[2 + label as usize * 2].iter_mut() {
                *px = 255.0;
            }
            MnistItem { image, label }
        })
        .collect()
}
