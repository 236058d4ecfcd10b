use burn::data::dataset::vision::MnistDataset;
use burn::data::dataset::Dataset;

/// The 60k-image MNIST training split.
/// Burn downloads the corpus into its cache directory on first
/// use and reads the cached copy afterwards.
pub fn load_train() -> MnistDataset {
    let dataset = MnistDataset::train();
    tracing::info!("Training split ready: {} images", dataset.len());
    dataset
}

/// The 10k-image MNIST test split, iterated by every evaluation pass.
pub fn load_test() -> MnistDataset {
    let dataset = MnistDataset::test();
    tracing::info!("Test split ready: {} images", dataset.len());
    dataset
}
