// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `infer`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::train_use_case::TrainConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the digit classifier on MNIST
    Train(TrainArgs),

    /// Classify a test-split image with a trained model
    Infer(InferArgs),
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Directory for weights, config, and the metrics CSV
    #[arg(long, default_value = "artifacts")]
    pub artifact_dir: String,

    /// Number of full passes through the training data
    #[arg(long, default_value_t = 3)]
    pub epochs: usize,

    /// Number of images processed together in one forward pass
    #[arg(long, default_value_t = 64)]
    pub batch_size: usize,

    /// Batch size for evaluation passes — larger than training
    /// since no gradients are kept
    #[arg(long, default_value_t = 512)]
    pub eval_batch_size: usize,

    /// How fast the model learns — too high causes instability,
    /// too low causes slow convergence
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,

    /// Seed for weight init and batch shuffling.
    /// The same seed reproduces the same run
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of output classes (10 for the MNIST digits)
    #[arg(long, default_value_t = 10)]
    pub num_classes: usize,

    /// Zero padding around the 28×28 input, giving the first
    /// convolution the 32×32 canvas of the original LeNet-5
    #[arg(long, default_value_t = 2)]
    pub padding: usize,

    /// Worker threads for the training data loader
    #[arg(long, default_value_t = 1)]
    pub num_workers: usize,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            artifact_dir:    a.artifact_dir,
            epochs:          a.epochs,
            batch_size:      a.batch_size,
            eval_batch_size: a.eval_batch_size,
            lr:              a.lr,
            seed:            a.seed,
            num_classes:     a.num_classes,
            padding:         a.padding,
            num_workers:     a.num_workers,
        }
    }
}

/// All arguments for the `infer` command
#[derive(Args, Debug)]
pub struct InferArgs {
    /// Index of the image in the MNIST test split to classify
    #[arg(long, default_value_t = 0)]
    pub index: usize,

    /// Directory where artifacts were saved during training
    #[arg(long, default_value = "artifacts")]
    pub artifact_dir: String,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Minimal parser wrapper so the arg structs can be exercised
    /// without the real top-level Cli.
    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_train_defaults_match_config_defaults() {
        let cli = TestCli::parse_from(["lenet-mnist", "train"]);
        let Commands::Train(args) = cli.command else {
            panic!("expected the train subcommand");
        };

        let cfg: TrainConfig = args.into();
        let defaults = TrainConfig::default();

        assert_eq!(cfg.artifact_dir,    defaults.artifact_dir);
        assert_eq!(cfg.epochs,          defaults.epochs);
        assert_eq!(cfg.batch_size,      defaults.batch_size);
        assert_eq!(cfg.eval_batch_size, defaults.eval_batch_size);
        assert_eq!(cfg.lr,              defaults.lr);
        assert_eq!(cfg.seed,            defaults.seed);
        assert_eq!(cfg.num_classes,     defaults.num_classes);
        assert_eq!(cfg.padding,         defaults.padding);
        assert_eq!(cfg.num_workers,     defaults.num_workers);
    }

    #[test]
    fn test_train_flags_override_defaults() {
        let cli = TestCli::parse_from([
            "lenet-mnist", "train", "--epochs", "1", "--batch-size", "16",
        ]);
        let Commands::Train(args) = cli.command else {
            panic!("expected the train subcommand");
        };

        assert_eq!(args.epochs, 1);
        assert_eq!(args.batch_size, 16);
        assert_eq!(args.num_classes, 10);
    }

    #[test]
    fn test_infer_defaults() {
        let cli = TestCli::parse_from(["lenet-mnist", "infer"]);
        let Commands::Infer(args) = cli.command else {
            panic!("expected the infer subcommand");
        };

        assert_eq!(args.index, 0);
        assert_eq!(args.artifact_dir, "artifacts");
    }
}
