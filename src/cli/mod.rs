// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `train` — trains the digit classifier on MNIST
//   2. `infer` — loads the weights and classifies a test image
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InferArgs, TrainArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "lenet-mnist",
    version = "0.1.0",
    about = "Train a LeNet-5 digit classifier on MNIST, then classify test images."
)]
pub struct Cli {
    /// The subcommand to run (train or infer)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    ///
    /// The match moves the args out of `self.command`, so the handlers
    /// are associated functions rather than methods.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args) => Self::run_train(args),
            Commands::Infer(args) => Self::run_infer(args),
        }
    }

    /// Handles the `train` subcommand.
    /// Converts CLI args into a TrainConfig and hands off to Layer 2.
    fn run_train(args: TrainArgs) -> Result<()> {
        use crate::application::train_use_case::TrainUseCase;

        tracing::info!("Starting training run into: {}", args.artifact_dir);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = TrainUseCase::new(args.into());
        use_case.execute()?;

        println!("Training complete. Weights and metrics saved.");
        Ok(())
    }

    /// Handles the `infer` subcommand.
    /// Loads the model from the artifact directory and prints the verdict.
    fn run_infer(args: InferArgs) -> Result<()> {
        use crate::application::infer_use_case::InferUseCase;

        let use_case = InferUseCase::new(args.artifact_dir.clone())?;
        let (prediction, label) = use_case.classify_test_image(args.index)?;

        println!("\nTest image #{}", args.index);
        println!("Predicted digit: {} ({:.1}% confident)", prediction.digit, prediction.confidence * 100.0);
        println!("True label:      {}", label);
        Ok(())
    }
}
