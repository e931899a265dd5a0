// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `inspect` — loads a corpus and reports what a training
//                  run would feed the model
//   2. `labels`  — prints the label vocabulary with indices
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, LabelsArgs};

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "news-topic-data",
    version = "0.1.0",
    about = "Load, tokenise, and batch a labelled news corpus for topic-classification training."
)]
pub struct Cli {
    /// The subcommand to run (inspect or labels)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Inspect(args) => Self::run_inspect(args),
            Commands::Labels(args)  => Self::run_labels(args),
        }
    }

    /// Handles the `inspect` subcommand.
    /// Converts CLI args into an InspectConfig and hands off to Layer 2.
    fn run_inspect(args: InspectArgs) -> Result<()> {
        use crate::application::inspect_use_case::InspectUseCase;

        tracing::info!("Inspecting corpus '{}'", args.source);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = InspectUseCase::new(args.into());
        let report   = use_case.execute()?;

        println!("{report}");
        Ok(())
    }

    /// Handles the `labels` subcommand.
    /// Loads the vocabulary and prints the index ↔ name table.
    fn run_labels(args: LabelsArgs) -> Result<()> {
        use crate::application::labels_use_case::LabelsUseCase;

        let use_case = LabelsUseCase::new(args.data_root, args.label_path);
        let listing  = use_case.execute()?;

        println!("{listing}");
        Ok(())
    }
}
