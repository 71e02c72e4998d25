// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `prepare` — JSON sources → tagged training corpus
//   2. `split`   — corpus → train.json + validation.json
//   3. `export`  — tokenizer → mobile vocab + model config
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, ExportArgs, PrepareArgs, SplitArgs};

use crate::infra::observer::TracingObserver;

#[derive(Parser, Debug)]
#[command(
    name = "islamic-corpus",
    version,
    about = "Prepare tagged Quran, Hadith and Tafsir text for language model fine-tuning."
)]
pub struct Cli {
    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Dispatch to the matching use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Prepare(args) => run_prepare(args),
            Commands::Split(args)   => run_split(args),
            Commands::Export(args)  => run_export(args),
        }
    }
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    use crate::application::prepare_use_case::{PrepareOutcome, PrepareUseCase};

    let use_case = PrepareUseCase::new(args.into());
    match use_case.execute(&TracingObserver)? {
        PrepareOutcome::MissingInputs(missing) => {
            // Not an error exit: report and stop without writing anything
            println!("Missing data files:");
            for path in missing {
                println!("  - {}", path.display());
            }
        }
        PrepareOutcome::Written(report) => {
            println!("\nData Statistics:");
            println!("Total texts: {}", report.stats.total);
            println!("Average length: {:.1} characters", report.stats.average_chars);
            println!("Texts with <ayah>: {}", report.stats.with_ayah);
            println!("Texts with <hadith>: {}", report.stats.with_hadith);
            println!("Texts with <question>: {}", report.stats.with_question);
            println!("\nTraining data saved to: {}", report.json.display());
        }
    }
    Ok(())
}

fn run_split(args: SplitArgs) -> Result<()> {
    use crate::application::split_use_case::SplitUseCase;

    let report = SplitUseCase::new(args.into()).execute()?;
    println!(
        "Split {} texts: {} train ({}), {} validation ({})",
        report.stats.total,
        report.train,
        report.train_path.display(),
        report.validation,
        report.validation_path.display()
    );
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
    use crate::application::export_use_case::ExportUseCase;

    let report = ExportUseCase::new(args.into()).execute()?;
    println!("Files created:");
    println!("  - {} (Tokenizer, {} tag tokens added)", report.tokenizer.display(), report.tags_added);
    println!("  - {} (Vocabulary, {} tokens)", report.vocab.display(), report.vocab_size);
    println!("  - {} (Configuration)", report.model_config.display());
    Ok(())
}
