//! CLI for the expediente batch organizer.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use expediente_core::config;
use std::path::PathBuf;

use commands::{run_batch, run_inspect, run_resolve};

/// Top-level CLI for the expediente organizer.
#[derive(Debug, Parser)]
#[command(name = "expediente")]
#[command(
    about = "expediente: create per-student folders from a spreadsheet and download their PDF documents",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run the batch: one folder per valid row, downloading every URL column.
    Run {
        /// Directory where the per-student folders are created.
        target_dir: PathBuf,
        /// Spreadsheet (.xlsx/.xls/.ods) with the student records.
        sheet: PathBuf,
    },

    /// Validate a spreadsheet and report what a run would do, without
    /// creating folders or downloading anything.
    Inspect {
        /// Spreadsheet to validate.
        sheet: PathBuf,
    },

    /// Print the direct-download rewrite of a share URL.
    Resolve {
        /// URL from a spreadsheet cell.
        url: String,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Run { target_dir, sheet } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_batch(&cfg, target_dir, sheet).await?;
            }
            CliCommand::Inspect { sheet } => run_inspect(&sheet)?,
            CliCommand::Resolve { url } => run_resolve(&url)?,
            CliCommand::Completions { shell } => {
                clap_complete::generate(
                    shell,
                    &mut Cli::command(),
                    "expediente",
                    &mut std::io::stdout(),
                );
            }
        }

        Ok(())
    }
}
