//! CLI for the mvntop JAR mirrorer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mvntop_core::config;
use std::path::PathBuf;

use commands::{run_download, run_list, run_pipeline};

/// Top-level CLI for the mvntop JAR mirrorer.
#[derive(Debug, Parser)]
#[command(name = "mvntop")]
#[command(about = "mvntop: mirror the most-downloaded Maven Central JARs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the top catalog, download every JAR, and write the URL manifest.
    Run {
        /// Number of JAR URLs to collect (one extra may come back). Defaults to the config value.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
        /// Directory to save JARs into. Defaults to the config value.
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// File to write the URL manifest to. Defaults to the config value.
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,
    },

    /// Fetch the top catalog and print the JAR URLs without downloading.
    List {
        /// Number of JAR URLs to collect (one extra may come back). Defaults to the config value.
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Download every URL listed in a manifest file.
    Download {
        /// Path to a newline-delimited URL list.
        manifest: PathBuf,

        /// Directory to save files into.
        #[arg(long, default_value = "jars", value_name = "DIR")]
        output_dir: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                limit,
                output_dir,
                manifest,
            } => run_pipeline(&cfg, limit, output_dir, manifest)?,
            CliCommand::List { limit } => run_list(&cfg, limit)?,
            CliCommand::Download {
                manifest,
                output_dir,
            } => run_download(&cfg, &manifest, &output_dir)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
