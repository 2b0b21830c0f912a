//! CLI for the tikfetch link resolver.

mod commands;
mod term;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tikfetch_core::config;

use commands::{run_fetch, run_prompt};

/// Top-level CLI for the tikfetch link resolver.
#[derive(Debug, Parser)]
#[command(name = "tikfetch")]
#[command(about = "tikfetch: resolve TikTok links into direct download targets", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve one URL and exit (non-zero on failure).
    Fetch {
        /// Candidate TikTok URL.
        url: String,

        /// Extraction endpoint, overriding the config file.
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Interactive prompt: paste URLs and resolve them one at a time.
    Prompt {
        /// Extraction endpoint, overriding the config file.
        #[arg(long)]
        endpoint: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch { url, endpoint } => run_fetch(&cfg, &url, endpoint),
            CliCommand::Prompt { endpoint } => run_prompt(&cfg, endpoint),
        }
    }
}

#[cfg(test)]
mod tests;
