//! CLI for inspecting and rewriting share/directory/file URLs.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use fileurl_core::config::{self, FileUrlConfig};
use fileurl_core::FileUrlParts;

use commands::{run_build, run_normalize, run_parse, run_set_snapshot, run_strip_sas, BuildArgs};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fileurl")]
#[command(about = "Parse and rebuild share/directory/file URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the parts of a URL (share, path, snapshot, SAS, other parameters).
    Parse {
        /// URL to split.
        url: String,
        /// Print JSON regardless of the configured output format.
        #[arg(long)]
        json: bool,
    },

    /// Assemble a URL from parts.
    Build(BuildArgs),

    /// Parse a URL and print it rebuilt (stable query order, canonical snapshot key).
    Normalize {
        /// URL to normalize.
        url: String,
    },

    /// Print a URL with its SAS parameters removed.
    StripSas {
        /// URL to strip.
        url: String,
    },

    /// Point a URL at a share snapshot; an empty snapshot clears it.
    SetSnapshot {
        /// URL of a share, directory or file.
        url: String,
        /// Snapshot timestamp, e.g. 2020-01-01T00:00:00.0000000Z.
        snapshot: String,
    },
}

impl CliCommand {
    /// Parse arguments, run the command and return what it prints.
    pub fn run_from_args() -> Result<String> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        cli.command.run(&cfg)
    }

    pub fn run(&self, cfg: &FileUrlConfig) -> Result<String> {
        match self {
            CliCommand::Parse { url, json } => {
                tracing::debug!(url = %loggable_url(url, cfg), "parse");
                run_parse(url, *json, cfg)
            }
            CliCommand::Build(args) => run_build(args),
            CliCommand::Normalize { url } => {
                tracing::debug!(url = %loggable_url(url, cfg), "normalize");
                run_normalize(url)
            }
            CliCommand::StripSas { url } => run_strip_sas(url),
            CliCommand::SetSnapshot { url, snapshot } => {
                tracing::debug!(url = %loggable_url(url, cfg), snapshot = %snapshot, "set-snapshot");
                run_set_snapshot(url, snapshot)
            }
        }
    }
}

/// The URL as it may appear in the log. Unparseable input is logged as-is.
fn loggable_url(raw: &str, cfg: &FileUrlConfig) -> String {
    if !cfg.strip_sas_in_logs {
        return raw.to_string();
    }
    match raw.parse::<FileUrlParts>() {
        Ok(parts) => parts.without_sas().to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests;
