//! CLI for the linkscrub URL cleaner.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use linkscrub_core::config;

use commands::{run_clean, run_scan};

/// Top-level CLI for the linkscrub URL cleaner.
#[derive(Debug, Parser)]
#[command(name = "linkscrub")]
#[command(about = "Strip tracking parameters from URLs in text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Clean URLs in TEXT (or stdin) and print the result.
    Clean {
        /// Text to clean; read from stdin when omitted.
        text: Option<String>,

        /// Resolve known shortener links to their final destination
        /// (one blocking HTTP request per distinct link).
        #[arg(long)]
        resolve: bool,

        /// Only rewrite when the input is, in whole, a single URL.
        #[arg(long)]
        urls_only: bool,
    },

    /// List URLs found in TEXT (or stdin), one per line with byte offsets.
    Scan {
        /// Text to scan; read from stdin when omitted.
        text: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Clean {
                text,
                resolve,
                urls_only,
            } => run_clean(&cfg, text, resolve, urls_only),
            CliCommand::Scan { text } => run_scan(text),
        }
    }
}
