// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// folderkey - keyword-to-folder navigation for launcher hosts
///
/// Resolves a typed query into a directory listing, a saved keyword
/// lookup, or a new keyword registration.
#[derive(Parser, Debug)]
#[command(name = "folderkey")]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Quickstart:\n  folderkey query \"docs : /home/me/Documents\"\n  folderkey query docs\n  folderkey keywords list"
)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Compact JSON output (no pretty formatting)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Settings file (defaults to <config dir>/folderkey/settings.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a query the way the launcher host would
    #[command(visible_aliases = ["q"])]
    Query {
        /// Raw query string ("", "keyword", "path", or "keyword : path")
        query: String,
    },

    /// Inspect or edit the registered keywords
    Keywords {
        #[command(subcommand)]
        command: KeywordCommands,
    },

    /// Open a path with the OS default handler
    Open {
        path: PathBuf,
    },

    /// Serve host JSON-RPC requests (one-shot argument or stdin lines)
    Rpc {
        /// A single JSON-RPC request; omit to read requests from stdin
        request: Option<String>,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum KeywordCommands {
    /// List registered keywords
    #[command(visible_aliases = ["ls"])]
    List,

    /// Remove a registered keyword
    #[command(visible_aliases = ["rm"])]
    Remove {
        keyword: String,
    },
}
