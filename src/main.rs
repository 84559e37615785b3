// SPDX-License-Identifier: MIT OR Apache-2.0

//! folderkey - keyword-to-folder navigation for launcher hosts

mod cli;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, KeywordCommands, OutputFormat};
use folderkey::fsio::{self, OsFileSystem};
use folderkey::output::{print_items_text, print_json};
use folderkey::settings::{default_settings_path, SettingsStore};
use folderkey::{query, rpc};

#[derive(Debug, Serialize)]
struct KeywordRow<'a> {
    keyword: &'a str,
    path: &'a str,
}

fn main() -> Result<()> {
    // Logs on stderr so rpc stdout stays protocol-clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format.unwrap_or_default();
    let settings_path = cli.settings.unwrap_or_else(default_settings_path);

    match cli.command {
        Commands::Query { query: raw } => {
            let mut store = SettingsStore::load(&settings_path);
            let items = query::resolve(&raw, &mut store, &OsFileSystem);
            match format {
                OutputFormat::Json => print_json(&items, cli.compact)?,
                OutputFormat::Text => print_items_text(&items),
            }
        }
        Commands::Keywords { command } => match command {
            KeywordCommands::List => {
                let store = SettingsStore::load(&settings_path);
                match format {
                    OutputFormat::Json => {
                        let rows: Vec<KeywordRow<'_>> = store
                            .keywords()
                            .iter()
                            .map(|(keyword, path)| KeywordRow { keyword, path })
                            .collect();
                        print_json(&rows, cli.compact)?;
                    }
                    OutputFormat::Text => {
                        if store.keywords().is_empty() {
                            println!("no keywords registered");
                        }
                        for (keyword, path) in store.keywords().iter() {
                            println!("  {} {} {}", keyword.green(), "→".yellow(), path.cyan());
                        }
                    }
                }
            }
            KeywordCommands::Remove { keyword } => {
                let mut store = SettingsStore::load(&settings_path);
                match store
                    .unregister(&keyword)
                    .with_context(|| format!("failed to save {}", settings_path.display()))?
                {
                    Some(path) => println!("removed {} ({})", keyword.to_lowercase(), path),
                    None => bail!("keyword not registered: {keyword}"),
                }
            }
        },
        Commands::Open { path } => {
            fsio::open_path(&path).with_context(|| format!("cannot open {}", path.display()))?;
        }
        Commands::Rpc { request } => {
            rpc::run(request.as_deref(), &settings_path)?;
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        }
    }

    Ok(())
}
