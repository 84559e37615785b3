// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output helpers shared by the CLI commands.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::item::ResultItem;

/// Print any serializable payload as JSON, pretty unless `compact`.
pub fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Render result items for a terminal.
pub fn print_items_text(items: &[ResultItem]) {
    for item in items {
        if item.score > 0 {
            println!(
                "  {} {}",
                item.title.green().bold(),
                format!("({})", item.score).yellow()
            );
        } else {
            println!("  {}", item.title.green());
        }
        println!("    {}", item.subtitle.cyan());
    }
    if items.is_empty() {
        println!("{} no results", "✗".red());
    }
}
