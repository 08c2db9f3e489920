//! History command implementation

use colored::Colorize;
use launch_core::GroupRegistry;

use crate::context::LaunchContext;
use crate::error::{CliError, Result};

/// Run the history command
pub fn run_history(context: &mut LaunchContext, mode: &str, json: bool, clear: bool) -> Result<()> {
    let group = context
        .workspace()
        .groups()
        .canonical(mode)
        .ok_or_else(|| CliError::user(format!("No launch group for mode '{}'", mode)))?;

    if clear {
        context.clear_history(mode)?;
        println!("{} history for {}", "Cleared".green().bold(), group.label);
        return Ok(());
    }

    let entries = context.history().entries(&group.id);
    if json {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    println!("{} ({})", group.label.bold(), mode);
    if entries.is_empty() {
        println!("  {}", "No launches yet".dimmed());
    }
    for (i, entry) in entries.iter().enumerate() {
        println!(
            "  {:>2}. {} {}  {}",
            i + 1,
            entry.configuration.name,
            format!("[{}]", entry.configuration.type_id).dimmed(),
            entry
                .launched_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .dimmed()
        );
    }
    Ok(())
}
