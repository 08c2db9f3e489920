//! Shortcuts command implementation

use colored::Colorize;
use launch_core::Catalog;

use crate::context::LaunchContext;
use crate::error::Result;

/// Run the shortcuts command
pub fn run_shortcuts(context: &LaunchContext, resource: Option<&str>) -> Result<()> {
    let catalog = context.workspace().catalog();
    let (heading, shortcuts) = match context.selection(resource)?.into_resource() {
        Some(resource) => (
            format!("Shortcuts for {}", resource.name()),
            catalog.shortcuts_for(&resource)?,
        ),
        None => (
            "Shortcuts for an empty selection".to_string(),
            catalog.empty_selection_shortcuts()?,
        ),
    };

    println!("{}", heading.bold());
    if shortcuts.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for shortcut in &shortcuts {
        match &shortcut.activity {
            Some(activity) => println!(
                "  {:<16} {} ({})",
                shortcut.id.green(),
                shortcut.label,
                activity.dimmed()
            ),
            None => println!("  {:<16} {}", shortcut.id.green(), shortcut.label),
        }
    }
    Ok(())
}
