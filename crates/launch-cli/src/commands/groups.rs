//! Groups command implementation

use colored::Colorize;
use launch_core::GroupRegistry;

use crate::context::LaunchContext;
use crate::error::Result;

/// Run the groups command
pub fn run_groups(context: &LaunchContext) -> Result<()> {
    let groups = context.workspace().groups();

    println!("{}", "Launch Groups".bold());
    println!();
    for group in groups.iter() {
        let canonical = groups
            .canonical(&group.mode)
            .is_some_and(|c| c.id == group.id);
        let marker = if canonical {
            "canonical".green().to_string()
        } else {
            group
                .category
                .as_deref()
                .map(|c| format!("category: {}", c))
                .unwrap_or_default()
                .dimmed()
                .to_string()
        };
        println!(
            "  {:<28} {:<16} {:<8} {}",
            group.id.cyan(),
            group.label,
            group.mode,
            marker
        );
    }
    Ok(())
}
