//! Preference command implementations

use colored::Colorize;
use launch_core::PreferenceKey;

use crate::context::LaunchContext;
use crate::error::Result;

/// Run `prefs show`
pub fn run_prefs_show(context: &LaunchContext) -> Result<()> {
    let values = context.preferences().values();

    println!("{}", "Preferences".bold());
    println!();
    for key in PreferenceKey::ALL {
        let value = match key {
            PreferenceKey::AutoEscalateToParent => values.auto_escalate_to_parent.to_string(),
            PreferenceKey::ContextLaunchingEnabled => values.context_launching_enabled.to_string(),
            PreferenceKey::HistorySize => values.history_size.to_string(),
        };
        println!("  {:<28} {}", key.as_str(), value.cyan());
    }
    if let Some(path) = context.preferences().path() {
        println!();
        println!("{}: {}", "Workspace file".dimmed(), path.display());
    }
    Ok(())
}

/// Run `prefs set`
pub fn run_prefs_set(context: &LaunchContext, key: &str, value: &str) -> Result<()> {
    let key: PreferenceKey = key.parse()?;
    context.preferences().set_from_str(key, value)?;
    println!("{} {} = {}", "Set".green().bold(), key, value);
    Ok(())
}
