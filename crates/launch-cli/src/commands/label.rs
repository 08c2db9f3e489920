//! Label command implementation

use colored::Colorize;

use crate::context::LaunchContext;
use crate::error::Result;
use crate::interactive::NoInput;
use crate::launcher::ConsoleLauncher;

/// Run the label command
pub fn run_label(context: &LaunchContext, mode: &str, resource: Option<&str>) -> Result<()> {
    let selection = context.selection(resource)?;
    let launcher = ConsoleLauncher::new();
    let label = context
        .resolver(&selection, &NoInput, &launcher)
        .context_label(mode);

    if label.is_empty() {
        println!("{}", "(nothing to launch)".dimmed());
    } else {
        println!("{}", label);
    }
    Ok(())
}
