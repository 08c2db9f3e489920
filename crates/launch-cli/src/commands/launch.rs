//! Launch command implementation

use colored::Colorize;
use launch_core::{Disambiguator, LaunchTarget, Launcher, Resolution, ResolutionOutcome};

use crate::context::LaunchContext;
use crate::error::Result;
use crate::interactive::{NoInput, PromptDisambiguator};
use crate::launcher::ConsoleLauncher;

/// Run the launch command
///
/// With context launching disabled the last launch for `mode` is repeated,
/// whatever the resource.
pub fn run_launch(
    context: &mut LaunchContext,
    no_input: bool,
    mode: &str,
    resource: Option<&str>,
) -> Result<()> {
    let selection = context.selection(resource)?;
    let launcher = ConsoleLauncher::new();
    let prompts = PromptDisambiguator::new();
    let disambiguator: &dyn Disambiguator = if no_input { &NoInput } else { &prompts };

    {
        let resolver = context.resolver(&selection, disambiguator, &launcher);
        if resolver.is_context_launch_enabled() {
            let resolution = resolver.resolve_and_launch(mode);
            report(&resolution);
        } else {
            tracing::debug!(mode, "Context launching disabled, using last launch");
            match resolver.last_launch(mode) {
                Some(configuration) => {
                    launcher.execute(LaunchTarget::Configuration(&configuration), mode)
                }
                None => println!(
                    "{} Nothing has been launched in {} mode yet",
                    "note:".yellow().bold(),
                    mode
                ),
            }
        }
    }

    context.record_launches(mode, launcher.take_launched())?;

    match prompts.take_failure() {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

fn report(resolution: &Resolution) {
    for failure in &resolution.failures {
        eprintln!("{} {}", "warning:".yellow().bold(), failure);
    }
    tracing::debug!(tiers = ?resolution.tiers(), "Resolution finished");

    if resolution.outcome.terminal() == &ResolutionOutcome::UserCancelled {
        println!("{}", "Launch cancelled".dimmed());
    }
}
