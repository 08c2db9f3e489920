//! Context Launch CLI
//!
//! Resolves and launches the right configuration for a workspace resource.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;
mod launcher;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands, PrefsAction};
use context::LaunchContext;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let Some(command) = cli.command else {
        println!("{} Context Launch CLI", "ctxlaunch".green().bold());
        println!();
        println!("Run {} for available commands.", "ctxlaunch --help".cyan());
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let root = context::resolve_root(cli.workspace.as_deref(), &cwd)?;
    let mut context = LaunchContext::open(&root, cli.config_dir.as_deref())?;
    execute_command(&mut context, command, cli.no_input)
}

fn init_tracing(verbose: bool) -> Result<()> {
    let result = if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };
    result.map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))?;
    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
    Ok(())
}

fn execute_command(context: &mut LaunchContext, command: Commands, no_input: bool) -> Result<()> {
    match command {
        Commands::Launch { mode, resource } => {
            commands::run_launch(context, no_input, &mode, resource.as_deref())
        }
        Commands::Label { mode, resource } => commands::run_label(context, &mode, resource.as_deref()),
        Commands::Shortcuts { resource } => commands::run_shortcuts(context, resource.as_deref()),
        Commands::History { mode, json, clear } => commands::run_history(context, &mode, json, clear),
        Commands::Groups => commands::run_groups(context),
        Commands::Prefs { action } => match action {
            PrefsAction::Show => commands::run_prefs_show(context),
            PrefsAction::Set { key, value } => commands::run_prefs_set(context, &key, &value),
        },
    }
}
