//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use launch_model::RUN_MODE;
use std::path::PathBuf;

/// Context Launch - run the right configuration for what you are looking at
#[derive(Parser, Debug)]
#[command(name = "ctxlaunch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Workspace root (defaults to the nearest directory with .launch/workspace.toml)
    #[arg(short, long, global = true, env = "CTXLAUNCH_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Directory holding the global preferences.toml
    #[arg(long, global = true, env = "CTXLAUNCH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Never prompt; every choice is cancelled
    #[arg(long, global = true)]
    pub no_input: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Launch whatever applies to a resource
    ///
    /// Without a resource, relaunches the last launch for the mode.
    ///
    /// Examples:
    ///   ctxlaunch launch -r app/src/main.rs        # Run the file's configuration
    ///   ctxlaunch launch -m debug -r app/tests/it.rs
    ///   ctxlaunch launch -m debug                  # Relaunch the last debug launch
    Launch {
        /// Launch mode (run, debug, profile, ...)
        #[arg(short, long, default_value = RUN_MODE)]
        mode: String,

        /// Resource id from the workspace manifest
        #[arg(short, long)]
        resource: Option<String>,
    },

    /// Show what `launch` would do, without doing it
    Label {
        /// Launch mode
        #[arg(short, long, default_value = RUN_MODE)]
        mode: String,

        /// Resource id from the workspace manifest
        #[arg(short, long)]
        resource: Option<String>,
    },

    /// List the shortcuts that apply to a resource, or to an empty selection
    Shortcuts {
        /// Resource id from the workspace manifest
        #[arg(short, long)]
        resource: Option<String>,
    },

    /// Show the launch history for a mode
    History {
        /// Launch mode
        #[arg(short, long, default_value = RUN_MODE)]
        mode: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Forget every launch recorded for the mode
        #[arg(long, conflicts_with = "json")]
        clear: bool,
    },

    /// List launch groups
    Groups,

    /// Show or change context launching preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

/// Preference actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum PrefsAction {
    /// Show effective preferences
    Show,

    /// Set a preference in the workspace layer
    ///
    /// Examples:
    ///   ctxlaunch prefs set auto-escalate-to-parent true
    ///   ctxlaunch prefs set history_size 25
    Set {
        /// Preference key
        key: String,

        /// New value
        value: String,
    },
}
