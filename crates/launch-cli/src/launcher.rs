//! Console launcher
//!
//! Prints what it launches and buffers launched configurations so the caller
//! can record them in history once resolution is over.

use std::cell::RefCell;

use colored::Colorize;
use launch_core::{LaunchTarget, Launcher};
use launch_model::Configuration;

/// Launcher that announces launches on stdout
#[derive(Default)]
pub struct ConsoleLauncher {
    launched: RefCell<Vec<Configuration>>,
}

impl ConsoleLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configurations launched so far, draining the buffer
    pub fn take_launched(&self) -> Vec<Configuration> {
        self.launched.take()
    }
}

impl Launcher for ConsoleLauncher {
    fn execute(&self, target: LaunchTarget<'_>, mode: &str) {
        match target {
            LaunchTarget::Configuration(configuration) => {
                println!("{} {} ({})", "Launching".green().bold(), configuration.name, mode);
                self.launched.borrow_mut().push(configuration.clone());
            }
            LaunchTarget::Shortcut {
                shortcut,
                selection,
            } => {
                if selection.is_empty() {
                    println!("{} {} ({})", "Launching".green().bold(), shortcut.label, mode);
                } else {
                    let names: Vec<&str> = selection.elements().iter().map(|r| r.name()).collect();
                    println!(
                        "{} {} ({}) on {}",
                        "Launching".green().bold(),
                        shortcut.label,
                        mode,
                        names.join(", ")
                    );
                }
            }
        }
    }
}
