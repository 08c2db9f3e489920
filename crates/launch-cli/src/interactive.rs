//! Interactive prompts for context launching
//!
//! Uses dialoguer for terminal-based selection. With `--no-input` every
//! question is cancelled instead.

use std::cell::RefCell;

use colored::Colorize;
use dialoguer::{Confirm, Select};
use launch_core::{Disambiguator, EscalationAnswer, Notice};
use launch_model::{Configuration, Resource, ShortcutExtension};

/// Print a resolution notice
pub fn print_notice(notice: &Notice) {
    println!("{} {}", "note:".yellow().bold(), notice);
}

/// Disambiguator backed by terminal prompts.
///
/// A prompt that fails (no terminal, interrupted) counts as a cancel; the
/// first such error is kept for the caller.
#[derive(Default)]
pub struct PromptDisambiguator {
    failure: RefCell<Option<dialoguer::Error>>,
}

impl PromptDisambiguator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first prompt error, if any
    pub fn take_failure(&self) -> Option<dialoguer::Error> {
        self.failure.borrow_mut().take()
    }

    fn answered<T>(&self, result: dialoguer::Result<Option<T>>) -> Option<T> {
        match result {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "Prompt failed");
                let mut failure = self.failure.borrow_mut();
                if failure.is_none() {
                    *failure = Some(e);
                }
                None
            }
        }
    }
}

impl Disambiguator for PromptDisambiguator {
    fn pick_configuration(&self, candidates: &[Configuration], mode: &str) -> Option<Configuration> {
        let items: Vec<String> = candidates
            .iter()
            .map(|c| format!("{} {}", c.name, format!("[{}]", c.type_id).dimmed()))
            .collect();
        let index = self.answered(
            Select::new()
                .with_prompt(format!("Select a configuration to {}", mode))
                .items(&items)
                .default(0)
                .interact_opt(),
        )?;
        candidates.get(index).cloned()
    }

    fn pick_shortcut(
        &self,
        candidates: &[ShortcutExtension],
        resource: Option<&Resource>,
        mode: &str,
    ) -> Option<ShortcutExtension> {
        let prompt = match resource {
            Some(resource) => format!("How should {} be launched ({})", resource.name(), mode),
            None => format!("Select a shortcut to {}", mode),
        };
        let labels: Vec<&str> = candidates.iter().map(|s| s.label.as_str()).collect();
        let index = self.answered(
            Select::new()
                .with_prompt(prompt)
                .items(&labels)
                .default(0)
                .interact_opt(),
        )?;
        candidates.get(index).cloned()
    }

    fn confirm_escalation(&self, child: &Resource, parent: &Resource) -> EscalationAnswer {
        let proceed = self.answered(
            Confirm::new()
                .with_prompt(format!(
                    "{} cannot be launched. Launch the enclosing project {} instead?",
                    child.name().cyan(),
                    parent.name().cyan()
                ))
                .default(true)
                .interact_opt(),
        );
        if proceed != Some(true) {
            return EscalationAnswer::Cancel;
        }

        let remember = self
            .answered(
                Confirm::new()
                    .with_prompt("Always launch the enclosing project without asking?")
                    .default(false)
                    .interact_opt(),
            )
            .unwrap_or(false);
        EscalationAnswer::Yes { remember }
    }

    fn notify(&self, notice: &Notice) {
        print_notice(notice);
    }
}

/// Disambiguator for scripted use: never asks, always cancels
pub struct NoInput;

impl NoInput {
    fn skipped(&self, message: String) {
        eprintln!("{} {} (--no-input)", "skipped:".yellow().bold(), message);
    }
}

impl Disambiguator for NoInput {
    fn pick_configuration(&self, candidates: &[Configuration], _mode: &str) -> Option<Configuration> {
        self.skipped(format!("{} configurations need a choice", candidates.len()));
        None
    }

    fn pick_shortcut(
        &self,
        candidates: &[ShortcutExtension],
        _resource: Option<&Resource>,
        _mode: &str,
    ) -> Option<ShortcutExtension> {
        self.skipped(format!("{} shortcuts need a choice", candidates.len()));
        None
    }

    fn confirm_escalation(&self, child: &Resource, parent: &Resource) -> EscalationAnswer {
        self.skipped(format!(
            "launching {} needs confirmation to use {}",
            child.name(),
            parent.name()
        ));
        EscalationAnswer::Cancel
    }

    fn notify(&self, notice: &Notice) {
        print_notice(notice);
    }
}
