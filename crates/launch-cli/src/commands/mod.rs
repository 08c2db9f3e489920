//! Command implementations for launch-cli

pub mod groups;
pub mod history;
pub mod label;
pub mod launch;
pub mod prefs;
pub mod shortcuts;

pub use groups::run_groups;
pub use history::run_history;
pub use label::run_label;
pub use launch::run_launch;
pub use prefs::{run_prefs_set, run_prefs_show};
pub use shortcuts::run_shortcuts;
