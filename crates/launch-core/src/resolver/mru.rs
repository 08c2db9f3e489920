//! Most-recently-used tie-break

use crate::collaborators::{GroupRegistry, HistoryStore};
use launch_model::Configuration;

/// The most recent launch in the canonical group for `mode`
pub fn last_launch(
    groups: &dyn GroupRegistry,
    history: &dyn HistoryStore,
    mode: &str,
) -> Option<Configuration> {
    let group = groups.canonical(mode)?;
    history.recent_launch(&group.id)
}

/// Pick the most recently launched member of `candidates`.
///
/// Checks the last launch first, then scans the complete history of the
/// canonical group for `mode` in recency order. Returns `None` when the mode
/// has no canonical group or no history entry is a candidate.
pub fn mru_tie_break(
    groups: &dyn GroupRegistry,
    history: &dyn HistoryStore,
    candidates: &[Configuration],
    mode: &str,
) -> Option<Configuration> {
    let Some(group) = groups.canonical(mode) else {
        tracing::debug!(mode, "No canonical launch group, no tie-break");
        return None;
    };

    if let Some(last) = history.recent_launch(&group.id) {
        if candidates.contains(&last) {
            tracing::debug!(group = %group.id, configuration = %last.id, "Last launch is a candidate");
            return Some(last);
        }
    }

    let found = history
        .complete_history(&group.id)
        .into_iter()
        .find(|entry| candidates.contains(entry));
    tracing::debug!(
        group = %group.id,
        configuration = found.as_ref().map(|c| c.id.as_str()),
        "Scanned launch history"
    );
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::{LaunchGroupRegistry, RUN_GROUP};
    use crate::history::LaunchHistory;
    use launch_model::{ConfigurationId, LaunchGroup, RUN_MODE};

    fn config(id: &str) -> Configuration {
        Configuration::new(ConfigurationId::new(id).unwrap(), id, "cargo")
    }

    #[test]
    fn last_launch_wins_when_it_is_a_candidate() {
        let groups = LaunchGroupRegistry::with_builtins();
        let mut history = LaunchHistory::new();
        history.record_launch(RUN_GROUP, config("a"));
        history.record_launch(RUN_GROUP, config("b"));

        let pick = mru_tie_break(&groups, &history, &[config("a"), config("b")], RUN_MODE);
        assert_eq!(pick, Some(config("b")));
    }

    #[test]
    fn older_history_entry_is_used_when_last_launch_is_not_a_candidate() {
        let groups = LaunchGroupRegistry::with_builtins();
        let mut history = LaunchHistory::new();
        history.record_launch(RUN_GROUP, config("c"));
        history.record_launch(RUN_GROUP, config("b"));
        history.record_launch(RUN_GROUP, config("z"));

        let pick = mru_tie_break(&groups, &history, &[config("a"), config("b"), config("c")], RUN_MODE);
        assert_eq!(pick, Some(config("b")));
    }

    #[test]
    fn no_overlap_means_no_pick() {
        let groups = LaunchGroupRegistry::with_builtins();
        let mut history = LaunchHistory::new();
        history.record_launch(RUN_GROUP, config("z"));

        assert_eq!(mru_tie_break(&groups, &history, &[config("a")], RUN_MODE), None);
    }

    #[test]
    fn categorized_group_history_is_ignored() {
        let mut groups = LaunchGroupRegistry::new();
        groups.register(LaunchGroup::new("tools", "Tools", RUN_MODE).with_category("tools"));
        let mut history = LaunchHistory::new();
        history.record_launch("tools", config("a"));

        assert_eq!(mru_tie_break(&groups, &history, &[config("a")], RUN_MODE), None);
        assert_eq!(last_launch(&groups, &history, RUN_MODE), None);
    }
}
