//! Per-submodule display lines.

use crate::config::HookConfig;
use crate::git::gitlinks::{ChangeKind, SubmoduleChange};
use crate::git::log::CommitLogEntry;

/// Formatted output for one submodule: the path header plus display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedChange {
    pub path: String,
    pub lines: Vec<String>,
}

/// Format one submodule change.
///
/// Added and removed submodules get a single marker line and no commit
/// enumeration; an advanced pointer gets its new commits, newest-first,
/// bounded by the configured cap. `entries` is ignored unless the change is
/// an advance.
pub fn format_change(
    change: &SubmoduleChange,
    entries: &[CommitLogEntry],
    config: &HookConfig,
) -> FormattedChange {
    let lines = match change.kind() {
        ChangeKind::Added => vec!["    Added".to_string()],
        ChangeKind::Removed => vec!["    Removed".to_string()],
        ChangeKind::Modified => commit_lines(entries, config),
    };

    FormattedChange {
        path: change.path.clone(),
        lines,
    }
}

/// Render the bounded commit list for an advanced pointer.
///
/// With a hash length of zero each line is five spaces and the subject;
/// otherwise four spaces, the truncated id, one space, and the subject.
/// Entries beyond the cap collapse into a single `... +N more` line.
fn commit_lines(entries: &[CommitLogEntry], config: &HookConfig) -> Vec<String> {
    let shown = config
        .max_commits_shown
        .unwrap_or(entries.len())
        .min(entries.len());

    let mut lines = Vec::with_capacity(shown + 1);

    for entry in &entries[..shown] {
        if config.hash_length == 0 {
            lines.push(format!("     {}", entry.subject));
        } else {
            let hex = entry.id.to_string();
            let prefix = &hex[..config.hash_length.min(hex.len())];
            lines.push(format!("    {} {}", prefix, entry.subject));
        }
    }

    if entries.len() > shown {
        lines.push(format!("    ... +{} more", entries.len() - shown));
    }

    lines
}
