use similar::{ChangeTag, TextDiff};
use std::fmt;

/// One added or removed line between two versions of a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineChange {
    Removed(String),
    Added(String),
}

impl fmt::Display for LineChange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LineChange::Removed(line) => write!(f, "-{}", line),
            LineChange::Added(line) => write!(f, "+{}", line),
        }
    }
}

/// Lists the lines that differ between `old` and `new`, in diff order
pub fn changed_lines(old: &str, new: &str) -> Vec<LineChange> {
    let diff = TextDiff::from_lines(old, new);
    let mut changes = Vec::new();

    for change in diff.iter_all_changes() {
        let line = change.value().trim_end_matches(['\r', '\n']).to_string();
        match change.tag() {
            ChangeTag::Delete => changes.push(LineChange::Removed(line)),
            ChangeTag::Insert => changes.push(LineChange::Added(line)),
            ChangeTag::Equal => {}
        }
    }

    changes
}
