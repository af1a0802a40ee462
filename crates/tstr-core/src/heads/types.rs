use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One commit under a branch or pull request head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub sha: String,
    #[serde(with = "crate::timestamp")]
    pub when: DateTime<Utc>,
}

/// A CI-tracked head as reported by `GET /api/heads/`.
///
/// Recreated wholesale on every successful poll; snapshots are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRecord {
    pub name: String,
    pub source: String,
    pub is_pull_request: bool,
    /// Present whenever `is_pull_request` is true.
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub pull_request_id: Option<u64>,
    #[serde(default)]
    pub commits: Vec<CommitRecord>,
    #[serde(rename = "state")]
    pub raw_state: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Branch,
    PullRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryState {
    Scheduled,
    Running,
    Done,
}

/// Commit as shown on a status card. Timestamps are dropped at derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitStatus {
    pub sha: String,
}

/// Display-ready status of one head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub display_name: String,
    pub kind: EntryKind,
    pub state: EntryState,
    pub commits: Vec<CommitStatus>,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Branch => write!(f, "branch"),
            EntryKind::PullRequest => write!(f, "pr"),
        }
    }
}

impl std::fmt::Display for EntryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryState::Scheduled => write!(f, "scheduled"),
            EntryState::Running => write!(f, "running"),
            EntryState::Done => write!(f, "done"),
        }
    }
}
