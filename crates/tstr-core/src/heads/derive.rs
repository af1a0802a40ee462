//! Branch/pull-request records to display-ready status entries.

use tracing::warn;

use crate::heads::types::{BranchRecord, CommitStatus, EntryKind, EntryState, StatusEntry};

/// Map raw head records to status entries, preserving input order.
///
/// Every entry is assigned [`EntryState::Scheduled`]; the backend's
/// `raw_state` has no agreed mapping yet and is not consulted.
pub fn derive_status_entries(records: &[BranchRecord]) -> Vec<StatusEntry> {
    records.iter().map(derive_status_entry).collect()
}

pub fn derive_status_entry(record: &BranchRecord) -> StatusEntry {
    let kind = if record.is_pull_request {
        EntryKind::PullRequest
    } else {
        EntryKind::Branch
    };

    StatusEntry {
        display_name: display_name(record),
        kind,
        state: EntryState::Scheduled,
        commits: record
            .commits
            .iter()
            .map(|c| CommitStatus { sha: c.sha.clone() })
            .collect(),
    }
}

/// `source` for branches, `"{source} (#{id})"` for pull requests.
///
/// A pull request without an id breaks the backend contract. It is logged
/// and shown under its source name alone.
pub fn display_name(record: &BranchRecord) -> String {
    if !record.is_pull_request {
        return record.source.clone();
    }

    match record.pull_request_id {
        Some(id) => format!("{} (#{})", record.source, id),
        None => {
            warn!(
                event = "core.heads.pull_request_id_missing",
                name = %record.name,
                source = %record.source,
            );
            record.source.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heads::types::CommitRecord;
    use chrono::{TimeZone, Utc};

    fn branch(source: &str, commits: &[&str]) -> BranchRecord {
        BranchRecord {
            name: source.to_string(),
            source: source.to_string(),
            is_pull_request: false,
            pull_request_id: None,
            commits: commits
                .iter()
                .map(|sha| CommitRecord {
                    sha: sha.to_string(),
                    when: Utc.with_ymd_and_hms(2022, 5, 4, 12, 0, 0).unwrap(),
                })
                .collect(),
            raw_state: "open".to_string(),
        }
    }

    fn pull_request(source: &str, id: Option<u64>) -> BranchRecord {
        BranchRecord {
            name: format!("pr/{}", source),
            is_pull_request: true,
            pull_request_id: id,
            ..branch(source, &[])
        }
    }

    #[test]
    fn test_branch_scenario() {
        let entries = derive_status_entries(&[branch("foo", &["abc"])]);

        assert_eq!(
            entries,
            vec![StatusEntry {
                display_name: "foo".to_string(),
                kind: EntryKind::Branch,
                state: EntryState::Scheduled,
                commits: vec![CommitStatus {
                    sha: "abc".to_string()
                }],
            }]
        );
    }

    #[test]
    fn test_branch_uses_source_not_name() {
        let mut record = branch("s3gw", &[]);
        record.name = "refs/heads/s3gw".to_string();

        assert_eq!(derive_status_entry(&record).display_name, "s3gw");
    }

    #[test]
    fn test_pull_request_display_name() {
        let entry = derive_status_entry(&pull_request("wip-fix-gc", Some(123)));

        assert_eq!(entry.display_name, "wip-fix-gc (#123)");
        assert_eq!(entry.kind, EntryKind::PullRequest);
    }

    #[test]
    fn test_pull_request_without_id_falls_back_to_source() {
        let entry = derive_status_entry(&pull_request("orphan", None));

        assert_eq!(entry.display_name, "orphan");
        assert!(!entry.display_name.contains("undefined"));
        assert_eq!(entry.kind, EntryKind::PullRequest);
    }

    #[test]
    fn test_state_ignores_raw_state() {
        for raw in ["open", "closed", "running", "done", ""] {
            let mut record = branch("main", &[]);
            record.raw_state = raw.to_string();
            assert_eq!(derive_status_entry(&record).state, EntryState::Scheduled);
        }
    }

    #[test]
    fn test_preserves_length_and_order() {
        let records = vec![
            branch("c", &[]),
            pull_request("a", Some(1)),
            branch("b", &["1", "2", "3"]),
        ];

        let entries = derive_status_entries(&records);

        let names: Vec<_> = entries.iter().map(|e| e.display_name.as_str()).collect();
        assert_eq!(names, vec!["c", "a (#1)", "b"]);
        assert_eq!(entries[2].commits.len(), 3);
        assert_eq!(entries[2].commits[1].sha, "2");
    }

    #[test]
    fn test_empty_input() {
        assert!(derive_status_entries(&[]).is_empty());
    }
}
