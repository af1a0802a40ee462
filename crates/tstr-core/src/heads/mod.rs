pub mod derive;
pub mod types;

// Re-export commonly used types
pub use derive::derive_status_entries;
pub use types::{BranchRecord, CommitRecord, CommitStatus, EntryKind, EntryState, StatusEntry};
