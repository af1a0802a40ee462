use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a job does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    Build,
    S3tests,
    Benchmark,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Waiting,
    Running,
    Finished,
    #[serde(other)]
    Unknown,
}

/// Lifecycle of a queue slot, independent of the job it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkQueueState {
    New,
    Assigned,
    Running,
    Done,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkQueueJob {
    pub id: u64,
    pub sha: String,
    pub branch: String,
    #[serde(with = "crate::timestamp")]
    pub when: DateTime<Utc>,
    pub what: JobKind,
    pub state: JobState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkQueueItem {
    pub id: u64,
    pub job: WorkQueueJob,
    #[serde(with = "crate::timestamp")]
    pub when: DateTime<Utc>,
    pub state: WorkQueueState,
}

macro_rules! display_lowercase {
    ($($ty:ty => { $($variant:ident => $label:literal),+ $(,)? }),+ $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let label = match self {
                        $(Self::$variant => $label),+
                    };
                    f.write_str(label)
                }
            }
        )+
    };
}

display_lowercase! {
    JobKind => { Build => "build", S3tests => "s3tests", Benchmark => "benchmark", Unknown => "unknown" },
    JobState => { Waiting => "waiting", Running => "running", Finished => "finished", Unknown => "unknown" },
    WorkQueueState => { New => "new", Assigned => "assigned", Running => "running", Done => "done", Unknown => "unknown" },
}
