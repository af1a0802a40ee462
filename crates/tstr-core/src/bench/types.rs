use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One operation (e.g. "GET", "PUT") within a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchOpResult {
    pub name: String,
    #[serde(rename = "percent")]
    pub percent_of_baseline: f64,
    pub ops_per_sec: f64,
    pub objs_per_sec: f64,
    pub bytes_per_sec: f64,
}

/// One completed benchmark run as reported by `GET /api/bench/results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchResult {
    pub id: u64,
    pub version: String,
    #[serde(with = "crate::timestamp")]
    pub date: DateTime<Utc>,
    #[serde(rename = "duration")]
    pub duration_seconds: f64,
    #[serde(rename = "duration_str")]
    pub duration_label: String,
    #[serde(rename = "threads")]
    pub thread_count: u32,
    pub workload: String,
    #[serde(rename = "objsize")]
    pub object_size: String,
    #[serde(rename = "objects")]
    pub object_count: u64,
    #[serde(default)]
    pub ops: Vec<BenchOpResult>,
}
