//! Grouping of benchmark runs by test type.
//!
//! A test type is the tuple (workload, object size, object count, duration
//! label). Runs are grouped under it in arrival order and each run's
//! operations are indexed by lowercase name. No numbers are recomputed here.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::Serialize;

use crate::bench::types::{BenchOpResult, BenchResult};

/// Identity of a test type.
///
/// Compared field by field. The `Display` form joins the fields with `-`
/// for labels; two keys can render the same label (`"a-b"`/`"c"` and
/// `"a"`/`"b-c"`) while remaining distinct groups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TestTypeKey {
    pub workload: String,
    pub object_size: String,
    pub object_count: u64,
    pub duration_label: String,
}

impl TestTypeKey {
    pub fn of(result: &BenchResult) -> Self {
        Self {
            workload: result.workload.clone(),
            object_size: result.object_size.clone(),
            object_count: result.object_count,
            duration_label: result.duration_label.clone(),
        }
    }
}

impl fmt::Display for TestTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.workload, self.object_size, self.object_count, self.duration_label
        )
    }
}

/// A benchmark run with its operations indexed by lowercase name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub result: BenchResult,
    pub ops_by_name: BTreeMap<String, BenchOpResult>,
}

impl TestResult {
    /// Index `result.ops` by lowercased name. When two operations differ only
    /// in case, the later one wins.
    pub fn new(result: BenchResult) -> Self {
        let mut ops_by_name = BTreeMap::new();
        for op in &result.ops {
            ops_by_name.insert(op.name.to_lowercase(), op.clone());
        }
        Self {
            result,
            ops_by_name,
        }
    }

    pub fn op(&self, name: &str) -> Option<&BenchOpResult> {
        self.ops_by_name.get(&name.to_lowercase())
    }

    pub fn has_op(&self, name: &str) -> bool {
        self.op(name).is_some()
    }
}

/// All runs sharing one [`TestTypeKey`], in arrival order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestType {
    pub key: TestTypeKey,
    pub entries: Vec<TestResult>,
}

/// Output of [`aggregate`]: the flat input alongside its grouping.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BenchAggregate {
    /// The untransformed input.
    pub all_results: Vec<BenchResult>,
    /// Groups in first-seen order.
    test_types: Vec<TestType>,
    #[serde(skip)]
    index: HashMap<TestTypeKey, usize>,
}

impl BenchAggregate {
    pub fn test_types(&self) -> &[TestType] {
        &self.test_types
    }

    pub fn by_test_type(&self, key: &TestTypeKey) -> Option<&TestType> {
        self.index.get(key).map(|&i| &self.test_types[i])
    }

    pub fn is_empty(&self) -> bool {
        self.all_results.is_empty()
    }
}

/// Group benchmark runs by test type.
///
/// Iterates `results` in order; the first run with a new key seeds its
/// [`TestType`], and every run is appended to the group of its key.
pub fn aggregate(results: Vec<BenchResult>) -> BenchAggregate {
    let mut test_types: Vec<TestType> = Vec::new();
    let mut index: HashMap<TestTypeKey, usize> = HashMap::new();

    for result in &results {
        let key = TestTypeKey::of(result);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            test_types.push(TestType {
                key,
                entries: Vec::new(),
            });
            test_types.len() - 1
        });
        test_types[slot].entries.push(TestResult::new(result.clone()));
    }

    BenchAggregate {
        all_results: results,
        test_types,
        index,
    }
}
