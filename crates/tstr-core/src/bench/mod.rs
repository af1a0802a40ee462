pub mod aggregate;
pub mod types;

// Re-export commonly used types
pub use aggregate::{BenchAggregate, TestResult, TestType, TestTypeKey, aggregate};
pub use types::{BenchOpResult, BenchResult};
