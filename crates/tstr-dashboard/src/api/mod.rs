pub mod client;
pub mod sources;

pub use client::ApiClient;
pub use sources::{
    BENCH_RESULTS_PATH, Fetch, HEADS_PATH, JsonSource, WORKQUEUE_PATH, bench_results_source,
    heads_source, workqueue_source,
};
