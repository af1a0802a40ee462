//! Data sources a refresh cycle can poll.

use std::future::Future;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use tstr_core::{BenchResult, BranchRecord, WorkQueueItem};

use crate::api::client::ApiClient;
use crate::errors::FetchError;

pub const HEADS_PATH: &str = "/api/heads/";
pub const BENCH_RESULTS_PATH: &str = "/api/bench/results";
pub const WORKQUEUE_PATH: &str = "/api/workqueue";

/// Produces a fresh snapshot of a feed on demand.
///
/// Any `Fn() -> impl Future<Output = Result<Vec<T>, FetchError>>` closure is
/// a source, which keeps tests free of HTTP.
pub trait Fetch<T>: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<Vec<T>, FetchError>> + Send;
}

impl<T, F, Fut> Fetch<T> for F
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>, FetchError>> + Send,
{
    fn fetch(&self) -> impl Future<Output = Result<Vec<T>, FetchError>> + Send {
        self()
    }
}

/// A backend endpoint returning a JSON array of `T`.
#[derive(Debug, Clone)]
pub struct JsonSource<T> {
    client: ApiClient,
    path: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonSource<T> {
    pub fn new(client: ApiClient, path: &'static str) -> Self {
        Self {
            client,
            path,
            _marker: PhantomData,
        }
    }

    pub fn url(&self) -> String {
        self.client.url(self.path)
    }
}

impl<T> Fetch<T> for JsonSource<T>
where
    T: DeserializeOwned + Send + 'static,
{
    fn fetch(&self) -> impl Future<Output = Result<Vec<T>, FetchError>> + Send {
        self.client.get_json::<Vec<T>>(self.path)
    }
}

pub fn heads_source(client: &ApiClient) -> JsonSource<BranchRecord> {
    JsonSource::new(client.clone(), HEADS_PATH)
}

pub fn bench_results_source(client: &ApiClient) -> JsonSource<BenchResult> {
    JsonSource::new(client.clone(), BENCH_RESULTS_PATH)
}

pub fn workqueue_source(client: &ApiClient) -> JsonSource<WorkQueueItem> {
    JsonSource::new(client.clone(), WORKQUEUE_PATH)
}
