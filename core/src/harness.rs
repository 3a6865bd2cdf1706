// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::SearchError;
use crate::point::Point;
use crate::search::PartialResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Trait for abstracting the concurrent execution model (tasks, threads,
/// processes). Every strategy partitions the set, runs one closest-pair
/// invocation per segment concurrently against the full set, and returns one
/// partial result per segment.
///
/// Results must be ordered by segment index, not completion order: workers
/// finish in non-deterministic wall-clock order, and segment ordering is
/// what keeps reduction deterministic.
#[async_trait]
pub trait ExecutionHarness {
    /// Strategy name for run banners.
    fn name(&self) -> &'static str;

    /// Dispatch the search and collect every worker's partial result.
    ///
    /// A worker terminating without producing a result is a
    /// [`SearchError::WorkerFailure`], never an empty partial.
    async fn run(&self, points: Arc<Vec<Point>>) -> Result<Vec<PartialResult>, SearchError>;
}
