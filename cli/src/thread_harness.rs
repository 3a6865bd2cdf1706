use async_trait::async_trait;
use closest_pair_core::error::SearchError;
use closest_pair_core::harness::ExecutionHarness;
use closest_pair_core::partition;
use closest_pair_core::point::Point;
use closest_pair_core::search::{closest_pair, PartialResult};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

/// Fixed 2-way decomposition over OS threads sharing the point set.
///
/// The points are read-only after generation, so the threads share them
/// through an `Arc` without locking; only the result queue needs
/// multi-producer one-consumer semantics, which `std::sync::mpsc` provides.
pub struct ThreadHarness;

#[async_trait]
impl ExecutionHarness for ThreadHarness {
    fn name(&self) -> &'static str {
        "thread"
    }

    async fn run(&self, points: Arc<Vec<Point>>) -> Result<Vec<PartialResult>, SearchError> {
        let segments = partition::halves(points.len());
        partition::verify(&segments, points.len())?;

        let (result_tx, result_rx) = mpsc::channel::<(usize, PartialResult)>();

        let mut handles = Vec::with_capacity(segments.len());
        for (worker_id, segment) in segments.iter().copied().enumerate() {
            let tx = result_tx.clone();
            let points = Arc::clone(&points);
            handles.push(thread::spawn(move || {
                let result = closest_pair(segment, &points);
                let _ = tx.send((worker_id, result));
            }));
        }
        drop(result_tx);

        let num_workers = segments.len();
        // Joining blocks, so hand the wait to the blocking pool.
        tokio::task::spawn_blocking(move || -> Result<Vec<PartialResult>, SearchError> {
            for (worker_id, handle) in handles.into_iter().enumerate() {
                handle.join().map_err(|_| SearchError::WorkerFailure {
                    worker: worker_id,
                    reason: "thread panicked before reporting a result".into(),
                })?;
            }

            let mut slots: Vec<Option<PartialResult>> = vec![None; num_workers];
            for (worker_id, result) in result_rx.iter() {
                slots[worker_id] = Some(result);
            }

            slots
                .into_iter()
                .enumerate()
                .map(|(worker_id, slot)| {
                    slot.ok_or_else(|| SearchError::WorkerFailure {
                        worker: worker_id,
                        reason: "thread terminated without reporting a result".into(),
                    })
                })
                .collect()
        })
        .await
        .map_err(|e| SearchError::WorkerFailure {
            worker: 0,
            reason: format!("join task failed: {}", e),
        })?
    }
}
