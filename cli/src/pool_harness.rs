use async_trait::async_trait;
use closest_pair_core::error::SearchError;
use closest_pair_core::harness::ExecutionHarness;
use closest_pair_core::partition::{self, Segment};
use closest_pair_core::point::Point;
use closest_pair_core::search::{closest_pair, PartialResult};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::{StreamExt, StreamMap};

/// N-way decomposition over a fixed pool of tokio worker tasks.
///
/// Each worker owns an mpsc work channel and a completion channel; the
/// harness submits exactly one segment per worker and collects completions
/// through a `StreamMap` keyed by worker id, so the slot a result lands in is
/// independent of completion order.
pub struct PoolHarness {
    workers: usize,
}

impl PoolHarness {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

#[async_trait]
impl ExecutionHarness for PoolHarness {
    fn name(&self) -> &'static str {
        "pool"
    }

    async fn run(&self, points: Arc<Vec<Point>>) -> Result<Vec<PartialResult>, SearchError> {
        let segments = partition::chunks(points.len(), self.workers);
        partition::verify(&segments, points.len())?;

        let mut work_txs = Vec::with_capacity(self.workers);
        let mut handles = Vec::with_capacity(self.workers);
        let mut completion_streams = StreamMap::new();

        for worker_id in 0..self.workers {
            let (work_tx, mut work_rx) = mpsc::channel::<Segment>(1);
            let (done_tx, done_rx) = mpsc::channel::<PartialResult>(1);
            completion_streams.insert(worker_id, ReceiverStream::new(done_rx));
            work_txs.push(work_tx);

            let points = Arc::clone(&points);
            handles.push(tokio::spawn(async move {
                while let Some(segment) = work_rx.recv().await {
                    let result = closest_pair(segment, &points);
                    let _ = done_tx.send(result).await;
                }
            }));
        }

        for (worker_id, segment) in segments.iter().copied().enumerate() {
            work_txs[worker_id]
                .send(segment)
                .await
                .map_err(|_| SearchError::WorkerFailure {
                    worker: worker_id,
                    reason: "worker dropped its work channel".into(),
                })?;
        }
        // Closing the work channels lets the workers exit after their segment.
        drop(work_txs);

        let mut slots: Vec<Option<PartialResult>> = vec![None; self.workers];
        while let Some((worker_id, result)) = completion_streams.next().await {
            slots[worker_id] = Some(result);
        }

        for (worker_id, handle) in handles.into_iter().enumerate() {
            handle.await.map_err(|e| SearchError::WorkerFailure {
                worker: worker_id,
                reason: format!("worker task failed: {}", e),
            })?;
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(worker_id, slot)| {
                slot.ok_or_else(|| SearchError::WorkerFailure {
                    worker: worker_id,
                    reason: "worker finished without reporting a result".into(),
                })
            })
            .collect()
    }
}
