use async_trait::async_trait;
use closest_pair_core::error::SearchError;
use closest_pair_core::harness::ExecutionHarness;
use closest_pair_core::partition;
use closest_pair_core::point::Point;
use closest_pair_core::search::PartialResult;
use closest_pair_core::task::{SearchReply, SearchTask};
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::{Child, Command};

/// Child process guard: kills the worker if the harness bails out before
/// reaping it.
struct AutoKillChild(Option<Child>);

impl AutoKillChild {
    fn new(child: Child) -> Self {
        Self(Some(child))
    }

    async fn wait_with_output(mut self) -> std::io::Result<std::process::Output> {
        match self.0.take() {
            Some(child) => child.wait_with_output().await,
            None => Err(std::io::Error::other("child already reaped")),
        }
    }
}

impl Drop for AutoKillChild {
    fn drop(&mut self) {
        if let Some(child) = &mut self.0 {
            let _ = child.start_kill();
        }
    }
}

/// Fixed 2-way decomposition over isolated worker processes.
///
/// Each worker is the current executable re-run in `--worker` mode. The task
/// (segment plus a full copy of the point set) travels as JSON in the argv;
/// the reply comes back as JSON on the child's stdout. No memory is shared,
/// so the transfer cost of the full set is paid per worker.
pub struct ProcessHarness;

#[async_trait]
impl ExecutionHarness for ProcessHarness {
    fn name(&self) -> &'static str {
        "process"
    }

    async fn run(&self, points: Arc<Vec<Point>>) -> Result<Vec<PartialResult>, SearchError> {
        let segments = partition::halves(points.len());
        partition::verify(&segments, points.len())?;

        let exe = std::env::current_exe()?;

        let mut children = Vec::with_capacity(segments.len());
        for (worker_id, segment) in segments.iter().copied().enumerate() {
            let task = SearchTask {
                worker_id,
                segment,
                points: points.as_ref().clone(),
            };
            let task_json = serde_json::to_string(&task)?;

            let child = Command::new(&exe)
                .arg("--worker")
                .arg("--task")
                .arg(task_json)
                .stdout(Stdio::piped())
                .stderr(Stdio::inherit())
                .spawn()?;
            children.push(AutoKillChild::new(child));
        }

        let mut slots: Vec<Option<PartialResult>> = vec![None; segments.len()];
        for (worker_id, child) in children.into_iter().enumerate() {
            let output = child.wait_with_output().await?;
            if !output.status.success() {
                return Err(SearchError::WorkerFailure {
                    worker: worker_id,
                    reason: format!("worker process exited with {}", output.status),
                });
            }
            let reply: SearchReply =
                serde_json::from_slice(&output.stdout).map_err(|e| SearchError::WorkerFailure {
                    worker: worker_id,
                    reason: format!("unparseable worker reply: {}", e),
                })?;
            let slot = slots
                .get_mut(reply.worker_id)
                .ok_or_else(|| SearchError::WorkerFailure {
                    worker: worker_id,
                    reason: format!("reply for unknown worker {}", reply.worker_id),
                })?;
            *slot = Some(reply.result);
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(worker_id, slot)| {
                slot.ok_or_else(|| SearchError::WorkerFailure {
                    worker: worker_id,
                    reason: "worker exited without reporting a result".into(),
                })
            })
            .collect()
    }
}
