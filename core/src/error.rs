use thiserror::Error;

/// Error taxonomy for a search run.
///
/// Worker failures are fatal: each worker performs a pure computation over
/// immutable inputs, so a crash signals a defect, not a transient condition.
/// The harness must never report a missing result as an empty partial.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("at least two points are required, got {0}")]
    NotEnoughPoints(usize),

    #[error("worker {worker} failed: {reason}")]
    WorkerFailure { worker: usize, reason: String },

    #[error("partition invariant violated: {0}")]
    PartitionInvariant(String),

    #[error("no worker produced a valid pair")]
    NoValidPair,

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Codec(#[from] serde_json::Error),
}
