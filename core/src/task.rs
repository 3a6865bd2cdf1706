use crate::partition::Segment;
use crate::point::Point;
use crate::search::{closest_pair, PartialResult};
use serde::{Deserialize, Serialize};

/// One unit of search work, serializable so it can be shipped to an isolated
/// worker process. The full point set travels with the task: process workers
/// share no memory with the coordinator, and every worker scans its segment
/// against the whole set.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchTask {
    pub worker_id: usize,
    pub segment: Segment,
    pub points: Vec<Point>,
}

/// A worker's answer, tagged with the id of the segment it searched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchReply {
    pub worker_id: usize,
    pub result: PartialResult,
}

impl SearchTask {
    /// Run the search for this task's segment.
    pub fn run(self) -> SearchReply {
        SearchReply {
            worker_id: self.worker_id,
            result: closest_pair(self.segment, &self.points),
        }
    }
}
