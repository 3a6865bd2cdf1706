// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::error::SearchError;
use serde::{Deserialize, Serialize};

/// A contiguous half-open index range into the point set, assigned to
/// exactly one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Split `n` points into two contiguous halves, sizes `⌈n/2⌉` and `⌊n/2⌋`.
pub fn halves(n: usize) -> Vec<Segment> {
    let mid = n.div_ceil(2);
    vec![Segment::new(0, mid), Segment::new(mid, n)]
}

/// Split `n` points into exactly `workers` contiguous segments.
///
/// The first segment absorbs the division remainder, so size imbalance is
/// confined to one segment; the rest receive `n / workers` points each
/// (possibly zero when `workers > n`). A worker count of zero is treated
/// as one, so at least one segment is always produced.
pub fn chunks(n: usize, workers: usize) -> Vec<Segment> {
    let workers = workers.max(1);
    let chunk = n / workers;
    let remainder = n % workers;

    let mut segments = Vec::with_capacity(workers);
    let mut start = 0;
    for worker_id in 0..workers {
        let size = if worker_id == 0 { chunk + remainder } else { chunk };
        segments.push(Segment::new(start, start + size));
        start += size;
    }
    segments
}

/// Check that the segments concatenate, in order, to exactly `0..n`.
///
/// A violation is an internal defect (off-by-one chunk math) and is surfaced
/// as a fatal error, never silently corrected.
pub fn verify(segments: &[Segment], n: usize) -> Result<(), SearchError> {
    let mut expected_start = 0;
    for (idx, segment) in segments.iter().enumerate() {
        if segment.start != expected_start || segment.end < segment.start {
            return Err(SearchError::PartitionInvariant(format!(
                "segment {} spans {}..{}, expected start {}",
                idx, segment.start, segment.end, expected_start
            )));
        }
        expected_start = segment.end;
    }
    if expected_start != n {
        return Err(SearchError::PartitionInvariant(format!(
            "segments cover 0..{} but the set has {} points",
            expected_start, n
        )));
    }
    Ok(())
}
