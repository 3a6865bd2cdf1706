use crate::error::SearchError;
use crate::search::{Pair, PartialResult};

/// Select the globally minimal pair among all partial results.
///
/// Partials are scanned in the order the harness produced them (segment
/// order), `None` entries are skipped, and only a strictly smaller distance
/// replaces the current best, so the first-seen partial wins ties. All
/// partials being `None` while the run required a pair signals a partitioner
/// or search defect and is surfaced as an error.
pub fn reduce(partials: &[PartialResult]) -> Result<Pair, SearchError> {
    let mut best: Option<Pair> = None;

    for partial in partials.iter().flatten() {
        if best.is_none_or(|p| partial.distance < p.distance) {
            best = Some(*partial);
        }
    }

    best.ok_or(SearchError::NoValidPair)
}
