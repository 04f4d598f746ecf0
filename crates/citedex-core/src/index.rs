use serde::Serialize;

use crate::PaperCollection;

/// Citation count a paper needs to count towards the i10-index.
pub const I10_THRESHOLD: u32 = 10;

/// Number of papers at or above a citation threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThresholdCount {
    pub threshold: u32,
    pub count: usize,
}

/// Computes the h-index: the largest `h` such that `h` papers have at least
/// `h` citations each.
///
/// Returns 0 for an empty collection.
#[must_use]
pub fn h_index(papers: &PaperCollection) -> usize {
    let mut citations = papers.citations().collect::<Vec<_>>();
    citations.sort_unstable_by(|a, b| b.cmp(a));

    let mut h = 0;
    for (rank, &count) in (1..).zip(&citations) {
        if count as usize >= rank {
            h = rank;
        }
    }
    h
}

/// Computes the i10-index: the number of papers with at least 10 citations.
#[must_use]
pub fn i10_index(papers: &PaperCollection) -> usize {
    count_at_least(papers, I10_THRESHOLD)
}

/// Counts papers with at least `threshold` citations.
#[must_use]
pub fn count_at_least(papers: &PaperCollection, threshold: u32) -> usize {
    papers.citations().filter(|&c| c >= threshold).count()
}

/// Counts papers at or above each threshold.
///
/// Results follow the order of `thresholds`; repeated thresholds produce
/// repeated entries.
#[must_use]
pub fn count_above_thresholds(papers: &PaperCollection, thresholds: &[u32]) -> Vec<ThresholdCount> {
    thresholds
        .iter()
        .map(|&threshold| ThresholdCount {
            threshold,
            count: count_at_least(papers, threshold),
        })
        .collect()
}
