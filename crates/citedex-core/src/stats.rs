pub use citedex_stats::outliers::SigmaOutliers;

use citedex_stats::{descriptive::DescriptiveStats, outliers::detect_sigma_outliers};
use serde::Serialize;

use crate::{Paper, PaperCollection, StatsError};

/// Descriptive statistics over the citation counts of a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CitationStats {
    pub total_papers: usize,
    pub total_citations: u64,
    pub mean: f64,
    pub median: f64,
    pub max: u32,
    pub min: u32,
}

impl CitationStats {
    /// Computes statistics for a non-empty collection.
    pub fn from_collection(papers: &PaperCollection) -> Result<Self, StatsError> {
        let max = papers.citations().max().ok_or(StatsError::EmptyCollection)?;
        let min = papers.citations().min().ok_or(StatsError::EmptyCollection)?;
        let descriptive = DescriptiveStats::new(papers.citations().map(f64::from))
            .ok_or(StatsError::EmptyCollection)?;

        Ok(Self {
            total_papers: papers.len(),
            total_citations: papers.total_citations(),
            mean: descriptive.mean,
            median: descriptive.median,
            max,
            min,
        })
    }

    /// Difference between the most and least cited paper.
    #[must_use]
    pub fn range(&self) -> u32 {
        self.max - self.min
    }
}

/// Names of papers that have never been cited, in collection order.
#[must_use]
pub fn zero_citation_papers(papers: &PaperCollection) -> Vec<&str> {
    papers
        .iter()
        .filter(|p| p.citations == 0)
        .map(|p| p.name.as_str())
        .collect()
}

/// Papers whose citation count lies more than `sigma` sample standard
/// deviations away from the mean.
///
/// Returns no outliers when the collection has fewer than two papers.
#[must_use]
pub fn detect_outliers(papers: &PaperCollection, sigma: f64) -> SigmaOutliers<&Paper> {
    detect_sigma_outliers(papers.iter().map(|p| (p, f64::from(p.citations))), sigma)
}
