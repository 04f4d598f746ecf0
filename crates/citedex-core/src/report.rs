//! Summary report assembly.
//!
//! [`SummaryReport`] gathers every figure shown in the full summary and
//! renders it as fixed-width text through its `Display` implementation.

use std::fmt::{self, Write as _};

use serde::Serialize;

use crate::{
    CitationStats, Paper, PaperCollection, SortMode, StatsError, detect_outliers, h_index,
    i10_index, sorted_view, zero_citation_papers,
};

const REPORT_WIDTH: usize = 60;
const TABLE_WIDTH: usize = 50;
const NONE_PLACEHOLDER: &str = "None";

/// Text returned by [`summary_report_text`] for an empty collection.
pub const NO_PAPERS_TEXT: &str = "No papers available.\n";

/// Bibliometric summary of a collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub h_index: usize,
    pub i10_index: usize,
    pub stats: CitationStats,
    pub zero_citation: Vec<String>,
    pub outlier_sigma: f64,
    pub high_outliers: Vec<Paper>,
    pub low_outliers: Vec<Paper>,
    /// All papers, most cited first.
    pub ranked: Vec<Paper>,
}

impl SummaryReport {
    pub fn new(papers: &PaperCollection, outlier_sigma: f64) -> Result<Self, StatsError> {
        let stats = CitationStats::from_collection(papers)?;
        let outliers = detect_outliers(papers, outlier_sigma);

        Ok(Self {
            h_index: h_index(papers),
            i10_index: i10_index(papers),
            stats,
            zero_citation: zero_citation_papers(papers)
                .into_iter()
                .map(str::to_owned)
                .collect(),
            outlier_sigma,
            high_outliers: outliers.high.into_iter().cloned().collect(),
            low_outliers: outliers.low.into_iter().cloned().collect(),
            ranked: sorted_view(papers, SortMode::Citations).as_slice().to_vec(),
        })
    }

    /// The `High Outliers` line of the report.
    #[must_use]
    pub fn high_outliers_line(&self) -> String {
        format!(
            "High Outliers (>{}σ): {}",
            format_sigma(self.outlier_sigma),
            join_or_none(self.high_outliers.iter().map(paper_with_count))
        )
    }

    /// The `Low Outliers` line of the report.
    #[must_use]
    pub fn low_outliers_line(&self) -> String {
        format!(
            "Low Outliers (<{}σ) : {}",
            format_sigma(self.outlier_sigma),
            join_or_none(self.low_outliers.iter().map(paper_with_count))
        )
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.stats;
        writeln!(f, "{:^REPORT_WIDTH$}", "RESEARCH PAPER STATISTICS")?;
        writeln!(f, "{}", "=".repeat(REPORT_WIDTH))?;
        writeln!(f, "Total Papers       : {}", stats.total_papers)?;
        writeln!(f, "Total Citations    : {}", stats.total_citations)?;
        writeln!(f, "h-index            : {}", self.h_index)?;
        writeln!(f, "i10-index          : {}", self.i10_index)?;
        writeln!(f, "Average Citations  : {}", format_mean(stats.mean))?;
        let median = format_median(stats.median, stats.total_papers);
        writeln!(f, "Median Citations   : {median}")?;
        writeln!(f, "Max Citations      : {}", stats.max)?;
        writeln!(f, "Min Citations      : {}", stats.min)?;
        writeln!(f, "Range              : {}", stats.range())?;
        writeln!(
            f,
            "Zero-Citation Papers: {}",
            join_or_none(self.zero_citation.iter().map(String::as_str))
        )?;
        writeln!(f, "{}", self.high_outliers_line())?;
        writeln!(f, "{}", self.low_outliers_line())?;
        writeln!(f)?;
        writeln!(f, "All Papers Descending by Citations:")?;
        write!(f, "{}", ranked_table(&self.ranked))
    }
}

/// Renders the summary report, or [`NO_PAPERS_TEXT`] for an empty collection.
#[must_use]
pub fn summary_report_text(papers: &PaperCollection, outlier_sigma: f64) -> String {
    match SummaryReport::new(papers, outlier_sigma) {
        Ok(report) => report.to_string(),
        Err(StatsError::EmptyCollection) => NO_PAPERS_TEXT.to_owned(),
    }
}

/// Numbered table of papers with a column header, one paper per line.
#[must_use]
pub fn ranked_table<'a, I>(papers: I) -> String
where
    I: IntoIterator<Item = &'a Paper>,
{
    let mut table = String::new();
    let _ = writeln!(table, "{:<5} {:<35} {:>10}", "S.No", "Paper Name", "Citations");
    let _ = write!(table, "{}", "-".repeat(TABLE_WIDTH));
    for (i, paper) in papers.into_iter().enumerate() {
        let _ = write!(
            table,
            "\n{:<5} {:<35} {:>10}",
            i + 1,
            paper.name,
            paper.citations
        );
    }
    table
}

/// Mean rounded to two decimals.
#[must_use]
pub fn format_mean(mean: f64) -> String {
    format!("{mean:.2}")
}

/// Median of `count` integer citation counts.
///
/// An odd count picks a single middle value, shown without decimals. An even
/// count averages the two middle values, shown with one decimal even when
/// whole.
#[must_use]
pub fn format_median(median: f64, count: usize) -> String {
    if count % 2 == 1 {
        format!("{median:.0}")
    } else {
        format!("{median:.1}")
    }
}

fn format_sigma(sigma: f64) -> String {
    if sigma.fract() == 0.0 {
        format!("{sigma:.0}")
    } else {
        sigma.to_string()
    }
}

fn paper_with_count(paper: &Paper) -> String {
    format!("{}({})", paper.name, paper.citations)
}

fn join_or_none<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items
        .into_iter()
        .map(|s| s.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        NONE_PLACEHOLDER.to_owned()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_OUTLIER_SIGMA;

    #[test]
    fn test_empty_collection_text() {
        assert_eq!(
            summary_report_text(&PaperCollection::new(), DEFAULT_OUTLIER_SIGMA),
            NO_PAPERS_TEXT
        );
        assert!(SummaryReport::new(&PaperCollection::new(), DEFAULT_OUTLIER_SIGMA).is_err());
    }

    #[test]
    fn test_report_fields() {
        let papers: PaperCollection = [("P1", 0), ("P2", 0), ("P3", 100)].into_iter().collect();
        let report = SummaryReport::new(&papers, DEFAULT_OUTLIER_SIGMA).unwrap();

        assert_eq!(report.h_index, 1);
        assert_eq!(report.i10_index, 1);
        assert_eq!(report.zero_citation, ["P1", "P2"]);
        assert!(report.high_outliers.is_empty());
        assert!(report.low_outliers.is_empty());
        assert_eq!(report.ranked[0], Paper::new("P3", 100));
    }

    #[test]
    fn test_report_text_layout() {
        let papers: PaperCollection = [("P1", 0), ("P2", 0), ("P3", 100)].into_iter().collect();
        let text = summary_report_text(&papers, DEFAULT_OUTLIER_SIGMA);
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!(lines[0].trim(), "RESEARCH PAPER STATISTICS");
        assert_eq!(lines[1], "=".repeat(60));
        assert_eq!(lines[2], "Total Papers       : 3");
        assert_eq!(lines[3], "Total Citations    : 100");
        assert_eq!(lines[4], "h-index            : 1");
        assert_eq!(lines[5], "i10-index          : 1");
        assert_eq!(lines[6], "Average Citations  : 33.33");
        assert_eq!(lines[7], "Median Citations   : 0");
        assert_eq!(lines[8], "Max Citations      : 100");
        assert_eq!(lines[9], "Min Citations      : 0");
        assert_eq!(lines[10], "Range              : 100");
        assert_eq!(lines[11], "Zero-Citation Papers: P1, P2");
        assert_eq!(lines[12], "High Outliers (>2σ): None");
        assert_eq!(lines[13], "Low Outliers (<2σ) : None");
        assert_eq!(lines[14], "");
        assert_eq!(lines[15], "All Papers Descending by Citations:");
        assert!(lines[16].starts_with("S.No  Paper Name"));
        assert_eq!(lines[17], "-".repeat(50));
        assert_eq!(lines[18], format!("{:<5} {:<35} {:>10}", 1, "P3", 100));
        assert_eq!(lines[19], format!("{:<5} {:<35} {:>10}", 2, "P1", 0));
        assert_eq!(lines[20], format!("{:<5} {:<35} {:>10}", 3, "P2", 0));
        assert_eq!(lines.len(), 21);
    }

    #[test]
    fn test_outlier_lines() {
        let mut papers = (1..=20)
            .map(|i| (PaperCollection::auto_name(i), 10))
            .collect::<PaperCollection>();
        papers.insert("Breakthrough", 1000).unwrap();

        let report = SummaryReport::new(&papers, DEFAULT_OUTLIER_SIGMA).unwrap();
        assert_eq!(report.high_outliers_line(), "High Outliers (>2σ): Breakthrough(1000)");
        assert_eq!(report.low_outliers_line(), "Low Outliers (<2σ) : None");
        assert_eq!(report.zero_citation, Vec::<String>::new());
        assert!(report.to_string().contains("Zero-Citation Papers: None"));
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(format_mean(33.333_333), "33.33");
        assert_eq!(format_mean(10.0), "10.00");
        assert_eq!(format_median(0.0, 3), "0");
        assert_eq!(format_median(2.5, 4), "2.5");
        assert_eq!(format_median(10.0, 2), "10.0");
        assert_eq!(format_sigma(2.0), "2");
        assert_eq!(format_sigma(1.5), "1.5");
    }
}
