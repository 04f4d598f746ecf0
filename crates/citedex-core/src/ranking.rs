use crate::{Paper, PaperCollection};

/// Ordering used by [`sorted_view`].
///
/// Parses case-insensitively from `"citations"` or `"name"`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum SortMode {
    /// Most cited first.
    #[default]
    Citations,
    /// Alphabetical by name.
    Name,
}

/// Returns a sorted copy of the collection.
///
/// The sort is stable: papers that compare equal keep their relative order.
#[must_use]
pub fn sorted_view(papers: &PaperCollection, mode: SortMode) -> PaperCollection {
    let mut sorted = papers.as_slice().to_vec();
    match mode {
        SortMode::Citations => sorted.sort_by(|a, b| b.citations.cmp(&a.citations)),
        SortMode::Name => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    PaperCollection::from_unique(sorted)
}

/// Papers with `low <= citations <= high`, in collection order.
///
/// An inverted range (`low > high`) matches nothing.
#[must_use]
pub fn range_filter(papers: &PaperCollection, low: u32, high: u32) -> PaperCollection {
    let filtered = papers
        .iter()
        .filter(|p| (low..=high).contains(&p.citations))
        .cloned()
        .collect::<Vec<Paper>>();
    PaperCollection::from_unique(filtered)
}

/// The `n` most cited papers, most cited first.
#[must_use]
pub fn top_n(papers: &PaperCollection, n: usize) -> PaperCollection {
    let mut sorted = sorted_view(papers, SortMode::Citations).as_slice().to_vec();
    sorted.truncate(n);
    PaperCollection::from_unique(sorted)
}
