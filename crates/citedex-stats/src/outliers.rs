use crate::descriptive::sample_std_dev;

/// Items falling outside a `mean ± k·σ` band.
///
/// Both lists keep the order in which the items were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct SigmaOutliers<T> {
    /// Items strictly above `mean + k·σ`.
    pub high: Vec<T>,
    /// Items strictly below `mean - k·σ`.
    pub low: Vec<T>,
}

impl<T> Default for SigmaOutliers<T> {
    fn default() -> Self {
        Self {
            high: Vec::new(),
            low: Vec::new(),
        }
    }
}

impl<T> SigmaOutliers<T> {
    /// Returns `true` if no outliers were found on either side.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.high.is_empty() && self.low.is_empty()
    }
}

/// Splits items into high and low outliers using the sample mean and the
/// sample standard deviation of their values.
///
/// An item is a high outlier when its value is greater than `mean + sigma·σ`
/// and a low outlier when it is less than `mean - sigma·σ`. With fewer than
/// two items the standard deviation is undefined and no outliers are reported.
///
/// # Arguments
///
/// * `items` - `(item, value)` pairs in the order they should be reported
/// * `sigma` - Width of the band in standard deviations
///
/// # Examples
///
/// ```
/// use citedex_stats::outliers::detect_sigma_outliers;
///
/// let mut items: Vec<(&str, f64)> = (0..10).map(|_| ("low", 1.0)).collect();
/// items.push(("spike", 500.0));
/// let outliers = detect_sigma_outliers(items, 2.0);
/// assert_eq!(outliers.high, vec!["spike"]);
/// assert!(outliers.low.is_empty());
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn detect_sigma_outliers<T, I>(items: I, sigma: f64) -> SigmaOutliers<T>
where
    I: IntoIterator<Item = (T, f64)>,
{
    let items = items.into_iter().collect::<Vec<_>>();
    let values = items.iter().map(|(_, v)| *v).collect::<Vec<_>>();
    let Some(std_dev) = sample_std_dev(&values) else {
        return SigmaOutliers::default();
    };
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let upper = mean + sigma * std_dev;
    let lower = mean - sigma * std_dev;

    let mut outliers = SigmaOutliers::default();
    for (item, value) in items {
        if value > upper {
            outliers.high.push(item);
        } else if value < lower {
            outliers.low.push(item);
        }
    }
    outliers
}
