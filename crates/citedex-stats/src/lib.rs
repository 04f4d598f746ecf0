//! Statistical utilities for the citedex project.
//!
//! This crate provides the numeric building blocks used by the citation
//! analytics engine:
//!
//! - **Descriptive statistics**: count, sum, mean, median, min, max and sample
//!   standard deviation
//! - **Outlier detection**: items lying outside a `mean ± k·σ` band
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`outliers`]: Sigma-band outlier detection over labelled values
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use citedex_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! ```
//!
//! ## Detecting outliers
//!
//! ```
//! use citedex_stats::outliers::detect_sigma_outliers;
//!
//! let items = [("a", 1.0), ("b", 2.0)];
//! let outliers = detect_sigma_outliers(items, 2.0);
//! assert!(outliers.is_empty());
//! ```

pub mod descriptive;
pub mod outliers;
