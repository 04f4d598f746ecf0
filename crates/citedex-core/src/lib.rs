//! Citation analytics engine.
//!
//! All computations operate on an in-memory [`PaperCollection`], an ordered
//! mapping from paper name to citation count. Nothing in this crate touches
//! the file system; [`text_format`] reads and writes the pipe-delimited list
//! format through `std::io` readers and writers supplied by the caller.
//!
//! # Example
//!
//! ```
//! use citedex_core::{PaperCollection, h_index, i10_index};
//!
//! let papers: PaperCollection = [("A", 10), ("B", 10), ("C", 10), ("D", 1)]
//!     .into_iter()
//!     .collect();
//! assert_eq!(h_index(&papers), 3);
//! assert_eq!(i10_index(&papers), 3);
//! ```

pub use self::{
    collection::*, editor::*, index::*, ranking::*, report::*, stats::*,
};

mod collection;
mod editor;
mod index;
mod ranking;
mod report;
mod stats;
pub mod text_format;

/// Default width of the outlier band, in sample standard deviations.
pub const DEFAULT_OUTLIER_SIGMA: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CollectionError {
    #[display("paper name must not be empty")]
    EmptyName,
    #[display("paper name must not contain '|' or line breaks: {name:?}")]
    InvalidName { name: String },
    #[display("paper not found: {name}")]
    NotFound { name: String },
    #[display("a paper named '{name}' already exists")]
    NameTaken { name: String },
}

impl CollectionError {
    pub(crate) fn not_found(name: &str) -> Self {
        Self::NotFound {
            name: name.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StatsError {
    #[display("statistics require at least one paper")]
    EmptyCollection,
}
