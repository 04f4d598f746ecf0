use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::CollectionError;

/// A single paper and its citation count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Paper {
    pub name: String,
    pub citations: u32,
}

impl Paper {
    #[must_use]
    pub fn new(name: impl Into<String>, citations: u32) -> Self {
        Self {
            name: name.into(),
            citations,
        }
    }
}

/// Ordered mapping from paper name to citation count.
///
/// Names are unique and non-empty. Entries keep the position at which they
/// were first inserted; inserting an existing name overwrites its count in
/// place.
///
/// # Example
///
/// ```
/// use citedex_core::PaperCollection;
///
/// let mut papers = PaperCollection::new();
/// papers.insert("B", 3).unwrap();
/// papers.insert("A", 7).unwrap();
/// papers.insert("B", 5).unwrap();
///
/// let names = papers.names().collect::<Vec<_>>();
/// assert_eq!(names, ["B", "A"]);
/// assert_eq!(papers.get("B"), Some(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PaperCollection {
    papers: Vec<Paper>,
    positions: HashMap<String, usize>,
}

impl PartialEq for PaperCollection {
    fn eq(&self, other: &Self) -> bool {
        self.papers == other.papers
    }
}

impl Eq for PaperCollection {}

impl Serialize for PaperCollection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.papers.serialize(serializer)
    }
}

impl PaperCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name given to a paper entered without one.
    ///
    /// `sequence` is the 1-based number of the entry being created.
    #[must_use]
    pub fn auto_name(sequence: usize) -> String {
        format!("Paper {sequence}")
    }

    /// Builds a collection from papers already known to have unique,
    /// non-empty names.
    pub(crate) fn from_unique(papers: Vec<Paper>) -> Self {
        let positions = papers
            .iter()
            .enumerate()
            .map(|(i, paper)| (paper.name.clone(), i))
            .collect::<HashMap<_, _>>();
        debug_assert_eq!(positions.len(), papers.len(), "paper names must be unique");
        Self { papers, positions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Returns the citation count of the named paper.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u32> {
        self.positions.get(name).map(|&i| self.papers[i].citations)
    }

    /// Inserts or overwrites a paper, returning the previous citation count.
    ///
    /// Surrounding whitespace is stripped from the name. Names that are blank
    /// or contain `|` or a line break are rejected, so every stored name can
    /// be written to and read back from the list format.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        citations: u32,
    ) -> Result<Option<u32>, CollectionError> {
        let name = normalize_name(name.into())?;
        if let Some(&i) = self.positions.get(&name) {
            let previous = std::mem::replace(&mut self.papers[i].citations, citations);
            return Ok(Some(previous));
        }
        self.positions.insert(name.clone(), self.papers.len());
        self.papers.push(Paper { name, citations });
        Ok(None)
    }

    /// Sets the citation count of an existing paper.
    pub fn set_citations(&mut self, name: &str, citations: u32) -> Result<u32, CollectionError> {
        let &i = self
            .positions
            .get(name)
            .ok_or_else(|| CollectionError::not_found(name))?;
        Ok(std::mem::replace(&mut self.papers[i].citations, citations))
    }

    /// Removes a paper, returning its citation count.
    pub fn remove(&mut self, name: &str) -> Option<u32> {
        let i = self.positions.remove(name)?;
        let paper = self.papers.remove(i);
        for pos in self.positions.values_mut() {
            if *pos > i {
                *pos -= 1;
            }
        }
        Some(paper.citations)
    }

    /// Renames a paper in place, keeping its citation count and position.
    ///
    /// Renaming onto a name that is already used by another paper fails with
    /// [`CollectionError::NameTaken`]; nothing is overwritten.
    pub fn rename(&mut self, from: &str, to: impl Into<String>) -> Result<(), CollectionError> {
        let to = normalize_name(to.into())?;
        let &i = self
            .positions
            .get(from)
            .ok_or_else(|| CollectionError::not_found(from))?;
        if from == to {
            return Ok(());
        }
        if self.positions.contains_key(&to) {
            return Err(CollectionError::NameTaken { name: to });
        }
        self.positions.remove(from);
        self.positions.insert(to.clone(), i);
        self.papers[i].name = to;
        Ok(())
    }

    /// Merges another collection into this one.
    ///
    /// Existing names are overwritten in place, new names are appended in the
    /// other collection's order.
    pub fn merge(&mut self, other: PaperCollection) {
        for Paper { name, citations } in other.papers {
            if let Some(&i) = self.positions.get(&name) {
                self.papers[i].citations = citations;
            } else {
                self.positions.insert(name.clone(), self.papers.len());
                self.papers.push(Paper { name, citations });
            }
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Paper> {
        self.papers.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.papers.iter().map(|p| p.name.as_str())
    }

    pub fn citations(&self) -> impl Iterator<Item = u32> + '_ {
        self.papers.iter().map(|p| p.citations)
    }

    #[must_use]
    pub fn total_citations(&self) -> u64 {
        self.citations().map(u64::from).sum()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Paper] {
        &self.papers
    }
}

fn normalize_name(name: String) -> Result<String, CollectionError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CollectionError::EmptyName);
    }
    if trimmed.contains(['|', '\n', '\r']) {
        return Err(CollectionError::InvalidName { name });
    }
    if trimmed.len() == name.len() {
        Ok(name)
    } else {
        Ok(trimmed.to_owned())
    }
}

impl<'a> IntoIterator for &'a PaperCollection {
    type Item = &'a Paper;
    type IntoIter = std::slice::Iter<'a, Paper>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects `(name, citations)` pairs; later duplicates overwrite earlier
/// ones and entries that [`PaperCollection::insert`] rejects are skipped.
impl<S> FromIterator<(S, u32)> for PaperCollection
where
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        let mut papers = Self::new();
        for (name, citations) in iter {
            let _ = papers.insert(name, citations);
        }
        papers
    }
}
