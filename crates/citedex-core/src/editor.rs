use crate::{CollectionError, PaperCollection};

/// Action word typed by the user when editing a paper.
///
/// Parses case-insensitively from `"edit"`, `"rename"` or `"delete"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum EditActionKind {
    Edit,
    Rename,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    SetCitations(u32),
    Rename(String),
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Updated { previous: u32, citations: u32 },
    Renamed { from: String, to: String },
    Deleted { citations: u32 },
}

/// Applies a single edit to the named paper.
///
/// Fails with [`CollectionError::NotFound`] when the paper does not exist.
/// A rename onto another paper's name fails with
/// [`CollectionError::NameTaken`]. The collection is unchanged on error.
pub fn edit_paper(
    papers: &mut PaperCollection,
    name: &str,
    action: EditAction,
) -> Result<EditOutcome, CollectionError> {
    if !papers.contains(name) {
        return Err(CollectionError::not_found(name));
    }
    let outcome = match action {
        EditAction::SetCitations(citations) => {
            let previous = papers.set_citations(name, citations)?;
            EditOutcome::Updated {
                previous,
                citations,
            }
        }
        EditAction::Rename(to) => {
            let to = to.trim().to_owned();
            papers.rename(name, to.clone())?;
            EditOutcome::Renamed {
                from: name.to_owned(),
                to,
            }
        }
        EditAction::Delete => {
            let citations = papers
                .remove(name)
                .ok_or_else(|| CollectionError::not_found(name))?;
            EditOutcome::Deleted { citations }
        }
    };
    tracing::debug!(paper = name, ?outcome, "paper edited");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PaperCollection {
        [("Alpha", 3), ("Beta", 8), ("Gamma", 1)].into_iter().collect()
    }

    #[test]
    fn test_set_citations() {
        let mut papers = sample();
        let outcome = edit_paper(&mut papers, "Beta", EditAction::SetCitations(21)).unwrap();
        assert_eq!(
            outcome,
            EditOutcome::Updated {
                previous: 8,
                citations: 21
            }
        );
        assert_eq!(papers.get("Beta"), Some(21));
    }

    #[test]
    fn test_rename_trims_new_name() {
        let mut papers = sample();
        let outcome = edit_paper(&mut papers, "Gamma", EditAction::Rename("  Delta ".into())).unwrap();
        assert_eq!(
            outcome,
            EditOutcome::Renamed {
                from: "Gamma".into(),
                to: "Delta".into()
            }
        );
        assert_eq!(papers.names().collect::<Vec<_>>(), ["Alpha", "Beta", "Delta"]);
        assert_eq!(papers.get("Delta"), Some(1));
    }

    #[test]
    fn test_rename_collision_leaves_collection_unchanged() {
        let mut papers = sample();
        let err = edit_paper(&mut papers, "Alpha", EditAction::Rename("Beta".into())).unwrap_err();
        assert_eq!(err, CollectionError::NameTaken { name: "Beta".into() });
        assert_eq!(papers, sample());
    }

    #[test]
    fn test_delete() {
        let mut papers = sample();
        let outcome = edit_paper(&mut papers, "Alpha", EditAction::Delete).unwrap();
        assert_eq!(outcome, EditOutcome::Deleted { citations: 3 });
        assert_eq!(papers.names().collect::<Vec<_>>(), ["Beta", "Gamma"]);
    }

    #[test]
    fn test_missing_paper() {
        let mut papers = sample();
        for action in [
            EditAction::SetCitations(1),
            EditAction::Rename("X".into()),
            EditAction::Delete,
        ] {
            let err = edit_paper(&mut papers, "Omega", action).unwrap_err();
            assert_eq!(err, CollectionError::NotFound { name: "Omega".into() });
        }
        assert_eq!(papers, sample());
    }

    #[test]
    fn test_action_kind_from_str() {
        assert_eq!("edit".parse::<EditActionKind>().unwrap(), EditActionKind::Edit);
        assert_eq!("RENAME".parse::<EditActionKind>().unwrap(), EditActionKind::Rename);
        assert_eq!("Delete".parse::<EditActionKind>().unwrap(), EditActionKind::Delete);
        assert!("archive".parse::<EditActionKind>().is_err());
    }
}
