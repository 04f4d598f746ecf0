//! Reading and writing paper lists and reports on disk.

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context;
use citedex_core::{
    PaperCollection,
    text_format::{self, ParsedPapers},
};

/// Reads a `Name|CitationCount` list file.
///
/// # Errors
///
/// Returns error if the file does not exist or cannot be read
pub fn load_papers<P>(path: P) -> anyhow::Result<ParsedPapers>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        anyhow::bail!("File does not exist: {}", path.display());
    }
    let file = File::open(path)
        .with_context(|| format!("Failed to open paper list: {}", path.display()))?;
    let parsed = text_format::read(BufReader::new(file))
        .with_context(|| format!("Failed to read paper list: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        papers = parsed.papers.len(),
        skipped = parsed.skipped_lines,
        "loaded paper list"
    );
    Ok(parsed)
}

/// Writes the collection to a list file, replacing any existing content.
pub fn save_papers<P>(path: P, papers: &PaperCollection) -> anyhow::Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create paper list: {}", path.display()))?;
    text_format::write(BufWriter::new(file), papers)
        .with_context(|| format!("Failed to write paper list: {}", path.display()))?;

    tracing::info!(path = %path.display(), papers = papers.len(), "saved paper list");
    Ok(())
}

/// Writes a rendered summary report, replacing any existing content.
pub fn save_summary<P>(path: P, report: &str) -> anyhow::Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut file = BufWriter::new(
        File::create(path)
            .with_context(|| format!("Failed to create summary file: {}", path.display()))?,
    );
    file.write_all(report.as_bytes())
        .and_then(|()| file.flush())
        .with_context(|| format!("Failed to write summary file: {}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = report.len(), "saved summary report");
    Ok(())
}

/// Reads a whole text file, naming `file_kind` in the error message.
pub fn read_text_file<P>(file_kind: &str, path: P) -> anyhow::Result<String>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file: {}", file_kind, path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        let papers: PaperCollection = [("Attention", 90_000), ("Obscure Note", 0)]
            .into_iter()
            .collect();

        save_papers(&path, &papers).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Attention|90000\nObscure Note|0\n"
        );

        let loaded = load_papers(&path).unwrap();
        assert_eq!(loaded.papers, papers);
        assert_eq!(loaded.skipped_lines, 0);
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        fs::write(&path, "old|1\nstale|2\nlines|3\n").unwrap();

        let papers: PaperCollection = [("new", 4)].into_iter().collect();
        save_papers(&path, &papers).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new|4\n");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_papers(dir.path().join("absent.txt")).unwrap_err();
        assert!(err.to_string().starts_with("File does not exist"));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/list.txt");
        let err = save_papers(&path, &PaperCollection::new()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to create paper list"));
    }

    #[test]
    fn test_save_summary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.txt");
        save_summary(&path, "report body").unwrap();
        assert_eq!(read_text_file("summary", &path).unwrap(), "report body");
    }
}
