//! Pipe-delimited paper list format.
//!
//! One paper per line, `Name|CitationCount`, no header. Lines without a `|`
//! and lines whose count is not a non-negative base-10 integer are skipped
//! when reading.

use std::io::{self, BufRead, Write};

use crate::PaperCollection;

const SEPARATOR: char = '|';

/// Result of reading a paper list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPapers {
    pub papers: PaperCollection,
    /// Non-blank lines that could not be read as a paper.
    pub skipped_lines: usize,
}

/// Parses a single line into a name and citation count.
///
/// Trailing whitespace is stripped and the line is split at the first `|`.
/// The name is returned as written; [`PaperCollection::insert`] trims it.
#[must_use]
pub fn parse_line(line: &str) -> Option<(&str, u32)> {
    let (name, citations) = line.trim_end().split_once(SEPARATOR)?;
    if citations.is_empty() || !citations.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let citations = citations.parse().ok()?;
    Some((name, citations))
}

impl ParsedPapers {
    fn push_line(&mut self, line_no: usize, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        let inserted = parse_line(line)
            .is_some_and(|(name, citations)| self.papers.insert(name, citations).is_ok());
        if !inserted {
            tracing::debug!(line_no, line, "skipping malformed paper line");
            self.skipped_lines += 1;
        }
    }
}

/// Reads a paper list. Later lines overwrite earlier lines with the same name.
pub fn read<R>(reader: R) -> io::Result<ParsedPapers>
where
    R: BufRead,
{
    let mut parsed = ParsedPapers::default();
    for (line_no, line) in (1..).zip(reader.lines()) {
        parsed.push_line(line_no, &line?);
    }
    Ok(parsed)
}

/// Parses a paper list held in memory.
#[must_use]
pub fn parse_str(s: &str) -> ParsedPapers {
    let mut parsed = ParsedPapers::default();
    for (line_no, line) in (1..).zip(s.lines()) {
        parsed.push_line(line_no, line);
    }
    parsed
}

/// Writes every paper in collection order, one `Name|CitationCount` per line.
pub fn write<W>(mut writer: W, papers: &PaperCollection) -> io::Result<()>
where
    W: Write,
{
    for paper in papers {
        writeln!(writer, "{}{SEPARATOR}{}", paper.name, paper.citations)?;
    }
    writer.flush()
}

/// Renders a paper list as a string.
#[must_use]
pub fn to_string(papers: &PaperCollection) -> String {
    papers
        .iter()
        .map(|p| format!("{}{SEPARATOR}{}\n", p.name, p.citations))
        .collect()
}
