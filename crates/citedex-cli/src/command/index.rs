use std::{io::Write, path::PathBuf};

use citedex_core::{PaperCollection, count_above_thresholds, h_index, i10_index};

use crate::{config::Config, storage};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct IndexArg {
    /// Path to the paper list file (`Name|CitationCount` per line)
    list: PathBuf,
    /// Citation thresholds to count papers against (comma-separated)
    #[arg(long, value_delimiter = ',')]
    thresholds: Vec<u32>,
}

pub(crate) fn run(arg: &IndexArg, config: &Config) -> anyhow::Result<()> {
    let IndexArg { list, thresholds } = arg;

    let parsed = storage::load_papers(list)?;
    let thresholds = if thresholds.is_empty() {
        &config.default_thresholds
    } else {
        thresholds
    };
    write_indices(&mut std::io::stdout().lock(), &parsed.papers, thresholds)
}

fn write_indices<W>(out: &mut W, papers: &PaperCollection, thresholds: &[u32]) -> anyhow::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "Total Papers: {} | Total Citations: {}",
        papers.len(),
        papers.total_citations()
    )?;
    writeln!(out, "h-index: {}", h_index(papers))?;
    writeln!(out, "i10-index: {}", i10_index(papers))?;
    if !thresholds.is_empty() {
        writeln!(out, "\nCounts above thresholds:")?;
        for tc in count_above_thresholds(papers, thresholds) {
            writeln!(out, ">= {:>3}: {}", tc.threshold, tc.count)?;
        }
    }
    Ok(())
}
