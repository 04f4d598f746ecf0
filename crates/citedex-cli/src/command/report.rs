use std::path::PathBuf;

use chrono::{DateTime, Utc};
use citedex_core::SummaryReport;
use serde::Serialize;

use crate::{config::Config, storage, util::Output};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    /// Path to the paper list file (`Name|CitationCount` per line)
    list: PathBuf,
    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: ReportFormat,
    /// Output file path (stdout if omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

/// Summary report with provenance, as written in JSON mode.
#[derive(Debug, Clone, Serialize)]
struct ReportDocument<'a> {
    generated_at: DateTime<Utc>,
    source: &'a PathBuf,
    #[serde(flatten)]
    report: &'a SummaryReport,
}

pub(crate) fn run(arg: &ReportArg, config: &Config) -> anyhow::Result<()> {
    let ReportArg {
        list,
        format,
        output,
    } = arg;

    let parsed = storage::load_papers(list)?;
    if parsed.skipped_lines > 0 {
        tracing::warn!(
            skipped = parsed.skipped_lines,
            "skipped malformed lines in {}",
            list.display()
        );
    }
    let report = SummaryReport::new(&parsed.papers, config.outlier_sigma)
        .map_err(|err| anyhow::anyhow!("{err}: {} has no papers", list.display()))?;

    let mut out = Output::from_output_path(output.clone())?;
    match format {
        ReportFormat::Text => out.write_text(&report.to_string())?,
        ReportFormat::Json => out.write_json(&ReportDocument {
            generated_at: Utc::now(),
            source: list,
            report: &report,
        })?,
    }

    if let Some(path) = output {
        eprintln!("Summary report saved to '{}'", path.display());
    }
    Ok(())
}
