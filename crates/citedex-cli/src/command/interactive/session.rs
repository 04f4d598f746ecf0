//! Menu-driven session over a paper collection.

use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use citedex_core::{
    CitationStats, CollectionError, EditAction, EditActionKind, PaperCollection, SummaryReport,
    count_above_thresholds, edit_paper, format_mean, format_median, h_index, i10_index,
    range_filter, summary_report_text, top_n, zero_citation_papers,
};

use super::console::Console;
use crate::{config::Config, storage};

const WIDTH: usize = 60;
const STATS_MENU_EXIT: u32 = 17;

pub(crate) struct Session<R, W> {
    console: Console<R, W>,
    papers: PaperCollection,
    config: Config,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub(crate) fn new(input: R, output: W, papers: PaperCollection, config: Config) -> Self {
        Self {
            console: Console::new(input, output),
            papers,
            config,
        }
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (PaperCollection, W) {
        (self.papers, self.console.into_output())
    }

    /// Runs the whole session: banner, optional initial load, entry, index
    /// menu, statistics menu.
    pub(crate) fn run(&mut self, initial_load: Option<&Path>) -> anyhow::Result<()> {
        self.divider('=')?;
        writeln!(
            self.console.out(),
            "{:^WIDTH$}",
            "RESEARCH INDEX & STATS PROGRAM"
        )?;
        self.divider('=')?;
        if let Some(path) = initial_load {
            self.load_from(path)?;
        }

        self.enter_papers()?;
        if self.papers.is_empty() {
            writeln!(self.console.out(), "\nNo papers entered. Exiting program.\n")?;
            return Ok(());
        }

        self.index_menu()?;
        self.statistics_menu()
    }

    fn divider(&mut self, ch: char) -> anyhow::Result<()> {
        writeln!(self.console.out(), "{}", ch.to_string().repeat(WIDTH))?;
        Ok(())
    }

    fn enter_papers(&mut self) -> anyhow::Result<()> {
        writeln!(
            self.console.out(),
            "\nEnter paper names and citations. Type 'done' when finished.\n"
        )?;
        let mut sequence = 1;
        loop {
            let name = self.console.line(&format!("Paper name [{sequence}]: "))?;
            if name.eq_ignore_ascii_case("done") {
                break;
            }
            let name = if name.is_empty() {
                PaperCollection::auto_name(sequence)
            } else {
                name
            };
            let citations = self
                .console
                .int(&format!("Citations for '{name}': "), Some(0), None)?;
            if let Err(err) = self.papers.insert(name, citations) {
                writeln!(self.console.out(), "Error: {err}.")?;
                continue;
            }
            sequence += 1;
        }
        Ok(())
    }

    fn index_menu(&mut self) -> anyhow::Result<()> {
        self.divider('=')?;
        let (len, total) = (self.papers.len(), self.papers.total_citations());
        writeln!(
            self.console.out(),
            "Total Papers: {len} | Total Citations: {total}\n"
        )?;
        if self.papers.is_empty() {
            writeln!(self.console.out(), "No papers entered.\n")?;
            return Ok(());
        }
        writeln!(self.console.out(), "Select Index to Calculate:")?;
        writeln!(self.console.out(), "1: h-index")?;
        writeln!(self.console.out(), "2: i10-index")?;
        writeln!(self.console.out(), "3: Both")?;

        let h = h_index(&self.papers);
        let i10 = i10_index(&self.papers);
        let out = match self.console.int("Enter 1, 2, or 3: ", Some(1), Some(3))? {
            1 => format!("h-index: {h}\n"),
            2 => format!("i10-index: {i10}\n"),
            _ => format!("h-index: {h}\ni10-index: {i10}\n"),
        };
        writeln!(self.console.out(), "{out}")?;
        Ok(())
    }

    fn print_statistics_menu(&mut self) -> anyhow::Result<()> {
        self.divider('=')?;
        writeln!(self.console.out(), "{:^WIDTH$}", "STATISTICS & FILTERS MENU")?;
        self.divider('=')?;
        let out = self.console.out();
        writeln!(
            out,
            " 1: Max Citations         2: Min Citations          3: Max & Min"
        )?;
        writeln!(
            out,
            " 4: Average               5: Median                6: Zero-Citation Papers"
        )?;
        writeln!(out, " 7: Papers Above Thresholds (Custom)")?;
        writeln!(out, " 8: Citation Range Filter")?;
        writeln!(out, " 9: Top N Most Cited Papers")?;
        writeln!(out, "10: Full Summary Report")?;
        writeln!(out, "11: Export Citation List")?;
        writeln!(out, "12: Export Summary Report")?;
        writeln!(out, "13: Edit/Delete Papers")?;
        writeln!(out, "14: Load Citations From File")?;
        writeln!(out, "15: Save Citations To File")?;
        writeln!(out, "16: Detect Outliers")?;
        writeln!(out, "17: Exit\n")?;
        Ok(())
    }

    fn statistics_menu(&mut self) -> anyhow::Result<()> {
        loop {
            self.print_statistics_menu()?;
            let choice = self
                .console
                .int("Enter choice (1-17): ", Some(1), Some(STATS_MENU_EXIT))?;

            match choice {
                1..=5 => self.show_basic_stat(choice)?,
                6 => self.show_zero_citation()?,
                7 => self.show_threshold_counts()?,
                8 => self.show_range_filter()?,
                9 => self.show_top_n()?,
                10 => {
                    let text = summary_report_text(&self.papers, self.config.outlier_sigma);
                    writeln!(self.console.out(), "{text}\n")?;
                }
                11 => self.export_list()?,
                12 => self.export_summary()?,
                13 => self.edit_paper()?,
                14 => self.load_file()?,
                15 => {
                    let path = self.ask_path(
                        "\nEnter filename to save citations",
                        &self.config.list_file.clone(),
                    )?;
                    self.save_list(path)?;
                }
                16 => self.show_outliers()?,
                _ => {
                    writeln!(self.console.out(), "Exiting statistics menu...\n")?;
                    return Ok(());
                }
            }

            if !self.console.yes_no("Continue in statistics menu? (y/n): ")? {
                writeln!(self.console.out(), "Exiting statistics menu...\n")?;
                return Ok(());
            }
        }
    }

    fn show_basic_stat(&mut self, choice: u32) -> anyhow::Result<()> {
        let stats = match CitationStats::from_collection(&self.papers) {
            Ok(stats) => stats,
            Err(err) => {
                tracing::debug!(%err, "statistics requested on empty collection");
                writeln!(self.console.out(), "\nNo papers available.\n")?;
                return Ok(());
            }
        };
        let line = match choice {
            1 => format!("Max Citations: {}", stats.max),
            2 => format!("Min Citations: {}", stats.min),
            3 => format!("Max: {} | Min: {}", stats.max, stats.min),
            4 => format!("Average Citations: {}", format_mean(stats.mean)),
            _ => format!(
                "Median Citations: {}",
                format_median(stats.median, stats.total_papers)
            ),
        };
        writeln!(self.console.out(), "\n{line}\n")?;
        Ok(())
    }

    fn show_zero_citation(&mut self) -> anyhow::Result<()> {
        let zero = zero_citation_papers(&self.papers);
        let list = if zero.is_empty() {
            "None".to_owned()
        } else {
            zero.join(", ")
        };
        writeln!(self.console.out(), "\nZero-Citation Papers: {list}\n")?;
        Ok(())
    }

    fn show_threshold_counts(&mut self) -> anyhow::Result<()> {
        let example = self
            .config
            .default_thresholds
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let answer = self.console.line(&format!(
            "\nEnter thresholds separated by commas (e.g., {example}): "
        ))?;
        let thresholds = if answer.is_empty() {
            self.config.default_thresholds.clone()
        } else {
            parse_thresholds(&answer)
        };

        let counts = count_above_thresholds(&self.papers, &thresholds);
        let out = self.console.out();
        writeln!(out, "\nCounts above thresholds:")?;
        for tc in counts {
            writeln!(out, ">= {:>3}: {}", tc.threshold, tc.count)?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn show_range_filter(&mut self) -> anyhow::Result<()> {
        let low = self.console.int("\nEnter minimum citation: ", Some(0), None)?;
        let high = self
            .console
            .int("Enter maximum citation: ", Some(low), None)?;
        let filtered = range_filter(&self.papers, low, high);
        self.print_paper_list(&filtered, &format!("Papers with citations {low}-{high}"))
    }

    fn show_top_n(&mut self) -> anyhow::Result<()> {
        let n = self.console.int("\nEnter N for Top N papers: ", Some(1), None)?;
        let top = top_n(&self.papers, n as usize);
        self.print_paper_list(&top, &format!("Top {n} Most Cited Papers"))
    }

    fn show_outliers(&mut self) -> anyhow::Result<()> {
        writeln!(self.console.out(), "\nOutlier Information:")?;
        match SummaryReport::new(&self.papers, self.config.outlier_sigma) {
            Ok(report) => {
                writeln!(self.console.out(), "{}", report.high_outliers_line())?;
                writeln!(self.console.out(), "{}", report.low_outliers_line())?;
            }
            Err(_) => writeln!(self.console.out(), "No papers available.")?,
        }
        writeln!(self.console.out())?;
        Ok(())
    }

    fn print_paper_list(&mut self, papers: &PaperCollection, title: &str) -> anyhow::Result<()> {
        if papers.is_empty() {
            writeln!(self.console.out(), "\n{title}: No papers to display.\n")?;
            return Ok(());
        }
        self.divider('=')?;
        writeln!(self.console.out(), "{title:^WIDTH$}")?;
        self.divider('=')?;
        writeln!(
            self.console.out(),
            "{:<5} {:<35} {:>10}",
            "S.No",
            "Paper Name",
            "Citations"
        )?;
        self.divider('-')?;
        for (i, paper) in papers.iter().enumerate() {
            writeln!(
                self.console.out(),
                "{:<5} {:<35} {:>10}",
                i + 1,
                paper.name,
                paper.citations
            )?;
        }
        self.divider('=')?;
        writeln!(self.console.out())?;
        Ok(())
    }

    /// Asks for a file name, falling back to `default` on a blank answer.
    fn ask_path(&mut self, prompt: &str, default: &Path) -> anyhow::Result<PathBuf> {
        let answer = self
            .console
            .line(&format!("{prompt} (e.g., {}): ", default.display()))?;
        Ok(if answer.is_empty() {
            default.to_path_buf()
        } else {
            PathBuf::from(answer)
        })
    }

    fn save_list(&mut self, path: PathBuf) -> anyhow::Result<()> {
        match storage::save_papers(&path, &self.papers) {
            Ok(()) => writeln!(
                self.console.out(),
                "Papers saved to '{}' successfully.\n",
                path.display()
            )?,
            Err(err) => {
                tracing::warn!(path = %path.display(), "{err:#}");
                writeln!(self.console.out(), "Error saving file: {err:#}\n")?;
            }
        }
        Ok(())
    }

    fn export_list(&mut self) -> anyhow::Result<()> {
        if !self
            .console
            .yes_no("\nDo you want to save the citation list to TXT? (y/n): ")?
        {
            return Ok(());
        }
        let path = self.ask_path("Enter filename", &self.config.list_file.clone())?;
        self.save_list(path)
    }

    fn export_summary(&mut self) -> anyhow::Result<()> {
        if !self
            .console
            .yes_no("\nDo you want to save the summary report to TXT? (y/n): ")?
        {
            return Ok(());
        }
        let path = self.ask_path("Enter filename", &self.config.summary_file.clone())?;
        let text = summary_report_text(&self.papers, self.config.outlier_sigma);
        match storage::save_summary(&path, &text) {
            Ok(()) => writeln!(
                self.console.out(),
                "Summary report saved to '{}' successfully.\n",
                path.display()
            )?,
            Err(err) => {
                tracing::warn!(path = %path.display(), "{err:#}");
                writeln!(self.console.out(), "Error saving summary: {err:#}\n")?;
            }
        }
        Ok(())
    }

    fn load_file(&mut self) -> anyhow::Result<()> {
        let path = self.ask_path(
            "\nEnter filename to load citations from",
            &self.config.list_file.clone(),
        )?;
        self.load_from(&path)
    }

    /// Merges a list file into the collection, leaving it untouched on error.
    fn load_from(&mut self, path: &Path) -> anyhow::Result<()> {
        match storage::load_papers(path) {
            Ok(parsed) => {
                self.papers.merge(parsed.papers);
                writeln!(
                    self.console.out(),
                    "Papers loaded from '{}' successfully.",
                    path.display()
                )?;
                if parsed.skipped_lines > 0 {
                    writeln!(
                        self.console.out(),
                        "Skipped {} malformed line(s).",
                        parsed.skipped_lines
                    )?;
                }
                writeln!(self.console.out())?;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "{err:#}");
                writeln!(self.console.out(), "Error loading file: {err:#}\n")?;
            }
        }
        Ok(())
    }

    fn edit_paper(&mut self) -> anyhow::Result<()> {
        if self.papers.is_empty() {
            writeln!(self.console.out(), "No papers to edit.\n")?;
            return Ok(());
        }
        let current = self.papers.clone();
        self.print_paper_list(&current, "Current Papers")?;

        let name = self.console.line("Enter the paper name to edit/delete: ")?;
        if !self.papers.contains(&name) {
            writeln!(self.console.out(), "Paper not found.\n")?;
            return Ok(());
        }
        let answer = self
            .console
            .line("Enter 'edit', 'rename', or 'delete': ")?;
        let Ok(kind) = answer.parse::<EditActionKind>() else {
            writeln!(self.console.out(), "Invalid action.\n")?;
            return Ok(());
        };

        let (action, success) = match kind {
            EditActionKind::Edit => {
                let citations = self.console.int(
                    &format!("Enter new citation count for '{name}': "),
                    Some(0),
                    None,
                )?;
                (EditAction::SetCitations(citations), "Updated successfully.")
            }
            EditActionKind::Rename => {
                let new_name = self.console.line("Enter new name: ")?;
                if new_name.is_empty() {
                    return Ok(());
                }
                (EditAction::Rename(new_name), "Renamed successfully.")
            }
            EditActionKind::Delete => (EditAction::Delete, "Deleted successfully."),
        };

        match edit_paper(&mut self.papers, &name, action) {
            Ok(_) => writeln!(self.console.out(), "{success}\n")?,
            Err(CollectionError::NotFound { .. }) => {
                writeln!(self.console.out(), "Paper not found.\n")?;
            }
            Err(err) => writeln!(self.console.out(), "Error: {err}.\n")?,
        }
        Ok(())
    }
}

/// Parses comma-separated thresholds, ignoring tokens that are not
/// non-negative integers.
fn parse_thresholds(input: &str) -> Vec<u32> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|t| t.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Cursor};

    use super::*;
    use crate::command::interactive::console::InputClosed;

    fn run_script(papers: PaperCollection, config: Config, script: &str) -> (PaperCollection, String) {
        run_script_with_load(papers, config, script, None)
    }

    fn run_script_with_load(
        papers: PaperCollection,
        config: Config,
        script: &str,
        initial_load: Option<&Path>,
    ) -> (PaperCollection, String) {
        let mut session = Session::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            papers,
            config,
        );
        match session.run(initial_load) {
            Ok(()) => {}
            Err(err) => assert!(err.downcast_ref::<InputClosed>().is_some(), "{err:#}"),
        }
        let (papers, out) = session.into_parts();
        (papers, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_thresholds() {
        assert_eq!(parse_thresholds("10, 25,abc,,-3, 50 "), [10, 25, 50]);
        assert!(parse_thresholds("x,y").is_empty());
    }

    #[test]
    fn test_no_papers_entered() {
        let (papers, out) = run_script(PaperCollection::new(), Config::default(), "done\n");
        assert!(papers.is_empty());
        assert!(out.contains("No papers entered. Exiting program."));
        assert!(!out.contains("Select Index"));
    }

    #[test]
    fn test_entry_auto_names_and_index_menu() {
        let script = "\
Deep Learning
10
oops
10

10
Short Note
1
DONE
3
17
";
        let (papers, out) = run_script(PaperCollection::new(), Config::default(), script);

        assert_eq!(
            papers.names().collect::<Vec<_>>(),
            ["Deep Learning", "oops", "Paper 3", "Short Note"]
        );
        assert!(out.contains("Citations for 'Paper 3': "));
        assert!(out.contains("Total Papers: 4 | Total Citations: 31"));
        assert!(out.contains("h-index: 3\ni10-index: 3"));
        assert!(out.contains("Exiting statistics menu..."));
    }

    #[test]
    fn test_entry_rejects_separator_in_name() {
        let script = "A|B\n4\nAB\n4\n\n2\ndone\n3\n17\n";
        let (papers, out) = run_script(PaperCollection::new(), Config::default(), script);

        assert_eq!(papers.names().collect::<Vec<_>>(), ["AB", "Paper 2"]);
        assert!(out.contains("Error: paper name must not contain '|' or line breaks: \"A|B\"."));
    }

    #[test]
    fn test_invalid_menu_input_reprompts() {
        let script = "A\n5\ndone\n9\nx\n1\n1\nn\n";
        let (_, out) = run_script(PaperCollection::new(), Config::default(), script);
        assert!(out.contains("Value must be between 1 and 3."));
        assert!(out.contains("Invalid input. Enter a positive integer."));
        assert!(out.contains("h-index: 1"));
        assert!(out.contains("Max Citations: 5"));
    }

    #[test]
    fn test_statistics_choices() {
        let papers: PaperCollection = [("P1", 0), ("P2", 0), ("P3", 100)].into_iter().collect();
        let script = "done\n1\n4\ny\n5\ny\n6\ny\n7\n5, 50,junk\ny\n8\n0\n0\ny\n9\n1\ny\n16\nn\n";
        let (_, out) = run_script(papers, Config::default(), script);

        assert!(out.contains("Average Citations: 33.33"));
        assert!(out.contains("Median Citations: 0"));
        assert!(out.contains("Zero-Citation Papers: P1, P2"));
        assert!(out.contains(">=   5: 1\n>=  50: 1\n"));
        assert!(out.contains("Papers with citations 0-0"));
        assert!(out.contains("Top 1 Most Cited Papers"));
        assert!(out.contains("High Outliers (>2σ): None"));
        assert!(out.contains("Low Outliers (<2σ) : None"));
    }

    #[test]
    fn test_edit_rename_delete() {
        let papers: PaperCollection = [("Alpha", 3), ("Beta", 8), ("Gamma", 1)]
            .into_iter()
            .collect();
        let script = "\
done
1
13
Alpha
edit
30
y
13
Gamma
rename
Beta
y
13
Gamma
rename
Delta
y
13
Beta
delete
y
13
Nope
y
13
Alpha
archive
n
";
        let (papers, out) = run_script(papers, Config::default(), script);

        assert_eq!(papers.names().collect::<Vec<_>>(), ["Alpha", "Delta"]);
        assert_eq!(papers.get("Alpha"), Some(30));
        assert!(out.contains("Updated successfully."));
        assert!(out.contains("Error: a paper named 'Beta' already exists."));
        assert!(out.contains("Renamed successfully."));
        assert!(out.contains("Deleted successfully."));
        assert!(out.contains("Paper not found."));
        assert!(out.contains("Invalid action."));
    }

    #[test]
    fn test_empty_after_delete_guards_statistics() {
        let papers: PaperCollection = [("Only", 4)].into_iter().collect();
        let script = "done\n1\n13\nOnly\ndelete\ny\n1\ny\n10\ny\n13\nn\n";
        let (papers, out) = run_script(papers, Config::default(), script);

        assert!(papers.is_empty());
        assert!(out.contains("\nNo papers available.\n"));
        assert!(out.contains("No papers to edit."));
    }

    #[test]
    fn test_save_and_load_files() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("list.txt");
        let summary = dir.path().join("summary.txt");
        let extra = dir.path().join("extra.txt");
        fs::write(&extra, "Gamma|7\nBeta|2\nbroken\n").unwrap();

        let papers: PaperCollection = [("Alpha", 12), ("Beta", 8)].into_iter().collect();
        let script = format!(
            "done\n1\n11\ny\n{list}\ny\n12\ny\n{summary}\ny\n14\n{extra}\ny\n14\n{missing}\ny\n15\n\nn\n",
            list = list.display(),
            summary = summary.display(),
            extra = extra.display(),
            missing = dir.path().join("missing.txt").display(),
        );
        let config = Config {
            list_file: dir.path().join("default.txt"),
            ..Config::default()
        };
        let (papers, out) = run_script(papers, config, &script);

        assert_eq!(fs::read_to_string(&list).unwrap(), "Alpha|12\nBeta|8\n");
        let summary = fs::read_to_string(&summary).unwrap();
        assert!(summary.contains("h-index            : 2"));
        assert!(summary.contains("Median Citations   : 10.0"));
        assert_eq!(papers.names().collect::<Vec<_>>(), ["Alpha", "Beta", "Gamma"]);
        assert_eq!(papers.get("Beta"), Some(2));
        assert!(out.contains("Skipped 1 malformed line(s)."));
        assert!(out.contains("Error loading file: File does not exist"));
        assert_eq!(
            fs::read_to_string(dir.path().join("default.txt")).unwrap(),
            "Alpha|12\nBeta|2\nGamma|7\n"
        );
    }

    #[test]
    fn test_initial_load_follows_banner() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("start.txt");
        fs::write(&list, "Seed|9\n").unwrap();

        let (papers, out) = run_script_with_load(
            PaperCollection::new(),
            Config::default(),
            "Extra\n1\ndone\n3\n17\n",
            Some(&list),
        );

        assert_eq!(papers.names().collect::<Vec<_>>(), ["Seed", "Extra"]);
        let banner = out.find("RESEARCH INDEX & STATS PROGRAM").unwrap();
        let loaded = out.find("Papers loaded from").unwrap();
        let entry = out.find("Paper name [1]").unwrap();
        assert!(banner < loaded && loaded < entry, "{out}");
    }

    #[test]
    fn test_eof_ends_session() {
        let (papers, _) = run_script(PaperCollection::new(), Config::default(), "A\n3\n");
        assert_eq!(papers.get("A"), Some(3));
    }
}
