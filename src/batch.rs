//! Batch driver: apply the compare pipeline to every supported file in a directory

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::config::Config;
use crate::diff::ColumnComparator;
use crate::parser;
use crate::report::{write_report, HtmlReport, ReportRenderer};

/// Outcome counters for a batch run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    /// Files that produced a report
    pub processed: usize,
    /// Files that failed anywhere in the pipeline
    pub failed: usize,
}

impl BatchStats {
    pub fn total(&self) -> usize {
        self.processed + self.failed
    }
}

/// List supported files directly in a directory, in stable name order
pub fn list_candidates(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("Failed to read directory: {}", directory.display()))?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && parser::is_supported(path))
        .collect();

    candidates.sort();
    Ok(candidates)
}

/// Run one file through parse, compare, and report; returns the report path
pub fn process_file(path: &Path, config: &Config) -> Result<PathBuf> {
    let table = parser::parse_file(path)?;

    let comparator = ColumnComparator::new(
        config.columns,
        config.left_header.clone(),
        config.right_header.clone(),
    );
    let comparison = comparator.compare(&table)?;

    let renderer = HtmlReport::new();
    write_report(&renderer as &dyn ReportRenderer, &comparison, path, &config.out_dir)
}

/// Process every supported file in the configured directory.
///
/// A failure in one file is reported and counted; it never halts the rest of
/// the batch.
pub fn run_batch(config: &Config) -> Result<BatchStats> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    let mut stats = BatchStats::default();

    let candidates = list_candidates(&config.directory)?;

    if candidates.is_empty() {
        writeln!(stdout, "No supported files found in the directory.")?;
        writeln!(
            stdout,
            "Supported file types: {}",
            parser::SUPPORTED_EXTENSIONS
                .iter()
                .map(|e| format!(".{}", e))
                .collect::<Vec<_>>()
                .join(", ")
        )?;
        return Ok(stats);
    }

    writeln!(stdout, "Found {} files to process...", candidates.len())?;

    for path in &candidates {
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");
        writeln!(stdout)?;
        writeln!(stdout, "Processing {}...", name)?;

        match process_file(path, config) {
            Ok(report_path) => {
                stats.processed += 1;
                write_status(&mut stdout, Color::Green, "ok")?;
                writeln!(
                    stdout,
                    " HTML diff report generated: {}",
                    report_path.display()
                )?;
            }
            Err(e) => {
                stats.failed += 1;
                write_status(&mut stdout, Color::Red, "failed")?;
                writeln!(stdout, " Error processing file {}: {:#}", name, e)?;
            }
        }
    }

    writeln!(stdout)?;
    writeln!(stdout, "Processing complete!")?;
    writeln!(stdout, "Files processed successfully: {}", stats.processed)?;
    writeln!(stdout, "Files failed: {}", stats.failed)?;
    if stats.processed > 0 {
        writeln!(
            stdout,
            "Reports have been generated in {}",
            config.out_dir.display()
        )?;
    }

    Ok(stats)
}

fn write_status(stdout: &mut StandardStream, color: Color, label: &str) -> Result<()> {
    stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(stdout, "[{}]", label)?;
    stdout.reset()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::ColumnPair;
    use std::fs;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_list_candidates_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "b.csv", "a,b\n1,2\n");
        write_file(dir.path(), "a.txt", "a\tb\n1\t2\n");
        write_file(dir.path(), "skip.xlsx", "binary");
        fs::create_dir(dir.path().join("sub.csv")).unwrap();

        let candidates = list_candidates(dir.path()).unwrap();
        let names: Vec<_> = candidates
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.csv"]);
    }

    #[test]
    fn test_process_file_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let input = write_file(dir.path(), "orders.csv", "id,old,new\n1,abc,abd\n");

        let config = Config::new(dir.path().to_path_buf(), ColumnPair::new(2, 3))
            .with_out_dir(out.path().to_path_buf());
        let report = process_file(&input, &config).unwrap();

        assert_eq!(
            report.file_name().unwrap().to_str().unwrap(),
            "comparison_report_orders.html"
        );
        let html = fs::read_to_string(&report).unwrap();
        assert!(html.contains("<del"));
    }

    #[test]
    fn test_failure_does_not_halt_batch() {
        let dir = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        // good.csv has 3 columns; narrow.csv only 1, so columns 2,3 are out of range
        write_file(dir.path(), "good.csv", "id,old,new\n1,x,y\n");
        write_file(dir.path(), "narrow.csv", "only\nvalue\n");

        let config = Config::new(dir.path().to_path_buf(), ColumnPair::new(2, 3))
            .with_out_dir(out.path().to_path_buf());
        let stats = run_batch(&config).unwrap();

        assert_eq!(stats, BatchStats { processed: 1, failed: 1 });
        assert!(out.path().join("comparison_report_good.html").exists());
        assert!(!out.path().join("comparison_report_narrow.html").exists());
    }

    #[test]
    fn test_empty_directory_yields_zero_stats() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(dir.path().to_path_buf(), ColumnPair::new(1, 2));
        let stats = run_batch(&config).unwrap();
        assert_eq!(stats.total(), 0);
    }
}
