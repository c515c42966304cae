//! Report generation for column comparisons

mod html;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::diff::ColumnComparison;

pub use html::HtmlReport;

/// Trait for rendering a column comparison to a report document
pub trait ReportRenderer {
    /// Render the comparison for `source_name` (the input file's name) to a writer
    fn render(
        &self,
        comparison: &ColumnComparison,
        source_name: &str,
        writer: &mut dyn Write,
    ) -> Result<()>;
}

/// Report file path for an input file: `comparison_report_<basename>.html`
pub fn report_path(out_dir: &Path, source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    out_dir.join(format!("comparison_report_{}.html", stem))
}

/// Render a comparison and write it to disk, overwriting any existing report
pub fn write_report(
    renderer: &dyn ReportRenderer,
    comparison: &ColumnComparison,
    source: &Path,
    out_dir: &Path,
) -> Result<PathBuf> {
    let path = report_path(out_dir, source);
    let file = File::create(&path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let source_name = source
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    renderer.render(comparison, source_name, &mut writer)?;
    writer.flush()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_path() {
        let path = report_path(Path::new("."), Path::new("/data/orders.csv"));
        assert_eq!(path, Path::new("./comparison_report_orders.html"));
    }

    #[test]
    fn test_report_path_keeps_out_dir() {
        let path = report_path(Path::new("/tmp/reports"), Path::new("notes.txt"));
        assert_eq!(path, Path::new("/tmp/reports/comparison_report_notes.html"));
    }
}
