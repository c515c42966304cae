//! Static HTML report output

use std::io::Write;

use anyhow::Result;

use crate::diff::{segments_to_html, ColumnComparison};

use super::ReportRenderer;

/// HTML report with one table row per compared data row
pub struct HtmlReport;

impl HtmlReport {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HtmlReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for HtmlReport {
    fn render(
        &self,
        comparison: &ColumnComparison,
        source_name: &str,
        writer: &mut dyn Write,
    ) -> Result<()> {
        writeln!(writer, "<html>")?;
        writeln!(writer, "<head>")?;
        writeln!(writer, "  <style>")?;
        writeln!(writer, "{}", CSS_STYLES)?;
        writeln!(writer, "  </style>")?;
        writeln!(writer, "</head>")?;
        writeln!(writer, "<body>")?;

        writeln!(writer, "  <h1>Comparison Report</h1>")?;
        writeln!(writer, "  <div class=\"file-info\">")?;
        writeln!(
            writer,
            "    <strong>File:</strong> {}",
            html_escape(source_name)
        )?;
        writeln!(writer, "  </div>")?;

        writeln!(writer, "  <table>")?;
        writeln!(writer, "    <tr>")?;
        writeln!(writer, "      <th>Row</th>")?;
        writeln!(writer, "      <th>{}</th>", html_escape(&comparison.left_header))?;
        writeln!(writer, "      <th>{}</th>", html_escape(&comparison.right_header))?;
        writeln!(writer, "      <th>Differences</th>")?;
        writeln!(writer, "    </tr>")?;

        for row in &comparison.rows {
            writeln!(writer, "    <tr>")?;
            writeln!(writer, "      <td>{}</td>", row.row)?;
            writeln!(writer, "      <td>{}</td>", html_escape(&row.left))?;
            writeln!(writer, "      <td>{}</td>", html_escape(&row.right))?;
            writeln!(
                writer,
                "      <td><pre>{}</pre></td>",
                segments_to_html(&row.segments)
            )?;
            writeln!(writer, "    </tr>")?;
        }

        writeln!(writer, "  </table>")?;
        writeln!(writer, "</body>")?;
        writeln!(writer, "</html>")?;

        Ok(())
    }
}

fn html_escape(s: impl AsRef<str>) -> String {
    s.as_ref()
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const CSS_STYLES: &str = r#"    body {
      font-family: Arial, sans-serif;
      margin: 20px;
    }
    h1 {
      color: #333;
      border-bottom: 2px solid #ddd;
      padding-bottom: 10px;
    }
    .file-info {
      background-color: #f8f9fa;
      padding: 10px;
      border-radius: 4px;
      margin-bottom: 20px;
    }
    table {
      width: 100%;
      border-collapse: collapse;
      margin-top: 20px;
    }
    th, td {
      border: 1px solid #dddddd;
      text-align: left;
      padding: 8px;
    }
    th {
      background-color: #f2f2f2;
    }
    tr:nth-child(even) {
      background-color: #f9f9f9;
    }
    pre {
      white-space: pre-wrap;
      word-wrap: break-word;
    }"#;
