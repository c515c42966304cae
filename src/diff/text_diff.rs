//! Character-level text diffing between two cell values

use similar::{ChangeTag, TextDiff};

/// A single diff operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOp {
    Equal,
    Insert,
    Delete,
}

/// A coalesced run of characters sharing one diff operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    pub op: DiffOp,
    pub text: String,
}

impl DiffSegment {
    pub fn new(op: DiffOp, text: impl Into<String>) -> Self {
        Self {
            op,
            text: text.into(),
        }
    }
}

/// Compute a character diff between two strings.
///
/// Consecutive changes with the same tag are merged into a single segment, so
/// the result is a small set of coherent fragments rather than one entry per
/// character.
pub fn diff_text(left: &str, right: &str) -> Vec<DiffSegment> {
    let diff = TextDiff::from_chars(left, right);
    let mut segments: Vec<DiffSegment> = Vec::new();

    for change in diff.iter_all_changes() {
        let op = match change.tag() {
            ChangeTag::Equal => DiffOp::Equal,
            ChangeTag::Insert => DiffOp::Insert,
            ChangeTag::Delete => DiffOp::Delete,
        };

        match segments.last_mut() {
            Some(last) if last.op == op => last.text.push_str(change.value()),
            _ => segments.push(DiffSegment::new(op, change.value())),
        }
    }

    segments
}

/// Serialize diff segments to an HTML fragment.
///
/// Equal runs become plain `<span>`s, insertions `<ins>` and deletions `<del>`
/// with inline background colors. Newlines are rendered visibly as a pilcrow
/// plus `<br>`.
pub fn segments_to_html(segments: &[DiffSegment]) -> String {
    let mut html = String::new();

    for segment in segments {
        let text = escape_html(&segment.text).replace('\n', "&para;<br>");
        match segment.op {
            DiffOp::Equal => {
                html.push_str("<span>");
                html.push_str(&text);
                html.push_str("</span>");
            }
            DiffOp::Insert => {
                html.push_str("<ins style=\"background:#e6ffe6;\">");
                html.push_str(&text);
                html.push_str("</ins>");
            }
            DiffOp::Delete => {
                html.push_str("<del style=\"background:#ffe6e6;\">");
                html.push_str(&text);
                html.push_str("</del>");
            }
        }
    }

    html
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
