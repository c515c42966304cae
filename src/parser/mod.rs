//! Parser layer for reading delimited text files

mod delimited;

use std::path::Path;

use thiserror::Error;

use crate::model::Table;

pub use delimited::parse_delimited;

/// File extensions the batch driver will pick up
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "tsv", "txt"];

/// Errors raised while loading a file into a [`Table`]
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to read file")]
    Io(#[from] std::io::Error),

    #[error("malformed delimited content")]
    Malformed(#[from] csv::Error),
}

/// Check whether a path has one of the supported extensions (case-insensitive)
pub fn is_supported(path: &Path) -> bool {
    extension_of(path)
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Parse a delimited file into a [`Table`], choosing the delimiter by extension.
///
/// `.csv` is comma-delimited and `.tsv` tab-delimited. For `.txt` the file is
/// first parsed as tab-delimited; if that fails or yields a single column, it
/// is re-parsed as comma-delimited.
pub fn parse_file(path: &Path) -> Result<Table, ParseError> {
    let ext = extension_of(path)
        .ok_or_else(|| ParseError::UnsupportedFormat(display_extension(path)))?;

    let text = delimited::read_decoded(path)?;

    match ext.as_str() {
        "csv" => parse_delimited(&text, b','),
        "tsv" => parse_delimited(&text, b'\t'),
        "txt" => match parse_delimited(&text, b'\t') {
            Ok(table) if table.column_count() > 1 => Ok(table),
            _ => parse_delimited(&text, b','),
        },
        _ => Err(ParseError::UnsupportedFormat(display_extension(path))),
    }
}

fn display_extension(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!(".{}", ext),
        None => "(no extension)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_supported() {
        assert!(is_supported(Path::new("data.csv")));
        assert!(is_supported(Path::new("data.TSV")));
        assert!(is_supported(Path::new("notes.txt")));
        assert!(!is_supported(Path::new("sheet.xlsx")));
        assert!(!is_supported(Path::new("README")));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.parquet");
        fs::write(&path, "a,b\n1,2\n").unwrap();

        let err = parse_file(&path).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedFormat(_)));
        assert!(err.to_string().contains(".parquet"));
    }

    #[test]
    fn test_csv_parses_by_comma() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "a,b,c\n1,2,3\n4,5,6\n").unwrap();

        let table = parse_file(&path).unwrap();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_txt_prefers_tabs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, "a\tb\n1\t2\n").unwrap();

        let table = parse_file(&path).unwrap();
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_txt_falls_back_to_comma() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, "a,b\n1,2\n").unwrap();

        let table = parse_file(&path).unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.columns[1].name, "b");
    }

    #[test]
    fn test_non_utf8_falls_back_to_windows_1252() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin.csv");
        // "café" in Windows-1252: 0xE9 is not valid UTF-8
        fs::write(&path, b"name,place\ncaf\xE9,Paris\n").unwrap();

        let table = parse_file(&path).unwrap();
        assert_eq!(table.rows[0].cells[0].display(), "café");
    }
}
