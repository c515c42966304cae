//! Configuration handling for coldiff

use std::path::PathBuf;

use crate::diff::ColumnPair;

/// Configuration for a batch comparison run
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the input files
    pub directory: PathBuf,
    /// 1-based indices of the two columns to compare
    pub columns: ColumnPair,
    /// Report label for the left column
    pub left_header: String,
    /// Report label for the right column
    pub right_header: String,
    /// Directory reports are written to
    pub out_dir: PathBuf,
}

impl Config {
    /// Create a new Config with default headers and the current directory as output
    pub fn new(directory: PathBuf, columns: ColumnPair) -> Self {
        Self {
            directory,
            columns,
            left_header: format!("Column {}", columns.left),
            right_header: format!("Column {}", columns.right),
            out_dir: PathBuf::from("."),
        }
    }

    /// Set the report labels for both columns
    pub fn with_headers(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_header = left.into();
        self.right_header = right.into();
        self
    }

    /// Set the report output directory
    pub fn with_out_dir(mut self, out_dir: PathBuf) -> Self {
        self.out_dir = out_dir;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers_name_the_columns() {
        let config = Config::new(PathBuf::from("/data"), ColumnPair::new(2, 3));
        assert_eq!(config.left_header, "Column 2");
        assert_eq!(config.right_header, "Column 3");
        assert_eq!(config.out_dir, PathBuf::from("."));
    }

    #[test]
    fn test_builders() {
        let config = Config::new(PathBuf::from("/data"), ColumnPair::new(1, 2))
            .with_headers("Before", "After")
            .with_out_dir(PathBuf::from("/reports"));
        assert_eq!(config.left_header, "Before");
        assert_eq!(config.out_dir, PathBuf::from("/reports"));
    }
}
