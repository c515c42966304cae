//! Diff engine for comparing two columns of a table

mod text_diff;

use std::str::FromStr;

use thiserror::Error;

use crate::model::Table;

pub use text_diff::{diff_text, segments_to_html, DiffOp, DiffSegment};

/// A pair of 1-based column indices selecting which columns to compare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnPair {
    pub left: usize,
    pub right: usize,
}

impl ColumnPair {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// Check both indices against the table width
    pub fn validate(&self, table: &Table) -> Result<(), CompareError> {
        let width = table.column_count();
        let in_range = |idx: usize| idx >= 1 && idx <= width;
        if !in_range(self.left) || !in_range(self.right) {
            return Err(CompareError::ColumnsOutOfRange {
                left: self.left,
                right: self.right,
                width,
            });
        }
        Ok(())
    }
}

impl FromStr for ColumnPair {
    type Err = String;

    /// Parse a pair from user input like `2,3`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',').map(str::trim);
        let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(format!("expected two comma-separated indices, got '{}'", s));
        };
        let left = a
            .parse::<usize>()
            .map_err(|_| format!("invalid column index '{}'", a))?;
        let right = b
            .parse::<usize>()
            .map_err(|_| format!("invalid column index '{}'", b))?;
        Ok(ColumnPair::new(left, right))
    }
}

/// Errors raised while comparing columns
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("columns {left} or {right} do not exist in file (file has {width} columns)")]
    ColumnsOutOfRange {
        left: usize,
        right: usize,
        width: usize,
    },
}

/// Diff of one row's pair of cells
#[derive(Debug)]
pub struct RowDiff {
    /// Data row number (1-based, header excluded)
    pub row: usize,
    /// Left cell as text
    pub left: String,
    /// Right cell as text
    pub right: String,
    /// Coalesced diff segments between the two texts
    pub segments: Vec<DiffSegment>,
}

impl RowDiff {
    /// True when the two cells carry the same text
    pub fn is_identical(&self) -> bool {
        self.segments.iter().all(|s| s.op == DiffOp::Equal)
    }
}

/// Result of comparing two columns across all rows of a table
#[derive(Debug)]
pub struct ColumnComparison {
    /// Report label for the left column
    pub left_header: String,
    /// Report label for the right column
    pub right_header: String,
    /// One entry per data row, in source order
    pub rows: Vec<RowDiff>,
}

impl ColumnComparison {
    /// Number of rows whose cells differ
    pub fn differing_rows(&self) -> usize {
        self.rows.iter().filter(|r| !r.is_identical()).count()
    }

    pub fn has_differences(&self) -> bool {
        self.rows.iter().any(|r| !r.is_identical())
    }
}

/// Compares two columns of a table row by row
pub struct ColumnComparator {
    pair: ColumnPair,
    left_header: String,
    right_header: String,
}

impl ColumnComparator {
    pub fn new(pair: ColumnPair, left_header: impl Into<String>, right_header: impl Into<String>) -> Self {
        Self {
            pair,
            left_header: left_header.into(),
            right_header: right_header.into(),
        }
    }

    /// Diff the selected columns across every row of the table
    pub fn compare(&self, table: &Table) -> Result<ColumnComparison, CompareError> {
        self.pair.validate(table)?;

        let left_values = table.column_text(self.pair.left - 1);
        let right_values = table.column_text(self.pair.right - 1);

        let rows = left_values
            .into_iter()
            .zip(right_values)
            .enumerate()
            .map(|(idx, (left, right))| {
                let segments = diff_text(&left, &right);
                RowDiff {
                    row: idx + 1,
                    left,
                    right,
                    segments,
                }
            })
            .collect();

        Ok(ColumnComparison {
            left_header: self.left_header.clone(),
            right_header: self.right_header.clone(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_delimited;

    fn comparator(left: usize, right: usize) -> ColumnComparator {
        ColumnComparator::new(ColumnPair::new(left, right), "Before", "After")
    }

    #[test]
    fn test_parse_column_pair() {
        assert_eq!("2,3".parse::<ColumnPair>().unwrap(), ColumnPair::new(2, 3));
        assert_eq!(" 1 , 4 ".parse::<ColumnPair>().unwrap(), ColumnPair::new(1, 4));
        assert!("2".parse::<ColumnPair>().is_err());
        assert!("2,3,4".parse::<ColumnPair>().is_err());
        assert!("a,b".parse::<ColumnPair>().is_err());
    }

    #[test]
    fn test_compare_produces_one_diff_per_row() {
        let table = parse_delimited("id,old,new\n1,abc,abd\n2,same,same\n", b',').unwrap();
        let comparison = comparator(2, 3).compare(&table).unwrap();

        assert_eq!(comparison.rows.len(), 2);
        assert_eq!(comparison.rows[0].row, 1);
        assert!(!comparison.rows[0].is_identical());
        assert!(comparison.rows[1].is_identical());
        assert_eq!(comparison.differing_rows(), 1);
    }

    #[test]
    fn test_out_of_range_columns_fail() {
        let table = parse_delimited("a,b\n1,2\n", b',').unwrap();

        let err = comparator(2, 3).compare(&table).unwrap_err();
        assert!(matches!(
            err,
            CompareError::ColumnsOutOfRange { width: 2, .. }
        ));
        assert!(err.to_string().contains("2 columns"));
    }

    #[test]
    fn test_zero_index_is_out_of_range() {
        let table = parse_delimited("a,b\n1,2\n", b',').unwrap();
        assert!(comparator(0, 1).compare(&table).is_err());
    }

    #[test]
    fn test_numeric_cells_compared_as_text() {
        let table = parse_delimited("a,b\n17,18\n", b',').unwrap();
        let comparison = comparator(1, 2).compare(&table).unwrap();
        let row = &comparison.rows[0];
        assert_eq!(row.left, "17");
        assert_eq!(row.right, "18");
        assert!(!row.is_identical());
    }
}
