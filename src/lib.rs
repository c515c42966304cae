//! coldiff - Column comparison reports for delimited text files
//!
//! Compares two chosen columns across a folder of delimited files
//! (CSV, TSV, TXT) and writes one static HTML report per file showing
//! row-by-row textual differences.

pub mod batch;
pub mod config;
pub mod diff;
pub mod model;
pub mod parser;
pub mod report;

pub use config::Config;
pub use diff::{ColumnComparator, ColumnPair};
pub use model::Table;
