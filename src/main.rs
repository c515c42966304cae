//! coldiff - Column comparison reports for delimited text files

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use coldiff::batch::run_batch;
use coldiff::config::Config;
use coldiff::diff::ColumnPair;

/// Compare two columns across a folder of delimited text files and
/// generate one HTML report per file
#[derive(Parser, Debug)]
#[command(name = "coldiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory with the files to compare (prompted for if omitted)
    directory: Option<PathBuf>,

    /// Column indices to compare, 1-based (e.g. 2,3)
    #[arg(short, long)]
    columns: Option<ColumnPair>,

    /// Header name for the first column in the report
    #[arg(long)]
    header1: Option<String>,

    /// Header name for the second column in the report
    #[arg(long)]
    header2: Option<String>,

    /// Directory to write the reports to
    #[arg(short, long, default_value = ".")]
    out: PathBuf,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let directory = match cli.directory {
        Some(dir) => dir,
        None => {
            let answer = prompt("Select directory with files to compare: ")?;
            if answer.is_empty() {
                println!("No directory selected. Exiting.");
                return Ok(());
            }
            PathBuf::from(answer)
        }
    };

    if !directory.is_dir() {
        anyhow::bail!("Not a directory: {}", directory.display());
    }

    let columns = match cli.columns {
        Some(pair) => pair,
        None => prompt("Enter the column indices to compare (e.g., 2,3): ")?
            .parse::<ColumnPair>()
            .map_err(|e| anyhow::anyhow!(e))?,
    };

    let header1 = match cli.header1 {
        Some(h) => h,
        None => prompt("Enter the header name for the first column: ")?,
    };
    let header2 = match cli.header2 {
        Some(h) => h,
        None => prompt("Enter the header name for the second column: ")?,
    };

    let config = Config::new(directory, columns)
        .with_headers(header1, header2)
        .with_out_dir(cli.out);

    run_batch(&config)?;

    Ok(())
}

/// Print a prompt on stderr and read one trimmed line from stdin
fn prompt(message: &str) -> Result<String> {
    eprint!("{}", message);
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}
