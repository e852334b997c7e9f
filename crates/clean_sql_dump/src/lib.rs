// crates/clean_sql_dump/src/lib.rs

//! One-shot cleaner for SQLite dictionary dumps.
//!
//! Reads `input.sql` from the current directory, drops every line containing
//! `unistr(` (case-insensitive) along with the second and last lines, writes
//! the survivors to `Dict-Sqlite.sql`, deletes the source, and reports the
//! line counts. A missing source is reported, not treated as a failure.
//!
//! Nothing runs on import: [`run`] is the single entry point and the binary
//! in `main.rs` is a thin driver around it.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clean_dump_file::clean_dump_file;
use filter_dump_lines::FilterSummary;

pub mod services;

/// Default name of the dump read from the current working directory.
pub const DEFAULT_INPUT_FILE: &str = "input.sql";
/// Default name of the cleaned dump written to the current working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "Dict-Sqlite.sql";

/// Runtime configuration composed from the CLI.
#[derive(Clone, Debug)]
pub struct CleanConfig {
    /// The dump to clean; removed after a successful run.
    pub input: PathBuf,
    /// Where the cleaned dump is written.
    pub output: PathBuf,
}

/// How a run ended, short of a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The dump was filtered, written, and the source removed.
    Cleaned(FilterSummary),
    /// The source file was absent; nothing was written or removed.
    MissingInput,
}

/// Cleans the configured dump once: filters it, reports to the console, and
/// removes the source.
///
/// A missing source file is the one recovered condition: it prints its own
/// message, skips the removal step, and comes back as
/// [`RunOutcome::MissingInput`]. Every other failure is returned as an error
/// and the partially written output, if any, is left as-is.
pub fn run(config: &CleanConfig) -> Result<RunOutcome> {
    println!("Cleaning {}...", config.input.display());

    let summary = match clean_dump_file(&config.input, &config.output) {
        Ok(summary) => summary,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            println!(
                "Could not find {}. Please make sure the file exists in the current directory.",
                config.input.display()
            );
            return Ok(RunOutcome::MissingInput);
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to clean '{}'", config.input.display()))
        }
    };

    println!("Done, output file: {}", config.output.display());
    println!(
        "Total lines: {}, kept: {}, removed: {}",
        summary.total,
        summary.kept,
        summary.removed()
    );

    remove_source(&config.input)?;
    println!("Removed source file {}", config.input.display());

    Ok(RunOutcome::Cleaned(summary))
}

/// Deletes the freshly cleaned source. A source that already vanished counts
/// as removed; any other failure is returned.
fn remove_source(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => {
            Err(err).with_context(|| format!("failed to remove source file '{}'", path.display()))
        }
    }
}
