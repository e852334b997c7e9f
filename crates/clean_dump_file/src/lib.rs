// crates/clean_dump_file/src/lib.rs

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use filter_dump_lines::{filter_dump_lines, FilterSummary};

/// Reads the dump at `input_path` in full, drops the excluded lines, and
/// writes the survivors to `output_path`, overwriting any previous file
/// there. Returns the line counts of the pass.
///
/// The source is read before the destination is created, so a missing
/// source leaves an existing destination untouched. Removing the source
/// afterwards is the caller's decision, not part of this pass.
///
/// # Errors
///
/// Returns `io::ErrorKind::NotFound` when the source does not exist (the
/// caller's signal for the recovered path), `io::ErrorKind::InvalidData`
/// when the source is not valid UTF-8, and any other underlying I/O error
/// verbatim.
pub fn clean_dump_file<P, Q>(input_path: P, output_path: Q) -> io::Result<FilterSummary>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let content = fs::read_to_string(input_path)?;
    let filtered = filter_dump_lines(&content);

    let mut outfile = io::BufWriter::new(fs::File::create(output_path)?);
    outfile.write_all(filtered.content.as_bytes())?;
    outfile.flush()?;

    Ok(filtered.summary)
}
