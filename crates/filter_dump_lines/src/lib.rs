// crates/filter_dump_lines/src/lib.rs

//! Pure line filter for SQL dump cleaning.
//!
//! A line is excluded when it contains [`EXCLUSION_MARKER`] (checked
//! case-insensitively), when it is the second line of the dump, or when it
//! is the last line. All three conditions are evaluated per line against the
//! original line indices, so a line matching several rules is removed once.

/// Substring whose presence disqualifies a line from the cleaned dump.
/// The check is case-insensitive, so `UniStr(` and `UNISTR(` match too.
pub const EXCLUSION_MARKER: &str = "unistr(";

/// Line counts from one filtering pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSummary {
    /// Lines read from the input.
    pub total: usize,
    /// Lines that survived filtering.
    pub kept: usize,
}

impl FilterSummary {
    /// Lines removed by filtering.
    pub fn removed(&self) -> usize {
        self.total - self.kept
    }
}

/// Result of filtering one dump held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredDump {
    /// The surviving lines, concatenated with their original terminators.
    pub content: String,
    /// Line counts for the pass.
    pub summary: FilterSummary,
}

/// Returns true when the line at `index` (zero-based, out of `total` lines)
/// must not appear in the cleaned dump.
///
/// A line is excluded when any of the following holds:
///   - its lowercased content contains [`EXCLUSION_MARKER`];
///   - it is the second line (`index == 1`);
///   - it is the last line (`index == total - 1`).
///
/// The last-line test is written as `index + 1 == total` so that it holds
/// for the only line of a single-line dump and never underflows.
pub fn is_excluded_line(line: &str, index: usize, total: usize) -> bool {
    line.to_lowercase().contains(EXCLUSION_MARKER) || index == 1 || index + 1 == total
}

/// Filters the full text of a dump, keeping every line for which
/// [`is_excluded_line`] is false.
///
/// Lines are split on `'\n'` with the terminator kept attached, so kept
/// lines reach the output byte-for-byte: a `"\r\n"` ending survives as
/// written, and a final line without a trailing newline stays without one.
/// Relative order is preserved, and indices always refer to the original
/// line count, never to an intermediate filtered count.
pub fn filter_dump_lines(content: &str) -> FilteredDump {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let total = lines.len();

    let mut output = String::with_capacity(content.len());
    let mut kept = 0usize;
    for (index, line) in lines.into_iter().enumerate() {
        if is_excluded_line(line, index, total) {
            continue;
        }
        output.push_str(line);
        kept += 1;
    }

    FilteredDump {
        content: output,
        summary: FilterSummary { total, kept },
    }
}
