//! Reading the `emoji-data.txt` line format.
//!
//! Each data line looks like
//!
//! ```text
//! 1F600..1F64F  ; Emoji                # E1.0  [80] (😀..🙏)  grinning face..folded hands
//! ```
//!
//! Only the first `;`-separated field matters. Lines starting with `#` are
//! comments and blank lines carry nothing.

pub mod descriptor;
pub mod filter;

use crate::io::{self, IoError};
use crate::models::{CodePointRange, RangeSet};
use std::path::Path;

pub use descriptor::{DescriptorError, parse_code_point, parse_range_descriptor};
pub use filter::{DISABLED_THRESHOLD, is_disabled};

pub const COMMENT_MARKER: char = '#';
pub const FIELD_SEPARATOR: char = ';';

/// What a single candidate line contributes to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Accepted(CodePointRange),
    /// Parsed fine but already covered by the baseline table
    Disabled(CodePointRange),
    /// Nothing in the descriptor field
    Empty,
    Malformed(DescriptorError),
}

/// A line that could not be parsed, kept with its original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub line_number: usize,
    pub text: String,
    pub error: DescriptorError,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedData {
    /// Accepted ranges in discovery order
    pub ranges: RangeSet,
    pub disabled: usize,
    pub rejected: Vec<RejectedLine>,
}

/// Whether a raw line should be looked at at all.
pub fn is_candidate_line(line: &str) -> bool {
    !line.is_empty() && !line.starts_with(COMMENT_MARKER)
}

/// Lazily yields `(line_number, line)` for every candidate line, 1-based.
pub fn candidate_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| is_candidate_line(line))
}

/// The trimmed first field of a line, i.e. the range descriptor.
pub fn descriptor_field(line: &str) -> &str {
    let line = line.trim();
    line.split_once(FIELD_SEPARATOR)
        .map_or(line, |(field, _)| field)
        .trim()
}

pub fn classify_line(line: &str) -> LineOutcome {
    let descriptor = descriptor_field(line);
    if descriptor.is_empty() {
        return LineOutcome::Empty;
    }

    match parse_range_descriptor(descriptor) {
        Ok(range) if is_disabled(&range) => LineOutcome::Disabled(range),
        Ok(range) => LineOutcome::Accepted(range),
        Err(e) => LineOutcome::Malformed(e),
    }
}

/// Parse the whole data file contents.
///
/// Malformed lines are logged and skipped; they never abort the parse.
pub fn parse_emoji_data(text: &str) -> ParsedData {
    let mut parsed = ParsedData::default();

    for (line_number, line) in candidate_lines(text) {
        match classify_line(line) {
            LineOutcome::Accepted(range) => parsed.ranges.push(range),
            LineOutcome::Disabled(range) => {
                log::debug!("line {line_number}: {range} is covered by the baseline table");
                parsed.disabled += 1;
            }
            LineOutcome::Empty => {}
            LineOutcome::Malformed(error) => {
                parsed.rejected.push(reject_line(line_number, line, error));
            }
        }
    }

    parsed
}

/// The only place a line is reported; each warning has exactly one entry
/// in [`ParsedData::rejected`].
fn reject_line(line_number: usize, line: &str, error: DescriptorError) -> RejectedLine {
    log::warn!("invalid input on line {line_number}: {error} | {line}");
    RejectedLine {
        line_number,
        text: line.to_string(),
        error,
    }
}

/// Read and parse a data file from disk.
pub fn read_emoji_data(path: &Path) -> Result<ParsedData, IoError> {
    let text = io::read_file(path)?;
    Ok(parse_emoji_data(&text))
}
