use crate::models::CodePointRange;
use std::num::ParseIntError;

/// Separator between the two bounds of a range descriptor
pub const RANGE_SEPARATOR: &str = "..";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    #[error("invalid range descriptor {descriptor:?}: expected 2 bounds, found {segments}")]
    InvalidSegmentCount { descriptor: String, segments: usize },

    #[error("invalid code point {value:?}: {source}")]
    InvalidCodePoint {
        value: String,
        source: ParseIntError,
    },
}

/// Parse a bare hexadecimal code point (no `0x` prefix).
pub fn parse_code_point(value: &str) -> Result<u32, DescriptorError> {
    u32::from_str_radix(value, 16).map_err(|source| DescriptorError::InvalidCodePoint {
        value: value.to_string(),
        source,
    })
}

/// Parse `XXXX` into `(X, X)` and `XXXX..YYYY` into `(X, Y)`.
///
/// Whitespace around each bound is ignored. The bounds are otherwise taken
/// as written; `200..100` yields an inverted range.
pub fn parse_range_descriptor(descriptor: &str) -> Result<CodePointRange, DescriptorError> {
    if !descriptor.contains(RANGE_SEPARATOR) {
        return parse_code_point(descriptor.trim()).map(CodePointRange::single);
    }

    let bounds: Vec<&str> = descriptor.split(RANGE_SEPARATOR).collect();
    match bounds.as_slice() {
        [begin, end] => Ok(CodePointRange::new(
            parse_code_point(begin.trim())?,
            parse_code_point(end.trim())?,
        )),
        _ => Err(DescriptorError::InvalidSegmentCount {
            descriptor: descriptor.to_string(),
            segments: bounds.len(),
        }),
    }
}
