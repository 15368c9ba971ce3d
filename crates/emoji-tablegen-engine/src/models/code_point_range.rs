use serde::Serialize;
use std::fmt;

/// Inclusive interval of Unicode scalar values, `begin..=end`.
///
/// Built from one line of the data file and never modified afterwards.
/// `begin <= end` is not enforced: a descriptor such as `200..100` parses
/// into an inverted range and is emitted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CodePointRange {
    pub begin: u32,
    pub end: u32,
}

impl CodePointRange {
    pub fn new(begin: u32, end: u32) -> Self {
        Self { begin, end }
    }

    pub fn single(cp: u32) -> Self {
        Self { begin: cp, end: cp }
    }

    pub fn is_single(&self) -> bool {
        self.begin == self.end
    }
}

impl fmt::Display for CodePointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{:04X}", self.begin)
        } else {
            write!(f, "{:04X}..{:04X}", self.begin, self.end)
        }
    }
}

/// Ranges in the order they were discovered in the data file.
///
/// Overlapping or adjacent ranges are kept as separate entries; no merging
/// or deduplication happens here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RangeSet {
    ranges: Vec<CodePointRange>,
}

impl RangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, range: CodePointRange) {
        self.ranges.push(range);
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Ranges in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &CodePointRange> {
        self.ranges.iter()
    }

    /// Ranges ordered by lower bound.
    ///
    /// Stable, so entries sharing a `begin` keep their discovery order and
    /// the output stays deterministic.
    pub fn sorted(&self) -> Vec<CodePointRange> {
        let mut sorted = self.ranges.clone();
        sorted.sort_by_key(|range| range.begin);
        sorted
    }
}

impl FromIterator<CodePointRange> for RangeSet {
    fn from_iter<I: IntoIterator<Item = CodePointRange>>(iter: I) -> Self {
        Self {
            ranges: iter.into_iter().collect(),
        }
    }
}
