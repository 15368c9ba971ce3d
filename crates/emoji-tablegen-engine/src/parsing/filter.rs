use crate::models::CodePointRange;

/// Code points up to and including this value are covered by the small,
/// hand-maintained baseline table and never appear in the generated one.
pub const DISABLED_THRESHOLD: u32 = 0xFF;

/// A range is disabled when its lower bound falls at or below
/// [`DISABLED_THRESHOLD`], regardless of where it ends.
pub fn is_disabled(range: &CodePointRange) -> bool {
    range.begin <= DISABLED_THRESHOLD
}
