pub mod code_point_range;

pub use code_point_range::{CodePointRange, RangeSet};
