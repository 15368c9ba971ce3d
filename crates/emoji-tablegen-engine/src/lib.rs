pub mod emit;
pub mod fetch;
pub mod generate;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use emit::render_table;
pub use fetch::{Fetch, FetchError, HttpFetcher, fetch_to_file};
pub use generate::{GenerateError, GenerationReport, generate, run};
pub use io::IoError;
pub use models::{CodePointRange, RangeSet};
pub use parsing::{
    DISABLED_THRESHOLD, DescriptorError, LineOutcome, ParsedData, RejectedLine, is_disabled,
    parse_emoji_data, parse_range_descriptor, read_emoji_data,
};
