use std::path::{Path, PathBuf};

/// Published emoji property data the table is generated from.
pub const DEFAULT_SOURCE_URL: &str = "https://unicode.org/Public/UNIDATA/emoji/emoji-data.txt";

/// Local copy of the fetched data file, kept so generation can be re-run offline.
pub const DEFAULT_DATA_FILENAME: &str = "emoji-data.txt";

pub const DEFAULT_OUTPUT_FILENAME: &str = "EmojiTable-full.gen.cpp";

/// Where the data comes from and where the generated table goes.
///
/// There is no runtime override: the binary always uses [`Config::default`]
/// (re-rooted with [`Config::in_dir`]). Tests build their own instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source_url: String,
    pub data_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            data_path: PathBuf::from(DEFAULT_DATA_FILENAME),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
        }
    }
}

impl Config {
    /// Default configuration with both files placed under `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            data_path: dir.join(DEFAULT_DATA_FILENAME),
            output_path: dir.join(DEFAULT_OUTPUT_FILENAME),
            ..Self::default()
        }
    }
}
