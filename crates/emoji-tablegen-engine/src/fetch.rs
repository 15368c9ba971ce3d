use crate::io::{self, IoError};
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        source: Box<ureq::Error>,
    },
    #[error("Failed to read response body from {url}: {source}")]
    Body {
        url: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Persist(#[from] IoError),
}

/// Retrieves the raw bytes behind a URL.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Plain blocking HTTP GET. No retries.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpFetcher;

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        log::info!("Downloading {url}");
        let response = ureq::get(url)
            .call()
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source: Box::new(source),
            })?;

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|source| FetchError::Body {
                url: url.to_string(),
                source,
            })?;
        Ok(body)
    }
}

/// Fetch `url` and store the body verbatim at `path`.
///
/// Returns the number of bytes written.
pub fn fetch_to_file<F: Fetch + ?Sized>(
    fetcher: &F,
    url: &str,
    path: &Path,
) -> Result<usize, FetchError> {
    let body = fetcher.fetch(url)?;
    io::write_file(path, &body)?;
    log::info!("Saved {} bytes to {}", body.len(), path.display());
    Ok(body.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{FailingFetcher, StubFetcher, create_test_dir, create_test_file};

    #[test]
    fn test_fetch_to_file_persists_body_verbatim() {
        let dir = create_test_dir();
        let path = dir.path().join("emoji-data.txt");
        let body = "# emoji-data.txt\r\n231A..231B ; Emoji # (⌚..⌛)\r\n";
        let fetcher = StubFetcher::new(body);

        let written = fetch_to_file(&fetcher, "https://example.test/emoji-data.txt", &path).unwrap();

        assert_eq!(written, body.len());
        assert_eq!(std::fs::read(&path).unwrap(), body.as_bytes());
    }

    #[test]
    fn test_fetch_to_file_requests_given_url() {
        let dir = create_test_dir();
        let fetcher = StubFetcher::new("");

        fetch_to_file(
            &fetcher,
            "https://example.test/emoji-data.txt",
            &dir.path().join("data.txt"),
        )
        .unwrap();

        assert_eq!(
            fetcher.requested(),
            vec!["https://example.test/emoji-data.txt".to_string()]
        );
    }

    #[test]
    fn test_fetch_failure_leaves_cached_file_untouched() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "emoji-data.txt", "cached copy");

        let result = fetch_to_file(&FailingFetcher, "https://example.test/x", &path);

        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "cached copy");
    }
}
