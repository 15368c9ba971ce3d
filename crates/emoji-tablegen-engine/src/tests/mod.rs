//! Shared helpers for unit tests.

use crate::fetch::{Fetch, FetchError};
use std::cell::RefCell;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}

/// Serves a fixed body and records every URL asked for.
pub struct StubFetcher {
    body: Vec<u8>,
    requested: RefCell<Vec<String>>,
}

impl StubFetcher {
    pub fn new(body: &str) -> Self {
        Self {
            body: body.as_bytes().to_vec(),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.requested.borrow_mut().push(url.to_string());
        Ok(self.body.clone())
    }
}

/// Always fails as if the connection dropped mid-body.
pub struct FailingFetcher;

impl Fetch for FailingFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Body {
            url: url.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset"),
        })
    }
}
