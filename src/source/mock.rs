use crate::error::{Result, VersionPickError};
use crate::source::VersionSource;

/// Mock version source for testing without git or files
pub struct MockVersionSource {
    versions: Vec<String>,
    fail: bool,
}

impl MockVersionSource {
    /// Create a source returning the given versions, newest first
    pub fn new(versions: Vec<String>) -> Self {
        MockVersionSource {
            versions,
            fail: false,
        }
    }

    /// Create a source whose fetch always fails
    pub fn failing() -> Self {
        MockVersionSource {
            versions: Vec::new(),
            fail: true,
        }
    }

    /// Add a version at the head of the list (it becomes the latest)
    pub fn push_latest(&mut self, version: impl Into<String>) {
        self.versions.insert(0, version.into());
    }
}

impl Default for MockVersionSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl VersionSource for MockVersionSource {
    fn describe(&self) -> String {
        "mock".to_string()
    }

    fn fetch_versions(&self) -> Result<Vec<String>> {
        if self.fail {
            return Err(VersionPickError::source("mock fetch failure"));
        }
        Ok(self.versions.clone())
    }
}
