use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::source::VersionSource;

/// Version source backed by a newline-separated list file, newest first.
///
/// Intended for lists exported from the changelog backend. Blank lines and
/// lines starting with '#' are skipped; the file's order is authoritative.
pub struct FileVersionSource {
    path: PathBuf,
}

impl FileVersionSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileVersionSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl VersionSource for FileVersionSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_versions(&self) -> Result<Vec<String>> {
        let contents = fs::read_to_string(&self.path)?;

        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }
}
