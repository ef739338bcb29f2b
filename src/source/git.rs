use git2::Repository;
use std::path::Path;

use crate::error::Result;
use crate::source::VersionSource;

/// Version source backed by the tags of a git repository.
///
/// Recency is approximated by the commit time of each tag's target,
/// descending, so the first returned entry is the most recently created
/// version. Tags that do not peel to a commit sort last.
pub struct GitVersionSource {
    repo: Repository,
}

impl GitVersionSource {
    /// Discover the repository from the current working directory.
    ///
    /// # Returns
    /// * `Ok(GitVersionSource)` - Successfully discovered a repository
    /// * `Err` - If not inside a git repository
    pub fn discover() -> Result<Self> {
        Self::open(".")
    }

    /// Open or discover a repository at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitVersionSource { repo })
    }
}

impl VersionSource for GitVersionSource {
    fn describe(&self) -> String {
        "git tags".to_string()
    }

    fn fetch_versions(&self) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;

        let mut tagged: Vec<(String, i64)> = Vec::new();
        for name in names.iter().flatten() {
            let commit_time = self
                .repo
                .find_reference(&format!("refs/tags/{}", name))
                .ok()
                .and_then(|reference| reference.peel_to_commit().ok())
                .map(|commit| commit.time().seconds())
                .unwrap_or(i64::MIN);
            tagged.push((name.to_string(), commit_time));
        }

        // Newest first; equal times fall back to reverse name order so the
        // result is deterministic
        tagged.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

        Ok(tagged.into_iter().map(|(name, _)| name).collect())
    }
}
