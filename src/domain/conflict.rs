//! Collision checks against the set of versions a project already uses.

use std::collections::HashSet;

use crate::domain::version::{is_semantic_version, normalize, same_version, Version};

/// Immutable snapshot of the versions already used by a project's entries.
///
/// Keeps the fetched recency order (first element = latest) and a normalized
/// index for membership checks. The existing list may store versions in
/// either prefixed or unprefixed form; membership is checked on the
/// normalized form so both are covered. Snapshots are replaced wholesale on
/// refresh, never partially updated.
#[derive(Debug, Clone, Default)]
pub struct VersionSet {
    raw: Vec<String>,
    normalized: HashSet<String>,
}

impl VersionSet {
    /// Build a snapshot from a fetched list, newest first.
    pub fn new(versions: Vec<String>) -> Self {
        let normalized = versions
            .iter()
            .map(|v| normalize(v).to_string())
            .collect();
        VersionSet {
            raw: versions,
            normalized,
        }
    }

    /// Empty snapshot - the degraded state after a failed fetch.
    pub fn empty() -> Self {
        VersionSet::default()
    }

    /// Membership modulo the 'v' prefix.
    pub fn contains(&self, candidate: &str) -> bool {
        self.normalized.contains(normalize(candidate))
    }

    /// Latest known semantic version: the first semantic entry in recency
    /// order, parsed to its parts.
    pub fn latest_semantic(&self) -> Option<Version> {
        self.raw
            .iter()
            .find(|v| is_semantic_version(v))
            .and_then(|v| Version::parse(v))
    }

    /// Entries in recency order, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.raw.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Check whether a candidate collides with an already-used version.
///
/// Re-selecting the entry's own current version is never a conflict. An
/// empty candidate is a validation problem, not a conflict; it reports
/// false and selection is disabled elsewhere.
///
/// # Arguments
/// * `candidate` - The version string being validated
/// * `existing` - Snapshot of versions already in use
/// * `current` - The entry's currently-assigned version, if any
pub fn has_conflict(candidate: &str, existing: &VersionSet, current: Option<&str>) -> bool {
    if candidate.is_empty() {
        return false;
    }
    if let Some(current) = current {
        if same_version(candidate, current) {
            return false;
        }
    }
    existing.contains(candidate)
}
