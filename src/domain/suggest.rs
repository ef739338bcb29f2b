//! Next-version suggestions computed from the existing version set.

use crate::domain::conflict::VersionSet;
use crate::domain::template::{self, Template, TimeZoneSpec};
use crate::domain::version::{
    classify, display, is_semantic_version, same_version, BumpKind, Version, VersionBump,
};

/// Upper bound on successive probes per bump type. Keeps the search finite
/// when a long run of consecutive versions is already taken; the last probe
/// is returned tagged as conflicting.
pub const PROBE_LIMIT: u32 = 10;

/// Validation state of a computed candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateState {
    /// Free to use
    Available,
    /// Equals the entry's currently-assigned version
    Current,
    /// Collides with an existing version
    Conflict,
}

/// An ephemeral, derived version offer: recomputed on every relevant input
/// change, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub value: String,
    pub kind: BumpKind,
    pub state: CandidateState,
}

impl Candidate {
    pub fn is_conflict(&self) -> bool {
        self.state == CandidateState::Conflict
    }

    pub fn is_current(&self) -> bool {
        self.state == CandidateState::Current
    }
}

/// Compute the next patch/minor/major candidates.
///
/// With no semantic version yet, returns the single bootstrap suggestion
/// `v1.0.0` (non-conflicting by construction: a project without semantic
/// versions cannot already contain one). Otherwise each bump type starts at
/// its increment of the latest version and probes up to [PROBE_LIMIT]
/// successors of the same component, stopping at the first value that is
/// either the entry's current version or free of collisions.
///
/// # Arguments
/// * `existing` - Snapshot of versions already in use
/// * `latest` - Parts of the latest known semantic version, if any
/// * `current` - The entry's currently-assigned version, if any
pub fn suggest_next(
    existing: &VersionSet,
    latest: Option<Version>,
    current: Option<&str>,
) -> Vec<Candidate> {
    let base = match latest {
        Some(parts) => parts,
        None => {
            let value = "v1.0.0".to_string();
            let state = match current {
                Some(current) if same_version(&value, current) => CandidateState::Current,
                _ => CandidateState::Available,
            };
            return vec![Candidate {
                value,
                kind: BumpKind::Major,
                state,
            }];
        }
    };

    [VersionBump::Patch, VersionBump::Minor, VersionBump::Major]
        .into_iter()
        .map(|bump| probe_candidate(existing, base, bump, current))
        .collect()
}

/// Probe successive bumps of one component until a usable value is found.
fn probe_candidate(
    existing: &VersionSet,
    base: Version,
    bump: VersionBump,
    current: Option<&str>,
) -> Candidate {
    let mut probe = base.bump(bump);
    let mut attempt = 1;

    loop {
        let value = display(&probe.to_string());

        if let Some(current) = current {
            if same_version(&value, current) {
                return Candidate {
                    value,
                    kind: bump.into(),
                    state: CandidateState::Current,
                };
            }
        }

        if !existing.contains(&value) {
            return Candidate {
                value,
                kind: bump.into(),
                state: CandidateState::Available,
            };
        }

        if attempt == PROBE_LIMIT {
            return Candidate {
                value,
                kind: bump.into(),
                state: CandidateState::Conflict,
            };
        }

        probe = probe.bump(bump);
        attempt += 1;
    }
}

/// Build a candidate for an arbitrary value: a resolved template or the
/// user's free-text input.
///
/// Semantic values are offered in display form; custom labels stay verbatim.
pub fn candidate_for(value: &str, existing: &VersionSet, current: Option<&str>) -> Candidate {
    let state = match current {
        Some(current) if same_version(value, current) => CandidateState::Current,
        _ if existing.contains(value) => CandidateState::Conflict,
        _ => CandidateState::Available,
    };

    let offered = if is_semantic_version(value) {
        display(value)
    } else {
        value.to_string()
    };

    Candidate {
        value: offered,
        kind: classify(value),
        state,
    }
}

/// Resolve every configured template into a candidate against the current
/// clock and the latest known semantic version.
pub fn template_candidates(
    templates: &[Template],
    zone: TimeZoneSpec,
    existing: &VersionSet,
    current: Option<&str>,
) -> Vec<Candidate> {
    let latest = existing.latest_semantic();
    templates
        .iter()
        .map(|t| candidate_for(&template::resolve(&t.format, zone, latest), existing, current))
        .collect()
}
