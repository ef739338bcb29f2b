//! Domain logic - pure version rules independent of any version source

pub mod conflict;
pub mod suggest;
pub mod template;
pub mod version;

pub use conflict::{has_conflict, VersionSet};
pub use suggest::{suggest_next, Candidate, CandidateState, PROBE_LIMIT};
pub use template::{Template, TimeZoneSpec};
pub use version::{BumpKind, Version, VersionBump};
