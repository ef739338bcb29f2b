use std::fmt;

/// Warnings for recoverable conditions while assembling version candidates.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The version list could not be fetched; proceeding with an empty set
    FetchFailed { source: String, reason: String },
    /// The configured time zone was not recognized; falling back to UTC
    UnrecognizedTimeZone { zone: String },
    /// Every probed candidate for a bump type collided with an existing version
    ProbeExhausted { kind: String, last_probe: String },
    /// The latest entry exists but is not semantic-version-shaped
    NonSemanticLatest { version: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::FetchFailed { source, reason } => {
                write!(
                    f,
                    "Could not fetch versions from {}: {}. Starting with an empty version list",
                    source, reason
                )
            }
            BoundaryWarning::UnrecognizedTimeZone { zone } => {
                write!(f, "Unrecognized time zone '{}', using UTC", zone)
            }
            BoundaryWarning::ProbeExhausted { kind, last_probe } => {
                write!(
                    f,
                    "All probed {} candidates are taken, offering '{}' (conflicting)",
                    kind, last_probe
                )
            }
            BoundaryWarning::NonSemanticLatest { version } => {
                write!(
                    f,
                    "Latest version '{}' is not semantic, suggestions start from v1.0.0",
                    version
                )
            }
        }
    }
}
