use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Version bump type applied when probing candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

/// Classification of a version label.
///
/// Semantic labels are classified by their trailing-zero shape alone:
/// `x.0.0` is "major" and `x.y.0` is "minor" even when no predecessor
/// version ever existed. Changelog consumers rely on this labeling
/// convention, so it is not diffed against a previous version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    Custom,
}

impl From<VersionBump> for BumpKind {
    fn from(bump: VersionBump) -> Self {
        match bump {
            VersionBump::Major => BumpKind::Major,
            VersionBump::Minor => BumpKind::Minor,
            VersionBump::Patch => BumpKind::Patch,
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpKind::Major => write!(f, "major"),
            BumpKind::Minor => write!(f, "minor"),
            BumpKind::Patch => write!(f, "patch"),
            BumpKind::Custom => write!(f, "custom"),
        }
    }
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version label (e.g., "v1.2.3" -> Version(1,2,3)).
    ///
    /// At most one leading 'v' or 'V' is stripped. Exactly three dot-separated
    /// all-digit components are required; leading zeros are accepted
    /// ("v01.2.3" parses to Version(1,2,3)).
    ///
    /// # Returns
    /// * `Some(Version)` - Successfully parsed version
    /// * `None` - If the label is not semantic-version-shaped
    pub fn parse(label: &str) -> Option<Self> {
        let clean = normalize(label);

        let parts: Vec<&str> = clean.split('.').collect();
        if parts.len() != 3 {
            return None;
        }

        let major = parse_component(parts[0])?;
        let minor = parse_component(parts[1])?;
        let patch = parse_component(parts[2])?;

        Some(Version {
            major,
            minor,
            patch,
        })
    }

    /// Bump version according to bump type
    pub fn bump(&self, bump_type: VersionBump) -> Self {
        match bump_type {
            VersionBump::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
        }
    }
}

fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    part.parse::<u64>().ok()
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Check whether a label is semantic-version-shaped.
///
/// True iff, after stripping at most one leading 'v'/'V', the label splits
/// on '.' into exactly three non-empty all-digit components.
pub fn is_semantic_version(label: &str) -> bool {
    if label.is_empty() {
        return false;
    }
    regex::Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$")
        .map(|re| re.is_match(normalize(label)))
        .unwrap_or(false)
}

/// Classify a version label as major/minor/patch/custom.
///
/// Non-semantic labels are always Custom. Semantic labels use the
/// trailing-zero heuristic documented on [BumpKind].
pub fn classify(label: &str) -> BumpKind {
    match Version::parse(label) {
        Some(v) if v.minor == 0 && v.patch == 0 => BumpKind::Major,
        Some(v) if v.patch == 0 => BumpKind::Minor,
        Some(_) => BumpKind::Patch,
        None => BumpKind::Custom,
    }
}

/// Strip at most one leading 'v' or 'V' from a version label.
///
/// The prefix is a display convention only: "1.2.3" and "v1.2.3" denote the
/// same version. All equality checks go through this form.
pub fn normalize(label: &str) -> &str {
    label
        .strip_prefix('v')
        .or_else(|| label.strip_prefix('V'))
        .unwrap_or(label)
}

/// Canonical display form: leading 'v' added if absent and the label is
/// non-empty.
pub fn display(label: &str) -> String {
    if label.is_empty() || label.starts_with('v') || label.starts_with('V') {
        label.to_string()
    } else {
        format!("v{}", label)
    }
}

/// True iff two labels denote the same version modulo the 'v' prefix.
pub fn same_version(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("v1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_without_v() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_uppercase_v() {
        let v = Version::parse("V1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_leading_zeros() {
        let v = Version::parse("v01.2.03").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_none());
        assert!(Version::parse("v1.2.3.4").is_none());
        assert!(Version::parse("").is_none());
        assert!(Version::parse("1.2.x").is_none());
        // Only one prefix letter is stripped
        assert!(Version::parse("vv1.2.3").is_none());
        // Negative components are not digits
        assert!(Version::parse("1.-2.3").is_none());
    }

    #[test]
    fn test_version_bump_major() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Major), Version::new(2, 0, 0));
    }

    #[test]
    fn test_version_bump_minor() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Minor), Version::new(1, 3, 0));
    }

    #[test]
    fn test_version_bump_patch() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.bump(VersionBump::Patch), Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_is_semantic_version() {
        assert!(is_semantic_version("v1.2.3"));
        assert!(is_semantic_version("1.2.3"));
        assert!(is_semantic_version("v01.2.3"));
        assert!(!is_semantic_version("1.2"));
        assert!(!is_semantic_version("v1.2.3.4"));
        assert!(!is_semantic_version(""));
        assert!(!is_semantic_version("nightly"));
        assert!(!is_semantic_version("v1.2.3-beta"));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("v2.0.0"), BumpKind::Major);
        assert_eq!(classify("v1.4.0"), BumpKind::Minor);
        assert_eq!(classify("v1.4.7"), BumpKind::Patch);
        assert_eq!(classify("nightly"), BumpKind::Custom);
        assert_eq!(classify(""), BumpKind::Custom);
        // Heuristic: shape alone decides, no predecessor is consulted
        assert_eq!(classify("v3.0.0"), BumpKind::Major);
        assert_eq!(classify("0.0.0"), BumpKind::Major);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("v1.2.3"), "1.2.3");
        assert_eq!(normalize("V1.2.3"), "1.2.3");
        assert_eq!(normalize("1.2.3"), "1.2.3");
        // Only one prefix letter is stripped
        assert_eq!(normalize("vv1.2.3"), "v1.2.3");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_display_form() {
        assert_eq!(display("1.2.3"), "v1.2.3");
        assert_eq!(display("v1.2.3"), "v1.2.3");
        assert_eq!(display(""), "");
    }

    #[test]
    fn test_normalize_display_round_trip() {
        for label in ["1.2.3", "v1.2.3", "V0.1.0", "nightly", "beta-1"] {
            assert_eq!(normalize(&display(label)).to_string(), normalize(label));
        }
    }

    #[test]
    fn test_same_version() {
        assert!(same_version("v1.2.3", "1.2.3"));
        assert!(same_version("1.2.3", "1.2.3"));
        assert!(!same_version("v1.2.3", "v1.2.4"));
        assert!(same_version("nightly", "nightly"));
    }
}
