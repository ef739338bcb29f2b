//! Version template resolution
//!
//! Expands placeholder tokens in a format string against the current wall
//! clock (in a configurable time zone) and the latest known semantic version.
//! Substitution is literal string replacement; unrecognized tokens pass
//! through verbatim. There is no escape syntax for literal braces - such
//! inputs are undefined pass-through.

use chrono::{DateTime, Datelike, FixedOffset, Local, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::version::Version;

/// A version template: a format string with placeholder tokens plus a human
/// label shown in the picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub format: String,
    pub label: String,
}

impl Template {
    pub fn new(format: impl Into<String>, label: impl Into<String>) -> Self {
        Template {
            format: format.into(),
            label: label.into(),
        }
    }
}

/// Time zone the date/time tokens are evaluated in.
///
/// Supported identifiers: "UTC", "local", and fixed offsets such as
/// "+02:00" or "-0530". Anything else is unrecognized and callers fall back
/// to UTC with a boundary warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneSpec {
    Utc,
    Local,
    Fixed(FixedOffset),
}

impl TimeZoneSpec {
    /// Parse a time zone identifier.
    ///
    /// # Returns
    /// * `Some(TimeZoneSpec)` - Recognized identifier
    /// * `None` - Unrecognized identifier
    pub fn parse(zone: &str) -> Option<Self> {
        match zone.trim() {
            "UTC" | "utc" | "Z" => Some(TimeZoneSpec::Utc),
            "local" | "Local" => Some(TimeZoneSpec::Local),
            other => parse_fixed_offset(other).map(TimeZoneSpec::Fixed),
        }
    }

    /// Current wall-clock time in this zone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            TimeZoneSpec::Utc => Utc::now().fixed_offset(),
            TimeZoneSpec::Local => Local::now().fixed_offset(),
            TimeZoneSpec::Fixed(offset) => Utc::now().with_timezone(offset),
        }
    }
}

/// Parse "+HH:MM", "-HH:MM", "+HHMM" or "-HHMM" into a fixed offset.
fn parse_fixed_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1i32, &s[1..]),
        b'-' => (-1i32, &s[1..]),
        _ => return None,
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Expand a format string's tokens against the current time in `zone` and
/// the latest known semantic version.
///
/// Calling this twice within the same second with the same inputs yields the
/// same output, so conflict re-checks do not flicker.
///
/// # Arguments
/// * `format` - Template format string (e.g., "v{YYYY}.{MM}.{DD}")
/// * `zone` - Time zone the date/time tokens are evaluated in
/// * `latest` - Latest known semantic version, if any
pub fn resolve(format: &str, zone: TimeZoneSpec, latest: Option<Version>) -> String {
    resolve_at(format, &zone.now(), latest)
}

/// Expand a format string's tokens at an explicit instant.
///
/// Deterministic and side-effect-free; `resolve` delegates here after
/// reading the wall clock.
pub fn resolve_at(format: &str, when: &DateTime<FixedOffset>, latest: Option<Version>) -> String {
    let parts = latest.unwrap_or(Version::new(0, 0, 0));

    format
        .replace("{YYYY}", &format!("{:04}", when.year()))
        .replace("{YY}", &format!("{:02}", when.year().rem_euclid(100)))
        .replace("{MM}", &format!("{:02}", when.month()))
        .replace("{DD}", &format!("{:02}", when.day()))
        .replace("{hh}", &format!("{:02}", when.hour()))
        .replace("{mm}", &format!("{:02}", when.minute()))
        .replace("{ss}", &format!("{:02}", when.second()))
        .replace(
            "{VERSION}",
            &format!("{}.{}.{}", parts.major, parts.minor, parts.patch),
        )
        .replace("{MAJOR}", &parts.major.to_string())
        .replace("{MINOR}", &parts.minor.to_string())
        .replace("{PATCH}", &parts.patch.to_string())
        .replace("{NEXT_MAJOR}", &(parts.major + 1).to_string())
        .replace("{NEXT_MINOR}", &(parts.minor + 1).to_string())
        .replace("{NEXT_PATCH}", &(parts.patch + 1).to_string())
}
