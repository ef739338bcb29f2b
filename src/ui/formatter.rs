//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from user
//! interaction. Line assembly is pure and testable; only the `display_*`
//! functions print.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::suggest::{Candidate, CandidateState};
use crate::domain::template::Template;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One numbered line of the candidate list.
///
/// Shows the value, its bump classification, and a marker when the
/// candidate is the entry's current version or collides with an existing
/// one.
pub fn format_candidate_line(index: usize, candidate: &Candidate) -> String {
    let marker = match candidate.state {
        CandidateState::Available => String::new(),
        CandidateState::Current => format!("  {}", style("(current)").cyan()),
        CandidateState::Conflict => format!("  {}", style("(already used)").red()),
    };
    format!(
        "  {}. {}  {}{}",
        index + 1,
        style(&candidate.value).bold(),
        style(format!("[{}]", candidate.kind)).dim(),
        marker
    )
}

/// Display a heading plus the numbered candidate list for the active tab.
pub fn display_candidates(heading: &str, candidates: &[Candidate]) {
    println!("\n{}", style(heading).bold());
    if candidates.is_empty() {
        println!("  (none)");
        return;
    }
    for (i, candidate) in candidates.iter().enumerate() {
        println!("{}", format_candidate_line(i, candidate));
    }
}

/// Display previously used versions, newest first, capped at 10.
pub fn display_previous_versions<'a>(versions: impl Iterator<Item = &'a str>) {
    println!("\n{}", style("Previously used versions:").bold());
    let mut shown = 0;
    let mut hidden = 0;
    for version in versions {
        if shown < 10 {
            println!("  - {}", version);
            shown += 1;
        } else {
            hidden += 1;
        }
    }
    if shown == 0 {
        println!("  (none yet)");
    }
    if hidden > 0 {
        println!("  ... and {} more", hidden);
    }
}

/// Display the configured templates with their labels.
pub fn display_templates(templates: &[Template]) {
    println!("{}", style("Configured templates:").bold());
    for template in templates {
        println!("  {} - {}", style(&template.label).bold(), template.format);
    }
}

/// Display the version change about to be emitted (or the initial version).
pub fn display_proposed_version(current: Option<&str>, chosen: &str) {
    match current {
        Some(current) => {
            println!("\n{}", style("Proposed version change:").bold());
            println!("  From: {}", style(current).red());
            println!("  To:   {}", style(chosen).green());
        }
        None => {
            println!("\n{}", style("Initial version:").bold());
            println!("  New version: {}", style(chosen).green());
        }
    }
}
