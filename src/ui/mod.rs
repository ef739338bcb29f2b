//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, Write};

use anyhow::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_candidates, display_error, display_previous_versions,
    display_proposed_version, display_status, display_success, display_templates,
};

/// What the user asked for at the picker prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptAction {
    /// A numbered candidate (0-based index)
    Pick(usize),
    /// Free-text version input, used as typed
    FreeText(String),
    /// Switch between the suggestion and template tabs
    SwitchTab,
    /// Toggle the previously-used-versions listing
    TogglePrevious,
    /// Re-fetch the existing version list
    Refresh,
    /// Leave without selecting
    Quit,
}

/// Prompt for a candidate selection.
///
/// Accepts a candidate number (Enter defaults to 1), `t` to switch tabs,
/// `p` to toggle previous versions, `r` to refresh, `q` to quit, or any
/// other text as a free-text version.
///
/// # Arguments
/// * `candidate_count` - Number of candidates currently listed
///
/// # Returns
/// * `Ok(PromptAction)` - The parsed action
/// * `Err` - If an input error occurs
pub fn prompt_action(candidate_count: usize) -> Result<PromptAction> {
    print!(
        "\nSelect 1-{} (Enter = 1), or type a version  [t]ab  [p]revious  [r]efresh  [q]uit: ",
        candidate_count.max(1)
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    Ok(parse_action(input, candidate_count))
}

/// Pure mapping from a trimmed input line to an action.
fn parse_action(input: &str, candidate_count: usize) -> PromptAction {
    match input {
        "" => PromptAction::Pick(0),
        "t" => PromptAction::SwitchTab,
        "p" => PromptAction::TogglePrevious,
        "r" => PromptAction::Refresh,
        "q" => PromptAction::Quit,
        other => match other.parse::<usize>() {
            Ok(n) if n >= 1 && n <= candidate_count => PromptAction::Pick(n - 1),
            _ => PromptAction::FreeText(other.to_string()),
        },
    }
}

/// Prompts user to confirm using a version with a yes/no prompt.
///
/// Default is to confirm - user must enter 'n' or 'no' to decline.
///
/// # Arguments
/// * `version` - The version about to be emitted
///
/// # Returns
/// * `Ok(true)` - If user confirms (or presses Enter)
/// * `Ok(false)` - If user enters 'n' or 'no'
/// * `Err` - If input error occurs
pub fn confirm_version(version: &str) -> Result<bool> {
    print!("\nUse version {} (Y/n): ", version);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(!(response == "n" || response == "no"))
}
