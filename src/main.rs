use std::time::Instant;

use anyhow::Result;
use clap::Parser;

use version_pick::boundary::BoundaryWarning;
use version_pick::config::{self, Config};
use version_pick::controller::{Effect, Event, SelectionController, Tab};
use version_pick::domain::conflict::VersionSet;
use version_pick::domain::suggest::{self, Candidate};
use version_pick::domain::template::TimeZoneSpec;
use version_pick::source::{FileVersionSource, GitVersionSource, VersionSource};
use version_pick::ui::{self, PromptAction};

#[derive(clap::Parser)]
#[command(
    name = "version-pick",
    about = "Propose and select the next version for a changelog entry"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Read existing versions from a file instead of git tags")]
    file: Option<String>,

    #[arg(long, help = "The entry's currently-assigned version")]
    current: Option<String>,

    #[arg(short, long, help = "Override the configured time zone")]
    timezone: Option<String>,

    #[arg(short, long, help = "Print candidates and exit without prompting")]
    suggest: bool,

    #[arg(short, long, help = "Skip confirmation prompts")]
    force: bool,

    #[arg(long, help = "Show configured templates and exit")]
    list: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("version-pick {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    if args.list {
        ui::display_templates(&config.templates);
        return Ok(());
    }

    // Resolve the time zone, degrading to UTC when unrecognized
    let zone_name = args
        .timezone
        .clone()
        .unwrap_or_else(|| config.timezone.clone());
    let zone = match TimeZoneSpec::parse(&zone_name) {
        Some(zone) => zone,
        None => {
            ui::display_boundary_warning(&BoundaryWarning::UnrecognizedTimeZone {
                zone: zone_name,
            });
            TimeZoneSpec::Utc
        }
    };

    // Open the version source; a missing repository degrades to no source
    let source: Option<Box<dyn VersionSource>> = if let Some(path) = args.file.as_deref() {
        Some(Box::new(FileVersionSource::new(path)))
    } else {
        match GitVersionSource::discover() {
            Ok(source) => Some(Box::new(source)),
            Err(e) => {
                ui::display_boundary_warning(&BoundaryWarning::FetchFailed {
                    source: "git tags".to_string(),
                    reason: e.to_string(),
                });
                None
            }
        }
    };

    let existing = VersionSet::new(fetch_versions_or_empty(source.as_deref()));
    ui::display_status(&format!(
        "{} existing versions known",
        existing.len()
    ));

    let current = args.current.clone();
    let (suggestions, templates) =
        build_candidates(&existing, &config, zone, current.as_deref());

    if args.suggest {
        ui::display_candidates("Suggested versions:", &suggestions);
        ui::display_candidates("Template versions:", &templates);
        return Ok(());
    }

    run_picker(
        &args,
        &config,
        zone,
        source.as_deref(),
        existing,
        suggestions,
        templates,
    )
}

/// Interactive selection loop driven by the controller.
fn run_picker(
    args: &Args,
    config: &Config,
    zone: TimeZoneSpec,
    source: Option<&dyn VersionSource>,
    existing: VersionSet,
    mut suggestions: Vec<Candidate>,
    mut templates: Vec<Candidate>,
) -> Result<()> {
    let skip_confirm = args.force || config.behavior.skip_confirmation;
    let mut controller = SelectionController::with_settle_delay(
        args.current.clone(),
        existing,
        config.settle_delay(),
    );
    controller.handle(Event::Opened, Instant::now());

    loop {
        let (heading, candidates) = match controller.state().tab {
            Tab::Semver => ("Suggested versions:", &suggestions),
            Tab::Custom => ("Template versions:", &templates),
        };
        ui::display_candidates(heading, candidates);
        if controller.state().show_previous {
            ui::display_previous_versions(controller.versions().iter());
        }

        let chosen = match ui::prompt_action(candidates.len())? {
            PromptAction::Pick(index) => {
                let Some(candidate) = candidates.get(index) else {
                    continue;
                };
                let value = candidate.value.clone();
                select(&mut controller, &value, skip_confirm)?
            }
            PromptAction::FreeText(text) => {
                let now = Instant::now();
                controller.handle(Event::InputChanged(text.clone()), now);
                // Single-shot CLI input has already settled
                controller.poll(now + config.settle_delay());
                if controller.state().has_conflict {
                    ui::display_error(&format!(
                        "Version '{}' is already used by another entry",
                        text
                    ));
                    continue;
                }
                select(&mut controller, &text, skip_confirm)?
            }
            PromptAction::SwitchTab => {
                let other = match controller.state().tab {
                    Tab::Semver => Tab::Custom,
                    Tab::Custom => Tab::Semver,
                };
                controller.handle(Event::TabSwitched(other), Instant::now());
                continue;
            }
            PromptAction::TogglePrevious => {
                controller.handle(Event::ShowPreviousToggled, Instant::now());
                continue;
            }
            PromptAction::Refresh => {
                let refreshed = VersionSet::new(fetch_versions_or_empty(source));
                ui::display_success(&format!(
                    "Refreshed: {} existing versions known",
                    refreshed.len()
                ));
                let (s, t) =
                    build_candidates(&refreshed, config, zone, controller.current_version());
                suggestions = s;
                templates = t;
                controller.replace_versions(refreshed);
                continue;
            }
            PromptAction::Quit => {
                println!("Selection cancelled.");
                return Ok(());
            }
        };

        if let Some(version) = chosen {
            ui::display_success(&format!("Selected version {}", version));
            println!("{}", version);
            return Ok(());
        }
    }
}

/// Run one value through confirmation and the controller's selection path.
///
/// Returns the emitted version, or None when the user declined or the
/// candidate conflicted.
fn select(
    controller: &mut SelectionController,
    value: &str,
    skip_confirm: bool,
) -> Result<Option<String>> {
    if !skip_confirm {
        ui::display_proposed_version(controller.current_version(), value);
        if !ui::confirm_version(value)? {
            return Ok(None);
        }
    }

    let effects = controller.handle(
        Event::CandidateSelected(value.to_string()),
        Instant::now(),
    );
    for effect in effects {
        match effect {
            Effect::Emit(version) => return Ok(Some(version)),
            Effect::ConflictChanged(true) => {
                ui::display_error(&format!(
                    "Version '{}' is already used by another entry",
                    value
                ));
            }
            Effect::ConflictChanged(false) => {}
        }
    }
    Ok(None)
}

/// Fetch the existing version list, degrading to empty on failure.
fn fetch_versions_or_empty(source: Option<&dyn VersionSource>) -> Vec<String> {
    let Some(source) = source else {
        return Vec::new();
    };
    match source.fetch_versions() {
        Ok(versions) => versions,
        Err(e) => {
            ui::display_boundary_warning(&BoundaryWarning::FetchFailed {
                source: source.describe(),
                reason: e.to_string(),
            });
            Vec::new()
        }
    }
}

/// Compute both candidate lists and surface non-fatal warnings.
fn build_candidates(
    existing: &VersionSet,
    config: &Config,
    zone: TimeZoneSpec,
    current: Option<&str>,
) -> (Vec<Candidate>, Vec<Candidate>) {
    let latest = existing.latest_semantic();
    if latest.is_none() {
        if let Some(first) = existing.iter().next() {
            ui::display_boundary_warning(&BoundaryWarning::NonSemanticLatest {
                version: first.to_string(),
            });
        }
    }

    let suggestions = suggest::suggest_next(existing, latest, current);
    for candidate in suggestions.iter().filter(|c| c.is_conflict()) {
        ui::display_boundary_warning(&BoundaryWarning::ProbeExhausted {
            kind: candidate.kind.to_string(),
            last_probe: candidate.value.clone(),
        });
    }

    let templates = suggest::template_candidates(&config.templates, zone, existing, current);
    (suggestions, templates)
}
