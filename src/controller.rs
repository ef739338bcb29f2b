//! Selection state machine for the version picker.
//!
//! Single-threaded and event-driven: UI events go through [SelectionController::handle],
//! which mutates the state and returns the effects the host must perform
//! (emit the chosen version, invoke the conflict callback). Free-text input
//! is validated after a settle delay; an epoch counter guards every pending
//! check so a slow result for an earlier value can never overwrite the state
//! computed for a newer one.

use std::time::{Duration, Instant};

use crate::domain::conflict::{has_conflict, VersionSet};
use crate::domain::version::{display, is_semantic_version, same_version};

/// Settle delay before a changed input is conflict-checked.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Which candidate list is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Semver,
    Custom,
}

/// Observable picker state.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub input: String,
    pub tab: Tab,
    pub is_open: bool,
    pub show_previous: bool,
    pub has_conflict: bool,
    pub is_validating: bool,
}

/// UI events applied through the transition function.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Opened,
    Closed,
    InputChanged(String),
    TabSwitched(Tab),
    CandidateSelected(String),
    /// The entry's assigned version changed externally (entry reloaded)
    VersionChanged(Option<String>),
    ShowPreviousToggled,
}

/// Effects the host must perform after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// The chosen version string, emitted upward at selection time
    Emit(String),
    /// The external conflict callback, invoked with the check result
    ConflictChanged(bool),
}

/// A conflict check handed to the host for asynchronous evaluation.
///
/// The host re-checks `value` (against a live fetch if it wants) and reports
/// back through [SelectionController::complete_check] with the same epoch.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckRequest {
    pub value: String,
    pub epoch: u64,
}

#[derive(Debug, Clone)]
struct PendingCheck {
    value: String,
    epoch: u64,
    due: Instant,
}

/// Owns the picker state for one changelog entry.
///
/// Created on mount with the entry's current version; never shared across
/// entries. The existing-version snapshot is replaced wholesale on refresh.
pub struct SelectionController {
    state: SelectionState,
    current_version: Option<String>,
    versions: VersionSet,
    settle_delay: Duration,
    epoch: u64,
    pending: Option<PendingCheck>,
}

impl SelectionController {
    pub fn new(current_version: Option<String>, versions: VersionSet) -> Self {
        Self::with_settle_delay(current_version, versions, DEFAULT_SETTLE_DELAY)
    }

    pub fn with_settle_delay(
        current_version: Option<String>,
        versions: VersionSet,
        settle_delay: Duration,
    ) -> Self {
        let input = current_version.clone().unwrap_or_default();
        let tab = tab_for(current_version.as_deref());

        SelectionController {
            state: SelectionState {
                input,
                tab,
                is_open: false,
                show_previous: false,
                has_conflict: false,
                is_validating: false,
            },
            current_version,
            versions,
            settle_delay,
            epoch: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn current_version(&self) -> Option<&str> {
        self.current_version.as_deref()
    }

    pub fn versions(&self) -> &VersionSet {
        &self.versions
    }

    /// Replace the existing-version snapshot wholesale (manual refresh).
    pub fn replace_versions(&mut self, versions: VersionSet) {
        self.versions = versions;
    }

    /// Apply one event; returns the effects the host must perform.
    pub fn handle(&mut self, event: Event, now: Instant) -> Vec<Effect> {
        match event {
            Event::Opened => {
                // Stale flags from a previous session must not leak in
                self.state.is_open = true;
                self.state.has_conflict = false;
                self.state.is_validating = false;
                self.supersede();
                Vec::new()
            }
            Event::Closed => {
                self.state.is_open = false;
                self.state.is_validating = false;
                self.supersede();
                Vec::new()
            }
            Event::InputChanged(value) => self.input_changed(value, now),
            Event::TabSwitched(tab) => {
                self.state.tab = tab;
                Vec::new()
            }
            Event::CandidateSelected(value) => self.candidate_selected(&value),
            Event::VersionChanged(version) => {
                if let Some(v) = version.as_deref() {
                    if !v.is_empty() && !is_semantic_version(v) {
                        self.state.tab = Tab::Custom;
                    }
                }
                self.current_version = version;
                Vec::new()
            }
            Event::ShowPreviousToggled => {
                self.state.show_previous = !self.state.show_previous;
                Vec::new()
            }
        }
    }

    /// Run any due conflict check against the local snapshot.
    ///
    /// Convenience for hosts that do not revalidate asynchronously; the
    /// check itself is synchronous membership against the snapshot.
    pub fn poll(&mut self, now: Instant) -> Vec<Effect> {
        match self.take_due_check(now) {
            Some(req) => {
                let result = has_conflict(&req.value, &self.versions, self.current_version());
                self.complete_check(req.epoch, result)
            }
            None => Vec::new(),
        }
    }

    /// Hand out the pending check once its settle delay has elapsed.
    ///
    /// `is_validating` stays set until the host reports back through
    /// [complete_check](Self::complete_check).
    pub fn take_due_check(&mut self, now: Instant) -> Option<CheckRequest> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| p.epoch == self.epoch && p.due <= now);
        if !due {
            return None;
        }
        self.pending.take().map(|p| CheckRequest {
            value: p.value,
            epoch: p.epoch,
        })
    }

    /// Apply an asynchronously-computed check result.
    ///
    /// A result carrying a stale epoch belongs to input the user has since
    /// superseded; it is discarded without touching the state.
    pub fn complete_check(&mut self, epoch: u64, conflict: bool) -> Vec<Effect> {
        if epoch != self.epoch {
            return Vec::new();
        }
        self.state.has_conflict = conflict;
        self.state.is_validating = false;
        vec![Effect::ConflictChanged(conflict)]
    }

    fn input_changed(&mut self, value: String, now: Instant) -> Vec<Effect> {
        self.supersede();
        self.state.input = value.clone();

        if value.is_empty() {
            // Empty input disables selection; it is not a conflict
            self.state.is_validating = false;
            if self.state.has_conflict {
                self.state.has_conflict = false;
                return vec![Effect::ConflictChanged(false)];
            }
            return Vec::new();
        }

        self.state.is_validating = true;
        self.pending = Some(PendingCheck {
            value,
            epoch: self.epoch,
            due: now + self.settle_delay,
        });
        Vec::new()
    }

    fn candidate_selected(&mut self, value: &str) -> Vec<Effect> {
        if value.is_empty() {
            return Vec::new();
        }

        // Re-selecting the entry's own version is an idempotent accept
        let reselection = self
            .current_version
            .as_deref()
            .is_some_and(|current| same_version(value, current));

        if !reselection && has_conflict(value, &self.versions, self.current_version()) {
            self.state.has_conflict = true;
            self.state.is_validating = false;
            return vec![Effect::ConflictChanged(true)];
        }

        let mut effects = Vec::new();
        if self.state.has_conflict {
            self.state.has_conflict = false;
            effects.push(Effect::ConflictChanged(false));
        }
        self.state.is_open = false;
        self.state.is_validating = false;
        self.supersede();
        effects.push(Effect::Emit(emission_form(value)));
        effects
    }

    /// Invalidate any in-flight check; a newer event supersedes it.
    fn supersede(&mut self) {
        self.epoch += 1;
        self.pending = None;
    }
}

/// A non-empty, non-semantic assigned version forces the custom tab.
fn tab_for(current: Option<&str>) -> Tab {
    match current {
        Some(v) if !v.is_empty() && !is_semantic_version(v) => Tab::Custom,
        _ => Tab::Semver,
    }
}

/// Semantic selections are emitted in display form; custom labels verbatim.
fn emission_form(value: &str) -> String {
    if is_semantic_version(value) {
        display(value)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(versions: &[&str]) -> VersionSet {
        VersionSet::new(versions.iter().map(|s| s.to_string()).collect())
    }

    fn controller(current: Option<&str>, versions: &[&str]) -> SelectionController {
        SelectionController::new(current.map(|s| s.to_string()), set(versions))
    }

    #[test]
    fn test_initial_state_semver_tab() {
        let c = controller(Some("v1.0.0"), &["v1.0.0"]);
        assert_eq!(c.state().tab, Tab::Semver);
        assert_eq!(c.state().input, "v1.0.0");
        assert!(!c.state().is_open);
    }

    #[test]
    fn test_initial_state_custom_tab() {
        let c = controller(Some("nightly"), &["nightly"]);
        assert_eq!(c.state().tab, Tab::Custom);
    }

    #[test]
    fn test_open_resets_stale_flags() {
        let mut c = controller(None, &["v1.0.0"]);
        let now = Instant::now();
        c.handle(Event::InputChanged("1.0.0".into()), now);
        c.poll(now + DEFAULT_SETTLE_DELAY);
        assert!(c.state().has_conflict);

        c.handle(Event::Closed, now);
        c.handle(Event::Opened, now);
        assert!(!c.state().has_conflict);
        assert!(!c.state().is_validating);
        assert!(c.state().is_open);
    }

    #[test]
    fn test_input_arms_validation() {
        let mut c = controller(None, &["v1.0.0"]);
        let now = Instant::now();
        let effects = c.handle(Event::InputChanged("2.0.0".into()), now);
        assert!(effects.is_empty());
        assert!(c.state().is_validating);

        // Before the settle delay nothing fires
        assert!(c.poll(now).is_empty());
        assert!(c.state().is_validating);

        let effects = c.poll(now + DEFAULT_SETTLE_DELAY);
        assert_eq!(effects, vec![Effect::ConflictChanged(false)]);
        assert!(!c.state().is_validating);
        assert!(!c.state().has_conflict);
    }

    #[test]
    fn test_settled_conflict_detected() {
        let mut c = controller(None, &["v1.0.0"]);
        let now = Instant::now();
        c.handle(Event::InputChanged("1.0.0".into()), now);
        let effects = c.poll(now + DEFAULT_SETTLE_DELAY);
        assert_eq!(effects, vec![Effect::ConflictChanged(true)]);
        assert!(c.state().has_conflict);
    }

    #[test]
    fn test_newer_input_supersedes_pending_check() {
        let mut c = controller(None, &["v1.0.0"]);
        let now = Instant::now();
        c.handle(Event::InputChanged("1.0.0".into()), now);
        c.handle(Event::InputChanged("2.0.0".into()), now);

        let effects = c.poll(now + DEFAULT_SETTLE_DELAY);
        // Only the latest value is ever checked
        assert_eq!(effects, vec![Effect::ConflictChanged(false)]);
        assert!(!c.state().has_conflict);
    }

    #[test]
    fn test_stale_async_result_is_discarded() {
        let mut c = controller(None, &["v1.0.0", "v2.0.0"]);
        let now = Instant::now();

        c.handle(Event::InputChanged("1.0.0".into()), now);
        let stale = c.take_due_check(now + DEFAULT_SETTLE_DELAY).unwrap();

        // A newer keystroke arrives while the slow check is in flight
        c.handle(Event::InputChanged("3.0.0".into()), now);
        let fresh = c.take_due_check(now + 2 * DEFAULT_SETTLE_DELAY).unwrap();
        assert_ne!(stale.epoch, fresh.epoch);

        let effects = c.complete_check(fresh.epoch, false);
        assert_eq!(effects, vec![Effect::ConflictChanged(false)]);

        // The slow response for the earlier value arrives last and is dropped
        let effects = c.complete_check(stale.epoch, true);
        assert!(effects.is_empty());
        assert!(!c.state().has_conflict);
    }

    #[test]
    fn test_empty_input_clears_conflict() {
        let mut c = controller(None, &["v1.0.0"]);
        let now = Instant::now();
        c.handle(Event::InputChanged("1.0.0".into()), now);
        c.poll(now + DEFAULT_SETTLE_DELAY);
        assert!(c.state().has_conflict);

        let effects = c.handle(Event::InputChanged(String::new()), now);
        assert_eq!(effects, vec![Effect::ConflictChanged(false)]);
        assert!(!c.state().is_validating);
    }

    #[test]
    fn test_tab_switch_keeps_input() {
        let mut c = controller(None, &[]);
        let now = Instant::now();
        c.handle(Event::InputChanged("beta-1".into()), now);
        c.handle(Event::TabSwitched(Tab::Custom), now);
        assert_eq!(c.state().input, "beta-1");
        assert_eq!(c.state().tab, Tab::Custom);
    }

    #[test]
    fn test_select_available_candidate_emits_and_closes() {
        let mut c = controller(None, &["v1.0.0"]);
        let now = Instant::now();
        c.handle(Event::Opened, now);
        let effects = c.handle(Event::CandidateSelected("1.1.0".into()), now);
        assert_eq!(effects, vec![Effect::Emit("v1.1.0".into())]);
        assert!(!c.state().is_open);
        assert!(!c.state().has_conflict);
    }

    #[test]
    fn test_select_custom_candidate_emits_verbatim() {
        let mut c = controller(None, &[]);
        let now = Instant::now();
        let effects = c.handle(Event::CandidateSelected("nightly".into()), now);
        assert_eq!(effects, vec![Effect::Emit("nightly".into())]);
    }

    #[test]
    fn test_select_conflicting_candidate_stays_open() {
        let mut c = controller(Some("v2.0.0"), &["v1.0.0", "v2.0.0"]);
        let now = Instant::now();
        c.handle(Event::Opened, now);
        let effects = c.handle(Event::CandidateSelected("v1.0.0".into()), now);
        assert_eq!(effects, vec![Effect::ConflictChanged(true)]);
        assert!(c.state().is_open);
        assert!(c.state().has_conflict);
    }

    #[test]
    fn test_reselect_current_version_accepts() {
        let mut c = controller(Some("v1.0.0"), &["v1.0.0"]);
        let now = Instant::now();
        c.handle(Event::Opened, now);
        let effects = c.handle(Event::CandidateSelected("1.0.0".into()), now);
        assert_eq!(effects, vec![Effect::Emit("v1.0.0".into())]);
        assert!(!c.state().is_open);
        assert!(!c.state().has_conflict);
    }

    #[test]
    fn test_version_change_forces_custom_tab() {
        let mut c = controller(Some("v1.0.0"), &["v1.0.0"]);
        let now = Instant::now();
        assert_eq!(c.state().tab, Tab::Semver);
        c.handle(Event::VersionChanged(Some("hotfix-a".into())), now);
        assert_eq!(c.state().tab, Tab::Custom);
        assert_eq!(c.current_version(), Some("hotfix-a"));
    }

    #[test]
    fn test_version_change_to_semantic_keeps_tab() {
        let mut c = controller(Some("nightly"), &["nightly"]);
        let now = Instant::now();
        assert_eq!(c.state().tab, Tab::Custom);
        c.handle(Event::VersionChanged(Some("v2.0.0".into())), now);
        // Only non-semantic versions force a tab, nothing forces it back
        assert_eq!(c.state().tab, Tab::Custom);
    }

    #[test]
    fn test_show_previous_toggle() {
        let mut c = controller(None, &[]);
        let now = Instant::now();
        assert!(!c.state().show_previous);
        c.handle(Event::ShowPreviousToggled, now);
        assert!(c.state().show_previous);
        c.handle(Event::ShowPreviousToggled, now);
        assert!(!c.state().show_previous);
    }

    #[test]
    fn test_close_supersedes_pending_check() {
        let mut c = controller(None, &["v1.0.0"]);
        let now = Instant::now();
        c.handle(Event::InputChanged("1.0.0".into()), now);
        c.handle(Event::Closed, now);
        assert!(c.poll(now + DEFAULT_SETTLE_DELAY).is_empty());
        assert!(!c.state().has_conflict);
    }

    #[test]
    fn test_replace_versions_wholesale() {
        let mut c = controller(None, &[]);
        let now = Instant::now();
        c.replace_versions(set(&["v1.0.0"]));
        c.handle(Event::InputChanged("1.0.0".into()), now);
        let effects = c.poll(now + DEFAULT_SETTLE_DELAY);
        assert_eq!(effects, vec![Effect::ConflictChanged(true)]);
    }
}
