//! Machine profile: one machine together with the issues reported against it.
//!
//! Issues reference machines by code (`machine_id`); the profile scopes the
//! issues view spec to that code.

use super::catalog::view_spec;
use super::config::ThresholdConfig;
use super::filter::{FilterState, Listing, Predicate};
use super::record::{Issue, Machine, ViewKind};
use super::stats::IssueStats;

/// Clause selecting the issues of one machine.
pub fn machine_scope(machine: &Machine) -> Predicate {
    Predicate::equals("machine_id", &machine.code)
}

#[derive(Debug, Clone)]
pub struct MachineProfile<'a> {
    pub machine: &'a Machine,
    /// The machine's issues, newest first.
    pub issues: Listing<'a, Issue>,
    pub stats: IssueStats,
}

impl<'a> MachineProfile<'a> {
    pub fn new(machine: &'a Machine, issues: &'a [Issue], thresholds: &ThresholdConfig) -> Self {
        let spec = view_spec(ViewKind::Issues, thresholds);
        let state = FilterState::new().restrict(machine_scope(machine));
        let issues = spec
            .filter(issues, &state)
            .sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let stats = IssueStats::from_records(issues.iter());

        Self { machine, issues, stats }
    }

    /// Issues that are neither resolved nor closed.
    pub fn open_issues(&self) -> usize {
        self.stats.open + self.stats.in_progress
    }
}
