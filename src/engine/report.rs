//! Generation run summary.
//!
//! Counts created sailings, tallies skip reasons, and reports achieved
//! versus target coverage per route. The `Display` form is the
//! human-readable summary printed by the CLI (plain text, log-safe).

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::constraints::SkipReason;
use crate::models::Schedule;

/// Achieved-vs-target service count for one route over the horizon.
#[derive(Debug, Clone, Serialize)]
pub struct RouteCoverage {
    /// Route id.
    pub route_id: String,
    /// Services on the timetable for the horizon (pre-existing + created).
    pub achieved: u32,
    /// Quota target for the horizon.
    pub target: u32,
}

impl RouteCoverage {
    /// Whether the route met its quota.
    pub fn met(&self) -> bool {
        self.achieved >= self.target
    }
}

/// Result of a generation run.
#[derive(Debug, Default, Serialize)]
pub struct GenerationReport {
    /// Sailings created this run, in commit order.
    pub created: Vec<Schedule>,
    /// Rejected hour-slots by first-encountered reason.
    pub skipped: BTreeMap<SkipReason, usize>,
    /// Per-route coverage over the horizon.
    pub coverage: Vec<RouteCoverage>,
}

impl GenerationReport {
    /// Number of sailings created this run.
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    /// Total rejected hour-slots.
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    /// Number of routes that missed their quota.
    pub fn routes_below_target(&self) -> usize {
        self.coverage.iter().filter(|c| !c.met()).count()
    }

    pub(crate) fn tally(&mut self, reason: SkipReason) {
        *self.skipped.entry(reason).or_insert(0) += 1;
    }
}

impl fmt::Display for GenerationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "created {} schedules", self.created_count())?;

        if !self.skipped.is_empty() {
            writeln!(f, "skipped slots:")?;
            for (reason, count) in &self.skipped {
                writeln!(f, "  {:<13} {}", reason.as_str(), count)?;
            }
        }

        if !self.coverage.is_empty() {
            writeln!(f, "route coverage:")?;
            for c in &self.coverage {
                let marker = if c.met() { "" } else { "  (below target)" };
                writeln!(f, "  {}: {}/{}{}", c.route_id, c.achieved, c.target, marker)?;
            }
        }

        Ok(())
    }
}
