//! Constraint evaluation for candidate sailings.
//!
//! Each candidate (ferry, route, departure, arrival) is run through a
//! fixed chain of predicates, cheapest first; the first failing check
//! short-circuits and its reason is tallied by the caller. Rejections are
//! expected branches of the algorithm, not errors.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::tracker::ResourceTracker;
use crate::models::{Ferry, Port, Route};

/// Why a candidate sailing was rejected.
///
/// Closed set: every rejection path in the evaluator maps to exactly one
/// variant, so an unhandled case is a compile error, not a stray string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Ferry has a maintenance log entry on the departure date.
    Maintenance,
    /// Departure falls inside the ferry's turnaround gap.
    Turnaround,
    /// This exact (ferry, route, departure) already exists.
    Duplicate,
    /// Trip would push the ferry past its daily-hours cap.
    FerryOveruse,
    /// Departure or arrival falls in a port's curfew.
    Curfew,
    /// A port's berths are fully occupied at that minute.
    Berth,
    /// Another same-route departure is too close on the same day.
    Spacing,
    /// The route's service quota for the horizon is already met.
    Quota,
}

impl SkipReason {
    /// Stable lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Turnaround => "turnaround",
            Self::Duplicate => "duplicate",
            Self::FerryOveruse => "ferry_overuse",
            Self::Curfew => "curfew",
            Self::Berth => "berth",
            Self::Spacing => "spacing",
            Self::Quota => "quota",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A proposed sailing under evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Ferry under consideration.
    pub ferry: &'a Ferry,
    /// Route being filled.
    pub route: &'a Route,
    /// Proposed departure.
    pub departure: chrono::NaiveDateTime,
    /// Proposed arrival (crossing plus safety buffer).
    pub arrival: chrono::NaiveDateTime,
}

impl Candidate<'_> {
    /// Trip duration in hours, buffer included.
    pub fn trip_hours(&self) -> f64 {
        (self.arrival - self.departure).num_minutes() as f64 / 60.0
    }
}

/// Immutable per-route inputs shared across a route's candidates.
#[derive(Debug)]
pub struct ConstraintContext<'a> {
    /// The route's departure port.
    pub dep_port: &'a Port,
    /// The route's destination port.
    pub dest_port: &'a Port,
    /// Maintenance dates per ferry id.
    pub maintenance: &'a HashMap<&'a str, HashSet<NaiveDate>>,
    /// Services allowed for the route over the horizon.
    pub quota_target: u32,
    /// Same-route spacing window (minutes).
    pub spacing_min: i64,
    /// Suppress curfew and spacing checks (backfill / relaxed mode).
    pub relaxed: bool,
}

/// Runs the constraint chain; returns the first failing reason.
///
/// Check order (cheap before stateful): maintenance, turnaround,
/// duplicate, daily hours, curfew at both ends, berths at both ends,
/// spacing, quota. Relaxed mode skips curfew and spacing.
pub fn evaluate(
    candidate: &Candidate<'_>,
    ctx: &ConstraintContext<'_>,
    tracker: &ResourceTracker,
) -> Result<(), SkipReason> {
    let ferry = candidate.ferry;
    let route = candidate.route;
    let dep = candidate.departure;
    let arr = candidate.arrival;

    if ctx
        .maintenance
        .get(ferry.id.as_str())
        .is_some_and(|dates| dates.contains(&dep.date()))
    {
        return Err(SkipReason::Maintenance);
    }

    if let Some(last_arrival) = tracker.last_arrival(&ferry.id) {
        if dep < last_arrival + ferry.turnaround() {
            return Err(SkipReason::Turnaround);
        }
    }

    if tracker.is_duplicate(&ferry.id, &route.id, dep) {
        return Err(SkipReason::Duplicate);
    }

    let used = tracker.daily_hours_used(&ferry.id, dep.date());
    if used + candidate.trip_hours() > ferry.max_daily_hours {
        return Err(SkipReason::FerryOveruse);
    }

    if !ctx.relaxed {
        if !ctx.dep_port.is_open_at(dep.time()) {
            return Err(SkipReason::Curfew);
        }
        if !ctx.dest_port.is_open_at(arr.time()) {
            return Err(SkipReason::Curfew);
        }
    }

    if tracker.occupancy_at(&ctx.dep_port.id, dep) >= ctx.dep_port.berths
        || tracker.occupancy_at(&ctx.dest_port.id, arr) >= ctx.dest_port.berths
    {
        return Err(SkipReason::Berth);
    }

    if !ctx.relaxed
        && tracker.has_departure_within(&route.id, dep.date(), dep, ctx.spacing_min)
    {
        return Err(SkipReason::Spacing);
    }

    if tracker.services_for_route(&route.id) >= ctx.quota_target {
        return Err(SkipReason::Quota);
    }

    Ok(())
}
