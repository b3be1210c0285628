//! Input validation and timetable auditing.
//!
//! `validate_snapshot` checks structural integrity of the reference data
//! before a generation run. Detects:
//! - Duplicate IDs
//! - Routes with equal endpoints or duplicate port pairs
//! - References to unknown ports
//! - Degenerate capacities and operating limits
//!
//! `audit_schedules` independently re-checks a timetable against the
//! physical constraints (overlap, berths, daily hours, curfews); the
//! engine enforces these during generation, so the audit is a verifier
//! for externally supplied or hand-edited timetables.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::engine::tracker::minute_bucket;
use crate::models::Schedule;
use crate::snapshot::Snapshot;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A route departs and arrives at the same port.
    DegenerateRoute,
    /// Two routes cover the same directional port pair.
    DuplicateRoutePair,
    /// A route or ferry references a port that doesn't exist.
    UnknownPort,
    /// A port has no berths or a ferry has no capacity.
    ZeroCapacity,
    /// A ferry's turnaround or daily-hours limit is unusable.
    InvalidOperatingLimit,
    /// A port's operating hours wrap midnight without night operations.
    InvalidOperatingHours,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the reference data for a generation run.
///
/// Checks:
/// 1. No duplicate port, ferry, or route IDs
/// 2. Route endpoints exist and differ
/// 3. No two routes cover the same directional port pair
/// 4. Ferry home ports exist
/// 5. Ports have at least one berth; ferries have nonzero capacity
/// 6. Turnaround is non-negative; the daily-hours cap is positive
/// 7. Operating hours only wrap midnight when night operations are on
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(snapshot: &Snapshot) -> ValidationResult {
    let mut errors = Vec::new();

    let mut port_ids = HashSet::new();
    for port in &snapshot.ports {
        if !port_ids.insert(port.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate port ID: {}", port.id),
            ));
        }
        if port.berths == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Port '{}' has no berths", port.id),
            ));
        }
        if port.operating_start >= port.operating_end && !port.allows_night_ops {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidOperatingHours,
                format!(
                    "Port '{}' operating hours wrap midnight without night operations",
                    port.id
                ),
            ));
        }
    }

    let mut ferry_ids = HashSet::new();
    for ferry in &snapshot.ferries {
        if !ferry_ids.insert(ferry.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate ferry ID: {}", ferry.id),
            ));
        }
        if ferry.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroCapacity,
                format!("Ferry '{}' has zero capacity", ferry.id),
            ));
        }
        if ferry.turnaround_min < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidOperatingLimit,
                format!("Ferry '{}' has a negative turnaround", ferry.id),
            ));
        }
        if ferry.max_daily_hours <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidOperatingLimit,
                format!("Ferry '{}' has a non-positive daily-hours cap", ferry.id),
            ));
        }
        if let Some(home) = ferry.home_port.as_deref() {
            if !port_ids.contains(home) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPort,
                    format!("Ferry '{}' is homed at unknown port '{}'", ferry.id, home),
                ));
            }
        }
    }

    let mut route_ids = HashSet::new();
    let mut pairs = HashSet::new();
    for route in &snapshot.routes {
        if !route_ids.insert(route.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate route ID: {}", route.id),
            ));
        }
        if route.departure_port == route.destination_port {
            errors.push(ValidationError::new(
                ValidationErrorKind::DegenerateRoute,
                format!("Route '{}' departs and arrives at the same port", route.id),
            ));
        }
        for port_id in [&route.departure_port, &route.destination_port] {
            if !port_ids.contains(port_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPort,
                    format!("Route '{}' references unknown port '{}'", route.id, port_id),
                ));
            }
        }
        if !pairs.insert((route.departure_port.as_str(), route.destination_port.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRoutePair,
                format!(
                    "Route '{}' duplicates the pair {} -> {}",
                    route.id, route.departure_port, route.destination_port
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A constraint breach found while auditing a timetable.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditViolation {
    /// Violation category.
    pub kind: AuditViolationKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of audit violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditViolationKind {
    /// A ferry's sailings overlap, turnaround included.
    FerryOverlap,
    /// More simultaneous port calls than berths at some minute.
    BerthOverflow,
    /// A ferry exceeds its daily-hours cap.
    DailyHoursExceeded,
    /// A departure or arrival falls in a port's curfew.
    CurfewViolation,
    /// A sailing references an unknown ferry or route.
    UnknownReference,
}

impl AuditViolation {
    fn new(kind: AuditViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Audits a timetable against the snapshot's physical constraints.
///
/// Curfew findings are expected for sailings placed by the relaxed
/// backfill pass; callers deciding pass/fail on engine output should
/// filter those out.
pub fn audit_schedules(snapshot: &Snapshot, schedules: &[Schedule]) -> Vec<AuditViolation> {
    let mut violations = Vec::new();

    let ferries: HashMap<&str, _> = snapshot.ferries.iter().map(|f| (f.id.as_str(), f)).collect();
    let routes: HashMap<&str, _> = snapshot.routes.iter().map(|r| (r.id.as_str(), r)).collect();
    let ports: HashMap<&str, _> = snapshot.ports.iter().map(|p| (p.id.as_str(), p)).collect();

    // Per-ferry overlap, turnaround included.
    let mut by_ferry: HashMap<&str, Vec<&Schedule>> = HashMap::new();
    for schedule in schedules {
        by_ferry
            .entry(schedule.ferry_id.as_str())
            .or_default()
            .push(schedule);
    }
    for (ferry_id, mut sailings) in by_ferry {
        let Some(ferry) = ferries.get(ferry_id) else {
            violations.push(AuditViolation::new(
                AuditViolationKind::UnknownReference,
                format!("Timetable references unknown ferry '{ferry_id}'"),
            ));
            continue;
        };
        sailings.sort_by_key(|s| s.departure);
        for pair in sailings.windows(2) {
            let clear_at = pair[0].arrival + ferry.turnaround();
            if pair[1].departure < clear_at {
                violations.push(AuditViolation::new(
                    AuditViolationKind::FerryOverlap,
                    format!(
                        "Ferry '{}' departs at {} before clearing its {} arrival",
                        ferry_id, pair[1].departure, pair[0].arrival
                    ),
                ));
            }
        }
    }

    // Berth occupancy per minute bucket and daily hours.
    let mut occupancy: HashMap<(&str, chrono::NaiveDateTime), u32> = HashMap::new();
    let mut daily_hours: HashMap<(&str, NaiveDate), f64> = HashMap::new();
    for schedule in schedules {
        let Some(route) = routes.get(schedule.route_id.as_str()) else {
            violations.push(AuditViolation::new(
                AuditViolationKind::UnknownReference,
                format!("Timetable references unknown route '{}'", schedule.route_id),
            ));
            continue;
        };
        *occupancy
            .entry((
                route.departure_port.as_str(),
                minute_bucket(schedule.departure),
            ))
            .or_insert(0) += 1;
        *occupancy
            .entry((
                route.destination_port.as_str(),
                minute_bucket(schedule.arrival),
            ))
            .or_insert(0) += 1;
        *daily_hours
            .entry((schedule.ferry_id.as_str(), schedule.day))
            .or_insert(0.0) += schedule.trip_hours();

        if let (Some(dep), Some(dest)) = (
            ports.get(route.departure_port.as_str()),
            ports.get(route.destination_port.as_str()),
        ) {
            if !dep.is_open_at(schedule.departure.time()) {
                violations.push(AuditViolation::new(
                    AuditViolationKind::CurfewViolation,
                    format!(
                        "Departure {} falls in the curfew at '{}'",
                        schedule.departure, dep.id
                    ),
                ));
            }
            if !dest.is_open_at(schedule.arrival.time()) {
                violations.push(AuditViolation::new(
                    AuditViolationKind::CurfewViolation,
                    format!(
                        "Arrival {} falls in the curfew at '{}'",
                        schedule.arrival, dest.id
                    ),
                ));
            }
        }
    }
    for ((port_id, minute), count) in occupancy {
        if let Some(port) = ports.get(port_id) {
            if count > port.berths {
                violations.push(AuditViolation::new(
                    AuditViolationKind::BerthOverflow,
                    format!(
                        "{} port calls at '{}' at {} exceed {} berths",
                        count, port_id, minute, port.berths
                    ),
                ));
            }
        }
    }
    for ((ferry_id, day), hours) in daily_hours {
        if let Some(ferry) = ferries.get(ferry_id) {
            if hours > ferry.max_daily_hours {
                violations.push(AuditViolation::new(
                    AuditViolationKind::DailyHoursExceeded,
                    format!(
                        "Ferry '{}' logs {:.2} h on {} against a cap of {:.1}",
                        ferry_id, hours, day, ferry.max_daily_hours
                    ),
                ));
            }
        }
    }

    violations
}
