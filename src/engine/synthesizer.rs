//! Schedule synthesis: the constrained greedy scan and the relaxed
//! backfill pass.
//!
//! # Algorithm
//!
//! 1. For each route: derive the horizon quota target and trip duration,
//!    rank the fleet by proximity to the departure port.
//! 2. For each target day × window × whole hour: pre-check curfews, then
//!    offer the slot to each ranked ferry in turn; the first ferry passing
//!    every constraint commits (at most one sailing per hour slot).
//! 3. If no ferry passes, the first-encountered rejection reason is
//!    tallied. Meeting the quota short-circuits the route's remaining days.
//! 4. A second pass backfills routes still under quota at a default slot
//!    with curfew and spacing relaxed, so scarce candidate hours cannot
//!    leave a route without its minimum service.
//!
//! The loop bounds are finite (routes × days × windows × hours × ferries),
//! so termination is structural. Rejected candidates are never retried.

use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;
use tracing::{debug, warn};

use super::candidates::{rank_ferries, windows_for};
use super::constraints::{evaluate, Candidate, ConstraintContext, SkipReason};
use super::report::{GenerationReport, RouteCoverage};
use super::tracker::ResourceTracker;
use super::weather;
use super::EngineConfig;
use crate::geo::haversine_km;
use crate::models::{Ferry, Port, Route, Schedule};
use crate::snapshot::Snapshot;

/// The generation time horizon: `days` consecutive dates from `start`.
#[derive(Debug, Clone, Copy)]
pub struct Horizon {
    /// First operational day (inclusive).
    pub start: NaiveDate,
    /// Number of days covered.
    pub days: u32,
}

impl Horizon {
    /// Creates a horizon.
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self { start, days }
    }

    /// One week starting at `start`.
    pub fn week(start: NaiveDate) -> Self {
        Self::new(start, 7)
    }

    /// End date (exclusive).
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(i64::from(self.days))
    }

    /// Number of (possibly partial) weeks covered.
    pub fn weeks(&self) -> u32 {
        self.days.div_ceil(7)
    }

    /// Whether a date falls inside the horizon.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end()
    }

    /// Iterates the horizon's dates in order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.days).map(move |i| start + Duration::days(i64::from(i)))
    }
}

/// Precondition failures: nothing to schedule with. The engine aborts
/// before producing any output; these are the only hard errors a run can
/// surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The snapshot contains no ports.
    #[error("no ports defined")]
    NoPorts,
    /// The snapshot contains no active ferries.
    #[error("no active ferries available")]
    NoActiveFerries,
    /// No routes exist, or none matched the requested filter.
    #[error("no routes matched the request")]
    NoRoutes,
}

/// The schedule generation engine for one configuration.
#[derive(Debug, Clone)]
pub struct Synthesizer {
    config: EngineConfig,
}

impl Synthesizer {
    /// Creates a synthesizer with the given tunables.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates schedules for every route over the horizon.
    pub fn run(
        &self,
        snapshot: &Snapshot,
        horizon: Horizon,
    ) -> Result<GenerationReport, GenerationError> {
        self.run_filtered(snapshot, horizon, None)
    }

    /// Generates schedules for a subset of routes over the horizon.
    ///
    /// With `route_filter = None` all routes are processed. The returned
    /// report carries the created sailings; the caller persists them in a
    /// single transaction (bulk insert), so a failure downstream leaves no
    /// half-written timetable.
    pub fn run_filtered(
        &self,
        snapshot: &Snapshot,
        horizon: Horizon,
        route_filter: Option<&HashSet<String>>,
    ) -> Result<GenerationReport, GenerationError> {
        if snapshot.ports.is_empty() {
            return Err(GenerationError::NoPorts);
        }
        if !snapshot.ferries.iter().any(|f| f.active) {
            return Err(GenerationError::NoActiveFerries);
        }
        let routes: Vec<&Route> = snapshot
            .routes
            .iter()
            .filter(|r| route_filter.is_none_or(|wanted| wanted.contains(&r.id)))
            .collect();
        if routes.is_empty() {
            return Err(GenerationError::NoRoutes);
        }

        let ports: HashMap<&str, &Port> =
            snapshot.ports.iter().map(|p| (p.id.as_str(), p)).collect();
        let mut maintenance: HashMap<&str, HashSet<NaiveDate>> = HashMap::new();
        for log in &snapshot.maintenance {
            maintenance
                .entry(log.ferry_id.as_str())
                .or_default()
                .insert(log.date);
        }

        let existing: Vec<Schedule> = snapshot
            .schedules
            .iter()
            .filter(|s| horizon.contains(s.day))
            .cloned()
            .collect();
        let mut tracker =
            ResourceTracker::seed(horizon.start, &snapshot.ferries, &snapshot.routes, &existing);

        let mut report = GenerationReport::default();
        for &route in &routes {
            self.generate_route(
                route,
                snapshot,
                &ports,
                &maintenance,
                horizon,
                &mut tracker,
                &mut report,
            );
        }
        self.backfill(
            &routes,
            snapshot,
            &ports,
            &maintenance,
            horizon,
            &mut tracker,
            &mut report,
        );

        for &route in &routes {
            report.coverage.push(RouteCoverage {
                route_id: route.id.clone(),
                achieved: tracker.services_for_route(&route.id),
                target: quota_target(route, horizon),
            });
        }
        Ok(report)
    }

    /// Primary constrained greedy pass for one route.
    #[allow(clippy::too_many_arguments)]
    fn generate_route(
        &self,
        route: &Route,
        snapshot: &Snapshot,
        ports: &HashMap<&str, &Port>,
        maintenance: &HashMap<&str, HashSet<NaiveDate>>,
        horizon: Horizon,
        tracker: &mut ResourceTracker,
        report: &mut GenerationReport,
    ) {
        let (Some(&dep_port), Some(&dest_port)) = (
            ports.get(route.departure_port.as_str()),
            ports.get(route.destination_port.as_str()),
        ) else {
            warn!(route = %route.id, "route references an unknown port; skipping");
            return;
        };

        let target = quota_target(route, horizon);
        if target == 0 {
            return;
        }
        let trip = self.trip_duration(route, dep_port, dest_port, snapshot);
        let buffer = Duration::minutes(route.safety_buffer_min);
        let ranked = rank_ferries(route, &snapshot.ferries, ports);
        let ctx = ConstraintContext {
            dep_port,
            dest_port,
            maintenance,
            quota_target: target,
            spacing_min: self.config.spacing_min,
            relaxed: self.config.relaxed,
        };
        let weekdays = route.tier.target_weekdays();

        'days: for day in horizon.dates() {
            let weekday = day.weekday().num_days_from_monday();
            if !weekdays.contains(&weekday) {
                continue;
            }
            if tracker.services_for_route(&route.id) >= target {
                break;
            }
            for window in windows_for(route, weekday, &snapshot.patterns) {
                for hour in window.candidate_hours() {
                    if tracker.services_for_route(&route.id) >= target {
                        break 'days;
                    }
                    let Some(slot) = NaiveTime::from_hms_opt(hour, 0, 0) else {
                        continue;
                    };
                    let departure = day.and_time(slot);
                    let arrival = departure + trip + buffer;

                    // Curfew pre-check, before any per-ferry state lookups.
                    if !self.config.relaxed
                        && !(dep_port.is_open_at(departure.time())
                            && dest_port.is_open_at(arrival.time()))
                    {
                        report.tally(SkipReason::Curfew);
                        continue;
                    }

                    let mut first_reason: Option<SkipReason> = None;
                    let mut committed = false;
                    for &ferry in &ranked {
                        let candidate = Candidate {
                            ferry,
                            route,
                            departure,
                            arrival,
                        };
                        match evaluate(&candidate, &ctx, tracker) {
                            Ok(()) => {
                                self.commit(ferry, route, departure, arrival, snapshot, tracker, report);
                                committed = true;
                                break;
                            }
                            Err(reason) => {
                                first_reason.get_or_insert(reason);
                            }
                        }
                    }
                    if !committed {
                        if let Some(reason) = first_reason {
                            report.tally(reason);
                        }
                    }
                }
            }
        }
    }

    /// Relaxed pass guaranteeing minimum service on under-filled routes.
    ///
    /// Cycles the horizon's days at the default slot, stepping the hour
    /// after each full cycle; curfew and spacing are waived but physical
    /// constraints (turnaround, berths, daily hours, maintenance,
    /// duplicates) still hold. Bounded by an iteration cap so dense
    /// networks cannot spin.
    #[allow(clippy::too_many_arguments)]
    fn backfill(
        &self,
        routes: &[&Route],
        snapshot: &Snapshot,
        ports: &HashMap<&str, &Port>,
        maintenance: &HashMap<&str, HashSet<NaiveDate>>,
        horizon: Horizon,
        tracker: &mut ResourceTracker,
        report: &mut GenerationReport,
    ) {
        if horizon.days == 0 {
            return;
        }
        for &route in routes {
            let target = quota_target(route, horizon);
            if tracker.services_for_route(&route.id) >= target {
                continue;
            }
            let (Some(&dep_port), Some(&dest_port)) = (
                ports.get(route.departure_port.as_str()),
                ports.get(route.destination_port.as_str()),
            ) else {
                continue;
            };

            let trip = self.trip_duration(route, dep_port, dest_port, snapshot);
            let buffer = Duration::minutes(route.safety_buffer_min);
            let ranked = rank_ferries(route, &snapshot.ferries, ports);
            let ctx = ConstraintContext {
                dep_port,
                dest_port,
                maintenance,
                quota_target: target,
                spacing_min: self.config.spacing_min,
                relaxed: true,
            };

            let cap = target.saturating_mul(4);
            let mut attempts = 0u32;
            while tracker.services_for_route(&route.id) < target && attempts < cap {
                let cycle = attempts / horizon.days;
                let day_offset = attempts % horizon.days;
                attempts += 1;

                let hour = (self.config.backfill_hour + 2 * cycle).min(21);
                let Some(slot) = NaiveTime::from_hms_opt(hour, 0, 0) else {
                    continue;
                };
                let day = horizon.start + Duration::days(i64::from(day_offset));
                let departure = day.and_time(slot);
                let arrival = departure + trip + buffer;

                for &ferry in &ranked {
                    let candidate = Candidate {
                        ferry,
                        route,
                        departure,
                        arrival,
                    };
                    if evaluate(&candidate, &ctx, tracker).is_ok() {
                        self.commit(ferry, route, departure, arrival, snapshot, tracker, report);
                        break;
                    }
                }
            }
            if tracker.services_for_route(&route.id) < target {
                debug!(route = %route.id, "backfill hit its iteration cap below quota");
            }
        }
    }

    /// Commits an accepted candidate: weather downgrade, tracker update,
    /// and the new sailing appended to the report.
    #[allow(clippy::too_many_arguments)]
    fn commit(
        &self,
        ferry: &Ferry,
        route: &Route,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        snapshot: &Snapshot,
        tracker: &mut ResourceTracker,
        report: &mut GenerationReport,
    ) {
        let status = weather::initial_status(&route.id, &snapshot.weather, &self.config);
        let schedule = Schedule::new(
            ferry.id.as_str(),
            route.id.as_str(),
            departure,
            arrival,
            ferry.capacity,
        )
        .with_status(status)
        .auto_generated();
        tracker.record_commit(ferry, route, departure, arrival);
        debug!(
            route = %route.id,
            ferry = %ferry.id,
            %departure,
            status = %status,
            "committed sailing"
        );
        report.created.push(schedule);
    }

    /// Crossing duration for a route: the known-duration table by port
    /// name, else the route's own estimate, else distance over the
    /// fallback speed, floored at one hour.
    fn trip_duration(
        &self,
        route: &Route,
        dep_port: &Port,
        dest_port: &Port,
        snapshot: &Snapshot,
    ) -> Duration {
        if let Some(minutes) = snapshot.duration_override(&dep_port.name, &dest_port.name) {
            return Duration::minutes(minutes);
        }
        if route.duration_min > 0 {
            return Duration::minutes(route.duration_min);
        }
        let distance = if route.distance_km > 0.0 {
            route.distance_km
        } else {
            haversine_km(
                dep_port.latitude,
                dep_port.longitude,
                dest_port.latitude,
                dest_port.longitude,
            )
        };
        let minutes = ((distance / self.config.fallback_speed_kmh) * 60.0).round() as i64;
        Duration::minutes(minutes.max(60))
    }
}

/// Services a route must reach over the horizon: the weekly minimum scaled
/// to the number of (possibly partial) weeks.
pub fn quota_target(route: &Route, horizon: Horizon) -> u32 {
    route.tier.min_weekly_services() * horizon.weeks()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{hm, MaintenanceLog, ScheduleStatus, ServicePattern, WeatherCondition};
    use crate::snapshot::DurationOverride;
    use chrono::Timelike;

    // 2026-03-02 is a Monday.
    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn dt(day_offset: i64, hour: u32) -> NaiveDateTime {
        (start() + Duration::days(day_offset))
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn config() -> EngineConfig {
        EngineConfig::at(start().and_time(NaiveTime::MIN))
    }

    /// Suva→Natovi, major tier, one home-ported ferry, two windows.
    fn base_snapshot() -> Snapshot {
        let mut s = Snapshot {
            ports: vec![
                Port::new("suva", "Suva", -18.1416, 178.4419)
                    .with_operating_hours(hm(5, 0), hm(21, 0))
                    .with_berths(2),
                Port::new("natovi", "Natovi", -17.7333, 178.5500)
                    .with_operating_hours(hm(5, 0), hm(21, 0))
                    .with_berths(2),
            ],
            ferries: vec![Ferry::new("sea-lion", "MV Sea Lion", 180)
                .with_turnaround(60)
                .with_max_daily_hours(12.0)
                .with_home_port("suva")],
            routes: vec![Route::new("suva-natovi", "suva", "natovi")
                .with_duration_min(90)
                .with_window("06:00-08:00")
                .unwrap()
                .with_window("12:00-14:00")
                .unwrap()],
            duration_overrides: vec![DurationOverride {
                from: "Suva".into(),
                to: "Natovi".into(),
                minutes: 90,
            }],
            ..Snapshot::default()
        };
        s.finalize();
        s
    }

    #[test]
    fn test_scenario_major_route_fills_quota() {
        let snapshot = base_snapshot();
        let report = Synthesizer::new(config())
            .run(&snapshot, Horizon::week(start()))
            .unwrap();

        // Two sailings per day (06:00 and 12:00; later hours fall inside
        // the turnaround gap) over 7 days exactly meets the quota of 14.
        assert_eq!(report.created_count(), 14);
        assert!(report
            .created
            .iter()
            .all(|s| { matches!(s.departure.time().hour(), 6..=8 | 12..=14) }));
        assert!(report.created.iter().all(|s| s.auto_generated));
        assert_eq!(report.skipped.get(&SkipReason::Turnaround), Some(&26));
        assert_eq!(report.coverage.len(), 1);
        assert!(report.coverage[0].met());
        assert_eq!(report.coverage[0].target, 14);
    }

    #[test]
    fn test_quota_monotonicity_over_partial_weeks() {
        let snapshot = base_snapshot();
        let horizon = Horizon::new(start(), 10); // ceil(10/7) = 2 weeks
        let report = Synthesizer::new(config()).run(&snapshot, horizon).unwrap();
        assert!(report.created_count() <= 28);
        assert_eq!(report.coverage[0].target, 28);
    }

    #[test]
    fn test_idempotent_rerun_creates_nothing() {
        let mut snapshot = base_snapshot();
        let synthesizer = Synthesizer::new(config());
        let horizon = Horizon::week(start());

        let first = synthesizer.run(&snapshot, horizon).unwrap();
        assert_eq!(first.created_count(), 14);
        snapshot.schedules.extend(first.created);

        let second = synthesizer.run(&snapshot, horizon).unwrap();
        assert_eq!(second.created_count(), 0);
        assert!(second.coverage[0].met());
    }

    #[test]
    fn test_scenario_maintenance_day_excluded() {
        let mut snapshot = base_snapshot();
        let maintenance_day = start() + Duration::days(2);
        snapshot
            .maintenance
            .push(MaintenanceLog::new("sea-lion", maintenance_day));

        let report = Synthesizer::new(config())
            .run(&snapshot, Horizon::week(start()))
            .unwrap();

        assert!(report
            .created
            .iter()
            .all(|s| !(s.ferry_id == "sea-lion" && s.day == maintenance_day)));
        // All six hour slots on the maintenance day tally as maintenance;
        // backfill recovers the two lost sailings on other days.
        assert_eq!(report.skipped.get(&SkipReason::Maintenance), Some(&6));
        assert_eq!(report.created_count(), 14);
        assert!(report.coverage[0].met());
    }

    #[test]
    fn test_scenario_shared_berth_rejection() {
        // Two routes out of a one-berth Suva with the same preferred
        // slot, and a manually entered sailing already holding the 08:00
        // minute bucket every day.
        let mut snapshot = Snapshot {
            ports: vec![
                Port::new("suva", "Suva", -18.1416, 178.4419)
                    .with_operating_hours(hm(5, 0), hm(21, 0))
                    .with_berths(1),
                Port::new("natovi", "Natovi", -17.7333, 178.5500)
                    .with_operating_hours(hm(5, 0), hm(21, 0))
                    .with_berths(2),
                Port::new("levuka", "Levuka", -17.6836, 178.8333)
                    .with_operating_hours(hm(5, 0), hm(21, 0))
                    .with_berths(2),
            ],
            ferries: vec![
                Ferry::new("sea-lion", "MV Sea Lion", 180)
                    .with_turnaround(60)
                    .with_max_daily_hours(12.0)
                    .with_home_port("suva"),
                Ferry::new("relief", "MV Relief", 80).inactive(),
            ],
            routes: vec![
                Route::new("suva-natovi", "suva", "natovi")
                    .with_duration_min(90)
                    .with_window("08:00-08:30")
                    .unwrap(),
                Route::new("suva-levuka", "suva", "levuka")
                    .with_duration_min(120)
                    .with_window("08:00-08:30")
                    .unwrap(),
            ],
            ..Snapshot::default()
        };
        snapshot.finalize();
        for offset in 0..7 {
            let dep = dt(offset, 8);
            snapshot
                .schedules
                .push(Schedule::new("relief", "suva-natovi", dep, dep + Duration::minutes(105), 80));
        }

        let report = Synthesizer::new(config())
            .run(&snapshot, Horizon::week(start()))
            .unwrap();

        // Both routes find their 08:00 slot held at Suva on all seven
        // days; only backfill at other hours gets through.
        assert_eq!(report.skipped.get(&SkipReason::Berth), Some(&14));
        assert!(report.created_count() > 0);
        assert!(report
            .created
            .iter()
            .all(|s| s.departure.time().hour() != 8));
    }

    #[test]
    fn test_multi_route_rerun_does_not_double_book() {
        // Two routes sharing one ferry: the rerun must see the ferry's
        // existing arrivals, or slots the first run rejected as
        // turnaround would commit on a ferry already at sea.
        let mut snapshot = base_snapshot();
        snapshot.ports.push(
            Port::new("levuka", "Levuka", -17.6836, 178.8333)
                .with_operating_hours(hm(5, 0), hm(21, 0))
                .with_berths(2),
        );
        snapshot.routes.push(
            Route::new("suva-levuka", "suva", "levuka")
                .with_duration_min(120)
                .with_window("07:00-10:00")
                .unwrap(),
        );
        snapshot.finalize();

        let synthesizer = Synthesizer::new(config());
        let horizon = Horizon::week(start());

        let first = synthesizer.run(&snapshot, horizon).unwrap();
        assert!(first.created_count() > 0);
        snapshot.schedules.extend(first.created);

        let second = synthesizer.run(&snapshot, horizon).unwrap();
        assert_eq!(second.created_count(), 0);

        // The combined timetable keeps the no-overlap invariant.
        let violations = crate::validation::audit_schedules(&snapshot, &snapshot.schedules);
        assert!(violations
            .iter()
            .all(|v| v.kind == crate::validation::AuditViolationKind::CurfewViolation));
    }

    #[test]
    fn test_scenario_high_wind_delays_all_created() {
        let mut snapshot = base_snapshot();
        let now = start().and_time(NaiveTime::MIN);
        snapshot.weather.push(
            WeatherCondition::new(
                "suva-natovi",
                "suva",
                35.0,
                now,
                now + Duration::days(30),
            )
            .with_condition("gale warning"),
        );

        let report = Synthesizer::new(config())
            .run(&snapshot, Horizon::week(start()))
            .unwrap();

        assert!(report.created_count() > 0);
        assert!(report
            .created
            .iter()
            .all(|s| s.status == ScheduleStatus::Delayed));
    }

    #[test]
    fn test_scenario_no_active_ferries_is_precondition_error() {
        let mut snapshot = base_snapshot();
        for ferry in &mut snapshot.ferries {
            ferry.active = false;
        }
        let result = Synthesizer::new(config()).run(&snapshot, Horizon::week(start()));
        assert_eq!(result.unwrap_err(), GenerationError::NoActiveFerries);
    }

    #[test]
    fn test_no_ports_and_no_routes_errors() {
        let synthesizer = Synthesizer::new(config());
        let horizon = Horizon::week(start());

        let empty = Snapshot::default();
        assert_eq!(
            synthesizer.run(&empty, horizon).unwrap_err(),
            GenerationError::NoPorts
        );

        let snapshot = base_snapshot();
        let unknown = HashSet::from(["nowhere".to_string()]);
        assert_eq!(
            synthesizer
                .run_filtered(&snapshot, horizon, Some(&unknown))
                .unwrap_err(),
            GenerationError::NoRoutes
        );
    }

    #[test]
    fn test_backfill_rescues_curfew_starved_route() {
        // Windows land entirely in the curfew; only the relaxed backfill
        // pass can provide the minimum service.
        let mut snapshot = Snapshot {
            ports: vec![
                Port::new("suva", "Suva", -18.1416, 178.4419)
                    .with_operating_hours(hm(9, 0), hm(10, 0))
                    .with_berths(2),
                Port::new("kadavu", "Vunisea", -19.0500, 178.1667)
                    .with_operating_hours(hm(9, 0), hm(10, 0))
                    .with_berths(2),
            ],
            ferries: vec![Ferry::new("sea-lion", "MV Sea Lion", 180)
                .with_turnaround(60)
                .with_max_daily_hours(12.0)],
            routes: vec![Route::new("suva-kadavu", "suva", "kadavu")
                .with_duration_min(300)
                .with_window("02:00-03:00")
                .unwrap()],
            ..Snapshot::default()
        };
        snapshot.finalize();

        let report = Synthesizer::new(config())
            .run(&snapshot, Horizon::week(start()))
            .unwrap();

        // Remote tier: three target days, two curfew hour slots each in
        // the primary pass, then filled by backfill at the default slot.
        assert_eq!(report.skipped.get(&SkipReason::Curfew), Some(&6));
        assert_eq!(report.created_count(), 3);
        assert!(report.coverage[0].met());
        assert!(report.created.iter().all(|s| s.departure.time().hour() == 8));
    }

    #[test]
    fn test_service_pattern_overrides_windows() {
        let mut snapshot = base_snapshot();
        // Mondays sail in the evening instead.
        snapshot.patterns.push(ServicePattern::new(
            "suva-natovi",
            0,
            vec!["16:00-17:00".parse().unwrap()],
        ));

        let report = Synthesizer::new(config())
            .run(&snapshot, Horizon::new(start(), 1))
            .unwrap();

        assert!(!report.created.is_empty());
        assert!(report
            .created
            .iter()
            .all(|s| s.departure.time().hour() >= 16));
    }

    #[test]
    fn test_horizon_arithmetic() {
        let h = Horizon::new(start(), 10);
        assert_eq!(h.weeks(), 2);
        assert_eq!(h.end(), start() + Duration::days(10));
        assert!(h.contains(start()));
        assert!(!h.contains(h.end()));
        assert_eq!(h.dates().count(), 10);
    }
}
