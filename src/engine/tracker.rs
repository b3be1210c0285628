//! Per-run resource occupancy state.
//!
//! One `ResourceTracker` is owned by a single generation run. It carries
//! the mutable state that makes the greedy scan order-dependent: per-ferry
//! last arrival and daily hours, minute-bucketed port occupancy, per-route
//! service counts and departures, and the duplicate-key set.
//!
//! Seeding: every map is pre-seeded from schedules already committed
//! inside the horizon — port occupancy, duplicate keys, route departures,
//! route service counts, per-ferry daily hours, and per-ferry last
//! arrival — so reruns over an unchanged snapshot reject every candidate.
//! Ferry last-arrival is floored at `horizon start − turnaround` (making
//! the first trip of a fresh run turnaround-eligible) and raised to the
//! latest existing in-horizon arrival, so a rerun cannot double-book a
//! ferry that is already sailing.

use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

use crate::models::{Ferry, Route, Schedule};

/// Truncates a timestamp to its minute bucket.
pub fn minute_bucket(t: NaiveDateTime) -> NaiveDateTime {
    t - Duration::seconds(i64::from(t.second())) - Duration::nanoseconds(i64::from(t.nanosecond()))
}

/// Mutable occupancy state for one generation run.
#[derive(Debug, Default)]
pub struct ResourceTracker {
    ferry_last_arrival: HashMap<String, NaiveDateTime>,
    ferry_daily_hours: HashMap<(String, NaiveDate), f64>,
    port_occupancy: HashMap<(String, NaiveDateTime), u32>,
    route_services: HashMap<String, u32>,
    route_departures: HashMap<(String, NaiveDate), Vec<NaiveDateTime>>,
    committed_keys: HashSet<(String, String, NaiveDateTime)>,
}

impl ResourceTracker {
    /// Builds a tracker seeded for a run starting at `start`.
    ///
    /// `existing` must already be filtered to schedules inside the horizon.
    pub fn seed(start: NaiveDate, ferries: &[Ferry], routes: &[Route], existing: &[Schedule]) -> Self {
        let mut tracker = Self::default();

        let run_epoch = start.and_time(chrono::NaiveTime::MIN);
        for ferry in ferries {
            tracker
                .ferry_last_arrival
                .insert(ferry.id.clone(), run_epoch - ferry.turnaround());
        }

        let route_ports: HashMap<&str, (&str, &str)> = routes
            .iter()
            .map(|r| {
                (
                    r.id.as_str(),
                    (r.departure_port.as_str(), r.destination_port.as_str()),
                )
            })
            .collect();

        for schedule in existing {
            tracker.committed_keys.insert((
                schedule.ferry_id.clone(),
                schedule.route_id.clone(),
                schedule.departure,
            ));
            tracker
                .route_departures
                .entry((schedule.route_id.clone(), schedule.day))
                .or_default()
                .push(schedule.departure);
            *tracker
                .route_services
                .entry(schedule.route_id.clone())
                .or_insert(0) += 1;

            if let Some(&(dep_port, dest_port)) = route_ports.get(schedule.route_id.as_str()) {
                tracker.bump_occupancy(dep_port, schedule.departure);
                tracker.bump_occupancy(dest_port, schedule.arrival);
            }

            tracker
                .ferry_last_arrival
                .entry(schedule.ferry_id.clone())
                .and_modify(|last| *last = (*last).max(schedule.arrival))
                .or_insert(schedule.arrival);
            *tracker
                .ferry_daily_hours
                .entry((schedule.ferry_id.clone(), schedule.day))
                .or_insert(0.0) += schedule.trip_hours();
        }

        tracker
    }

    fn bump_occupancy(&mut self, port_id: &str, at: NaiveDateTime) {
        *self
            .port_occupancy
            .entry((port_id.to_string(), minute_bucket(at)))
            .or_insert(0) += 1;
    }

    /// Latest arrival recorded for a ferry.
    pub fn last_arrival(&self, ferry_id: &str) -> Option<NaiveDateTime> {
        self.ferry_last_arrival.get(ferry_id).copied()
    }

    /// Hours already accumulated by a ferry on an operational day.
    pub fn daily_hours_used(&self, ferry_id: &str, day: NaiveDate) -> f64 {
        self.ferry_daily_hours
            .get(&(ferry_id.to_string(), day))
            .copied()
            .unwrap_or(0.0)
    }

    /// Schedules occupying a port's minute bucket.
    pub fn occupancy_at(&self, port_id: &str, at: NaiveDateTime) -> u32 {
        self.port_occupancy
            .get(&(port_id.to_string(), minute_bucket(at)))
            .copied()
            .unwrap_or(0)
    }

    /// Services counted against a route's quota (pre-existing plus
    /// committed this run).
    pub fn services_for_route(&self, route_id: &str) -> u32 {
        self.route_services.get(route_id).copied().unwrap_or(0)
    }

    /// Whether this exact (ferry, route, departure) already exists.
    pub fn is_duplicate(&self, ferry_id: &str, route_id: &str, departure: NaiveDateTime) -> bool {
        self.committed_keys.contains(&(
            ferry_id.to_string(),
            route_id.to_string(),
            departure,
        ))
    }

    /// Whether the route already departs within `window_min` minutes of
    /// `departure` on the same operational day.
    pub fn has_departure_within(
        &self,
        route_id: &str,
        day: NaiveDate,
        departure: NaiveDateTime,
        window_min: i64,
    ) -> bool {
        self.route_departures
            .get(&(route_id.to_string(), day))
            .is_some_and(|deps| {
                deps.iter()
                    .any(|d| (*d - departure).num_minutes().abs() < window_min)
            })
    }

    /// Commits an accepted sailing, updating every occupancy map.
    pub fn record_commit(
        &mut self,
        ferry: &Ferry,
        route: &Route,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
    ) {
        let day = departure.date();
        let trip_hours = (arrival - departure).num_minutes() as f64 / 60.0;

        self.ferry_last_arrival.insert(ferry.id.clone(), arrival);
        *self
            .ferry_daily_hours
            .entry((ferry.id.clone(), day))
            .or_insert(0.0) += trip_hours;
        self.bump_occupancy(&route.departure_port, departure);
        self.bump_occupancy(&route.destination_port, arrival);
        *self.route_services.entry(route.id.clone()).or_insert(0) += 1;
        self.route_departures
            .entry((route.id.clone(), day))
            .or_default()
            .push(departure);
        self.committed_keys
            .insert((ferry.id.clone(), route.id.clone(), departure));
    }
}
