//! Candidate enumeration: departure windows and ferry ranking.
//!
//! Windows come from the route's preferred list unless a `ServicePattern`
//! overrides them for the weekday. Ferries are ranked home-fleet-first,
//! then nearest-by-distance to the departure port, with the id as a
//! deterministic tie-breaker.

use std::collections::HashMap;

use crate::geo::haversine_km;
use crate::models::{DepartureWindow, Ferry, Port, Route, ServicePattern};

/// Departure windows for a route on a weekday (0 = Monday).
///
/// A matching service pattern replaces the route's defaults outright.
pub fn windows_for<'a>(
    route: &'a Route,
    weekday: u32,
    patterns: &'a [ServicePattern],
) -> &'a [DepartureWindow] {
    patterns
        .iter()
        .find(|p| p.route_id == route.id && u32::from(p.weekday) == weekday)
        .map(|p| p.windows.as_slice())
        .unwrap_or(&route.windows)
}

/// Active ferries for a route, in preference order.
///
/// Filter: home port equals the route's departure port, or no home port.
/// If that leaves nothing, fall back to the whole active fleet. Sort
/// ascending by haversine distance from the ferry's home port (the
/// departure port itself when it has none) to the departure port;
/// ferries with an unresolvable home port sort last.
pub fn rank_ferries<'a>(
    route: &Route,
    ferries: &'a [Ferry],
    ports: &HashMap<&str, &Port>,
) -> Vec<&'a Ferry> {
    let Some(dep_port) = ports.get(route.departure_port.as_str()) else {
        return Vec::new();
    };

    let active: Vec<&Ferry> = ferries.iter().filter(|f| f.active).collect();
    let home_fleet: Vec<&Ferry> = active
        .iter()
        .copied()
        .filter(|f| {
            f.home_port.is_none() || f.home_port.as_deref() == Some(route.departure_port.as_str())
        })
        .collect();

    let mut pool = if home_fleet.is_empty() { active } else { home_fleet };

    // Unhomed ferries count as already at the departure port; ferries
    // whose home port is missing from the index rank last.
    let distance_to_dep = |ferry: &Ferry| -> f64 {
        match ferry.home_port.as_deref() {
            None => 0.0,
            Some(id) => match ports.get(id) {
                Some(home) => haversine_km(
                    home.latitude,
                    home.longitude,
                    dep_port.latitude,
                    dep_port.longitude,
                ),
                None => f64::INFINITY,
            },
        }
    };

    pool.sort_by(|a, b| {
        distance_to_dep(a)
            .total_cmp(&distance_to_dep(b))
            .then_with(|| a.id.cmp(&b.id))
    });
    pool
}
