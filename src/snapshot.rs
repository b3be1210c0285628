//! Pre-loaded, immutable input set for one generation run.
//!
//! All reference data — ports, fleet, routes, patterns, maintenance,
//! weather, existing schedules — is fetched once up front into a
//! `Snapshot`. The engine never touches external storage during its scan;
//! the caller persists the run's output afterwards in a single transaction.
//!
//! Snapshots round-trip as JSON, which is also the CLI's data-file format.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::geo::haversine_km;
use crate::models::{
    DepartureWindow, Ferry, MaintenanceLog, Port, Route, Schedule, ServicePattern, ServiceTier,
    WeatherCondition,
};

/// A known crossing duration between two ports, keyed by port name.
///
/// Overrides the distance-based duration estimate for crossings with
/// established timings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationOverride {
    /// Departure port name.
    pub from: String,
    /// Destination port name.
    pub to: String,
    /// Crossing duration (minutes), excluding the safety buffer.
    pub minutes: i64,
}

/// The full input set for a generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// All ports in the network.
    pub ports: Vec<Port>,
    /// The fleet, active and inactive.
    pub ferries: Vec<Ferry>,
    /// All routes.
    pub routes: Vec<Route>,
    /// Per-weekday window overrides.
    #[serde(default)]
    pub patterns: Vec<ServicePattern>,
    /// Maintenance log entries.
    #[serde(default)]
    pub maintenance: Vec<MaintenanceLog>,
    /// Weather readings.
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    /// Schedules already committed (for dedup and occupancy seeding).
    #[serde(default)]
    pub schedules: Vec<Schedule>,
    /// Known crossing durations by port-name pair.
    #[serde(default)]
    pub duration_overrides: Vec<DurationOverride>,
}

impl Snapshot {
    /// Looks up a port by id.
    pub fn port(&self, id: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.id == id)
    }

    /// Looks up a route by id.
    pub fn route(&self, id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.id == id)
    }

    /// Known crossing duration for a port-name pair, if any.
    pub fn duration_override(&self, from_name: &str, to_name: &str) -> Option<i64> {
        self.duration_overrides
            .iter()
            .find(|o| o.from == from_name && o.to == to_name)
            .map(|o| o.minutes)
    }

    /// Derives route fields left at their zero defaults.
    ///
    /// Per route: distance via haversine over the endpoint coordinates,
    /// duration from distance at 25 km/h (minimum one hour), tier from
    /// duration, safety buffer from endpoint tide sensitivity (30 min if
    /// either endpoint is tide-sensitive, else 15), and a fallback window
    /// when none parsed. Routes referencing unknown ports are left as-is
    /// for validation to report.
    pub fn finalize(&mut self) {
        let ports = self.ports.clone();
        for route in &mut self.routes {
            let dep = ports.iter().find(|p| p.id == route.departure_port);
            let dest = ports.iter().find(|p| p.id == route.destination_port);
            let (Some(dep), Some(dest)) = (dep, dest) else {
                warn!(route = %route.id, "route references an unknown port; skipping derivation");
                continue;
            };

            if route.distance_km <= 0.0 {
                route.distance_km =
                    haversine_km(dep.latitude, dep.longitude, dest.latitude, dest.longitude);
            }
            if route.duration_min <= 0 {
                route.duration_min = ((route.distance_km / 25.0) * 60.0).round() as i64;
                route.duration_min = route.duration_min.max(60);
            }
            route.tier = ServiceTier::from_duration_min(route.duration_min);
            if route.safety_buffer_min <= 0 {
                route.safety_buffer_min = if dep.tide_sensitive || dest.tide_sensitive {
                    30
                } else {
                    15
                };
            }
            if route.windows.is_empty() {
                warn!(route = %route.id, "route has no usable departure windows; using default");
                route.windows.push(DepartureWindow::default_window());
            }
        }
    }

    /// Adds the reverse of every route that lacks one.
    ///
    /// Reverse routes copy the forward route's windows and fare; derived
    /// fields are recomputed by the next `finalize` (the buffer is
    /// symmetric, the tier follows from the same duration).
    pub fn add_reverse_routes(&mut self) {
        let existing: Vec<(String, String)> = self
            .routes
            .iter()
            .map(|r| (r.departure_port.clone(), r.destination_port.clone()))
            .collect();

        let mut reversed = Vec::new();
        for route in &self.routes {
            let pair = (route.destination_port.clone(), route.departure_port.clone());
            if existing.contains(&pair) {
                continue;
            }
            let mut rev = Route::new(
                format!("{}-rev", route.id),
                route.destination_port.clone(),
                route.departure_port.clone(),
            )
            .with_distance_km(route.distance_km)
            .with_duration_min(route.duration_min)
            .with_base_fare(route.base_fare);
            rev.windows = route.windows.clone();
            reversed.push(rev);
        }
        self.routes.extend(reversed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hm;

    fn two_port_snapshot() -> Snapshot {
        Snapshot {
            ports: vec![
                Port::new("suva", "Suva", -18.1416, 178.4419),
                Port::new("levuka", "Levuka", -17.6836, 178.8333).tide_sensitive(),
            ],
            ferries: vec![Ferry::new("f1", "MV Test", 100)],
            routes: vec![Route::new("suva-levuka", "suva", "levuka")],
            ..Snapshot::default()
        }
    }

    #[test]
    fn test_finalize_derives_fields() {
        let mut s = two_port_snapshot();
        s.finalize();
        let r = s.route("suva-levuka").unwrap();
        assert!(r.distance_km > 50.0 && r.distance_km < 80.0, "{}", r.distance_km);
        assert!(r.duration_min >= 60);
        assert_eq!(r.safety_buffer_min, 30); // Levuka is tide-sensitive
        assert_eq!(r.windows.len(), 1); // fallback window
    }

    #[test]
    fn test_finalize_respects_overrides() {
        let mut s = two_port_snapshot();
        s.routes[0] = Route::new("suva-levuka", "suva", "levuka")
            .with_distance_km(62.0)
            .with_duration_min(150)
            .with_window("06:00-08:00")
            .unwrap();
        s.finalize();
        let r = s.route("suva-levuka").unwrap();
        assert_eq!(r.distance_km, 62.0);
        assert_eq!(r.duration_min, 150);
        assert_eq!(r.tier, ServiceTier::Major);
        assert_eq!(r.windows[0].start, hm(6, 0));
    }

    #[test]
    fn test_add_reverse_routes() {
        let mut s = two_port_snapshot();
        s.finalize();
        s.add_reverse_routes();
        assert_eq!(s.routes.len(), 2);
        let rev = s.route("suva-levuka-rev").unwrap();
        assert_eq!(rev.departure_port, "levuka");
        assert_eq!(rev.destination_port, "suva");
        // Idempotent: reverse already exists now.
        s.add_reverse_routes();
        assert_eq!(s.routes.len(), 2);
    }

    #[test]
    fn test_duration_override_lookup() {
        let mut s = two_port_snapshot();
        s.duration_overrides.push(DurationOverride {
            from: "Suva".into(),
            to: "Levuka".into(),
            minutes: 150,
        });
        assert_eq!(s.duration_override("Suva", "Levuka"), Some(150));
        assert_eq!(s.duration_override("Levuka", "Suva"), None);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut s = two_port_snapshot();
        s.finalize();
        let json = serde_json::to_string(&s).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ports.len(), 2);
        assert_eq!(back.routes[0].windows, s.routes[0].windows);
    }
}
