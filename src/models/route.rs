//! Route model and service tiers.
//!
//! A route is a directional (departure, destination) port pair; routes form
//! a directed graph over the network. The service tier — derived from the
//! estimated crossing duration — drives the minimum weekly service quota
//! and the weekdays targeted by generation.

use serde::{Deserialize, Serialize};

use super::window::windows_lenient;
use super::DepartureWindow;

/// Classification of a route by crossing duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    /// Short crossing (≤ 2.5 h): daily service, twice a day where possible.
    Major,
    /// Medium crossing (≤ 4 h): every other day.
    Regional,
    /// Long crossing: a few sailings a week.
    #[default]
    Remote,
}

impl ServiceTier {
    /// Derives the tier from an estimated crossing duration (minutes).
    pub fn from_duration_min(minutes: i64) -> Self {
        if minutes <= 150 {
            Self::Major
        } else if minutes <= 240 {
            Self::Regional
        } else {
            Self::Remote
        }
    }

    /// Minimum services required per week.
    pub fn min_weekly_services(self) -> u32 {
        match self {
            Self::Major => 14,
            Self::Regional => 7,
            Self::Remote => 3,
        }
    }

    /// Weekdays targeted by generation (0 = Monday .. 6 = Sunday).
    pub fn target_weekdays(self) -> &'static [u32] {
        match self {
            Self::Major => &[0, 1, 2, 3, 4, 5, 6],
            Self::Regional => &[0, 2, 4, 6],
            Self::Remote => &[0, 3, 6],
        }
    }
}

/// A directional sailing route between two ports.
///
/// `distance_km`, `duration_min`, `tier`, and `safety_buffer_min` may be
/// left at zero/default in data files; `Snapshot::finalize` derives them
/// from port coordinates and tide sensitivity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// Unique route identifier.
    pub id: String,
    /// Departure port id.
    pub departure_port: String,
    /// Destination port id (must differ from departure).
    pub destination_port: String,
    /// Crossing distance (km); 0 = derive via haversine.
    #[serde(default)]
    pub distance_km: f64,
    /// Estimated crossing duration (minutes); 0 = derive from distance.
    #[serde(default)]
    pub duration_min: i64,
    /// Base adult fare.
    #[serde(default)]
    pub base_fare: f64,
    /// Service tier; derived from `duration_min` at finalize.
    #[serde(default)]
    pub tier: ServiceTier,
    /// Preferred departure windows, in order of preference.
    #[serde(default, deserialize_with = "windows_lenient")]
    pub windows: Vec<DepartureWindow>,
    /// Extra minutes added to the estimated arrival; 0 = derive from
    /// endpoint tide sensitivity (30 tide-sensitive, else 15).
    #[serde(default)]
    pub safety_buffer_min: i64,
}

impl Route {
    /// Creates a route between two ports; derived fields are filled in
    /// by `Snapshot::finalize`.
    pub fn new(
        id: impl Into<String>,
        departure_port: impl Into<String>,
        destination_port: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            departure_port: departure_port.into(),
            destination_port: destination_port.into(),
            distance_km: 0.0,
            duration_min: 0,
            base_fare: 0.0,
            tier: ServiceTier::Remote,
            windows: Vec::new(),
            safety_buffer_min: 0,
        }
    }

    /// Overrides the derived distance.
    pub fn with_distance_km(mut self, km: f64) -> Self {
        self.distance_km = km;
        self
    }

    /// Overrides the derived duration (minutes).
    pub fn with_duration_min(mut self, minutes: i64) -> Self {
        self.duration_min = minutes;
        self
    }

    /// Sets the base fare.
    pub fn with_base_fare(mut self, fare: f64) -> Self {
        self.base_fare = fare;
        self
    }

    /// Adds a preferred departure window from a `"HH:MM-HH:MM"` string.
    pub fn with_window(mut self, window: &str) -> Result<Self, super::WindowParseError> {
        self.windows.push(window.parse()?);
        Ok(self)
    }

    /// Adds a preferred departure window.
    pub fn with_window_times(mut self, window: DepartureWindow) -> Self {
        self.windows.push(window);
        self
    }
}
